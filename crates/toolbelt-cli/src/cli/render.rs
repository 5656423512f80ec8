//! ANSI rendering of classified spans.
//!
//! Each span category maps to one crossterm style; unstyled spans pass
//! through untouched so plain rendering is byte-identical to the input.

use crossterm::style::{Attribute, Color, Stylize};
use std::io::IsTerminal;
use toolbelt_config::ColorMode;
use toolbelt_syntax::{Span, SpanKind};

pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

pub fn render(spans: &[Span<'_>], color: bool) -> String {
    if !color {
        return spans.iter().map(|s| s.text).collect();
    }

    let mut out = String::new();
    for span in spans {
        match span.kind {
            SpanKind::Text => out.push_str(span.text),
            SpanKind::Structural => out.push_str(
                &span
                    .text
                    .with(Color::DarkRed)
                    .attribute(Attribute::Bold)
                    .to_string(),
            ),
            SpanKind::Key => out.push_str(
                &span
                    .text
                    .with(Color::DarkRed)
                    .attribute(Attribute::Bold)
                    .to_string(),
            ),
            SpanKind::Str | SpanKind::AttrName => {
                out.push_str(&span.text.with(Color::Magenta).to_string());
            }
            SpanKind::AttrValue => out.push_str(&span.text.with(Color::Green).to_string()),
            SpanKind::Bool => out.push_str(&span.text.with(Color::Yellow).to_string()),
            SpanKind::Null => out.push_str(
                &span
                    .text
                    .with(Color::Grey)
                    .attribute(Attribute::Italic)
                    .to_string(),
            ),
            SpanKind::Number => out.push_str(&span.text.with(Color::DarkMagenta).to_string()),
        }
    }
    out
}
