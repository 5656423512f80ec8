//! Depth-tracking re-indentation of tag markup.
//!
//! [`reflow`] takes tag soup that is assumed to be well formed, puts every
//! structural unit on its own line, and indents each line by 4 spaces per
//! nesting level. Nesting is estimated with a running depth counter, not a
//! parse tree: closing tags decrement before emission, bare opening tags
//! increment after. The counter is clamped at zero, so unbalanced input
//! degrades to locally sensible output instead of failing.
//!
//! This is a formatter, not a validator. Comments and processing
//! instructions are classified by the same shape predicates as ordinary
//! tags; neither matches an opening or closing shape, so they pass through
//! at the current depth.

use regex::Regex;
use std::sync::OnceLock;

const INDENT: &str = "    ";

/// Shape of a single reflowed line.
///
/// Variants are tried in declaration order and the first match wins, so a
/// line that could satisfy several shape predicates (for example a
/// self-closing tag that also looks inline-complete) gets exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `</name ...>` — decrements depth before the line is emitted.
    Closing,
    /// Ends in `/>` — no depth change.
    SelfClosing,
    /// Opens, holds content, and closes on one line — no depth change.
    InlineComplete,
    /// `<name ...>` with no inline close — increments depth after emission.
    Opening,
    /// Anything else: text content, comments, processing instructions.
    Other,
}

/// Classify one trimmed line by shape, first match wins.
pub fn classify_line(line: &str) -> LineKind {
    static CLOSING: OnceLock<Regex> = OnceLock::new();
    static SELF_CLOSING: OnceLock<Regex> = OnceLock::new();
    static INLINE_COMPLETE: OnceLock<Regex> = OnceLock::new();
    static OPENING: OnceLock<Regex> = OnceLock::new();

    let closing = CLOSING.get_or_init(|| Regex::new(r"^</\w").expect("invalid closing regex"));
    let self_closing =
        SELF_CLOSING.get_or_init(|| Regex::new(r"/>$").expect("invalid self-closing regex"));
    let inline_complete = INLINE_COMPLETE
        .get_or_init(|| Regex::new(r"^<\w[^>]*>.*</\w[^>]*>$").expect("invalid inline regex"));
    let opening = OPENING.get_or_init(|| Regex::new(r"^<\w").expect("invalid opening regex"));

    if closing.is_match(line) {
        LineKind::Closing
    } else if self_closing.is_match(line) {
        LineKind::SelfClosing
    } else if inline_complete.is_match(line) {
        LineKind::InlineComplete
    } else if opening.is_match(line) {
        LineKind::Opening
    } else {
        LineKind::Other
    }
}

/// Re-derive line breaks and indentation from tag boundaries.
///
/// Formatting whitespace already present between tags is discarded, then a
/// newline is inserted at every `><` boundary and each resulting line is
/// indented by the current depth. Reflowing already-reflowed output is a
/// no-op.
pub fn reflow(input: &str) -> String {
    static MULTI_NEWLINE: OnceLock<Regex> = OnceLock::new();
    static INTER_TAG_WS: OnceLock<Regex> = OnceLock::new();

    let multi_newline =
        MULTI_NEWLINE.get_or_init(|| Regex::new(r"\n{2,}").expect("invalid newline regex"));
    let inter_tag_ws =
        INTER_TAG_WS.get_or_init(|| Regex::new(r">\s+<").expect("invalid inter-tag regex"));

    let normalized = multi_newline.replace_all(input, "\n");
    let trimmed = normalized.trim();
    let collapsed = inter_tag_ws.replace_all(trimmed, "><");
    let split = collapsed.replace("><", ">\n<");

    let mut depth: usize = 0;
    let mut out = String::new();

    for line in split.lines() {
        let line = line.trim();
        let kind = classify_line(line);

        if kind == LineKind::Closing {
            depth = depth.saturating_sub(1);
        }

        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push_str(line);
        out.push('\n');

        if kind == LineKind::Opening {
            depth += 1;
        }
    }

    out.trim().to_string()
}
