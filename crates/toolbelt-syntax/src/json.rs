//! Logos-based JSON token classifier.
//!
//! Tokenizes JSON text into classified spans for presentation. Like the
//! markup variant, this is display-only: it does not validate, and every
//! byte of the input lands in exactly one span. Callers that want a
//! diagnostic for invalid JSON validate first (see the engine crate's
//! prettifier) and only highlight text that parsed.
//!
//! Classification is positional for strings: a quoted token whose next
//! non-whitespace token is a colon sits in key position and is classified
//! [`SpanKind::Key`]; every other quoted token is a string literal. The
//! colon itself stays unclassified. Booleans, `null` and numbers get their
//! own categories; everything else (punctuation, whitespace, bytes the
//! lexer does not recognize) is plain text, with adjacent plain tokens
//! merged so each gap between literals is a single span.

use logos::Logos;

use crate::span::{Span, SpanKind};

/// Token kinds produced by the Logos lexer.
///
/// Unrecognized input surfaces as a lexer error rather than a variant and
/// is treated as plain text, so lexing never fails.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum JsonToken {
    /// A double-quoted string with JSON escapes.
    #[regex(r#""(\\u[0-9a-fA-F]{4}|\\[^u]|[^\\"])*""#)]
    Str,

    /// Numeric literal: optional sign, integer part, optional fraction,
    /// optional exponent.
    #[regex(r"-?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    Number,

    #[token("true")]
    True,

    #[token("false")]
    False,

    #[token("null")]
    Null,

    #[token(":")]
    Colon,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Structural punctuation, left unclassified for display.
    #[regex(r"[{}\[\],]")]
    Punct,
}

/// Classify JSON text into presentational spans.
///
/// Never fails; spans are in input order and concatenate to the input.
pub fn json_spans(input: &str) -> Vec<Span<'_>> {
    // First pass: collect tokens with their byte ranges. The key/value
    // decision needs one token of lookahead past whitespace, which is
    // easiest over a complete token list.
    let mut tokens: Vec<(Result<JsonToken, ()>, std::ops::Range<usize>)> = Vec::new();
    let mut lexer = JsonToken::lexer(input);
    while let Some(result) = lexer.next() {
        tokens.push((result, lexer.span()));
    }

    let mut spans: Vec<(SpanKind, std::ops::Range<usize>)> = Vec::new();
    for (i, (token, range)) in tokens.iter().enumerate() {
        let kind = match token {
            Ok(JsonToken::Str) => {
                if colon_follows(&tokens, i) {
                    SpanKind::Key
                } else {
                    SpanKind::Str
                }
            }
            Ok(JsonToken::True | JsonToken::False) => SpanKind::Bool,
            Ok(JsonToken::Null) => SpanKind::Null,
            Ok(JsonToken::Number) => SpanKind::Number,
            Ok(JsonToken::Colon | JsonToken::Whitespace | JsonToken::Punct) | Err(()) => {
                SpanKind::Text
            }
        };

        // Merge runs of plain tokens into one span per gap.
        match spans.last_mut() {
            Some((SpanKind::Text, last)) if kind == SpanKind::Text && last.end == range.start => {
                last.end = range.end;
            }
            _ => spans.push((kind, range.clone())),
        }
    }

    spans
        .into_iter()
        .map(|(kind, range)| Span::new(kind, &input[range]))
        .collect()
}

/// True when the next non-whitespace token after `i` is a colon.
fn colon_follows(tokens: &[(Result<JsonToken, ()>, std::ops::Range<usize>)], i: usize) -> bool {
    tokens[i + 1..]
        .iter()
        .map(|(token, _)| token)
        .find(|token| !matches!(token, Ok(JsonToken::Whitespace)))
        .is_some_and(|token| matches!(token, Ok(JsonToken::Colon)))
}
