//! Span and SpanKind: the classified-substring model shared by both
//! highlighters.
//!
//! A span is a contiguous labeled substring used purely for presentational
//! classification. Spans borrow from the input, are emitted in input order,
//! are never empty, and concatenate back to the input exactly.

/// Presentational category of a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Unclassified text: content between tags, whitespace, punctuation.
    Text,
    /// Structural markup: tag delimiters, tag names, declaration keywords,
    /// bare (valueless) attribute tokens.
    Structural,
    /// A quoted string in key position (followed by a colon).
    Key,
    /// A quoted string in value position.
    Str,
    /// `true` or `false`.
    Bool,
    /// `null`.
    Null,
    /// A numeric literal.
    Number,
    /// An attribute name inside a tag.
    AttrName,
    /// A double-quoted attribute value, quotes included.
    AttrValue,
}

/// A classified substring of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub kind: SpanKind,
    pub text: &'a str,
}

impl<'a> Span<'a> {
    pub fn new(kind: SpanKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

/// Concatenate span texts back into a string.
///
/// For any input, `reconstruct(&json_spans(input)) == input` and likewise
/// for [`markup_spans`](crate::markup_spans).
pub fn reconstruct(spans: &[Span<'_>]) -> String {
    spans.iter().map(|s| s.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reconstruct_concatenates_in_order() {
        let spans = vec![
            Span::new(SpanKind::Structural, "<"),
            Span::new(SpanKind::Structural, "a"),
            Span::new(SpanKind::Structural, ">"),
            Span::new(SpanKind::Text, "hi"),
        ];
        assert_eq!(reconstruct(&spans), "<a>hi");
    }
}
