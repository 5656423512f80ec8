//! Regex-based tag/attribute classifier for markup.
//!
//! Scans for `<...>` regions and decomposes each one into delimiter,
//! name/value and bare-token spans; everything outside tag regions is plain
//! text. The scan carries its offset as explicit local state, including the
//! nested attribute sub-scans, so there is no shared matcher position to
//! corrupt between passes.
//!
//! Degradation policy: an unterminated `<` never forms a region and is
//! absorbed into the trailing plain span; attribute values must be
//! double-quoted, anything else leaves the name as a bare token and the
//! would-be value in a structural residue span. No input makes this fail.

use regex::Regex;
use std::sync::OnceLock;

use crate::span::{Span, SpanKind};

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]+>").expect("invalid tag regex"))
}

fn attr_regex() -> &'static Regex {
    static ATTR: OnceLock<Regex> = OnceLock::new();
    ATTR.get_or_init(|| Regex::new(r#"(\w+)=("[^"]*")|(\w+)"#).expect("invalid attribute regex"))
}

fn declaration_attr_regex() -> &'static Regex {
    static DECL_ATTR: OnceLock<Regex> = OnceLock::new();
    DECL_ATTR
        .get_or_init(|| Regex::new(r#"(\w+)=("[^"]*")"#).expect("invalid declaration regex"))
}

/// Classify markup into presentational spans.
///
/// Never fails; spans are in input order and concatenate to the input.
pub fn markup_spans(input: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for m in tag_regex().find_iter(input) {
        if last < m.start() {
            spans.push(Span::new(SpanKind::Text, &input[last..m.start()]));
        }

        let tag = m.as_str();
        if tag.len() >= 4 && tag.starts_with("<?") && tag.ends_with("?>") {
            spans.push(Span::new(SpanKind::Structural, &tag[..2]));
            scan_declaration(&tag[2..tag.len() - 2], &mut spans);
            spans.push(Span::new(SpanKind::Structural, &tag[tag.len() - 2..]));
        } else {
            let (open, rest) = if tag.starts_with("</") {
                tag.split_at(2)
            } else {
                tag.split_at(1)
            };
            let (body, close) = if rest.ends_with("/>") {
                rest.split_at(rest.len() - 2)
            } else {
                rest.split_at(rest.len() - 1)
            };
            spans.push(Span::new(SpanKind::Structural, open));
            scan_tag_body(body, &mut spans);
            spans.push(Span::new(SpanKind::Structural, close));
        }

        last = m.end();
    }

    if last < input.len() {
        spans.push(Span::new(SpanKind::Text, &input[last..]));
    }

    spans
}

/// Emit gap content between attribute matches. Pure whitespace is plain;
/// anything else (declaration keywords, stray punctuation, unquoted value
/// residue) is treated as structural, matching how tag delimiters render.
fn push_gap<'a>(gap: &'a str, spans: &mut Vec<Span<'a>>) {
    let kind = if gap.trim().is_empty() {
        SpanKind::Text
    } else {
        SpanKind::Structural
    };
    spans.push(Span::new(kind, gap));
}

/// Sub-scan an ordinary tag interior: `name="value"` pairs or bare words
/// (tag names, boolean-style attributes), with gaps between matches
/// classified by [`push_gap`].
fn scan_tag_body<'a>(body: &'a str, spans: &mut Vec<Span<'a>>) {
    let mut last = 0;
    for caps in attr_regex().captures_iter(body) {
        let m = caps.get(0).expect("match group 0 always present");
        if last < m.start() {
            push_gap(&body[last..m.start()], spans);
        }

        match (caps.get(1), caps.get(2), caps.get(3)) {
            (Some(name), Some(value), _) => {
                spans.push(Span::new(SpanKind::AttrName, name.as_str()));
                spans.push(Span::new(SpanKind::Text, &body[name.end()..value.start()]));
                spans.push(Span::new(SpanKind::AttrValue, value.as_str()));
            }
            (_, _, Some(word)) => {
                spans.push(Span::new(SpanKind::Structural, word.as_str()));
            }
            _ => unreachable!("attribute regex always fills a capture group"),
        }

        last = m.end();
    }
    if last < body.len() {
        push_gap(&body[last..], spans);
    }
}

/// Sub-scan a processing-instruction interior. Only `name="value"` pairs
/// are recognized; declaration keywords like `xml` land in the gaps and
/// classify as structural via [`push_gap`].
fn scan_declaration<'a>(body: &'a str, spans: &mut Vec<Span<'a>>) {
    let mut last = 0;
    for caps in declaration_attr_regex().captures_iter(body) {
        let m = caps.get(0).expect("match group 0 always present");
        if last < m.start() {
            push_gap(&body[last..m.start()], spans);
        }

        let name = caps.get(1).expect("name group present on match");
        let value = caps.get(2).expect("value group present on match");
        spans.push(Span::new(SpanKind::AttrName, name.as_str()));
        spans.push(Span::new(SpanKind::Text, &body[name.end()..value.start()]));
        spans.push(Span::new(SpanKind::AttrValue, value.as_str()));

        last = m.end();
    }
    if last < body.len() {
        push_gap(&body[last..], spans);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::reconstruct;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn span(kind: SpanKind, text: &str) -> Span<'_> {
        Span::new(kind, text)
    }

    #[test]
    fn self_closing_tag_decomposes_fully() {
        let spans = markup_spans(r#"<tag attr="v"/>"#);
        assert_eq!(
            spans,
            vec![
                span(SpanKind::Structural, "<"),
                span(SpanKind::Structural, "tag"),
                span(SpanKind::Text, " "),
                span(SpanKind::AttrName, "attr"),
                span(SpanKind::Text, "="),
                span(SpanKind::AttrValue, "\"v\""),
                span(SpanKind::Structural, "/>"),
            ]
        );
    }

    #[test]
    fn closing_tag_keeps_its_slash_in_the_delimiter() {
        let spans = markup_spans("</a>");
        assert_eq!(
            spans,
            vec![
                span(SpanKind::Structural, "</"),
                span(SpanKind::Structural, "a"),
                span(SpanKind::Structural, ">"),
            ]
        );
    }

    #[test]
    fn text_between_tags_is_plain() {
        let spans = markup_spans("<b>1</b>");
        assert_eq!(
            spans,
            vec![
                span(SpanKind::Structural, "<"),
                span(SpanKind::Structural, "b"),
                span(SpanKind::Structural, ">"),
                span(SpanKind::Text, "1"),
                span(SpanKind::Structural, "</"),
                span(SpanKind::Structural, "b"),
                span(SpanKind::Structural, ">"),
            ]
        );
    }

    #[test]
    fn processing_instruction_decomposes_attributes() {
        let spans = markup_spans(r#"<?xml version="1.0"?>"#);
        assert_eq!(
            spans,
            vec![
                span(SpanKind::Structural, "<?"),
                span(SpanKind::Structural, "xml "),
                span(SpanKind::AttrName, "version"),
                span(SpanKind::Text, "="),
                span(SpanKind::AttrValue, "\"1.0\""),
                span(SpanKind::Structural, "?>"),
            ]
        );
    }

    #[test]
    fn declaration_keyword_gap_is_structural_not_plain() {
        // The keyword between the PI delimiter and the first attribute has
        // no match of its own; it must still style like the delimiters.
        let spans = markup_spans(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        let keyword = spans
            .iter()
            .find(|s| s.text.starts_with("xml"))
            .expect("keyword gap span present");
        assert_eq!(keyword.kind, SpanKind::Structural);
        // Whitespace-only gaps stay plain.
        assert!(
            spans
                .iter()
                .any(|s| s.kind == SpanKind::Text && s.text == " ")
        );
    }

    #[test]
    fn boolean_attribute_is_a_bare_token() {
        let spans = markup_spans("<input disabled>");
        assert_eq!(
            spans,
            vec![
                span(SpanKind::Structural, "<"),
                span(SpanKind::Structural, "input"),
                span(SpanKind::Text, " "),
                span(SpanKind::Structural, "disabled"),
                span(SpanKind::Structural, ">"),
            ]
        );
    }

    #[test]
    fn single_quoted_value_falls_through_to_bare_tokens() {
        let spans = markup_spans("<a href='x'>");
        // `href` is recognized as a bare token only; the `='` residue is a
        // non-whitespace gap and styles structurally.
        assert!(
            spans
                .iter()
                .any(|s| s.kind == SpanKind::Structural && s.text == "href")
        );
        assert!(
            spans
                .iter()
                .any(|s| s.kind == SpanKind::Structural && s.text.contains('\''))
        );
        assert!(!spans.iter().any(|s| s.kind == SpanKind::AttrValue));
        assert_eq!(reconstruct(&spans), "<a href='x'>");
    }

    #[test]
    fn unterminated_tag_is_absorbed_into_trailing_text() {
        let spans = markup_spans("before <unclosed attr=\"v\"");
        assert_eq!(
            spans,
            vec![span(SpanKind::Text, "before <unclosed attr=\"v\"")]
        );
    }

    #[test]
    fn attribute_value_keeps_its_quotes() {
        let spans = markup_spans(r#"<a href="https://example.com?q=1&p=2">"#);
        assert!(
            spans
                .iter()
                .any(|s| s.kind == SpanKind::AttrValue
                    && s.text == "\"https://example.com?q=1&p=2\"")
        );
    }

    #[rstest]
    #[case("<a><b>1</b><c/></a>")]
    #[case(r#"<?xml version="1.0" encoding="UTF-8"?><root attr="v" flag>text</root>"#)]
    #[case("no tags at all")]
    #[case("<a href='single'>mixed \"quotes\"</a>")]
    #[case("dangling < bracket")]
    #[case("")]
    fn spans_reconstruct_input(#[case] input: &str) {
        assert_eq!(reconstruct(&markup_spans(input)), input);
    }
}
