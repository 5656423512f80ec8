//! JSON prettification with 4-space indentation.
//!
//! This is the one diagnostic-producing path in the workspace: invalid
//! input surfaces the parser's message and produces no partial output. The
//! highlighter in `toolbelt-syntax` runs on the prettified text afterwards.

use serde::Serialize;

pub fn prettify_json(input: &str) -> Result<String, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(out).expect("serde_json emits UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn objects_indent_by_four_spaces() {
        let out = prettify_json(r#"{"a":{"b":[1,2]}}"#).unwrap();
        assert_eq!(
            out,
            "{\n    \"a\": {\n        \"b\": [\n            1,\n            2\n        ]\n    }\n}"
        );
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(prettify_json("42").unwrap(), "42");
        assert_eq!(prettify_json("\"x\"").unwrap(), "\"x\"");
        assert_eq!(prettify_json("null").unwrap(), "null");
    }

    #[test]
    fn invalid_json_reports_the_parse_error() {
        let err = prettify_json("{\"a\": }").unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn prettify_is_idempotent() {
        let once = prettify_json(r#"{"list":[true,null,1.5],"s":"v"}"#).unwrap();
        let twice = prettify_json(&once).unwrap();
        assert_eq!(once, twice);
    }
}
