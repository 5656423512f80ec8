//! # toolbelt-syntax
//!
//! Lossless span classification and tag-soup reflow: the formatting core
//! behind the `json` and `xml` tools.
//!
//! ## The Lossless Guarantee
//!
//! The most important property of both highlighters is that **every byte of
//! the input appears in exactly one span**. Nothing is skipped or rewritten,
//! so a renderer can style each span independently and concatenate them to
//! display the original text:
//!
//! ```
//! use toolbelt_syntax::json_spans;
//!
//! let input = r#"{"name": "toolbelt", "count": 3}"#;
//! let spans = json_spans(input);
//!
//! // Concatenating all span texts gives back the original
//! let reconstructed: String = spans.iter().map(|s| s.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Two Independent Stages
//!
//! ```text
//! raw markup → reflow() → formatted markup → markup_spans() → styled spans
//! raw JSON   → (caller validates/prettifies) → json_spans() → styled spans
//! ```
//!
//! [`reflow`] re-derives line breaks and indentation from tag boundaries
//! using a running depth counter; it is a best-effort heuristic over
//! well-formed tag soup, not a parser, and it never fails. [`markup_spans`]
//! and [`json_spans`] classify text for presentation only; they never fail
//! either. Validating JSON before display is the caller's job (the engine
//! crate's prettifier does exactly that).
//!
//! ## Module Structure
//!
//! ```text
//! toolbelt-syntax/
//! ├── lib.rs      # Public API
//! ├── span.rs     # Span and SpanKind types
//! ├── reflow.rs   # Depth-tracking re-indentation of tag markup
//! ├── json.rs     # Logos-based JSON token classifier
//! └── markup.rs   # Regex-based tag/attribute classifier
//! ```

pub mod json;
pub mod markup;
pub mod reflow;
pub mod span;

pub use json::json_spans;
pub use markup::markup_spans;
pub use reflow::reflow;
pub use span::{Span, SpanKind};
