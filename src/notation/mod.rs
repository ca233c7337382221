//! Links notation: parenthesized text for nested link structures
//!
//! Plain form: `(a1 a2 ...)` where each element is an integer or a nested
//! parenthesized list, space-separated, unbounded depth. The labeled form
//! `(label: a1 a2 ...)` is write-only: the serializer produces it but the
//! parser drops `label:` tokens.

mod parser;
mod render;
mod value;

pub use parser::{parse, parse_report, ParseReport};
pub use render::{to_notation, to_notation_with_refs};
pub use value::NotationValue;
