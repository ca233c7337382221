//! Notation renderers

use super::value::NotationValue;

/// Render a sequence of values as notation text.
///
/// The whole sequence is wrapped in one outer paren pair and every nested
/// list adds exactly one more, so [`super::parse`] reads the result back
/// unchanged for label-free values.
pub fn to_notation(values: &[NotationValue]) -> String {
    format!("({})", join(values))
}

/// Render labeled entries as the reference form, e.g. `((1: 1 (2: 5 6) 3 4))`.
///
/// Entries render in map order. A list value becomes `(label: elements)`.
/// A labeled value is a nested map: it flattens inline under its own label
/// and the outer label is dropped. An atom renders as its bare number,
/// label dropped. This form is write-only; the parser drops `label:`
/// tokens on the way back in.
pub fn to_notation_with_refs(entries: &[(String, NotationValue)]) -> String {
    let parts: Vec<String> = entries
        .iter()
        .map(|(label, value)| render_entry(label, value))
        .collect();
    format!("({})", parts.join(" "))
}

fn render_entry(label: &str, value: &NotationValue) -> String {
    match value {
        NotationValue::Atom(n) => n.to_string(),
        NotationValue::List(items) => format!("({label}: {})", join(items)),
        NotationValue::Labeled { label: inner, items } => format!("({inner}: {})", join(items)),
    }
}

fn join(values: &[NotationValue]) -> String {
    values.iter().map(render).collect::<Vec<_>>().join(" ")
}

fn render(value: &NotationValue) -> String {
    match value {
        NotationValue::Atom(n) => n.to_string(),
        NotationValue::List(items) => format!("({})", join(items)),
        NotationValue::Labeled { label, items } => format!("({label}: {})", join(items)),
    }
}
