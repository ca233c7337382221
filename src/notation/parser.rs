//! Lenient reader for Links notation

use super::value::NotationValue;

/// Parse result carrying both values and dropped tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Values read from the input
    pub values: Vec<NotationValue>,
    /// Raw tokens that failed integer parsing and were dropped
    pub skipped: Vec<String>,
}

impl ParseReport {
    /// True if nothing was dropped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Parse notation text into a sequence of values.
///
/// Malformed tokens are dropped without failing the parse; use
/// [`parse_report`] to observe them. The labeled write form is not read
/// back: a `label:` token is not an integer, so it is dropped and only the
/// sequence elements survive.
pub fn parse(notation: &str) -> Vec<NotationValue> {
    parse_report(notation).values
}

/// Parse notation text, recording every dropped token.
pub fn parse_report(notation: &str) -> ParseReport {
    let mut report = ParseReport::default();
    let trimmed = notation.trim();
    // One outer paren pair wraps the whole input; strip it before scanning.
    let inner = if trimmed.starts_with('(') && trimmed.ends_with(')') {
        trimmed[1..trimmed.len() - 1].trim()
    } else {
        trimmed
    };
    scan(inner, &mut report.values, &mut report.skipped);
    report
}

/// Single left-to-right scan with a paren-depth counter and a token buffer.
///
/// A balanced `(...)` group at depth 0 is accumulated whole, then its inner
/// content is scanned recursively into one nested list. A space at depth 0
/// flushes the pending buffer as one token. A stray `)` at depth 0 stays in
/// the buffer and falls out through the token rule.
fn scan(input: &str, values: &mut Vec<NotationValue>, skipped: &mut Vec<String>) {
    let mut depth = 0usize;
    let mut buffer = String::new();

    for ch in input.chars() {
        match ch {
            '(' => {
                // A token glued to an opening paren is flushed first so the
                // group always starts at its own paren.
                if depth == 0 {
                    flush(&mut buffer, values, skipped);
                }
                depth += 1;
                buffer.push(ch);
            }
            ')' if depth > 0 => {
                depth -= 1;
                buffer.push(ch);
                if depth == 0 {
                    let inner = buffer[1..buffer.len() - 1].trim();
                    let mut nested = Vec::new();
                    scan(inner, &mut nested, skipped);
                    values.push(NotationValue::List(nested));
                    buffer.clear();
                }
            }
            ' ' if depth == 0 => flush(&mut buffer, values, skipped),
            _ => buffer.push(ch),
        }
    }

    // End of input: an unterminated group degrades to a token and is
    // dropped by the integer rule, same as any other malformed text.
    flush(&mut buffer, values, skipped);
}

fn flush(buffer: &mut String, values: &mut Vec<NotationValue>, skipped: &mut Vec<String>) {
    let token = buffer.trim();
    if !token.is_empty() {
        match token.parse::<i64>() {
            Ok(n) => values.push(NotationValue::Atom(n)),
            Err(_) => {
                tracing::warn!(token, "dropping unparseable notation token");
                skipped.push(token.to_string());
            }
        }
    }
    buffer.clear();
}
