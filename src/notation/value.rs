//! Notation values

use serde::{Deserialize, Serialize};

/// One node of a notation tree
///
/// The JSON form mirrors the host structures the notation describes: an
/// atom is a bare number, a list is an array, a labeled list is an object
/// with `label` and `items` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotationValue {
    /// Integer literal
    Atom(i64),
    /// Ordered sequence, one paren pair per nesting level
    List(Vec<NotationValue>),
    /// Named sequence, rendered as `(label: ...)`
    Labeled {
        /// Reference name
        label: String,
        /// Ordered sequence the label binds to
        items: Vec<NotationValue>,
    },
}

impl NotationValue {
    /// Shorthand for a list value.
    pub fn list(items: impl Into<Vec<NotationValue>>) -> Self {
        NotationValue::List(items.into())
    }

    /// Shorthand for a labeled value.
    pub fn labeled(label: impl Into<String>, items: impl Into<Vec<NotationValue>>) -> Self {
        NotationValue::Labeled {
            label: label.into(),
            items: items.into(),
        }
    }

    /// True for labeled values.
    pub fn is_labeled(&self) -> bool {
        matches!(self, NotationValue::Labeled { .. })
    }
}

impl From<i64> for NotationValue {
    fn from(n: i64) -> Self {
        NotationValue::Atom(n)
    }
}
