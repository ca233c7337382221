//! Link and change records

use serde::{Deserialize, Serialize};

/// Identifier of a stored link
///
/// Ids are positive integers issued by the store. They share one integer
/// space with source/target scalars, so a link can point at another link
/// simply by carrying its id.
pub type LinkId = i64;

/// A stored link: an (id, source, target) triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Store-issued identifier
    pub id: LinkId,
    /// Source value: a scalar or another link's id
    pub source: i64,
    /// Target value: a scalar or another link's id
    pub target: i64,
}

impl Link {
    /// Create a link record.
    pub fn new(id: LinkId, source: i64, target: i64) -> Self {
        Self { id, source, target }
    }
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}: {} {})", self.id, self.source, self.target)
    }
}

/// Signal returned by an `each` visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    /// Keep visiting
    #[default]
    Continue,
    /// Stop the traversal early
    Break,
}

/// Before/after record handed to change handlers
///
/// create yields (None, new); update yields (old, new); delete yields
/// (old, None).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// State before the operation, if the link existed
    pub before: Option<Link>,
    /// State after the operation, if the link survives
    pub after: Option<Link>,
}

impl Change {
    /// Change record for a freshly created link.
    pub fn created(after: Link) -> Self {
        Self {
            before: None,
            after: Some(after),
        }
    }

    /// Change record for an updated link.
    pub fn updated(before: Link, after: Link) -> Self {
        Self {
            before: Some(before),
            after: Some(after),
        }
    }

    /// Change record for a deleted link.
    pub fn deleted(before: Link) -> Self {
        Self {
            before: Some(before),
            after: None,
        }
    }
}
