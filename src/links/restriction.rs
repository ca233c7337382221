//! Query restrictions over flat links

use super::link::{Link, LinkId};

/// Sentinel used by slice-encoded restrictions to mean "match anything"
pub const ANY: i64 = 0;

/// One restriction field: a wildcard or a concrete value
///
/// Slice restrictions encode the wildcard as 0, so a slice can never
/// require a literal 0. A backend that stores 0 and needs an exact match
/// must construct `Place::Value(0)` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Place {
    /// Matches any stored value
    Any,
    /// Matches exactly this value
    Value(i64),
}

impl Place {
    /// True if this field accepts `value`.
    pub fn matches(self, value: i64) -> bool {
        match self {
            Place::Any => true,
            Place::Value(expected) => expected == value,
        }
    }
}

impl From<i64> for Place {
    fn from(raw: i64) -> Self {
        if raw == ANY {
            Place::Any
        } else {
            Place::Value(raw)
        }
    }
}

/// Pattern over (id, source, target)
///
/// Arity follows the legacy slice encoding: one element filters by id,
/// two filter by (source, target), three or more filter by all three
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Restriction {
    /// Match every link
    #[default]
    All,
    /// Match by id
    Id(Place),
    /// Match by source and target
    Pair {
        /// Source field pattern
        source: Place,
        /// Target field pattern
        target: Place,
    },
    /// Match by id, source, and target
    Triple {
        /// Id field pattern
        id: Place,
        /// Source field pattern
        source: Place,
        /// Target field pattern
        target: Place,
    },
}

impl Restriction {
    /// Build a restriction from a legacy integer slice, 0 meaning Any.
    pub fn from_slice(raw: &[i64]) -> Self {
        match raw {
            [] => Restriction::All,
            [id] => Restriction::Id((*id).into()),
            [source, target] => Restriction::Pair {
                source: (*source).into(),
                target: (*target).into(),
            },
            [id, source, target, ..] => Restriction::Triple {
                id: (*id).into(),
                source: (*source).into(),
                target: (*target).into(),
            },
        }
    }

    /// Restriction pinning a single link by id.
    pub fn by_id(id: LinkId) -> Self {
        Restriction::Id(Place::Value(id))
    }

    /// Restriction over concrete source and target values.
    pub fn by_pair(source: i64, target: i64) -> Self {
        Restriction::Pair {
            source: Place::Value(source),
            target: Place::Value(target),
        }
    }

    /// True if `link` satisfies this pattern.
    pub fn matches(&self, link: &Link) -> bool {
        match *self {
            Restriction::All => true,
            Restriction::Id(id) => id.matches(link.id),
            Restriction::Pair { source, target } => {
                source.matches(link.source) && target.matches(link.target)
            }
            Restriction::Triple { id, source, target } => {
                id.matches(link.id) && source.matches(link.source) && target.matches(link.target)
            }
        }
    }

    /// True for the unrestricted pattern.
    pub fn is_all(&self) -> bool {
        matches!(self, Restriction::All)
    }
}
