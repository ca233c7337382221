//! Recursive builder over the flat link API
//!
//! Converts nested values into flat link sets and back (lossily):
//!
//! - `[[1, 2], [3, 4]]` becomes two links, `(1 2)` and `(3 4)`.
//! - `{"1": [1, {"2": [5, 6]}, 3, 4]}` becomes a base pair for `"2"` plus a
//!   left-associated chain of binary links encoding the outer sequence.

use std::collections::HashSet;

use crate::links::{Flow, LinkId, Links, LinksError, LinksResult, Restriction};
use crate::notation::NotationValue;
use crate::store::LinkStore;

/// Base for ids handed out by `next_temp_id`, kept clear of user ids.
const TEMP_ID_BASE: LinkId = 1_000_000;

/// Insertion-ordered label to link-id map produced by labeled builds
///
/// Transient and caller-owned; nothing here is persisted. Re-inserting a
/// label replaces its id in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceMap {
    entries: Vec<(String, LinkId)>,
}

impl ReferenceMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a label, replacing any previous binding.
    pub fn insert(&mut self, label: impl Into<String>, id: LinkId) {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = id,
            None => self.entries.push((label, id)),
        }
    }

    /// Look up a label.
    pub fn get(&self, label: &str) -> Option<LinkId> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, id)| *id)
    }

    /// Id recorded first, if any.
    pub fn first(&self) -> Option<LinkId> {
        self.entries.first().map(|(_, id)| *id)
    }

    /// Fold another map's entries into this one.
    pub fn merge(&mut self, other: ReferenceMap) {
        for (label, id) in other.entries {
            self.insert(label, id);
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, LinkId)> {
        self.entries.iter().map(|(l, id)| (l.as_str(), *id))
    }

    /// Number of recorded labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no labels are recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Recursive wrapper over [`Links`] for nested structures
///
/// Owns its temp-id counter; concurrent instances sharing a store need
/// external coordination.
#[derive(Debug)]
pub struct RecursiveLinks<S: LinkStore> {
    links: Links<S>,
    temp_id_counter: LinkId,
}

impl<S: LinkStore> RecursiveLinks<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self {
            links: Links::new(store),
            temp_id_counter: TEMP_ID_BASE,
        }
    }

    /// Underlying flat API.
    pub fn links(&self) -> &Links<S> {
        &self.links
    }

    /// Underlying flat API, mutable.
    pub fn links_mut(&mut self) -> &mut Links<S> {
        &mut self.links
    }

    /// Reserve an id for wiring structures before they are persisted.
    ///
    /// Monotonic and owned by this instance; ids are never reused or reset.
    pub fn next_temp_id(&mut self) -> LinkId {
        let id = self.temp_id_counter;
        self.temp_id_counter += 1;
        id
    }

    /// Create one flat link per list element.
    ///
    /// Each element must be a list of at least two entries; its first two
    /// entries become source and target. An entry that is itself a list or
    /// a labeled value is persisted first, depth first, and its id takes
    /// its place. Non-list elements are skipped with a warning.
    pub fn create_from_nested_list(
        &mut self,
        items: &[NotationValue],
    ) -> LinksResult<Vec<LinkId>> {
        let mut ids = Vec::with_capacity(items.len());
        for item in items {
            match item {
                NotationValue::List(entries) => ids.push(self.create_pair(entries)?),
                other => {
                    tracing::warn!(item = ?other, "skipping non-list item in nested list");
                }
            }
        }
        Ok(ids)
    }

    /// Create links for labeled sequences, returning the reference map.
    ///
    /// Each entry whose value is a list becomes one sequence; its label
    /// maps to the sequence id. References created by nested labels are
    /// recorded too, in creation order. Non-list values are skipped with a
    /// warning.
    pub fn create_from_nested_dict(
        &mut self,
        entries: &[(String, NotationValue)],
    ) -> LinksResult<ReferenceMap> {
        let mut refs = ReferenceMap::new();
        for (label, value) in entries {
            match value {
                NotationValue::List(items) => {
                    let id = self.create_sequence(items, &mut refs)?;
                    refs.insert(label.clone(), id);
                }
                other => {
                    tracing::warn!(
                        label = label.as_str(),
                        value = ?other,
                        "skipping non-list value in nested dict"
                    );
                }
            }
        }
        Ok(refs)
    }

    /// Read matching links back as flat `[source, target]` pairs.
    ///
    /// Each distinct id contributes one pair, in first-seen enumeration
    /// order. This is a projection of the flat store, not a reconstruction
    /// of the nesting the builder consumed.
    pub fn read_as_nested_list(&self, restriction: &Restriction) -> LinksResult<Vec<[i64; 2]>> {
        let mut visited = HashSet::new();
        let mut result = Vec::new();
        self.links.each(restriction, |link| {
            if visited.insert(link.id) {
                result.push([link.source, link.target]);
            }
            Flow::Continue
        })?;
        Ok(result)
    }

    /// One link from the first two entries of a nested-list element.
    fn create_pair(&mut self, entries: &[NotationValue]) -> LinksResult<LinkId> {
        if entries.len() < 2 {
            return Err(LinksError::InvalidArgument(
                "list items must have at least 2 elements [source, target]".into(),
            ));
        }
        let source = self.resolve_endpoint(&entries[0])?;
        let target = self.resolve_endpoint(&entries[1])?;
        Ok(self.links.create(&[source, target])?)
    }

    /// Resolve a link endpoint to a scalar, persisting nested structure.
    fn resolve_endpoint(&mut self, value: &NotationValue) -> LinksResult<i64> {
        match value {
            NotationValue::Atom(n) => Ok(*n),
            NotationValue::List(entries) => self.create_pair(entries),
            NotationValue::Labeled { label, items } => {
                let mut refs = ReferenceMap::new();
                self.build_labeled(label, items, &mut refs)
            }
        }
    }

    /// Build a left-associated chain encoding an n-ary sequence.
    ///
    /// Two plain atoms collapse to a single link. Anything longer, or any
    /// sequence holding structure, folds left: the accumulator starts as
    /// the first element's resolved value and each following value chains
    /// through a fresh binary link.
    fn create_sequence(
        &mut self,
        items: &[NotationValue],
        refs: &mut ReferenceMap,
    ) -> LinksResult<LinkId> {
        let Some((first, rest)) = items.split_first() else {
            return Err(LinksError::InvalidArgument(
                "cannot create sequence from empty list".into(),
            ));
        };

        if let [NotationValue::Atom(source), NotationValue::Atom(target)] = items {
            return Ok(self.links.create(&[*source, *target])?);
        }

        let mut accumulator = self.resolve_chain_value(first, refs)?;
        for item in rest {
            let value = self.resolve_chain_value(item, refs)?;
            accumulator = self.links.create(&[accumulator, value])?;
        }
        Ok(accumulator)
    }

    /// Resolve one chain element to the scalar it contributes to the fold.
    fn resolve_chain_value(
        &mut self,
        item: &NotationValue,
        refs: &mut ReferenceMap,
    ) -> LinksResult<i64> {
        match item {
            NotationValue::Atom(n) => Ok(*n),
            NotationValue::List(nested) => self.create_sequence(nested, refs),
            NotationValue::Labeled { label, items } => self.build_labeled(label, items, refs),
        }
    }

    /// Build a labeled value's sequence and record its references.
    ///
    /// Returns the first reference recorded while building it, which is
    /// what a surrounding chain stands on. Deeper labels can land before
    /// the value's own label, in which case the deepest-first id wins.
    fn build_labeled(
        &mut self,
        label: &str,
        items: &[NotationValue],
        refs: &mut ReferenceMap,
    ) -> LinksResult<LinkId> {
        let mut nested = ReferenceMap::new();
        let id = self.create_sequence(items, &mut nested)?;
        nested.insert(label, id);
        let first = nested.first().unwrap_or(id);
        refs.merge(nested);
        Ok(first)
    }
}
