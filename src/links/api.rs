//! Flat CRUD and iteration over single links

use super::link::{Change, Flow, Link, LinkId};
use super::restriction::Restriction;
use crate::store::{LinkStore, StoreError};
use thiserror::Error;

/// Errors surfaced by the flat link API
#[derive(Debug, Error)]
pub enum LinksError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No links found matching restriction")]
    NotFound,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for flat link operations
pub type LinksResult<T> = Result<T, LinksError>;

/// Flat CRUD and query API over a `LinkStore`
///
/// Flat meaning it works with a single link at a time. Mutating operations
/// re-read the store, act on the first match in enumeration order, and that
/// read is not transactional with the mutation; callers needing stronger
/// guarantees must serialize access themselves.
#[derive(Debug)]
pub struct Links<S: LinkStore> {
    store: S,
}

impl<S: LinkStore> Links<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the API and return the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Count links matching `restriction`.
    pub fn count(&self, restriction: &Restriction) -> LinksResult<usize> {
        let all = self.store.read_all_links()?;
        Ok(all.iter().filter(|l| restriction.matches(l)).count())
    }

    /// Visit links matching `restriction` in enumeration order.
    ///
    /// Returning `Flow::Break` from the visitor stops the traversal and the
    /// early stop is reported back; otherwise `Flow::Continue` is returned
    /// after the last match.
    pub fn each<F>(&self, restriction: &Restriction, mut visitor: F) -> LinksResult<Flow>
    where
        F: FnMut(&Link) -> Flow,
    {
        let all = self.store.read_all_links()?;
        for link in all.iter().filter(|l| restriction.matches(l)) {
            if visitor(link) == Flow::Break {
                return Ok(Flow::Break);
            }
        }
        Ok(Flow::Continue)
    }

    /// Create a link from `[source, target]` or `[_, source, target]`.
    pub fn create(&mut self, substitution: &[i64]) -> LinksResult<LinkId> {
        self.create_with(substitution, |_| {})
    }

    /// Like [`Links::create`], reporting the change to `handler`.
    pub fn create_with<F>(&mut self, substitution: &[i64], mut handler: F) -> LinksResult<LinkId>
    where
        F: FnMut(&Change),
    {
        let (source, target) = split_substitution(substitution)?;
        let link = self.store.create_link(source, target)?;
        tracing::debug!(id = link.id, source, target, "created link");
        handler(&Change::created(link));
        Ok(link.id)
    }

    /// Replace source and target of the first link matching `restriction`.
    ///
    /// The matched link keeps its id. A restriction is mandatory; zero
    /// matches fail with [`LinksError::NotFound`].
    pub fn update(&mut self, restriction: &Restriction, substitution: &[i64]) -> LinksResult<LinkId> {
        self.update_with(restriction, substitution, |_| {})
    }

    /// Like [`Links::update`], reporting the change to `handler`.
    pub fn update_with<F>(
        &mut self,
        restriction: &Restriction,
        substitution: &[i64],
        mut handler: F,
    ) -> LinksResult<LinkId>
    where
        F: FnMut(&Change),
    {
        if restriction.is_all() {
            return Err(LinksError::InvalidArgument(
                "restriction required for update".into(),
            ));
        }
        let (source, target) = split_substitution(substitution)?;
        let before = self.first_match(restriction)?;
        let after = self.store.update_link(before.id, source, target)?;
        tracing::debug!(id = after.id, "updated link");
        handler(&Change::updated(before, after));
        Ok(after.id)
    }

    /// Delete the first link matching `restriction`, returning its id.
    ///
    /// A restriction is mandatory; zero matches fail with
    /// [`LinksError::NotFound`].
    pub fn delete(&mut self, restriction: &Restriction) -> LinksResult<LinkId> {
        self.delete_with(restriction, |_| {})
    }

    /// Like [`Links::delete`], reporting the change to `handler`.
    pub fn delete_with<F>(&mut self, restriction: &Restriction, mut handler: F) -> LinksResult<LinkId>
    where
        F: FnMut(&Change),
    {
        if restriction.is_all() {
            return Err(LinksError::InvalidArgument(
                "restriction required for delete".into(),
            ));
        }
        let before = self.first_match(restriction)?;
        self.store.delete_link(before.id)?;
        tracing::debug!(id = before.id, "deleted link");
        handler(&Change::deleted(before));
        Ok(before.id)
    }

    /// First match in enumeration order, or `NotFound`.
    fn first_match(&self, restriction: &Restriction) -> LinksResult<Link> {
        let all = self.store.read_all_links()?;
        all.into_iter()
            .find(|l| restriction.matches(l))
            .ok_or(LinksError::NotFound)
    }
}

/// Split a substitution slice into (source, target).
///
/// Two elements read as `[source, target]`; three or more skip the id slot
/// and read positions 1 and 2.
fn split_substitution(substitution: &[i64]) -> LinksResult<(i64, i64)> {
    match substitution {
        [source, target] => Ok((*source, *target)),
        [_, source, target, ..] => Ok((*source, *target)),
        _ => Err(LinksError::InvalidArgument(
            "substitution must contain at least [source, target]".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn links() -> Links<MemoryStore> {
        Links::new(MemoryStore::new())
    }

    #[test]
    fn test_create_returns_fresh_ids() {
        let mut links = links();
        let first = links.create(&[1, 2]).unwrap();
        let second = links.create(&[3, 4]).unwrap();
        assert!(first > 0);
        assert!(second > 0);
        assert_ne!(first, second);
        assert_eq!(links.count(&Restriction::All).unwrap(), 2);
    }

    #[test]
    fn test_create_three_element_substitution_skips_id_slot() {
        let mut links = links();
        let id = links.create(&[0, 7, 8]).unwrap();
        assert_eq!(links.count(&Restriction::by_pair(7, 8)).unwrap(), 1);
        assert_eq!(links.count(&Restriction::by_id(id)).unwrap(), 1);
    }

    #[test]
    fn test_create_too_short_substitution_fails() {
        let mut links = links();
        assert!(matches!(
            links.create(&[1]),
            Err(LinksError::InvalidArgument(_))
        ));
        assert!(matches!(
            links.create(&[]),
            Err(LinksError::InvalidArgument(_))
        ));
        assert_eq!(links.count(&Restriction::All).unwrap(), 0);
    }

    #[test]
    fn test_create_handler_sees_created_change() {
        let mut links = links();
        let mut seen = None;
        let id = links.create_with(&[7, 8], |change| seen = Some(change.clone())).unwrap();

        let change = seen.unwrap();
        assert_eq!(change.before, None);
        let after = change.after.unwrap();
        assert_eq!(after.id, id);
        assert_eq!((after.source, after.target), (7, 8));
    }

    #[test]
    fn test_count_with_restrictions() {
        let mut links = links();
        links.create(&[10, 20]).unwrap();
        links.create(&[10, 30]).unwrap();
        links.create(&[40, 20]).unwrap();

        assert_eq!(links.count(&Restriction::from_slice(&[10, 0])).unwrap(), 2);
        assert_eq!(links.count(&Restriction::from_slice(&[0, 20])).unwrap(), 2);
        assert_eq!(links.count(&Restriction::from_slice(&[999, 999])).unwrap(), 0);
    }

    #[test]
    fn test_each_visits_in_enumeration_order() {
        let mut links = links();
        links.create(&[1, 2]).unwrap();
        links.create(&[3, 4]).unwrap();

        let mut visited = Vec::new();
        let flow = links
            .each(&Restriction::All, |link| {
                visited.push(link.source);
                Flow::Continue
            })
            .unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(visited, vec![1, 3]);
    }

    #[test]
    fn test_each_break_stops_after_k_matches() {
        let mut links = links();
        for i in 0..5 {
            links.create(&[i, i + 1]).unwrap();
        }

        let mut count = 0;
        let flow = links
            .each(&Restriction::All, |_| {
                count += 1;
                if count >= 2 {
                    Flow::Break
                } else {
                    Flow::Continue
                }
            })
            .unwrap();
        assert_eq!(flow, Flow::Break);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_update_preserves_id_and_replaces_values() {
        let mut links = links();
        let id = links.create(&[50, 60]).unwrap();

        let updated = links
            .update(&Restriction::from_slice(&[id, 0, 0]), &[70, 80])
            .unwrap();
        assert_eq!(updated, id);
        assert_eq!(links.count(&Restriction::by_pair(70, 80)).unwrap(), 1);
        assert_eq!(links.count(&Restriction::by_pair(50, 60)).unwrap(), 0);
    }

    #[test]
    fn test_update_handler_reflects_pre_and_post_state() {
        let mut links = links();
        let id = links.create(&[90, 100]).unwrap();

        let mut seen = None;
        links
            .update_with(&Restriction::by_id(id), &[110, 120], |change| {
                seen = Some(change.clone())
            })
            .unwrap();

        let change = seen.unwrap();
        assert_eq!(change.before.unwrap().source, 90);
        let after = change.after.unwrap();
        assert_eq!(after.id, id);
        assert_eq!(after.source, 110);
    }

    #[test]
    fn test_update_requires_restriction() {
        let mut links = links();
        links.create(&[1, 2]).unwrap();
        assert!(matches!(
            links.update(&Restriction::All, &[3, 4]),
            Err(LinksError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_update_without_match_fails() {
        let mut links = links();
        assert!(matches!(
            links.update(&Restriction::by_id(999), &[1, 2]),
            Err(LinksError::NotFound)
        ));
    }

    #[test]
    fn test_update_first_match_policy() {
        let mut links = links();
        let first = links.create(&[5, 5]).unwrap();
        let second = links.create(&[5, 5]).unwrap();
        // Both match; the policy picks the earlier one.
        assert_eq!(links.count(&Restriction::by_pair(5, 5)).unwrap(), 2);

        let touched = links
            .update(&Restriction::by_pair(5, 5), &[6, 6])
            .unwrap();
        assert_eq!(touched, first);
        assert_eq!(links.count(&Restriction::by_pair(5, 5)).unwrap(), 1);
        assert_eq!(links.count(&Restriction::by_id(second)).unwrap(), 1);
    }

    #[test]
    fn test_delete_removes_first_match() {
        let mut links = links();
        let id = links.create(&[130, 140]).unwrap();

        let deleted = links.delete(&Restriction::from_slice(&[id, 0, 0])).unwrap();
        assert_eq!(deleted, id);
        assert_eq!(links.count(&Restriction::by_id(id)).unwrap(), 0);
    }

    #[test]
    fn test_delete_handler_sees_deleted_change() {
        let mut links = links();
        let id = links.create(&[150, 160]).unwrap();

        let mut seen = None;
        links
            .delete_with(&Restriction::by_id(id), |change| seen = Some(change.clone()))
            .unwrap();

        let change = seen.unwrap();
        assert_eq!(change.before.unwrap().id, id);
        assert_eq!(change.after, None);
    }

    #[test]
    fn test_delete_requires_restriction() {
        let mut links = links();
        links.create(&[1, 2]).unwrap();
        assert!(matches!(
            links.delete(&Restriction::All),
            Err(LinksError::InvalidArgument(_))
        ));
        assert_eq!(links.count(&Restriction::All).unwrap(), 1);
    }

    #[test]
    fn test_delete_without_match_leaves_count_unchanged() {
        let mut links = links();
        links.create(&[1, 2]).unwrap();
        assert!(matches!(
            links.delete(&Restriction::by_id(999)),
            Err(LinksError::NotFound)
        ));
        assert_eq!(links.count(&Restriction::All).unwrap(), 1);
    }
}
