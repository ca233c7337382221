//! In-memory link store

use super::traits::{LinkStore, StoreError, StoreResult};
use crate::links::{Link, LinkId};

/// In-memory `LinkStore` backed by a vector
///
/// Enumeration order is insertion order and ids are sequential starting
/// at 1. This is the reference backend for tests and examples.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    links: Vec<Link>,
    next_id: LinkId,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            links: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// True if no links are stored.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkStore for MemoryStore {
    fn read_all_links(&self) -> StoreResult<Vec<Link>> {
        Ok(self.links.clone())
    }

    fn create_link(&mut self, source: i64, target: i64) -> StoreResult<Link> {
        let link = Link::new(self.next_id, source, target);
        self.next_id += 1;
        self.links.push(link);
        Ok(link)
    }

    fn update_link(&mut self, id: LinkId, source: i64, target: i64) -> StoreResult<Link> {
        let link = self
            .links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(StoreError::LinkNotFound(id))?;
        link.source = source;
        link.target = target;
        Ok(*link)
    }

    fn delete_link(&mut self, id: LinkId) -> StoreResult<()> {
        let position = self
            .links
            .iter()
            .position(|l| l.id == id)
            .ok_or(StoreError::LinkNotFound(id))?;
        self.links.remove(position);
        Ok(())
    }
}
