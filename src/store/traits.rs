//! Store trait definitions

use crate::links::{Link, LinkId};
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Link not found: {0}")]
    LinkNotFound(LinkId),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for flat link storage backends
///
/// The client layer treats store calls as blocking and non-reentrant and
/// imposes no locking of its own; callers serialize access to a given
/// instance.
pub trait LinkStore {
    /// Read every stored link in enumeration order.
    ///
    /// Enumeration order is the backend's own stable order; the flat API's
    /// "first match" policy is defined against it.
    fn read_all_links(&self) -> StoreResult<Vec<Link>>;

    /// Create a link with a fresh positive id.
    fn create_link(&mut self, source: i64, target: i64) -> StoreResult<Link>;

    /// Replace the source and target of an existing link.
    fn update_link(&mut self, id: LinkId, source: i64, target: i64) -> StoreResult<Link>;

    /// Remove a link by id.
    fn delete_link(&mut self, id: LinkId) -> StoreResult<()>;
}
