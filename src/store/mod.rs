//! Storage backends for links
//!
//! The client consumes any backend through the `LinkStore` trait; the
//! persistent engine and its on-disk format live outside this crate.
//! `MemoryStore` is the in-memory reference implementation used by tests.

mod memory;
mod traits;

pub use memory::MemoryStore;
pub use traits::{LinkStore, StoreError, StoreResult};
