//! Links client: flat and recursive APIs over a triple link store
//!
//! A link is an (id, source, target) triple; source and target are integers
//! that may be scalars or other links' ids, with no type distinction between
//! the two. On top of a pluggable [`LinkStore`] this crate provides:
//!
//! - **Flat API** ([`Links`]): restriction-filtered count/each/create/update/
//!   delete over single links.
//! - **Links notation** ([`notation`]): parenthesized text such as
//!   `((1 2) (3 4))` with a lenient parser and exact-inverse serializer,
//!   plus a write-only labeled form `(label: 1 2)`.
//! - **Recursive builder** ([`RecursiveLinks`]): converts nested lists and
//!   labeled structures into flat link sets via left-associated binary
//!   chaining, and projects them back out flat.
//!
//! # Example
//!
//! ```
//! use links_client::{Links, MemoryStore, Restriction};
//!
//! let mut links = Links::new(MemoryStore::new());
//! let id = links.create(&[1, 2]).unwrap();
//! assert_eq!(links.count(&Restriction::All).unwrap(), 1);
//! assert_eq!(links.count(&Restriction::by_id(id)).unwrap(), 1);
//! ```

mod links;
pub mod notation;
pub mod recursive;
pub mod store;

pub use links::{
    Change, Flow, Link, LinkId, Links, LinksError, LinksResult, Place, Restriction, ANY,
};
pub use notation::{
    parse, parse_report, to_notation, to_notation_with_refs, NotationValue, ParseReport,
};
pub use recursive::{RecursiveLinks, ReferenceMap};
pub use store::{LinkStore, MemoryStore, StoreError, StoreResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
