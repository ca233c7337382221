//! Flat link data model and API

mod api;
mod link;
mod restriction;


pub use api::{Links, LinksError, LinksResult};
pub use link::{Change, Flow, Link, LinkId};
pub use restriction::{Place, Restriction, ANY};
