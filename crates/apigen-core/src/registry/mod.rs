//! Generated registry files that every new module is added to
//!
//! - `collections`: the collection-name map, regenerated from a typed model
//! - `routes`: the route manager, patched in place at anchors
//! - `patch`: the idempotent single-line insertion both build on

pub mod collections;
pub mod patch;
pub mod routes;

pub use collections::{update_collections, CollectionEntry, CollectionRegistry};
pub use patch::{patch, Anchor, PatchOutcome};
pub use routes::{register_route, RouteEntry};
