//! Project layout configuration

pub mod layout;

pub use layout::{Project, ProjectLayout, LAYOUT_FILE};
