//! Fetches a page and prints the outline of its elements.
//!
//! The outline is built by walking the parsed document with a visitor that
//! records each element and prunes configured tags.
pub mod cli;
pub mod outline;

pub use outline::{Outline, OutlineEntry, OutlineOptions};
