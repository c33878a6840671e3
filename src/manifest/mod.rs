//! Manifest module - Raw dependency manifests and how they are loaded.
//!
//! A manifest is kept as an untyped, order-preserving tree. Nothing outside
//! the section resolver looks inside it.

mod loader;
mod value;

pub use loader::*;
pub use value::*;
