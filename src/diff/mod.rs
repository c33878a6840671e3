//! Diff module - Per-section comparison of two normalized manifests.
//!
//! This module provides the difference records, the report that groups them
//! by section, and the engine that produces it.

mod difference;
mod engine;
mod keys;


pub use difference::*;
pub use engine::*;
pub use keys::*;
