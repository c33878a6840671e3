//! Sections module - Selecting and normalizing manifest sections.
//!
//! This is the only place that reads a raw [`Manifest`](crate::manifest::Manifest);
//! everything downstream works on [`SectionMap`] and [`PackageMap`].

mod package_map;
mod resolver;
mod section;

pub use package_map::*;
pub use resolver::*;
pub use section::*;
