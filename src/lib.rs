//! # dep-diff
//!
//! Describe the difference in dependencies between two package manifests.
//!
//! Two manifests are narrowed to the selected dependency sections, then each
//! section is compared package by package. The result lists additions,
//! removals and version changes per section, in a stable order so that the
//! output itself can be diffed.
//!
//! ## Modules
//!
//! - [`manifest`] - Raw manifest documents and loading them from JSON/YAML
//! - [`sections`] - Section selection and normalization into typed package maps
//! - [`diff`] - The per-section diff engine and its report
//! - [`render`] - JSON, YAML and text output for reports
//!
//! ```
//! use dep_diff::{diff_manifests, manifest, SectionSelector};
//!
//! let old = manifest::from_json(r#"{"dependencies": {"a": "1.0.0", "b": "2.0.0"}}"#).unwrap();
//! let new = manifest::from_json(r#"{"dependencies": {"b": "2.0.0", "c": "3.0.0"}}"#).unwrap();
//!
//! let report = diff_manifests(&old, &new, SectionSelector::Runtime).unwrap();
//! assert_eq!(report.len(), 2);
//! ```

pub mod diff;
pub mod manifest;
pub mod render;
pub mod sections;

pub use diff::{diff, diff_manifests, Change, DiffError, DiffReport, DiffSummary, Difference};
pub use manifest::{LoadError, Manifest};
pub use render::{render, OutputFormat, RenderError};
pub use sections::{resolve, PackageMap, Section, SectionMap, SectionSelector};
