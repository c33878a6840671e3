//! The diff engine: compares two normalized section maps.

use super::difference::{DiffReport, Difference};
use super::keys::{common, only_in};
use crate::manifest::Manifest;
use crate::sections::{resolve, PackageMap, Section, SectionMap, SectionSelector};
use std::fmt;
use thiserror::Error;

/// DiffError is returned when two section maps cannot be compared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    #[error("manifests don't contain the same sections: [{}] vs [{}]", SectionList(.old), SectionList(.new))]
    StructuralMismatch { old: Vec<Section>, new: Vec<Section> },
}

struct SectionList<'a>(&'a [Section]);

impl fmt::Display for SectionList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}

/// Compares `old` and `new` section by section.
///
/// Both maps must hold the same set of sections, in any order. The report
/// lists sections in `old`'s order. Within a section, additions come first
/// (in `new`'s order), then removals (in `old`'s order), then version changes
/// (in `old`'s order). Packages with identical versions are omitted.
pub fn diff(old: &SectionMap, new: &SectionMap) -> Result<DiffReport, DiffError> {
    if !same_sections(old, new) {
        return Err(DiffError::StructuralMismatch {
            old: old.names(),
            new: new.names(),
        });
    }

    let empty = PackageMap::new();
    let mut report = DiffReport::new();

    for (section, old_packages) in old.iter() {
        let new_packages = new.get(section).unwrap_or(&empty);
        let differences = diff_packages(old_packages, new_packages);
        tracing::debug!(
            section = section.key(),
            differences = differences.len(),
            "compared section"
        );
        report.push(section, differences);
    }

    Ok(report)
}

/// Resolves both manifests with `selector` and compares them.
pub fn diff_manifests(
    old: &Manifest,
    new: &Manifest,
    selector: SectionSelector,
) -> Result<DiffReport, DiffError> {
    diff(&resolve(old, selector), &resolve(new, selector))
}

/// Compares the packages of a single section.
pub fn diff_packages(old: &PackageMap, new: &PackageMap) -> Vec<Difference> {
    let mut differences = Vec::new();

    for name in only_in(new, old) {
        if let Some(version) = new.get(name) {
            differences.push(Difference::added(name, version));
        }
    }

    for name in only_in(old, new) {
        if let Some(version) = old.get(name) {
            differences.push(Difference::removed(name, version));
        }
    }

    for name in common(old, new) {
        if let (Some(old_version), Some(new_version)) = (old.get(name), new.get(name)) {
            if old_version != new_version {
                differences.push(Difference::changed(name, old_version, new_version));
            }
        }
    }

    differences
}

fn same_sections(old: &SectionMap, new: &SectionMap) -> bool {
    let mut old_names = old.names();
    let mut new_names = new.names();
    old_names.sort();
    new_names.sort();
    old_names == new_names
}
