//! Section resolution: raw manifest in, normalized section map out.

use super::package_map::{PackageMap, SectionMap};
use super::section::SectionSelector;
use crate::manifest::Manifest;

/// Extracts the sections named by `selector` from `manifest`.
///
/// Every selected section is present in the result, in canonical order. A
/// section that is missing, or is not a map of package names to version
/// strings, resolves to an empty PackageMap. This never fails.
pub fn resolve(manifest: &Manifest, selector: SectionSelector) -> SectionMap {
    let mut resolved = SectionMap::new();

    for &section in selector.sections() {
        let packages = match manifest.section(section.key()) {
            None => PackageMap::new(),
            Some(raw) => PackageMap::from_value(raw).unwrap_or_else(|| {
                tracing::warn!(
                    section = section.key(),
                    kind = raw.kind(),
                    "section is not a map of package versions, treating it as empty"
                );
                PackageMap::new()
            }),
        };
        tracing::debug!(section = section.key(), packages = packages.len(), "resolved section");
        resolved.insert(section, packages);
    }

    resolved
}
