//! Normalized, strongly typed section contents.

use super::section::Section;
use crate::manifest::Value;
use indexmap::IndexMap;

/// PackageMap maps package names to version constraints, in insertion order.
///
/// Version constraints are opaque strings; they are only ever compared for
/// equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMap {
    packages: IndexMap<String, String>,
}

impl PackageMap {
    pub fn new() -> Self {
        PackageMap {
            packages: IndexMap::new(),
        }
    }

    /// Builds a PackageMap from a raw section value.
    ///
    /// Returns None unless the value is a map whose keys were non-empty
    /// strings in the document and whose values are all strings.
    pub fn from_value(value: &Value) -> Option<PackageMap> {
        let map = value.as_map()?;
        if map.has_coerced_keys() {
            return None;
        }

        let mut packages = PackageMap::new();
        for (name, version) in map.iter() {
            if name.is_empty() {
                return None;
            }
            packages.insert(name, version.as_str()?);
        }
        Some(packages)
    }

    /// Inserts or replaces a package. A replaced package keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.packages.insert(name.into(), version.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.packages.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Package names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.packages.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for PackageMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        PackageMap {
            packages: iter
                .into_iter()
                .map(|(name, version)| (name.into(), version.into()))
                .collect(),
        }
    }
}

/// SectionMap holds the package map of every selected section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: IndexMap<Section, PackageMap>,
}

impl SectionMap {
    pub fn new() -> Self {
        SectionMap {
            sections: IndexMap::new(),
        }
    }

    /// Inserts or replaces the packages for `section`.
    pub fn insert(&mut self, section: Section, packages: PackageMap) {
        self.sections.insert(section, packages);
    }

    pub fn get(&self, section: Section) -> Option<&PackageMap> {
        self.sections.get(&section)
    }

    /// Section names in insertion order.
    pub fn names(&self) -> Vec<Section> {
        self.sections.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, &PackageMap)> {
        self.sections.iter().map(|(s, p)| (*s, p))
    }
}

impl FromIterator<(Section, PackageMap)> for SectionMap {
    fn from_iter<I: IntoIterator<Item = (Section, PackageMap)>>(iter: I) -> Self {
        SectionMap {
            sections: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{from_json, from_yaml};
    use pretty_assertions::assert_eq;

    fn raw(json: &str) -> Value {
        from_json(json).unwrap().root().clone()
    }

    #[test]
    fn test_package_map_from_value() {
        let packages = PackageMap::from_value(&raw(r#"{"b": "2.0.0", "a": "1.0.0"}"#)).unwrap();
        let entries: Vec<(&str, &str)> = packages.iter().collect();
        assert_eq!(entries, vec![("b", "2.0.0"), ("a", "1.0.0")]);
    }

    #[test]
    fn test_package_map_rejects_malformed_sections() {
        assert_eq!(PackageMap::from_value(&raw(r#"["a", "b"]"#)), None);
        assert_eq!(PackageMap::from_value(&raw(r#""^1.0.0""#)), None);
        assert_eq!(PackageMap::from_value(&raw(r#"{"a": 1}"#)), None);
        assert_eq!(PackageMap::from_value(&raw(r#"{"a": "1", "b": null}"#)), None);
        assert_eq!(PackageMap::from_value(&raw(r#"{"": "1.0.0"}"#)), None);
    }

    #[test]
    fn test_package_map_rejects_non_string_names() {
        let manifest = from_yaml("1: x\n").unwrap();
        assert_eq!(PackageMap::from_value(manifest.root()), None);
    }

    #[test]
    fn test_package_map_empty_object() {
        let packages = PackageMap::from_value(&raw("{}")).unwrap();
        assert!(packages.is_empty());
    }

    #[test]
    fn test_package_map_insert_replaces_in_place() {
        let mut packages: PackageMap = [("a", "1"), ("b", "2")].into_iter().collect();
        packages.insert("a", "3");
        assert_eq!(packages.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(packages.get("a"), Some("3"));
        assert!(!packages.contains("c"));
    }

    #[test]
    fn test_section_map_names_follow_insertion() {
        let map: SectionMap = [
            (Section::Peer, PackageMap::new()),
            (Section::Runtime, PackageMap::new()),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.names(), vec![Section::Peer, Section::Runtime]);
        assert!(map.get(Section::Runtime).is_some());
        assert!(map.get(Section::Dev).is_none());
    }
}
