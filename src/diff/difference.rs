//! Difference records and the section-grouped report.

use crate::sections::Section;
use indexmap::IndexMap;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Change is what happened to one package between the two manifests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Only present in the new manifest.
    Added { new: String },
    /// Only present in the old manifest.
    Removed { old: String },
    /// Present in both with different version strings.
    Changed { old: String, new: String },
}

/// Difference is the outcome of comparing one package within one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    pub package: String,
    pub change: Change,
}

impl Difference {
    pub fn added(package: impl Into<String>, new: impl Into<String>) -> Self {
        Difference {
            package: package.into(),
            change: Change::Added { new: new.into() },
        }
    }

    pub fn removed(package: impl Into<String>, old: impl Into<String>) -> Self {
        Difference {
            package: package.into(),
            change: Change::Removed { old: old.into() },
        }
    }

    pub fn changed(
        package: impl Into<String>,
        old: impl Into<String>,
        new: impl Into<String>,
    ) -> Self {
        Difference {
            package: package.into(),
            change: Change::Changed {
                old: old.into(),
                new: new.into(),
            },
        }
    }

    /// The old version, absent for additions.
    pub fn old_version(&self) -> Option<&str> {
        match &self.change {
            Change::Added { .. } => None,
            Change::Removed { old } | Change::Changed { old, .. } => Some(old),
        }
    }

    /// The new version, absent for removals.
    pub fn new_version(&self) -> Option<&str> {
        match &self.change {
            Change::Removed { .. } => None,
            Change::Added { new } | Change::Changed { new, .. } => Some(new),
        }
    }
}

impl Serialize for Difference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("Difference", 3)?;
        record.serialize_field("package", &self.package)?;
        record.serialize_field("old", &self.old_version())?;
        record.serialize_field("new", &self.new_version())?;
        record.end()
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.change {
            Change::Added { new } => write!(f, "+ {} {}", self.package, new),
            Change::Removed { old } => write!(f, "- {} {}", self.package, old),
            Change::Changed { old, new } => write!(f, "~ {} {} -> {}", self.package, old, new),
        }
    }
}

/// DiffReport groups differences by section.
///
/// Sections appear in the order they were compared; a section with no
/// differences is still present with an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
    sections: IndexMap<Section, Vec<Difference>>,
}

impl DiffReport {
    pub fn new() -> Self {
        DiffReport {
            sections: IndexMap::new(),
        }
    }

    pub(crate) fn push(&mut self, section: Section, differences: Vec<Difference>) {
        self.sections.insert(section, differences);
    }

    pub fn get(&self, section: Section) -> Option<&[Difference]> {
        self.sections.get(&section).map(Vec::as_slice)
    }

    pub fn sections(&self) -> Vec<Section> {
        self.sections.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, &[Difference])> {
        self.sections.iter().map(|(s, d)| (*s, d.as_slice()))
    }

    /// Total number of records across all sections.
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Returns true if no section has any difference.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary::default();
        for difference in self.sections.values().flatten() {
            match difference.change {
                Change::Added { .. } => summary.added += 1,
                Change::Removed { .. } => summary.removed += 1,
                Change::Changed { .. } => summary.changed += 1,
            }
        }
        summary
    }
}

impl Serialize for DiffReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.sections.serialize(serializer)
    }
}

/// Prints one block per section followed by the summary line. A report with
/// no sections prints nothing.
impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sections.is_empty() {
            return Ok(());
        }

        for (i, (section, differences)) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}:", section)?;
            if differences.is_empty() {
                writeln!(f, "  (no changes)")?;
            }
            for difference in differences {
                writeln!(f, "  {}", difference)?;
            }
        }

        write!(f, "\n{}\n", self.summary())
    }
}

/// Record counts across a whole report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} removed, {} changed",
            self.added, self.removed, self.changed
        )
    }
}
