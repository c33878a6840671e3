//! Section names and section selectors.

use serde::{Serialize, Serializer};
use std::fmt;

/// Section is one dependency grouping inside a manifest.
///
/// The variant order is the canonical section order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Runtime,
    Dev,
    Peer,
}

impl Section {
    /// All sections in canonical order.
    pub const ALL: [Section; 3] = [Section::Runtime, Section::Dev, Section::Peer];

    /// The manifest field that holds this section.
    pub fn key(self) -> &'static str {
        match self {
            Section::Runtime => "dependencies",
            Section::Dev => "devDependencies",
            Section::Peer => "peerDependencies",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// SectionSelector chooses which sections a comparison covers.
///
/// Tokens are parsed through [`clap::ValueEnum`]: `deps`, `dev`, `peer`, `all`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SectionSelector {
    #[value(name = "deps")]
    Runtime,
    Dev,
    Peer,
    #[default]
    All,
}

impl SectionSelector {
    /// The sections this selector covers, in canonical order.
    pub fn sections(self) -> &'static [Section] {
        match self {
            SectionSelector::Runtime => &[Section::Runtime],
            SectionSelector::Dev => &[Section::Dev],
            SectionSelector::Peer => &[Section::Peer],
            SectionSelector::All => &Section::ALL,
        }
    }

    /// The command line token for this selector.
    pub fn token(self) -> &'static str {
        match self {
            SectionSelector::Runtime => "deps",
            SectionSelector::Dev => "dev",
            SectionSelector::Peer => "peer",
            SectionSelector::All => "all",
        }
    }
}

impl fmt::Display for SectionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
