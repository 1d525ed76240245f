//! The fixed, ordered set of page sections.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the six named regions of the page.
///
/// Declaration order is the scan order used for active-section selection
/// and the order entries appear in navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSectionError(pub String);

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Stable identifier, matching the page anchor.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    /// Label shown in navigation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = UnknownSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSectionError(s.to_string()))
    }
}
