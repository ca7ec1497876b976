//! Side menu state and jump-to-section

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IschoolError;

/// Anchored content sections of the page, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    About,
    Degrees,
    Employment,
    Faculty,
    News,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::About,
        SectionId::Degrees,
        SectionId::Employment,
        SectionId::Faculty,
        SectionId::News,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Degrees => "Degrees",
            SectionId::Employment => "Employment",
            SectionId::Faculty => "Faculty",
            SectionId::News => "News",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = IschoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| IschoolError::InvalidInput(format!("unknown section '{s}'")))
    }
}

/// Lookup from anchor id to a scroll position in a composed page
pub trait AnchorIndex {
    fn offset_of(&self, anchor: &str) -> Option<usize>;
}

/// Drawer open flag plus navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationController {
    drawer_open: bool,
}

impl NavigationController {
    pub fn toggle(&mut self, open: bool) {
        self.drawer_open = open;
    }

    pub fn is_open(&self) -> bool {
        self.drawer_open
    }

    /// Entries listed in the drawer
    pub fn entries(&self) -> [SectionId; 5] {
        SectionId::ALL
    }

    /// Resolve `anchor` to a scroll offset and close the drawer.
    ///
    /// An unknown anchor is a silent no-op apart from closing the drawer.
    pub fn navigate_to(&mut self, anchor: &str, page: &impl AnchorIndex) -> Option<usize> {
        let offset = page.offset_of(anchor);
        if offset.is_none() {
            debug!(anchor, "Navigation target not found");
        }
        self.toggle(false);
        offset
    }
}
