//! First-letter filter for the faculty directory

use std::fmt;
use std::str::FromStr;

use crate::error::IschoolError;
use crate::types::FacultyMember;

/// Anything with a display name the filter can match on
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for FacultyMember {
    fn name(&self) -> &str {
        &self.name
    }
}

/// One button of the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKey {
    #[default]
    All,
    Letter(char),
}

impl FilterKey {
    /// The `All` button followed by `A`..=`Z`
    pub fn buttons() -> impl Iterator<Item = FilterKey> {
        std::iter::once(FilterKey::All).chain(('A'..='Z').map(FilterKey::Letter))
    }

    pub fn matches(self, name: &str) -> bool {
        match self {
            FilterKey::All => true,
            FilterKey::Letter(letter) => name.starts_with(letter),
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKey::All => write!(f, "All"),
            FilterKey::Letter(c) => write!(f, "{c}"),
        }
    }
}

impl FromStr for FilterKey {
    type Err = IschoolError;

    /// Accepts `All` (any case) or a single ASCII letter. Letters map onto the
    /// upper-case button of the same letter; matching itself stays case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(FilterKey::All);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                Ok(FilterKey::Letter(c.to_ascii_uppercase()))
            }
            _ => Err(IschoolError::InvalidInput(format!(
                "filter must be 'All' or a single letter, got '{s}'"
            ))),
        }
    }
}

/// Active filter for a list of named items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterFilter {
    active: FilterKey,
}

impl LetterFilter {
    pub fn active(&self) -> FilterKey {
        self.active
    }

    pub fn set(&mut self, key: FilterKey) {
        self.active = key;
    }

    /// Items whose name starts with the active letter, in source order
    pub fn apply<'a, T: Named>(&self, items: &'a [T]) -> Vec<&'a T> {
        items
            .iter()
            .filter(|item| self.active.matches(item.name()))
            .collect()
    }
}
