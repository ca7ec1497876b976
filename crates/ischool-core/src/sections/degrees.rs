//! Degree tabs and the concentration overlay

use std::fmt;
use std::str::FromStr;

use crate::error::IschoolError;
use crate::navigation::SectionId;
use crate::section::{ErrorMode, Section};
use crate::selection::Selection;
use crate::source::ContentSource;
use crate::types::{ConcentrationDetail, Degree, Degrees};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegreeTab {
    #[default]
    Undergraduate,
    Graduate,
}

impl DegreeTab {
    pub const ALL: [DegreeTab; 2] = [DegreeTab::Undergraduate, DegreeTab::Graduate];

    pub fn index(self) -> usize {
        match self {
            DegreeTab::Undergraduate => 0,
            DegreeTab::Graduate => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DegreeTab::Undergraduate => "Undergraduate Degrees",
            DegreeTab::Graduate => "Graduate Degrees",
        }
    }
}

impl fmt::Display for DegreeTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DegreeTab {
    type Err = IschoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "undergraduate" | "undergrad" | "ug" => Ok(DegreeTab::Undergraduate),
            "1" | "graduate" | "grad" | "g" => Ok(DegreeTab::Graduate),
            other => Err(IschoolError::InvalidInput(format!(
                "unknown degree tab '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DegreeSection {
    pub section: Section<Degrees>,
    pub tab: DegreeTab,
    pub concentration: Selection<String>,
}

impl DegreeSection {
    pub fn new(mode: ErrorMode) -> Self {
        Self {
            section: Section::new("degrees", mode.policy_for(SectionId::Degrees)),
            tab: DegreeTab::default(),
            concentration: Selection::default(),
        }
    }

    pub async fn load(&mut self, source: &dyn ContentSource) {
        if let Some(ticket) = self.section.mount() {
            let result = source.degrees().await;
            self.section.complete(ticket, result);
        }
    }

    pub async fn reload(&mut self, source: &dyn ContentSource) {
        let ticket = self.section.reload();
        let result = source.degrees().await;
        self.section.complete(ticket, result);
    }

    pub fn set_tab(&mut self, tab: DegreeTab) {
        self.tab = tab;
    }

    /// Degrees listed under the active tab
    pub fn active_degrees(&self) -> &[Degree] {
        match (self.section.data(), self.tab) {
            (Some(d), DegreeTab::Undergraduate) => &d.undergraduate,
            (Some(d), DegreeTab::Graduate) => &d.graduate,
            (None, _) => &[],
        }
    }

    /// Open the overlay for `name`. Ignored while degrees are not loaded.
    pub fn select_concentration(&mut self, name: impl Into<String>) -> bool {
        if self.section.data().is_none() {
            return false;
        }
        self.concentration.select(name.into());
        true
    }

    pub fn dismiss(&mut self) {
        self.concentration.dismiss();
    }

    /// Detail for the open overlay: the selected name plus the concentration
    /// list of the first undergraduate degree that offers it.
    pub fn concentration_detail(&self) -> Option<ConcentrationDetail> {
        let name = self.concentration.visible()?;
        let degrees = self.section.data()?;
        Some(degrees.concentration_detail(name))
    }
}
