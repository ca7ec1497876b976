//! Faculty directory with letter filter and member overlay

use crate::filter::{FilterKey, LetterFilter};
use crate::navigation::SectionId;
use crate::section::{ErrorMode, Section};
use crate::selection::Selection;
use crate::source::ContentSource;
use crate::types::FacultyMember;

#[derive(Debug, Clone)]
pub struct FacultySection {
    pub section: Section<Vec<FacultyMember>>,
    pub filter: LetterFilter,
    pub member: Selection<FacultyMember>,
}

impl FacultySection {
    pub fn new(mode: ErrorMode) -> Self {
        Self {
            section: Section::new("faculty", mode.policy_for(SectionId::Faculty)),
            filter: LetterFilter::default(),
            member: Selection::clearing(),
        }
    }

    pub async fn load(&mut self, source: &dyn ContentSource) {
        if let Some(ticket) = self.section.mount() {
            let result = source.faculty().await;
            self.section.complete(ticket, result);
        }
    }

    pub async fn reload(&mut self, source: &dyn ContentSource) {
        let ticket = self.section.reload();
        let result = source.faculty().await;
        self.section.complete(ticket, result);
    }

    pub fn members(&self) -> &[FacultyMember] {
        self.section.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn set_filter(&mut self, key: FilterKey) {
        self.filter.set(key);
    }

    /// Members passing the active filter, in directory order
    pub fn visible_members(&self) -> Vec<&FacultyMember> {
        self.filter.apply(self.members())
    }

    /// Open the overlay for the visible member called `name`
    pub fn select_by_name(&mut self, name: &str) -> bool {
        let found = self
            .visible_members()
            .into_iter()
            .find(|m| m.name.eq_ignore_ascii_case(name.trim()))
            .cloned();
        match found {
            Some(member) => {
                self.member.select(member);
                true
            }
            None => false,
        }
    }

    pub fn dismiss(&mut self) {
        self.member.dismiss();
    }
}
