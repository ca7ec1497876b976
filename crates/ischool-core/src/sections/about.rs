//! About text and the quote overlay

use crate::navigation::SectionId;
use crate::section::{ErrorMode, Section};
use crate::selection::Selection;
use crate::source::ContentSource;
use crate::types::{About, Quote};

#[derive(Debug, Clone)]
pub struct AboutSection {
    pub section: Section<About>,
    pub quote: Selection<Quote>,
}

impl AboutSection {
    pub fn new(mode: ErrorMode) -> Self {
        Self {
            section: Section::new("about", mode.policy_for(SectionId::About)),
            quote: Selection::default(),
        }
    }

    pub async fn load(&mut self, source: &dyn ContentSource) {
        if let Some(ticket) = self.section.mount() {
            let result = source.about().await;
            self.section.complete(ticket, result);
        }
    }

    pub async fn reload(&mut self, source: &dyn ContentSource) {
        let ticket = self.section.reload();
        let result = source.about().await;
        self.section.complete(ticket, result);
    }

    /// Open the quote overlay. Does nothing until the text has loaded.
    pub fn show_quote(&mut self) -> bool {
        match self.section.data() {
            Some(about) => {
                self.quote.select(about.quote());
                true
            }
            None => false,
        }
    }

    pub fn dismiss(&mut self) {
        self.quote.dismiss();
    }
}
