use crate::navigation::SectionId;
use crate::section::{ErrorMode, Section};
use crate::source::ContentSource;
use crate::types::NewsItem;

#[derive(Debug, Clone)]
pub struct NewsSection {
    pub section: Section<Vec<NewsItem>>,
}

impl NewsSection {
    pub fn new(mode: ErrorMode) -> Self {
        Self {
            section: Section::new("news", mode.policy_for(SectionId::News)),
        }
    }

    pub async fn load(&mut self, source: &dyn ContentSource) {
        if let Some(ticket) = self.section.mount() {
            let result = source.news().await;
            self.section.complete(ticket, result);
        }
    }

    pub async fn reload(&mut self, source: &dyn ContentSource) {
        let ticket = self.section.reload();
        let result = source.news().await;
        self.section.complete(ticket, result);
    }

    pub fn items(&self) -> &[NewsItem] {
        self.section.data().map(Vec::as_slice).unwrap_or_default()
    }
}
