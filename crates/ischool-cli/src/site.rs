//! Root composition: navigation plus every section, in page order

use ischool_core::sections::{
    AboutSection, DegreeSection, EmploymentSection, FacultySection, NewsSection,
};
use ischool_core::{ContentSource, ErrorMode, NavigationController, SectionId};
use tracing::debug;

use crate::page::Page;
use crate::views::{self, ViewOptions};

/// All page state. Each section is touched only through its own field.
#[derive(Debug, Clone)]
pub struct Site {
    pub nav: NavigationController,
    pub about: AboutSection,
    pub degrees: DegreeSection,
    pub employment: EmploymentSection,
    pub faculty: FacultySection,
    pub news: NewsSection,
}

impl Site {
    pub fn new(mode: ErrorMode) -> Self {
        Self {
            nav: NavigationController::default(),
            about: AboutSection::new(mode),
            degrees: DegreeSection::new(mode),
            employment: EmploymentSection::new(mode),
            faculty: FacultySection::new(mode),
            news: NewsSection::new(mode),
        }
    }

    /// Mount every section; all fetches run concurrently
    pub async fn load(&mut self, source: &dyn ContentSource) {
        debug!("Loading all sections");
        tokio::join!(
            self.about.load(source),
            self.degrees.load(source),
            self.employment.load(source),
            self.faculty.load(source),
            self.news.load(source),
        );
    }

    /// Mount a single section, leaving the others untouched
    pub async fn load_section(&mut self, id: SectionId, source: &dyn ContentSource) {
        match id {
            SectionId::About => self.about.load(source).await,
            SectionId::Degrees => self.degrees.load(source).await,
            SectionId::Employment => self.employment.load(source).await,
            SectionId::Faculty => self.faculty.load(source).await,
            SectionId::News => self.news.load(source).await,
        }
    }

    /// Fetch a section again, superseding whatever it held
    pub async fn reload(&mut self, id: SectionId, source: &dyn ContentSource) {
        match id {
            SectionId::About => self.about.reload(source).await,
            SectionId::Degrees => self.degrees.reload(source).await,
            SectionId::Employment => {
                tokio::join!(
                    self.employment.employment.reload(source),
                    self.employment.coop.reload(source),
                );
            }
            SectionId::Faculty => self.faculty.reload(source).await,
            SectionId::News => self.news.reload(source).await,
        }
    }

    /// Close every open overlay
    pub fn dismiss_all(&mut self) {
        self.about.dismiss();
        self.degrees.dismiss();
        self.faculty.dismiss();
    }

    pub fn render_section(&self, id: SectionId, opts: &ViewOptions) -> Vec<String> {
        match id {
            SectionId::About => views::about::render(&self.about, opts),
            SectionId::Degrees => views::degrees::render(&self.degrees, opts),
            SectionId::Employment => views::employment::render(&self.employment, opts),
            SectionId::Faculty => views::faculty::render(&self.faculty, opts),
            SectionId::News => views::news::render(&self.news, opts),
        }
    }

    pub fn compose(&self, opts: &ViewOptions) -> Page {
        let mut page = Page::default();
        page.push(None, views::nav::render_bar(opts));
        for id in SectionId::ALL {
            page.push(Some(id), self.render_section(id, opts));
        }
        page.push(None, views::footer::render());
        page
    }
}
