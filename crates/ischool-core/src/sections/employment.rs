//! Employment and co-op tables
//!
//! Both tables are fetched once and paged locally; turning a page never
//! issues a request.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::IschoolError;
use crate::navigation::SectionId;
use crate::pagination::Paginator;
use crate::section::{ErrorMode, Section};
use crate::source::ContentSource;
use crate::types::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Employment,
    Coop,
}

impl TableKind {
    pub fn title(self) -> &'static str {
        match self {
            TableKind::Employment => "Professional Employment Information",
            TableKind::Coop => "Co-op Table",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Employment => f.write_str("employment"),
            TableKind::Coop => f.write_str("coop"),
        }
    }
}

impl FromStr for TableKind {
    type Err = IschoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "employment" | "emp" => Ok(TableKind::Employment),
            "coop" | "co-op" => Ok(TableKind::Coop),
            other => Err(IschoolError::InvalidInput(format!("unknown table '{other}'"))),
        }
    }
}

/// One fetched table with its own page state
#[derive(Debug, Clone)]
pub struct PagedTable {
    pub kind: TableKind,
    pub section: Section<Table>,
    pub pager: Paginator,
}

impl PagedTable {
    fn new(kind: TableKind, mode: ErrorMode) -> Self {
        let name = match kind {
            TableKind::Employment => "employment",
            TableKind::Coop => "coop",
        };
        Self {
            kind,
            section: Section::new(name, mode.policy_for(SectionId::Employment)),
            pager: Paginator::default(),
        }
    }

    async fn fetch(kind: TableKind, source: &dyn ContentSource) -> crate::Result<Table> {
        match kind {
            TableKind::Employment => source.employment_table().await,
            TableKind::Coop => source.coop_table().await,
        }
    }

    pub async fn load(&mut self, source: &dyn ContentSource) {
        if let Some(ticket) = self.section.mount() {
            let result = Self::fetch(self.kind, source).await;
            if self.section.complete(ticket, result) {
                self.sync_pages();
            }
        }
    }

    pub async fn reload(&mut self, source: &dyn ContentSource) {
        let ticket = self.section.reload();
        let result = Self::fetch(self.kind, source).await;
        if self.section.complete(ticket, result) {
            self.sync_pages();
        }
    }

    fn sync_pages(&mut self) {
        let count = self.section.data().map_or(0, Table::len);
        self.pager.set_row_count(count);
    }

    pub fn headings(&self) -> Vec<String> {
        self.section.data().map(Table::headings).unwrap_or_default()
    }

    /// Rows on the current page
    pub fn visible_rows(&self) -> &[Map<String, Value>] {
        match self.section.data() {
            Some(table) => self.pager.visible(&table.rows),
            None => &[],
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmploymentSection {
    pub employment: PagedTable,
    pub coop: PagedTable,
}

impl EmploymentSection {
    pub fn new(mode: ErrorMode) -> Self {
        Self {
            employment: PagedTable::new(TableKind::Employment, mode),
            coop: PagedTable::new(TableKind::Coop, mode),
        }
    }

    pub async fn load(&mut self, source: &dyn ContentSource) {
        futures::join!(self.employment.load(source), self.coop.load(source));
    }

    pub fn table(&self, kind: TableKind) -> &PagedTable {
        match kind {
            TableKind::Employment => &self.employment,
            TableKind::Coop => &self.coop,
        }
    }

    pub fn table_mut(&mut self, kind: TableKind) -> &mut PagedTable {
        match kind {
            TableKind::Employment => &mut self.employment,
            TableKind::Coop => &mut self.coop,
        }
    }
}
