//! Where section content comes from

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{About, Degrees, FacultyMember, NewsItem, Table};

/// The fixed set of API paths the site reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    About,
    Degrees,
    EmploymentTable,
    CoopTable,
    Faculty,
    News,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::About,
        Endpoint::Degrees,
        Endpoint::EmploymentTable,
        Endpoint::CoopTable,
        Endpoint::Faculty,
        Endpoint::News,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::About => "/api/about",
            Endpoint::Degrees => "/api/degrees/",
            Endpoint::EmploymentTable => "/api/employment/employmentTable",
            Endpoint::CoopTable => "/api/employment/coopTable/coopInformation",
            Endpoint::Faculty => "/api/people/faculty/",
            Endpoint::News => "/api/news",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Provider of already-unwrapped section payloads
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn about(&self) -> Result<About>;

    async fn degrees(&self) -> Result<Degrees>;

    /// Rows of `employmentTable.professionalEmploymentInformation`
    async fn employment_table(&self) -> Result<Table>;

    /// Rows of `coopInformation`
    async fn coop_table(&self) -> Result<Table>;

    async fn faculty(&self) -> Result<Vec<FacultyMember>>;

    /// The `older` news list
    async fn news(&self) -> Result<Vec<NewsItem>>;
}
