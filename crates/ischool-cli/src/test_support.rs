//! Fake content source shared by the unit tests

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use ischool_core::{
    About, ContentSource, Degree, Degrees, FacultyMember, NewsItem, Result, Table,
};
use serde_json::{json, Value};

#[derive(Default)]
pub struct FakeSource {
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn table(prefix: &str, n: usize) -> Table {
    Table::new(
        (0..n)
            .map(|i| match json!({"employer": format!("{prefix} {i}"), "city": "Rochester"}) {
                Value::Object(map) => map,
                _ => unreachable!(),
            })
            .collect(),
    )
}

#[async_trait]
impl ContentSource for FakeSource {
    async fn about(&self) -> Result<About> {
        self.hit();
        Ok(About {
            title: "We are the iSchool".to_string(),
            description: "Computing and information.".to_string(),
            quote: "Stay curious".to_string(),
            quote_author: "Dean".to_string(),
        })
    }

    async fn degrees(&self) -> Result<Degrees> {
        self.hit();
        Ok(Degrees {
            undergraduate: vec![Degree {
                title: "CS".to_string(),
                concentrations: Some(vec!["AI".to_string(), "Systems".to_string()]),
                ..Degree::default()
            }],
            graduate: Vec::new(),
        })
    }

    async fn employment_table(&self) -> Result<Table> {
        self.hit();
        Ok(table("Employer", 12))
    }

    async fn coop_table(&self) -> Result<Table> {
        self.hit();
        Ok(table("Coop", 3))
    }

    async fn faculty(&self) -> Result<Vec<FacultyMember>> {
        self.hit();
        Ok(["Bob", "Alice", "Bea"]
            .iter()
            .map(|name| FacultyMember {
                name: (*name).to_string(),
                title: "Professor".to_string(),
                office: "GOL-2100".to_string(),
                ..FacultyMember::default()
            })
            .collect())
    }

    async fn news(&self) -> Result<Vec<NewsItem>> {
        self.hit();
        Ok(vec![NewsItem {
            date: "2024-01-10".to_string(),
            title: "Hackathon".to_string(),
            description: "Students built things.".to_string(),
        }])
    }
}
