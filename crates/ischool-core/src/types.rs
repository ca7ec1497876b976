//! Content types returned by the department API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// About text plus the featured quote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub quote_author: String,
}

impl About {
    pub fn quote(&self) -> Quote {
        Quote {
            text: self.quote.clone(),
            author: self.quote_author.clone(),
        }
    }
}

/// Quote shown in the About overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// One degree program
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Degree {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub concentrations: Option<Vec<String>>,
    #[serde(default)]
    pub available_certificates: Option<Vec<String>>,
}

impl Degree {
    pub fn offers(&self, concentration: &str) -> bool {
        self.concentrations
            .as_ref()
            .is_some_and(|list| list.iter().any(|c| c == concentration))
    }
}

/// Degree listing partitioned by level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degrees {
    #[serde(default)]
    pub undergraduate: Vec<Degree>,
    #[serde(default)]
    pub graduate: Vec<Degree>,
}

/// Supplementary detail shown when a concentration is selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcentrationDetail {
    pub name: String,
    /// Full concentration list of the first undergraduate degree offering `name`
    pub related: Option<Vec<String>>,
}

impl Degrees {
    /// First undergraduate degree (in list order) whose concentrations contain `concentration`
    pub fn undergraduate_offering(&self, concentration: &str) -> Option<&Degree> {
        self.undergraduate.iter().find(|d| d.offers(concentration))
    }

    pub fn concentration_detail(&self, concentration: &str) -> ConcentrationDetail {
        ConcentrationDetail {
            name: concentration.to_string(),
            related: self
                .undergraduate_offering(concentration)
                .and_then(|d| d.concentrations.clone()),
        }
    }
}

/// A faculty directory entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyMember {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub office: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub image_path: String,
}

/// Treat an empty string the same as an absent field
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

impl FacultyMember {
    pub fn email(&self) -> Option<&str> {
        present(&self.email)
    }

    pub fn phone(&self) -> Option<&str> {
        present(&self.phone)
    }

    pub fn website(&self) -> Option<&str> {
        present(&self.website)
    }
}

/// A news entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Employment or co-op table. Row shape is decided by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    pub rows: Vec<Map<String, Value>>,
}

impl Table {
    pub fn new(rows: Vec<Map<String, Value>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column headings taken from the keys of the first row, upper-cased
    pub fn headings(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|row| row.keys().map(|k| k.to_uppercase()).collect())
            .unwrap_or_default()
    }

    /// Cell text for one row, in that row's own key order
    pub fn cells(row: &Map<String, Value>) -> Vec<String> {
        row.values().map(cell_text).collect()
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_table_headings_follow_first_row_order() {
        let table = Table::new(vec![
            row(json!({"employer": "Acme", "degree": "BS", "city": "Rochester"})),
            row(json!({"employer": "Initech", "degree": "MS", "city": "Austin"})),
        ]);
        assert_eq!(table.headings(), vec!["EMPLOYER", "DEGREE", "CITY"]);
    }

    #[test]
    fn test_ragged_row_keeps_its_own_cells() {
        let table = Table::new(vec![
            row(json!({"employer": "Acme", "city": "Rochester"})),
            row(json!({"employer": "Initech", "term": 2231, "city": null})),
        ]);
        assert_eq!(table.headings().len(), 2);
        assert_eq!(Table::cells(&table.rows[1]), vec!["Initech", "2231", ""]);
    }

    #[test]
    fn test_empty_table_has_no_headings() {
        assert!(Table::default().headings().is_empty());
    }

    #[test]
    fn test_degree_deserializes_camel_case() {
        let degree: Degree = serde_json::from_value(json!({
            "title": "HCC",
            "description": "Human-centered computing",
            "availableCertificates": ["Web Development"]
        }))
        .unwrap();
        assert!(degree.concentrations.is_none());
        assert_eq!(
            degree.available_certificates,
            Some(vec!["Web Development".to_string()])
        );
    }

    #[test]
    fn test_faculty_blank_contact_fields_are_absent() {
        let member = FacultyMember {
            name: "Bob".to_string(),
            email: Some(String::new()),
            phone: Some("585-475-0000".to_string()),
            ..FacultyMember::default()
        };
        assert_eq!(member.email(), None);
        assert_eq!(member.phone(), Some("585-475-0000"));
        assert_eq!(member.website(), None);
    }
}
