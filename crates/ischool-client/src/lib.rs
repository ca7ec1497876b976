//! HTTP client for the department content API
//!
//! One GET per call against a fixed base URL. No query strings, no auth
//! headers, no retries.

#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

use std::time::Duration;

use async_trait::async_trait;
use ischool_core::{
    About, ContentSource, Degrees, Endpoint, FacultyMember, IschoolError, NewsItem, Result, Table,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

/// Default proxy host the site reads from
pub const DEFAULT_BASE_URL: &str =
    "https://people.rit.edu/~dsbics/proxy/https://ischool.gccis.rit.edu";

/// HTTP client for the content API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client with no request timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize(base_url.into()),
        }
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| IschoolError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: normalize(base_url.into()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Generic GET request
    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        let url = self.url(endpoint);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| IschoolError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IschoolError::Status {
                endpoint: endpoint.path().to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| IschoolError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(endpoint = endpoint.path(), error = %e, "Malformed response");
            IschoolError::malformed(endpoint.path(), e.to_string())
        })
    }
}

fn normalize(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

// Response envelopes

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmploymentEnvelope {
    employment_table: EmploymentTable,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmploymentTable {
    professional_employment_information: Table,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoopEnvelope {
    coop_information: Table,
}

#[derive(Debug, Deserialize)]
struct FacultyEnvelope {
    /// Missing and `null` both mean no faculty
    #[serde(default)]
    faculty: Option<Vec<FacultyMember>>,
}

#[derive(Debug, Deserialize)]
struct NewsEnvelope {
    older: Vec<NewsItem>,
}

#[async_trait]
impl ContentSource for ApiClient {
    async fn about(&self) -> Result<About> {
        self.get(Endpoint::About).await
    }

    async fn degrees(&self) -> Result<Degrees> {
        self.get(Endpoint::Degrees).await
    }

    async fn employment_table(&self) -> Result<Table> {
        let envelope: EmploymentEnvelope = self.get(Endpoint::EmploymentTable).await?;
        Ok(envelope.employment_table.professional_employment_information)
    }

    async fn coop_table(&self) -> Result<Table> {
        let envelope: CoopEnvelope = self.get(Endpoint::CoopTable).await?;
        Ok(envelope.coop_information)
    }

    async fn faculty(&self) -> Result<Vec<FacultyMember>> {
        let envelope: FacultyEnvelope = self.get(Endpoint::Faculty).await?;
        Ok(envelope.faculty.unwrap_or_default())
    }

    async fn news(&self) -> Result<Vec<NewsItem>> {
        let envelope: NewsEnvelope = self.get(Endpoint::News).await?;
        Ok(envelope.older)
    }
}
