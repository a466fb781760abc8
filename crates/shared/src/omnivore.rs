use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;

// One fixed page of up to 9999 items matching everything; no cursor
// follow-up, so anything past the first page is silently omitted.
const SEARCH_ALL_QUERY: &str = r#"
{
    search(first: 9999, after: null, query: "in:all") {
        ... on SearchSuccess {
            edges {
                node {
                    pageType
                    contentReader
                    createdAt
                    isArchived
                    readingProgressPercent
                    readingProgressTopPercent
                    readingProgressAnchorIndex
                    labels {
                        name
                    }
                    state
                    readAt
                    savedAt
                }
            }
        }
        ... on SearchError {
            errorCodes
        }
    }
}
"#;

/// Metadata for one saved item, as returned by the search query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub page_type: Option<String>,
    pub content_reader: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_archived: bool,
    pub reading_progress_percent: f64,
    pub reading_progress_top_percent: Option<f64>,
    pub reading_progress_anchor_index: Option<i64>,
    pub labels: Option<Vec<Label>>,
    pub state: Option<String>,
    pub read_at: Option<DateTime<Utc>>,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    data: Option<SearchData>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Deserialize)]
struct SearchData {
    search: SearchResult,
}

// The search field is a union: a successful query returns edges, a failed
// one returns error codes. Serde picks the variant whose fields match.
#[derive(Deserialize)]
#[serde(untagged)]
enum SearchResult {
    Success {
        edges: Vec<Edge>,
    },
    Error {
        #[serde(rename = "errorCodes")]
        error_codes: Vec<String>,
    },
}

#[derive(Deserialize)]
struct Edge {
    node: SavedItem,
}

pub struct OmnivoreClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl OmnivoreClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch metadata for every saved item in the library, in a single page
    /// of up to 9999 items. No retries; any transport or query failure
    /// aborts the run.
    pub async fn fetch_library(&self) -> Result<Vec<SavedItem>> {
        let request = GraphqlRequest {
            query: SEARCH_ALL_QUERY,
        };

        // The API expects the raw key in the Authorization header, without
        // a "Bearer " prefix.
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to fetch library data from Omnivore")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unknown error"));
            anyhow::bail!("Omnivore API returned error: {} - {}", status, error_text);
        }

        let body = response
            .json::<GraphqlResponse>()
            .await
            .context("Failed to parse Omnivore API response")?;

        if let Some(errors) = body.errors {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            anyhow::bail!("Omnivore API reported errors: {}", messages.join("; "));
        }

        let data = body
            .data
            .context("Omnivore API response contained no data")?;

        match data.search {
            SearchResult::Success { edges } => Ok(edges.into_iter().map(|e| e.node).collect()),
            SearchResult::Error { error_codes } => {
                anyhow::bail!(
                    "Search query failed with error codes: {}",
                    error_codes.join(", ")
                )
            }
        }
    }
}
