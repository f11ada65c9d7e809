//! HTTP client for the Notion database query API

use std::collections::HashMap;

use anyhow::{Context, Result};
use heatmap_core::{Record, Year};
use serde::Deserialize;
use serde_json::{Value, json};

const NOTION_API_URL: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";
const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest page size the query endpoint accepts
const PAGE_SIZE: u32 = 100;

pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<Page>,
    #[serde(default)]
    has_more: bool,
    next_cursor: Option<String>,
}

#[derive(Deserialize)]
struct Page {
    #[serde(default)]
    properties: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    code: Option<String>,
    message: String,
}

impl Page {
    /// Reduce the page to the named date property.
    ///
    /// A page without the property, or where it isn't a date, yields an
    /// empty record.
    fn record(&self, property: &str) -> Record {
        self.properties
            .get(property)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_default()
    }
}

impl NotionClient {
    pub fn new(token: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("notion-heatmap/{}", CURRENT_VERSION))
            .build()?;

        Ok(Self {
            http,
            base_url: NOTION_API_URL.to_string(),
            token: token.to_string(),
        })
    }

    /// Fetch every record of `database_id` whose `property` falls in `year`,
    /// following pagination until the result set is exhausted.
    pub async fn query_year(&self, database_id: &str, property: &str, year: &Year) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let body = query_body(property, year, cursor.as_deref());
            let page = self.query(database_id, &body).await?;

            records.extend(page.results.iter().map(|p| p.record(property)));

            match page.next_cursor {
                Some(next) if page.has_more => cursor = Some(next),
                _ => break,
            }
        }

        Ok(records)
    }

    /// POST /databases/:id/query
    async fn query(&self, database_id: &str, body: &Value) -> Result<QueryResponse> {
        let resp = self
            .http
            .post(format!("{}/databases/{}/query", self.base_url, database_id))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(body)
            .send()
            .await
            .context("Failed to connect to the Notion API")?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("Notion API request failed (HTTP {}): {}", status, error_message(&text));
        }

        resp.json()
            .await
            .context("Failed to parse Notion query response")
    }
}

/// Query body restricting results to one year of the date property,
/// oldest first.
fn query_body(property: &str, year: &Year, cursor: Option<&str>) -> Value {
    let (first_day, last_day) = year.bounds();

    let mut body = json!({
        "filter": {
            "and": [
                { "property": property, "date": { "on_or_after": first_day } },
                { "property": property, "date": { "on_or_before": last_day } }
            ]
        },
        "sorts": [
            { "property": property, "direction": "ascending" }
        ],
        "page_size": PAGE_SIZE
    });

    if let Some(cursor) = cursor {
        body["start_cursor"] = json!(cursor);
    }

    body
}

/// Pull the human-readable message out of a Notion error body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            code: Some(code),
            message,
        }) => format!("{} ({})", message, code),
        Ok(ErrorResponse { message, .. }) => message,
        Err(_) if body.trim().is_empty() => "empty response".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
