use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::catalog::CatalogError, model::knowledge::KnowledgeSource,
    service::catalog::TrimCatalog,
};

static CATALOG: &str = "CarQuery";

#[derive(Debug, Deserialize)]
struct TrimsResponse {
    #[serde(rename = "Trims", default)]
    trims: Vec<TrimEntry>,
}

#[derive(Debug, Deserialize)]
struct TrimEntry {
    #[serde(default)]
    model_trim: Option<String>,
}

/// Client for the CarQuery `getTrims` endpoint.
pub struct CarQueryClient {
    http: reqwest::Client,
    base_url: String,
}

impl CarQueryClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TrimCatalog for CarQueryClient {
    fn source(&self) -> KnowledgeSource {
        KnowledgeSource::CarQuery
    }

    async fn fetch_trims(&self, make: &str, model: &str) -> Result<Vec<String>, CatalogError> {
        let url = format!("{}/api/0.3/", self.base_url);
        let make = make.to_lowercase();
        let model = model.to_lowercase();

        debug!(make = %make, model = %model, "Requesting trims from CarQuery");

        let response = self
            .http
            .get(&url)
            .query(&[("cmd", "getTrims"), ("make", &make), ("model", &model)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                catalog: CATALOG,
                status,
            });
        }

        let body = response.text().await?;
        parse_trims(&body)
    }
}

/// Decodes a `getTrims` body, unwrapping the JSONP callback CarQuery adds by default.
fn parse_trims(body: &str) -> Result<Vec<String>, CatalogError> {
    let response: TrimsResponse =
        serde_json::from_str(strip_jsonp(body)).map_err(|source| CatalogError::Decode {
            catalog: CATALOG,
            source,
        })?;

    Ok(response
        .trims
        .into_iter()
        .filter_map(|entry| entry.model_trim)
        .map(|trim| trim.trim().to_string())
        .filter(|trim| !trim.is_empty())
        .collect())
}

fn strip_jsonp(body: &str) -> &str {
    let body = body.trim();
    if body.starts_with('{') {
        return body;
    }

    match (body.find('('), body.rfind(')')) {
        (Some(start), Some(end)) if start < end => &body[start + 1..end],
        _ => body,
    }
}
