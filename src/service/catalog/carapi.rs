use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::{
    config::CarApiCredentials, error::catalog::CatalogError, model::knowledge::KnowledgeSource,
    service::catalog::TrimCatalog,
};

static CATALOG: &str = "CarAPI";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    api_token: &'a str,
    api_secret: &'a str,
}

#[derive(Debug, Deserialize)]
struct TrimsResponse {
    #[serde(default)]
    data: Vec<TrimEntry>,
}

#[derive(Debug, Deserialize)]
struct TrimEntry {
    #[serde(default)]
    trim: Option<String>,
}

/// Client for CarAPI's trims endpoint.
///
/// CarAPI exchanges an API token and secret for a JWT at `/api/auth/login`. The JWT is
/// kept for subsequent requests until the API answers `401 Unauthorized`, which drops it
/// so the next request logs in again. Without credentials no request is made.
pub struct CarApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<CarApiCredentials>,
    token: Mutex<Option<String>>,
}

impl CarApiClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        credentials: Option<CarApiCredentials>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            token: Mutex::new(None),
        }
    }

    /// Returns the cached JWT, logging in first when there is none.
    async fn token(&self) -> Result<String, CatalogError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(CatalogError::MissingCredentials { catalog: CATALOG })?;

        let mut token = self.token.lock().await;
        if let Some(token) = token.as_ref() {
            return Ok(token.clone());
        }

        debug!("Logging in to CarAPI");

        let response = self
            .http
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&LoginRequest {
                api_token: &credentials.api_token,
                api_secret: &credentials.api_secret,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                catalog: CATALOG,
                status,
            });
        }

        let jwt = response.text().await?.trim().to_string();
        *token = Some(jwt.clone());

        Ok(jwt)
    }

    async fn clear_token(&self) {
        *self.token.lock().await = None;
    }
}

#[async_trait]
impl TrimCatalog for CarApiClient {
    fn source(&self) -> KnowledgeSource {
        KnowledgeSource::CarApi
    }

    async fn fetch_trims(&self, make: &str, model: &str) -> Result<Vec<String>, CatalogError> {
        let jwt = self.token().await?;
        let make = make.to_lowercase();
        let model = model.to_lowercase();

        debug!(make = %make, model = %model, "Requesting trims from CarAPI");

        let response = self
            .http
            .get(format!("{}/api/v1/trims", self.base_url))
            .query(&[("make", &make), ("model", &model)])
            .bearer_auth(jwt)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.clear_token().await;
        }
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                catalog: CATALOG,
                status,
            });
        }

        let body = response.text().await?;
        let response: TrimsResponse =
            serde_json::from_str(&body).map_err(|source| CatalogError::Decode {
                catalog: CATALOG,
                source,
            })?;

        Ok(response
            .data
            .into_iter()
            .filter_map(|entry| entry.trim)
            .map(|trim| trim.trim().to_string())
            .filter(|trim| !trim.is_empty())
            .collect())
    }
}
