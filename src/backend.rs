//! Read-only client for the backend content API.
//!
//! The backend serves three endpoints, all `GET`:
//! `/api/posts` (post list), `/api/post?slug=` (single lookup, 404 when
//! absent) and `/api/export` (bulk export). Nothing here writes.

use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("resource not found")]
    NotFound,
    #[error("backend returned HTTP {0}")]
    Status(u16),
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid backend URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Post metadata as listed by `/api/posts`.
///
/// Fields the gateway does not inspect are carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `/api/posts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostList {
    #[serde(default)]
    pub posts: Vec<PostSummary>,
    #[serde(default)]
    pub description: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct ContentApi {
    client: Client,
    base: String,
}

impl ContentApi {
    pub fn new(base_url: &Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &Url) -> Self {
        Self {
            client,
            base: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    pub async fn list_posts(&self) -> Result<PostList, BackendError> {
        self.get_json("/api/posts", &[]).await
    }

    /// Look up a post or page by slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Value, BackendError> {
        self.get_json("/api/post", &[("slug", slug)]).await
    }

    pub async fn export_all(&self) -> Result<Value, BackendError> {
        self.get_json("/api/export", &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, BackendError> {
        let mut url = Url::parse(&format!("{}{}", self.base, path))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        debug!(url = %url, "backend GET");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        match response.status() {
            s if s.is_success() => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(BackendError::NotFound),
            s => Err(BackendError::Status(s.as_u16())),
        }
    }
}
