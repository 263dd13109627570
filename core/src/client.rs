//! Read-only HTTP client for the Asana REST API.
//!
//! Covers the four endpoints the reporter needs: the `/users/me`
//! connection check plus the workspace, project, and task listings.
//! Collection endpoints are paginated; each request asks for `limit=100`
//! and follows `next_page.offset` until the API stops returning one.
//! There is no retry or backoff: the first failure is surfaced as-is.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Project, Task, User, Workspace};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://app.asana.com/api/1.0";

/// Page size for collection requests.
const PAGE_LIMIT: &str = "100";

/// Fields requested for project listings. Everything the status
/// derivation and the report table need, nothing more.
const PROJECT_OPT_FIELDS: &str = "name,completed,archived,current_status.title,current_status.color";

/// Fields requested for task listings.
const TASK_OPT_FIELDS: &str = "completed";

/// Errors from API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The credential was rejected (HTTP 401/403).
    #[error("Asana rejected the credential; check that the access token is valid")]
    Unauthorized,

    /// The API returned a non-success status.
    #[error("Asana API error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body, or the raw body.
        message: String,
    },

    /// Transport-level failure (DNS, TLS, connect, ...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("unexpected API response: {0}")]
    Parse(String),
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Envelope for single-object responses: `{ "data": {...} }`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Envelope for collection responses: `{ "data": [...], "next_page": ... }`.
#[derive(Debug, Deserialize)]
struct Page<T> {
    data: Vec<T>,
    #[serde(default)]
    next_page: Option<NextPage>,
}

#[derive(Debug, Deserialize)]
struct NextPage {
    offset: String,
}

/// Asana error body: `{ "errors": [{ "message": "..." }, ...] }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Asana API client.
pub struct AsanaClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl AsanaClient {
    /// Creates a client against the production API.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom API root. Used by tests to point
    /// at a mock server.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Connection check: fetches the authenticated user.
    pub async fn current_user(&self) -> ApiResult<User> {
        let body = self.get(&format!("{}/users/me", self.base_url), &[]).await?;
        let envelope: Envelope<User> =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(envelope.data)
    }

    /// Lists every workspace visible to the credential.
    pub async fn workspaces(&self) -> ApiResult<Vec<Workspace>> {
        self.fetch_all(&format!("{}/workspaces", self.base_url), &[])
            .await
    }

    /// Lists the projects of one workspace.
    pub async fn projects(&self, workspace_gid: &str) -> ApiResult<Vec<Project>> {
        self.fetch_all(
            &format!("{}/projects", self.base_url),
            &[
                ("workspace", workspace_gid),
                ("opt_fields", PROJECT_OPT_FIELDS),
            ],
        )
        .await
    }

    /// Lists the tasks of one project.
    pub async fn tasks(&self, project_gid: &str) -> ApiResult<Vec<Task>> {
        self.fetch_all(
            &format!("{}/tasks", self.base_url),
            &[("project", project_gid), ("opt_fields", TASK_OPT_FIELDS)],
        )
        .await
    }

    /// Fetches a collection endpoint page by page until `next_page` is
    /// absent.
    async fn fetch_all<T: DeserializeOwned>(
        &self,
        url: &str,
        base_query: &[(&str, &str)],
    ) -> ApiResult<Vec<T>> {
        let mut items = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut query: Vec<(&str, &str)> = base_query.to_vec();
            query.push(("limit", PAGE_LIMIT));
            if let Some(offset) = offset.as_deref() {
                query.push(("offset", offset));
            }

            let body = self.get(url, &query).await?;
            let page: Page<T> =
                serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;

            items.extend(page.data);

            match page.next_page {
                Some(next) => offset = Some(next.offset),
                None => return Ok(items),
            }
        }
    }

    /// Performs one GET request and returns the raw body of a successful
    /// response.
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> ApiResult<String> {
        let response = self
            .client
            .get(url)
            .query(query)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        Ok(body)
    }
}

/// Pulls the first message out of an Asana error body, falling back to the
/// raw body when it does not parse.
fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => parsed.errors[0].message.clone(),
        _ => body.trim().to_string(),
    }
}
