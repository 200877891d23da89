//! # plansync-asana
//!
//! Asana REST API client for plansync.
//! Docs: <https://developers.asana.com/reference/rest-api-reference>

mod service;
pub(crate) mod types;


/// Default Asana API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://app.asana.com/api/1.0";

/// Asana API client, scoped to one run.
pub struct AsanaClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl AsanaClient {
    /// Create a client against the default API endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    /// Create a client against a specific endpoint.
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }
}
