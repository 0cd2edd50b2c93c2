//! Console HTTP client for API interactions

use log::debug;
use reqwest::header::SET_COOKIE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::RwLock;
use std::time::Duration;

use crate::config::{api, headers};
use crate::error::{ConsoleError, Result};
use crate::store::LocalConfig;

use super::models::ApiErrorBody;

/// Console API client
#[derive(Debug)]
pub struct ConsoleClient {
    client: Client,
    endpoint: String,
    project: String,
    /// Project and API key from `client`, kept for project-scoped work
    project_id: Option<String>,
    key: Option<String>,
    /// Session cookie, replaced whenever the server sets a new one
    cookie: RwLock<Option<String>>,
}

impl ConsoleClient {
    /// Create a new client with optimized connection settings
    pub fn new(endpoint: &str, self_signed: bool) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .danger_accept_invalid_certs(self_signed)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project: api::CONSOLE_PROJECT.to_string(),
            project_id: None,
            key: None,
            cookie: RwLock::new(None),
        }
    }

    /// Build a client from stored preferences.
    ///
    /// The active session's endpoint wins over the configured one so the
    /// cookie is always sent to the server that issued it.
    pub fn from_config(config: &LocalConfig) -> Self {
        let session = config.current_session();
        let endpoint = session
            .map(|s| s.endpoint.as_str())
            .unwrap_or_else(|| config.effective_endpoint());
        debug!("Building console client for {}", endpoint);

        let mut client = Self::new(endpoint, config.self_signed);
        if let Some(project) = config.project.as_deref() {
            client = client.with_project_id(project);
        }
        if let Some(key) = config.key.as_deref() {
            client = client.with_key(key);
        }
        match session {
            Some(session) => client.with_cookie(&session.cookie),
            None => client,
        }
    }

    /// Set the session cookie
    pub fn with_cookie(self, cookie: &str) -> Self {
        self.set_cookie(Some(cookie.to_string()));
        self
    }

    /// Set the configured project ID
    pub fn with_project_id(mut self, project_id: &str) -> Self {
        self.project_id = Some(project_id.to_string());
        self
    }

    /// Set the API key
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    /// Endpoint requests go to by default
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Project ID sent with every request
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Project configured with `client --project`, if any
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// API key configured with `client --key`, if any
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Currently held session cookie
    pub fn cookie(&self) -> Option<String> {
        self.cookie.read().ok().and_then(|c| c.clone())
    }

    pub(crate) fn set_cookie(&self, cookie: Option<String>) {
        if let Ok(mut guard) = self.cookie.write() {
            *guard = cookie;
        }
    }

    /// Build a URL for `path`, optionally against another endpoint
    pub(crate) fn url(&self, endpoint: Option<&str>, path: &str) -> String {
        let base = endpoint
            .map(|e| e.trim_end_matches('/'))
            .unwrap_or(&self.endpoint);
        format!("{}/{}", base, path)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = self.without_session(builder);
        match self.cookie() {
            Some(cookie) => builder.header("Cookie", cookie),
            None => builder,
        }
    }

    /// Standard headers minus the session cookie
    fn without_session(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(headers::PROJECT, &self.project)
            .header(headers::RESPONSE_FORMAT, api::RESPONSE_FORMAT)
            .header("Content-Type", "application/json")
    }

    /// Create a POST request builder that carries no session cookie
    pub(crate) fn post_without_session(&self, url: &str) -> reqwest::RequestBuilder {
        self.without_session(self.client.post(url))
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a PUT request builder with standard headers
    pub(crate) fn put(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.put(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Remember the cookie from any Set-Cookie headers on the response.
    ///
    /// Returns the new cookie, or `None` if the response set none.
    pub(crate) fn capture_cookie(&self, response: &reqwest::Response) -> Option<String> {
        let pairs: Vec<&str> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .collect();

        if pairs.is_empty() {
            return None;
        }

        let cookie = pairs.join("; ");
        debug!("Captured session cookie ({} pair(s))", pairs.len());
        self.set_cookie(Some(cookie.clone()));
        Some(cookie)
    }

    /// Parse an API response, returning the server's error for non-success codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(Self::remote_error(response, error_context).await);
        }
        Ok(response.json().await?)
    }

    /// Check a response that carries no body of interest
    pub(crate) async fn expect_success(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<()> {
        if !response.status().is_success() {
            return Err(Self::remote_error(response, error_context).await);
        }
        Ok(())
    }

    /// Turn an error response into `ConsoleError::Remote`, keeping the server's message
    async fn remote_error(response: reqwest::Response, error_context: &str) -> ConsoleError {
        let status = response.status().as_u16();
        let body: ApiErrorBody = response.json().await.unwrap_or_default();
        debug!(
            "Request for {} failed: status={} type={} message={}",
            error_context, status, body.kind, body.message
        );

        let message = if body.message.is_empty() {
            format!("Failed to {}", error_context)
        } else {
            body.message
        };
        ConsoleError::Remote {
            status,
            kind: body.kind,
            message,
        }
    }
}

#[cfg(test)]
impl ConsoleClient {
    /// Create a test client against a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(base_url, false)
    }
}
