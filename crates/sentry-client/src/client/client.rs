use crate::{ClientError, ClientResult, Project};

use std::time::Duration;

use log::trace;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};
use sentry_config::ApiConfig;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Error body returned by the Sentry API, e.g. `{"detail": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// HTTP client for the Sentry REST API
///
/// Cheap to share: the inner reqwest client is pooled and safe for
/// concurrent use, so data sources hold it behind an `Arc`.
pub struct Client {
    pub base_url: Url,
    token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a client with reqwest defaults
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://sentry.io/api/")
    /// * `token` - Optional auth token sent as a bearer token
    pub fn new(base_url: &str, token: Option<&str>) -> ClientResult<Self> {
        Self::with_http_client(base_url, token, ReqwestClient::new())
    }

    /// Create a client from provider configuration (user agent and timeout included)
    pub fn from_config(config: &ApiConfig) -> ClientResult<Self> {
        let http = ReqwestClient::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Self::with_http_client(&config.base_url, config.token.as_deref(), http)
    }

    fn with_http_client(
        base_url: &str,
        token: Option<&str>,
        client: ReqwestClient,
    ) -> ClientResult<Self> {
        Ok(Self {
            base_url: Self::normalize_base_url(base_url)?,
            token: token.map(String::from),
            client,
        })
    }

    /// Parse the base URL and make sure its path ends with '/'
    fn normalize_base_url(base_url: &str) -> ClientResult<Url> {
        let mut url = Url::parse(base_url)
            .map_err(|e| ClientError::invalid_url(base_url, e.to_string()))?;

        if url.cannot_be_a_base() {
            return Err(ClientError::invalid_url(
                base_url,
                "URL cannot be used as an API root",
            ));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(url)
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Build an endpoint URL below the base URL. Segments are percent-encoded
    /// and the result keeps Sentry's trailing slash.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_url(self.base_url.as_str(), "cannot append path"))?
            .pop_if_empty()
            .extend(segments)
            .push("");
        Ok(url)
    }

    /// Build a request with the optional bearer token
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut req = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json");

        if let Some(ref token) = self.token {
            req = req.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        req
    }

    /// Execute request and decode the body, mapping non-2xx answers to `ClientError::Api`
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        trace!("Sentry API responded {} ({} bytes)", status, body.len());

        if !status.is_success() {
            let detail = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(ErrorBody {
                    detail: Some(detail),
                }) => detail,
                _ if !body.trim().is_empty() => body.trim().to_string(),
                _ => status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            };
            return Err(ClientError::api_error(status.as_u16(), detail));
        }

        Ok(serde_json::from_str(&body)?)
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// Get a project by organization slug and project slug
    pub async fn get_project(&self, organization: &str, slug: &str) -> ClientResult<Project> {
        let url = self.endpoint(&["0", "projects", organization, slug])?;
        let req = self.request(Method::GET, url);
        self.execute(req).await
    }
}
