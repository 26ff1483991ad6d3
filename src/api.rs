// API client module: a small blocking HTTP client for the SmartCurator
// backend. Every call goes through `ApiClient::request`, which owns the
// JSON headers, bearer auth and the error normalisation. The client keeps
// no token of its own; callers pass one per request.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ApiError;
use crate::types::{ContentSubmission, ContentSummary, Credentials, Page, RegisterRequest, TokenResponse};

/// Blocking client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Per-call options for `ApiClient::request`. The default is a `GET`
/// without body or token.
#[derive(Debug, Default, Clone)]
pub struct RequestOptions<'a> {
    pub method: Method,
    pub body: Option<serde_json::Value>,
    pub token: Option<&'a str>,
}

impl<'a> RequestOptions<'a> {
    pub fn get() -> Self {
        Self::default()
    }

    /// `POST` with `body` serialized to JSON.
    pub fn post<B: Serialize>(body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::Encode)?;
        Ok(RequestOptions {
            method: Method::POST,
            body: Some(body),
            token: None,
        })
    }

    pub fn with_token(mut self, token: &'a str) -> Self {
        self.token = Some(token);
        self
    }
}

impl ApiClient {
    /// Create an ApiClient for `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: Config::new(base_url).api_base_url,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base_url)
    }

    /// Create an ApiClient configured from `SMARTCURATOR_API_BASE_URL`,
    /// or `http://localhost:8000` when unset.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&Config::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one request/response cycle against `endpoint` and decode the
    /// JSON body as `T`. Non-2xx statuses become `ApiError::Backend` carrying
    /// the backend's `detail` or the generic fallback message.
    pub fn request<T: DeserializeOwned>(&self, endpoint: &str, options: RequestOptions<'_>) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(
            method = %options.method,
            url = %url,
            authenticated = options.token.is_some(),
            "sending request"
        );

        let mut req = self
            .client
            .request(options.method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-store");
        if let Some(token) = options.token {
            req = req.bearer_auth(token);
        }
        if let Some(body) = &options.body {
            req = req.json(body);
        }

        let res = req.send()?;
        let status = res.status();
        let bytes = res.bytes()?;
        debug!(status = status.as_u16(), url = %url, "received response");

        if !status.is_success() {
            let err = ApiError::from_error_body(status.as_u16(), &bytes);
            warn!(status = status.as_u16(), url = %url, error = %err, "backend rejected request");
            return Err(err);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Exchange credentials for an access token.
    pub fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.request("/auth/login", RequestOptions::post(credentials)?)
    }

    /// Register a user. The backend's response is returned untouched.
    pub fn register(&self, req: &RegisterRequest) -> Result<serde_json::Value, ApiError> {
        self.request("/auth/register", RequestOptions::post(req)?)
    }

    /// Queue a content item for backend processing.
    pub fn quick_add_content(&self, submission: &ContentSubmission, token: &str) -> Result<serde_json::Value, ApiError> {
        self.request("/contents/", RequestOptions::post(submission)?.with_token(token))
    }

    /// List the caller's own content items, one page at a time.
    pub fn my_contents(&self, token: &str, page: Page) -> Result<Vec<ContentSummary>, ApiError> {
        let endpoint = format!("/contents/my?skip={}&limit={}", page.skip, page.limit);
        self.request(&endpoint, RequestOptions::get().with_token(token))
    }
}
