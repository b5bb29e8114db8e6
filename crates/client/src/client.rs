//! Main request client implementation

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::options::RequestOptions;
use crate::query::QueryParams;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument, warn, Span};
use url::Url;
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Typed HTTP client with a uniform request/response contract
///
/// This client wraps `reqwest` and adds:
/// - URL resolution against a configured base URL, with ordered,
///   `None`-skipping query parameters
/// - Default JSON headers with injected bearer-token authentication
/// - A fixed response contract: non-2xx becomes [`ApiError::Status`],
///   JSON success bodies are parsed, non-JSON success bodies resolve to
///   an empty object
/// - Request correlation IDs for tracing
///
/// Each call is one independent HTTP round trip: no caching, no
/// retries, no deduplication.
#[derive(Clone)]
pub struct ApiClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl ApiClient {
    /// Create a new client with default configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let inner = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // HTTP verbs
    // -------------------------------------------------------------------------

    /// Perform a GET request
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.get_with(endpoint, RequestOptions::default()).await
    }

    /// Perform a GET request with options
    #[instrument(skip(self, options), fields(request_id))]
    pub async fn get_with<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        self.request(Method::GET, endpoint, Option::<&()>::None, options)
            .await
    }

    /// Perform a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.post_with(endpoint, Some(body), RequestOptions::default())
            .await
    }

    /// Perform a POST request with an optional JSON body and options
    #[instrument(skip(self, body, options), fields(request_id))]
    pub async fn post_with<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> ApiResult<T> {
        self.request(Method::POST, endpoint, body, options).await
    }

    /// Perform a PUT request with a JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.put_with(endpoint, Some(body), RequestOptions::default())
            .await
    }

    /// Perform a PUT request with an optional JSON body and options
    #[instrument(skip(self, body, options), fields(request_id))]
    pub async fn put_with<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> ApiResult<T> {
        self.request(Method::PUT, endpoint, body, options).await
    }

    /// Perform a PATCH request with a JSON body
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.patch_with(endpoint, Some(body), RequestOptions::default())
            .await
    }

    /// Perform a PATCH request with an optional JSON body and options
    #[instrument(skip(self, body, options), fields(request_id))]
    pub async fn patch_with<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> ApiResult<T> {
        self.request(Method::PATCH, endpoint, body, options).await
    }

    /// Perform a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.delete_with(endpoint, RequestOptions::default()).await
    }

    /// Perform a DELETE request with options
    #[instrument(skip(self, options), fields(request_id))]
    pub async fn delete_with<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        self.request(Method::DELETE, endpoint, Option::<&()>::None, options)
            .await
    }

    // -------------------------------------------------------------------------
    // Request pipeline
    // -------------------------------------------------------------------------

    /// Resolve an endpoint against the base URL and append parameters
    fn build_url(&self, endpoint: &str, params: &QueryParams) -> ApiResult<Url> {
        let mut url = if self.config.base_url.is_empty() {
            Url::parse(endpoint).map_err(|_| {
                ApiError::config(format!(
                    "endpoint {endpoint:?} must be an absolute URL when no base_url is configured"
                ))
            })?
        } else {
            let base = Url::parse(&self.config.base_url)?;
            base.join(endpoint)?
        };

        params.apply(&mut url);
        Ok(url)
    }

    /// Execute a single request and apply the response contract
    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> ApiResult<T> {
        let url = self.build_url(endpoint, &options.params)?;
        let request_id = Uuid::new_v4().to_string();
        Span::current().record("request_id", request_id.as_str());

        debug!(
            request_id = %request_id,
            method = %method,
            url = %url,
            "Dispatching request"
        );

        let mut request = self
            .inner
            .request(method, url)
            .header(X_REQUEST_ID, &request_id)
            .header(CONTENT_TYPE, "application/json");

        if let Some(provider) = &self.config.auth {
            if let Some(token) = provider.token() {
                request = request.header(AUTHORIZATION, format!("Bearer {token}"));
            }
        }

        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        // Caller headers go last so they can override the defaults.
        if !options.headers.is_empty() {
            request = request.headers(options.headers);
        }

        let response = request.send().await.map_err(ApiError::Transport)?;
        self.handle_response(&request_id, response).await
    }

    /// Handle an HTTP response and deserialize the body
    async fn handle_response<T: DeserializeOwned>(
        &self,
        request_id: &str,
        response: Response,
    ) -> ApiResult<T> {
        let status = response.status();

        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or_default().to_string();
            // A body read failure degrades to an empty message rather
            // than masking the status error.
            let body = response.text().await.unwrap_or_default();
            warn!(
                request_id = %request_id,
                status = status.as_u16(),
                "Request failed"
            );
            return Err(ApiError::from_response(status.as_u16(), status_text, body));
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        if !is_json {
            // Empty and non-JSON success bodies resolve to an empty
            // object; `T` must tolerate `{}` on such endpoints.
            debug!(request_id = %request_id, "Non-JSON success body, resolving empty object");
            return serde_json::from_value(serde_json::Value::Object(serde_json::Map::new()))
                .map_err(ApiError::Json);
        }

        let bytes = response.bytes().await.map_err(ApiError::Transport)?;
        debug!(request_id = %request_id, bytes = bytes.len(), "Request succeeded");
        serde_json::from_slice(&bytes).map_err(ApiError::Json)
    }
}
