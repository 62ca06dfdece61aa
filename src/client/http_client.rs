//! HTTP client for the PrestaShop webservice.
//!
//! This module provides the [`Client`] type for making authenticated
//! requests against a shop's webservice API.

use std::collections::BTreeMap;

use crate::client::errors::ApiError;
use crate::client::request::{ApiRequest, HttpMethod, RequestBody};
use crate::client::response::{classify, decode_body, ApiResponse};
use crate::config::PrestashopConfig;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format requested from the webservice on every call.
const OUTPUT_FORMAT: &str = "JSON";

/// Client for the PrestaShop webservice.
///
/// The client handles:
/// - Base URL construction from the connection settings
/// - Standing authentication/formatting parameters on every call
/// - Per-call parameter merging (call-local, never shared state)
/// - Status-code-driven result classification
///
/// Construction performs no network I/O. The client is constructed once per
/// credential/domain pair and reused for all calls.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`, making it safe to share across async tasks.
/// Parameter merging is call-local, so concurrent calls cannot leak
/// parameters into one another.
///
/// # Example
///
/// ```rust,ignore
/// use prestashop_api::{Client, PrestashopConfig, ShopDomain, WebserviceKey};
///
/// let config = PrestashopConfig::builder()
///     .webservice_key(WebserviceKey::new("my-ws-key").unwrap())
///     .domain(ShopDomain::new("shop.example.com").unwrap())
///     .use_tls(true)
///     .build()
///     .unwrap();
///
/// let client = Client::new(config);
/// let features = client.check_api_features().await?;
/// ```
#[derive(Debug)]
pub struct Client {
    /// The internal reqwest HTTP client.
    http: reqwest::Client,
    /// API base URL, `{scheme}://{domain}/[prestashop/]api/`.
    base_url: String,
    /// User-Agent header sent with every request.
    user_agent: String,
    /// Connection settings, immutable for the client's lifetime.
    config: PrestashopConfig,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a new client from the given connection settings.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: PrestashopConfig) -> Self {
        let base_url = config.base_url();

        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("PrestaShop API Client v{CLIENT_VERSION} | Rust {rust_version}");

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url,
            user_agent,
            config,
        }
    }

    /// Returns the API base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the User-Agent header value for this client.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the connection settings for this client.
    #[must_use]
    pub const fn config(&self) -> &PrestashopConfig {
        &self.config
    }

    /// Issues a GET to the API root, returning the service's root resource
    /// listing. Used to validate credentials and reachability.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or an error status code.
    pub async fn check_api_features(&self) -> Result<ApiResponse, ApiError> {
        self.get("").await
    }

    /// Issues a GET request to the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or an error status code.
    pub async fn get(&self, endpoint: &str) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::builder(HttpMethod::Get, endpoint).build())
            .await
    }

    /// Issues a POST request with a JSON body to the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or an error status code.
    pub async fn post(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<ApiResponse, ApiError> {
        self.send(
            ApiRequest::builder(HttpMethod::Post, endpoint)
                .body(RequestBody::Json(body))
                .build(),
        )
        .await
    }

    /// Issues a PUT request with a JSON body to the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or an error status code.
    pub async fn put(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<ApiResponse, ApiError> {
        self.send(
            ApiRequest::builder(HttpMethod::Put, endpoint)
                .body(RequestBody::Json(body))
                .build(),
        )
        .await
    }

    /// Issues a PATCH request with a JSON body to the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or an error status code.
    pub async fn patch(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<ApiResponse, ApiError> {
        self.send(
            ApiRequest::builder(HttpMethod::Patch, endpoint)
                .body(RequestBody::Json(body))
                .build(),
        )
        .await
    }

    /// Issues a DELETE request to the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or an error status code.
    pub async fn delete(&self, endpoint: &str) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::builder(HttpMethod::Delete, endpoint).build())
            .await
    }

    /// Sends a request to the webservice.
    ///
    /// Merges the standing authentication/formatting parameters with the
    /// request's per-call parameters into a fresh map (per-call wins for
    /// that call only; no shared state is mutated), serializes the merged
    /// map into a query string, performs the HTTP call, and classifies the
    /// response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or an error status code.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let params = self.merge_params(&request.params);
        let url = format!(
            "{}{}?{}",
            self.base_url,
            request.endpoint,
            serialize_query(&params)
        );

        tracing::debug!(method = %request.method, endpoint = %request.endpoint, "dispatching webservice request");

        let mut req_builder = match request.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
            HttpMethod::Put => self.http.put(&url),
            HttpMethod::Patch => self.http.patch(&url),
            HttpMethod::Delete => self.http.delete(&url),
        }
        .header("User-Agent", &self.user_agent);

        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }

        if let Some(body) = request.body {
            req_builder = req_builder
                .header("Content-Type", body.content_type())
                .body(body.into_payload());
        }

        let response = req_builder.send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        let text = response.text().await.unwrap_or_default();

        classify(status, decode_body(content_type.as_deref(), text))
    }

    /// Builds the merged parameter map for one call: standing parameters
    /// first, then the per-call parameters on top.
    fn merge_params(&self, per_call: &BTreeMap<String, String>) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert("output_format".to_string(), OUTPUT_FORMAT.to_string());
        params.insert(
            "ws_key".to_string(),
            self.config.webservice_key().as_ref().to_string(),
        );
        for (key, value) in per_call {
            params.insert(key.clone(), value.clone());
        }
        params
    }
}

/// Serializes a parameter map into a query string.
///
/// Spaces in values are percent-encoded as `%20`; everything else is passed
/// through uninterpreted, leaving validity judgements (timestamps included)
/// to the remote service.
#[must_use]
pub fn serialize_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={}", value.replace(' ', "%20")))
        .collect::<Vec<_>>()
        .join("&")
}
