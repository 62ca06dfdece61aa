//! Request types for the PrestaShop webservice client.
//!
//! This module provides the [`ApiRequest`] type and its builder for
//! constructing calls against webservice endpoints.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// HTTP methods supported by the webservice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partially updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A request body, forwarded verbatim to the transport.
///
/// The webservice accepts JSON payloads on write calls; plain text covers
/// anything else the caller wants to pass through. The variant selects the
/// `Content-Type` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    /// JSON content (`application/json`).
    Json(serde_json::Value),
    /// Plain text content (`text/plain`).
    Text(String),
}

impl RequestBody {
    /// Returns the MIME type string for this body.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Text(_) => "text/plain",
        }
    }

    /// Serializes the body into the bytes sent over the wire.
    #[must_use]
    pub fn into_payload(self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Text(text) => text,
        }
    }
}

/// A request to be sent to the webservice.
///
/// Use [`ApiRequest::builder`] to construct requests with the builder pattern.
/// Query parameters are held in a `BTreeMap` so the serialized query string
/// is deterministic.
///
/// # Example
///
/// ```rust
/// use prestashop_api::{ApiRequest, HttpMethod, RequestBody};
/// use serde_json::json;
///
/// // GET request with a per-call parameter
/// let get_request = ApiRequest::builder(HttpMethod::Get, "customers/")
///     .param("limit", "50")
///     .build();
///
/// // POST request with a JSON body
/// let post_request = ApiRequest::builder(HttpMethod::Post, "carts/")
///     .body(RequestBody::Json(json!({"cart": {}})))
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The endpoint path fragment, relative to the API base URL.
    pub endpoint: String,
    /// Per-call query parameters, merged over the standing parameters.
    pub params: BTreeMap<String, String>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// The request body, if any.
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    /// Creates a new builder for constructing an `ApiRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, endpoint: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(method, endpoint)
    }
}

/// Builder for constructing [`ApiRequest`] instances.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    method: HttpMethod,
    endpoint: String,
    params: BTreeMap<String, String>,
    extra_headers: Option<HashMap<String, String>>,
    body: Option<RequestBody>,
}

impl ApiRequestBuilder {
    fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            params: BTreeMap::new(),
            extra_headers: None,
            body: None,
        }
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Adds all query parameters from an iterator of pairs.
    #[must_use]
    pub fn params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the [`ApiRequest`].
    #[must_use]
    pub fn build(self) -> ApiRequest {
        ApiRequest {
            method: self.method,
            endpoint: self.endpoint,
            params: self.params,
            extra_headers: self.extra_headers,
            body: self.body,
        }
    }
}
