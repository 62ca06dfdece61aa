//! HTTP client functionality for the PrestaShop webservice.
//!
//! This module provides the [`Client`] for making webservice calls, the
//! [`ApiRequest`] builder for full per-call control, the [`ApiResponse`]
//! result type, and the [`ApiError`] taxonomy.
//!
//! # Example
//!
//! ```rust,ignore
//! use prestashop_api::{ApiRequest, Client, HttpMethod};
//!
//! let request = ApiRequest::builder(HttpMethod::Get, "customers/")
//!     .param("limit", "50")
//!     .build();
//!
//! let response = client.send(request).await?;
//! ```

mod errors;
mod http_client;
mod request;
mod response;

pub use errors::ApiError;
pub use http_client::{serialize_query, Client, CLIENT_VERSION};
pub use request::{ApiRequest, ApiRequestBuilder, HttpMethod, RequestBody};
pub use response::{classify, decode_body, ApiResponse};
