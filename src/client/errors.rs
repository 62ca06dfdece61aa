//! Error types for webservice calls.
//!
//! Every error surfaces directly to the caller; the client performs no
//! retries and no local recovery. Status-mapped errors carry the decoded
//! response body for inspection.
//!
//! # Example
//!
//! ```rust,ignore
//! use prestashop_api::ApiError;
//!
//! match client.get("customers/").await {
//!     Ok(response) => println!("Success: {response}"),
//!     Err(ApiError::Unauthorized { body }) => {
//!         println!("Webservice key rejected: {body}");
//!     }
//!     Err(other) => println!("Call failed: {other}"),
//! }
//! ```

use thiserror::Error;

use crate::client::response::ApiResponse;

/// Errors returned by webservice calls.
///
/// The first four variants map HTTP status codes (400, 401, 406, 500) and
/// carry the decoded response body. `UnsupportedService` is raised
/// client-side before any network traffic. `Network` wraps transport
/// failures from `reqwest`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The webservice rejected the request format (HTTP 400).
    #[error("Malformed request (400): {body}")]
    MalformedRequest {
        /// The decoded response body.
        body: ApiResponse,
    },

    /// The webservice key was rejected (HTTP 401).
    #[error("Unauthorized (401): {body}")]
    Unauthorized {
        /// The decoded response body.
        body: ApiResponse,
    },

    /// The platform reported a limit-exceeded condition (HTTP 406).
    #[error("Resource limit exceeded (406): {body}")]
    ResourceLimitExceeded {
        /// The decoded response body.
        body: ApiResponse,
    },

    /// The webservice failed internally (HTTP 500).
    #[error("Internal server error (500): {body}")]
    Internal {
        /// The decoded response body.
        body: ApiResponse,
    },

    /// The requested service name is not part of the supported resource set.
    /// Raised before any network traffic.
    #[error("Unsupported service '{service}'. Supported services: {supported}.")]
    UnsupportedService {
        /// The service name that was requested.
        service: String,
        /// Comma-separated list of supported service names.
        supported: &'static str,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unauthorized_error_carries_body_in_message() {
        let error = ApiError::Unauthorized {
            body: ApiResponse::Text("invalid key".to_string()),
        };
        let message = error.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("invalid key"));
    }

    #[test]
    fn test_malformed_request_error_carries_json_body() {
        let error = ApiError::MalformedRequest {
            body: ApiResponse::Json(json!({"errors": ["bad filter"]})),
        };
        let message = error.to_string();
        assert!(message.contains("400"));
        assert!(message.contains("bad filter"));
    }

    #[test]
    fn test_unsupported_service_error_names_service() {
        let error = ApiError::UnsupportedService {
            service: "bogus".to_string(),
            supported: "customers, orders, carts",
        };
        let message = error.to_string();
        assert!(message.contains("bogus"));
        assert!(message.contains("customers"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &ApiError::Internal {
            body: ApiResponse::Empty,
        };
        let _ = error;
    }
}
