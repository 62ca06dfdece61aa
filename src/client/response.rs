//! Response types and status classification for the webservice client.
//!
//! The webservice answers with JSON when asked (`output_format=JSON`), but
//! error pages and misconfigured shops can produce HTML or plain text. The
//! decoding here mirrors that reality: JSON when the `Content-Type` says so
//! and the body parses, raw text otherwise.

use std::fmt;

use crate::client::errors::ApiError;

/// A decoded webservice response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiResponse {
    /// Decoded JSON body.
    Json(serde_json::Value),
    /// Raw text body (non-JSON content type, or JSON decoding failed).
    Text(String),
    /// Empty success (HTTP 204).
    Empty,
}

impl ApiResponse {
    /// Returns the decoded JSON value, if this response carried one.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the raw text body, if this response carried one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns `true` for an empty (HTTP 204) response.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Empty => Ok(()),
        }
    }
}

/// Decodes a response body according to its `Content-Type`.
///
/// JSON is attempted only when the content type says JSON; a body that
/// fails to decode falls back to raw text rather than erroring.
#[must_use]
pub fn decode_body(content_type: Option<&str>, text: String) -> ApiResponse {
    let says_json = content_type.is_some_and(|ct| ct.contains("application/json"));
    if says_json {
        match serde_json::from_str(&text) {
            Ok(value) => ApiResponse::Json(value),
            Err(_) => ApiResponse::Text(text),
        }
    } else {
        ApiResponse::Text(text)
    }
}

/// Classifies a decoded response by HTTP status code.
///
/// | Status | Outcome |
/// |---|---|
/// | 200 | `Ok` with the decoded body |
/// | 204 | `Ok(ApiResponse::Empty)` |
/// | 400 | `Err(ApiError::MalformedRequest)` |
/// | 401 | `Err(ApiError::Unauthorized)` |
/// | 406 | `Err(ApiError::ResourceLimitExceeded)` |
/// | 500 | `Err(ApiError::Internal)` |
/// | other | `Ok` with the decoded body (lenient fallback) |
///
/// # Errors
///
/// Returns the typed [`ApiError`] matching the status code, carrying the
/// decoded body for caller inspection.
pub fn classify(status: u16, body: ApiResponse) -> Result<ApiResponse, ApiError> {
    match status {
        200 => Ok(body),
        204 => Ok(ApiResponse::Empty),
        400 => Err(ApiError::MalformedRequest { body }),
        401 => Err(ApiError::Unauthorized { body }),
        406 => Err(ApiError::ResourceLimitExceeded { body }),
        500 => Err(ApiError::Internal { body }),
        _ => {
            tracing::warn!(status, "unexpected status code, returning body as-is");
            Ok(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_json_body() {
        let body = decode_body(
            Some("application/json; charset=utf-8"),
            r#"{"customers":[]}"#.to_string(),
        );
        assert_eq!(body, ApiResponse::Json(json!({"customers": []})));
    }

    #[test]
    fn test_decode_falls_back_to_text_on_invalid_json() {
        let body = decode_body(Some("application/json"), "not json at all".to_string());
        assert_eq!(body, ApiResponse::Text("not json at all".to_string()));
    }

    #[test]
    fn test_decode_non_json_content_type_is_text() {
        let body = decode_body(Some("text/html"), "<html></html>".to_string());
        assert_eq!(body, ApiResponse::Text("<html></html>".to_string()));

        // JSON-looking body still stays text without the JSON content type
        let body = decode_body(None, r#"{"customers":[]}"#.to_string());
        assert_eq!(body, ApiResponse::Text(r#"{"customers":[]}"#.to_string()));
    }

    #[test]
    fn test_classify_200_returns_body() {
        let body = ApiResponse::Json(json!({"customers": []}));
        let result = classify(200, body.clone()).unwrap();
        assert_eq!(result, body);
    }

    #[test]
    fn test_classify_204_returns_empty() {
        let result = classify(204, ApiResponse::Text(String::new())).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_classify_400_is_malformed_request() {
        let body = ApiResponse::Text("bad input".to_string());
        let result = classify(400, body);
        assert!(matches!(result, Err(ApiError::MalformedRequest { .. })));
    }

    #[test]
    fn test_classify_401_is_unauthorized_carrying_body() {
        let body = ApiResponse::Text("key rejected".to_string());
        match classify(401, body) {
            Err(ApiError::Unauthorized { body }) => {
                assert_eq!(body.as_text(), Some("key rejected"));
            }
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_406_is_resource_limit_exceeded() {
        let result = classify(406, ApiResponse::Text("limit".to_string()));
        assert!(matches!(
            result,
            Err(ApiError::ResourceLimitExceeded { .. })
        ));
    }

    #[test]
    fn test_classify_500_is_internal_regardless_of_body() {
        let result = classify(500, ApiResponse::Json(json!({"fine": true})));
        assert!(matches!(result, Err(ApiError::Internal { .. })));

        let result = classify(500, ApiResponse::Text(String::new()));
        assert!(matches!(result, Err(ApiError::Internal { .. })));
    }

    #[test]
    fn test_classify_unknown_status_is_lenient() {
        let body = ApiResponse::Text("teapot".to_string());
        let result = classify(418, body.clone()).unwrap();
        assert_eq!(result, body);
    }

    #[test]
    fn test_display_formats_each_variant() {
        assert_eq!(ApiResponse::Json(json!({"a": 1})).to_string(), r#"{"a":1}"#);
        assert_eq!(ApiResponse::Text("raw".to_string()).to_string(), "raw");
        assert_eq!(ApiResponse::Empty.to_string(), "");
    }
}
