//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use prestashop_api::{WebserviceKey, ConfigError};
//!
//! let result = WebserviceKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyWebserviceKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building or validating client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Webservice key cannot be empty.
    #[error("Webservice key cannot be empty. Please provide a valid PrestaShop webservice key.")]
    EmptyWebserviceKey,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected a host name such as 'shop.example.com', optionally with a scheme or port.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_webservice_key_error_message() {
        let error = ConfigError::EmptyWebserviceKey;
        let message = error.to_string();
        assert!(message.contains("Webservice key cannot be empty"));
    }

    #[test]
    fn test_invalid_shop_domain_error_message() {
        let error = ConfigError::InvalidShopDomain {
            domain: "bad domain!".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad domain!"));
        assert!(message.contains("Expected a host name"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "webservice_key",
        };
        let message = error.to_string();
        assert!(message.contains("webservice_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyWebserviceKey;
        let _: &dyn std::error::Error = &error;
    }
}
