//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated PrestaShop webservice key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs. The key is a bearer
/// credential sent as the `ws_key` query parameter on every request.
///
/// # Security
///
/// The `Debug` implementation masks the credential, displaying only
/// `WebserviceKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use prestashop_api::WebserviceKey;
///
/// let key = WebserviceKey::new("ABCDEF123456").unwrap();
/// assert_eq!(key.as_ref(), "ABCDEF123456");
/// assert_eq!(format!("{:?}", key), "WebserviceKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct WebserviceKey(String);

impl WebserviceKey {
    /// Creates a new validated webservice key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyWebserviceKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyWebserviceKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for WebserviceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WebserviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebserviceKey(*****)")
    }
}

/// A validated shop domain.
///
/// Accepts a bare host name (`shop.example.com`), a host with port
/// (`127.0.0.1:8080`), or a full URL carrying a scheme
/// (`https://shop.example.com`). When a scheme is present it is recorded
/// and takes precedence over the client's TLS flag when the base URL is
/// derived. Trailing slashes are trimmed.
///
/// # Serialization
///
/// `ShopDomain` serializes to and deserializes from the host string
/// (without scheme):
///
/// ```rust
/// use prestashop_api::ShopDomain;
///
/// let domain = ShopDomain::new("shop.example.com").unwrap();
/// let json = serde_json::to_string(&domain).unwrap();
/// assert_eq!(json, r#""shop.example.com""#);
/// ```
///
/// # Example
///
/// ```rust
/// use prestashop_api::ShopDomain;
///
/// let domain = ShopDomain::new("https://shop.example.com/").unwrap();
/// assert_eq!(domain.host(), "shop.example.com");
/// assert_eq!(domain.scheme(), Some("https"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain {
    host: String,
    scheme: Option<String>,
}

impl ShopDomain {
    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the domain is empty,
    /// contains whitespace, or carries a path segment.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into();
        let trimmed = domain.trim();

        let (scheme, rest) = if let Some(rest) = trimmed.strip_prefix("https://") {
            (Some("https".to_string()), rest)
        } else if let Some(rest) = trimmed.strip_prefix("http://") {
            (Some("http".to_string()), rest)
        } else {
            (None, trimmed)
        };

        let host = rest.trim_end_matches('/');

        if host.is_empty()
            || host.contains(char::is_whitespace)
            || host.contains('/')
            || host.contains("://")
        {
            return Err(ConfigError::InvalidShopDomain { domain });
        }

        Ok(Self {
            host: host.to_string(),
            scheme,
        })
    }

    /// Returns the host portion of the domain (scheme stripped).
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the scheme embedded in the domain, if one was provided.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.host
    }
}

impl Serialize for ShopDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.host)
    }
}

impl<'de> Deserialize<'de> for ShopDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
