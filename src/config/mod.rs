//! Configuration types for the PrestaShop webservice client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PrestashopConfig`]: The configuration struct holding all connection settings
//! - [`PrestashopConfigBuilder`]: A builder for constructing [`PrestashopConfig`] instances
//! - [`WebserviceKey`]: A validated webservice key newtype with masked debug output
//! - [`ShopDomain`]: A validated shop domain
//! - [`InstallLocation`]: Where the platform lives relative to the domain root
//! - [`CartInactivityProfile`]: Which field set the abandoned-cart helper filters on
//!
//! # Example
//!
//! ```rust
//! use prestashop_api::{PrestashopConfig, WebserviceKey, ShopDomain};
//!
//! let config = PrestashopConfig::builder()
//!     .webservice_key(WebserviceKey::new("my-ws-key").unwrap())
//!     .domain(ShopDomain::new("shop.example.com").unwrap())
//!     .use_tls(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://shop.example.com/api/");
//! ```

mod newtypes;

pub use newtypes::{ShopDomain, WebserviceKey};

use crate::error::ConfigError;

/// Where the PrestaShop installation lives relative to the domain root.
///
/// Some deployments serve the platform from a `prestashop/` subfolder
/// rather than the domain root, which shifts the API base path. This is
/// an explicit configuration choice; the client never probes the server
/// to discover it, and construction performs no network I/O.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InstallLocation {
    /// Platform served from the domain root; API base is `/api/`.
    #[default]
    Root,
    /// Platform served from a `prestashop/` subfolder; API base is
    /// `/prestashop/api/`.
    Subfolder,
}

impl InstallLocation {
    /// Returns the API path segment for this install location.
    #[must_use]
    pub const fn api_path(self) -> &'static str {
        match self {
            Self::Root => "api/",
            Self::Subfolder => "prestashop/api/",
        }
    }
}

/// Field set used by [`Client::list_inactive_carts`] to scope carts and
/// apply the date bound.
///
/// Different platform versions track cart abandonment on different columns,
/// so the field set is a configuration choice rather than a fixed constant.
///
/// [`Client::list_inactive_carts`]: crate::Client::list_inactive_carts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CartInactivityProfile {
    /// Scope on `id_carrier` and `delivery_option`, date bound on `date_upd`.
    #[default]
    Carrier,
    /// Scope on `id_address_delivery` and `id_address_invoice`, date bound
    /// on `date_add`.
    DeliveryAddress,
}

impl CartInactivityProfile {
    /// Returns the two fields that must equal zero for a cart to count as
    /// lacking delivery assignment.
    #[must_use]
    pub const fn scope_fields(self) -> [&'static str; 2] {
        match self {
            Self::Carrier => ["id_carrier", "delivery_option"],
            Self::DeliveryAddress => ["id_address_delivery", "id_address_invoice"],
        }
    }

    /// Returns the timestamp field the inactivity window filters on.
    #[must_use]
    pub const fn date_field(self) -> &'static str {
        match self {
            Self::Carrier => "date_upd",
            Self::DeliveryAddress => "date_add",
        }
    }
}

/// Connection settings for the PrestaShop webservice.
///
/// Immutable after construction and owned by the [`Client`]. Holds the
/// webservice credential, the shop domain, and the options that select
/// between observed deployment variants.
///
/// # Thread Safety
///
/// `PrestashopConfig` is `Clone`, `Send`, and `Sync`, making it safe to
/// share across threads and async tasks.
///
/// [`Client`]: crate::Client
#[derive(Clone, Debug)]
pub struct PrestashopConfig {
    webservice_key: WebserviceKey,
    domain: ShopDomain,
    install_location: InstallLocation,
    use_tls: bool,
    cart_inactivity: CartInactivityProfile,
}

// Verify PrestashopConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PrestashopConfig>();
};

impl PrestashopConfig {
    /// Creates a new builder for constructing a `PrestashopConfig`.
    #[must_use]
    pub fn builder() -> PrestashopConfigBuilder {
        PrestashopConfigBuilder::new()
    }

    /// Returns the webservice key.
    #[must_use]
    pub const fn webservice_key(&self) -> &WebserviceKey {
        &self.webservice_key
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn domain(&self) -> &ShopDomain {
        &self.domain
    }

    /// Returns the install location.
    #[must_use]
    pub const fn install_location(&self) -> InstallLocation {
        self.install_location
    }

    /// Returns whether TLS is requested when the domain carries no scheme.
    #[must_use]
    pub const fn use_tls(&self) -> bool {
        self.use_tls
    }

    /// Returns the cart-inactivity field profile.
    #[must_use]
    pub const fn cart_inactivity(&self) -> CartInactivityProfile {
        self.cart_inactivity
    }

    /// Derives the API base URL from the connection settings.
    ///
    /// Shape: `{scheme}://{domain}/[prestashop/]api/`. A scheme embedded in
    /// the domain wins over the TLS flag.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = self
            .domain
            .scheme()
            .unwrap_or(if self.use_tls { "https" } else { "http" });
        format!(
            "{scheme}://{}/{}",
            self.domain.host(),
            self.install_location.api_path()
        )
    }
}

/// Builder for constructing [`PrestashopConfig`] instances.
///
/// Required fields are `webservice_key` and `domain`. All other fields
/// have defaults: root install, TLS off, [`CartInactivityProfile::Carrier`].
///
/// # Example
///
/// ```rust
/// use prestashop_api::{
///     CartInactivityProfile, InstallLocation, PrestashopConfig, ShopDomain, WebserviceKey,
/// };
///
/// let config = PrestashopConfig::builder()
///     .webservice_key(WebserviceKey::new("key").unwrap())
///     .domain(ShopDomain::new("shop.example.com").unwrap())
///     .install_location(InstallLocation::Subfolder)
///     .use_tls(true)
///     .cart_inactivity(CartInactivityProfile::DeliveryAddress)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url(), "https://shop.example.com/prestashop/api/");
/// ```
#[derive(Debug, Default)]
pub struct PrestashopConfigBuilder {
    webservice_key: Option<WebserviceKey>,
    domain: Option<ShopDomain>,
    install_location: Option<InstallLocation>,
    use_tls: Option<bool>,
    cart_inactivity: Option<CartInactivityProfile>,
}

impl PrestashopConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the webservice key (required).
    #[must_use]
    pub fn webservice_key(mut self, key: WebserviceKey) -> Self {
        self.webservice_key = Some(key);
        self
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn domain(mut self, domain: ShopDomain) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets the install location.
    #[must_use]
    pub const fn install_location(mut self, location: InstallLocation) -> Self {
        self.install_location = Some(location);
        self
    }

    /// Sets whether to use TLS when the domain carries no scheme.
    #[must_use]
    pub const fn use_tls(mut self, use_tls: bool) -> Self {
        self.use_tls = Some(use_tls);
        self
    }

    /// Sets the cart-inactivity field profile.
    #[must_use]
    pub const fn cart_inactivity(mut self, profile: CartInactivityProfile) -> Self {
        self.cart_inactivity = Some(profile);
        self
    }

    /// Builds the [`PrestashopConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `webservice_key` or
    /// `domain` are not set.
    pub fn build(self) -> Result<PrestashopConfig, ConfigError> {
        let webservice_key = self
            .webservice_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "webservice_key",
            })?;
        let domain = self
            .domain
            .ok_or(ConfigError::MissingRequiredField { field: "domain" })?;

        Ok(PrestashopConfig {
            webservice_key,
            domain,
            install_location: self.install_location.unwrap_or_default(),
            use_tls: self.use_tls.unwrap_or(false),
            cart_inactivity: self.cart_inactivity.unwrap_or_default(),
        })
    }
}
