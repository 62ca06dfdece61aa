//! The fixed set of resources the generic listing helper accepts.

use crate::client::ApiError;

/// Comma-separated list of supported service names, used in error messages.
pub const SUPPORTED_SERVICES: &str = "customers, orders, carts, products, addresses";

/// A webservice resource supported by [`Client::list_service`].
///
/// [`Client::list_service`]: crate::Client::list_service
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
    /// The `customers/` resource.
    Customers,
    /// The `orders/` resource.
    Orders,
    /// The `carts/` resource.
    Carts,
    /// The `products/` resource.
    Products,
    /// The `addresses/` resource.
    Addresses,
}

impl Service {
    /// Resolves a service name to a resource, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnsupportedService`] for names outside the fixed
    /// resource set. This check is client-side and never reaches the network.
    pub fn from_name(name: &str) -> Result<Self, ApiError> {
        match name.to_ascii_lowercase().as_str() {
            "customers" => Ok(Self::Customers),
            "orders" => Ok(Self::Orders),
            "carts" => Ok(Self::Carts),
            "products" => Ok(Self::Products),
            "addresses" => Ok(Self::Addresses),
            _ => Err(ApiError::UnsupportedService {
                service: name.to_string(),
                supported: SUPPORTED_SERVICES,
            }),
        }
    }

    /// Returns the REST endpoint path fragment for this resource.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Customers => "customers/",
            Self::Orders => "orders/",
            Self::Carts => "carts/",
            Self::Products => "products/",
            Self::Addresses => "addresses/",
        }
    }
}
