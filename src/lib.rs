//! # PrestaShop Webservice Client
//!
//! A Rust client for the PrestaShop REST webservice, providing type-safe
//! configuration, authenticated request dispatch, and status-code-driven
//! error handling.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PrestashopConfig`] and [`PrestashopConfigBuilder`]
//! - Validated newtypes for the webservice credential and shop domain
//! - Async HTTP verbs (GET/POST/PUT/PATCH/DELETE) over the webservice API
//! - A generic listing helper over the supported resource set with
//!   filter/sort/pagination parameters
//! - An abandoned-cart helper scoped by a configurable field profile
//! - A typed error taxonomy mapping the webservice's status codes
//!
//! ## Quick Start
//!
//! ```rust
//! use prestashop_api::{Client, PrestashopConfig, ShopDomain, WebserviceKey};
//!
//! // Create configuration using the builder pattern
//! let config = PrestashopConfig::builder()
//!     .webservice_key(WebserviceKey::new("your-ws-key").unwrap())
//!     .domain(ShopDomain::new("shop.example.com").unwrap())
//!     .use_tls(true)
//!     .build()
//!     .unwrap();
//!
//! // Construction performs no network I/O
//! let client = Client::new(config);
//! assert_eq!(client.base_url(), "https://shop.example.com/api/");
//! ```
//!
//! ## Listing resources
//!
//! ```rust,ignore
//! use prestashop_api::{Filter, FilterOperator, ListOptions, Sort, SortOrder};
//!
//! let options = ListOptions::new()
//!     .limit(50)
//!     .filter(Filter::new("active", FilterOperator::Equal, "1").unwrap())
//!     .sort(Sort::new("date_add", SortOrder::Desc));
//!
//! let customers = client.list_service("customers", &options).await?;
//! ```
//!
//! ## Abandoned carts
//!
//! Carts that never converted to an order are found by filtering on the
//! fields named by the configured [`CartInactivityProfile`]:
//!
//! ```rust,ignore
//! use prestashop_api::InactivityWindow;
//!
//! let window = InactivityWindow::Between {
//!     from: "2024-01-01 00:00:00".to_string(),
//!     to: "2024-02-01 00:00:00".to_string(),
//! };
//! let carts = client.list_inactive_carts(&window, None, 100).await?;
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use prestashop_api::ApiError;
//!
//! match client.get("customers/").await {
//!     Ok(response) => println!("{response}"),
//!     Err(ApiError::Unauthorized { body }) => eprintln!("key rejected: {body}"),
//!     Err(other) => eprintln!("call failed: {other}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No shared mutable state**: standing and per-call parameters are merged
//!   into a fresh map on every request
//! - **Fail-fast validation**: configuration newtypes validate on construction
//! - **No hidden I/O**: client construction never touches the network
//! - **Lenient on the unknown**: unexpected status codes return the body
//!   rather than failing; callers that need strictness can inspect it
//! - **Thread-safe**: all types are `Send + Sync`

pub mod client;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::{
    serialize_query, ApiError, ApiRequest, ApiRequestBuilder, ApiResponse, Client, HttpMethod,
    RequestBody, CLIENT_VERSION,
};
pub use config::{
    CartInactivityProfile, InstallLocation, PrestashopConfig, PrestashopConfigBuilder, ShopDomain,
    WebserviceKey,
};
pub use error::ConfigError;
pub use rest::{
    Filter, FilterOperator, InactivityWindow, ListOptions, Service, Sort, SortOrder,
    DEFAULT_LIMIT, SUPPORTED_SERVICES,
};
