//! REST resource helpers: the fixed service set, filter/sort query
//! expressions, and the listing operations on [`Client`].
//!
//! [`Client`]: crate::Client

mod listing;
mod query;
mod service;

pub use query::{
    Filter, FilterOperator, InactivityWindow, ListOptions, Sort, SortOrder, DEFAULT_LIMIT,
};
pub use service::{Service, SUPPORTED_SERVICES};
