//! Listing helpers over the fixed resource set.
//!
//! `list_service` is the generic entry point: resolve a service name,
//! attach filter/sort/pagination parameters, GET the resource. The
//! abandoned-cart helper layers the platform's cart-inactivity convention
//! on top of the same machinery.

use crate::client::{ApiError, ApiRequest, ApiResponse, Client, HttpMethod};
use crate::rest::query::{InactivityWindow, ListOptions, Sort};
use crate::rest::service::Service;

impl Client {
    /// Lists records from one of the supported resources.
    ///
    /// The service name is resolved client-side against the fixed resource
    /// set; the call then carries `limit`, `display=full`, and the optional
    /// `date`/filter/sort parameters from `options`. The query parameters
    /// are identical to a hand-built [`get`] with the same options.
    ///
    /// [`get`]: Client::get
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnsupportedService`] for unknown service names
    /// (before any network traffic), or any transport/status error from the
    /// call itself.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use prestashop_api::{Filter, FilterOperator, ListOptions};
    ///
    /// let options = ListOptions::new()
    ///     .filter(Filter::new("active", FilterOperator::Equal, "1").unwrap());
    /// let customers = client.list_service("customers", &options).await?;
    /// ```
    pub async fn list_service(
        &self,
        service: &str,
        options: &ListOptions,
    ) -> Result<ApiResponse, ApiError> {
        let service = Service::from_name(service)?;
        let request = ApiRequest::builder(HttpMethod::Get, service.endpoint())
            .params(options.query_params())
            .build();
        self.send(request).await
    }

    /// Lists shopping carts that have not converted to an order.
    ///
    /// Results are scoped to carts lacking delivery assignment: the two
    /// fields named by the configured [`CartInactivityProfile`] must equal
    /// zero, and the profile's date field is bounded by `window`. The call
    /// carries `limit`, `display=full`, and `date=1` alongside the filters.
    ///
    /// Timestamps in `window` are passed through uninterpreted (spaces
    /// percent-encoded, nothing else); the remote service judges validity.
    ///
    /// [`CartInactivityProfile`]: crate::CartInactivityProfile
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or an error status code.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use prestashop_api::InactivityWindow;
    ///
    /// let window = InactivityWindow::Before("2024-01-01 10:00:00".to_string());
    /// let carts = client.list_inactive_carts(&window, None, 100).await?;
    /// ```
    pub async fn list_inactive_carts(
        &self,
        window: &InactivityWindow,
        sort: Option<Sort>,
        limit: u32,
    ) -> Result<ApiResponse, ApiError> {
        let profile = self.config().cart_inactivity();

        let mut builder = ApiRequest::builder(HttpMethod::Get, Service::Carts.endpoint())
            .param("limit", limit.to_string())
            .param("display", "full")
            .param("date", "1");

        for field in profile.scope_fields() {
            builder = builder.param(format!("filter[{field}]"), "[0]");
        }

        let (key, value) = window.query_pair(profile.date_field());
        builder = builder.param(key, value);

        if let Some(sort) = sort {
            let (key, value) = sort.query_pair();
            builder = builder.param(key, value);
        }

        self.send(builder.build()).await
    }
}
