//! Filter, sort, and listing parameter expressions.
//!
//! The webservice's list endpoints accept a platform-specific query syntax:
//! `filter[field]=operator[value]` restricts results, `sort=[field_ORDER]`
//! orders them, and `display=full` expands records. These types build those
//! pairs; percent-encoding of spaces happens when the query string is
//! serialized (see [`serialize_query`]).
//!
//! [`serialize_query`]: crate::client::serialize_query

use std::collections::BTreeMap;
use std::fmt;

/// Comparison operator in a filter expression.
///
/// The wire syntax prefixes the bracketed value: nothing for equality,
/// `!` for not-equal, `>` for greater-than, `<` for less-than. The typed
/// enum removes the original API's ambiguity where an explicitly-empty
/// operator string was a valid "equal" but looked like a missing parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterOperator {
    /// Equality; serializes to the empty prefix.
    #[default]
    Equal,
    /// Not-equal; serializes to `!`.
    NotEqual,
    /// Greater-than; serializes to `>`.
    GreaterThan,
    /// Less-than; serializes to `<`.
    LessThan,
}

impl FilterOperator {
    /// Returns the wire prefix for this operator.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Equal => "",
            Self::NotEqual => "!",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A filter expression: field, operator, value.
///
/// Serialized as the query pair `filter[{field}]` = `{operator}[{value}]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    field: String,
    operator: FilterOperator,
    value: String,
}

impl Filter {
    /// Creates a filter expression.
    ///
    /// Returns `None` when the value is empty after trimming whitespace;
    /// the original clients only applied a filter when a usable value was
    /// supplied, and a blank value would filter on nothing.
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<String>,
    ) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return None;
        }
        Some(Self {
            field: field.into(),
            operator,
            value,
        })
    }

    /// Returns the field this filter applies to.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the filter's query pair, `(key, value)`.
    #[must_use]
    pub fn query_pair(&self) -> (String, String) {
        (
            format!("filter[{}]", self.field),
            format!("{}[{}]", self.operator.prefix(), self.value),
        )
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending (`ASC`), the default.
    #[default]
    Asc,
    /// Descending (`DESC`).
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("ASC"),
            Self::Desc => f.write_str("DESC"),
        }
    }
}

/// A sort expression: field and direction.
///
/// Serialized as the query pair `sort` = `[{field}_{ORDER}]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sort {
    field: String,
    order: SortOrder,
}

impl Sort {
    /// Creates a sort expression.
    #[must_use]
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }

    /// Returns the sort's query pair, `(key, value)`.
    #[must_use]
    pub fn query_pair(&self) -> (String, String) {
        (
            "sort".to_string(),
            format!("[{}_{}]", self.field, self.order),
        )
    }
}

/// Date bound for the abandoned-cart listing.
///
/// Timestamps are caller-supplied `YYYY-MM-DD HH:MM:SS` strings; the client
/// performs no date parsing or validation. Malformed timestamps pass through
/// uninterpreted and the remote service decides validity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InactivityWindow {
    /// Carts last touched strictly before the given timestamp.
    Before(String),
    /// Carts last touched within the inclusive range `[from, to]`.
    Between {
        /// Lower bound of the range.
        from: String,
        /// Upper bound of the range.
        to: String,
    },
}

impl InactivityWindow {
    /// Returns the window's query pair for the given date field:
    /// `<[ts]` for a single bound, `[from,to]` for a range.
    #[must_use]
    pub fn query_pair(&self, date_field: &str) -> (String, String) {
        let key = format!("filter[{date_field}]");
        let value = match self {
            Self::Before(ts) => format!("<[{ts}]"),
            Self::Between { from, to } => format!("[{from},{to}]"),
        };
        (key, value)
    }
}

/// Parameters for the generic listing helper.
///
/// Defaults: limit 100, full display, no date flag, no filter, no sort.
///
/// # Example
///
/// ```rust
/// use prestashop_api::{Filter, FilterOperator, ListOptions, Sort, SortOrder};
///
/// let options = ListOptions::new()
///     .limit(50)
///     .filter(Filter::new("id_customer", FilterOperator::Equal, "42").unwrap())
///     .sort(Sort::new("date_add", SortOrder::Desc));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ListOptions {
    limit: Option<u32>,
    date_filter: bool,
    filter: Option<Filter>,
    sort: Option<Sort>,
}

/// Default result limit for list calls.
pub const DEFAULT_LIMIT: u32 = 100;

impl ListOptions {
    /// Creates listing options with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result limit (default 100).
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Marks the filter as a date filter, adding `date=1` to the query.
    /// Required by the webservice when filtering on timestamp fields.
    #[must_use]
    pub const fn date_filter(mut self, date_filter: bool) -> Self {
        self.date_filter = date_filter;
        self
    }

    /// Sets the filter expression.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Sets the sort expression.
    #[must_use]
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Builds the query parameters these options describe.
    #[must_use]
    pub fn query_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert(
            "limit".to_string(),
            self.limit.unwrap_or(DEFAULT_LIMIT).to_string(),
        );
        params.insert("display".to_string(), "full".to_string());
        if self.date_filter {
            params.insert("date".to_string(), "1".to_string());
        }
        if let Some(filter) = &self.filter {
            let (key, value) = filter.query_pair();
            params.insert(key, value);
        }
        if let Some(sort) = &self.sort {
            let (key, value) = sort.query_pair();
            params.insert(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_operator_prefixes() {
        assert_eq!(FilterOperator::Equal.prefix(), "");
        assert_eq!(FilterOperator::NotEqual.prefix(), "!");
        assert_eq!(FilterOperator::GreaterThan.prefix(), ">");
        assert_eq!(FilterOperator::LessThan.prefix(), "<");
    }

    #[test]
    fn test_filter_query_pair_for_every_operator() {
        for (operator, prefix) in [
            (FilterOperator::Equal, ""),
            (FilterOperator::NotEqual, "!"),
            (FilterOperator::GreaterThan, ">"),
            (FilterOperator::LessThan, "<"),
        ] {
            let filter = Filter::new("id_customer", operator, "42").unwrap();
            assert_eq!(
                filter.query_pair(),
                ("filter[id_customer]".to_string(), format!("{prefix}[42]"))
            );
        }
    }

    #[test]
    fn test_filter_rejects_blank_value() {
        assert!(Filter::new("id_customer", FilterOperator::Equal, "").is_none());
        assert!(Filter::new("id_customer", FilterOperator::Equal, "   ").is_none());
    }

    #[test]
    fn test_equal_operator_is_usable_not_missing() {
        // An equality filter has an empty prefix but is still a real filter.
        let filter = Filter::new("active", FilterOperator::Equal, "1").unwrap();
        assert_eq!(
            filter.query_pair(),
            ("filter[active]".to_string(), "[1]".to_string())
        );
    }

    #[test]
    fn test_sort_query_pair() {
        let sort = Sort::new("date_add", SortOrder::Desc);
        assert_eq!(
            sort.query_pair(),
            ("sort".to_string(), "[date_add_DESC]".to_string())
        );

        let sort = Sort::new("lastname", SortOrder::Asc);
        assert_eq!(
            sort.query_pair(),
            ("sort".to_string(), "[lastname_ASC]".to_string())
        );
    }

    #[test]
    fn test_inactivity_window_before_uses_less_than() {
        let window = InactivityWindow::Before("2024-01-01 10:00:00".to_string());
        assert_eq!(
            window.query_pair("date_upd"),
            (
                "filter[date_upd]".to_string(),
                "<[2024-01-01 10:00:00]".to_string()
            )
        );
    }

    #[test]
    fn test_inactivity_window_between_uses_bracketed_range() {
        let window = InactivityWindow::Between {
            from: "2024-01-01 00:00:00".to_string(),
            to: "2024-02-01 00:00:00".to_string(),
        };
        assert_eq!(
            window.query_pair("date_add"),
            (
                "filter[date_add]".to_string(),
                "[2024-01-01 00:00:00,2024-02-01 00:00:00]".to_string()
            )
        );
    }

    #[test]
    fn test_malformed_timestamps_pass_through() {
        let window = InactivityWindow::Before("not a date".to_string());
        let (_, value) = window.query_pair("date_upd");
        assert_eq!(value, "<[not a date]");
    }

    #[test]
    fn test_list_options_defaults() {
        let params = ListOptions::new().query_params();
        assert_eq!(params.get("limit"), Some(&"100".to_string()));
        assert_eq!(params.get("display"), Some(&"full".to_string()));
        assert!(!params.contains_key("date"));
        assert!(!params.contains_key("sort"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_list_options_with_everything() {
        let params = ListOptions::new()
            .limit(25)
            .date_filter(true)
            .filter(Filter::new("date_add", FilterOperator::GreaterThan, "2024-01-01").unwrap())
            .sort(Sort::new("date_add", SortOrder::Asc))
            .query_params();

        assert_eq!(params.get("limit"), Some(&"25".to_string()));
        assert_eq!(params.get("display"), Some(&"full".to_string()));
        assert_eq!(params.get("date"), Some(&"1".to_string()));
        assert_eq!(
            params.get("filter[date_add]"),
            Some(&">[2024-01-01]".to_string())
        );
        assert_eq!(params.get("sort"), Some(&"[date_add_ASC]".to_string()));
    }
}
