//! Search query construction for pier.
//!
//! Converts HTTP-style multi-valued query parameters into the JSON query
//! body sent to the search engine:
//!
//! - **Keyword clause**: a `q` parameter becomes a `simple_query_string`
//!   over the mapping's text fields, with `|`, `+`, `-`, phrase quoting, and
//!   backslash escaping enabled; without `q` the query matches everything.
//! - **Filter clause**: each `filter_<field>` parameter becomes a
//!   [`QueryFilter`] classified as AND (repeated or single plain value) or
//!   OR (single comma-separated value); AND terms form a `bool.must` group,
//!   OR terms a `bool.should` group.
//! - **Highlighting**: every text field, wrapped in the mapping's tag pair.
//! - **Pagination**: `size` from the page size, `from` derived from the
//!   1-based `page` parameter.
//! - **Aggregations**: terms aggregations over `filter_`-prefixed fields.
//!
//! Construction is a pure function of the mapping and the parameters; the
//! only failures are typed request errors ([`QueryError`]).
//!
//! # Example
//!
//! ```
//! use pier_mapping::{Mapping, parse_mapping};
//! use pier_query::{QueryParams, construct_query};
//!
//! let raw = parse_mapping(
//!     r#"
//!     [fields]
//!     text = ["serviceName"]
//!     filter = ["lot"]
//!     non_filter = ["serviceName"]
//!     "#,
//! )
//! .unwrap();
//! let mapping = Mapping::from_raw(raw).unwrap();
//!
//! let params = QueryParams::from_pairs([("filter_lot", "SaaS")]);
//! let query = construct_query(&mapping, &params, mapping.page_size).unwrap();
//!
//! assert_eq!(
//!     query["query"]["filtered"]["filter"]["bool"]["must"][0],
//!     serde_json::json!({"term": {"filter_lot": "saas"}}),
//! );
//! ```

#![warn(missing_docs)]

mod builder;
mod error;
mod filter;
mod params;

pub use builder::{construct_aggregation_query, construct_query};
pub use error::QueryError;
pub use filter::{FilterKind, QueryFilter};
pub use params::QueryParams;
