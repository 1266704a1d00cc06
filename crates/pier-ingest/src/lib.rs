//! Ingestion transformation pipeline for pier.
//!
//! Converts an arbitrary client-submitted document into a normalized,
//! indexable document according to a declarative
//! [`Mapping`](pier_mapping::Mapping):
//!
//! 1. **Transformation**: the mapping's ordered processor specs mutate the
//!    working document in place (`append_conditionally`, `copyhash_to`).
//! 2. **Projection**: fields listed as filter fields are normalized and
//!    emitted under a `filter_` prefix; non-filter fields are copied
//!    verbatim; everything else is dropped.
//!
//! The pipeline is a pure function of the mapping and the document: no I/O,
//! no shared state, safe to run concurrently. Malformed mappings cannot reach
//! it (unknown processor names and missing arguments are rejected when the
//! mapping is loaded), and document content never causes a failure.
//!
//! # Example
//!
//! ```
//! use pier_ingest::build_index_document;
//! use pier_mapping::{Mapping, parse_mapping};
//! use serde_json::json;
//!
//! let raw = parse_mapping(
//!     r#"
//!     [fields]
//!     filter = ["lot"]
//!     non_filter = ["serviceName"]
//!     "#,
//! )
//! .unwrap();
//! let mapping = Mapping::from_raw(raw).unwrap();
//!
//! let request = json!({"lot": " SaaS ", "serviceName": "Cloud Thing"});
//! let index = build_index_document(&mapping, request.as_object().unwrap().clone());
//!
//! assert_eq!(index["filter_lot"], json!("saas"));
//! assert_eq!(index["serviceName"], json!("Cloud Thing"));
//! ```

#![warn(missing_docs)]

mod document;
mod pipeline;
mod transform;

pub use document::{Document, ensure_value_list};
pub use pipeline::build_index_document;
