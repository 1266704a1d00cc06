//! pier: search front-end toolbox
//!
//! pier sits in front of a full-text search engine and owns the two
//! transformations around it: turning client-submitted documents into
//! normalized index documents, and turning HTTP-style query parameters into
//! structured query bodies. The `pier` binary exposes both pipelines for
//! inspection and debugging: feed it a document or a set of parameters and
//! it prints exactly the JSON the engine would receive.

#![warn(missing_docs)]
