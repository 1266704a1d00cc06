//! Index-time / query-time normalization symmetry.
//!
//! A value stored for a filter field at ingestion must equal the term
//! generated for an equality filter on that field at query time, whatever
//! casing and whitespace the raw inputs carried. These tests run both
//! pipelines against the same mapping and compare the two sides directly.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use pier_ingest::build_index_document;
use pier_mapping::{Mapping, parse_mapping};
use pier_query::{QueryParams, construct_query};
use serde_json::json;

/// A minimal mapping with one filterable field.
fn mapping() -> Mapping {
    let raw = parse_mapping(
        r#"
        [fields]
        text = ["serviceName"]
        filter = ["lot"]
        non_filter = ["serviceName"]
        "#,
    )
    .unwrap();
    Mapping::from_raw(raw).unwrap()
}

#[test]
fn stored_value_equals_query_term_for_messy_input() {
    let mapping = mapping();

    let request = json!({"lot": "  SaaS "});
    let index = build_index_document(&mapping, request.as_object().unwrap().clone());
    let stored = index["filter_lot"].as_str().unwrap();

    let params = QueryParams::from_pairs([("filter_lot", "saas")]);
    let query = construct_query(&mapping, &params, 100).unwrap();
    let term = query["query"]["filtered"]["filter"]["bool"]["must"][0]["term"]["filter_lot"]
        .as_str()
        .unwrap();

    assert_eq!(stored, term);
}

#[test]
fn symmetry_holds_when_the_query_side_is_messy_instead() {
    let mapping = mapping();

    let request = json!({"lot": "saas"});
    let index = build_index_document(&mapping, request.as_object().unwrap().clone());
    let stored = index["filter_lot"].as_str().unwrap();

    let params = QueryParams::from_pairs([("filter_lot", "  SaaS ")]);
    let query = construct_query(&mapping, &params, 100).unwrap();
    let term = query["query"]["filtered"]["filter"]["bool"]["must"][0]["term"]["filter_lot"]
        .as_str()
        .unwrap();

    assert_eq!(stored, term);
}

#[test]
fn symmetry_holds_for_list_valued_fields() {
    let mapping = mapping();

    let request = json!({"lot": [" SaaS ", "PaaS"]});
    let index = build_index_document(&mapping, request.as_object().unwrap().clone());
    let stored = index["filter_lot"].clone();

    let params = QueryParams::from_pairs([("filter_lot", "saas,paas")]);
    let query = construct_query(&mapping, &params, 100).unwrap();
    let should = &query["query"]["filtered"]["filter"]["bool"]["should"];
    let terms: Vec<&str> = should
        .as_array()
        .unwrap()
        .iter()
        .map(|clause| clause["term"]["filter_lot"].as_str().unwrap())
        .collect();

    assert_eq!(stored, json!(terms));
}
