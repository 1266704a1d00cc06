//! Query body assembly.
//!
//! Turns parsed query parameters into the JSON request body sent to the
//! search engine: keyword clause, filter clause, highlighting, pagination,
//! and optional terms aggregations.

use pier_mapping::Mapping;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::QueryError;
use crate::filter::{FilterKind, QueryFilter};
use crate::params::QueryParams;

/// Simple query syntax enabled for the keyword clause.
///
/// - `OR` enables the `|` operator.
/// - `AND` enables the `+` operator; AND is already the default conjunction
///   between terms, so `+` does not change results.
/// - `NOT` enables the `-` operator.
/// - `PHRASE` enables `"` to group tokens into phrases.
/// - `ESCAPE` allows escaping reserved characters with `\`.
/// - `WHITESPACE` allows whitespace escape sequences; the `-` operator only
///   takes effect when this flag is enabled.
const QUERY_STRING_FLAGS: &str = "OR|AND|NOT|PHRASE|ESCAPE|WHITESPACE";

/// Constructs the full search query body.
///
/// The body always carries the keyword clause (a `simple_query_string` over
/// the mapping's text fields when `q` is present, `match_all` otherwise),
/// the highlight clause, and `size`. When at least one recognized
/// `filter_<field>` parameter is present, the keyword clause is wrapped in a
/// `filtered` envelope together with the boolean filter clause. A `page`
/// parameter adds `from = (page - 1) * page_size`.
///
/// # Errors
///
/// Returns [`QueryError::InvalidPage`] when `page` does not parse as an
/// integer.
pub fn construct_query(
    mapping: &Mapping,
    params: &QueryParams,
    page_size: usize,
) -> Result<Value, QueryError> {
    let filtered = is_filtered(mapping, params);
    let mut query = if filtered {
        json!({
            "query": {
                "filtered": {
                    "query": build_keywords_query(mapping, params),
                    "filter": filter_clause(params),
                }
            }
        })
    } else {
        json!({"query": build_keywords_query(mapping, params)})
    };

    query["highlight"] = highlight_clause(mapping);
    query["size"] = json!(page_size);

    if let Some(raw_page) = params.first("page") {
        let page: i64 = raw_page.parse().map_err(|_| QueryError::InvalidPage {
            value: raw_page.to_string(),
        })?;
        query["from"] = json!((page - 1) * page_size as i64);
    }

    debug!(filtered, page_size, "constructed query body");

    Ok(query)
}

/// Constructs a query body that additionally requests terms aggregations.
///
/// Builds the same body as [`construct_query`], then adds one terms
/// aggregation per requested field over its `filter_`-prefixed index field,
/// and sets `size` to 0 since only bucket counts are wanted.
///
/// # Errors
///
/// Returns [`QueryError::UnknownAggregation`] for a field that is not in the
/// mapping's filter list, and propagates [`QueryError::InvalidPage`].
pub fn construct_aggregation_query(
    mapping: &Mapping,
    params: &QueryParams,
    fields: &[String],
    page_size: usize,
) -> Result<Value, QueryError> {
    let mut query = construct_query(mapping, params, page_size)?;

    let mut aggregations = Map::new();
    for field in fields {
        if !mapping.is_filter_field(field) {
            return Err(QueryError::UnknownAggregation {
                field: field.clone(),
            });
        }
        aggregations.insert(
            field.clone(),
            json!({"terms": {"field": format!("filter_{field}")}}),
        );
    }

    query["aggregations"] = Value::Object(aggregations);
    query["size"] = json!(0);

    Ok(query)
}

/// Returns true if any parameter key names a recognized filterable field.
fn is_filtered(mapping: &Mapping, params: &QueryParams) -> bool {
    mapping
        .filter_fields
        .iter()
        .any(|field| params.contains_key(&format!("filter_{field}")))
}

/// The keyword clause: a simple query string over the mapping's text fields
/// when `q` is present, otherwise an unconditional match.
fn build_keywords_query(mapping: &Mapping, params: &QueryParams) -> Value {
    match params.first("q") {
        Some(keywords) => json!({
            "simple_query_string": {
                "query": keywords,
                "fields": mapping.text_fields,
                "default_operator": "and",
                "flags": QUERY_STRING_FLAGS,
            }
        }),
        None => json!({"match_all": {}}),
    }
}

/// The boolean filter clause assembled from all `filter*` parameters.
///
/// Terms from all AND filters form one conjunctive `must` group and terms
/// from all OR filters one disjunctive `should` group, across fields; a
/// document must pass every `must` term and at least one `should` term.
/// Empty groups are omitted.
fn filter_clause(params: &QueryParams) -> Value {
    let mut must: Vec<Value> = Vec::new();
    let mut should: Vec<Value> = Vec::new();

    for (key, values) in params.iter() {
        if !key.starts_with("filter") {
            continue;
        }
        let filter = QueryFilter::new(key, values.to_vec());
        match filter.kind {
            FilterKind::And => must.extend(filter.terms()),
            FilterKind::Or => should.extend(filter.terms()),
        }
    }

    let mut groups = Map::new();
    if !must.is_empty() {
        groups.insert("must".to_string(), Value::Array(must));
    }
    if !should.is_empty() {
        groups.insert("should".to_string(), Value::Array(should));
    }

    json!({"bool": groups})
}

/// The highlight clause: every text field, HTML-entity encoded, wrapped in
/// the mapping's tag pair.
fn highlight_clause(mapping: &Mapping) -> Value {
    let mut fields = Map::new();
    for field in &mapping.text_fields {
        fields.insert(field.clone(), json!({}));
    }

    json!({
        "encoder": "html",
        "pre_tags": [mapping.highlight.pre_tag],
        "post_tags": [mapping.highlight.post_tag],
        "fields": fields,
    })
}
