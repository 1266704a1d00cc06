//! The working document model.
//!
//! A request document is an ordered mapping from field name to JSON value
//! (string, bool, number, or a list of these). The pipeline mutates it in
//! place before projecting it into an index document of the same shape.

use serde_json::{Map, Value};

/// An ordered field-name to value mapping, used for both the incoming
/// request document and the outgoing index document.
pub type Document = Map<String, Value>;

/// Coerces a field value to a list of values.
///
/// Document fields may hold either a scalar or a list; processors operate on
/// lists. A scalar becomes a one-element list, an existing list is cloned,
/// and an absent value becomes an empty list.
pub fn ensure_value_list(value: Option<&Value>) -> Vec<Value> {
    match value {
        None => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(scalar) => vec![scalar.clone()],
    }
}
