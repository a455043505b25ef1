use std::collections::HashMap;

use tracing::trace;

use crate::error::AttrError;
use crate::strategy::ReadingStrategy;
use crate::types::{Element, Value};

/// Decode every attribute of one document element using a prepared strategy
/// table. Each strategy receives the children of `parent` matching its
/// attribute name; missing attributes fall back to their defaults. The first
/// failing attribute aborts the call with its error.
pub fn decode_attributes(
    strategies: &HashMap<String, ReadingStrategy>,
    parent: &Element,
) -> Result<HashMap<String, Value>, AttrError> {
    let mut values = HashMap::with_capacity(strategies.len());
    for (name, strategy) in strategies {
        let matching: Vec<&Element> = parent.children_named(name).collect();
        trace!(attr = %name, elements = matching.len(), "decoding attribute");
        values.insert(name.clone(), strategy.decode(&matching)?);
    }
    Ok(values)
}
