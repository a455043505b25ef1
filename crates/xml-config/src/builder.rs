use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::AttrError;
use crate::identity::IdentityRegistry;
use crate::schema::AttrType;
use crate::strategy::{
    ArrayStrategy, BinaryStrategy, CompositeStrategy, IdentityRefStrategy, ObjectRefStrategy,
    ReadingStrategy, RecordStrategy, SimpleStrategy, UNION_VALUE_KEY, UnionStrategy,
};

/// Build one reading strategy per attribute descriptor. The table is fully
/// materialized before it is returned; the first failing entry aborts the
/// whole call and no partial table is handed out.
pub fn build_strategies(
    attrs: &HashMap<String, AttrType>,
    identities: &Arc<IdentityRegistry>,
) -> Result<HashMap<String, ReadingStrategy>, AttrError> {
    debug!(attributes = attrs.len(), "building reading strategies");
    let mut strategies = HashMap::with_capacity(attrs.len());
    for (name, attr) in attrs {
        strategies.insert(name.clone(), build_strategy(name, attr, identities)?);
    }
    Ok(strategies)
}

/// Dispatch one descriptor to its reading strategy, recursing into nested
/// descriptors for structured kinds. `name` is threaded through every
/// recursive call; record fields recurse under their field name, list
/// elements under the list's own attribute name.
pub fn build_strategy(
    name: &str,
    attr: &AttrType,
    identities: &Arc<IdentityRegistry>,
) -> Result<ReadingStrategy, AttrError> {
    let strategy = match attr {
        AttrType::Simple { kind, default } => {
            ReadingStrategy::Simple(SimpleStrategy::new(name, *kind, default.clone()))
        }
        AttrType::Binary { default } => {
            ReadingStrategy::Binary(BinaryStrategy::new(name, default.clone()))
        }
        AttrType::Union { default } => ReadingStrategy::Union(UnionStrategy::new(
            name,
            UNION_VALUE_KEY,
            default.clone(),
        )),
        AttrType::Array { kind, default } => {
            // The element strategy shares the outer default.
            let element = ReadingStrategy::Simple(SimpleStrategy::new(name, *kind, default.clone()));
            ReadingStrategy::Array(ArrayStrategy::new(name, element, default.clone()))
        }
        AttrType::Composite {
            value_keys,
            default,
        } => {
            let key = single_value_key(name, attr.tag_name(), value_keys)?;
            ReadingStrategy::Composite(CompositeStrategy::new(name, key, default.clone()))
        }
        AttrType::IdentityRef {
            value_keys,
            default,
        } => {
            let key = single_value_key(name, attr.tag_name(), value_keys)?;
            ReadingStrategy::IdentityRef(IdentityRefStrategy::new(
                name,
                key,
                default.clone(),
                Arc::clone(identities),
            ))
        }
        AttrType::Dependency { default } => {
            ReadingStrategy::ObjectRef(ObjectRefStrategy::new(name, default.clone()))
        }
        AttrType::TransferObject { fields, default } => {
            let mut inner = HashMap::with_capacity(fields.len());
            for (field, field_attr) in fields {
                inner.insert(field.clone(), build_strategy(field, field_attr, identities)?);
            }
            ReadingStrategy::Record(RecordStrategy::new(name, inner, default.clone()))
        }
        AttrType::List { inner, default } => {
            let element = build_strategy(name, inner, identities)?;
            ReadingStrategy::Array(ArrayStrategy::new(name, element, default.clone()))
        }
        // The element strategy is always the object-reference strategy, no
        // matter what structural type the inner descriptor reports.
        AttrType::ListOfDependencies { default, .. } => {
            let element = ReadingStrategy::ObjectRef(ObjectRefStrategy::new(name, default.clone()));
            ReadingStrategy::Array(ArrayStrategy::new(name, element, default.clone()))
        }
    };
    Ok(strategy)
}

fn single_value_key(attr: &str, open_type: &str, keys: &[String]) -> Result<String, AttrError> {
    match keys {
        [key] => Ok(key.clone()),
        _ => Err(AttrError::value_key_cardinality(attr, open_type, keys.len())),
    }
}
