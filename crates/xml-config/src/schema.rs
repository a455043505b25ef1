use std::collections::HashMap;

use crate::scalar::ScalarKind;
use crate::types::Value;

/// Declarative description of one configuration attribute's shape, produced
/// by the schema compiler. Every variant carries the attribute's nullable
/// default; structured variants carry the descriptors needed to recurse.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrType {
    /// A plain scalar value.
    Simple {
        kind: ScalarKind,
        default: Option<Value>,
    },
    /// A sequence of byte-sized unsigned integers.
    Binary { default: Option<Value> },
    /// A union; the active member is carried under the well-known value key.
    Union { default: Option<Value> },
    /// A homogeneous array of scalars.
    Array {
        kind: ScalarKind,
        default: Option<Value>,
    },
    /// An open-type record wrapping a single logical value, e.g. a union
    /// payload. The payload's value keys must number exactly one.
    Composite {
        value_keys: Vec<String>,
        default: Option<Value>,
    },
    /// A reference into the identity registry. Same single-value-key rule as
    /// `Composite`.
    IdentityRef {
        value_keys: Vec<String>,
        default: Option<Value>,
    },
    /// A reference to another managed configuration object.
    Dependency { default: Option<Value> },
    /// A structured record with named, independently-typed fields.
    TransferObject {
        fields: HashMap<String, AttrType>,
        default: Option<Value>,
    },
    /// A homogeneous collection of the inner descriptor's type.
    List {
        inner: Box<AttrType>,
        default: Option<Value>,
    },
    /// A collection of dependency references. The inner descriptor is carried
    /// for completeness but never drives element decoding.
    ListOfDependencies {
        inner: Box<AttrType>,
        default: Option<Value>,
    },
}

impl AttrType {
    pub fn default_value(&self) -> Option<&Value> {
        match self {
            AttrType::Simple { default, .. }
            | AttrType::Binary { default }
            | AttrType::Union { default }
            | AttrType::Array { default, .. }
            | AttrType::Composite { default, .. }
            | AttrType::IdentityRef { default, .. }
            | AttrType::Dependency { default }
            | AttrType::TransferObject { default, .. }
            | AttrType::List { default, .. }
            | AttrType::ListOfDependencies { default, .. } => default.as_ref(),
        }
    }

    pub fn tag_name(&self) -> &'static str {
        match self {
            AttrType::Simple { .. } => "simple",
            AttrType::Binary { .. } => "binary",
            AttrType::Union { .. } => "union",
            AttrType::Array { .. } => "array",
            AttrType::Composite { .. } => "composite",
            AttrType::IdentityRef { .. } => "identity-ref",
            AttrType::Dependency { .. } => "dependency",
            AttrType::TransferObject { .. } => "transfer-object",
            AttrType::List { .. } => "list",
            AttrType::ListOfDependencies { .. } => "list-of-dependencies",
        }
    }
}
