use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AttrError;
use crate::identity::IdentityRegistry;
use crate::scalar::{ScalarKind, coerce_scalar};
use crate::types::{Element, ObjectRef, Value};

/// Child key carrying a union's active value.
pub const UNION_VALUE_KEY: &str = "value";
/// Child keys of a dependency element: the service the referenced object is
/// registered under, and its instance name.
pub const DEPENDENCY_SERVICE_KEY: &str = "type";
pub const DEPENDENCY_INSTANCE_KEY: &str = "name";

/// A constructed, type-specific decoder for one attribute. Strategies decode
/// from the list of elements matching the attribute name; the empty slice is
/// the absent-attribute case and yields the configured default at every
/// nesting level.
#[derive(Debug, Clone)]
pub enum ReadingStrategy {
    Simple(SimpleStrategy),
    Binary(BinaryStrategy),
    Union(UnionStrategy),
    Composite(CompositeStrategy),
    IdentityRef(IdentityRefStrategy),
    ObjectRef(ObjectRefStrategy),
    Array(ArrayStrategy),
    Record(RecordStrategy),
}

impl ReadingStrategy {
    pub fn decode(&self, elements: &[&Element]) -> Result<Value, AttrError> {
        match self {
            ReadingStrategy::Simple(s) => s.decode(elements),
            ReadingStrategy::Binary(s) => s.decode(elements),
            ReadingStrategy::Union(s) => s.decode(elements),
            ReadingStrategy::Composite(s) => s.decode(elements),
            ReadingStrategy::IdentityRef(s) => s.decode(elements),
            ReadingStrategy::ObjectRef(s) => s.decode(elements),
            ReadingStrategy::Array(s) => s.decode(elements),
            ReadingStrategy::Record(s) => s.decode(elements),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ReadingStrategy::Simple(s) => &s.name,
            ReadingStrategy::Binary(s) => &s.name,
            ReadingStrategy::Union(s) => &s.name,
            ReadingStrategy::Composite(s) => &s.name,
            ReadingStrategy::IdentityRef(s) => &s.name,
            ReadingStrategy::ObjectRef(s) => &s.name,
            ReadingStrategy::Array(s) => &s.name,
            ReadingStrategy::Record(s) => &s.name,
        }
    }

    pub fn default_value(&self) -> Option<&Value> {
        match self {
            ReadingStrategy::Simple(s) => s.default.as_ref(),
            ReadingStrategy::Binary(s) => s.default.as_ref(),
            ReadingStrategy::Union(s) => s.default.as_ref(),
            ReadingStrategy::Composite(s) => s.default.as_ref(),
            ReadingStrategy::IdentityRef(s) => s.default.as_ref(),
            ReadingStrategy::ObjectRef(s) => s.default.as_ref(),
            ReadingStrategy::Array(s) => s.default.as_ref(),
            ReadingStrategy::Record(s) => s.default.as_ref(),
        }
    }
}

fn defaulted(default: &Option<Value>) -> Value {
    default.clone().unwrap_or(Value::Null)
}

fn single<'a>(name: &str, elements: &[&'a Element]) -> Result<&'a Element, AttrError> {
    match elements {
        [element] => Ok(*element),
        _ => Err(AttrError::element_cardinality(name, elements.len())),
    }
}

fn child_text<'a>(name: &str, element: &'a Element, key: &str) -> Result<&'a str, AttrError> {
    element
        .child(key)
        .map(Element::text)
        .ok_or_else(|| AttrError::missing_child(name, key))
}

#[derive(Debug, Clone)]
pub struct SimpleStrategy {
    name: String,
    kind: ScalarKind,
    default: Option<Value>,
}

impl SimpleStrategy {
    pub fn new(name: impl Into<String>, kind: ScalarKind, default: Option<Value>) -> Self {
        Self {
            name: name.into(),
            kind,
            default,
        }
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    fn decode(&self, elements: &[&Element]) -> Result<Value, AttrError> {
        if elements.is_empty() {
            return Ok(defaulted(&self.default));
        }
        let element = single(&self.name, elements)?;
        coerce_scalar(&self.name, self.kind, element.text())
    }
}

#[derive(Debug, Clone)]
pub struct BinaryStrategy {
    name: String,
    default: Option<Value>,
}

impl BinaryStrategy {
    pub fn new(name: impl Into<String>, default: Option<Value>) -> Self {
        Self {
            name: name.into(),
            default,
        }
    }

    fn decode(&self, elements: &[&Element]) -> Result<Value, AttrError> {
        if elements.is_empty() {
            return Ok(defaulted(&self.default));
        }
        let element = single(&self.name, elements)?;
        let mut bytes = Vec::new();
        if element.children().is_empty() {
            for token in element.text().split_whitespace() {
                bytes.push(self.parse_byte(token)?);
            }
        } else {
            for child in element.children() {
                bytes.push(self.parse_byte(child.text().trim())?);
            }
        }
        Ok(Value::Bytes(bytes))
    }

    fn parse_byte(&self, token: &str) -> Result<u8, AttrError> {
        token
            .parse::<u8>()
            .map_err(|_| AttrError::invalid_byte(&self.name, token))
    }
}

#[derive(Debug, Clone)]
pub struct UnionStrategy {
    name: String,
    value_key: String,
    default: Option<Value>,
}

impl UnionStrategy {
    pub fn new(
        name: impl Into<String>,
        value_key: impl Into<String>,
        default: Option<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            value_key: value_key.into(),
            default,
        }
    }

    pub fn value_key(&self) -> &str {
        &self.value_key
    }

    fn decode(&self, elements: &[&Element]) -> Result<Value, AttrError> {
        if elements.is_empty() {
            return Ok(defaulted(&self.default));
        }
        let element = single(&self.name, elements)?;
        let text = child_text(&self.name, element, &self.value_key)?;
        Ok(Value::Text(text.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct CompositeStrategy {
    name: String,
    value_key: String,
    default: Option<Value>,
}

impl CompositeStrategy {
    pub fn new(
        name: impl Into<String>,
        value_key: impl Into<String>,
        default: Option<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            value_key: value_key.into(),
            default,
        }
    }

    pub fn value_key(&self) -> &str {
        &self.value_key
    }

    fn decode(&self, elements: &[&Element]) -> Result<Value, AttrError> {
        if elements.is_empty() {
            return Ok(defaulted(&self.default));
        }
        let element = single(&self.name, elements)?;
        let text = child_text(&self.name, element, &self.value_key)?;
        Ok(Value::Text(text.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct IdentityRefStrategy {
    name: String,
    value_key: String,
    default: Option<Value>,
    identities: Arc<IdentityRegistry>,
}

impl IdentityRefStrategy {
    pub fn new(
        name: impl Into<String>,
        value_key: impl Into<String>,
        default: Option<Value>,
        identities: Arc<IdentityRegistry>,
    ) -> Self {
        Self {
            name: name.into(),
            value_key: value_key.into(),
            default,
            identities,
        }
    }

    pub fn value_key(&self) -> &str {
        &self.value_key
    }

    fn decode(&self, elements: &[&Element]) -> Result<Value, AttrError> {
        if elements.is_empty() {
            return Ok(defaulted(&self.default));
        }
        let element = single(&self.name, elements)?;
        let child = element
            .child(&self.value_key)
            .ok_or_else(|| AttrError::missing_child(&self.name, &self.value_key))?;
        let identity = child.text().trim();
        let revision = child.attr("revision");
        match self.identities.resolve(identity, revision) {
            Some(info) => Ok(Value::Identity(info.clone())),
            None => Err(AttrError::unresolved_identity(
                &self.name,
                identity,
                revision.map(String::from),
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ObjectRefStrategy {
    name: String,
    default: Option<Value>,
}

impl ObjectRefStrategy {
    pub fn new(name: impl Into<String>, default: Option<Value>) -> Self {
        Self {
            name: name.into(),
            default,
        }
    }

    fn decode(&self, elements: &[&Element]) -> Result<Value, AttrError> {
        if elements.is_empty() {
            return Ok(defaulted(&self.default));
        }
        let element = single(&self.name, elements)?;
        let service = child_text(&self.name, element, DEPENDENCY_SERVICE_KEY)?;
        let instance = child_text(&self.name, element, DEPENDENCY_INSTANCE_KEY)?;
        Ok(Value::Ref(ObjectRef::new(
            service.trim(),
            instance.trim(),
        )))
    }
}

#[derive(Debug, Clone)]
pub struct ArrayStrategy {
    name: String,
    element: Box<ReadingStrategy>,
    default: Option<Value>,
}

impl ArrayStrategy {
    pub fn new(
        name: impl Into<String>,
        element: ReadingStrategy,
        default: Option<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            element: Box::new(element),
            default,
        }
    }

    pub fn element(&self) -> &ReadingStrategy {
        &self.element
    }

    fn decode(&self, elements: &[&Element]) -> Result<Value, AttrError> {
        if elements.is_empty() {
            return Ok(defaulted(&self.default));
        }
        let mut items = Vec::with_capacity(elements.len());
        for element in elements {
            items.push(self.element.decode(std::slice::from_ref(element))?);
        }
        Ok(Value::List(items))
    }
}

#[derive(Debug, Clone)]
pub struct RecordStrategy {
    name: String,
    fields: HashMap<String, ReadingStrategy>,
    default: Option<Value>,
}

impl RecordStrategy {
    pub fn new(
        name: impl Into<String>,
        fields: HashMap<String, ReadingStrategy>,
        default: Option<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            fields,
            default,
        }
    }

    pub fn fields(&self) -> &HashMap<String, ReadingStrategy> {
        &self.fields
    }

    fn decode(&self, elements: &[&Element]) -> Result<Value, AttrError> {
        if elements.is_empty() {
            return Ok(defaulted(&self.default));
        }
        let element = single(&self.name, elements)?;
        let mut record = HashMap::with_capacity(self.fields.len());
        for (field, strategy) in &self.fields {
            let matching: Vec<&Element> = element.children_named(field).collect();
            record.insert(field.clone(), strategy.decode(&matching)?);
        }
        Ok(Value::Record(record))
    }
}
