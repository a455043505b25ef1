pub mod builder;
pub mod decode;
pub mod error;
pub mod identity;
pub mod scalar;
pub mod schema;
pub mod strategy;
pub mod types;

pub use builder::{build_strategies, build_strategy};
pub use decode::decode_attributes;
pub use error::{AttrError, ErrorKind};
pub use identity::{IdentityInfo, IdentityRegistry};
pub use scalar::{ScalarKind, coerce_scalar};
pub use schema::AttrType;
pub use strategy::{
    ArrayStrategy, BinaryStrategy, CompositeStrategy, DEPENDENCY_INSTANCE_KEY,
    DEPENDENCY_SERVICE_KEY, IdentityRefStrategy, ObjectRefStrategy, ReadingStrategy,
    RecordStrategy, SimpleStrategy, UNION_VALUE_KEY, UnionStrategy,
};
pub use types::{Element, ObjectRef, Value};
