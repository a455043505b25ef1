use std::fmt;

/// Error raised while building a reading strategy or decoding an attribute.
/// Always carries the attribute name the failure belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrError {
    pub attr: String,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    ValueKeyCardinality {
        open_type: String,
        count: usize,
    },
    ElementCardinality {
        count: usize,
    },
    ScalarMismatch {
        value: String,
        expected: &'static str,
    },
    MissingChild {
        key: String,
    },
    InvalidByte {
        value: String,
    },
    UnresolvedIdentity {
        name: String,
        revision: Option<String>,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ValueKeyCardinality { open_type, count } => {
                write!(
                    f,
                    "{open_type} open type exposes {count} value keys, expected exactly 1"
                )
            }
            ErrorKind::ElementCardinality { count } => {
                write!(f, "expected exactly 1 element, found {count}")
            }
            ErrorKind::ScalarMismatch { value, expected } => {
                write!(f, "cannot read '{value}' as {expected}")
            }
            ErrorKind::MissingChild { key } => write!(f, "missing child '{key}'"),
            ErrorKind::InvalidByte { value } => {
                write!(f, "'{value}' is not a byte value (0-255)")
            }
            ErrorKind::UnresolvedIdentity { name, revision } => {
                write!(f, "identity '{name}'")?;
                if let Some(revision) = revision {
                    write!(f, " (revision {revision})")?;
                }
                write!(f, " has no registry entry")
            }
        }
    }
}

impl fmt::Display for AttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attribute '{}': {}", self.attr, self.kind)
    }
}

impl std::error::Error for AttrError {}

impl AttrError {
    pub fn value_key_cardinality(
        attr: impl Into<String>,
        open_type: impl Into<String>,
        count: usize,
    ) -> Self {
        Self {
            attr: attr.into(),
            kind: ErrorKind::ValueKeyCardinality {
                open_type: open_type.into(),
                count,
            },
        }
    }

    pub fn element_cardinality(attr: impl Into<String>, count: usize) -> Self {
        Self {
            attr: attr.into(),
            kind: ErrorKind::ElementCardinality { count },
        }
    }

    pub fn scalar_mismatch(
        attr: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self {
            attr: attr.into(),
            kind: ErrorKind::ScalarMismatch {
                value: value.into(),
                expected,
            },
        }
    }

    pub fn missing_child(attr: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            attr: attr.into(),
            kind: ErrorKind::MissingChild { key: key.into() },
        }
    }

    pub fn invalid_byte(attr: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attr: attr.into(),
            kind: ErrorKind::InvalidByte {
                value: value.into(),
            },
        }
    }

    pub fn unresolved_identity(
        attr: impl Into<String>,
        name: impl Into<String>,
        revision: Option<String>,
    ) -> Self {
        Self {
            attr: attr.into(),
            kind: ErrorKind::UnresolvedIdentity {
                name: name.into(),
                revision,
            },
        }
    }
}
