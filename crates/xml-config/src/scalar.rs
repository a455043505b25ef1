use crate::error::AttrError;
use crate::types::Value;

/// The structural kind of a scalar attribute's value space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Bool,
    Int,
    Decimal,
    Text,
}

impl ScalarKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Int => "int",
            ScalarKind::Decimal => "decimal",
            ScalarKind::Text => "text",
        }
    }

    /// Coerce raw element text into a value of this kind. Text is taken
    /// verbatim; the other kinds trim surrounding whitespace first.
    pub fn coerce(&self, text: &str) -> Option<Value> {
        match self {
            ScalarKind::Text => Some(Value::Text(text.to_string())),
            ScalarKind::Bool => match text.trim() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
            ScalarKind::Int => text.trim().parse::<i128>().ok().map(Value::Int),
            ScalarKind::Decimal => text.trim().parse::<f64>().ok().map(Value::Decimal),
        }
    }
}

pub fn coerce_scalar(attr: &str, kind: ScalarKind, text: &str) -> Result<Value, AttrError> {
    kind.coerce(text)
        .ok_or_else(|| AttrError::scalar_mismatch(attr, text, kind.type_name()))
}

#[cfg(test)]
mod tests {
    use super::{ScalarKind, coerce_scalar};
    use crate::error::ErrorKind;
    use crate::types::Value;

    #[test]
    fn int_coercion_trims_whitespace() {
        assert_eq!(ScalarKind::Int.coerce(" 8080 "), Some(Value::Int(8080)));
    }

    #[test]
    fn text_is_taken_verbatim() {
        assert_eq!(
            ScalarKind::Text.coerce(" padded "),
            Some(Value::Text(" padded ".to_string()))
        );
    }

    #[test]
    fn bool_rejects_anything_but_true_false() {
        assert_eq!(ScalarKind::Bool.coerce("yes"), None);
        assert_eq!(ScalarKind::Bool.coerce("true"), Some(Value::Bool(true)));
    }

    #[test]
    fn mismatch_reports_value_and_expected_kind() {
        let err = coerce_scalar("port", ScalarKind::Int, "eighty").unwrap_err();
        assert_eq!(err.attr, "port");
        match err.kind {
            ErrorKind::ScalarMismatch { value, expected } => {
                assert_eq!(value, "eighty");
                assert_eq!(expected, "int");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
