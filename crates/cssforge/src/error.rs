//! Schema errors raised while constructing style values.

use thiserror::Error;

/// Error returned when an authored value does not fit the style schema.
///
/// Schema errors are construction-time errors: they are raised by builders and
/// by deserialization, before anything reaches an [`Adapter`](crate::Adapter).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A font face was built without the mandatory `src` descriptor.
    #[error("font face rule is missing the required 'src' descriptor")]
    MissingFontSource,

    /// A scoped font face declared `fontFamily`, which is supplied by the face name.
    #[error("'fontFamily' is not allowed in a scoped font face rule")]
    FontFamilyNotAllowed,

    /// A key is not part of the known CSS property vocabulary.
    #[error("unknown CSS property '{0}'")]
    UnknownProperty(String),

    /// A key looks like a pseudo selector but is not a known simple pseudo.
    #[error("unknown simple pseudo selector '{0}'")]
    UnknownPseudo(String),

    /// A query or selector map appeared where this layer does not allow it.
    #[error("'{key}' is not allowed inside {context}")]
    InvalidNesting { key: String, context: &'static str },

    /// A value that should be a `var()` reference could not be parsed.
    #[error("invalid CSS variable reference '{0}'")]
    InvalidVar(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_nesting_display() {
        let err = SchemaError::InvalidNesting {
            key: "@media".to_string(),
            context: "an @media block",
        };
        assert_eq!(err.to_string(), "'@media' is not allowed inside an @media block");
    }

    #[test]
    fn test_unknown_property_display() {
        let err = SchemaError::UnknownProperty("colour".to_string());
        assert!(err.to_string().contains("colour"));
    }
}
