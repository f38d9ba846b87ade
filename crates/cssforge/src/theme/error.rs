//! Theme token errors.

use thiserror::Error;

/// Error returned when token trees do not line up or cannot be loaded.
///
/// Paths are dotted key paths from the tree root, e.g. `color.brand`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The contract declares a token the theme does not provide.
    #[error("theme is missing token '{path}'")]
    MissingToken { path: String },

    /// The theme provides a token the contract does not declare.
    #[error("theme provides unexpected token '{path}'")]
    UnexpectedToken { path: String },

    /// A value sits where the contract has a group, or the other way around.
    #[error("token '{path}' should be {expected}")]
    ShapeMismatch { path: String, expected: &'static str },

    /// The namer produced something that is not a custom-property name.
    #[error("token '{path}' was named '{name}', which is not a valid custom property")]
    InvalidVarName { path: String, name: String },

    /// Two tokens were given the same custom property.
    #[error("tokens '{first}' and '{second}' are both named '{name}'")]
    DuplicateVarName {
        name: String,
        first: String,
        second: String,
    },

    /// A token file could not be parsed.
    #[error("failed to parse tokens: {0}")]
    Parse(String),
}

impl ThemeError {
    pub(crate) fn missing(path: &[&str]) -> Self {
        ThemeError::MissingToken {
            path: path.join("."),
        }
    }

    pub(crate) fn unexpected(path: &[&str]) -> Self {
        ThemeError::UnexpectedToken {
            path: path.join("."),
        }
    }

    pub(crate) fn mismatch(path: &[&str], expected: &'static str) -> Self {
        ThemeError::ShapeMismatch {
            path: path.join("."),
            expected,
        }
    }
}
