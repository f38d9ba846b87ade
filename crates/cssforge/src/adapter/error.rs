//! Adapter protocol errors.

use thiserror::Error;

use super::FileScope;

/// A call that breaks the per-scope protocol.
///
/// These are programmer errors: the caller should abort processing of the
/// file that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// CSS was appended to a scope that has already ended.
    #[error("cannot append css to {0}: the file scope has ended")]
    ScopeClosed(FileScope),

    /// A scope was ended twice.
    #[error("file scope {0} has already ended")]
    ScopeAlreadyClosed(FileScope),

    /// A composition identifier was registered with two different class lists.
    #[error("composition '{identifier}' is '{existing}', cannot register '{conflicting}'")]
    CompositionConflict {
        identifier: String,
        existing: String,
        conflicting: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_scope() {
        let scope = FileScope::new("src/button.css.ts").with_package("ui");
        let err = ProtocolError::ScopeClosed(scope);
        assert_eq!(
            err.to_string(),
            "cannot append css to ui/src/button.css.ts: the file scope has ended"
        );
    }
}
