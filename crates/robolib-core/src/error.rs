//! Error types for library loading.

use robolib_api::{ArgumentSpecError, TypeSpecError};

/// Why a single keyword cannot be added to a library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeywordInfoError {
    #[error("Keyword name cannot be empty.")]
    EmptyName,

    #[error("Invalid argument specification: {0}")]
    Arguments(#[from] ArgumentSpecError),

    #[error("Invalid type information: {0}")]
    Types(#[from] TypeSpecError),

    #[error("Library does not resolve the name to a keyword.")]
    MissingMember,
}

/// Library loading errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Adding keyword '{name}' to library '{library}' failed: {source}")]
    InvalidKeyword {
        library: String,
        name: String,
        #[source]
        source: KeywordInfoError,
    },

    #[error("Library '{library}' reports keyword '{name}' multiple times.")]
    DuplicateKeyword { library: String, name: String },
}

/// Result type for library loading.
pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::InvalidKeyword {
            library: "Lib".to_string(),
            name: "Kw".to_string(),
            source: ArgumentSpecError::MultipleVarargs.into(),
        };
        assert_eq!(
            err.to_string(),
            "Adding keyword 'Kw' to library 'Lib' failed: Invalid argument specification: Cannot have multiple varargs."
        );
    }
}
