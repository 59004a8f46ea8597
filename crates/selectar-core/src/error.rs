//! Error types for selectar-core.

use thiserror::Error;

/// Errors that can occur while building or mutating an option catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The option list supplied at construction contained a duplicate value.
    ///
    /// Fatal to that construction call; the catalog is not built.
    #[error("invalid option: duplicate value '{value}'")]
    InvalidOption {
        /// The duplicated identifier.
        value: String,
    },

    /// A mutator referenced a value that is not present in the catalog.
    ///
    /// Recoverable. UI-driven paths only ever construct identifiers from
    /// rendered options, so this surfaces programming errors in the
    /// programmatic API.
    #[error("unknown option: '{value}'")]
    UnknownOption {
        /// The identifier that was not found.
        value: String,
    },
}

impl SelectError {
    /// Construct an `InvalidOption` error.
    #[must_use]
    pub fn invalid(value: impl Into<String>) -> Self {
        Self::InvalidOption {
            value: value.into(),
        }
    }

    /// Construct an `UnknownOption` error.
    #[must_use]
    pub fn unknown(value: impl Into<String>) -> Self {
        Self::UnknownOption {
            value: value.into(),
        }
    }

    /// Check if this is the recoverable unknown-option case.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::UnknownOption { .. })
    }
}
