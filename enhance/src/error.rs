//! Error types for the enhance library.
//!
//! Configuration problems found while resolving sections (missing sources,
//! cycles, malformed directives) are not errors in this sense; they are
//! collected as [`Diagnostic`](crate::resolve::Diagnostic) records. The
//! [`Error`] type covers store access failures, INI parse failures and
//! engine settings problems.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an enhance error.
///
/// # Examples
///
/// ```
/// use enhance::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("base".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the enhance library.
#[derive(Debug, Error)]
pub enum Error {
    /// A section was accessed that the store does not contain.
    #[error("no section '{section}'")]
    SectionNotFound {
        /// The missing section name.
        section: String,
    },

    /// An option was read that the section does not contain.
    #[error("no option '{key}' in section '{section}'")]
    OptionNotFound {
        /// The section that was searched.
        section: String,
        /// The missing option key.
        key: String,
    },

    /// INI text could not be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// The 1-based line number of the offending line.
        line: usize,
        /// A description of the problem.
        message: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A settings file could not be deserialized.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a missing section or option.
    ///
    /// # Examples
    ///
    /// ```
    /// use enhance::Error;
    ///
    /// let err = Error::SectionNotFound { section: "base".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SectionNotFound { .. } | Self::OptionNotFound { .. }
        )
    }
}
