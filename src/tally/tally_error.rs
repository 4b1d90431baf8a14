use crate::names::InvalidNameError;
use thiserror::Error;

/// Errors reported while counting downloads.
#[derive(Debug, Error)]
pub enum TallyError {
    /// The package name failed validation.
    #[error(transparent)]
    InvalidName(#[from] InvalidNameError),

    /// The filename pattern is not a valid regular expression.
    #[error("invalid filename pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The download total does not fit in a `u64`.
    #[error("download count of '{package}' does not fit in a u64")]
    CountOverflow { package: String },

    /// The package index failed while listing releases.
    #[error("{0}")]
    Source(ohno::AppError),
}

impl TallyError {
    /// Returns the index failure, if this error came from the package index.
    #[must_use]
    pub const fn as_source(&self) -> Option<&ohno::AppError> {
        match self {
            Self::Source(e) => Some(e),
            _ => None,
        }
    }
}
