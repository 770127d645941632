//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Aging itself never fails; these errors only come out of the validating
/// constructors that callers may opt into.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An item's quality is outside the range its category allows.
    #[error("quality {quality} out of range for item `{name}`")]
    QualityOutOfRange { name: String, quality: i64 },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn quality_out_of_range(name: impl Into<String>, quality: i64) -> Self {
        Self::QualityOutOfRange {
            name: name.into(),
            quality,
        }
    }
}
