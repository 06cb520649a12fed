//! Error types for perception-utils.

use thiserror::Error;

/// Result alias for perception-utils operations.
pub type PerceptionUtilsResult<T> = std::result::Result<T, PerceptionUtilsError>;

/// Errors that can occur when converting labels.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PerceptionUtilsError {
    /// The string is not one of the canonical label names.
    #[error("invalid label name: {name:?}")]
    InvalidLabelName { name: String },
    /// The wire code does not map to a defined label.
    #[error("invalid label code: {code}")]
    InvalidLabelCode { code: u8 },
}
