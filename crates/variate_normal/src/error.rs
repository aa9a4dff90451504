//! Error types for seeding and state restoration.

use thiserror::Error;

/// Errors raised when constructing or re-seeding a normal generator.
///
/// Both variants are configuration-time failures surfaced synchronously to
/// the caller; sampling itself never fails.
///
/// # Examples
/// ```
/// use variate_normal::{NormalError, StateHandle};
///
/// let err = StateHandle::new(vec![0; 3]).unwrap_err();
/// assert!(matches!(err, NormalError::InvalidState { .. }));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NormalError {
    /// Seed input cannot initialise the generator.
    #[error("Invalid seed: {message}")]
    InvalidSeed {
        /// Description of the rejected seed.
        message: String,
    },

    /// State snapshot is not a well-formed state buffer.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Description of the structural defect.
        message: String,
    },
}
