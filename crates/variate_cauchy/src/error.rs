//! Error types for generator construction and configuration.

use thiserror::Error;
use variate_normal::NormalError;

/// Cauchy generator construction and configuration errors.
///
/// All variants are programmer-error-class failures raised synchronously at
/// construction or configuration time; sampling never fails (the unbound
/// call form propagates NaN instead, see
/// [`CauchyRng::sample`](crate::CauchyRng::sample)).
///
/// # Examples
/// ```
/// use variate_cauchy::{CauchyError, CauchyRng};
///
/// let err = CauchyRng::with_params(0.0, -1.0).unwrap_err();
/// assert!(matches!(err, CauchyError::InvalidScale { .. }));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CauchyError {
    /// Location parameter is NaN or non-finite.
    #[error("Invalid location: x0 = {x0}")]
    InvalidLocation {
        /// The rejected location value.
        x0: f64,
    },

    /// Scale parameter is not a strictly positive real number.
    #[error("Invalid scale: gamma = {gamma}")]
    InvalidScale {
        /// The rejected scale value.
        gamma: f64,
    },

    /// Configuration value is malformed.
    #[error("Invalid options: {message}")]
    InvalidOptions {
        /// Description of the rejected option value.
        message: String,
    },

    /// State snapshot is not a well-formed state buffer.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Description of the structural defect.
        message: String,
    },
}

impl From<NormalError> for CauchyError {
    fn from(err: NormalError) -> Self {
        match err {
            // Seeds arrive through the options surface.
            NormalError::InvalidSeed { message } => CauchyError::InvalidOptions { message },
            NormalError::InvalidState { message } => CauchyError::InvalidState { message },
        }
    }
}
