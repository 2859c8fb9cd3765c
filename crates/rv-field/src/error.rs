//! Field computation errors.

use rv_core::RvError;
use thiserror::Error;

/// Result type for field operations.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors raised by the opt-in validation layer.
///
/// The computation path itself never errors; non-finite values flow through
/// the mask and render as gaps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Non-physical values (zero or negative density, viscosity, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<FieldError> for RvError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::NonPhysical { what } => RvError::Invariant {
                what: Box::leak(format!("Non-physical field value: {}", what).into_boxed_str()),
            },
            FieldError::InvalidArg { what } => RvError::InvalidArg {
                what: Box::leak(format!("Invalid field argument: {}", what).into_boxed_str()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FieldError::NonPhysical { what: "viscosity" };
        assert!(err.to_string().contains("viscosity"));
    }

    #[test]
    fn error_to_rv_error() {
        let field_err = FieldError::NonPhysical { what: "density" };
        let rv_err: RvError = field_err.into();
        assert!(matches!(rv_err, RvError::Invariant { .. }));
    }
}
