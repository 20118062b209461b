//! Error types for the Vitality Coach application
//!
//! The scoring engine is infallible. Errors only arise when raw form input
//! is turned into typed records.

use crate::validation::{too_long_message, ValidationError};
use thiserror::Error;

/// Form intake error types
#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("{}", .0.message)]
    InvalidField(ValidationError),
}

impl IntakeError {
    pub fn field(field: &str, message: impl AsRef<str>) -> Self {
        IntakeError::InvalidField(ValidationError::new(field, message.as_ref()))
    }

    /// Name of the offending form field
    pub fn field_name(&self) -> &str {
        match self {
            IntakeError::InvalidField(err) => &err.field,
        }
    }
}

/// Derive-level failures (text length limits) are reported against the
/// first failing field, in field-name order.
impl From<validator::ValidationErrors> for IntakeError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let first = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let max = errs
                    .first()
                    .and_then(|e| e.params.get("max"))
                    .and_then(|v| v.as_u64());
                (field.to_string(), max)
            })
            .min_by(|a, b| a.0.cmp(&b.0));

        match first {
            Some((field, Some(max))) => IntakeError::field(&field, too_long_message(&field, max)),
            Some((field, None)) => IntakeError::field(&field, "Invalid value"),
            None => IntakeError::field("form", "Invalid form"),
        }
    }
}
