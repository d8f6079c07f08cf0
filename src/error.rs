// ⛔ Input Errors - rejected at construction time
// Nothing malformed is allowed to reach a report.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// NaN or infinite value
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    /// Negative where only non-negative amounts make sense (cash in hand)
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// Rating outside its documented scale (only under RatingPolicy::Reject)
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Finite inputs whose derived value overflows f64
    #[error("{field} overflows: inputs are too large to compute it")]
    Overflow { field: &'static str },
}

impl InputError {
    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            InputError::NotFinite { field, .. }
            | InputError::Negative { field, .. }
            | InputError::OutOfRange { field, .. }
            | InputError::Overflow { field } => field,
        }
    }
}
