use thiserror::Error;

/// Error type for risk classification
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RiskServiceError {
    /// A measurement is present but not a usable number
    #[error("Invalid measurement for {field}: {value}")]
    InvalidMeasurement {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl RiskServiceError {
    /// Field the error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RiskServiceError::InvalidMeasurement { field, .. } => Some(field),
            RiskServiceError::ValidationError(_) => None,
        }
    }
}

/// Result alias for risk classification operations
pub type RiskResult<T> = Result<T, RiskServiceError>;
