use crate::entities::EvaluationInput;
use crate::error::{RiskResult, RiskServiceError};

/// Check that every present measurement is a finite, strictly positive number.
///
/// Fields are checked in declaration order and the first violation is
/// reported. Absent fields always pass.
pub fn validate_input(input: &EvaluationInput) -> RiskResult<()> {
    if let Some(vitals) = &input.vitals {
        for (field, value) in vitals.measurements() {
            if let Some(value) = value {
                check_measurement(field, value)?;
            }
        }
    }

    if let Some(glucose) = input.glucose_mg_dl() {
        check_measurement("glucoseMgDl", glucose)?;
    }

    Ok(())
}

fn check_measurement(field: &'static str, value: f64) -> RiskResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RiskServiceError::InvalidMeasurement { field, value })
    }
}
