use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::risk::AssessmentCategory;
use crate::error::{RiskResult, RiskServiceError};

/// Latest physical examination. Any field may be missing (not measured).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VitalsRecord {
    /// Systolic blood pressure in mmHg
    #[serde(rename = "systolicBP")]
    pub systolic_bp: Option<f64>,

    /// Diastolic blood pressure in mmHg
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: Option<f64>,

    /// Body height in centimetres
    pub height_cm: Option<f64>,

    /// Body weight in kilograms
    pub weight_kg: Option<f64>,

    /// Waist circumference in centimetres
    pub waist_cm: Option<f64>,
}

impl VitalsRecord {
    pub fn with_blood_pressure(mut self, systolic: f64, diastolic: f64) -> Self {
        self.systolic_bp = Some(systolic);
        self.diastolic_bp = Some(diastolic);
        self
    }

    pub fn with_systolic(mut self, systolic: f64) -> Self {
        self.systolic_bp = Some(systolic);
        self
    }

    pub fn with_body(mut self, height_cm: f64, weight_kg: f64) -> Self {
        self.height_cm = Some(height_cm);
        self.weight_kg = Some(weight_kg);
        self
    }

    pub fn with_waist(mut self, waist_cm: f64) -> Self {
        self.waist_cm = Some(waist_cm);
        self
    }

    /// Present measurements paired with their field names, in declaration order
    pub fn measurements(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("systolicBP", self.systolic_bp),
            ("diastolicBP", self.diastolic_bp),
            ("heightCm", self.height_cm),
            ("weightKg", self.weight_kg),
            ("waistCm", self.waist_cm),
        ]
    }
}

/// Latest advanced (laboratory) test
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LabResult {
    /// Blood glucose in mg/dL
    pub glucose_mg_dl: Option<f64>,
}

impl LabResult {
    pub fn with_glucose(glucose_mg_dl: f64) -> Self {
        Self {
            glucose_mg_dl: Some(glucose_mg_dl),
        }
    }
}

/// Most recent clinician-entered assessment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PriorAssessment {
    /// Category entered by the clinician, if any
    pub category: Option<AssessmentCategory>,
}

impl PriorAssessment {
    pub fn with_category(category: AssessmentCategory) -> Self {
        Self {
            category: Some(category),
        }
    }
}

/// Patient facts used only to adjust thresholds
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PatientContext {
    /// Completed years of age
    pub age_years: u32,
}

impl PatientContext {
    pub fn new(age_years: u32) -> Self {
        Self { age_years }
    }

    /// Derive the age in completed years on `on_date`.
    ///
    /// Fails when the birth date lies after `on_date`.
    pub fn from_birth_date(birth_date: NaiveDate, on_date: NaiveDate) -> RiskResult<Self> {
        if birth_date > on_date {
            return Err(RiskServiceError::ValidationError(format!(
                "Birth date {} is after {}",
                birth_date, on_date
            )));
        }

        let mut years = on_date.year() - birth_date.year();
        if (on_date.month(), on_date.day()) < (birth_date.month(), birth_date.day()) {
            years -= 1;
        }

        // years >= 0 because birth_date <= on_date
        Ok(Self {
            age_years: years.max(0) as u32,
        })
    }
}

/// Everything one classification run looks at
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EvaluationInput {
    /// Latest physical examination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitals: Option<VitalsRecord>,

    /// Latest advanced test
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab: Option<LabResult>,

    /// Latest clinician assessment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior_assessment: Option<PriorAssessment>,

    /// Age in completed years
    pub age_years: u32,
}

impl EvaluationInput {
    /// Input with only the patient's age set
    pub fn new(age_years: u32) -> Self {
        Self {
            age_years,
            ..Self::default()
        }
    }

    pub fn for_patient(patient: PatientContext) -> Self {
        Self::new(patient.age_years)
    }

    pub fn with_vitals(mut self, vitals: VitalsRecord) -> Self {
        self.vitals = Some(vitals);
        self
    }

    pub fn with_lab(mut self, lab: LabResult) -> Self {
        self.lab = Some(lab);
        self
    }

    pub fn with_prior_assessment(mut self, prior_assessment: PriorAssessment) -> Self {
        self.prior_assessment = Some(prior_assessment);
        self
    }

    pub fn patient(&self) -> PatientContext {
        PatientContext::new(self.age_years)
    }

    /// Whether any record at all was supplied
    pub fn has_any_data(&self) -> bool {
        self.vitals.is_some() || self.lab.is_some() || self.prior_assessment.is_some()
    }

    pub fn systolic_bp(&self) -> Option<f64> {
        self.vitals.and_then(|v| v.systolic_bp)
    }

    pub fn diastolic_bp(&self) -> Option<f64> {
        self.vitals.and_then(|v| v.diastolic_bp)
    }

    pub fn height_cm(&self) -> Option<f64> {
        self.vitals.and_then(|v| v.height_cm)
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.vitals.and_then(|v| v.weight_kg)
    }

    pub fn glucose_mg_dl(&self) -> Option<f64> {
        self.lab.and_then(|l| l.glucose_mg_dl)
    }

    pub fn prior_category(&self) -> Option<AssessmentCategory> {
        self.prior_assessment.and_then(|p| p.category)
    }

    /// Reject present measurements that are not finite positive numbers
    pub fn validate(&self) -> RiskResult<()> {
        crate::services::validation::validate_input(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_from_birth_date() {
        let patient = PatientContext::from_birth_date(date(1950, 6, 15), date(2025, 6, 15)).unwrap();
        assert_eq!(patient.age_years, 75);

        // Birthday not reached yet this year
        let patient = PatientContext::from_birth_date(date(1950, 6, 15), date(2025, 6, 14)).unwrap();
        assert_eq!(patient.age_years, 74);

        let newborn = PatientContext::from_birth_date(date(2025, 1, 1), date(2025, 1, 1)).unwrap();
        assert_eq!(newborn.age_years, 0);
    }

    #[test]
    fn test_birth_date_in_future_is_rejected() {
        let result = PatientContext::from_birth_date(date(2030, 1, 1), date(2025, 1, 1));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("after"));
    }

    #[test]
    fn test_input_accessors() {
        let input = EvaluationInput::new(60)
            .with_vitals(VitalsRecord::default().with_blood_pressure(150.0, 90.0))
            .with_lab(LabResult::with_glucose(120.0));

        assert!(input.has_any_data());
        assert_eq!(input.systolic_bp(), Some(150.0));
        assert_eq!(input.diastolic_bp(), Some(90.0));
        assert_eq!(input.height_cm(), None);
        assert_eq!(input.glucose_mg_dl(), Some(120.0));
        assert_eq!(input.prior_category(), None);
        assert_eq!(input.patient().age_years, 60);
    }

    #[test]
    fn test_validate_rejects_non_finite_waist() {
        let input = EvaluationInput::new(50).with_vitals(VitalsRecord::default().with_waist(f64::INFINITY));
        assert_eq!(input.validate().unwrap_err().field(), Some("waistCm"));

        let input = EvaluationInput::new(50).with_vitals(VitalsRecord::default().with_waist(82.0));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_empty_input_has_no_data() {
        assert!(!EvaluationInput::new(50).has_any_data());
    }

    #[test]
    fn test_vitals_wire_names() {
        let json = serde_json::json!({
            "vitals": { "systolicBP": 165, "diastolicBP": 95, "heightCm": 160 },
            "ageYears": 40
        });
        let input: EvaluationInput = serde_json::from_value(json).unwrap();
        assert_eq!(input.systolic_bp(), Some(165.0));
        assert_eq!(input.height_cm(), Some(160.0));
        assert_eq!(input.weight_kg(), None);
        assert!(input.lab.is_none());
    }
}
