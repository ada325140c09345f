use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use posbindu_guide_domain::entities::{
    AssessmentCategory, ClassificationResult, EvaluationInput, LabResult, PatientContext,
    PriorAssessment, VitalsRecord,
};
use posbindu_guide_domain::error::{RiskResult, RiskServiceError};
use posbindu_guide_domain::services::AlertBanner;

/// Latest physical examination as sent by the client
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VitalsInput {
    /// Systolic blood pressure in mmHg
    #[serde(rename = "systolicBP")]
    #[validate(range(min = 40.0, max = 300.0, message = "Systolic must be between 40 and 300"))]
    pub systolic_bp: Option<f64>,

    /// Diastolic blood pressure in mmHg
    #[serde(rename = "diastolicBP")]
    #[validate(range(min = 20.0, max = 200.0, message = "Diastolic must be between 20 and 200"))]
    pub diastolic_bp: Option<f64>,

    /// Body height in centimetres
    #[serde(rename = "heightCm")]
    #[validate(range(min = 30.0, max = 250.0, message = "Height must be between 30 and 250 cm"))]
    pub height_cm: Option<f64>,

    /// Body weight in kilograms
    #[serde(rename = "weightKg")]
    #[validate(range(min = 1.0, max = 400.0, message = "Weight must be between 1 and 400 kg"))]
    pub weight_kg: Option<f64>,

    /// Waist circumference in centimetres
    #[serde(rename = "waistCm")]
    #[validate(range(min = 20.0, max = 250.0, message = "Waist must be between 20 and 250 cm"))]
    pub waist_cm: Option<f64>,
}

impl From<&VitalsInput> for VitalsRecord {
    fn from(input: &VitalsInput) -> Self {
        VitalsRecord {
            systolic_bp: input.systolic_bp,
            diastolic_bp: input.diastolic_bp,
            height_cm: input.height_cm,
            weight_kg: input.weight_kg,
            waist_cm: input.waist_cm,
        }
    }
}

/// Latest laboratory test as sent by the client
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabInput {
    /// Blood glucose in mg/dL
    #[serde(rename = "glucoseMgDl")]
    #[validate(range(min = 10.0, max = 1000.0, message = "Glucose must be between 10 and 1000 mg/dL"))]
    pub glucose_mg_dl: Option<f64>,
}

/// Most recent assessment as sent by the client
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriorAssessmentInput {
    /// Category assigned by the previous assessment
    pub category: Option<AssessmentCategory>,
}

/// Request body for classification and form suggestion
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRiskRequest {
    /// Latest physical examination, if any
    #[validate]
    pub vitals: Option<VitalsInput>,

    /// Latest laboratory test, if any
    #[validate]
    pub lab: Option<LabInput>,

    /// Most recent assessment, if any
    #[serde(rename = "priorAssessment")]
    pub prior_assessment: Option<PriorAssessmentInput>,

    /// Age in completed years; takes precedence over birthDate
    #[serde(rename = "ageYears")]
    #[validate(range(max = 150, message = "Age must be at most 150 years"))]
    pub age_years: Option<u32>,

    /// Date of birth, used when ageYears is absent
    #[serde(rename = "birthDate")]
    pub birth_date: Option<NaiveDate>,
}

impl ClassifyRiskRequest {
    /// Resolve the patient age and build the domain input
    ///
    /// `today` is only used when the age has to be derived from birthDate.
    pub fn to_evaluation_input(&self, today: NaiveDate) -> RiskResult<EvaluationInput> {
        let patient = match (self.age_years, self.birth_date) {
            (Some(age_years), _) => PatientContext::new(age_years),
            (None, Some(birth_date)) => PatientContext::from_birth_date(birth_date, today)?,
            (None, None) => {
                return Err(RiskServiceError::ValidationError(
                    "Either ageYears or birthDate is required".to_string(),
                ))
            }
        };

        let mut input = EvaluationInput::for_patient(patient);
        if let Some(vitals) = &self.vitals {
            input = input.with_vitals(vitals.into());
        }
        if let Some(glucose) = self.lab.as_ref().and_then(|lab| lab.glucose_mg_dl) {
            input = input.with_lab(LabResult::with_glucose(glucose));
        }
        if let Some(category) = self.prior_assessment.as_ref().and_then(|p| p.category) {
            input = input.with_prior_assessment(PriorAssessment::with_category(category));
        }

        Ok(input)
    }
}

/// Classification outcome with banner payload and deduplication key
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRiskResponse {
    #[serde(flatten)]
    pub result: ClassificationResult,

    /// Alert banner; absent when nothing fired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<AlertBanner>,

    /// SHA-256 of the result, for notification deduplication
    pub notification_key: String,
}

impl From<ClassificationResult> for ClassifyRiskResponse {
    fn from(result: ClassificationResult) -> Self {
        Self {
            alert: AlertBanner::from_result(&result),
            notification_key: result.notification_key(),
            result,
        }
    }
}
