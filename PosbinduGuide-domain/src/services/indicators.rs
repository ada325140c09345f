//! Indicator evaluators
//!
//! Each evaluator inspects one clinical dimension of an [`EvaluationInput`]
//! and emits at most one [`Indicator`]. Missing fields mean "no opinion",
//! never an error. All bounds are inclusive as written.

use crate::entities::{AssessmentCategory, EvaluationInput, Indicator, Severity, SuggestedAction};

#[cfg(test)]
use mockall::automock;

/// Systolic pressure at or above which hypertension is severe (mmHg)
pub const SEVERE_SYSTOLIC_MIN: f64 = 180.0;
/// Diastolic pressure at or above which hypertension is severe (mmHg)
pub const SEVERE_DIASTOLIC_MIN: f64 = 110.0;
/// Systolic pressure at or above which hypertension is moderate (mmHg)
pub const MODERATE_SYSTOLIC_MIN: f64 = 160.0;
/// Diastolic pressure at or above which hypertension is moderate (mmHg)
pub const MODERATE_DIASTOLIC_MIN: f64 = 100.0;

/// BMI below which underweight is severe
pub const SEVERE_UNDERWEIGHT_BMI_MAX: f64 = 16.0;
/// BMI at or above which obesity is severe
pub const SEVERE_OBESITY_BMI_MIN: f64 = 35.0;

/// Glucose at or above which it is very high (mg/dL)
pub const VERY_HIGH_GLUCOSE_MIN: f64 = 300.0;
/// Glucose at or above which it is high (mg/dL)
pub const HIGH_GLUCOSE_MIN: f64 = 250.0;
/// Glucose at or below which the patient is hypoglycemic (mg/dL)
pub const HYPOGLYCEMIA_MAX: f64 = 70.0;

/// Age from which the hypotension rule applies (years)
pub const ELDERLY_AGE_MIN: u32 = 70;
/// Systolic pressure below which an elderly patient is hypotensive (mmHg)
pub const ELDERLY_HYPOTENSION_SYSTOLIC_MAX: f64 = 90.0;

/// A pure rule testing one clinical dimension against fixed thresholds
#[cfg_attr(test, automock)]
pub trait Evaluator: Send + Sync {
    /// Stable name used in logs and health reports
    fn name(&self) -> &'static str;

    /// Inspect the input; `None` when the rule has no opinion
    fn evaluate(&self, input: &EvaluationInput) -> Option<Indicator>;
}

/// Body-mass index: weight in kilograms over height in metres squared
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    // Scale before dividing so exact boundary values stay exact
    weight_kg * 10_000.0 / (height_cm * height_cm)
}

/// Severe or moderate hypertension; needs both pressures
#[derive(Debug, Clone, Copy, Default)]
pub struct BloodPressureEvaluator;

impl Evaluator for BloodPressureEvaluator {
    fn name(&self) -> &'static str {
        "blood_pressure"
    }

    fn evaluate(&self, input: &EvaluationInput) -> Option<Indicator> {
        let systolic = input.systolic_bp()?;
        let diastolic = input.diastolic_bp()?;

        if systolic >= SEVERE_SYSTOLIC_MIN || diastolic >= SEVERE_DIASTOLIC_MIN {
            Some(
                Indicator::new(
                    Severity::Critical,
                    "Hipertensi Berat",
                    format!(
                        "Tekanan darah {}/{} mmHg berada pada rentang hipertensi berat.",
                        systolic, diastolic
                    ),
                    "Segera rujuk pasien ke fasilitas kesehatan lanjutan.",
                )
                .with_action(SuggestedAction::Referral),
            )
        } else if systolic >= MODERATE_SYSTOLIC_MIN || diastolic >= MODERATE_DIASTOLIC_MIN {
            Some(
                Indicator::new(
                    Severity::Warning,
                    "Hipertensi Sedang",
                    format!(
                        "Tekanan darah {}/{} mmHg menunjukkan hipertensi sedang.",
                        systolic, diastolic
                    ),
                    "Berikan terapi antihipertensi dan pantau tekanan darah secara berkala.",
                )
                .with_action(SuggestedAction::Treatment),
            )
        } else {
            None
        }
    }
}

/// Severe underweight or severe obesity; needs height and weight
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyMassIndexEvaluator;

impl Evaluator for BodyMassIndexEvaluator {
    fn name(&self) -> &'static str {
        "body_mass_index"
    }

    fn evaluate(&self, input: &EvaluationInput) -> Option<Indicator> {
        let height_cm = input.height_cm()?;
        let weight_kg = input.weight_kg()?;
        let bmi = calculate_bmi(height_cm, weight_kg);

        if bmi < SEVERE_UNDERWEIGHT_BMI_MAX {
            Some(
                Indicator::new(
                    Severity::Critical,
                    "Kekurangan Berat Badan Berat",
                    format!("IMT {:.1} menunjukkan kekurangan berat badan berat.", bmi),
                    "Rujuk pasien untuk evaluasi gizi dan penyebab penurunan berat badan.",
                )
                .with_action(SuggestedAction::Referral),
            )
        } else if bmi >= SEVERE_OBESITY_BMI_MIN {
            Some(
                Indicator::new(
                    Severity::Warning,
                    "Obesitas Berat",
                    format!("IMT {:.1} menunjukkan obesitas berat.", bmi),
                    "Berikan konseling diet dan aktivitas fisik serta pertimbangkan terapi.",
                )
                .with_action(SuggestedAction::Treatment),
            )
        } else {
            None
        }
    }
}

/// Very high, high or hypoglycemic blood glucose
#[derive(Debug, Clone, Copy, Default)]
pub struct BloodGlucoseEvaluator;

impl Evaluator for BloodGlucoseEvaluator {
    fn name(&self) -> &'static str {
        "blood_glucose"
    }

    fn evaluate(&self, input: &EvaluationInput) -> Option<Indicator> {
        let glucose = input.glucose_mg_dl()?;

        if glucose >= VERY_HIGH_GLUCOSE_MIN {
            Some(
                Indicator::new(
                    Severity::Critical,
                    "Gula Darah Sangat Tinggi",
                    format!("Gula darah {} mg/dL sangat tinggi.", glucose),
                    "Segera rujuk pasien untuk penanganan hiperglikemia.",
                )
                .with_action(SuggestedAction::Referral),
            )
        } else if glucose >= HIGH_GLUCOSE_MIN {
            Some(
                Indicator::new(
                    Severity::Warning,
                    "Gula Darah Tinggi",
                    format!("Gula darah {} mg/dL di atas batas normal.", glucose),
                    "Berikan terapi dan edukasi pengendalian gula darah.",
                )
                .with_action(SuggestedAction::Treatment),
            )
        } else if glucose <= HYPOGLYCEMIA_MAX {
            Some(
                Indicator::new(
                    Severity::Critical,
                    "Hipoglikemia",
                    format!("Gula darah {} mg/dL berada pada rentang hipoglikemia.", glucose),
                    "Berikan asupan glukosa segera dan rujuk pasien.",
                )
                .with_action(SuggestedAction::Referral),
            )
        } else {
            None
        }
    }
}

/// A previous assessment already placed the patient in the referral category.
///
/// Emitted as a warning, not critical. A referral category arguably deserves
/// the same urgency as a critical vital; raising it is a policy change to be
/// made deliberately.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorAssessmentEvaluator;

impl Evaluator for PriorAssessmentEvaluator {
    fn name(&self) -> &'static str {
        "prior_assessment"
    }

    fn evaluate(&self, input: &EvaluationInput) -> Option<Indicator> {
        match input.prior_category()? {
            AssessmentCategory::Rujukan => Some(
                Indicator::new(
                    Severity::Warning,
                    "Kategori Rujukan",
                    "Pemeriksaan sebelumnya mengkategorikan pasien untuk rujukan.",
                    "Pastikan rujukan pasien telah ditindaklanjuti.",
                )
                .with_action(SuggestedAction::Referral),
            ),
            AssessmentCategory::Normal | AssessmentCategory::PerluPerhatian => None,
        }
    }
}

/// Low systolic pressure in patients aged 70 and over
#[derive(Debug, Clone, Copy, Default)]
pub struct ElderlyHypotensionEvaluator;

impl Evaluator for ElderlyHypotensionEvaluator {
    fn name(&self) -> &'static str {
        "elderly_hypotension"
    }

    fn evaluate(&self, input: &EvaluationInput) -> Option<Indicator> {
        if input.age_years < ELDERLY_AGE_MIN {
            return None;
        }
        let systolic = input.systolic_bp()?;

        if systolic < ELDERLY_HYPOTENSION_SYSTOLIC_MAX {
            Some(
                Indicator::new(
                    Severity::Warning,
                    "Hipotensi pada Lansia",
                    format!(
                        "Tekanan sistolik {} mmHg rendah untuk pasien berusia {} tahun.",
                        systolic, input.age_years
                    ),
                    "Pantau tekanan darah serta gejala pusing dan risiko jatuh.",
                )
                .with_action(SuggestedAction::Monitoring),
            )
        } else {
            None
        }
    }
}
