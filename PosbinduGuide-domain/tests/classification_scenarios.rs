use posbindu_guide_domain::entities::{
    AssessmentCategory, EvaluationInput, LabResult, PatientContext, PriorAssessment, Severity,
    SuggestedAction, VitalsRecord,
};
use posbindu_guide_domain::services::{
    calculate_bmi, classify_risk, AlertBanner, AssessmentSuggestion, EvaluatorRegistry, RiskService,
    RiskServiceTrait,
};
use chrono::NaiveDate;

fn titles(input: &EvaluationInput) -> Vec<String> {
    classify_risk(input)
        .unwrap()
        .indicators
        .into_iter()
        .map(|i| i.title)
        .collect()
}

#[test]
fn severe_systolic_alone_is_referral() {
    let input = EvaluationInput::new(50).with_vitals(VitalsRecord::default().with_blood_pressure(180.0, 70.0));
    let result = classify_risk(&input).unwrap();

    assert_eq!(result.indicators.len(), 1);
    assert_eq!(result.indicators[0].severity, Severity::Critical);
    assert_eq!(result.indicators[0].title, "Hipertensi Berat");
    assert_eq!(result.indicators[0].suggested_action, Some(SuggestedAction::Referral));
    assert_eq!(result.suggested_category, AssessmentCategory::Rujukan);
}

#[test]
fn moderate_hypertension_needs_attention() {
    let input = EvaluationInput::new(50).with_vitals(VitalsRecord::default().with_blood_pressure(165.0, 95.0));
    let result = classify_risk(&input).unwrap();

    assert_eq!(result.indicators.len(), 1);
    assert_eq!(result.indicators[0].severity, Severity::Warning);
    assert_eq!(result.indicators[0].title, "Hipertensi Sedang");
    assert_eq!(result.suggested_category, AssessmentCategory::PerluPerhatian);
}

#[test]
fn severe_underweight_is_referral() {
    assert!((calculate_bmi(160.0, 40.0) - 15.625).abs() < 1e-9);

    let input = EvaluationInput::new(30).with_vitals(VitalsRecord::default().with_body(160.0, 40.0));
    let result = classify_risk(&input).unwrap();

    assert_eq!(titles(&input), vec!["Kekurangan Berat Badan Berat"]);
    assert_eq!(result.indicators[0].severity, Severity::Critical);
    assert_eq!(result.suggested_category, AssessmentCategory::Rujukan);
}

#[test]
fn glucose_bands() {
    let low = classify_risk(&EvaluationInput::new(50).with_lab(LabResult::with_glucose(65.0))).unwrap();
    assert_eq!(low.indicators[0].title, "Hipoglikemia");
    assert_eq!(low.indicators[0].severity, Severity::Critical);

    let high = classify_risk(&EvaluationInput::new(50).with_lab(LabResult::with_glucose(250.0))).unwrap();
    assert_eq!(high.indicators[0].title, "Gula Darah Tinggi");
    assert_eq!(high.indicators[0].severity, Severity::Warning);

    let normal = classify_risk(&EvaluationInput::new(50).with_lab(LabResult::with_glucose(150.0))).unwrap();
    assert!(normal.indicators.is_empty());
    assert_eq!(normal.suggested_category, AssessmentCategory::Normal);
}

#[test]
fn elderly_hypotension_fires_without_blood_pressure_finding() {
    let input = EvaluationInput::new(75).with_vitals(VitalsRecord::default().with_blood_pressure(85.0, 60.0));
    let result = classify_risk(&input).unwrap();

    assert_eq!(titles(&input), vec!["Hipotensi pada Lansia"]);
    assert_eq!(result.indicators[0].severity, Severity::Warning);
    assert_eq!(result.indicators[0].suggested_action, Some(SuggestedAction::Monitoring));
    assert_eq!(result.suggested_category, AssessmentCategory::PerluPerhatian);
}

#[test]
fn no_records_is_normal() {
    let result = classify_risk(&EvaluationInput::new(50)).unwrap();

    assert!(result.indicators.is_empty());
    assert_eq!(result.suggested_category, AssessmentCategory::Normal);
    assert_eq!(result.critical_count, 0);
    assert_eq!(result.warning_count, 0);
    assert!(AlertBanner::from_result(&result).is_none());
}

#[test]
fn indicators_follow_evaluator_order() {
    let input = EvaluationInput::new(80)
        .with_vitals(VitalsRecord::default().with_blood_pressure(85.0, 115.0).with_body(150.0, 35.0))
        .with_lab(LabResult::with_glucose(320.0))
        .with_prior_assessment(PriorAssessment::with_category(AssessmentCategory::Rujukan));

    assert_eq!(
        titles(&input),
        vec![
            "Hipertensi Berat",
            "Kekurangan Berat Badan Berat",
            "Gula Darah Sangat Tinggi",
            "Kategori Rujukan",
            "Hipotensi pada Lansia",
        ]
    );

    let result = classify_risk(&input).unwrap();
    assert_eq!(result.critical_count, 3);
    assert_eq!(result.warning_count, 2);
    assert_eq!(result.suggested_category, AssessmentCategory::Rujukan);
}

#[test]
fn identical_inputs_give_identical_results() {
    let input = EvaluationInput::new(72)
        .with_vitals(VitalsRecord::default().with_blood_pressure(170.0, 85.0).with_body(158.0, 92.0))
        .with_lab(LabResult::with_glucose(260.0));

    let first = classify_risk(&input).unwrap();
    let second = classify_risk(&input).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(first.notification_key(), second.notification_key());
}

#[test]
fn age_from_birth_date_drives_elderly_rule() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let patient = PatientContext::from_birth_date(NaiveDate::from_ymd_opt(1954, 6, 2).unwrap(), today).unwrap();
    assert_eq!(patient.age_years, 69);

    let vitals = VitalsRecord::default().with_blood_pressure(85.0, 60.0);
    let younger = EvaluationInput::for_patient(patient).with_vitals(vitals);
    assert!(classify_risk(&younger).unwrap().indicators.is_empty());

    let patient = PatientContext::from_birth_date(NaiveDate::from_ymd_opt(1954, 6, 1).unwrap(), today).unwrap();
    let elderly = EvaluationInput::for_patient(patient).with_vitals(vitals);
    assert_eq!(titles(&elderly), vec!["Hipotensi pada Lansia"]);
}

#[test]
fn suggestion_matches_classification() {
    let service = RiskService::new(EvaluatorRegistry::standard());
    let input = EvaluationInput::new(60)
        .with_vitals(VitalsRecord::default().with_blood_pressure(182.0, 90.0))
        .with_lab(LabResult::with_glucose(255.0));

    let result = service.classify(&input).unwrap();
    let suggestion = service.suggest_assessment(&input).unwrap();

    assert_eq!(suggestion, AssessmentSuggestion::from_result(&result));
    assert_eq!(suggestion.category, AssessmentCategory::Rujukan);
    assert_eq!(suggestion.findings.lines().count(), 2);
}
