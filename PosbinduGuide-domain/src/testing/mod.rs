// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

use crate::entities::{ClassificationResult, EvaluationInput};
use crate::error::RiskServiceError;
use crate::health::{ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth, SystemStatus};
use crate::services::{AssessmentSuggestion, RiskServiceTrait};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Mock implementation of the RiskServiceTrait for testing
///
/// Returns a canned result instead of running the evaluators and records
/// every input it was asked to classify.
#[derive(Debug)]
pub struct MockRiskService {
    result: ClassificationResult,
    calls: RwLock<Vec<EvaluationInput>>,
    validation_failure: Option<RiskServiceError>,
}

impl Default for MockRiskService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRiskService {
    /// Create a new mock risk service that classifies everything as normal
    pub fn new() -> Self {
        Self {
            result: ClassificationResult::empty(),
            calls: RwLock::new(Vec::new()),
            validation_failure: None,
        }
    }

    /// Configure the mock to reject one field as an invalid measurement
    pub fn with_invalid_measurement(mut self, field: &'static str, value: f64) -> Self {
        self.validation_failure = Some(RiskServiceError::InvalidMeasurement { field, value });
        self
    }

    /// Result returned by every successful classification
    pub fn with_result(mut self, result: ClassificationResult) -> Self {
        self.result = result;
        self
    }

    /// Inputs received so far, in call order
    pub fn calls(&self) -> Vec<EvaluationInput> {
        self.calls.read().map(|calls| calls.clone()).unwrap_or_default()
    }

    /// Number of classifications requested so far
    pub fn call_count(&self) -> usize {
        self.calls.read().map(|calls| calls.len()).unwrap_or_default()
    }
}

impl RiskServiceTrait for MockRiskService {
    fn validate_input(&self, _input: &EvaluationInput) -> Result<(), RiskServiceError> {
        match &self.validation_failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn classify(&self, input: &EvaluationInput) -> Result<ClassificationResult, RiskServiceError> {
        if let Ok(mut calls) = self.calls.write() {
            calls.push(input.clone());
        }

        self.validate_input(input)?;
        Ok(self.result.clone())
    }

    fn suggest_assessment(&self, input: &EvaluationInput) -> Result<AssessmentSuggestion, RiskServiceError> {
        let result = self.classify(input)?;
        Ok(AssessmentSuggestion::from_result(&result))
    }

    fn evaluator_names(&self) -> Vec<&'static str> {
        vec!["mock"]
    }
}

/// Mock implementation of the HealthServiceTrait for testing
#[derive(Debug)]
pub struct MockHealthService {
    /// Classifier component status
    classifier_status: ComponentStatus,
    /// System status
    system_status: SystemStatus,
    /// Additional components
    components: HashMap<String, HealthComponent>,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a new mock health service with all components healthy
    pub fn new() -> Self {
        Self {
            classifier_status: ComponentStatus::Healthy,
            system_status: SystemStatus::Healthy,
            components: HashMap::new(),
        }
    }

    /// Configure the mock with a degraded classifier
    pub fn with_degraded_classifier(mut self) -> Self {
        self.classifier_status = ComponentStatus::Degraded;
        self
    }

    /// Configure the mock with an unhealthy classifier
    pub fn with_unhealthy_classifier(mut self) -> Self {
        self.classifier_status = ComponentStatus::Unhealthy;
        self
    }

    /// Set the overall system status
    pub fn with_system_status(mut self, status: SystemStatus) -> Self {
        self.system_status = status;
        self
    }

    /// Add a custom component with a specific status
    pub fn with_component(mut self, name: &str, status: ComponentStatus, details: Option<String>) -> Self {
        self.components.insert(name.to_string(), HealthComponent { status, details });
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();

        components.insert(
            "classifier".to_string(),
            HealthComponent {
                status: self.classifier_status.clone(),
                details: match self.classifier_status {
                    ComponentStatus::Healthy => Some("5 evaluators loaded".to_string()),
                    ComponentStatus::Degraded => Some("Evaluator set is incomplete".to_string()),
                    ComponentStatus::Unhealthy => Some("No evaluators registered".to_string()),
                },
            },
        );

        components.insert(
            "api".to_string(),
            HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
        );

        for (name, component) in &self.components {
            components.insert(name.clone(), component.clone());
        }

        SystemHealth {
            status: self.system_status.clone(),
            components,
        }
    }

    async fn check_classifier_status(&self) -> Result<usize, String> {
        match self.classifier_status {
            ComponentStatus::Healthy => Ok(5),
            ComponentStatus::Degraded => Ok(1),
            ComponentStatus::Unhealthy => Err("No evaluators registered".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AssessmentCategory, Indicator, LabResult, Severity};
    use crate::services::{build_result, create_mock_risk_service};

    #[test]
    fn test_mock_risk_service_records_calls() {
        let service = create_mock_risk_service();
        let input = EvaluationInput::new(40).with_lab(LabResult::with_glucose(100.0));

        let result = service.classify(&input).unwrap();
        assert_eq!(result, ClassificationResult::empty());
        assert_eq!(service.call_count(), 1);
        assert_eq!(service.calls()[0], input);
    }

    #[test]
    fn test_mock_risk_service_canned_result() {
        let canned = build_result(vec![Indicator::new(Severity::Critical, "Hipoglikemia", "65", "Rujuk")]);
        let service = MockRiskService::new().with_result(canned.clone());

        let suggestion = service.suggest_assessment(&EvaluationInput::new(40)).unwrap();
        assert_eq!(suggestion.category, AssessmentCategory::Rujukan);
        assert_eq!(service.classify(&EvaluationInput::new(40)).unwrap(), canned);
    }

    #[test]
    fn test_mock_risk_service_validation_failure() {
        let service = MockRiskService::new().with_invalid_measurement("weightKg", -1.0);
        let err = service.classify(&EvaluationInput::new(40)).unwrap_err();
        assert_eq!(err.field(), Some("weightKg"));
    }

    #[tokio::test]
    async fn test_mock_health_service_unhealthy_classifier() {
        let service = MockHealthService::new()
            .with_unhealthy_classifier()
            .with_system_status(SystemStatus::Unhealthy);

        let health = service.get_system_health().await;
        assert_eq!(health.status, SystemStatus::Unhealthy);
        assert_eq!(health.components["classifier"].status, ComponentStatus::Unhealthy);
        assert!(service.check_classifier_status().await.is_err());
    }
}
