use tracing::{info, warn};

use crate::entities::{ClassificationResult, EvaluationInput};
use crate::error::{RiskResult, RiskServiceError};
use crate::services::classifier::build_result;
use crate::services::presentation::AssessmentSuggestion;
use crate::services::registry::EvaluatorRegistry;

/// Trait for risk classification operations
pub trait RiskServiceTrait: Send + Sync {
    /// Reject malformed measurements before evaluation
    fn validate_input(&self, input: &EvaluationInput) -> Result<(), RiskServiceError>;

    /// Validate, evaluate every rule and reduce to a category
    fn classify(&self, input: &EvaluationInput) -> Result<ClassificationResult, RiskServiceError>;

    /// Pre-filled values for a new assessment form
    fn suggest_assessment(&self, input: &EvaluationInput) -> Result<AssessmentSuggestion, RiskServiceError>;

    /// Names of the evaluators in run order
    fn evaluator_names(&self) -> Vec<&'static str>;
}

/// Risk service backed by an evaluator registry
#[derive(Debug)]
pub struct RiskService {
    registry: EvaluatorRegistry,
}

impl RiskService {
    /// Create a new risk service
    pub fn new(registry: EvaluatorRegistry) -> Self {
        Self { registry }
    }
}

impl Default for RiskService {
    fn default() -> Self {
        Self::new(EvaluatorRegistry::standard())
    }
}

impl RiskServiceTrait for RiskService {
    fn validate_input(&self, input: &EvaluationInput) -> Result<(), RiskServiceError> {
        input.validate().map_err(|err| {
            warn!(field = err.field().unwrap_or("input"), "Rejected malformed evaluation input");
            err
        })
    }

    fn classify(&self, input: &EvaluationInput) -> Result<ClassificationResult, RiskServiceError> {
        self.validate_input(input)?;

        if !input.has_any_data() {
            info!("No records supplied, defaulting to normal");
            return Ok(ClassificationResult::empty());
        }

        let result = build_result(self.registry.run(input));

        info!(
            category = %result.suggested_category,
            critical = result.critical_count,
            warning = result.warning_count,
            "Risk classification complete"
        );

        Ok(result)
    }

    fn suggest_assessment(&self, input: &EvaluationInput) -> Result<AssessmentSuggestion, RiskServiceError> {
        let result = self.classify(input)?;
        Ok(AssessmentSuggestion::from_result(&result))
    }

    fn evaluator_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }
}

/// Classify one input with the standard rule set
pub fn classify_risk(input: &EvaluationInput) -> RiskResult<ClassificationResult> {
    RiskService::default().classify(input)
}

/// Create a risk service with the standard rule set
pub fn create_default_risk_service() -> impl RiskServiceTrait {
    RiskService::default()
}

/// Create a mock risk service for testing
/// This function is only available when the mock feature is enabled
#[cfg(feature = "mock")]
pub fn create_mock_risk_service() -> crate::testing::MockRiskService {
    crate::testing::MockRiskService::new()
}
