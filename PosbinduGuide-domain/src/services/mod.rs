pub mod classifier;
pub mod indicators;
pub mod presentation;
pub mod registry;
pub mod risk;
pub mod validation;

// Domain services
// The risk classification core: evaluators, runner, classifier and display payloads.

// Re-export service traits and factory functions
pub use classifier::{build_result, classify, summarize, IndicatorSummary};
pub use indicators::{calculate_bmi, Evaluator};
pub use presentation::{AlertBanner, AssessmentSuggestion, IndicatorDetail};
pub use registry::{run_evaluators, EvaluatorRegistry};
pub use risk::{classify_risk, create_default_risk_service, RiskService, RiskServiceTrait};

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use risk::create_mock_risk_service;
