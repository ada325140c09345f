// Domain entities and value objects
pub mod patient;
pub mod risk;

// Re-export common types for easier imports
pub use patient::{EvaluationInput, LabResult, PatientContext, PriorAssessment, VitalsRecord};
pub use risk::{
    AssessmentCategory, ClassificationResult, FollowUpForm, Indicator, Severity, SuggestedAction,
};
