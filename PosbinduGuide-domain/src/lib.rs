// PosbinduGuide Domain
// This crate contains the risk classification logic for the PosbinduGuide application

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Error types
pub mod error;

// Health checks and system status
pub mod health;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;

pub use entities::{AssessmentCategory, ClassificationResult, EvaluationInput, Indicator, Severity};
pub use error::{RiskResult, RiskServiceError};
pub use services::{classify_risk, RiskServiceTrait};
