// Public entities for the PosbinduGuide API
// This module contains data structures that are shared across the application boundary

// Request and response bodies for risk classification
pub mod risk;

// Common entities for error handling
pub mod common;

pub use common::ErrorResponse;
pub use risk::{ClassifyRiskRequest, ClassifyRiskResponse, LabInput, PriorAssessmentInput, VitalsInput};
