pub mod health;
pub mod risk;


// Re-export handlers for easier imports
pub use health::health_check;
pub use risk::{classify_risk, suggest_assessment};
