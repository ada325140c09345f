//! Domain layer health check functionality
//! This module reports whether the classification core is ready to serve

use std::collections::HashMap;
use async_trait::async_trait;

use crate::services::RiskServiceTrait;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced performance
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

impl SystemHealth {
    /// Build a report whose overall status is the worst component status
    pub fn from_components(components: HashMap<String, HealthComponent>) -> Self {
        let status = if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
            SystemStatus::Unhealthy
        } else if components.values().any(|c| c.status == ComponentStatus::Degraded) {
            SystemStatus::Degraded
        } else {
            SystemStatus::Healthy
        };

        Self { status, components }
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check the status of the classifier
    /// Returns the number of loaded evaluators when at least one is loaded
    async fn check_classifier_status(&self) -> Result<usize, String>;
}

/// Check that the classifier has a rule set to run
///
/// Returns:
/// - Ok(count) with the number of evaluators when the rule set is loaded
/// - Err if no evaluator is registered
pub fn check_classifier_status(service: &dyn RiskServiceTrait) -> Result<usize, String> {
    match service.evaluator_names().len() {
        0 => Err("No evaluators registered".to_string()),
        count => Ok(count),
    }
}

/// Health component for the classifier
pub fn classifier_component(service: &dyn RiskServiceTrait) -> HealthComponent {
    match check_classifier_status(service) {
        Ok(count) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: Some(format!("{} evaluators loaded", count)),
        },
        Err(e) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(e),
        },
    }
}

/// Get overall system health
pub fn get_system_health(service: &dyn RiskServiceTrait) -> SystemHealth {
    SystemHealth::from_components(
        vec![
            ("classifier".to_string(), classifier_component(service)),
            (
                "api".to_string(),
                HealthComponent {
                    status: ComponentStatus::Healthy,
                    details: None,
                },
            ),
        ]
        .into_iter()
        .collect(),
    )
}
