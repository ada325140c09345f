//! Display payloads built from a [`ClassificationResult`]
//!
//! The alert banner and the assessment form both read from here, so the two
//! call sites always agree on what the rules found.

use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::{AssessmentCategory, ClassificationResult, FollowUpForm, Indicator};

/// One indicator as shown in the alert detail view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct IndicatorDetail {
    #[serde(flatten)]
    pub indicator: Indicator,

    /// Form opened by the action button, if the action has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_form: Option<FollowUpForm>,
}

impl From<&Indicator> for IndicatorDetail {
    fn from(indicator: &Indicator) -> Self {
        Self {
            indicator: indicator.clone(),
            follow_up_form: indicator.suggested_action.and_then(|a| a.follow_up_form()),
        }
    }
}

/// Summary banner payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AlertBanner {
    /// One-line summary of the counts
    pub headline: String,

    /// Number of critical indicators
    pub critical_count: usize,

    /// Number of warning indicators
    pub warning_count: usize,

    /// Detail entries in evaluator order
    pub details: Vec<IndicatorDetail>,
}

impl AlertBanner {
    /// Banner for a result, or `None` when nothing fired.
    ///
    /// An empty result renders nothing rather than an "all clear" badge.
    pub fn from_result(result: &ClassificationResult) -> Option<Self> {
        if !result.has_alerts() {
            return None;
        }

        Some(Self {
            headline: headline(result),
            critical_count: result.critical_count,
            warning_count: result.warning_count,
            details: result.indicators.iter().map(IndicatorDetail::from).collect(),
        })
    }
}

fn headline(result: &ClassificationResult) -> String {
    match (result.critical_count, result.warning_count) {
        (0, 0) => format!("{} catatan kesehatan", result.indicators.len()),
        (critical, 0) => format!("{} indikator kritis terdeteksi", critical),
        (0, warning) => format!("{} peringatan terdeteksi", warning),
        (critical, warning) => format!(
            "{} indikator kritis dan {} peringatan terdeteksi",
            critical, warning
        ),
    }
}

/// Pre-filled values for a new assessment form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSuggestion {
    /// Suggested category
    pub category: AssessmentCategory,

    /// One line per indicator: "{title}: {message}"
    pub findings: String,

    /// One line per distinct recommendation, first-seen order
    pub recommendations: String,
}

impl AssessmentSuggestion {
    pub fn from_result(result: &ClassificationResult) -> Self {
        let findings = result
            .indicators
            .iter()
            .map(|i| format!("{}: {}", i.title, i.message))
            .collect::<Vec<String>>()
            .join("\n");

        let mut recommendations: Vec<&str> = Vec::new();
        for indicator in &result.indicators {
            if !recommendations.contains(&indicator.recommendation.as_str()) {
                recommendations.push(&indicator.recommendation);
            }
        }

        Self {
            category: result.suggested_category,
            findings,
            recommendations: recommendations.join("\n"),
        }
    }
}
