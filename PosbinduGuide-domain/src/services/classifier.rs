use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::{AssessmentCategory, ClassificationResult, Indicator, Severity};

/// Counts by severity for the summary banner
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSummary {
    /// Number of critical indicators
    pub critical_count: usize,

    /// Number of warning indicators
    pub warning_count: usize,
}

/// Reduce indicators to a category by their worst severity.
///
/// Any critical → `rujukan`, else any warning → `perlu_perhatian`,
/// else `normal`. An empty list is `normal`.
pub fn classify(indicators: &[Indicator]) -> AssessmentCategory {
    let worst = indicators.iter().map(|i| i.severity).max();

    match worst {
        Some(Severity::Critical) => AssessmentCategory::Rujukan,
        Some(Severity::Warning) => AssessmentCategory::PerluPerhatian,
        Some(Severity::Info) | None => AssessmentCategory::Normal,
    }
}

/// Count indicators by severity
pub fn summarize(indicators: &[Indicator]) -> IndicatorSummary {
    indicators
        .iter()
        .fold(IndicatorSummary::default(), |mut summary, indicator| {
            match indicator.severity {
                Severity::Critical => summary.critical_count += 1,
                Severity::Warning => summary.warning_count += 1,
                Severity::Info => {}
            }
            summary
        })
}

/// Assemble the full result from evaluator output
pub fn build_result(indicators: Vec<Indicator>) -> ClassificationResult {
    let suggested_category = classify(&indicators);
    let summary = summarize(&indicators);

    ClassificationResult {
        indicators,
        suggested_category,
        critical_count: summary.critical_count,
        warning_count: summary.warning_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator(severity: Severity) -> Indicator {
        Indicator::new(severity, "judul", "pesan", "saran")
    }

    #[test]
    fn test_classify_empty_is_normal() {
        assert_eq!(classify(&[]), AssessmentCategory::Normal);
    }

    #[test]
    fn test_classify_info_only_is_normal() {
        assert_eq!(classify(&[indicator(Severity::Info)]), AssessmentCategory::Normal);
    }

    #[test]
    fn test_classify_warnings_only() {
        let indicators = vec![indicator(Severity::Warning), indicator(Severity::Warning)];
        assert_eq!(classify(&indicators), AssessmentCategory::PerluPerhatian);
    }

    #[test]
    fn test_critical_overrides_warnings_regardless_of_position() {
        let indicators = vec![
            indicator(Severity::Warning),
            indicator(Severity::Warning),
            indicator(Severity::Critical),
            indicator(Severity::Warning),
        ];
        assert_eq!(classify(&indicators), AssessmentCategory::Rujukan);
    }

    #[test]
    fn test_summarize_counts() {
        let indicators = vec![
            indicator(Severity::Critical),
            indicator(Severity::Warning),
            indicator(Severity::Info),
            indicator(Severity::Critical),
        ];
        let summary = summarize(&indicators);
        assert_eq!(summary.critical_count, 2);
        assert_eq!(summary.warning_count, 1);

        assert_eq!(summarize(&[]), IndicatorSummary::default());
    }

    #[test]
    fn test_build_result() {
        let result = build_result(vec![indicator(Severity::Warning), indicator(Severity::Critical)]);
        assert_eq!(result.suggested_category, AssessmentCategory::Rujukan);
        assert_eq!(result.critical_count, 1);
        assert_eq!(result.warning_count, 1);
        assert_eq!(result.indicators[0].severity, Severity::Warning);

        assert_eq!(build_result(Vec::new()), ClassificationResult::empty());
    }
}
