use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Severity of a single indicator, ordered `Info < Warning < Critical`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational finding, never changes the category
    Info,

    /// Needs attention or treatment at the health post
    Warning,

    /// Needs referral to a higher-level facility
    Critical,
}

impl Severity {
    /// Wire name of the severity
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Follow-up suggested by an indicator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SuggestedAction {
    /// Refer the patient to a higher-level facility
    Referral,

    /// Start or adjust treatment at the health post
    Treatment,

    /// Keep monitoring at the next visit
    Monitoring,
}

impl SuggestedAction {
    /// Wire name of the action
    pub const fn as_str(self) -> &'static str {
        match self {
            SuggestedAction::Referral => "referral",
            SuggestedAction::Treatment => "treatment",
            SuggestedAction::Monitoring => "monitoring",
        }
    }

    /// Form opened by the action button of the alert detail view
    pub const fn follow_up_form(self) -> Option<FollowUpForm> {
        match self {
            SuggestedAction::Referral => Some(FollowUpForm::ReferralForm),
            SuggestedAction::Treatment => Some(FollowUpForm::PrescriptionForm),
            SuggestedAction::Monitoring => None,
        }
    }
}

impl fmt::Display for SuggestedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record form a follow-up action leads to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum FollowUpForm {
    /// New referral form
    ReferralForm,

    /// New prescription form
    PrescriptionForm,
}

/// Overall risk bucket of an assessment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum AssessmentCategory {
    /// Routine monitoring
    #[default]
    Normal,

    /// Needs attention or treatment
    PerluPerhatian,

    /// Needs referral
    Rujukan,
}

impl AssessmentCategory {
    /// Wire name of the category
    pub const fn as_str(self) -> &'static str {
        match self {
            AssessmentCategory::Normal => "normal",
            AssessmentCategory::PerluPerhatian => "perlu_perhatian",
            AssessmentCategory::Rujukan => "rujukan",
        }
    }

    /// Display label shown in forms and banners
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentCategory::Normal => "Normal",
            AssessmentCategory::PerluPerhatian => "Perlu Perhatian",
            AssessmentCategory::Rujukan => "Rujukan",
        }
    }
}

impl fmt::Display for AssessmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding emitted by a single evaluator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    /// How urgent the finding is
    pub severity: Severity,

    /// Short title, e.g. "Hipertensi Berat"
    pub title: String,

    /// What was measured and why it was flagged
    pub message: String,

    /// What the health worker should do next
    pub recommendation: String,

    /// Follow-up action, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<SuggestedAction>,
}

impl Indicator {
    /// Create an indicator without a suggested action
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
            recommendation: recommendation.into(),
            suggested_action: None,
        }
    }

    /// Attach a suggested action
    pub fn with_action(mut self, action: SuggestedAction) -> Self {
        self.suggested_action = Some(action);
        self
    }
}

/// Output of one classification run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Indicators in evaluator declaration order
    pub indicators: Vec<Indicator>,

    /// Category derived from the worst indicator severity
    pub suggested_category: AssessmentCategory,

    /// Number of critical indicators
    pub critical_count: usize,

    /// Number of warning indicators
    pub warning_count: usize,
}

impl ClassificationResult {
    /// Result for an input on which no evaluator fired
    pub fn empty() -> Self {
        Self {
            indicators: Vec::new(),
            suggested_category: AssessmentCategory::Normal,
            critical_count: 0,
            warning_count: 0,
        }
    }

    /// Whether an alert banner should be shown at all
    pub fn has_alerts(&self) -> bool {
        !self.indicators.is_empty()
    }

    /// Stable key for notification deduplication.
    ///
    /// Lowercase hex SHA-256 over the category, counts and every indicator
    /// field in order. Equal results always produce equal keys. The key is
    /// computed on demand; whoever delivers notifications decides whether a
    /// key was already shown.
    pub fn notification_key(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.suggested_category.as_str().as_bytes());
        hasher.update((self.critical_count as u64).to_le_bytes());
        hasher.update((self.warning_count as u64).to_le_bytes());

        for indicator in &self.indicators {
            hasher.update(b"\x1e");
            hasher.update(indicator.severity.as_str().as_bytes());
            for field in [&indicator.title, &indicator.message, &indicator.recommendation] {
                hasher.update(b"\x1f");
                hasher.update(field.as_bytes());
            }
            hasher.update(b"\x1f");
            if let Some(action) = indicator.suggested_action {
                hasher.update(action.as_str().as_bytes());
            }
        }

        format!("{:x}", hasher.finalize())
    }
}

impl Default for ClassificationResult {
    fn default() -> Self {
        Self::empty()
    }
}
