use tracing::debug;

use crate::entities::{EvaluationInput, Indicator};
use crate::services::indicators::{
    BloodGlucoseEvaluator, BloodPressureEvaluator, BodyMassIndexEvaluator, ElderlyHypotensionEvaluator,
    Evaluator, PriorAssessmentEvaluator,
};

/// Run every evaluator against the same input.
///
/// Evaluators that abstain are dropped; the rest keep declaration order.
/// No evaluator sees another's output.
pub fn run_evaluators(evaluators: &[Box<dyn Evaluator>], input: &EvaluationInput) -> Vec<Indicator> {
    evaluators
        .iter()
        .filter_map(|evaluator| {
            let indicator = evaluator.evaluate(input)?;
            debug!(
                evaluator = evaluator.name(),
                severity = %indicator.severity,
                "Evaluator fired"
            );
            Some(indicator)
        })
        .collect()
}

/// Ordered list of evaluators making up one rule set
pub struct EvaluatorRegistry {
    evaluators: Vec<Box<dyn Evaluator>>,
}

impl EvaluatorRegistry {
    /// Registry without any evaluator
    pub fn empty() -> Self {
        Self {
            evaluators: Vec::new(),
        }
    }

    /// The standard rule set: blood pressure, BMI, glucose, prior assessment,
    /// elderly hypotension
    pub fn standard() -> Self {
        Self::empty()
            .with_evaluator(BloodPressureEvaluator)
            .with_evaluator(BodyMassIndexEvaluator)
            .with_evaluator(BloodGlucoseEvaluator)
            .with_evaluator(PriorAssessmentEvaluator)
            .with_evaluator(ElderlyHypotensionEvaluator)
    }

    /// Append an evaluator after the existing ones
    pub fn with_evaluator(mut self, evaluator: impl Evaluator + 'static) -> Self {
        self.evaluators.push(Box::new(evaluator));
        self
    }

    /// Evaluator names in declaration order
    pub fn names(&self) -> Vec<&'static str> {
        self.evaluators.iter().map(|e| e.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }

    /// Run the whole rule set against one input
    pub fn run(&self, input: &EvaluationInput) -> Vec<Indicator> {
        run_evaluators(&self.evaluators, input)
    }
}

impl Default for EvaluatorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for EvaluatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluatorRegistry")
            .field("evaluators", &self.names())
            .finish()
    }
}
