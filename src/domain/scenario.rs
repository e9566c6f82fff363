// Scenario sets for two-stage stochastic programs

use std::collections::HashMap;

use super::model::ModelError;

/// Tolerance for the probability-sum check
const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// One discrete realization of the uncertain parameters
#[derive(Debug, Clone)]
pub struct Scenario {
    label: String,
    probability: f64,
    overrides: HashMap<String, f64>,
}

impl Scenario {
    pub fn new(label: impl Into<String>, probability: f64) -> Self {
        Self {
            label: label.into(),
            probability,
            overrides: HashMap::new(),
        }
    }

    /// Attach a parameter override, e.g. a yield multiplier or a price
    pub fn with(mut self, parameter: impl Into<String>, value: f64) -> Self {
        self.overrides.insert(parameter.into(), value);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Scenario-specific value of `parameter`, or `default` when the
    /// scenario does not override it
    pub fn value_or(&self, parameter: &str, default: f64) -> f64 {
        self.overrides.get(parameter).copied().unwrap_or(default)
    }
}

/// Ordered, mutually exclusive, collectively exhaustive set of scenarios
///
/// Order is significant only for stable output labeling. A deterministic
/// problem is the special case of a single scenario with probability one,
/// which lets deterministic and stochastic formulations share one builder
/// code path.
#[derive(Debug, Clone)]
pub struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

impl ScenarioSet {
    /// Validate and build a scenario set
    ///
    /// Fails when any probability is non-positive or the probabilities do
    /// not sum to one within 1e-9.
    pub fn build(scenarios: Vec<Scenario>) -> Result<Self, ModelError> {
        if scenarios.is_empty() {
            return Err(ModelError::Probability(
                "a scenario set needs at least one scenario".to_string(),
            ));
        }
        for s in &scenarios {
            if s.probability <= 0.0 {
                return Err(ModelError::Probability(format!(
                    "scenario '{}' has non-positive probability {}",
                    s.label, s.probability
                )));
            }
        }
        let total: f64 = scenarios.iter().map(|s| s.probability).sum();
        if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(ModelError::Probability(format!(
                "probabilities sum to {total}, expected 1"
            )));
        }
        Ok(Self { scenarios })
    }

    /// The single-scenario set every deterministic problem is built on
    pub fn deterministic() -> Self {
        Self {
            scenarios: vec![Scenario::new("base", 1.0)],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
