use serde::Serialize;

use crate::core::{
    calculator::{ScenarioResults, calculate},
    scenario::ScenarioInputs,
};

/// Scenario together with its calculated impact.
#[derive(Debug, Serialize)]
#[must_use]
pub struct Evaluation {
    pub inputs: ScenarioInputs,
    pub results: ScenarioResults,
}

impl From<ScenarioInputs> for Evaluation {
    fn from(inputs: ScenarioInputs) -> Self {
        let results = calculate(&inputs);
        Self { inputs, results }
    }
}
