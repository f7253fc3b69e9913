use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::components::StateSpaceModel;
use crate::config::ConfigError;
use crate::utils::ModelError;

/// Tracking task flown by the agent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    /// Track a constant angle-of-attack reference.
    #[default]
    Aoa,
    /// Track a sinusoidal angle-of-attack reference.
    AoaSin,
    /// Track a constant pitch-rate reference.
    Q,
    /// Track a sinusoidal pitch-rate reference.
    QSin,
}

impl Task {
    /// Name of the model state compared against the reference.
    pub fn tracked_state(&self) -> &'static str {
        match self {
            Task::Aoa | Task::AoaSin => "alpha",
            Task::Q | Task::QSin => "q",
        }
    }

    /// Squared error between the tracked state of `state` and `reference`.
    ///
    /// # Errors
    /// [`ModelError::Dimension`] if the model has no such state or `state`
    /// does not match the model's state dimension.
    pub fn squared_tracking_error(
        &self,
        model: &StateSpaceModel,
        state: &DVector<f64>,
        reference: f64,
    ) -> Result<f64, ModelError> {
        if state.len() != model.state_dimension() {
            return Err(ModelError::Dimension(format!(
                "State vector has {} entries, model has {} states",
                state.len(),
                model.state_dimension()
            )));
        }
        let index = model.state_index(self.tracked_state()).ok_or_else(|| {
            ModelError::Dimension(format!(
                "Model has no '{}' state to track",
                self.tracked_state()
            ))
        })?;

        Ok((state[index] - reference).powi(2))
    }
}

impl FromStr for Task {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aoa" => Ok(Task::Aoa),
            "aoa_sin" => Ok(Task::AoaSin),
            "q" => Ok(Task::Q),
            "q_sin" => Ok(Task::QSin),
            other => Err(ConfigError::invalid("task", other)),
        }
    }
}
