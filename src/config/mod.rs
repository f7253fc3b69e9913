use bevy::prelude::*;
use serde::Serialize;
use serde_json::Value;

use crate::{
    components::{
        Aircraft, AircraftData, AircraftSource, Configuration, RewardKind, StateSpaceModel, Task,
    },
    systems::InputScaling,
    utils::{RngManager, SimError},
};

mod builder;
mod errors;

pub use builder::ExperimentConfigBuilder;
pub use errors::ConfigError;

/// Parameters of one training experiment on the linear aircraft.
#[derive(Resource, Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentConfig {
    // Master seed
    pub seed: u64,

    // Learner
    pub policy_type: String,
    pub algorithm: String,
    pub learning_steps: u64,
    pub log_interval: u32,

    // Environment
    pub env_name: String,
    pub source: AircraftSource,
    pub configuration: Configuration,
    pub input_scaling: InputScaling,
    pub dt: f64,
    pub episode_steps: u32,
    pub run: u32,

    // Task and reward
    pub task: Task,
    pub reward_scale: f64,
    pub reward_type: RewardKind,
}

impl ExperimentConfig {
    /// Default experiment on the programmed Citation, seeded explicitly.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            policy_type: "MlpPolicy".to_string(),
            algorithm: String::new(),
            learning_steps: 1_000,
            log_interval: 1,
            env_name: "citation".to_string(),
            source: AircraftSource::default(),
            configuration: Configuration::default(),
            input_scaling: InputScaling::default(),
            dt: 0.1,
            episode_steps: 100,
            run: 0,
            task: Task::default(),
            reward_scale: 1.0,
            reward_type: RewardKind::default(),
        }
    }

    pub fn builder() -> ExperimentConfigBuilder {
        ExperimentConfigBuilder::new()
    }

    pub fn from_json(json: &Value) -> Result<Self, ConfigError> {
        ExperimentConfigBuilder::from_json(json)?.build()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::invalid("dt", self.dt));
        }
        if self.episode_steps == 0 {
            return Err(ConfigError::invalid("episode_steps", self.episode_steps));
        }
        if self.log_interval == 0 {
            return Err(ConfigError::invalid("log_interval", self.log_interval));
        }
        if !self.reward_scale.is_finite() {
            return Err(ConfigError::invalid("reward_scale", self.reward_scale));
        }
        Ok(())
    }

    pub fn rng_manager(&self) -> RngManager {
        RngManager::new(self.seed)
    }

    /// Loads the aircraft data and builds every submodel it supports.
    pub fn build_aircraft(&self) -> Result<Aircraft, SimError> {
        let data = AircraftData::new(&self.source)?;
        let aircraft = Aircraft::with_input_scaling(&data, self.input_scaling)?;
        Ok(aircraft)
    }

    /// Model selected by `configuration`.
    pub fn build_model(&self) -> Result<StateSpaceModel, SimError> {
        let model = self.build_aircraft()?.model_for(self.configuration)?;
        info!(
            "Experiment model '{}' has states {:?} and inputs {:?}",
            self.configuration,
            model.state_names(),
            model.input_names()
        );
        Ok(model)
    }
}
