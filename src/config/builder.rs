use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::components::{AircraftSource, Configuration, RewardKind, Task};
use crate::config::{ConfigError, ExperimentConfig};
use crate::systems::InputScaling;

/// Incremental construction of an [`ExperimentConfig`].
///
/// Every field but the seed has a default; `build` validates the result.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfigBuilder {
    pub seed: Option<u64>,
    pub policy_type: Option<String>,
    pub env_name: Option<String>,
    pub source: Option<AircraftSource>,
    pub configuration: Option<Configuration>,
    pub algorithm: Option<String>,
    pub dt: Option<f64>,
    pub episode_steps: Option<u32>,
    pub learning_steps: Option<u64>,
    pub task: Option<Task>,
    pub run: Option<u32>,
    pub reward_scale: Option<f64>,
    pub log_interval: Option<u32>,
    pub reward_type: Option<RewardKind>,
    pub input_scaling: Option<InputScaling>,
}

impl ExperimentConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn policy_type(mut self, policy_type: impl Into<String>) -> Self {
        self.policy_type = Some(policy_type.into());
        self
    }

    pub fn env_name(mut self, env_name: impl Into<String>) -> Self {
        self.env_name = Some(env_name.into());
        self
    }

    pub fn source(mut self, source: AircraftSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn configuration(mut self, configuration: Configuration) -> Self {
        self.configuration = Some(configuration);
        self
    }

    pub fn algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }

    pub fn episode_steps(mut self, steps: u32) -> Self {
        self.episode_steps = Some(steps);
        self
    }

    pub fn learning_steps(mut self, steps: u64) -> Self {
        self.learning_steps = Some(steps);
        self
    }

    pub fn task(mut self, task: Task) -> Self {
        self.task = Some(task);
        self
    }

    pub fn run(mut self, run: u32) -> Self {
        self.run = Some(run);
        self
    }

    pub fn reward_scale(mut self, scale: f64) -> Self {
        self.reward_scale = Some(scale);
        self
    }

    pub fn log_interval(mut self, interval: u32) -> Self {
        self.log_interval = Some(interval);
        self
    }

    pub fn reward_type(mut self, kind: RewardKind) -> Self {
        self.reward_type = Some(kind);
        self
    }

    pub fn input_scaling(mut self, scaling: InputScaling) -> Self {
        self.input_scaling = Some(scaling);
        self
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let mut builder = Self::new();

        if let Some(seed) = u64_field(value, "seed")? {
            builder = builder.seed(seed);
        }
        if let Some(policy_type) = str_field(value, "policy_type")? {
            builder = builder.policy_type(policy_type);
        }
        if let Some(env_name) = str_field(value, "env_name")? {
            builder = builder.env_name(env_name);
        }
        if let Some(filename) = str_field(value, "filename")? {
            builder = builder.source(AircraftSource::File(PathBuf::from(filename)));
        }
        if let Some(configuration) = str_field(value, "configuration")? {
            builder = builder.configuration(configuration.parse::<Configuration>()?);
        }
        if let Some(algorithm) = str_field(value, "algorithm")? {
            builder = builder.algorithm(algorithm);
        }
        if let Some(dt) = f64_field(value, "dt")? {
            builder = builder.dt(dt);
        }
        if let Some(steps) = u32_field(value, "episode_steps")? {
            builder = builder.episode_steps(steps);
        }
        if let Some(steps) = u64_field(value, "learning_steps")? {
            builder = builder.learning_steps(steps);
        }
        if let Some(task) = str_field(value, "task")? {
            builder = builder.task(task.parse::<Task>()?);
        }
        if let Some(run) = u32_field(value, "run")? {
            builder = builder.run(run);
        }
        if let Some(scale) = f64_field(value, "reward_scale")? {
            builder = builder.reward_scale(scale);
        }
        if let Some(interval) = u32_field(value, "log_interval")? {
            builder = builder.log_interval(interval);
        }
        if let Some(reward_type) = str_field(value, "reward_type")? {
            let kind = reward_type
                .parse::<RewardKind>()
                .map_err(|_| ConfigError::invalid("reward_type", reward_type))?;
            builder = builder.reward_type(kind);
        }
        if let Some(scaling) = str_field(value, "input_scaling")? {
            builder = builder.input_scaling(scaling.parse::<InputScaling>()?);
        }

        Ok(builder)
    }

    pub fn build(self) -> Result<ExperimentConfig, ConfigError> {
        let seed = self
            .seed
            .ok_or_else(|| ConfigError::MissingRequired("seed".to_string()))?;
        let mut config = ExperimentConfig::with_seed(seed);

        if let Some(policy_type) = self.policy_type {
            config.policy_type = policy_type;
        }
        if let Some(env_name) = self.env_name {
            config.env_name = env_name;
        }
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(configuration) = self.configuration {
            config.configuration = configuration;
        }
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(dt) = self.dt {
            config.dt = dt;
        }
        if let Some(steps) = self.episode_steps {
            config.episode_steps = steps;
        }
        if let Some(steps) = self.learning_steps {
            config.learning_steps = steps;
        }
        if let Some(task) = self.task {
            config.task = task;
        }
        if let Some(run) = self.run {
            config.run = run;
        }
        if let Some(scale) = self.reward_scale {
            config.reward_scale = scale;
        }
        if let Some(interval) = self.log_interval {
            config.log_interval = interval;
        }
        if let Some(kind) = self.reward_type {
            config.reward_type = kind;
        }
        if let Some(scaling) = self.input_scaling {
            config.input_scaling = scaling;
        }

        config.validate()?;
        Ok(config)
    }
}

/// String field, `None` when absent or null.
fn str_field<'a>(value: &'a Value, key: &str) -> Result<Option<&'a str>, ConfigError> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(ConfigError::invalid(key, other)),
    }
}

fn f64_field(value: &Value, key: &str) -> Result<Option<f64>, ConfigError> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_f64().map(Some).ok_or_else(|| ConfigError::invalid(key, v)),
    }
}

fn u64_field(value: &Value, key: &str) -> Result<Option<u64>, ConfigError> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_u64().map(Some).ok_or_else(|| ConfigError::invalid(key, v)),
    }
}

fn u32_field(value: &Value, key: &str) -> Result<Option<u32>, ConfigError> {
    u64_field(value, key)?
        .map(|n| u32::try_from(n).map_err(|_| ConfigError::invalid(key, n)))
        .transpose()
}
