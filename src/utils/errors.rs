use thiserror::Error;

use crate::config::ConfigError;

/// Failures raised while constructing a linear model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Dimension error: {0}")]
    Dimension(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Singular model: {0} evaluates to zero")]
    SingularModel(&'static str),

    #[error("Invalid model: {matrix}[{row}, {col}] is not finite")]
    InvalidModel {
        matrix: &'static str,
        row: usize,
        col: usize,
    },
}

/// Failures raised while scoring a trajectory step.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RewardError {
    #[error("Reward type {0} not found")]
    UnknownRewardKind(String),

    #[error("Trajectory window holds no tracking error")]
    EmptyWindow,

    #[error("Action vectors differ in length: {previous} != {latest}")]
    ActionDimension { previous: usize, latest: usize },
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Reward error: {0}")]
    Reward(#[from] RewardError),
}
