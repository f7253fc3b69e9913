//! Linear time-invariant aircraft models for reinforcement-learning control.
//!
//! Stability and control derivatives of a flight condition are turned into
//! two decoupled state-space models, longitudinal (symmetric) and
//! lateral-directional (asymmetric), that an external environment loop steps
//! and scores.

pub mod components;
pub mod config;
pub mod plugins;
pub mod systems;
pub mod utils;

pub use components::{Aircraft, AircraftData, StateSpaceModel};
pub use config::{ConfigError, ExperimentConfig};
pub use utils::{ModelError, RewardError, SimError};
