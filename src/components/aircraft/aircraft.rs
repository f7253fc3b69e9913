use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::components::{AircraftData, StateSpaceModel};
use crate::config::ConfigError;
use crate::systems::{build_asymmetric, build_symmetric, InputScaling};
use crate::utils::ModelError;

/// States kept for the short-period approximation of the longitudinal motion.
pub const SHORT_PERIOD_STATES: [&str; 2] = ["alpha", "q"];

/// Linear aircraft built from one set of [`AircraftData`].
///
/// Longitudinal and lateral-directional models are independent; whichever
/// block the data provides is built, the other stays `None`.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Aircraft {
    name: String,
    symmetric: Option<StateSpaceModel>,
    asymmetric: Option<StateSpaceModel>,
}

impl Aircraft {
    /// Builds every submodel the data supports, using the default input scaling.
    pub fn new(data: &AircraftData) -> Result<Self, ModelError> {
        Self::with_input_scaling(data, InputScaling::default())
    }

    /// Builds every submodel the data supports.
    ///
    /// # Errors
    /// * [`ModelError::Configuration`] if the data has neither block.
    /// * Any error of the symmetric or asymmetric builders.
    pub fn with_input_scaling(
        data: &AircraftData,
        scaling: InputScaling,
    ) -> Result<Self, ModelError> {
        if data.symmetric.is_none() && data.asymmetric.is_none() {
            warn!("Aircraft '{}' has no symmetric or asymmetric data", data.name);
            return Err(ModelError::Configuration(format!(
                "aircraft '{}' needs symmetric or asymmetric data",
                data.name
            )));
        }

        let symmetric = data
            .symmetric
            .as_ref()
            .map(|sym| build_symmetric(data.v, sym))
            .transpose()?;
        let asymmetric = data
            .asymmetric
            .as_ref()
            .map(|asym| build_asymmetric(data.v, asym, scaling))
            .transpose()?;

        info!(
            "Built aircraft '{}' (symmetric: {}, asymmetric: {})",
            data.name,
            symmetric.is_some(),
            asymmetric.is_some()
        );

        Ok(Self {
            name: data.name.clone(),
            symmetric,
            asymmetric,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symmetric(&self) -> Option<&StateSpaceModel> {
        self.symmetric.as_ref()
    }

    pub fn asymmetric(&self) -> Option<&StateSpaceModel> {
        self.asymmetric.as_ref()
    }

    /// Model flown under a run configuration.
    ///
    /// # Errors
    /// [`ModelError::Configuration`] if the aircraft lacks the required submodel.
    pub fn model_for(&self, configuration: Configuration) -> Result<StateSpaceModel, ModelError> {
        let missing = |block: &str| {
            ModelError::Configuration(format!(
                "aircraft '{}' has no {block} model for configuration '{configuration}'",
                self.name
            ))
        };

        match configuration {
            Configuration::Symmetric => self.symmetric.clone().ok_or_else(|| missing("symmetric")),
            Configuration::ShortPeriod => self
                .symmetric
                .as_ref()
                .ok_or_else(|| missing("symmetric"))?
                .select_states(&SHORT_PERIOD_STATES),
            Configuration::Asymmetric => {
                self.asymmetric.clone().ok_or_else(|| missing("asymmetric"))
            }
        }
    }
}

/// Which part of the aircraft dynamics an experiment controls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Configuration {
    #[default]
    #[serde(rename = "symmetric")]
    Symmetric,
    /// Short-period approximation, `[alpha, q]` of the symmetric model.
    #[serde(rename = "sp")]
    ShortPeriod,
    #[serde(rename = "asymmetric")]
    Asymmetric,
}

impl Configuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            Configuration::Symmetric => "symmetric",
            Configuration::ShortPeriod => "sp",
            Configuration::Asymmetric => "asymmetric",
        }
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Configuration {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "symmetric" => Ok(Configuration::Symmetric),
            "sp" => Ok(Configuration::ShortPeriod),
            "asymmetric" => Ok(Configuration::Asymmetric),
            other => Err(ConfigError::invalid("configuration", other)),
        }
    }
}
