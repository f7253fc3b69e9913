use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::components::aircraft::config::{AsymmetricData, SymmetricData};
use crate::config::ConfigError;

/// Physical parameters and stability derivatives describing one flight condition.
///
/// Either block may be absent; an aircraft needs at least one of them to
/// produce a model, which is checked when the [`Aircraft`](crate::components::Aircraft)
/// is constructed rather than here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftData {
    /// Name of the aircraft, defaults to the type name.
    #[serde(default)]
    pub name: String,
    /// True airspeed of the reference flight condition (m/s).
    pub v: f64,
    #[serde(default)]
    pub symmetric: Option<SymmetricData>,
    #[serde(default)]
    pub asymmetric: Option<AsymmetricData>,
}

impl Default for AircraftData {
    /// The `Citation` data is chosen as the default for convenience.
    fn default() -> Self {
        Self::citation()
    }
}

impl AircraftData {
    /// Creates aircraft data from a given source.
    ///
    /// # Arguments
    /// * `source` - Hardcoded preset (`Programmed`) or YAML file (`File`).
    pub fn new(source: &AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed(aircraft_type) => Ok(Self::from_programmed(aircraft_type)),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(aircraft_type: &AircraftType) -> Self {
        match aircraft_type {
            AircraftType::Citation => Self::citation(),
        }
    }

    /// Cessna Ce500 Citation in clean cruise.
    pub fn citation() -> Self {
        Self {
            name: "Citation".to_string(),
            v: 59.9,
            symmetric: Some(SymmetricData::citation()),
            asymmetric: Some(AsymmetricData::citation()),
        }
    }

    /// Keeps only the longitudinal block.
    pub fn symmetric_only(mut self) -> Self {
        self.asymmetric = None;
        self
    }

    /// Keeps only the lateral-directional block.
    pub fn asymmetric_only(mut self) -> Self {
        self.symmetric = None;
        self
    }
}

/// Source for aircraft data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AircraftSource {
    Programmed(AircraftType),
    File(PathBuf),
}

impl Default for AircraftSource {
    fn default() -> Self {
        AircraftSource::Programmed(AircraftType::Citation)
    }
}

/// Aircraft with built-in derivative tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftType {
    Citation,
}
