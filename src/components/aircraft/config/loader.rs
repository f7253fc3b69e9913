use bevy::prelude::*;
use std::path::Path;

use crate::components::aircraft::config::AircraftData;
use crate::config::ConfigError;

impl AircraftData {
    /// Reads aircraft data from a YAML file.
    ///
    /// The name defaults to the file stem when the file does not set one.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file_contents = std::fs::read_to_string(path)?;
        let mut data = Self::from_yaml_str(&file_contents)?;

        if data.name.is_empty() {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                data.name = stem.to_string();
            }
        }

        info!("Loaded aircraft data '{}' from {}", data.name, path.display());
        Ok(data)
    }

    /// Parses aircraft data from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let data: AircraftData = serde_yaml::from_str(yaml)?;
        Ok(data)
    }
}
