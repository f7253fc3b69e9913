use bevy::prelude::*;

use crate::components::Aircraft;
use crate::config::ExperimentConfig;
use crate::utils::SimError;

/// Plugin attaching a linear aircraft to the ECS world.
///
/// The aircraft is fully built before the plugin exists, so a failed model
/// construction aborts setup instead of spawning a partial entity. Systems of
/// the environment loop query `&Aircraft` to read the model matrices.
pub struct LinearAircraftPlugin {
    aircraft: Aircraft,
    config: Option<ExperimentConfig>,
}

impl LinearAircraftPlugin {
    /// Creates a plugin spawning `aircraft` at startup.
    pub fn new(aircraft: Aircraft) -> Self {
        Self {
            aircraft,
            config: None,
        }
    }

    /// Builds the aircraft described by `config` and keeps the config as a resource.
    ///
    /// # Errors
    /// Any loading or model construction failure of [`ExperimentConfig::build_aircraft`].
    pub fn from_config(config: &ExperimentConfig) -> Result<Self, SimError> {
        let aircraft = config.build_aircraft()?;
        Ok(Self {
            aircraft,
            config: Some(config.clone()),
        })
    }

    pub fn aircraft(&self) -> &Aircraft {
        &self.aircraft
    }

    fn spawn_aircraft(mut commands: Commands, aircraft: Aircraft) {
        info!("Spawning linear aircraft '{}'", aircraft.name());
        let name = Name::new(aircraft.name().to_string());
        commands.spawn((aircraft, name));
    }
}

impl Plugin for LinearAircraftPlugin {
    fn build(&self, app: &mut App) {
        let aircraft = self.aircraft.clone();

        if let Some(config) = &self.config {
            app.insert_resource(config.clone());
        }

        app.add_systems(Startup, move |commands: Commands| {
            Self::spawn_aircraft(commands, aircraft.clone())
        });
    }
}
