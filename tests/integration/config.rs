use bevy::prelude::*;
use linear_flyer::{
    components::{AircraftSource, Configuration, RewardKind, Task},
    plugins::LinearAircraftPlugin,
    systems::InputScaling,
    Aircraft, ConfigError, ExperimentConfig, ModelError, SimError,
};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{assert_model_valid, citation_yaml_path, write_temp_yaml};

#[test]
fn test_experiment_from_json_string() {
    let path = citation_yaml_path();
    let json = json!({
        "seed": 42,
        "algorithm": "PPO",
        "filename": path.to_str().unwrap(),
        "configuration": "sp",
        "task": "aoa_sin",
        "reward_type": "sq_error_da",
        "reward_scale": 0.5,
        "dt": 0.01,
        "episode_steps": 2000
    })
    .to_string();

    let config = ExperimentConfig::from_json_str(&json).unwrap();
    assert_eq!(config.seed, 42);
    assert_eq!(config.source, AircraftSource::File(path));
    assert_eq!(config.configuration, Configuration::ShortPeriod);
    assert_eq!(config.task, Task::AoaSin);
    assert_eq!(config.reward_type, RewardKind::SqErrorDa);
    assert_eq!(config.input_scaling, InputScaling::SpanRatio);

    let model = config.build_model().unwrap();
    assert_model_valid(&model);
    assert_eq!(model.state_names(), ["alpha", "q"]);
    assert!(model.state_index(config.task.tracked_state()).is_some());
}

#[test]
fn test_missing_seed_rejected() {
    let result = ExperimentConfig::from_json(&json!({ "dt": 0.1 }));
    assert!(matches!(result, Err(ConfigError::MissingRequired(_))));
}

#[test]
fn test_same_seed_same_streams() {
    use rand::Rng;

    let config = ExperimentConfig::builder().seed(7).run(2).build().unwrap();
    let first = config.rng_manager();
    let second = config.rng_manager();

    let draw = |mut rng: rand_chacha::ChaCha8Rng| {
        (0..4).map(|_| rng.gen::<u64>()).collect::<Vec<_>>()
    };
    assert_eq!(
        draw(first.run_rng(config.run as usize)),
        draw(second.run_rng(config.run as usize))
    );
    assert_ne!(draw(first.get_rng("reference")), draw(first.get_rng("noise")));
}

#[test]
fn test_file_without_lateral_block() {
    let (_dir, path) = write_temp_yaml(
        "longitudinal.yaml",
        &std::fs::read_to_string(citation_yaml_path())
            .unwrap()
            .split("\nasymmetric:")
            .next()
            .unwrap()
            .to_string(),
    );

    let config = ExperimentConfig::builder()
        .seed(1)
        .source(AircraftSource::File(path))
        .configuration(Configuration::Asymmetric)
        .build()
        .unwrap();

    let aircraft = config.build_aircraft().unwrap();
    assert!(aircraft.symmetric().is_some());
    assert!(aircraft.asymmetric().is_none());
    assert!(matches!(
        config.build_model(),
        Err(SimError::Model(ModelError::Configuration(_)))
    ));
}

#[test]
fn test_malformed_yaml_is_config_error() {
    let (_dir, path) = write_temp_yaml("broken.yaml", "v: [59.9\nsymmetric: {");
    let config = ExperimentConfig::builder()
        .seed(1)
        .source(AircraftSource::File(path))
        .build()
        .unwrap();

    assert!(matches!(
        config.build_aircraft(),
        Err(SimError::Config(ConfigError::YamlError(_)))
    ));
}

#[test]
fn test_plugin_spawns_configured_aircraft() {
    let config = ExperimentConfig::builder()
        .seed(3)
        .source(AircraftSource::File(citation_yaml_path()))
        .build()
        .unwrap();

    let mut app = App::new();
    app.add_plugins(LinearAircraftPlugin::from_config(&config).unwrap());
    app.update();

    let world = app.world_mut();
    let spawned: Vec<(Aircraft, String)> = world
        .query::<(&Aircraft, &Name)>()
        .iter(world)
        .map(|(aircraft, name)| (aircraft.clone(), name.as_str().to_string()))
        .collect();

    assert_eq!(spawned.len(), 1);
    assert_eq!(spawned[0].1, "Citation");
    assert_eq!(spawned[0].0, config.build_aircraft().unwrap());
    assert_eq!(app.world().resource::<ExperimentConfig>().seed, 3);
}

#[test]
fn test_plugin_construction_fails_on_bad_source() {
    let config = ExperimentConfig::builder()
        .seed(3)
        .source(AircraftSource::File("does/not/exist.yaml".into()))
        .build()
        .unwrap();

    assert!(matches!(
        LinearAircraftPlugin::from_config(&config),
        Err(SimError::Config(ConfigError::FileError(_)))
    ));
}
