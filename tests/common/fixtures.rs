use linear_flyer::components::{AircraftData, AsymmetricData, SymmetricData};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Symmetric block with round numbers, easy to check by hand
pub fn simple_symmetric() -> SymmetricData {
    let mut data = SymmetricData::citation();
    data.c_bar = 2.0;
    data.mu_c = 100.0;
    data.ky_2 = 1.0;
    data
}

/// Asymmetric block with round numbers, easy to check by hand
pub fn simple_asymmetric() -> AsymmetricData {
    let mut data = AsymmetricData::citation();
    data.b = 10.0;
    data.mu_b = 20.0;
    data.kx_2 = 0.02;
    data.kz_2 = 0.04;
    data.kxz = 0.0;
    data
}

/// Aircraft data at `v` with the given blocks
pub fn aircraft_data(
    v: f64,
    symmetric: Option<SymmetricData>,
    asymmetric: Option<AsymmetricData>,
) -> AircraftData {
    AircraftData {
        name: "test_aircraft".to_string(),
        v,
        symmetric,
        asymmetric,
    }
}

/// Path of the Citation data file shipped with the crate
pub fn citation_yaml_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("citation.yaml")
}

/// Writes `contents` to a YAML file inside a fresh temporary directory
pub fn write_temp_yaml(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    (dir, path)
}
