//! Construction of the linearized aircraft equations of motion.
//!
//! Longitudinal and lateral-directional motion are treated as decoupled, so
//! each is built independently into its own [`StateSpaceModel`].

mod asymmetric;
mod symmetric;

pub use asymmetric::{build_asymmetric, InputScaling, ASYMMETRIC_INPUTS, ASYMMETRIC_STATES};
pub use symmetric::{build_symmetric, SYMMETRIC_INPUTS, SYMMETRIC_STATES};

use nalgebra::DMatrix;

use crate::utils::ModelError;

#[cfg(doc)]
use crate::components::StateSpaceModel;

/// Rejects a denominator before it is divided by.
fn nonzero(value: f64, name: &'static str) -> Result<f64, ModelError> {
    if value == 0.0 {
        Err(ModelError::SingularModel(name))
    } else {
        Ok(value)
    }
}

/// Rejects a matrix holding NaN or infinite entries.
fn ensure_finite(matrix: &DMatrix<f64>, name: &'static str) -> Result<(), ModelError> {
    for row in 0..matrix.nrows() {
        for col in 0..matrix.ncols() {
            if !matrix[(row, col)].is_finite() {
                return Err(ModelError::InvalidModel {
                    matrix: name,
                    row,
                    col,
                });
            }
        }
    }
    Ok(())
}
