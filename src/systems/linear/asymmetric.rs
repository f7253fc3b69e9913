use bevy::prelude::*;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{ensure_finite, nonzero};
use crate::components::{AsymmetricData, StateSpaceModel};
use crate::config::ConfigError;
use crate::utils::ModelError;

/// Sideslip, roll angle, nondimensional roll rate and nondimensional yaw rate.
pub const ASYMMETRIC_STATES: [&str; 4] = ["beta", "phi", "p", "r"];
/// Aileron and rudder deflection.
pub const ASYMMETRIC_INPUTS: [&str; 2] = ["da", "dr"];

/// Speed ratio multiplying every entry of the lateral-directional B matrix.
///
/// Earlier model versions scaled B by `v / mu_b` while A used `v / b`.
/// Policies trained against those models need `MassRatio` to reproduce their
/// dynamics; new work should use the default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputScaling {
    /// `v / b`, consistent with the state matrix.
    #[default]
    SpanRatio,
    /// `v / mu_b`, the legacy factor.
    MassRatio,
}

impl FromStr for InputScaling {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "span_ratio" => Ok(InputScaling::SpanRatio),
            "mass_ratio" => Ok(InputScaling::MassRatio),
            other => Err(ConfigError::invalid("input_scaling", other)),
        }
    }
}

/// Builds the 4-state, 2-input lateral-directional model.
///
/// # Arguments
/// * `v` - Airspeed of the reference flight condition (m/s).
/// * `data` - Lateral-directional parameters and derivatives.
/// * `scaling` - Speed ratio used for the input matrix.
///
/// # Errors
/// * [`ModelError::SingularModel`] if a denominator is zero.
/// * [`ModelError::InvalidModel`] if an entry comes out non-finite.
pub fn build_asymmetric(
    v: f64,
    data: &AsymmetricData,
    scaling: InputScaling,
) -> Result<StateSpaceModel, ModelError> {
    let terms = AsymmetricTerms::new(v, data, scaling)?;

    let a = terms.state_matrix(data);
    let b = terms.input_matrix(data);
    ensure_finite(&a, "A")?;
    ensure_finite(&b, "B")?;

    debug!(
        "Built asymmetric model with v/b = {}, input scaling {:?} = {}",
        terms.v_b, scaling, terms.v_input
    );
    StateSpaceModel::new(a, b, ASYMMETRIC_STATES, ASYMMETRIC_INPUTS)
}

struct AsymmetricTerms {
    v_b: f64,
    v_input: f64,
    two_mu_b: f64,
    mu_b_k: f64,
}

impl AsymmetricTerms {
    fn new(v: f64, data: &AsymmetricData, scaling: InputScaling) -> Result<Self, ModelError> {
        let b = nonzero(data.b, "b")?;
        let mu_b = nonzero(data.mu_b, "mu_b")?;
        let mu_b_k = nonzero(
            4.0 * mu_b * (data.kx_2 * data.kz_2 - data.kxz.powi(2)),
            "4*mu_b*(kx_2*kz_2 - kxz^2)",
        )?;

        let v_b = v / b;
        let v_input = match scaling {
            InputScaling::SpanRatio => v_b,
            InputScaling::MassRatio => v / mu_b,
        };

        Ok(Self {
            v_b,
            v_input,
            two_mu_b: 2.0 * mu_b,
            mu_b_k,
        })
    }

    /// Roll and yaw responses to a moment pair, decoupled through the
    /// inertia cross term.
    fn moments(&self, data: &AsymmetricData, scale: f64, cl: f64, cn: f64) -> (f64, f64) {
        let roll = scale * (cl * data.kz_2 + cn * data.kxz) / self.mu_b_k;
        let yaw = scale * (cl * data.kxz + cn * data.kx_2) / self.mu_b_k;
        (roll, yaw)
    }

    fn state_matrix(&self, data: &AsymmetricData) -> DMatrix<f64> {
        let v_b = self.v_b;
        let (cy, cl, cn) = (&data.cy, &data.cl, &data.cn);

        let yb = v_b * cy.beta / self.two_mu_b;
        let yphi = v_b * data.c_l / self.two_mu_b;
        let yp = v_b * cy.p / self.two_mu_b;
        let yr = v_b * (cy.r - 4.0 * data.mu_b) / self.two_mu_b;

        let (lb, nb) = self.moments(data, v_b, cl.beta, cn.beta);
        let (lp, n_p) = self.moments(data, v_b, cl.p, cn.p);
        let (lr, nr) = self.moments(data, v_b, cl.r, cn.r);

        #[rustfmt::skip]
        let a = DMatrix::from_row_slice(4, 4, &[
            yb,  yphi, yp,        yr,
            0.0, 0.0,  2.0 * v_b, 0.0,
            lb,  0.0,  lp,        lr,
            nb,  0.0,  n_p,       nr,
        ]);
        a
    }

    fn input_matrix(&self, data: &AsymmetricData) -> DMatrix<f64> {
        let s = self.v_input;
        let (cy, cl, cn) = (&data.cy, &data.cl, &data.cn);

        let y_dr = s * cy.deltar / self.two_mu_b;
        let (l_da, n_da) = self.moments(data, s, cl.deltaa, cn.deltaa);
        let (l_dr, n_dr) = self.moments(data, s, cl.deltar, cn.deltar);

        #[rustfmt::skip]
        let b = DMatrix::from_row_slice(4, 2, &[
            0.0,  y_dr,
            0.0,  0.0,
            l_da, l_dr,
            n_da, n_dr,
        ]);
        b
    }
}
