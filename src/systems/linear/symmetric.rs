use bevy::prelude::*;
use nalgebra::DMatrix;

use super::{ensure_finite, nonzero};
use crate::components::{StateSpaceModel, SymmetricData};
use crate::utils::ModelError;

/// Nondimensional airspeed, angle of attack, pitch angle and pitch rate.
pub const SYMMETRIC_STATES: [&str; 4] = ["u_hat", "alpha", "theta", "q"];
/// Elevator deflection.
pub const SYMMETRIC_INPUTS: [&str; 1] = ["de"];

/// Builds the 4-state, 1-input longitudinal model.
///
/// # Arguments
/// * `v` - Airspeed of the reference flight condition (m/s).
/// * `data` - Longitudinal parameters and derivatives.
///
/// # Errors
/// * [`ModelError::SingularModel`] if a denominator is zero.
/// * [`ModelError::InvalidModel`] if an entry comes out non-finite.
pub fn build_symmetric(v: f64, data: &SymmetricData) -> Result<StateSpaceModel, ModelError> {
    let terms = SymmetricTerms::new(v, data)?;

    let a = terms.state_matrix(data);
    let b = terms.input_matrix(data);
    ensure_finite(&a, "A")?;
    ensure_finite(&b, "B")?;

    debug!("Built symmetric model with v/c_bar = {}", terms.v_c);
    StateSpaceModel::new(a, b, SYMMETRIC_STATES, SYMMETRIC_INPUTS)
}

/// Scalars shared between the rows of A and B.
struct SymmetricTerms {
    v_c: f64,
    two_mu_c: f64,
    mu_c_cz_a: f64,
    cm_a_mu_c: f64,
    mu_c_ky_2: f64,
}

impl SymmetricTerms {
    fn new(v: f64, data: &SymmetricData) -> Result<Self, ModelError> {
        let c_bar = nonzero(data.c_bar, "c_bar")?;
        let two_mu_c = nonzero(2.0 * data.mu_c, "2*mu_c")?;
        let mu_c_cz_a = nonzero(2.0 * data.mu_c - data.cz.alpha_dot, "2*mu_c - cz.alpha_dot")?;
        let mu_c_ky_2 = nonzero(2.0 * data.mu_c * data.ky_2, "2*mu_c*ky_2")?;

        Ok(Self {
            v_c: v / c_bar,
            two_mu_c,
            mu_c_cz_a,
            cm_a_mu_c: data.cm.alpha_dot / mu_c_cz_a,
            mu_c_ky_2,
        })
    }

    fn state_matrix(&self, data: &SymmetricData) -> DMatrix<f64> {
        let Self {
            v_c,
            two_mu_c,
            mu_c_cz_a,
            cm_a_mu_c,
            mu_c_ky_2,
        } = *self;
        let (cx, cz, cm) = (&data.cx, &data.cz, &data.cm);
        let q_lift = 2.0 * data.mu_c + cz.q;

        let xu = v_c * cx.u / two_mu_c;
        let xa = v_c * cx.alpha / two_mu_c;
        let xt = v_c * cz.zero / two_mu_c;

        let zu = v_c * cz.u / mu_c_cz_a;
        let za = v_c * cz.alpha / mu_c_cz_a;
        let zt = v_c * cx.zero / mu_c_cz_a;
        let zq = v_c * q_lift / mu_c_cz_a;

        let mu = v_c * (cm.u + cz.u * cm_a_mu_c) / mu_c_ky_2;
        let ma = v_c * (cm.alpha + cz.alpha * cm_a_mu_c) / mu_c_cz_a;
        let mt = -v_c * (cx.zero * cm_a_mu_c) / mu_c_ky_2;
        let mq = v_c * (cm.q + cm.alpha_dot * q_lift / mu_c_cz_a) / mu_c_cz_a;

        #[rustfmt::skip]
        let a = DMatrix::from_row_slice(4, 4, &[
            xu,  xa,  xt,  0.0,
            zu,  za,  zt,  zq,
            0.0, 0.0, 0.0, v_c,
            mu,  ma,  mt,  mq,
        ]);
        a
    }

    fn input_matrix(&self, data: &SymmetricData) -> DMatrix<f64> {
        let (cx, cz, cm) = (&data.cx, &data.cz, &data.cm);

        let x_de = self.v_c * cx.deltae / self.two_mu_c;
        let z_de = self.v_c * cz.deltae / self.mu_c_cz_a;
        let m_de =
            self.v_c * (cm.deltae + cz.deltae * cm.alpha_dot / self.mu_c_cz_a) / self.mu_c_ky_2;

        DMatrix::from_row_slice(4, 1, &[x_de, z_de, 0.0, m_de])
    }
}
