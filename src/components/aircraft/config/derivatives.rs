use serde::{Deserialize, Serialize};

/// Longitudinal force derivatives along the body X axis.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XForceDerivatives {
    /// X-force coefficient due to nondimensional airspeed (û).
    pub u: f64,
    /// X-force coefficient due to angle of attack (α).
    #[serde(alias = "a")]
    pub alpha: f64,
    /// X-force coefficient in the trimmed condition.
    #[serde(alias = "o")]
    pub zero: f64,
    /// X-force coefficient due to elevator deflection.
    #[serde(alias = "de")]
    pub deltae: f64,
}

/// Longitudinal force derivatives along the body Z axis.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZForceDerivatives {
    /// Z-force coefficient due to nondimensional airspeed (û).
    pub u: f64,
    /// Z-force coefficient due to angle of attack (α).
    #[serde(alias = "a")]
    pub alpha: f64,
    /// Z-force coefficient due to angle of attack rate (α̇).
    #[serde(alias = "a_dot")]
    pub alpha_dot: f64,
    /// Z-force coefficient in the trimmed condition.
    #[serde(alias = "o")]
    pub zero: f64,
    /// Z-force coefficient due to pitch rate (q).
    pub q: f64,
    /// Z-force coefficient due to elevator deflection.
    #[serde(alias = "de")]
    pub deltae: f64,
}

/// Pitch moment derivatives.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchMomentDerivatives {
    /// Pitch moment coefficient due to nondimensional airspeed (û).
    pub u: f64,
    /// Pitch moment coefficient due to angle of attack (α).
    #[serde(alias = "a")]
    pub alpha: f64,
    /// Pitch moment coefficient due to angle of attack rate (α̇).
    #[serde(alias = "a_dot")]
    pub alpha_dot: f64,
    /// Pitch moment coefficient in the trimmed condition.
    #[serde(alias = "o")]
    pub zero: f64,
    /// Pitch moment coefficient due to pitch rate (q).
    pub q: f64,
    /// Pitch moment coefficient due to elevator deflection.
    #[serde(alias = "de")]
    pub deltae: f64,
}

/// Side force derivatives.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideForceDerivatives {
    /// Side-force coefficient due to sideslip angle (β).
    #[serde(alias = "b")]
    pub beta: f64,
    /// Side-force coefficient due to roll rate (p).
    pub p: f64,
    /// Side-force coefficient due to yaw rate (r).
    pub r: f64,
    /// Side-force coefficient due to rudder deflection.
    #[serde(alias = "dr")]
    pub deltar: f64,
}

/// Roll moment derivatives.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollMomentDerivatives {
    /// Roll moment coefficient due to sideslip angle (β).
    #[serde(alias = "b")]
    pub beta: f64,
    /// Roll moment coefficient due to roll rate (p).
    pub p: f64,
    /// Roll moment coefficient due to yaw rate (r).
    pub r: f64,
    /// Roll moment coefficient due to aileron deflection.
    #[serde(alias = "da")]
    pub deltaa: f64,
    /// Roll moment coefficient due to rudder deflection.
    #[serde(alias = "dr")]
    pub deltar: f64,
}

/// Yaw moment derivatives.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YawMomentDerivatives {
    /// Yaw moment coefficient due to sideslip angle (β).
    #[serde(alias = "b")]
    pub beta: f64,
    /// Yaw moment coefficient due to roll rate (p).
    pub p: f64,
    /// Yaw moment coefficient due to yaw rate (r).
    pub r: f64,
    /// Yaw moment coefficient due to aileron deflection.
    #[serde(alias = "da")]
    pub deltaa: f64,
    /// Yaw moment coefficient due to rudder deflection.
    #[serde(alias = "dr")]
    pub deltar: f64,
}

/// Parameters of the longitudinal (symmetric) motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymmetricData {
    /// Mean aerodynamic chord (m).
    pub c_bar: f64,
    /// Relative mass parameter for the longitudinal axis.
    pub mu_c: f64,
    /// Nondimensional radius of gyration about the Y axis, squared.
    pub ky_2: f64,
    pub cx: XForceDerivatives,
    pub cz: ZForceDerivatives,
    pub cm: PitchMomentDerivatives,
}

/// Parameters of the lateral-directional (asymmetric) motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsymmetricData {
    /// Wing span (m).
    pub b: f64,
    /// Relative mass parameter for the lateral axes.
    pub mu_b: f64,
    /// Lift coefficient in the trimmed condition.
    pub c_l: f64,
    /// Nondimensional radius of gyration about the X axis, squared.
    pub kx_2: f64,
    /// Nondimensional radius of gyration about the Z axis, squared.
    pub kz_2: f64,
    /// Nondimensional product of inertia about X and Z.
    pub kxz: f64,
    pub cy: SideForceDerivatives,
    pub cl: RollMomentDerivatives,
    pub cn: YawMomentDerivatives,
}

// Cessna Ce500 Citation, clean cruise at 59.9 m/s.
impl SymmetricData {
    pub fn citation() -> Self {
        Self {
            c_bar: 2.022,
            mu_c: 102.7,
            ky_2: 0.980,
            cx: XForceDerivatives::citation(),
            cz: ZForceDerivatives::citation(),
            cm: PitchMomentDerivatives::citation(),
        }
    }
}

impl AsymmetricData {
    pub fn citation() -> Self {
        Self {
            b: 13.36,
            mu_b: 15.5,
            c_l: 1.1360,
            kx_2: 0.012,
            kz_2: 0.037,
            kxz: 0.002,
            cy: SideForceDerivatives::citation(),
            cl: RollMomentDerivatives::citation(),
            cn: YawMomentDerivatives::citation(),
        }
    }
}

impl XForceDerivatives {
    pub fn citation() -> Self {
        Self {
            u: -0.2199,
            alpha: 0.4653,
            zero: 0.0,
            deltae: 0.0,
        }
    }
}

impl ZForceDerivatives {
    pub fn citation() -> Self {
        Self {
            u: -2.2720,
            alpha: -5.1600,
            alpha_dot: -1.4300,
            zero: -1.1360,
            q: -3.8600,
            deltae: -0.6238,
        }
    }
}

impl PitchMomentDerivatives {
    pub fn citation() -> Self {
        Self {
            u: 0.0,
            alpha: -0.4300,
            alpha_dot: -3.7000,
            zero: 0.0,
            q: -7.0400,
            deltae: -1.5530,
        }
    }
}

impl SideForceDerivatives {
    pub fn citation() -> Self {
        Self {
            beta: -0.9896,
            p: -0.0870,
            r: 0.4300,
            deltar: 0.3037,
        }
    }
}

impl RollMomentDerivatives {
    pub fn citation() -> Self {
        Self {
            beta: -0.0772,
            p: -0.3444,
            r: 0.2800,
            deltaa: -0.2349,
            deltar: 0.0286,
        }
    }
}

impl YawMomentDerivatives {
    pub fn citation() -> Self {
        Self {
            beta: 0.1638,
            p: -0.0108,
            r: -0.1930,
            deltaa: 0.0286,
            deltar: -0.1261,
        }
    }
}
