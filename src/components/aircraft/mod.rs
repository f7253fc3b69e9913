mod aircraft;
pub mod config;

pub use aircraft::{Aircraft, Configuration, SHORT_PERIOD_STATES};
pub use config::{
    AircraftData, AircraftSource, AircraftType, AsymmetricData, PitchMomentDerivatives,
    RollMomentDerivatives, SideForceDerivatives, SymmetricData, XForceDerivatives,
    YawMomentDerivatives, ZForceDerivatives,
};
