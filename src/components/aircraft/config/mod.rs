mod aircraft;
mod derivatives;
mod loader;

pub use aircraft::{AircraftData, AircraftSource, AircraftType};
pub use derivatives::{
    AsymmetricData, PitchMomentDerivatives, RollMomentDerivatives, SideForceDerivatives,
    SymmetricData, XForceDerivatives, YawMomentDerivatives, ZForceDerivatives,
};
