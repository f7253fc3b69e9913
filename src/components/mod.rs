pub mod aircraft;
pub mod state_space;
pub mod tasks;

pub use aircraft::{
    Aircraft, AircraftData, AircraftSource, AircraftType, AsymmetricData, Configuration,
    PitchMomentDerivatives, RollMomentDerivatives, SideForceDerivatives, SymmetricData,
    XForceDerivatives, YawMomentDerivatives, ZForceDerivatives, SHORT_PERIOD_STATES,
};
pub use state_space::{StateSpaceMatrices, StateSpaceModel};
pub use tasks::{score, RewardKind, Task, TrajectoryWindow};
