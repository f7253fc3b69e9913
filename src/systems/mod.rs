pub mod linear;

pub use linear::{
    build_asymmetric, build_symmetric, InputScaling, ASYMMETRIC_INPUTS, ASYMMETRIC_STATES,
    SYMMETRIC_INPUTS, SYMMETRIC_STATES,
};
