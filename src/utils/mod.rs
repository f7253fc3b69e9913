pub mod errors;
pub mod rng;

pub use errors::*;
pub use rng::*;
