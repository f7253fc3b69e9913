mod linear_aircraft;

pub use linear_aircraft::LinearAircraftPlugin;
