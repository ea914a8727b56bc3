// Physical Constants
pub const GRAVITY: f64 = 9.807; // m/s²
pub const AIR_DENSITY: f64 = 1.2754; // kg/m³
pub const DRAG_COEFFICIENT: f64 = 0.045; // hemispherical nose
pub const SPEED_OF_SOUND: f64 = 335.0; // m/s

// Geometry
// Area is derived as diameter * π with this approximation of π.
pub const REFERENCE_PI: f64 = 3.1415;

// Propulsion Limits
pub const MAX_EXHAUST_VELOCITY: f64 = 6666.0; // m/s

// Simulation Parameters
pub const TIME_STEP: f64 = 0.1; // s

// Relative tolerance when all three masses are given
pub const MASS_TOLERANCE: f64 = 1e-9;
