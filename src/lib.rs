pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use config::FlightConfig;
pub use constants::*;
pub use control::environment::PhysicalConstants;
pub use control::propulsion::PropulsionSystem;
pub use control::rocket::{simulate, FlightReport, Rocket, RocketState};
pub use control::structure::{VehicleInputs, VehicleParameters};
pub use errors::{ConfigError, InputError, Quantity, SimulationError};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::ascent::{AscentIntegrator, AscentState};
pub use trajectory_system::descent::{DescentIntegrator, DescentState};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::export::write_trajectory_csv;
pub use telemetry_system::recorder::{TrajectoryRecorder, TrajectorySample};
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
