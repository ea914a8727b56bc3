use std::fmt;

use thiserror::Error;

/// Physical input named by a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    TotalMass,
    FuelMass,
    StructuralMass,
    Diameter,
    CrossSectionalArea,
    FuelFlowRate,
    ExhaustVelocity,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::TotalMass => "total mass",
            Quantity::FuelMass => "fuel mass",
            Quantity::StructuralMass => "structural mass",
            Quantity::Diameter => "diameter",
            Quantity::CrossSectionalArea => "cross-sectional area",
            Quantity::FuelFlowRate => "fuel flow rate",
            Quantity::ExhaustVelocity => "exhaust velocity",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Insufficient mass data")]
    InsufficientMassData,

    #[error("Insufficient geometry data")]
    InsufficientGeometryData,

    #[error("Missing {0}")]
    MissingQuantity(Quantity),

    #[error("Invalid {quantity}: {value}")]
    InvalidQuantity { quantity: Quantity, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Insufficient fuel: exhausted at t = {elapsed_time:.1} s, v = {velocity:.1} m/s")]
    InsufficientFuel { elapsed_time: f64, velocity: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
