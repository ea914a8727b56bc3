use std::{fs, path::Path};

use serde::Deserialize;

use crate::{control::structure::VehicleInputs, errors::ConfigError};

/// Contents of a flight configuration file.
///
/// ```toml
/// [vehicle]
/// total_mass = 200000.0
/// structural_mass = 10000.0
/// diameter = 1.5
/// fuel_flow_rate = 5000.0
/// exhaust_velocity = 600.0
/// ```
///
/// Keys left out of `[vehicle]` are treated as not supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlightConfig {
    #[serde(default)]
    pub vehicle: VehicleInputs,
}

impl FlightConfig {
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}
