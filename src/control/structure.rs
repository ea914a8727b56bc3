use log::{debug, info};
use serde::Deserialize;

use crate::constants::{MASS_TOLERANCE, MAX_EXHAUST_VELOCITY, REFERENCE_PI};
use crate::errors::{InputError, Quantity};

/// Vehicle description as supplied by the user. `None` means "not supplied".
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleInputs {
    pub total_mass: Option<f64>,           // kg
    pub fuel_mass: Option<f64>,            // kg
    pub structural_mass: Option<f64>,      // kg
    pub diameter: Option<f64>,             // m
    pub cross_sectional_area: Option<f64>, // m²
    pub fuel_flow_rate: Option<f64>,       // kg/s
    pub exhaust_velocity: Option<f64>,     // m/s
}

impl VehicleInputs {
    /// The reference vehicle: fuel mass and area are left for the resolver.
    pub fn reference() -> Self {
        VehicleInputs {
            total_mass: Some(200_000.0),
            fuel_mass: None,
            structural_mass: Some(10_000.0),
            diameter: Some(1.5),
            cross_sectional_area: None,
            fuel_flow_rate: Some(5_000.0),
            exhaust_velocity: Some(600.0),
        }
    }
}

/// Fully resolved vehicle. `total_mass == fuel_mass + structural_mass` holds
/// for every value produced by [`VehicleParameters::resolve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleParameters {
    pub total_mass: f64,
    pub fuel_mass: f64,
    pub structural_mass: f64,
    pub diameter: Option<f64>,
    pub cross_sectional_area: f64,
    pub fuel_flow_rate: f64,
    pub exhaust_velocity: f64,
}

impl VehicleParameters {
    /// Fills in the missing mass and geometry quantities and validates the rest.
    ///
    /// Exactly one of the three masses may be absent. A supplied diameter always
    /// wins over a supplied area.
    pub fn resolve(inputs: &VehicleInputs) -> Result<Self, InputError> {
        let missing_masses = [inputs.total_mass, inputs.fuel_mass, inputs.structural_mass]
            .iter()
            .filter(|mass| mass.is_none())
            .count();
        if missing_masses > 1 {
            return Err(InputError::InsufficientMassData);
        }
        if inputs.diameter.is_none() && inputs.cross_sectional_area.is_none() {
            return Err(InputError::InsufficientGeometryData);
        }

        let fuel_flow_rate = inputs
            .fuel_flow_rate
            .ok_or(InputError::MissingQuantity(Quantity::FuelFlowRate))?;
        let exhaust_velocity = inputs
            .exhaust_velocity
            .ok_or(InputError::MissingQuantity(Quantity::ExhaustVelocity))?;

        let supplied = [
            (Quantity::TotalMass, inputs.total_mass),
            (Quantity::FuelMass, inputs.fuel_mass),
            (Quantity::StructuralMass, inputs.structural_mass),
            (Quantity::Diameter, inputs.diameter),
            (Quantity::CrossSectionalArea, inputs.cross_sectional_area),
            (Quantity::FuelFlowRate, Some(fuel_flow_rate)),
        ];
        for (quantity, value) in supplied {
            if let Some(value) = value {
                ensure_positive(quantity, value)?;
            }
        }
        // NaN fails both comparisons
        if !(exhaust_velocity > 0.0 && exhaust_velocity <= MAX_EXHAUST_VELOCITY) {
            return Err(InputError::InvalidQuantity {
                quantity: Quantity::ExhaustVelocity,
                value: exhaust_velocity,
            });
        }

        let (total_mass, fuel_mass, structural_mass) =
            match (inputs.total_mass, inputs.fuel_mass, inputs.structural_mass) {
                (None, Some(fuel), Some(structural)) => (fuel + structural, fuel, structural),
                (Some(total), None, Some(structural)) => (total, total - structural, structural),
                (Some(total), Some(fuel), None) => (total, fuel, total - fuel),
                (Some(total), Some(fuel), Some(structural)) => {
                    if (total - (fuel + structural)).abs() > MASS_TOLERANCE * total {
                        debug!(
                            "Mass data inconsistent: {} != {} + {}",
                            total, fuel, structural
                        );
                        return Err(InputError::InsufficientMassData);
                    }
                    (total, fuel, structural)
                }
                _ => return Err(InputError::InsufficientMassData),
            };
        // The mass model divides by the dry mass once the fuel is gone
        ensure_positive(Quantity::StructuralMass, structural_mass)?;

        let cross_sectional_area = match (inputs.diameter, inputs.cross_sectional_area) {
            (Some(diameter), _) => diameter * REFERENCE_PI,
            (None, Some(area)) => area,
            (None, None) => return Err(InputError::InsufficientGeometryData),
        };

        let parameters = VehicleParameters {
            total_mass,
            fuel_mass,
            structural_mass,
            diameter: inputs.diameter,
            cross_sectional_area,
            fuel_flow_rate,
            exhaust_velocity,
        };
        info!(
            "Resolved vehicle: total {:.1} kg, fuel {:.1} kg, structural {:.1} kg, area {:.4} m²",
            total_mass, fuel_mass, structural_mass, cross_sectional_area
        );

        Ok(parameters)
    }

    /// Time until the fuel is gone at the nominal flow rate.
    pub fn burn_duration(&self) -> f64 {
        self.fuel_mass / self.fuel_flow_rate
    }
}

fn ensure_positive(quantity: Quantity, value: f64) -> Result<(), InputError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(InputError::InvalidQuantity { quantity, value })
    }
}
