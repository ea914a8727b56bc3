use super::structure::VehicleParameters;

/// Mass and thrust of the single burning stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropulsionSystem {
    pub total_mass: f64,
    pub structural_mass: f64,
    pub fuel_flow_rate: f64,
    pub exhaust_velocity: f64,
}

impl PropulsionSystem {
    pub fn new(
        total_mass: f64,
        structural_mass: f64,
        fuel_flow_rate: f64,
        exhaust_velocity: f64,
    ) -> Self {
        PropulsionSystem {
            total_mass,
            structural_mass,
            fuel_flow_rate,
            exhaust_velocity,
        }
    }

    pub fn from_parameters(params: &VehicleParameters) -> Self {
        PropulsionSystem::new(
            params.total_mass,
            params.structural_mass,
            params.fuel_flow_rate,
            params.exhaust_velocity,
        )
    }

    /// Mass after `burn_time` seconds of burning, ignoring the dry-mass floor.
    pub fn projected_mass(&self, burn_time: f64) -> f64 {
        self.total_mass - self.fuel_flow_rate * burn_time
    }

    /// Vehicle mass after `burn_time` seconds, clamped at the structural mass.
    pub fn mass(&self, burn_time: f64) -> f64 {
        let projected = self.projected_mass(burn_time);
        if projected > self.structural_mass {
            projected
        } else {
            self.structural_mass
        }
    }

    /// True once burning for `burn_time` would need more fuel than was loaded.
    pub fn is_out_of_fuel(&self, burn_time: f64) -> bool {
        self.projected_mass(burn_time) < self.structural_mass
    }

    pub fn get_thrust(&self) -> f64 {
        self.fuel_flow_rate * self.exhaust_velocity
    }
}
