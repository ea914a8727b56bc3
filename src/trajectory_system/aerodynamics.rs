use crate::control::environment::PhysicalConstants;

/// Quadratic drag on a body of fixed frontal area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub cross_sectional_area: f64,
    pub air_density: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, cross_sectional_area: f64, air_density: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            cross_sectional_area,
            air_density,
        }
    }

    pub fn from_constants(constants: &PhysicalConstants, cross_sectional_area: f64) -> Self {
        Aerodynamics::new(
            constants.drag_coefficient,
            cross_sectional_area,
            constants.air_density,
        )
    }

    /// Drag magnitude `0.5 * c * S * rho * v²`. The factors are multiplied in
    /// this order so results stay bit-identical across both flight phases.
    pub fn calculate_drag(&self, speed: f64) -> f64 {
        0.5 * self.drag_coefficient * self.cross_sectional_area * self.air_density * speed.powi(2)
    }
}
