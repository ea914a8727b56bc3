use crate::constants::{AIR_DENSITY, DRAG_COEFFICIENT, GRAVITY, SPEED_OF_SOUND};

/// Fixed physical context of a run. Passed explicitly to every stage of the
/// simulation and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    pub gravity: f64,
    pub air_density: f64,
    pub drag_coefficient: f64,
    pub speed_of_sound: f64,
}

impl PhysicalConstants {
    pub fn new(gravity: f64, air_density: f64, drag_coefficient: f64, speed_of_sound: f64) -> Self {
        PhysicalConstants {
            gravity,
            air_density,
            drag_coefficient,
            speed_of_sound,
        }
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants::new(GRAVITY, AIR_DENSITY, DRAG_COEFFICIENT, SPEED_OF_SOUND)
    }
}
