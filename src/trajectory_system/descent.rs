use std::iter::FusedIterator;

use log::{debug, trace};

use super::aerodynamics::Aerodynamics;
use super::ascent::AscentState;
use crate::constants::TIME_STEP;
use crate::control::environment::PhysicalConstants;
use crate::telemetry_system::recorder::TrajectoryRecorder;
use crate::utils::vector2d::Vector2D;

/// Snapshot of the unpowered flight after burn-out.
///
/// `position.x` is the horizontal distance and `position.y` the altitude.
/// `velocity.y` is the vertical term of the drag balance, integrated from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DescentState {
    pub time: f64, // s since burn-out
    pub velocity: Vector2D,
    pub position: Vector2D,
}

/// Ballistic flight under gravity and drag with the mass frozen at burn-out.
#[derive(Debug, Clone, Copy)]
pub struct DescentIntegrator {
    pub aerodynamics: Aerodynamics,
    pub gravity: f64,
    pub burnout_mass: f64,
    pub exit_velocity: f64,
    pub exit_altitude: f64,
}

impl DescentIntegrator {
    /// The sonic exit speed of the climb becomes the initial horizontal speed.
    pub fn new(
        aerodynamics: Aerodynamics,
        constants: &PhysicalConstants,
        burnout_mass: f64,
        burnout: &AscentState,
    ) -> Self {
        DescentIntegrator {
            aerodynamics,
            gravity: constants.gravity,
            burnout_mass,
            exit_velocity: burnout.velocity,
            exit_altitude: burnout.altitude,
        }
    }

    pub fn vertical_acceleration(&self, velocity: f64) -> f64 {
        (self.gravity - self.aerodynamics.calculate_drag(velocity)) / self.burnout_mass
    }

    pub fn horizontal_acceleration(&self, velocity: f64) -> f64 {
        -self.aerodynamics.calculate_drag(velocity) / self.burnout_mass
    }

    pub fn initial_state(&self) -> DescentState {
        DescentState {
            time: 0.0,
            velocity: Vector2D::new(self.exit_velocity, 0.0),
            position: Vector2D::new(0.0, self.exit_altitude),
        }
    }

    /// Also true for a NaN altitude, which would otherwise never reach the ground.
    pub fn has_landed(&self, state: &DescentState) -> bool {
        !(state.position.y > 0.0)
    }

    /// Advances one fixed step.
    ///
    /// Both velocity components are integrated with forward Euler. Position is
    /// recomputed in closed form from the elapsed time and the acceleration
    /// sampled at the end of the step:
    /// `y = h0 - (g - a_y) * t² / 2` and `x = v0 * t + a_x * t² / 2`.
    pub fn step(&self, state: &DescentState) -> DescentState {
        let time = state.time + TIME_STEP;

        let vertical_velocity =
            state.velocity.y + TIME_STEP * self.vertical_acceleration(state.velocity.y);
        let altitude = self.exit_altitude
            - (self.gravity - self.vertical_acceleration(vertical_velocity)) * time.powi(2) / 2.0;

        let horizontal_velocity =
            state.velocity.x + TIME_STEP * self.horizontal_acceleration(state.velocity.x);
        let distance = self.exit_velocity * time
            + self.horizontal_acceleration(horizontal_velocity) * time.powi(2) / 2.0;

        DescentState {
            time,
            velocity: Vector2D::new(horizontal_velocity, vertical_velocity),
            position: Vector2D::new(distance, altitude),
        }
    }

    /// Lazy sequence of states from burn-out to the first state at or below
    /// ground level. Every call starts over.
    pub fn steps(&self) -> DescentSteps {
        DescentSteps {
            integrator: *self,
            state: self.initial_state(),
        }
    }

    /// Flies to the ground. Seeds the trajectory with the pad and the burn-out
    /// point, then records one sample per step.
    pub fn run(&self, recorder: &mut TrajectoryRecorder) -> DescentState {
        recorder.record(Vector2D::new(0.0, 0.0));
        recorder.record(Vector2D::new(0.0, self.exit_altitude));

        let mut landing = self.initial_state();
        for state in self.steps() {
            recorder.record(state.position);
            landing = state;
        }

        debug!(
            "Landed after {:.1} s of descent at {}",
            landing.time, landing.position
        );
        landing
    }
}

pub struct DescentSteps {
    integrator: DescentIntegrator,
    state: DescentState,
}

impl Iterator for DescentSteps {
    type Item = DescentState;

    fn next(&mut self) -> Option<Self::Item> {
        if self.integrator.has_landed(&self.state) {
            return None;
        }

        self.state = self.integrator.step(&self.state);
        trace!(
            "descent t = {:.1} s {:.3}",
            self.state.time,
            self.state.position
        );
        Some(self.state)
    }
}

impl FusedIterator for DescentSteps {}
