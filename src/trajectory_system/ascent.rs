use std::iter::FusedIterator;

use log::{debug, trace, warn};

use super::aerodynamics::Aerodynamics;
use crate::constants::TIME_STEP;
use crate::control::{environment::PhysicalConstants, propulsion::PropulsionSystem};
use crate::errors::SimulationError;
use crate::telemetry_system::recorder::TrajectoryRecorder;

/// Snapshot of the powered vertical climb.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AscentState {
    pub time: f64,     // s since ignition
    pub velocity: f64, // m/s, vertical
    pub altitude: f64, // m
}

/// Powered vertical flight from ignition until the sonic threshold.
#[derive(Debug, Clone, Copy)]
pub struct AscentIntegrator {
    pub propulsion: PropulsionSystem,
    pub aerodynamics: Aerodynamics,
    pub gravity: f64,
    pub speed_of_sound: f64,
}

impl AscentIntegrator {
    pub fn new(
        propulsion: PropulsionSystem,
        aerodynamics: Aerodynamics,
        constants: &PhysicalConstants,
    ) -> Self {
        AscentIntegrator {
            propulsion,
            aerodynamics,
            gravity: constants.gravity,
            speed_of_sound: constants.speed_of_sound,
        }
    }

    /// Net vertical acceleration: thrust minus drag over the current mass, minus gravity.
    pub fn acceleration(&self, time: f64, velocity: f64) -> f64 {
        (self.propulsion.get_thrust() - self.aerodynamics.calculate_drag(velocity))
            / self.propulsion.mass(time)
            - self.gravity
    }

    pub fn is_sonic(&self, state: &AscentState) -> bool {
        state.velocity >= self.speed_of_sound
    }

    /// Advances one fixed step with forward Euler.
    ///
    /// The fuel check runs against the new time before anything is integrated.
    /// Velocity uses the acceleration at the start of the step; altitude is
    /// recomputed from the acceleration at the end of the step as `a * t² / 2`.
    pub fn step(&self, state: &AscentState) -> Result<AscentState, SimulationError> {
        let time = state.time + TIME_STEP;
        if self.propulsion.is_out_of_fuel(time) {
            return Err(SimulationError::InsufficientFuel {
                elapsed_time: time,
                velocity: state.velocity,
            });
        }

        let velocity =
            state.velocity + TIME_STEP * self.acceleration(time - TIME_STEP, state.velocity);
        let altitude = self.acceleration(time, velocity) * time.powi(2) / 2.0;

        Ok(AscentState {
            time,
            velocity,
            altitude,
        })
    }

    /// Lazy sequence of states starting from rest on the pad. Every call starts over.
    pub fn steps(&self) -> AscentSteps {
        AscentSteps {
            integrator: *self,
            state: AscentState::default(),
            finished: false,
        }
    }

    /// Runs the climb to the sonic threshold, recording every step.
    pub fn run(&self, recorder: &mut TrajectoryRecorder) -> Result<AscentState, SimulationError> {
        let mut burnout = AscentState::default();
        for step in self.steps() {
            let state = step?;
            recorder.record_ascent(state);
            burnout = state;
        }

        debug!(
            "Sonic threshold reached at t = {:.1} s, v = {:.2} m/s, h = {:.2} m",
            burnout.time, burnout.velocity, burnout.altitude
        );
        Ok(burnout)
    }
}

pub struct AscentSteps {
    integrator: AscentIntegrator,
    state: AscentState,
    finished: bool,
}

impl Iterator for AscentSteps {
    type Item = Result<AscentState, SimulationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.integrator.is_sonic(&self.state) {
            self.finished = true;
            return None;
        }

        match self.integrator.step(&self.state) {
            Ok(state) => {
                trace!(
                    "ascent t = {:.1} s v = {:.3} m/s h = {:.3} m",
                    state.time, state.velocity, state.altitude
                );
                self.state = state;
                Some(Ok(state))
            }
            Err(err) => {
                warn!("{}", err);
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for AscentSteps {}
