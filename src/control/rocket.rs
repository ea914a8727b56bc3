use log::{debug, info};

use super::{
    environment::PhysicalConstants,
    propulsion::PropulsionSystem,
    structure::{VehicleInputs, VehicleParameters},
};
use crate::{
    errors::{InputError, SimulationError},
    telemetry_system::recorder::{TrajectoryRecorder, TrajectorySample},
    trajectory_system::{
        aerodynamics::Aerodynamics,
        ascent::{AscentIntegrator, AscentState},
        descent::DescentIntegrator,
    },
};

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum RocketState {
    Idle,
    Ascending,
    Coasting,
    Landed,
    FuelExhausted,
}

/// Results of one complete flight.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightReport {
    pub burnout_time: f64,     // s
    pub burnout_velocity: f64, // m/s
    pub burnout_altitude: f64, // m
    pub burnout_mass: f64,     // kg
    pub flight_duration: f64,  // s, climb plus descent
    pub range: f64,            // m
    pub trajectory: Vec<TrajectorySample>,
    pub ascent_profile: Vec<AscentState>,
}

impl FlightReport {
    pub fn burnout_time_rounded(&self) -> f64 {
        self.burnout_time.round()
    }
}

pub struct Rocket {
    pub parameters: VehicleParameters,
    pub constants: PhysicalConstants,
    pub propulsion: PropulsionSystem,
    pub aerodynamics: Aerodynamics,
    pub state: RocketState,
}

impl Rocket {
    pub fn new(parameters: VehicleParameters, constants: PhysicalConstants) -> Self {
        Rocket {
            propulsion: PropulsionSystem::from_parameters(&parameters),
            aerodynamics: Aerodynamics::from_constants(&constants, parameters.cross_sectional_area),
            parameters,
            constants,
            state: RocketState::Idle,
        }
    }

    pub fn from_inputs(
        inputs: &VehicleInputs,
        constants: PhysicalConstants,
    ) -> Result<Self, InputError> {
        let parameters = VehicleParameters::resolve(inputs)?;
        Ok(Rocket::new(parameters, constants))
    }

    /// Flies the climb and the ballistic descent back to the ground.
    ///
    /// Fuel exhaustion during the climb aborts the flight and no report is
    /// produced.
    pub fn launch(&mut self) -> Result<FlightReport, SimulationError> {
        let mut recorder = TrajectoryRecorder::new();

        self.state = RocketState::Ascending;
        info!(
            "Rocket launched: thrust {:.0} N, fuel for {:.1} s",
            self.propulsion.get_thrust(),
            self.parameters.burn_duration()
        );

        let ascent = AscentIntegrator::new(self.propulsion, self.aerodynamics, &self.constants);
        let burnout = match ascent.run(&mut recorder) {
            Ok(burnout) => burnout,
            Err(err) => {
                self.state = RocketState::FuelExhausted;
                return Err(err);
            }
        };

        let burnout_mass = self.propulsion.mass(burnout.time);
        self.state = RocketState::Coasting;
        debug!("Coasting with frozen mass {:.1} kg", burnout_mass);

        let descent =
            DescentIntegrator::new(self.aerodynamics, &self.constants, burnout_mass, &burnout);
        let landing = descent.run(&mut recorder);
        self.state = RocketState::Landed;

        let (trajectory, ascent_profile) = recorder.into_parts();
        let report = FlightReport {
            burnout_time: burnout.time,
            burnout_velocity: burnout.velocity,
            burnout_altitude: burnout.altitude,
            burnout_mass,
            flight_duration: landing.time + burnout.time,
            range: landing.position.x,
            trajectory,
            ascent_profile,
        };
        info!(
            "Flight complete: {:.1} s, range {:.1} m, {} trajectory samples",
            report.flight_duration,
            report.range,
            report.trajectory.len()
        );

        Ok(report)
    }
}

/// Resolves `inputs` and flies the vehicle once.
pub fn simulate(
    inputs: &VehicleInputs,
    constants: PhysicalConstants,
) -> Result<FlightReport, SimulationError> {
    let mut rocket = Rocket::from_inputs(inputs, constants)?;
    rocket.launch()
}
