use approx::assert_relative_eq;
use rand::Rng;
use sonic_flight::{
    errors::{InputError, Quantity, SimulationError},
    simulate, write_trajectory_csv, FlightConfig, FlightReport, PhysicalConstants, Rocket,
    RocketState, Telemetry, Vector2D, VehicleInputs,
};

// Helper function to fly the reference vehicle
fn fly_reference() -> FlightReport {
    simulate(&VehicleInputs::reference(), PhysicalConstants::default())
        .expect("Reference flight should succeed")
}

#[test]
fn test_reference_flight_end_to_end() {
    println!("INTEGRATION TEST: Reference flight");

    let report = fly_reference();

    println!(
        "Burn-out at t={:.1}s, h={:.1}m | Flight {:.1}s | Range {:.1}m",
        report.burnout_time, report.burnout_altitude, report.flight_duration, report.range
    );

    assert!(
        report.burnout_time > 0.0 && report.burnout_time < 38.0,
        "Sonic speed must be reached before the 38 s of fuel run out, got {:.1}s",
        report.burnout_time
    );
    assert_eq!(report.burnout_time_rounded(), 25.0);
    assert_relative_eq!(report.burnout_time, 24.8, epsilon = 1e-9);
    assert_relative_eq!(report.burnout_velocity, 335.2939157053601, max_relative = 1e-9);
    assert_relative_eq!(report.burnout_altitude, 9061.585520938124, max_relative = 1e-9);
    assert_relative_eq!(report.burnout_mass, 76_000.0, max_relative = 1e-9);
    assert_relative_eq!(report.flight_duration, 67.8, epsilon = 1e-9);
    assert_relative_eq!(report.range, 14241.84611432965, max_relative = 1e-9);

    assert_eq!(report.trajectory.len(), 432);
    assert_eq!(report.ascent_profile.len(), 248);
}

#[test]
fn test_trajectory_shape() {
    println!("INTEGRATION TEST: Trajectory shape");

    let report = fly_reference();
    let trajectory = &report.trajectory;

    assert_eq!(trajectory[0], Vector2D::new(0.0, 0.0), "Path starts on the pad");
    assert_eq!(
        trajectory[1],
        Vector2D::new(0.0, report.burnout_altitude),
        "Second point is the burn-out point"
    );

    let last = trajectory.last().unwrap();
    assert_eq!(last.x, report.range, "Path ends at the reported range");
    assert!(last.y <= 0.0, "Path ends at or below ground, got {:.3}m", last.y);
    assert_relative_eq!(last.y, -4.8666821192437055, max_relative = 1e-6);

    for pair in trajectory[1..].windows(2) {
        assert!(
            pair[1].y < pair[0].y,
            "Altitude must fall during descent: {} then {}",
            pair[0],
            pair[1]
        );
        assert!(
            pair[1].x >= pair[0].x,
            "Horizontal distance must not decrease: {} then {}",
            pair[0],
            pair[1]
        );
    }
    assert!(trajectory[1..trajectory.len() - 1].iter().all(|s| s.y > 0.0));
}

#[test]
fn test_ascent_profile_is_monotonic() {
    println!("INTEGRATION TEST: Ascent profile");

    let report = fly_reference();

    for pair in report.ascent_profile.windows(2) {
        assert!(pair[1].time > pair[0].time);
        assert!(
            pair[1].velocity > pair[0].velocity,
            "Velocity must grow while thrust dominates"
        );
        assert!(pair[1].altitude >= pair[0].altitude);
    }

    let burnout = report.ascent_profile.last().unwrap();
    assert_eq!(burnout.time, report.burnout_time);
    assert_eq!(burnout.velocity, report.burnout_velocity);
    assert_eq!(burnout.altitude, report.burnout_altitude);
}

#[test]
fn test_fuel_exhaustion_aborts_flight() {
    println!("INTEGRATION TEST: Fuel exhaustion");

    // 10 t of fuel burns for 2 s, far short of the sonic threshold
    let inputs = VehicleInputs {
        structural_mass: Some(190_000.0),
        ..VehicleInputs::reference()
    };
    let mut rocket =
        Rocket::from_inputs(&inputs, PhysicalConstants::default()).expect("Inputs are valid");

    match rocket.launch() {
        Err(SimulationError::InsufficientFuel {
            elapsed_time,
            velocity,
        }) => {
            println!("Fuel exhausted at t={:.1}s, v={:.1}m/s", elapsed_time, velocity);
            assert_relative_eq!(elapsed_time, 2.1, epsilon = 1e-9);
            assert!(velocity < 335.0);
        }
        other => panic!("Expected fuel exhaustion, got {:?}", other),
    }
    assert_eq!(rocket.state, RocketState::FuelExhausted);
}

#[test]
fn test_structure_heavier_than_vehicle_runs_out_of_fuel() {
    let inputs = VehicleInputs {
        total_mass: Some(5_000.0),
        ..VehicleInputs::reference()
    };

    assert!(matches!(
        simulate(&inputs, PhysicalConstants::default()),
        Err(SimulationError::InsufficientFuel { .. })
    ));
}

#[test]
fn test_all_fuel_vehicle_is_rejected_before_flight() {
    // Equal total and fuel mass leaves no dry mass to divide by
    let inputs = VehicleInputs {
        total_mass: Some(1_000.0),
        fuel_mass: Some(1_000.0),
        structural_mass: None,
        ..VehicleInputs::reference()
    };

    assert_eq!(
        simulate(&inputs, PhysicalConstants::default()),
        Err(SimulationError::Input(InputError::InvalidQuantity {
            quantity: Quantity::StructuralMass,
            value: 0.0,
        }))
    );
}

#[test]
fn test_invalid_total_mass() {
    let inputs = VehicleInputs {
        total_mass: Some(-5.0),
        ..VehicleInputs::reference()
    };

    assert_eq!(
        simulate(&inputs, PhysicalConstants::default()),
        Err(SimulationError::Input(InputError::InvalidQuantity {
            quantity: Quantity::TotalMass,
            value: -5.0,
        }))
    );
}

#[test]
fn test_insufficient_mass_data() {
    let inputs = VehicleInputs {
        total_mass: None,
        fuel_mass: None,
        ..VehicleInputs::reference()
    };

    let err = simulate(&inputs, PhysicalConstants::default()).unwrap_err();
    assert_eq!(err, SimulationError::Input(InputError::InsufficientMassData));
    assert_eq!(err.to_string(), "Input error: Insufficient mass data");
}

#[test]
fn test_error_messages_name_the_cause() {
    let invalid = InputError::InvalidQuantity {
        quantity: Quantity::ExhaustVelocity,
        value: 7000.0,
    };
    assert_eq!(invalid.to_string(), "Invalid exhaust velocity: 7000");
    assert_eq!(
        InputError::InsufficientGeometryData.to_string(),
        "Insufficient geometry data"
    );

    let fuel = SimulationError::InsufficientFuel {
        elapsed_time: 2.1,
        velocity: 10.4,
    };
    assert!(fuel.to_string().starts_with("Insufficient fuel"));
}

#[test]
fn test_equivalent_inputs_fly_identically() {
    println!("INTEGRATION TEST: Equivalent mass and geometry inputs");

    let reference = fly_reference();

    // Same vehicle described by fuel and structure; area given alongside the diameter
    let inputs = VehicleInputs {
        total_mass: None,
        fuel_mass: Some(190_000.0),
        cross_sectional_area: Some(42.0),
        ..VehicleInputs::reference()
    };
    let report = simulate(&inputs, PhysicalConstants::default()).unwrap();

    assert_eq!(report, reference);
}

#[test]
fn test_random_vehicles_land_downrange() {
    println!("INTEGRATION TEST: Randomized vehicles");

    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let inputs = VehicleInputs {
            total_mass: Some(rng.gen_range(50_000.0..300_000.0)),
            fuel_mass: None,
            structural_mass: Some(rng.gen_range(1_000.0..5_000.0)),
            diameter: Some(rng.gen_range(0.5..2.0)),
            cross_sectional_area: None,
            fuel_flow_rate: Some(rng.gen_range(2_000.0..6_000.0)),
            exhaust_velocity: Some(rng.gen_range(900.0..3_000.0)),
        };

        match simulate(&inputs, PhysicalConstants::default()) {
            Ok(report) => {
                assert!(report.flight_duration > report.burnout_time);
                assert!(report.range > 0.0, "Range must be positive: {:?}", inputs);
                assert!(report.trajectory.last().unwrap().y <= 0.0);
            }
            Err(SimulationError::InsufficientFuel { .. }) => {}
            Err(err) => panic!("Unexpected error {} for {:?}", err, inputs),
        }
    }
}

#[test]
fn test_config_file_round_trip() {
    let config = FlightConfig::from_file(std::path::Path::new("config/reference.toml"))
        .expect("Shipped configuration should parse");

    assert_eq!(config.vehicle, VehicleInputs::reference());
}

#[test]
fn test_report_outputs() {
    let report = fly_reference();

    let summary = Telemetry::summary(&report);
    assert_eq!(
        summary[0],
        "Sonic speed is reached after 25 seconds at an altitude of 9062 meters."
    );
    assert_eq!(summary[1], "Total flight duration: 68 seconds.");
    assert_eq!(summary[2], "Horizontal distance travelled: 14242 meters.");

    let mut buffer = Vec::new();
    write_trajectory_csv(&report.trajectory, &mut buffer).unwrap();
    let csv_text = String::from_utf8(buffer).unwrap();
    assert_eq!(csv_text.lines().count(), report.trajectory.len() + 1);
    assert!(csv_text.starts_with("horizontal,altitude\n0.0,0.0\n"));
}
