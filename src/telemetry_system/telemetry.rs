use crate::control::rocket::FlightReport;

/// Console rendering of a [`FlightReport`].
pub struct Telemetry;

impl Telemetry {
    /// Flights last minutes, so hours are folded into the minute count.
    fn format_time(seconds: f64) -> String {
        let minutes = (seconds / 60.0).floor();
        if minutes >= 1.0 {
            format!("{:.0}m {:.2}s", minutes, seconds - minutes * 60.0)
        } else {
            format!("{:.2}s", seconds)
        }
    }

    fn format_distance(distance: f64) -> String {
        if distance.abs() >= 1000.0 {
            format!("{:.2} km", distance / 1000.0)
        } else {
            format!("{:.2} m", distance)
        }
    }

    /// The three headline results, each rounded to the nearest unit.
    pub fn summary(report: &FlightReport) -> Vec<String> {
        vec![
            format!(
                "Sonic speed is reached after {:.0} seconds at an altitude of {:.0} meters.",
                report.burnout_time_rounded(),
                report.burnout_altitude.round()
            ),
            format!(
                "Total flight duration: {:.0} seconds.",
                report.flight_duration.round()
            ),
            format!(
                "Horizontal distance travelled: {:.0} meters.",
                report.range.round()
            ),
        ]
    }

    pub fn details(report: &FlightReport) -> Vec<String> {
        let peak = report
            .trajectory
            .iter()
            .map(|sample| sample.y)
            .fold(f64::NEG_INFINITY, f64::max);

        vec![
            format!("Burn-out time: {}", Self::format_time(report.burnout_time)),
            format!("Burn-out velocity: {:.2} m/s", report.burnout_velocity),
            format!("Burn-out mass: {:.2} kg", report.burnout_mass),
            format!("Peak altitude: {}", Self::format_distance(peak)),
            format!("Flight duration: {}", Self::format_time(report.flight_duration)),
            format!("Range: {}", Self::format_distance(report.range)),
            format!("Trajectory samples: {}", report.trajectory.len()),
        ]
    }

    pub fn display_data(report: &FlightReport) {
        println!("--- Flight Summary ---");
        for line in Self::summary(report) {
            println!("{}", line);
        }
        println!("\n--- Flight Details ---");
        for line in Self::details(report) {
            println!("{}", line);
        }
    }
}
