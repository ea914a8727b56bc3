use crate::trajectory_system::ascent::AscentState;
use crate::utils::vector2d::Vector2D;

/// One point of the plotted path: `x` horizontal distance, `y` altitude.
pub type TrajectorySample = Vector2D;

/// Owns the samples produced during a single run, in chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectoryRecorder {
    samples: Vec<TrajectorySample>,
    ascent_profile: Vec<AscentState>,
}

impl TrajectoryRecorder {
    pub fn new() -> Self {
        TrajectoryRecorder::default()
    }

    pub fn record(&mut self, sample: TrajectorySample) {
        self.samples.push(sample);
    }

    pub fn record_ascent(&mut self, state: AscentState) {
        self.ascent_profile.push(state);
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    /// `(time, velocity, altitude)` of every ascent step.
    pub fn ascent_profile(&self) -> &[AscentState] {
        &self.ascent_profile
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn into_parts(self) -> (Vec<TrajectorySample>, Vec<AscentState>) {
        (self.samples, self.ascent_profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recorder_is_empty() {
        let recorder = TrajectoryRecorder::new();
        assert!(recorder.is_empty());
        assert!(recorder.ascent_profile().is_empty());
    }

    #[test]
    fn test_samples_keep_insertion_order() {
        let mut recorder = TrajectoryRecorder::new();
        recorder.record(Vector2D::new(0.0, 0.0));
        recorder.record(Vector2D::new(0.0, 100.0));
        recorder.record(Vector2D::new(30.0, 99.5));

        assert_eq!(recorder.len(), 3);
        assert_eq!(recorder.samples()[2], Vector2D::new(30.0, 99.5));
    }

    #[test]
    fn test_into_parts() {
        let mut recorder = TrajectoryRecorder::new();
        let state = AscentState {
            time: 0.1,
            velocity: 0.5,
            altitude: 0.02,
        };
        recorder.record(Vector2D::new(1.0, 2.0));
        recorder.record_ascent(state);

        let (samples, profile) = recorder.into_parts();
        assert_eq!(samples, vec![Vector2D::new(1.0, 2.0)]);
        assert_eq!(profile, vec![state]);
    }
}
