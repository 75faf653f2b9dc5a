use crate::errors::HeatingError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub time: f64,     // s
    pub altitude: f64, // m
    pub mach: f64,
}

impl TrajectorySample {
    pub fn new(time: f64, altitude: f64, mach: f64) -> Self {
        TrajectorySample {
            time,
            altitude,
            mach,
        }
    }
}

/// Validated, time-ordered flight log.
///
/// Construction guarantees a non-empty sequence of finite samples with
/// strictly increasing time, so every integration step has `dt > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn new(samples: Vec<TrajectorySample>) -> Result<Self, HeatingError> {
        if samples.is_empty() {
            return Err(HeatingError::InvalidTrajectory(
                "trajectory contains no samples".to_string(),
            ));
        }

        for (index, sample) in samples.iter().enumerate() {
            if !(sample.time.is_finite() && sample.altitude.is_finite() && sample.mach.is_finite())
            {
                return Err(HeatingError::InvalidTrajectory(format!(
                    "sample {} has a non-finite field: {:?}",
                    index, sample
                )));
            }
        }

        if let Some(index) = samples
            .windows(2)
            .position(|pair| pair[1].time <= pair[0].time)
        {
            return Err(HeatingError::InvalidTrajectory(format!(
                "time must be strictly increasing: sample {} at t={} s follows t={} s",
                index + 1,
                samples[index + 1].time,
                samples[index].time
            )));
        }

        Ok(Trajectory { samples })
    }

    /// Builds a trajectory from parallel time, altitude and Mach series.
    pub fn from_series(time: &[f64], altitude: &[f64], mach: &[f64]) -> Result<Self, HeatingError> {
        if time.len() != altitude.len() || time.len() != mach.len() {
            return Err(HeatingError::InvalidTrajectory(format!(
                "series lengths differ: time={}, altitude={}, mach={}",
                time.len(),
                altitude.len(),
                mach.len()
            )));
        }

        let samples = time
            .iter()
            .zip(altitude)
            .zip(mach)
            .map(|((&t, &h), &m)| TrajectorySample::new(t, h, m))
            .collect();
        Self::new(samples)
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.time - first.time,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_series() {
        let trajectory =
            Trajectory::from_series(&[0.0, 0.5, 1.0], &[1000.0, 900.0, 800.0], &[3.0, 3.1, 3.2])
                .unwrap();

        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.samples()[1], TrajectorySample::new(0.5, 900.0, 3.1));
        assert_eq!(trajectory.duration(), 1.0);
    }

    #[test]
    fn test_single_sample_is_valid() {
        let trajectory = Trajectory::from_series(&[5.0], &[0.0], &[0.0]).unwrap();
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.duration(), 0.0);
    }

    #[test]
    fn test_mismatched_lengths() {
        let result = Trajectory::from_series(&[0.0, 1.0], &[0.0], &[0.0, 1.0]);
        assert!(matches!(result, Err(HeatingError::InvalidTrajectory(_))));
    }

    #[test]
    fn test_repeated_timestamp() {
        let result = Trajectory::from_series(&[0.0, 1.0, 1.0], &[0.0; 3], &[0.0; 3]);
        assert!(matches!(result, Err(HeatingError::InvalidTrajectory(_))));
    }

    #[test]
    fn test_decreasing_timestamp() {
        let result = Trajectory::from_series(&[0.0, 2.0, 1.0], &[0.0; 3], &[0.0; 3]);
        match result {
            Err(HeatingError::InvalidTrajectory(message)) => {
                assert!(message.contains("sample 2"), "unexpected message: {}", message)
            }
            other => panic!("expected InvalidTrajectory, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_and_non_finite() {
        assert!(matches!(
            Trajectory::new(Vec::new()),
            Err(HeatingError::InvalidTrajectory(_))
        ));
        assert!(matches!(
            Trajectory::from_series(&[0.0, 1.0], &[0.0, f64::NAN], &[0.0, 1.0]),
            Err(HeatingError::InvalidTrajectory(_))
        ));
    }
}
