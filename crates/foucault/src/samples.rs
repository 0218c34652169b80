//! Time sample sequences for playback.
//!
//! A [`TimeSamples`] is fixed for one animation run. Every value is finite and
//! non-negative, and the sequence is strictly increasing.
//!
//! # Example
//!
//! ```rust
//! use foucault::{TimeSamples, DEFAULT_TIME_SCALE};
//!
//! // 200 simulated seconds shown at 30 FPS, ten simulated seconds per real second
//! let samples = TimeSamples::for_playback(200.0, 30.0, DEFAULT_TIME_SCALE)?;
//! assert_eq!(samples.len(), 600);
//! # Ok::<(), foucault::TrajectoryError>(())
//! ```

use core::ops::Deref;

use crate::error::{Result, TrajectoryError};

/// Simulated seconds that elapse per second of playback.
pub const DEFAULT_TIME_SCALE: f64 = 10.0;

/// Upper bound on generated sequences, to fail before a runaway allocation.
pub const MAX_SAMPLES: usize = 10_000_000;

/// A validated, strictly increasing sequence of sample times in seconds.
///
/// Dereferences to `[f64]`, so slice methods such as `len`, `iter` and `get`
/// are available directly.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TimeSamples(Vec<f64>);

impl TimeSamples {
    /// Wraps an existing sequence after validating it.
    ///
    /// An empty sequence is valid.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::InvalidTimeSamples`] if any value is NaN,
    /// infinite or negative, or if the values are not strictly increasing.
    pub fn new(samples: Vec<f64>) -> Result<Self> {
        for (i, &t) in samples.iter().enumerate() {
            if !t.is_finite() || t < 0.0 {
                return Err(TrajectoryError::InvalidTimeSamples(format!(
                    "sample {i} is {t}, expected a finite value >= 0"
                )));
            }
        }
        if let Some(i) = samples.windows(2).position(|w| w[1] <= w[0]) {
            return Err(TrajectoryError::InvalidTimeSamples(format!(
                "sample {} ({}) does not exceed sample {i} ({})",
                i + 1,
                samples[i + 1],
                samples[i]
            )));
        }
        Ok(Self(samples))
    }

    /// Evenly spaced samples `0, step, 2·step, …` strictly below `duration`.
    ///
    /// The count is `ceil(duration / step)` and each value is computed as
    /// `i · step`, so no rounding error accumulates along the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::InvalidTimeSamples`] if `duration` or `step`
    /// is not finite and positive, or if more than [`MAX_SAMPLES`] samples
    /// would be generated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use foucault::TimeSamples;
    ///
    /// let samples = TimeSamples::arange(1.0, 0.25)?;
    /// assert_eq!(samples.as_slice(), &[0.0, 0.25, 0.5, 0.75]);
    /// # Ok::<(), foucault::TrajectoryError>(())
    /// ```
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn arange(duration: f64, step: f64) -> Result<Self> {
        positive("duration", duration)?;
        positive("step", step)?;

        let count = (duration / step).ceil();
        if !count.is_finite() || count > MAX_SAMPLES as f64 {
            return Err(TrajectoryError::InvalidTimeSamples(format!(
                "{duration} s at a step of {step} s exceeds {MAX_SAMPLES} samples"
            )));
        }

        Self::new((0..count as usize).map(|i| i as f64 * step).collect())
    }

    /// Samples for showing `duration` simulated seconds at `frame_rate`
    /// frames per second, where each second of playback covers
    /// `time_scale` simulated seconds.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::InvalidTimeSamples`] for a non-positive or
    /// non-finite argument.
    pub fn for_playback(duration: f64, frame_rate: f64, time_scale: f64) -> Result<Self> {
        positive("frame rate", frame_rate)?;
        positive("time scale", time_scale)?;
        Self::arange(duration, time_scale / frame_rate)
    }

    /// The samples as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the sequence, returning the inner vector.
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for TimeSamples {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for TimeSamples {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for TimeSamples {
    type Error = TrajectoryError;

    fn try_from(samples: Vec<f64>) -> Result<Self> {
        Self::new(samples)
    }
}

fn positive(what: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TrajectoryError::InvalidTimeSamples(format!(
            "{what} must be finite and positive, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_increasing() {
        let samples = TimeSamples::new(vec![0.0, 0.5, 2.0]).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[2], 2.0);
    }

    #[test]
    fn test_new_accepts_empty() {
        let samples = TimeSamples::new(Vec::new()).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn test_new_rejects_equal_neighbours() {
        let err = TimeSamples::new(vec![0.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(err, TrajectoryError::InvalidTimeSamples(_)));
    }

    #[test]
    fn test_new_rejects_decreasing() {
        assert!(TimeSamples::new(vec![0.0, 2.0, 1.0]).is_err());
    }

    #[test]
    fn test_new_rejects_negative_and_non_finite() {
        assert!(TimeSamples::new(vec![-1.0, 0.0]).is_err());
        assert!(TimeSamples::new(vec![0.0, f64::NAN]).is_err());
        assert!(TimeSamples::new(vec![0.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_arange_count_matches_ceil() {
        let samples = TimeSamples::arange(200.0, 1.0 / 3.0).unwrap();
        assert_eq!(samples.len(), 600);

        let samples = TimeSamples::arange(1.1, 0.5).unwrap();
        assert_eq!(samples.as_slice(), &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_arange_step_larger_than_duration() {
        let samples = TimeSamples::arange(1.0, 5.0).unwrap();
        assert_eq!(samples.as_slice(), &[0.0]);
    }

    #[test]
    fn test_arange_values_are_index_times_step() {
        let step = 0.1;
        let samples = TimeSamples::arange(50.0, step).unwrap();
        for (i, &t) in samples.iter().enumerate() {
            assert_eq!(t, i as f64 * step);
        }
    }

    #[test]
    fn test_arange_rejects_bad_arguments() {
        assert!(TimeSamples::arange(0.0, 1.0).is_err());
        assert!(TimeSamples::arange(10.0, 0.0).is_err());
        assert!(TimeSamples::arange(10.0, -1.0).is_err());
        assert!(TimeSamples::arange(f64::NAN, 1.0).is_err());
        assert!(TimeSamples::arange(1e300, 1e-300).is_err());
    }

    #[test]
    fn test_for_playback() {
        let samples = TimeSamples::for_playback(200.0, 30.0, DEFAULT_TIME_SCALE).unwrap();
        assert_eq!(samples.len(), 600);
        assert!((samples[1] - 1.0 / 3.0).abs() < 1e-12);

        let real_time = TimeSamples::for_playback(2.0, 60.0, 1.0).unwrap();
        assert_eq!(real_time.len(), 120);
    }

    #[test]
    fn test_for_playback_rejects_zero_frame_rate() {
        assert!(TimeSamples::for_playback(10.0, 0.0, DEFAULT_TIME_SCALE).is_err());
        assert!(TimeSamples::for_playback(10.0, 30.0, 0.0).is_err());
    }

    #[test]
    fn test_try_from_vec() {
        let samples: TimeSamples = vec![0.0, 1.0].try_into().unwrap();
        assert_eq!(samples.into_vec(), vec![0.0, 1.0]);
    }
}
