//! Error types for the trajectory model.

use thiserror::Error;

/// Errors raised by the trajectory model.
///
/// Every variant is a precondition violation detected before any position is
/// computed. The model never clamps, wraps or returns a partial history.
///
/// # Error Handling Guide
///
/// | Variant | Cause |
/// |---------|-------|
/// | [`InvalidParameter`](TrajectoryError::InvalidParameter) | Non-positive length or gravity, a non-finite value, or a phase that overflows by the last sample |
/// | [`InvalidFrameIndex`](TrajectoryError::InvalidFrameIndex) | Frame index beyond the number of samples |
/// | [`InvalidTimeSamples`](TrajectoryError::InvalidTimeSamples) | Samples not finite, negative, or not strictly increasing |
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrajectoryError {
    /// A physical parameter is outside its domain.
    ///
    /// `length` and `gravity` must be strictly positive; every parameter
    /// must be finite.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Parameter name as it appears on [`PhysicalParameters`](crate::PhysicalParameters).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The frame index selects more samples than exist.
    #[error("frame index {index} is out of range for {len} time samples")]
    InvalidFrameIndex {
        /// Requested frame index.
        index: usize,
        /// Number of available time samples.
        len: usize,
    },

    /// The time sample sequence, or the values used to generate it, are invalid.
    #[error("invalid time samples: {0}")]
    InvalidTimeSamples(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrajectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_parameter() {
        let e = TrajectoryError::InvalidParameter {
            name: "length",
            value: -1.0,
        };
        assert_eq!(e.to_string(), "invalid parameter `length`: -1");
    }

    #[test]
    fn display_invalid_frame_index() {
        let e = TrajectoryError::InvalidFrameIndex { index: 4, len: 3 };
        assert_eq!(
            e.to_string(),
            "frame index 4 is out of range for 3 time samples"
        );
    }

    #[test]
    fn display_invalid_time_samples() {
        let e = TrajectoryError::InvalidTimeSamples("not increasing".into());
        assert!(e.to_string().contains("not increasing"));
    }
}
