//! The trajectory model.
//!
//! The swing is rendered as two counter-rotating unit phasors. Their sum
//! oscillates along a line at the pendulum's natural frequency while the line
//! itself turns at `Ω·sin(latitude)`, which is the precession of the swing
//! plane seen from the planet's surface.
//!
//! Amplitude is normalized: length and gravity only set the oscillation
//! frequency, so every trace stays inside the disc of radius 2.
//!
//! # Example
//!
//! ```rust
//! use foucault::{compute_trajectory, PhysicalParameters, TimeSamples};
//!
//! let params = PhysicalParameters::new(std::f64::consts::FRAC_PI_2, 1.0, 9.81, 0.5)?;
//! let samples = TimeSamples::arange(20.0, 0.1)?;
//!
//! let history = compute_trajectory(&params, samples.len(), &samples)?;
//! for p in history.points() {
//!     assert!(p.x.hypot(p.y) <= 2.0 + 1e-12);
//! }
//! # Ok::<(), foucault::TrajectoryError>(())
//! ```

use core::f64::consts::TAU;

use crate::error::{Result, TrajectoryError};
use crate::samples::TimeSamples;

/// A bob position in the pendulum's local plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the rest position.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Validated physical inputs of the model.
///
/// Units are fixed by this type and never inferred:
///
/// | Field | Unit |
/// |-------|------|
/// | `latitude` | radians |
/// | `length` | metres, `> 0` |
/// | `gravity` | m/s², `> 0` |
/// | `angular_velocity` | rad/s, sign gives the rotation sense |
///
/// Use [`units`](crate::units) to convert degrees or scaled angular
/// velocities before calling [`PhysicalParameters::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PhysicalParameters {
    latitude: f64,
    length: f64,
    gravity: f64,
    angular_velocity: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    frequency: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    precession_rate: f64,
}

impl PhysicalParameters {
    /// Validates the inputs and precomputes the natural frequency and the
    /// precession rate.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::InvalidParameter`] if `length` or `gravity`
    /// is not strictly positive, or if any value is NaN or infinite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use foucault::{PhysicalParameters, TrajectoryError};
    ///
    /// let ok = PhysicalParameters::new(0.8, 67.0, 9.81, 7.292e-5);
    /// assert!(ok.is_ok());
    ///
    /// let err = PhysicalParameters::new(0.8, 0.0, 9.81, 7.292e-5);
    /// assert!(matches!(err, Err(TrajectoryError::InvalidParameter { name: "length", .. })));
    /// ```
    pub fn new(latitude: f64, length: f64, gravity: f64, angular_velocity: f64) -> Result<Self> {
        finite("latitude", latitude)?;
        positive("length", length)?;
        positive("gravity", gravity)?;
        finite("angular_velocity", angular_velocity)?;

        let frequency = (gravity / length).sqrt();
        if !frequency.is_finite() {
            // gravity / length can still overflow for extreme ratios
            return Err(TrajectoryError::InvalidParameter {
                name: "length",
                value: length,
            });
        }

        Ok(Self {
            latitude,
            length,
            gravity,
            angular_velocity,
            frequency,
            precession_rate: angular_velocity * latitude.sin(),
        })
    }

    /// Latitude in radians.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Pendulum length in metres.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Gravitational acceleration in m/s².
    #[inline]
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Planetary angular velocity in rad/s.
    #[inline]
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// Natural angular frequency `sqrt(g / L)` in rad/s.
    #[inline]
    pub fn natural_frequency(&self) -> f64 {
        self.frequency
    }

    /// Angular rate of the swing plane, `Ω·sin(latitude)`, in rad/s.
    #[inline]
    pub fn precession_rate(&self) -> f64 {
        self.precession_rate
    }

    /// Time for the swing plane to turn a full circle, in seconds.
    ///
    /// Returns `None` at the equator or on a planet that does not rotate.
    pub fn precession_period(&self) -> Option<f64> {
        let rate = self.precession_rate.abs();
        (rate > 0.0).then(|| TAU / rate)
    }

    /// Bob position at time `t`.
    ///
    /// This is the single-sample formula shared by [`compute_trajectory`] and
    /// [`TrajectoryCache`](crate::TrajectoryCache), so both produce
    /// bit-identical values.
    #[inline]
    pub fn position_at(&self, t: f64) -> Point {
        let swing = self.frequency * t;
        let turn = self.precession_rate * t;
        Point {
            x: (swing - turn).cos() + (swing + turn).cos(),
            y: (swing - turn).sin() - (swing + turn).sin(),
        }
    }

    /// Checks that both phases of [`position_at`](Self::position_at) stay
    /// finite up to time `t`.
    ///
    /// A length close to zero keeps the frequency finite but can push
    /// `freq·t` past `f64::MAX`, where `cos` and `sin` return NaN.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::InvalidParameter`] naming `length` if the
    /// swing phase overflows, or `angular_velocity` if the turn phase does.
    pub fn check_horizon(&self, t: f64) -> Result<()> {
        let swing = (self.frequency * t).abs();
        let turn = (self.precession_rate * t).abs();
        if !swing.is_finite() {
            return Err(TrajectoryError::InvalidParameter {
                name: "length",
                value: self.length,
            });
        }
        if !(swing + turn).is_finite() {
            return Err(TrajectoryError::InvalidParameter {
                name: "angular_velocity",
                value: self.angular_velocity,
            });
        }
        Ok(())
    }
}

fn finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TrajectoryError::InvalidParameter { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(TrajectoryError::InvalidParameter { name, value })
    }
}

/// The bob's position trace from the first sample up to a frame.
///
/// `xs` and `ys` always have the same length. A history is recomputed for
/// every frame, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PositionHistory {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl PositionHistory {
    pub(crate) fn from_parts(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        Self { xs, ys }
    }

    /// X coordinates, one per revealed sample.
    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Y coordinates, one per revealed sample.
    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Number of revealed samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns `true` for frame index zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Position at index `i`, if revealed.
    pub fn get(&self, i: usize) -> Option<Point> {
        Some(Point::new(*self.xs.get(i)?, *self.ys.get(i)?))
    }

    /// The most recent position (the bob itself).
    pub fn last(&self) -> Option<Point> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterates over the positions in time order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| Point::new(x, y))
    }

    /// Consumes the history, returning `(xs, ys)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.xs, self.ys)
    }
}

/// Computes the bob's positions for `samples[0..frame_index]`.
///
/// The whole prefix is recomputed on every call; identical arguments always
/// give identical output, and the history for a smaller `frame_index` is a
/// prefix of the history for a larger one.
///
/// # Errors
///
/// Returns [`TrajectoryError::InvalidFrameIndex`] if `frame_index` exceeds
/// `samples.len()`, and [`TrajectoryError::InvalidParameter`] if the phase at
/// the last revealed sample overflows. Nothing is computed in either case.
///
/// # Example
///
/// ```rust
/// use foucault::{compute_trajectory, PhysicalParameters, TimeSamples};
///
/// let params = PhysicalParameters::new(0.5, 2.0, 9.81, 0.1)?;
/// let samples = TimeSamples::arange(10.0, 0.5)?;
///
/// let empty = compute_trajectory(&params, 0, &samples)?;
/// assert!(empty.is_empty());
///
/// let short = compute_trajectory(&params, 5, &samples)?;
/// let long = compute_trajectory(&params, 15, &samples)?;
/// assert_eq!(short.xs(), &long.xs()[..5]);
/// # Ok::<(), foucault::TrajectoryError>(())
/// ```
pub fn compute_trajectory(
    params: &PhysicalParameters,
    frame_index: usize,
    samples: &TimeSamples,
) -> Result<PositionHistory> {
    let revealed = samples
        .get(..frame_index)
        .ok_or(TrajectoryError::InvalidFrameIndex {
            index: frame_index,
            len: samples.len(),
        })?;
    if let Some(&last) = revealed.last() {
        params.check_horizon(last)?;
    }

    let (xs, ys): (Vec<f64>, Vec<f64>) = revealed
        .iter()
        .map(|&t| {
            let p = params.position_at(t);
            (p.x, p.y)
        })
        .unzip();

    Ok(PositionHistory::from_parts(xs, ys))
}
