#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_precision_loss)]

//! # Foucault
//!
//! The planar path of a Foucault pendulum as seen from a rotating planet.
//!
//! Foucault provides:
//! - **Trajectory**: the pure model mapping physical parameters, time samples
//!   and a frame index to the bob's position history
//! - **TimeSamples**: validated, strictly increasing time sequences
//! - **Units**: the one place where degrees and scaled angular velocities are
//!   converted to radians and rad/s
//! - **TrajectoryCache**: a caller-owned memo that extends the last computed
//!   prefix instead of recomputing it every frame
//!
//! ## Example
//!
//! ```rust
//! use foucault::{compute_trajectory, PhysicalParameters, TimeSamples};
//!
//! // Latitude in radians, length in metres, gravity in m/s², Ω in rad/s
//! let params = PhysicalParameters::new(0.0, 9.81, 9.81, 0.0)?;
//! let samples = TimeSamples::new(vec![0.0, std::f64::consts::FRAC_PI_2, std::f64::consts::PI])?;
//!
//! let history = compute_trajectory(&params, 3, &samples)?;
//! assert_eq!(history.len(), 3);
//! assert!((history.xs()[0] - 2.0).abs() < 1e-12);
//! assert!((history.xs()[2] + 2.0).abs() < 1e-12);
//! # Ok::<(), foucault::TrajectoryError>(())
//! ```
//!
//! ## Playback
//!
//! An animation driver reveals one more sample per frame. Every call is
//! independent, and a shorter history is always a prefix of a longer one:
//!
//! ```rust
//! use foucault::{compute_trajectory, PhysicalParameters, TimeSamples, DEFAULT_TIME_SCALE};
//! use foucault::units::degrees_to_radians;
//!
//! let params = PhysicalParameters::new(degrees_to_radians(48.85), 67.0, 9.81, 7.292e-2)?;
//! let samples = TimeSamples::for_playback(200.0, 30.0, DEFAULT_TIME_SCALE)?;
//!
//! for frame in 0..=samples.len() {
//!     let history = compute_trajectory(&params, frame, &samples)?;
//!     assert_eq!(history.len(), frame);
//! }
//! # Ok::<(), foucault::TrajectoryError>(())
//! ```
//!
//! ## Units
//!
//! The model only speaks radians and rad/s. Callers holding degrees or a
//! scaled angular velocity convert once with [`units`] before constructing
//! [`PhysicalParameters`].

pub mod cache;
mod error;
pub mod samples;
mod trajectory;
pub mod units;

pub use cache::TrajectoryCache;
pub use error::{Result, TrajectoryError};
pub use samples::{DEFAULT_TIME_SCALE, TimeSamples};
pub use trajectory::{PhysicalParameters, Point, PositionHistory, compute_trajectory};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cache::TrajectoryCache;
    pub use crate::error::{Result, TrajectoryError};
    pub use crate::samples::{DEFAULT_TIME_SCALE, TimeSamples};
    pub use crate::trajectory::{PhysicalParameters, Point, PositionHistory, compute_trajectory};
}
