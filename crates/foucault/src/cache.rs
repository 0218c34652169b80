//! Memoized playback.
//!
//! [`compute_trajectory`](crate::compute_trajectory) recomputes the whole
//! prefix every frame. A [`TrajectoryCache`] keeps the longest prefix seen so
//! far and only computes the samples a new frame reveals. The values it hands
//! out are bit-identical to full recomputation because both go through
//! [`PhysicalParameters::position_at`].
//!
//! # Example
//!
//! ```rust
//! use foucault::{compute_trajectory, PhysicalParameters, TimeSamples, TrajectoryCache};
//!
//! let params = PhysicalParameters::new(0.9, 67.0, 9.81, 0.07)?;
//! let samples = TimeSamples::arange(100.0, 0.5)?;
//! let mut cache = TrajectoryCache::new(params, samples.clone());
//!
//! for frame in 0..=samples.len() {
//!     let (xs, ys) = cache.prefix(frame)?;
//!     let full = compute_trajectory(&params, frame, &samples)?;
//!     assert_eq!(xs, full.xs());
//!     assert_eq!(ys, full.ys());
//! }
//! # Ok::<(), foucault::TrajectoryError>(())
//! ```

use crate::error::{Result, TrajectoryError};
use crate::samples::TimeSamples;
use crate::trajectory::{PhysicalParameters, PositionHistory};

/// A caller-owned, incrementally extended trajectory.
///
/// The cache is tied to one parameter set and one sample sequence for its
/// whole lifetime. Build a new cache when either changes.
#[derive(Debug, Clone)]
pub struct TrajectoryCache {
    params: PhysicalParameters,
    samples: TimeSamples,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl TrajectoryCache {
    /// Creates an empty cache for the given inputs.
    pub fn new(params: PhysicalParameters, samples: TimeSamples) -> Self {
        Self {
            params,
            samples,
            xs: Vec::new(),
            ys: Vec::new(),
        }
    }

    /// The parameters this cache was built for.
    pub fn params(&self) -> &PhysicalParameters {
        &self.params
    }

    /// The sample sequence this cache was built for.
    pub fn samples(&self) -> &TimeSamples {
        &self.samples
    }

    /// Number of samples computed so far.
    pub fn computed(&self) -> usize {
        self.xs.len()
    }

    /// Returns the first `frame_index` positions as `(xs, ys)`.
    ///
    /// Computes only the samples beyond the longest prefix requested before.
    /// A smaller index narrows the view without discarding anything.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::InvalidFrameIndex`] if `frame_index`
    /// exceeds the number of samples, and
    /// [`TrajectoryError::InvalidParameter`] if a newly revealed phase
    /// overflows. The cache is left unchanged on error.
    pub fn prefix(&mut self, frame_index: usize) -> Result<(&[f64], &[f64])> {
        if frame_index > self.samples.len() {
            return Err(TrajectoryError::InvalidFrameIndex {
                index: frame_index,
                len: self.samples.len(),
            });
        }

        let computed = self.xs.len();
        if frame_index > computed {
            self.params.check_horizon(self.samples[frame_index - 1])?;

            #[cfg(feature = "tracing")]
            tracing::trace!(
                from = computed,
                to = frame_index,
                "extending trajectory prefix"
            );

            self.xs.reserve(frame_index - computed);
            self.ys.reserve(frame_index - computed);
            for &t in &self.samples[computed..frame_index] {
                let p = self.params.position_at(t);
                self.xs.push(p.x);
                self.ys.push(p.y);
            }
        }

        Ok((&self.xs[..frame_index], &self.ys[..frame_index]))
    }

    /// Like [`prefix`](Self::prefix), but returns an owned history.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::InvalidFrameIndex`] if `frame_index`
    /// exceeds the number of samples.
    pub fn history(&mut self, frame_index: usize) -> Result<PositionHistory> {
        let (xs, ys) = self.prefix(frame_index)?;
        Ok(PositionHistory::from_parts(xs.to_vec(), ys.to_vec()))
    }

    /// Drops every computed position, keeping the inputs.
    pub fn clear(&mut self) {
        self.xs.clear();
        self.ys.clear();
    }
}
