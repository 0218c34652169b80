//! Simulation configuration.
//!
//! [`SimulationConfig`] holds settings in the units people type: degrees for
//! latitude and 10⁻⁴ rad/s for a custom angular velocity. [`SimulationConfig::resolve`]
//! is the only place those are converted to the model's radians and rad/s.
//!
//! Precedence: command-line flag, then config file, then default.
//!
//! # Config file
//!
//! ```toml
//! planet = "custom"
//! gravity = 6.5
//! omega = 1.2          # 10^-4 rad/s
//! latitude = -33.87    # degrees
//! length = 30.0
//! frame_rate = 24
//! duration = 300
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use foucault::units::{OMEGA_INPUT_SCALE, degrees_to_radians, scaled_to_rad_per_sec};
use foucault::{DEFAULT_TIME_SCALE, PhysicalParameters, TimeSamples, TrajectoryError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cli::SimulationArgs;
use crate::presets::Planet;

/// Latitude of the default location (Warsaw), in degrees.
pub const DEFAULT_LATITUDE: f64 = 52.237;

/// Default pendulum length in metres.
pub const DEFAULT_LENGTH: f64 = 67.0;

/// Default rotation multiplier; Earth's rotation is invisible over a few
/// minutes without it.
pub const DEFAULT_PRECESSION_SCALE: f64 = 1e3;

/// Allowed playback frame rates.
pub const FRAME_RATE_RANGE: std::ops::RangeInclusive<u32> = 1..=60;

/// Allowed simulated durations in seconds.
pub const DURATION_RANGE: std::ops::RangeInclusive<u32> = 1..=600;

/// Simulation settings as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Planet preset.
    pub planet: Planet,

    /// Gravity override in m/s². Required for [`Planet::Custom`].
    pub gravity: Option<f64>,

    /// Angular velocity override in 10⁻⁴ rad/s. Required for [`Planet::Custom`].
    pub omega: Option<f64>,

    /// Latitude in degrees.
    pub latitude: f64,

    /// Pendulum length in metres.
    pub length: f64,

    /// Playback frames per second.
    pub frame_rate: u32,

    /// Simulated duration in seconds.
    pub duration: u32,

    /// Simulated seconds per second of playback.
    pub time_scale: f64,

    /// Multiplier applied to the angular velocity.
    pub precession_scale: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            planet: Planet::default(),
            gravity: None,
            omega: None,
            latitude: DEFAULT_LATITUDE,
            length: DEFAULT_LENGTH,
            frame_rate: 30,
            duration: 200,
            time_scale: DEFAULT_TIME_SCALE,
            precession_scale: DEFAULT_PRECESSION_SCALE,
        }
    }
}

/// Model inputs after validation and unit conversion.
///
/// Only [`SimulationConfig::resolve`] builds one, so the frame rate is always
/// within [`FRAME_RATE_RANGE`].
#[derive(Debug, Clone)]
pub struct Simulation {
    planet: Planet,
    params: PhysicalParameters,
    samples: TimeSamples,
    frame_rate: u32,
}

impl Simulation {
    /// Planet the parameters came from.
    #[must_use]
    pub const fn planet(&self) -> Planet {
        self.planet
    }

    /// Parameters in radians and rad/s.
    #[must_use]
    pub const fn params(&self) -> &PhysicalParameters {
        &self.params
    }

    /// Sample times for the whole run.
    #[must_use]
    pub const fn samples(&self) -> &TimeSamples {
        &self.samples
    }

    /// Playback frames per second.
    #[must_use]
    pub const fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Wall-clock time between frames.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    /// Number of frames in a full run.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.samples.len()
    }
}

impl SimulationConfig {
    /// Create a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: None,
            source: Box::new(source),
        })
    }

    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source: Box::new(source),
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Build the effective config from an optional file and command-line flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded.
    pub fn from_sources(file: Option<&Path>, args: &SimulationArgs) -> Result<Self, ConfigError> {
        let base = match file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.with_args(args))
    }

    /// Override fields with the flags that were given.
    #[must_use]
    pub fn with_args(mut self, args: &SimulationArgs) -> Self {
        if let Some(planet) = args.planet {
            self.planet = planet;
        }
        if args.gravity.is_some() {
            self.gravity = args.gravity;
        }
        if args.omega.is_some() {
            self.omega = args.omega;
        }
        if let Some(latitude) = args.latitude {
            self.latitude = latitude;
        }
        if let Some(length) = args.length {
            self.length = length;
        }
        if let Some(frame_rate) = args.frame_rate {
            self.frame_rate = frame_rate;
        }
        if let Some(duration) = args.duration {
            self.duration = duration;
        }
        if let Some(time_scale) = args.time_scale {
            self.time_scale = time_scale;
        }
        if let Some(precession_scale) = args.precession_scale {
            self.precession_scale = precession_scale;
        }
        self
    }

    /// Gravity in m/s²: the override if set, else the preset's.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingGravity`] for a custom planet without
    /// an override.
    pub fn effective_gravity(&self) -> Result<f64, ConfigError> {
        self.gravity
            .or_else(|| self.planet.gravity())
            .ok_or(ConfigError::MissingGravity(self.planet))
    }

    /// Angular velocity in rad/s before the precession scale is applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAngularVelocity`] for a custom planet
    /// without an override.
    pub fn effective_angular_velocity(&self) -> Result<f64, ConfigError> {
        self.omega
            .map(|omega| scaled_to_rad_per_sec(omega, OMEGA_INPUT_SCALE))
            .or_else(|| self.planet.angular_velocity())
            .ok_or(ConfigError::MissingAngularVelocity(self.planet))
    }

    /// Check ranges that belong to the input layer rather than the model.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(out_of_range("latitude", self.latitude, "-90 to 90 degrees"));
        }
        if !FRAME_RATE_RANGE.contains(&self.frame_rate) {
            return Err(out_of_range("frame_rate", self.frame_rate, "1 to 60"));
        }
        if !DURATION_RANGE.contains(&self.duration) {
            return Err(out_of_range("duration", self.duration, "1 to 600 seconds"));
        }
        if !(self.time_scale.is_finite() && self.time_scale > 0.0) {
            return Err(out_of_range("time_scale", self.time_scale, "a positive number"));
        }
        if !(self.precession_scale.is_finite() && self.precession_scale > 0.0) {
            return Err(out_of_range(
                "precession_scale",
                self.precession_scale,
                "a positive number",
            ));
        }
        Ok(())
    }

    /// Validate, convert to model units and build the sample sequence.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for missing or out-of-range settings, and
    /// [`ConfigError::Model`] if the model rejects the converted values.
    pub fn resolve(&self) -> Result<Simulation, ConfigError> {
        self.validate()?;

        let gravity = self.effective_gravity()?;
        let angular_velocity = self.effective_angular_velocity()? * self.precession_scale;
        let latitude = degrees_to_radians(self.latitude);

        let params = PhysicalParameters::new(latitude, self.length, gravity, angular_velocity)?;
        let samples = TimeSamples::for_playback(
            f64::from(self.duration),
            f64::from(self.frame_rate),
            self.time_scale,
        )?;

        info!(
            planet = %self.planet,
            latitude_rad = latitude,
            length = self.length,
            gravity,
            angular_velocity,
            frequency = params.natural_frequency(),
            frames = samples.len(),
            "resolved simulation"
        );

        Ok(Simulation {
            planet: self.planet,
            params,
            samples,
            frame_rate: self.frame_rate,
        })
    }
}

fn location(path: Option<&Path>) -> String {
    path.map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

fn out_of_range(field: &'static str, value: impl ToString, expected: &'static str) -> ConfigError {
    ConfigError::OutOfRange {
        field,
        value: value.to_string(),
        expected,
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid.
    #[error("invalid config{}: {source}", location(.path.as_deref()))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: Box<toml::de::Error>,
    },

    /// No gravity for a planet without a preset.
    #[error("planet {0} needs a gravity value (--gravity)")]
    MissingGravity(Planet),

    /// No angular velocity for a planet without a preset.
    #[error("planet {0} needs an angular velocity (--omega, in 10^-4 rad/s)")]
    MissingAngularVelocity(Planet),

    /// A setting is outside its allowed range.
    #[error("{field} = {value} is out of range, expected {expected}")]
    OutOfRange {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The model rejected the converted parameters.
    #[error(transparent)]
    Model(#[from] TrajectoryError),
}
