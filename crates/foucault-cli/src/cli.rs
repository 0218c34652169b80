//! Command-line interface for `foucault`.
//!
//! Simulation flags are global so they can follow any subcommand. Each one is
//! optional: an absent flag falls back to the config file, then to the
//! built-in default.
//!
//! # Examples
//!
//! ```bash
//! # Print the full path over Paris
//! foucault render --latitude 48.85
//!
//! # Animate on Mars with a shorter pendulum
//! foucault animate --planet mars --length 20
//!
//! # Custom planet, angular velocity in 10^-4 rad/s
//! foucault export --planet custom --gravity 5.0 --omega 1.5 --format json
//! ```

use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::presets::Planet;

/// Foucault pendulum path simulator.
///
/// Traces the precessing swing of a Foucault pendulum on any planet and
/// draws, animates or exports it.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "foucault",
    author,
    version,
    about = "Foucault pendulum path simulator",
    long_about = "Traces the precessing swing of a Foucault pendulum as seen from a \
                  rotating planet, and draws, animates or exports the path."
)]
pub struct Cli {
    #[command(flatten)]
    pub simulation: SimulationArgs,

    /// Path to a TOML config file
    ///
    /// Flags given on the command line override values from the file
    #[arg(long, short = 'c', env = "FOUCAULT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Physical and playback settings.
#[derive(Args, Debug, Clone, Default)]
pub struct SimulationArgs {
    /// Planet preset [default: earth]
    #[arg(long, short = 'p', global = true)]
    pub planet: Option<Planet>,

    /// Gravitational acceleration in m/s² (required for the custom planet)
    #[arg(long, global = true, value_name = "M_S2")]
    pub gravity: Option<f64>,

    /// Planetary angular velocity in 10^-4 rad/s (required for the custom planet)
    #[arg(
        long,
        global = true,
        value_name = "1E-4_RAD_S",
        allow_negative_numbers = true
    )]
    pub omega: Option<f64>,

    /// Latitude in degrees, -90 to 90 [default: 52.237]
    #[arg(long, global = true, value_name = "DEG", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Pendulum length in metres [default: 67]
    #[arg(long, global = true, value_name = "M")]
    pub length: Option<f64>,

    /// Playback frame rate, 1 to 60 [default: 30]
    #[arg(long, global = true, value_name = "FPS")]
    pub frame_rate: Option<u32>,

    /// Simulated duration in seconds, 1 to 600 [default: 200]
    #[arg(long, global = true, value_name = "S")]
    pub duration: Option<u32>,

    /// Simulated seconds per second of playback [default: 10]
    #[arg(long, global = true, value_name = "K")]
    pub time_scale: Option<f64>,

    /// Multiplier on the planet's rotation so precession is visible [default: 1000]
    #[arg(long, global = true, value_name = "K")]
    pub precession_scale: Option<f64>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Draw the path up to a frame and print it
    Render(RenderArgs),

    /// Play the path frame by frame in the terminal
    Animate(AnimateArgs),

    /// Write the position history as CSV or JSON
    Export(ExportArgs),

    /// List the built-in planet presets
    Planets,
}

/// Canvas size and colour.
#[derive(Args, Debug, Clone)]
pub struct CanvasArgs {
    /// Canvas width in columns
    #[arg(long, default_value = "61")]
    pub width: u16,

    /// Canvas height in rows
    #[arg(long, default_value = "31")]
    pub height: u16,

    /// Disable coloured output (a non-empty NO_COLOR does the same)
    #[arg(long)]
    pub no_color: bool,
}

impl CanvasArgs {
    /// Whether `--no-color` or a non-empty `NO_COLOR` turned colour off.
    #[must_use]
    pub fn color_disabled(&self) -> bool {
        self.no_color || no_color_requested(env::var_os("NO_COLOR").as_deref())
    }
}

/// `NO_COLOR` counts when present and non-empty, whatever its value.
fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Arguments for the render subcommand.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Number of samples to reveal (all if not specified)
    #[arg(long, short = 'f')]
    pub frame: Option<usize>,

    #[command(flatten)]
    pub canvas: CanvasArgs,
}

/// Arguments for the animate subcommand.
#[derive(Args, Debug, Clone)]
pub struct AnimateArgs {
    /// Start over after the last frame until stopped
    #[arg(long, short = 'r')]
    pub repeat: bool,

    #[command(flatten)]
    pub canvas: CanvasArgs,
}

/// Arguments for the export subcommand.
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, short = 'F', default_value = "csv")]
    pub format: ExportFormat,

    /// Number of samples to export (all if not specified)
    #[arg(long, short = 'f')]
    pub frame: Option<usize>,

    /// Output file path (stdout if not specified)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Export output formats.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// `t,x,y` rows with a header
    #[default]
    Csv,
    /// Parameters and history as one JSON document
    Json,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Get log level based on verbosity.
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
