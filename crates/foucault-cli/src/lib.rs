#![forbid(unsafe_code)]

//! # Foucault CLI
//!
//! Terminal front end for the [`foucault`] trajectory model.
//!
//! This crate collects settings (planet presets, flags, a TOML file),
//! converts them to model units exactly once, and hands the resulting
//! [`Simulation`] to one of the commands:
//!
//! - **render**: draw the path up to a frame on a text [`Canvas`]
//! - **animate**: play the path frame by frame
//! - **export**: write the history as CSV or JSON
//! - **planets**: list the presets
//!
//! ## Library use
//!
//! ```rust
//! use foucault_cli::{Canvas, Planet, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     planet: Planet::Mars,
//!     latitude: -14.6,
//!     ..SimulationConfig::default()
//! };
//! let sim = config.resolve()?;
//!
//! let history = foucault::compute_trajectory(sim.params(), 120, sim.samples())?;
//! let mut canvas = Canvas::new(41, 21);
//! canvas.draw(history.xs(), history.ys());
//! println!("{}", canvas.render());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod animate;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod export;
pub mod logging;
pub mod presets;
pub mod render;

pub use cli::Cli;
pub use config::{ConfigError, Simulation, SimulationConfig};
pub use error::{Error, Result};
pub use presets::Planet;
pub use render::Canvas;
