//! Trajectory export.
//!
//! CSV has a `t,x,y` header and one row per revealed sample. JSON holds the
//! resolved parameters, the sample times and the history in one document.

use std::io::Write;

use foucault::{PhysicalParameters, PositionHistory};
use serde::Serialize;

use crate::config::Simulation;
use crate::error::Result;
use crate::presets::Planet;

/// JSON export document.
#[derive(Debug, Serialize)]
pub struct TrajectoryDocument<'a> {
    /// Planet preset the parameters came from.
    pub planet: Planet,
    /// Model inputs in radians, metres and rad/s.
    pub parameters: &'a PhysicalParameters,
    /// Swing frequency `sqrt(g/L)` in rad/s.
    pub natural_frequency: f64,
    /// Rotation rate of the swing plane, `Ω·sin(lat)`, in rad/s.
    pub precession_rate: f64,
    /// Playback frames per second.
    pub frame_rate: u32,
    /// Number of samples revealed.
    pub frame_index: usize,
    /// Sample times in simulated seconds, one per point.
    pub time: &'a [f64],
    /// Revealed positions.
    pub history: &'a PositionHistory,
}

impl<'a> TrajectoryDocument<'a> {
    /// Assembles a document for the first `history.len()` samples.
    #[must_use]
    pub fn new(sim: &'a Simulation, history: &'a PositionHistory) -> Self {
        Self {
            planet: sim.planet(),
            parameters: sim.params(),
            natural_frequency: sim.params().natural_frequency(),
            precession_rate: sim.params().precession_rate(),
            frame_rate: sim.frame_rate(),
            frame_index: history.len(),
            time: &sim.samples()[..history.len()],
            history,
        }
    }
}

/// Writes `t,x,y` rows.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_csv<W: Write>(out: &mut W, time: &[f64], history: &PositionHistory) -> Result<()> {
    writeln!(out, "t,x,y")?;
    for (t, p) in time.iter().zip(history.points()) {
        writeln!(out, "{t},{},{}", p.x, p.y)?;
    }
    Ok(())
}

/// Writes the JSON document, pretty-printed.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(
    out: &mut W,
    sim: &Simulation,
    history: &PositionHistory,
) -> Result<()> {
    let document = TrajectoryDocument::new(sim, history);
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    Ok(())
}
