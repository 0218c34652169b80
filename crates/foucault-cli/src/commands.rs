//! Subcommand implementations.

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};

use foucault::compute_trajectory;
use tracing::{info, warn};

use crate::animate::{self, status_line};
use crate::cli::{AnimateArgs, CanvasArgs, Cli, Command, ExportArgs, ExportFormat, RenderArgs};
use crate::config::{Simulation, SimulationConfig};
use crate::error::Result;
use crate::export;
use crate::presets::Planet;
use crate::render::Canvas;

/// Title printed above every canvas.
pub const TITLE: &str = "Foucault Pendulum Path";

/// Runs the parsed command line.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the requested frame is
/// out of range, or output cannot be written.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Render(args) => {
            let sim = simulation(cli)?;
            let color = use_color(&args.canvas);
            render(&sim, args, color, &mut io::stdout().lock())
        }
        Command::Animate(args) => animate(&simulation(cli)?, args),
        Command::Export(args) => export(&simulation(cli)?, args),
        Command::Planets => planets(&mut io::stdout().lock()),
    }
}

fn simulation(cli: &Cli) -> Result<Simulation> {
    let config = SimulationConfig::from_sources(cli.config.as_deref(), &cli.simulation)?;
    Ok(config.resolve()?)
}

fn use_color(args: &CanvasArgs) -> bool {
    !args.color_disabled() && io::stdout().is_terminal()
}

fn summary(sim: &Simulation) -> String {
    let params = sim.params();
    let swing = std::f64::consts::TAU / params.natural_frequency();
    match params.precession_period() {
        Some(turn) => format!("swing period {swing:.1} s, plane turns once every {turn:.0} s"),
        None => format!("swing period {swing:.1} s, no precession"),
    }
}

fn write_canvas<W: Write>(
    out: &mut W,
    sim: &Simulation,
    canvas: &Canvas,
    frame: usize,
) -> Result<()> {
    writeln!(out, "{TITLE}")?;
    for line in canvas.lines() {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}", status_line(sim, frame))?;
    writeln!(out, "{}", summary(sim))?;
    Ok(())
}

/// Draws the path up to the requested frame.
///
/// # Errors
///
/// Returns an error if the frame is past the last sample or writing fails.
pub fn render<W: Write>(
    sim: &Simulation,
    args: &RenderArgs,
    color: bool,
    out: &mut W,
) -> Result<()> {
    let frame = args.frame.unwrap_or_else(|| sim.frame_count());
    let history = compute_trajectory(sim.params(), frame, sim.samples())?;

    let mut canvas = Canvas::new(args.canvas.width, args.canvas.height).with_color(color);
    canvas.draw(history.xs(), history.ys());

    info!(frame, "rendered canvas");
    write_canvas(out, sim, &canvas, frame)
}

/// Plays the animation, then prints the last frame shown.
///
/// Falls back to a static render of the full path when stdout is not a
/// terminal.
///
/// # Errors
///
/// Returns an error if the terminal cannot be driven or writing fails.
pub fn animate(sim: &Simulation, args: &AnimateArgs) -> Result<()> {
    let color = use_color(&args.canvas);
    let mut canvas = Canvas::new(args.canvas.width, args.canvas.height).with_color(color);

    let frame = if io::stdout().is_terminal() {
        animate::play(sim, &mut canvas, args.repeat)?.frame()
    } else {
        warn!("stdout is not a terminal, drawing the final frame only");
        let frame = sim.frame_count();
        let history = compute_trajectory(sim.params(), frame, sim.samples())?;
        canvas.draw(history.xs(), history.ys());
        frame
    };

    write_canvas(&mut io::stdout().lock(), sim, &canvas, frame)
}

/// Writes the history to a file or stdout.
///
/// # Errors
///
/// Returns an error if the frame is past the last sample, or the output
/// cannot be created or written.
pub fn export(sim: &Simulation, args: &ExportArgs) -> Result<()> {
    let frame = args.frame.unwrap_or_else(|| sim.frame_count());
    let history = compute_trajectory(sim.params(), frame, sim.samples())?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => {
            info!(
                path = %path.display(),
                format = ?args.format,
                frame,
                "exporting trajectory"
            );
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        ExportFormat::Csv => export::write_csv(&mut out, sim.samples(), &history)?,
        ExportFormat::Json => export::write_json(&mut out, sim, &history)?,
    }
    out.flush()?;
    Ok(())
}

/// Prints the preset table.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn planets<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{:<10}{:>16}{:>16}",
        "Planet", "Gravity [m/s²]", "Omega [rad/s]"
    )?;
    for planet in Planet::ALL {
        match (planet.gravity(), planet.angular_velocity()) {
            (Some(g), Some(omega)) => {
                writeln!(out, "{:<10}{g:>16.2}{omega:>16.3e}", planet.name())?;
            }
            _ => writeln!(out, "{:<10}{:>32}", planet.name(), "(user supplied)")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_args(frame: Option<usize>) -> RenderArgs {
        RenderArgs {
            frame,
            canvas: CanvasArgs {
                width: 41,
                height: 21,
                no_color: true,
            },
        }
    }

    #[test]
    fn planets_table_lists_every_preset() {
        let mut out = Vec::new();
        planets(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for planet in Planet::ALL {
            assert!(text.contains(planet.name()), "missing {planet}");
        }
        assert!(text.contains("9.81"));
        assert!(text.contains("(user supplied)"));
    }

    #[test]
    fn render_full_path() {
        let sim = SimulationConfig::default().resolve().unwrap();
        let mut out = Vec::new();
        render(&sim, &render_args(None), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(TITLE));
        assert!(text.contains("frame 600/600"));
        assert!(text.contains('O'));
        assert!(text.contains("plane turns once every"));
        // title + border + 21 rows + border + status + summary
        assert_eq!(text.lines().count(), 26);
    }

    #[test]
    fn render_frame_zero_has_no_bob() {
        let sim = SimulationConfig::default().resolve().unwrap();
        let mut out = Vec::new();
        render(&sim, &render_args(Some(0)), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('O'));
        assert!(text.contains("frame 0/600"));
    }

    #[test]
    fn render_rejects_frame_past_end() {
        let sim = SimulationConfig::default().resolve().unwrap();
        let mut out = Vec::new();
        let err = render(&sim, &render_args(Some(601)), false, &mut out).unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert!(out.is_empty());
    }

    #[test]
    fn equator_summary_has_no_precession() {
        let sim = SimulationConfig {
            latitude: 0.0,
            ..SimulationConfig::default()
        }
        .resolve()
        .unwrap();
        assert!(summary(&sim).ends_with("no precession"));
    }
}
