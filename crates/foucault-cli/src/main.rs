#![forbid(unsafe_code)]

//! # Foucault
//!
//! Foucault pendulum path simulator for the terminal.
//!
//! ## Usage
//!
//! ```bash
//! foucault render                       # Full path over Warsaw on Earth
//! foucault animate --latitude 90        # Watch the plane turn at the pole
//! foucault export -F json -o path.json  # Save the trajectory
//! foucault planets                      # List presets
//! ```

use foucault_cli::{Cli, commands, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.log_level());

    tracing::debug!(command = ?cli.command, "starting");
    commands::run(&cli)?;

    Ok(())
}
