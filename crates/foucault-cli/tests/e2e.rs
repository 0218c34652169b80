//! End-to-end integration tests for the foucault CLI.
//!
//! These tests run the built binary and check its output, exit status and
//! error messages for the render, animate, export and planets commands.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the foucault binary.
#[allow(deprecated)]
fn foucault_cmd() -> Command {
    let mut cmd = Command::cargo_bin("foucault").unwrap();
    cmd.env_remove("FOUCAULT_CONFIG").env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Planets
// =============================================================================

mod planets {
    use super::*;

    #[test]
    fn lists_presets() {
        foucault_cmd()
            .arg("planets")
            .assert()
            .success()
            .stdout(predicate::str::contains("Earth"))
            .stdout(predicate::str::contains("Neptune"))
            .stdout(predicate::str::contains("(user supplied)"));
    }
}

// =============================================================================
// Render
// =============================================================================

mod render {
    use super::*;

    #[test]
    fn default_render() {
        foucault_cmd()
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Foucault Pendulum Path"))
            .stdout(predicate::str::contains("Earth  frame 600/600"))
            .stdout(predicate::str::contains("O"));
    }

    #[test]
    fn output_is_plain_when_piped() {
        foucault_cmd()
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::contains("\u{1b}[").not());
    }

    #[test]
    fn partial_frame() {
        foucault_cmd()
            .args(["render", "--frame", "10", "--planet", "jupiter"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Jupiter  frame 10/600"));
    }

    #[test]
    fn frame_past_end_fails() {
        foucault_cmd()
            .args(["render", "--frame", "601"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("frame index 601 is out of range"));
    }

    #[test]
    fn zero_length_fails() {
        foucault_cmd()
            .args(["render", "--length", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid parameter `length`"));
    }

    #[test]
    fn latitude_out_of_range_fails() {
        foucault_cmd()
            .args(["render", "--latitude", "95"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("latitude = 95 is out of range"));
    }

    #[test]
    fn custom_planet_needs_gravity() {
        foucault_cmd()
            .args(["render", "--planet", "custom", "--omega", "1.0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("needs a gravity value"));
    }

    #[test]
    fn unknown_planet_is_a_usage_error() {
        foucault_cmd()
            .args(["render", "--planet", "pluto"])
            .assert()
            .code(2);
    }
}

// =============================================================================
// Config file
// =============================================================================

mod config_file {
    use super::*;

    #[test]
    fn file_values_apply() {
        foucault_cmd()
            .args(["render", "--config", "tests/fixtures/mars.toml"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Mars  frame 60/60"));
    }

    #[test]
    fn env_var_points_to_file() {
        foucault_cmd()
            .env("FOUCAULT_CONFIG", "tests/fixtures/mars.toml")
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::contains("Mars  frame 60/60"));
    }

    #[test]
    fn flags_override_file() {
        foucault_cmd()
            .args([
                "render",
                "--config",
                "tests/fixtures/mars.toml",
                "--planet",
                "saturn",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Saturn  frame 60/60"));
    }

    #[test]
    fn custom_planet_from_file() {
        foucault_cmd()
            .args(["render", "--config", "tests/fixtures/custom.toml"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Custom  frame 600/600"));
    }

    #[test]
    fn unknown_key_fails() {
        foucault_cmd()
            .args(["render", "--config", "tests/fixtures/unknown_key.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid config"));
    }

    #[test]
    fn missing_file_fails() {
        foucault_cmd()
            .args(["render", "--config", "tests/fixtures/nope.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot read config file"));
    }
}

// =============================================================================
// Export
// =============================================================================

mod export {
    use super::*;

    #[test]
    fn csv_to_stdout() {
        let output = foucault_cmd()
            .args(["export", "--frame", "5"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let text = String::from_utf8(output.stdout).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "t,x,y");
        assert_eq!(lines[1], "0,2,0");
    }

    #[test]
    fn equator_csv_matches_closed_form() {
        let output = foucault_cmd()
            .args([
                "export",
                "--latitude",
                "0",
                "--length",
                "9.81",
                "--frame",
                "20",
            ])
            .output()
            .unwrap();
        assert!(output.status.success());

        let text = String::from_utf8(output.stdout).unwrap();
        for row in text.lines().skip(1) {
            let cols: Vec<f64> = row.split(',').map(|c| c.parse().unwrap()).collect();
            let (t, x, y) = (cols[0], cols[1], cols[2]);
            assert!((x - 2.0 * t.cos()).abs() < 1e-9, "row {row}");
            assert!(y.abs() < 1e-9, "row {row}");
        }
    }

    #[test]
    fn json_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("path.json");

        foucault_cmd()
            .args(["export", "-F", "json", "--frame", "30", "-o"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["planet"], "earth");
        assert_eq!(value["frame_index"], 30);
        assert_eq!(value["history"]["xs"].as_array().unwrap().len(), 30);
    }

    #[test]
    fn export_past_end_fails() {
        foucault_cmd()
            .args(["export", "--frame", "100000"])
            .assert()
            .failure();
    }
}

// =============================================================================
// Animate
// =============================================================================

mod animate {
    use super::*;

    #[test]
    fn falls_back_to_final_frame_without_terminal() {
        foucault_cmd()
            .args(["animate", "--duration", "10"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Earth  frame 30/30"));
    }
}
