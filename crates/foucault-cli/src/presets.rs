//! Planet presets.
//!
//! Surface gravity in m/s² and sidereal angular velocity in rad/s. A negative
//! angular velocity marks retrograde rotation.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A planet whose rotation drives the pendulum's precession.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Mercury,
    Venus,
    #[default]
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    /// Gravity and angular velocity supplied by the user.
    Custom,
}

impl Planet {
    /// Every preset, in order from the Sun, followed by [`Planet::Custom`].
    pub const ALL: [Self; 9] = [
        Self::Mercury,
        Self::Venus,
        Self::Earth,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
        Self::Custom,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Custom => "Custom",
        }
    }

    /// Surface gravity in m/s², `None` for [`Planet::Custom`].
    #[must_use]
    pub const fn gravity(self) -> Option<f64> {
        match self {
            Self::Mercury => Some(3.7),
            Self::Venus | Self::Uranus => Some(8.87),
            Self::Earth => Some(9.81),
            Self::Mars => Some(3.71),
            Self::Jupiter => Some(24.79),
            Self::Saturn => Some(10.44),
            Self::Neptune => Some(11.15),
            Self::Custom => None,
        }
    }

    /// Angular velocity in rad/s, `None` for [`Planet::Custom`].
    #[must_use]
    pub const fn angular_velocity(self) -> Option<f64> {
        match self {
            Self::Mercury => Some(1.24e-6),
            Self::Venus => Some(-2.992e-7),
            Self::Earth => Some(7.292e-5),
            Self::Mars => Some(7.088e-5),
            Self::Jupiter => Some(1.758e-4),
            Self::Saturn => Some(1.653e-4),
            Self::Uranus => Some(-1.012e-4),
            Self::Neptune => Some(1.083e-4),
            Self::Custom => None,
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_earth() {
        assert_eq!(Planet::default(), Planet::Earth);
        assert_eq!(Planet::Earth.gravity(), Some(9.81));
        assert_eq!(Planet::Earth.angular_velocity(), Some(7.292e-5));
    }

    #[test]
    fn only_custom_lacks_values() {
        for planet in Planet::ALL {
            let has_values = planet.gravity().is_some() && planet.angular_velocity().is_some();
            assert_eq!(has_values, planet != Planet::Custom, "{planet}");
        }
    }

    #[test]
    fn retrograde_planets_spin_backwards() {
        assert!(Planet::Venus.angular_velocity().unwrap() < 0.0);
        assert!(Planet::Uranus.angular_velocity().unwrap() < 0.0);
        assert!(Planet::Mars.angular_velocity().unwrap() > 0.0);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            planet: Planet,
        }
        let w: Wrapper = toml::from_str("planet = \"jupiter\"").unwrap();
        assert_eq!(w.planet, Planet::Jupiter);
    }

    #[test]
    fn display_name() {
        assert_eq!(Planet::Neptune.to_string(), "Neptune");
    }
}
