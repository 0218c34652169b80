//! Unit conversion at the model boundary.
//!
//! [`PhysicalParameters`](crate::PhysicalParameters) only accepts radians and
//! rad/s. Input layers convert here, once, before constructing it.
//!
//! ```rust
//! use foucault::units::{degrees_to_radians, scaled_to_rad_per_sec, OMEGA_INPUT_SCALE};
//!
//! let latitude = degrees_to_radians(90.0);
//! assert!((latitude - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//!
//! // 0.7292 × 10⁻⁴ rad/s, as typed into a form
//! let omega = scaled_to_rad_per_sec(0.7292, OMEGA_INPUT_SCALE);
//! assert!((omega - 7.292e-5).abs() < 1e-18);
//! ```

/// Scale of angular velocities entered by hand, in rad/s per input unit.
pub const OMEGA_INPUT_SCALE: f64 = 1e-4;

/// Converts an angle in degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Converts an angular velocity given in multiples of `scale` rad/s to rad/s.
#[inline]
pub fn scaled_to_rad_per_sec(value: f64, scale: f64) -> f64 {
    value * scale
}

/// Converts an angular velocity in rad/s to multiples of `scale` rad/s.
#[inline]
pub fn rad_per_sec_to_scaled(value: f64, scale: f64) -> f64 {
    value / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_degrees_to_radians() {
        assert_eq!(degrees_to_radians(0.0), 0.0);
        assert!((degrees_to_radians(45.0) - FRAC_PI_4).abs() < TOLERANCE);
        assert!((degrees_to_radians(90.0) - FRAC_PI_2).abs() < TOLERANCE);
        assert!((degrees_to_radians(-90.0) + FRAC_PI_2).abs() < TOLERANCE);
        assert!((degrees_to_radians(180.0) - PI).abs() < TOLERANCE);
    }

    #[test]
    fn test_radians_to_degrees() {
        assert!((radians_to_degrees(FRAC_PI_2) - 90.0).abs() < TOLERANCE);
        assert!((radians_to_degrees(degrees_to_radians(52.237)) - 52.237).abs() < TOLERANCE);
    }

    #[test]
    fn test_scaled_angular_velocity() {
        let omega = scaled_to_rad_per_sec(0.7292, OMEGA_INPUT_SCALE);
        assert!((omega - 7.292e-5).abs() < 1e-18);

        let back = rad_per_sec_to_scaled(omega, OMEGA_INPUT_SCALE);
        assert!((back - 0.7292).abs() < TOLERANCE);
    }

    #[test]
    fn test_scaled_keeps_sign() {
        // Venus and Uranus spin retrograde
        assert!(scaled_to_rad_per_sec(-1.012, OMEGA_INPUT_SCALE) < 0.0);
    }
}
