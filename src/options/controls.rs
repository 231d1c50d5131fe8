use std::f32::consts::{FRAC_PI_2, PI};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::POLE_EPSILON;
use crate::error::OrbitError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit Controls", inline)]
#[serde(default)]
/// Orbit limits and input sensitivity.
pub struct OrbitOptions {
    /// Closest the camera may get to the target. Must be > 0.
    #[schemars(title = "Min Distance", range(min = 0.1, max = 1000.0))]
    pub min_distance: f32,
    /// Farthest the camera may get from the target.
    #[schemars(title = "Max Distance", range(min = 0.1, max = 10000.0))]
    pub max_distance: f32,
    /// Smallest polar angle from world-up, in radians.
    #[schemars(
        title = "Min Polar Angle",
        range(min = 0.0, max = 3.1416),
        extend("step" = 0.01)
    )]
    pub min_polar_angle: f32,
    /// Largest polar angle from world-up, in radians.
    #[schemars(
        title = "Max Polar Angle",
        range(min = 0.0, max = 3.1416),
        extend("step" = 0.01)
    )]
    pub max_polar_angle: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(
        title = "Rotate Speed",
        range(min = 0.1, max = 2.0),
        extend("step" = 0.05)
    )]
    pub rotate_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(
        title = "Pan Speed",
        range(min = 0.1, max = 2.0),
        extend("step" = 0.05)
    )]
    pub pan_speed: f32,
    /// Zoom sensitivity exponent applied to the 0.95 step.
    #[schemars(
        title = "Zoom Speed",
        range(min = 0.1, max = 5.0),
        extend("step" = 0.1)
    )]
    pub zoom_speed: f32,
    /// When false, all input is dropped.
    #[schemars(title = "Enabled")]
    pub enabled: bool,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            min_distance: 10.0,
            max_distance: 500.0,
            min_polar_angle: 0.0,
            max_polar_angle: FRAC_PI_2,
            rotate_speed: 0.5,
            pan_speed: 0.5,
            zoom_speed: 1.0,
            enabled: true,
        }
    }
}

fn invalid(msg: String) -> Result<(), OrbitError> {
    Err(OrbitError::InvalidOptions(msg))
}

impl OrbitOptions {
    /// Check the limit and speed invariants. A zero `min_distance` is
    /// rejected because the spherical decomposition is undefined at the
    /// target itself.
    pub fn validate(&self) -> Result<(), OrbitError> {
        if !(self.min_distance > 0.0 && self.min_distance.is_finite()) {
            return invalid(format!(
                "min_distance must be finite and > 0, got {}",
                self.min_distance
            ));
        }
        if !(self.max_distance >= self.min_distance
            && self.max_distance.is_finite())
        {
            return invalid(format!(
                "max_distance must be finite and >= min_distance ({}), \
                 got {}",
                self.min_distance, self.max_distance
            ));
        }
        for (name, angle) in [
            ("min_polar_angle", self.min_polar_angle),
            ("max_polar_angle", self.max_polar_angle),
        ] {
            if !(0.0..=PI).contains(&angle) {
                return invalid(format!(
                    "{name} must be in [0, π], got {angle}"
                ));
            }
        }
        if self.min_polar_angle >= self.max_polar_angle {
            return invalid(format!(
                "min_polar_angle ({}) must be below max_polar_angle ({})",
                self.min_polar_angle, self.max_polar_angle
            ));
        }
        // The pole clamp keeps phi inside (ε, π - ε); the range has to
        // reach into that band.
        if self.max_polar_angle <= POLE_EPSILON {
            return invalid(format!(
                "max_polar_angle must exceed {POLE_EPSILON}, got {}",
                self.max_polar_angle
            ));
        }
        if self.min_polar_angle >= PI - POLE_EPSILON {
            return invalid(format!(
                "min_polar_angle must be below π - {POLE_EPSILON}, got {}",
                self.min_polar_angle
            ));
        }
        for (name, speed) in [
            ("rotate_speed", self.rotate_speed),
            ("pan_speed", self.pan_speed),
            ("zoom_speed", self.zoom_speed),
        ] {
            if !(speed > 0.0 && speed.is_finite()) {
                return invalid(format!(
                    "{name} must be finite and > 0, got {speed}"
                ));
            }
        }
        Ok(())
    }

    /// Multiplicative radius step for one zoom event.
    #[must_use]
    pub fn zoom_scale(&self) -> f32 {
        0.95_f32.powf(self.zoom_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejects(opts: &OrbitOptions, field: &str) {
        match opts.validate() {
            Err(OrbitError::InvalidOptions(msg)) => {
                assert!(msg.contains(field), "{msg}");
            }
            other => panic!("expected rejection of {field}, got {other:?}"),
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(OrbitOptions::default().validate().is_ok());
    }

    #[test]
    fn distance_limits() {
        let base = OrbitOptions::default();
        let zero = OrbitOptions {
            min_distance: 0.0,
            ..base.clone()
        };
        rejects(&zero, "min_distance");
        let nan = OrbitOptions {
            min_distance: f32::NAN,
            ..base.clone()
        };
        rejects(&nan, "min_distance");
        let inverted = OrbitOptions {
            min_distance: 50.0,
            max_distance: 20.0,
            ..base.clone()
        };
        rejects(&inverted, "max_distance");
        let equal = OrbitOptions {
            min_distance: 20.0,
            max_distance: 20.0,
            ..base
        };
        assert!(equal.validate().is_ok());
    }

    fn polar(min: f32, max: f32) -> OrbitOptions {
        OrbitOptions {
            min_polar_angle: min,
            max_polar_angle: max,
            ..OrbitOptions::default()
        }
    }

    #[test]
    fn polar_limits() {
        rejects(&polar(-0.1, 1.0), "min_polar_angle");
        rejects(&polar(0.0, 4.0), "max_polar_angle");
        rejects(&polar(1.0, 0.5), "must be below max_polar_angle");
        assert!(polar(0.0, PI).validate().is_ok());
        assert!(polar(PI - 1e-3, PI).validate().is_ok());
    }

    #[test]
    fn polar_range_must_be_open() {
        rejects(&polar(1.0, 1.0), "must be below max_polar_angle");
        rejects(&polar(PI, PI), "min_polar_angle");
        rejects(&polar(0.0, 0.0), "min_polar_angle");
    }

    #[test]
    fn polar_range_must_reach_past_the_poles() {
        rejects(&polar(0.0, 1e-7), "max_polar_angle must exceed");
        rejects(&polar(PI - 5e-7, PI), "min_polar_angle must be below π");
    }

    #[test]
    fn speeds_must_be_positive() {
        let base = OrbitOptions::default();
        let rotate = OrbitOptions {
            rotate_speed: 0.0,
            ..base.clone()
        };
        rejects(&rotate, "rotate_speed");
        let pan = OrbitOptions {
            pan_speed: -1.0,
            ..base.clone()
        };
        rejects(&pan, "pan_speed");
        let zoom = OrbitOptions {
            zoom_speed: f32::INFINITY,
            ..base
        };
        rejects(&zoom, "zoom_speed");
    }

    #[test]
    fn zoom_scale_follows_speed() {
        assert!((OrbitOptions::default().zoom_scale() - 0.95).abs() < 1e-6);
        let fast = OrbitOptions {
            zoom_speed: 2.0,
            ..OrbitOptions::default()
        };
        assert!((fast.zoom_scale() - 0.9025).abs() < 1e-6);
    }
}
