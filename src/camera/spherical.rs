use std::f32::consts::PI;

use glam::Vec3;

/// Distance the polar angle keeps from either pole after
/// [`Spherical::make_safe`].
pub const POLE_EPSILON: f32 = 1e-6;

/// Spherical coordinates around a +Y pole axis.
///
/// `phi` is measured from +Y (0 = straight up, π = straight down) and
/// `theta` is the azimuth `atan2(x, z)`, so `theta = 0` points along +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Distance from the origin.
    pub radius: f32,
    /// Polar angle from +Y in radians.
    pub phi: f32,
    /// Azimuth around +Y in radians.
    pub theta: f32,
}

impl Spherical {
    /// Construct from explicit components.
    #[must_use]
    pub const fn new(radius: f32, phi: f32, theta: f32) -> Self {
        Self { radius, phi, theta }
    }

    /// Decompose a cartesian offset.
    ///
    /// The zero vector maps to `(0, 0, 0)` instead of NaN angles.
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    /// Rebuild the cartesian offset.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Keep `phi` strictly inside `(0, π)` so a look-at along the pole
    /// axis can never happen.
    pub fn make_safe(&mut self) {
        self.phi = self.phi.clamp(POLE_EPSILON, PI - POLE_EPSILON);
    }
}
