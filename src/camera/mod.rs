//! Camera system for orbiting a focus point.
//!
//! Provides the camera abstraction the controller drives, a perspective
//! camera implementing it, spherical-coordinate math, and the orbit
//! controller itself.

/// Orbit controller: input accumulation and pose recomputation.
pub mod controller;
/// Camera abstraction and the concrete perspective camera.
pub mod core;
/// Spherical coordinates with pole-safe clamping.
pub mod spherical;

pub use controller::{OrbitController, PendingDelta};
pub use self::core::{Camera, CameraRig};
pub use spherical::{Spherical, POLE_EPSILON};
