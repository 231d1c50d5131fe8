use glam::{Mat3, Mat4, Quat, Vec3};

use crate::options::CameraOptions;

/// What the orbit controller needs from a camera.
///
/// Implemented by [`Camera`]; hosts with their own camera type can
/// implement it directly and hand that to
/// [`OrbitController`](super::controller::OrbitController).
pub trait CameraRig {
    /// World-space position.
    fn position(&self) -> Vec3;
    /// Move the camera without changing its orientation.
    fn set_position(&mut self, position: Vec3);
    /// Orient the camera so it faces `target`, using [`up`](Self::up) as
    /// the up reference.
    fn look_at(&mut self, target: Vec3);
    /// Vertical field of view in degrees.
    fn fovy(&self) -> f32;
    /// Semantic up direction (not necessarily normalized).
    fn up(&self) -> Vec3;
    /// First and second columns of the world matrix: local right and
    /// local up in world space.
    fn world_basis(&self) -> (Vec3, Vec3);
}

/// Perspective camera defined by eye position, orientation, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// World rotation; the camera looks down its local -Z.
    pub orientation: Quat,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default(), 16.0 / 9.0)
    }
}

impl Camera {
    /// Canonical vantage point used on construction and by reset.
    pub const HOME: Vec3 = Vec3::new(0.0, 50.0, 100.0);

    /// Build a camera at [`Self::HOME`] looking at the origin.
    #[must_use]
    pub fn from_options(options: &CameraOptions, aspect: f32) -> Self {
        let mut camera = Self {
            eye: Self::HOME,
            orientation: Quat::IDENTITY,
            up: Vec3::from_array(options.up),
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        camera.look_at(Vec3::ZERO);
        camera
    }

    /// Direction the camera faces.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Camera-to-world transform.
    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.eye)
    }

    /// World-to-camera transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    /// Get just the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.view_matrix()
    }
}

impl CameraRig for Camera {
    fn position(&self) -> Vec3 {
        self.eye
    }

    fn set_position(&mut self, position: Vec3) {
        self.eye = position;
    }

    fn look_at(&mut self, target: Vec3) {
        let back = (self.eye - target).normalize_or_zero();
        let right = self.up.cross(back).normalize_or_zero();
        // Eye on the target, or view direction parallel to up: no unique
        // basis, keep the previous one.
        if back == Vec3::ZERO || right == Vec3::ZERO {
            return;
        }
        let up = back.cross(right);
        self.orientation =
            Quat::from_mat3(&Mat3::from_cols(right, up, back)).normalize();
    }

    fn fovy(&self) -> f32 {
        self.fovy
    }

    fn up(&self) -> Vec3 {
        self.up
    }

    fn world_basis(&self) -> (Vec3, Vec3) {
        (self.orientation * Vec3::X, self.orientation * Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_faces_origin() {
        let camera = Camera::default();
        let expected = (Vec3::ZERO - Camera::HOME).normalize();
        assert!((camera.forward() - expected).length() < 1e-5);
    }

    #[test]
    fn view_matrix_puts_target_on_negative_z() {
        let camera = Camera::default();
        let p = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!(p.x.abs() < 1e-3 && p.y.abs() < 1e-3);
        assert!((p.z + Camera::HOME.length()).abs() < 1e-3);
    }

    #[test]
    fn basis_is_orthonormal_and_level() {
        let camera = Camera::default();
        let (right, up) = camera.world_basis();
        assert!((right.length() - 1.0).abs() < 1e-5);
        assert!((up.length() - 1.0).abs() < 1e-5);
        assert!(right.dot(up).abs() < 1e-5);
        // No roll: right stays in the horizontal plane.
        assert!(right.y.abs() < 1e-5);
    }

    #[test]
    fn look_along_up_keeps_previous_orientation() {
        let mut camera = Camera::default();
        let before = camera.orientation;
        camera.eye = Vec3::new(0.0, 10.0, 0.0);
        camera.look_at(Vec3::ZERO);
        assert_eq!(camera.orientation, before);
    }

    #[test]
    fn matrices_are_finite() {
        let m = Camera::default().build_matrix();
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
