use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(
        title = "Field of View",
        range(min = 20.0, max = 90.0),
        extend("step" = 1.0)
    )]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Semantic up direction; the orbit's pole axis.
    #[schemars(skip)]
    pub up: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 10000.0,
            up: [0.0, 1.0, 0.0],
        }
    }
}

impl CameraOptions {
    /// Reject projections that would produce a degenerate matrix.
    pub fn validate(&self) -> Result<(), OrbitError> {
        if !(self.fovy > 0.0 && self.fovy < 180.0) {
            return Err(OrbitError::InvalidOptions(format!(
                "fovy must be in (0, 180) degrees, got {}",
                self.fovy
            )));
        }
        if !(self.znear > 0.0 && self.zfar > self.znear)
            || !self.zfar.is_finite()
        {
            return Err(OrbitError::InvalidOptions(format!(
                "clip planes must satisfy 0 < znear < zfar, got {} / {}",
                self.znear, self.zfar
            )));
        }
        let up_len_sq: f32 = self.up.iter().map(|c| c * c).sum();
        if !(up_len_sq.is_finite() && up_len_sq > 0.0) {
            return Err(OrbitError::InvalidOptions(format!(
                "up must be a finite non-zero vector, got {:?}",
                self.up
            )));
        }
        Ok(())
    }
}
