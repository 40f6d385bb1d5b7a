//! Perspective camera with pointer-driven parallax.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_START};
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn perspective(aspect: f32) -> Self {
        Self {
            eye: Vec3::from(CAMERA_START),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Move the eye's X/Y a fixed fraction of the way toward `goal`.
    ///
    /// The step is per call, not per second, so the approach speed follows
    /// the tick rate. Z is left untouched.
    pub fn ease_toward(&mut self, goal: Vec2, factor: f32) {
        self.eye.x += (goal.x - self.eye.x) * factor;
        self.eye.y += (goal.y - self.eye.y) * factor;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::perspective(1.0)
    }
}
