//! Local transform of a scene node.
//!
//! Rotation is kept as XYZ Euler angles because the animation writes single
//! axes (yaw of the group, roll of the beam) directly.

use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Position relative to the parent node
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Matrix taking local coordinates into the parent's space.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn default_is_identity() {
        assert!(Transform::default()
            .local_matrix()
            .abs_diff_eq(Mat4::IDENTITY, EPSILON));
    }

    #[test]
    fn roll_of_half_pi_lays_y_axis_along_negative_x() {
        let t = Transform::new().with_rotation(Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2));
        let tip = t.local_matrix().transform_point3(Vec3::Y);
        assert!(tip.abs_diff_eq(Vec3::NEG_X, EPSILON));
    }

    #[test]
    fn scale_applies_before_translation() {
        let t = Transform::new()
            .with_position(Vec3::new(1.0, 0.0, 0.0))
            .with_scale(Vec3::splat(2.0));
        let p = t.local_matrix().transform_point3(Vec3::new(0.0, 1.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(1.0, 2.0, 0.0), EPSILON));
    }
}
