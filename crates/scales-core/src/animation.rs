//! Per-tick scene motion.
//!
//! Everything here is a function of elapsed time and the current pointer,
//! except the camera which eases from where it was on the previous tick.

use crate::constants::*;
use crate::input::PointerState;
use crate::scene::Scene;
use std::f32::consts::{FRAC_PI_2, PI};

/// Slow sway plus linear pointer parallax.
#[inline]
pub fn group_yaw(t: f32, pointer_x: f32) -> f32 {
    (t * SWAY_FREQUENCY).sin() * SWAY_AMPLITUDE + pointer_x * POINTER_YAW_GAIN
}

/// Vertical offsets of the left and right pans; always sum to `2 * PAN_REST_Y`.
#[inline]
pub fn pan_heights(t: f32) -> (f32, f32) {
    let phase = t * PAN_BOB_FREQUENCY;
    (
        PAN_REST_Y + phase.sin() * PAN_BOB_AMPLITUDE,
        PAN_REST_Y + (phase + PI).sin() * PAN_BOB_AMPLITUDE,
    )
}

/// Beam roll, in phase with the pan bob.
#[inline]
pub fn beam_roll(t: f32) -> f32 {
    FRAC_PI_2 + (t * PAN_BOB_FREQUENCY).sin() * BEAM_TILT_AMPLITUDE
}

#[inline]
pub fn camera_goal(pointer: PointerState) -> glam::Vec2 {
    pointer.as_vec2() * CAMERA_PARALLAX
}

/// Apply one tick of motion at `t` seconds since the loop started.
///
/// Rendering the frame is the caller's job.
pub fn tick(scene: &mut Scene, pointer: PointerState, t: f32) {
    let assembly = &mut scene.assembly;
    assembly.transform.rotation.y = group_yaw(t, pointer.x());

    let (left_y, right_y) = pan_heights(t);
    assembly.left_pan.transform.position.y = left_y;
    assembly.right_pan.transform.position.y = right_y;

    assembly.beam.transform.rotation.z = beam_roll(t);

    scene.camera.ease_toward(camera_goal(pointer), CAMERA_EASE_PER_TICK);
    scene.camera.target = glam::Vec3::ZERO;

    scene.particles.rotation_y = t * PARTICLE_SPIN_RATE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneOptions;

    #[test]
    fn at_rest_pans_are_level_and_beam_horizontal() {
        let (l, r) = pan_heights(0.0);
        assert!((l - PAN_REST_Y).abs() < 1e-6 && (r - PAN_REST_Y).abs() < 1e-6);
        assert!((beam_roll(0.0) - FRAC_PI_2).abs() < 1e-6);
        assert_eq!(group_yaw(0.0, 0.0), 0.0);
    }

    #[test]
    fn tick_writes_every_animated_property() {
        let mut scene = Scene::new(&SceneOptions::default());
        let pointer = PointerState::new(1.0, -1.0);
        tick(&mut scene, pointer, 2.0);
        let a = &scene.assembly;
        assert!((a.transform.rotation.y - group_yaw(2.0, 1.0)).abs() < 1e-6);
        assert!((a.beam.transform.rotation.z - beam_roll(2.0)).abs() < 1e-6);
        assert!((scene.particles.rotation_y - 0.1).abs() < 1e-6);
        assert!((scene.camera.eye.x - 0.025).abs() < 1e-6);
        assert!((scene.camera.eye.y + 0.025).abs() < 1e-6);
        assert_eq!(scene.camera.eye.z, 15.0);
    }
}
