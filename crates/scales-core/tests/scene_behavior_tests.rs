// Host-side tests for the scene's observable behavior: animation invariants,
// responsive layout, theme transitions and the absent-surface contract.

use glam::Vec3;
use scales_core::animation::{self, camera_goal, group_yaw, pan_heights};
use scales_core::constants::PAN_REST_Y;
use scales_core::layout::{self, ContainerBounds, ViewportMode};
use scales_core::{build, MaterialId, PointerState, Scene, SceneOptions, Theme, ThemeBridge};

const EPSILON: f32 = 1e-5;

fn scene() -> Scene {
    Scene::new(&SceneOptions::default())
}

#[test]
fn pans_move_in_exact_antiphase() {
    let mut t = 0.0_f32;
    while t < 60.0 {
        let (left, right) = pan_heights(t);
        assert!(
            (left + right - 2.0 * PAN_REST_Y).abs() < EPSILON,
            "t={t}: {left} + {right}"
        );
        t += 0.037;
    }
}

#[test]
fn antiphase_holds_on_the_scene_after_ticks() {
    let mut s = scene();
    for i in 0..120 {
        let t = i as f32 / 60.0;
        animation::tick(&mut s, PointerState::default(), t);
        let sum = s.assembly.left_pan.transform.position.y + s.assembly.right_pan.transform.position.y;
        assert!((sum - 2.0 * PAN_REST_Y).abs() < EPSILON);
    }
}

#[test]
fn yaw_and_camera_goal_are_continuous_over_the_pointer_square() {
    let steps = 40;
    let h = 2.0 / steps as f32;
    for i in 0..=steps {
        for j in 0..=steps {
            let x = -1.0 + i as f32 * h;
            let y = -1.0 + j as f32 * h;
            let p = PointerState::new(x, y);
            let nx = PointerState::new((x + h).min(1.0), y);
            // Lipschitz bound: both maps are linear in the pointer with gain 0.5
            assert!((group_yaw(3.0, p.x()) - group_yaw(3.0, nx.x())).abs() <= 0.5 * h + EPSILON);
            assert!((camera_goal(p) - camera_goal(nx)).length() <= 0.5 * h + EPSILON);
        }
    }
    // approaching the boundary from inside lands on the boundary value
    let edge = camera_goal(PointerState::new(1.0, -1.0));
    let near = camera_goal(PointerState::new(1.0 - 1e-4, -1.0 + 1e-4));
    assert!((edge - near).length() < 1e-3);
}

#[test]
fn resize_twice_with_same_bounds_is_idempotent() {
    let mut s = scene();
    let bounds = ContainerBounds::new(1280.0, 720.0);
    let first = layout::on_resize(&mut s, bounds, 1.0);
    let snapshot = (s.assembly.clone(), s.camera.clone());
    let second = layout::on_resize(&mut s, bounds, 1.0);
    assert_eq!(first, second);
    assert_eq!(snapshot.1, s.camera);
    assert_eq!(snapshot.0.transform, s.assembly.transform);
    assert_eq!(snapshot.0.beam.transform, s.assembly.beam.transform);
    assert_eq!(snapshot.0.left_pan.transform, s.assembly.left_pan.transform);
    assert_eq!(snapshot.0.right_pan.transform, s.assembly.right_pan.transform);
}

#[test]
fn mode_boundary_is_at_992() {
    let mut s = scene();
    let out = layout::on_resize(&mut s, ContainerBounds::new(991.0, 800.0), 1.0);
    assert_eq!(out.mode, ViewportMode::Mobile);
    assert_eq!(s.assembly.transform.position, Vec3::new(0.0, 4.5, 0.0));
    assert_eq!(s.assembly.transform.scale, Vec3::ONE);
    assert_eq!(s.assembly.beam.transform.scale.y, 1.5);
    assert_eq!(s.assembly.left_pan.transform.position.x, -4.0);
    assert_eq!(s.assembly.right_pan.transform.position.x, 4.0);

    let out = layout::on_resize(&mut s, ContainerBounds::new(992.0, 800.0), 1.0);
    assert_eq!(out.mode, ViewportMode::Desktop);
    assert_eq!(s.assembly.transform.position, Vec3::new(12.5, 2.0, 0.0));
    assert_eq!(s.assembly.transform.scale, Vec3::splat(1.6));
    assert_eq!(s.assembly.beam.transform.scale.x, 1.0);
    assert_eq!(s.assembly.left_pan.transform.position.x, -2.8);
    assert_eq!(s.assembly.right_pan.transform.position.x, 2.8);
}

#[test]
fn desktop_does_not_undo_mobile_beam_elongation() {
    // Desktop only resets the beam's X scale, so a Mobile -> Desktop switch
    // keeps the Y elongation.
    let mut s = scene();
    layout::on_resize(&mut s, ContainerBounds::new(600.0, 800.0), 1.0);
    layout::on_resize(&mut s, ContainerBounds::new(1600.0, 800.0), 1.0);
    assert_eq!(s.assembly.beam.transform.scale, Vec3::new(1.0, 1.5, 1.0));
}

#[test]
fn group_transform_depends_only_on_mode() {
    let mut a = scene();
    let mut b = scene();
    layout::on_resize(&mut a, ContainerBounds::new(1000.0, 300.0), 1.0);
    layout::on_resize(&mut b, ContainerBounds::new(2560.0, 1440.0), 2.0);
    assert_eq!(a.assembly.transform, b.assembly.transform);
}

#[test]
fn theme_round_trip_restores_light_tone() {
    let mut s = scene();
    let mut bridge = ThemeBridge::new();
    bridge.set_theme(&mut s.materials, "light", 0.0);
    bridge.update(&mut s.materials, 0.6);
    let light = s.materials.get(MaterialId::Base).color;

    bridge.set_theme(&mut s.materials, "dark", 0.6);
    bridge.update(&mut s.materials, 1.2);
    assert!(
        s.materials
            .get(MaterialId::Base)
            .color
            .max_channel_delta(Theme::Dark.base_tone())
            < 1e-6
    );

    bridge.set_theme(&mut s.materials, "light", 1.2);
    bridge.update(&mut s.materials, 1.8);
    assert!(s.materials.get(MaterialId::Base).color.max_channel_delta(light) < 1e-6);
}

#[test]
fn malformed_theme_behaves_like_dark() {
    let mut s = scene();
    let mut bridge = ThemeBridge::new();
    let chosen = bridge.set_theme(&mut s.materials, "<script>", 0.0);
    assert_eq!(chosen, Theme::Dark);
    bridge.update(&mut s.materials, 0.5);
    assert_eq!(
        s.materials.get(MaterialId::Base).color,
        Theme::Dark.base_tone()
    );
}

#[test]
fn full_hd_light_scenario() {
    let handles = build(Some("hero"), Some("canvas"), &SceneOptions::default());
    let Some(mut handles) = handles else {
        panic!("scene should build when container and surface exist");
    };
    let s = &mut handles.scene;
    let mut bridge = ThemeBridge::new();

    bridge.set_theme(&mut s.materials, "light", 0.0);
    let out = layout::on_resize(s, ContainerBounds::new(1920.0, 1080.0), 1.0);
    animation::tick(s, PointerState::default(), 0.0);

    assert_eq!(out.mode, ViewportMode::Desktop);
    assert_eq!(s.assembly.transform.position, Vec3::new(12.5, 2.0, 0.0));
    assert_eq!(s.assembly.transform.scale, Vec3::splat(1.6));
    assert_eq!(s.assembly.left_pan.transform.position.x, -2.8);
    assert_eq!(s.assembly.right_pan.transform.position.x, 2.8);
    assert_eq!(s.assembly.beam.transform.scale.x, 1.0);
    assert!((s.camera.aspect - 1920.0 / 1080.0).abs() < EPSILON);

    assert!(bridge.update(&mut s.materials, 0.25));
    assert!(!bridge.update(&mut s.materials, 0.5));
    assert_eq!(
        s.materials.get(MaterialId::Base).color,
        Theme::Light.base_tone()
    );
}

#[test]
fn absent_container_or_surface_builds_nothing() {
    let opts = SceneOptions::default();
    assert!(build::<&str, &str>(None, Some("canvas"), &opts).is_none());
    assert!(build::<&str, &str>(Some("hero"), None, &opts).is_none());
    assert!(build::<&str, &str>(None, None, &opts).is_none());
}

#[test]
fn camera_parallax_settles_on_half_the_pointer() {
    let mut s = scene();
    let pointer = PointerState::from_client(1920.0, 0.0, 1920.0, 1080.0);
    for i in 0..600 {
        animation::tick(&mut s, pointer, i as f32 / 60.0);
    }
    assert!((s.camera.eye.x - 0.5).abs() < 1e-3);
    assert!((s.camera.eye.y - 0.5).abs() < 1e-3);
    assert_eq!(s.camera.target, Vec3::ZERO);
}
