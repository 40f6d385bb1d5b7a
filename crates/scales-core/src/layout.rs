//! Responsive layout: camera aspect, surface size and the Mobile/Desktop
//! placement of the scales group.

use crate::constants::{MAX_PIXEL_RATIO, MOBILE_BREAKPOINT};
use crate::scene::Scene;
use glam::Vec3;

/// CSS-pixel size of the element hosting the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerBounds {
    pub width: f32,
    pub height: f32,
}

impl ContainerBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

/// Backing-store size of the drawing surface in physical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn from_bounds(bounds: ContainerBounds, device_pixel_ratio: f32) -> Self {
        let ratio = effective_pixel_ratio(device_pixel_ratio);
        let px = |css: f32| ((css.max(0.0) * ratio) as u32).max(1);
        Self {
            width: px(bounds.width),
            height: px(bounds.height),
        }
    }
}

/// Device pixel ratio capped at [`MAX_PIXEL_RATIO`]; unusable values fall back to 1.
pub fn effective_pixel_ratio(device_pixel_ratio: f32) -> f32 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportMode {
    Mobile,
    Desktop,
}

impl ViewportMode {
    pub fn classify(width: f32) -> Self {
        if width < MOBILE_BREAKPOINT {
            ViewportMode::Mobile
        } else {
            ViewportMode::Desktop
        }
    }

    pub fn preset(self) -> &'static LayoutPreset {
        match self {
            ViewportMode::Mobile => &MOBILE_LAYOUT,
            ViewportMode::Desktop => &DESKTOP_LAYOUT,
        }
    }
}

/// How a mode touches the beam's scale. Mobile lengthens the beam along its
/// own axis; Desktop only resets the X component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BeamAdjust {
    ScaleY(f32),
    ScaleX(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutPreset {
    pub group_position: Vec3,
    pub group_scale: Vec3,
    pub beam: BeamAdjust,
    /// Pans sit at -offset and +offset on X
    pub pan_offset_x: f32,
}

pub const MOBILE_LAYOUT: LayoutPreset = LayoutPreset {
    group_position: Vec3::new(0.0, 4.5, 0.0),
    group_scale: Vec3::ONE,
    beam: BeamAdjust::ScaleY(1.5),
    pan_offset_x: 4.0,
};

pub const DESKTOP_LAYOUT: LayoutPreset = LayoutPreset {
    group_position: Vec3::new(12.5, 2.0, 0.0),
    group_scale: Vec3::splat(1.6),
    beam: BeamAdjust::ScaleX(1.0),
    pan_offset_x: 2.8,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeOutcome {
    pub mode: ViewportMode,
    pub surface: SurfaceSize,
}

/// Recompute camera aspect, surface size and group layout for new bounds.
///
/// Calling this twice with the same input leaves the scene unchanged the
/// second time.
pub fn on_resize(scene: &mut Scene, bounds: ContainerBounds, device_pixel_ratio: f32) -> ResizeOutcome {
    scene.camera.aspect = bounds.aspect();
    let mode = ViewportMode::classify(bounds.width);
    apply_preset(scene, mode.preset());
    let surface = SurfaceSize::from_bounds(bounds, device_pixel_ratio);
    log::debug!(
        "[layout] {:.0}x{:.0} -> {:?}, surface {}x{}",
        bounds.width,
        bounds.height,
        mode,
        surface.width,
        surface.height
    );
    ResizeOutcome { mode, surface }
}

fn apply_preset(scene: &mut Scene, preset: &LayoutPreset) {
    let assembly = &mut scene.assembly;
    assembly.transform.position = preset.group_position;
    assembly.transform.scale = preset.group_scale;
    match preset.beam {
        BeamAdjust::ScaleY(y) => assembly.beam.transform.scale.y = y,
        BeamAdjust::ScaleX(x) => assembly.beam.transform.scale.x = x,
    }
    assembly.left_pan.transform.position.x = -preset.pan_offset_x;
    assembly.right_pan.transform.position.x = preset.pan_offset_x;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_strict() {
        assert_eq!(ViewportMode::classify(991.0), ViewportMode::Mobile);
        assert_eq!(ViewportMode::classify(991.9), ViewportMode::Mobile);
        assert_eq!(ViewportMode::classify(992.0), ViewportMode::Desktop);
    }

    #[test]
    fn pixel_ratio_is_capped() {
        let b = ContainerBounds::new(100.0, 50.0);
        assert_eq!(
            SurfaceSize::from_bounds(b, 3.0),
            SurfaceSize {
                width: 200,
                height: 100
            }
        );
        assert_eq!(
            SurfaceSize::from_bounds(b, 1.5),
            SurfaceSize {
                width: 150,
                height: 75
            }
        );
        assert_eq!(effective_pixel_ratio(f32::NAN), 1.0);
    }

    #[test]
    fn empty_bounds_still_give_a_drawable_surface() {
        let s = SurfaceSize::from_bounds(ContainerBounds::new(0.0, 0.0), 2.0);
        assert_eq!((s.width, s.height), (1, 1));
        assert!(ContainerBounds::new(300.0, 0.0).aspect().is_finite());
    }
}
