//! Pointer tracking in viewport-normalized coordinates.

use glam::Vec2;

/// Pointer position normalized to [-1, 1] on both axes, Y up.
///
/// Fields are private so every value passes through the clamp.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    x: f32,
    y: f32,
}

impl PointerState {
    /// Already-normalized coordinates; clamped to [-1, 1], non-finite axes
    /// map to the centre.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
        }
    }

    /// Normalize client coordinates against the viewport size.
    ///
    /// Out-of-viewport coordinates are clamped; a degenerate viewport or
    /// non-finite input maps that axis to the centre.
    pub fn from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        Self {
            x: normalize_axis(client_x, width),
            y: -normalize_axis(client_y, height),
        }
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.y
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

#[inline]
fn normalize_axis(value: f32, extent: f32) -> f32 {
    if !value.is_finite() || !extent.is_finite() || extent <= 0.0 {
        return 0.0;
    }
    clamp_unit((value / extent) * 2.0 - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_unit_square() {
        let tl = PointerState::from_client(0.0, 0.0, 800.0, 600.0);
        assert_eq!((tl.x, tl.y), (-1.0, 1.0));
        let br = PointerState::from_client(800.0, 600.0, 800.0, 600.0);
        assert_eq!((br.x, br.y), (1.0, -1.0));
        let mid = PointerState::from_client(400.0, 300.0, 800.0, 600.0);
        assert_eq!((mid.x, mid.y), (0.0, 0.0));
    }

    #[test]
    fn outside_and_degenerate_input_is_contained() {
        let far = PointerState::from_client(5000.0, -300.0, 800.0, 600.0);
        assert_eq!((far.x, far.y), (1.0, 1.0));
        let nan = PointerState::from_client(f32::NAN, 10.0, 800.0, 0.0);
        assert_eq!((nan.x, nan.y), (0.0, 0.0));
    }

    #[test]
    fn direct_construction_is_clamped_too() {
        let p = PointerState::new(3.0, -7.5);
        assert_eq!((p.x(), p.y()), (1.0, -1.0));
        let q = PointerState::new(f32::INFINITY, 0.25);
        assert_eq!((q.x(), q.y()), (0.0, 0.25));
        assert_eq!(PointerState::new(-0.5, 0.5).as_vec2(), Vec2::new(-0.5, 0.5));
    }
}
