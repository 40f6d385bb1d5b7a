//! Theme-driven material colors.
//!
//! Only the base material changes between themes; gold and silver are
//! re-asserted on every switch. The base color eases from whatever it shows
//! now toward the theme's tone over [`THEME_TRANSITION_SEC`].

use crate::color::{ease_out_quad, Rgb};
use crate::constants::{BASE_DARK_HEX, BASE_LIGHT_HEX, THEME_TRANSITION_SEC};
use crate::material::{gold, silver, MaterialId, Materials};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// `"light"` selects the light theme; every other name selects dark.
    pub fn from_name(name: &str) -> Self {
        if name == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn base_tone(self) -> Rgb {
        match self {
            Theme::Light => Rgb::from_hex(BASE_LIGHT_HEX),
            Theme::Dark => Rgb::from_hex(BASE_DARK_HEX),
        }
    }
}

/// Eased interpolation between two colors over a fixed time window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorTween {
    pub from: Rgb,
    pub to: Rgb,
    pub start_sec: f32,
    pub duration_sec: f32,
}

impl ColorTween {
    fn progress(&self, now_sec: f32) -> f32 {
        if self.duration_sec <= 0.0 {
            return 1.0;
        }
        ((now_sec - self.start_sec) / self.duration_sec).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_sec: f32) -> Rgb {
        let p = self.progress(now_sec);
        if p >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, ease_out_quad(p))
    }

    pub fn is_finished(&self, now_sec: f32) -> bool {
        self.progress(now_sec) >= 1.0
    }
}

#[derive(Clone, Debug)]
pub struct ThemeBridge {
    theme: Option<Theme>,
    tween: Option<ColorTween>,
    duration_sec: f32,
}

impl Default for ThemeBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeBridge {
    pub fn new() -> Self {
        Self::with_duration(THEME_TRANSITION_SEC)
    }

    pub fn with_duration(duration_sec: f32) -> Self {
        Self {
            theme: None,
            tween: None,
            duration_sec,
        }
    }

    /// Last theme requested, if any.
    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    pub fn is_transitioning(&self) -> bool {
        self.tween.is_some()
    }

    /// Start a transition toward the palette for `name`.
    pub fn set_theme(&mut self, materials: &mut Materials, name: &str, now_sec: f32) -> Theme {
        let theme = Theme::from_name(name);
        // bring an in-flight tween up to date so the new one starts from what is shown
        self.update(materials, now_sec);
        materials.get_mut(MaterialId::Gold).color = gold();
        materials.get_mut(MaterialId::Silver).color = silver();
        self.tween = Some(ColorTween {
            from: materials.get(MaterialId::Base).color,
            to: theme.base_tone(),
            start_sec: now_sec,
            duration_sec: self.duration_sec,
        });
        if self.theme != Some(theme) {
            log::info!("[theme] -> {}", theme.as_str());
        }
        self.theme = Some(theme);
        theme
    }

    /// Advance the transition. Returns `true` while it is still running.
    pub fn update(&mut self, materials: &mut Materials, now_sec: f32) -> bool {
        let Some(tween) = self.tween else {
            return false;
        };
        materials.get_mut(MaterialId::Base).color = tween.sample(now_sec);
        if tween.is_finished(now_sec) {
            self.tween = None;
            return false;
        }
        true
    }
}
