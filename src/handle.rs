use crate::constants::DEFAULT_THEME;
use glam::Vec3;
use scales_core::{Clock, Scene, SurfaceSize, ThemeBridge, ViewportMode};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Everything the frame loop and the event closures share.
pub(crate) struct SceneState {
    pub scene: Scene,
    pub theme: ThemeBridge,
    pub surface: SurfaceSize,
    pub mode: Option<ViewportMode>,
}

/// Handle to a mounted scene, returned to JS by `boot`.
#[wasm_bindgen]
#[derive(Clone)]
pub struct SceneHandle {
    state: Rc<RefCell<SceneState>>,
    clock: Clock,
}

impl SceneHandle {
    pub(crate) fn new(scene: Scene) -> Self {
        Self {
            state: Rc::new(RefCell::new(SceneState {
                scene,
                theme: ThemeBridge::new(),
                surface: SurfaceSize {
                    width: 1,
                    height: 1,
                },
                mode: None,
            })),
            clock: Clock::start(),
        }
    }

    pub(crate) fn state(&self) -> &Rc<RefCell<SceneState>> {
        &self.state
    }

    /// Seconds on the clock theme tweens are timed against.
    pub(crate) fn now(&self) -> f32 {
        self.clock.elapsed_secs()
    }

    pub(crate) fn particle_positions(&self) -> Vec<Vec3> {
        self.state.borrow().scene.particles.positions().to_vec()
    }
}

#[wasm_bindgen]
impl SceneHandle {
    /// Start the Base material tween toward `name`'s tone.
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&self, name: &str) {
        let now = self.now();
        let mut guard = self.state.borrow_mut();
        let SceneState { scene, theme, .. } = &mut *guard;
        theme.set_theme(&mut scene.materials, name, now);
    }

    pub fn theme(&self) -> String {
        self.state
            .borrow()
            .theme
            .theme()
            .map(|t| t.as_str())
            .unwrap_or(DEFAULT_THEME)
            .to_string()
    }
}
