use crate::handle::{SceneHandle, SceneState};
use glam::Vec3;
use scales_core::{animation, Clock, PointerState};
use scales_render::{RenderError, Renderer, SurfaceRecovery};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    handle: SceneHandle,
    pointer: Rc<Cell<PointerState>>,
    renderer: Renderer<'static>,
    started: Clock,
}

impl FrameContext {
    pub fn new(
        handle: SceneHandle,
        pointer: Rc<Cell<PointerState>>,
        renderer: Renderer<'static>,
    ) -> Self {
        Self {
            handle,
            pointer,
            renderer,
            started: Clock::start(),
        }
    }

    /// Advance and draw one frame. Returns `false` once the loop must stop.
    pub fn frame(&mut self) -> bool {
        let theme_now = self.handle.now();
        let t = self.started.elapsed_secs();
        let state = self.handle.state().clone();
        let mut guard = state.borrow_mut();
        let SceneState {
            scene,
            theme,
            surface,
            ..
        } = &mut *guard;

        theme.update(&mut scene.materials, theme_now);
        animation::tick(scene, self.pointer.get(), t);

        self.renderer.resize_if_needed(surface.width, surface.height);
        let Err(e) = self.renderer.render(scene) else {
            return true;
        };
        match SurfaceRecovery::for_error(&e) {
            SurfaceRecovery::Reconfigure => {
                self.renderer.reconfigure();
                true
            }
            SurfaceRecovery::Skip => {
                log::warn!("render error: {:?}", e);
                true
            }
            SurfaceRecovery::Stop => {
                log::error!("render error: {:?}; stopping the frame loop", e);
                false
            }
        }
    }
}

pub async fn init_renderer(
    canvas: web::HtmlCanvasElement,
    particle_positions: &[Vec3],
) -> Result<Renderer<'static>, RenderError> {
    let width = canvas.width();
    let height = canvas.height();
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
    Renderer::new(&instance, surface, width, height, particle_positions).await
}

type TickCell = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub fn start_loop(mut frame_ctx: FrameContext) {
    let tick: TickCell = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame_ctx.frame() {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &TickCell) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
