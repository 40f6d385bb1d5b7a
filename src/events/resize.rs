use crate::dom;
use crate::handle::SceneHandle;
use scales_core::layout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Re-layout the scene for the container's current size.
pub fn apply(handle: &SceneHandle, container: &web::HtmlElement, canvas: &web::HtmlCanvasElement) {
    let bounds = dom::container_bounds(container);
    let mut state = handle.state().borrow_mut();
    let outcome = layout::on_resize(&mut state.scene, bounds, dom::device_pixel_ratio());
    if state.mode != Some(outcome.mode) {
        log::info!("[layout] {:?}", outcome.mode);
    }
    state.mode = Some(outcome.mode);
    state.surface = outcome.surface;
    dom::sync_canvas_size(canvas, bounds, outcome.surface);
}

pub fn wire_window_resize(
    handle: SceneHandle,
    container: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
) {
    let closure = Closure::wrap(Box::new(move || {
        apply(&handle, &container, &canvas);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
