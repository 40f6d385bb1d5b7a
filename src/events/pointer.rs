use crate::dom;
use scales_core::PointerState;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Store the latest window-normalized pointer; the frame loop reads it.
pub fn wire_pointermove(pointer: Rc<Cell<PointerState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (width, height) = dom::viewport_size();
        pointer.set(PointerState::from_client(
            ev.client_x() as f32,
            ev.client_y() as f32,
            width,
            height,
        ));
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
