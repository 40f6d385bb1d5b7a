use scales_core::{ContainerBounds, SurfaceSize};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        return false;
    };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Layout size of the container in CSS pixels.
pub fn container_bounds(container: &web::HtmlElement) -> ContainerBounds {
    ContainerBounds::new(
        container.offset_width() as f32,
        container.offset_height() as f32,
    )
}

pub fn device_pixel_ratio() -> f32 {
    web::window()
        .map(|w| w.device_pixel_ratio() as f32)
        .unwrap_or(1.0)
}

/// Window inner size in CSS pixels; zero when unavailable.
pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (read(w.inner_width()), read(w.inner_height()))
}

/// Resize the canvas backing store and pin its CSS box to the container.
pub fn sync_canvas_size(
    canvas: &web::HtmlCanvasElement,
    bounds: ContainerBounds,
    surface: SurfaceSize,
) {
    if canvas.width() != surface.width {
        canvas.set_width(surface.width);
    }
    if canvas.height() != surface.height {
        canvas.set_height(surface.height);
    }
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", bounds.width));
    _ = style.set_property("height", &format!("{}px", bounds.height));
}

pub fn set_root_attribute(name: &str, value: &str) {
    if let Some(root) = window_document().and_then(|d| d.document_element()) {
        _ = root.set_attribute(name, value);
    }
}

/// Attribute on `<html>`, if the document and the attribute both exist.
pub fn root_attribute(name: &str) -> Option<String> {
    window_document()
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(name))
}

pub fn local_storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}
