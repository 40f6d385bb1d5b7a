#![cfg(target_arch = "wasm32")]
//! Web front-end for the scales header scene.
//!
//! `boot` is the composition root: it owns the shared scene state and hands
//! clones of it to the resize, pointer and theme listeners and to the frame
//! loop. Pages without the `#hero` container or the canvas only get the theme
//! toggles.

use crate::constants::{CANVAS_ID, CONTAINER_ID};
use scales_core::{PointerState, SceneHandles, SceneOptions};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod handle;
mod toggle;

pub use handle::SceneHandle;

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen]
pub fn boot() -> Option<SceneHandle> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[boot] already booted; ignoring");
        return None;
    }
    log::info!("scales-web starting");

    let saved = events::theme::saved_theme();
    events::theme::apply_document_theme(&saved);

    let handle = match mount(&saved) {
        Ok(h) => h,
        Err(e) => {
            log::error!("mount error: {:?}", e);
            None
        }
    };
    events::theme::wire_toggles(handle.clone());
    handle
}

fn mount(initial_theme: &str) -> anyhow::Result<Option<SceneHandle>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container: Option<web::HtmlElement> = dom::element_by_id(&document, CONTAINER_ID);
    let canvas: Option<web::HtmlCanvasElement> = dom::element_by_id(&document, CANVAS_ID);

    let options = SceneOptions {
        aspect: container
            .as_ref()
            .map(|c| dom::container_bounds(c).aspect())
            .unwrap_or(1.0),
        ..SceneOptions::default()
    };
    let Some(SceneHandles {
        container,
        surface: canvas,
        scene,
    }) = scales_core::build(container, canvas, &options)
    else {
        return Ok(None);
    };

    let handle = SceneHandle::new(scene);
    handle.set_theme(initial_theme);
    events::resize::apply(&handle, &container, &canvas);
    events::resize::wire_window_resize(handle.clone(), container, canvas.clone());

    let pointer = Rc::new(Cell::new(PointerState::default()));
    events::pointer::wire_pointermove(pointer.clone());

    let positions = handle.particle_positions();
    let loop_handle = handle.clone();
    spawn_local(async move {
        match frame::init_renderer(canvas, &positions).await {
            Ok(renderer) => {
                frame::start_loop(frame::FrameContext::new(loop_handle, pointer, renderer));
            }
            Err(e) => log::error!("[gpu] init failed, scene not animated: {e}"),
        }
    });

    Ok(Some(handle))
}
