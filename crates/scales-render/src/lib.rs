//! wgpu renderer for the scales scene.
//!
//! The caller creates the `wgpu::Surface` for its platform (a canvas on the
//! web, a window natively) and hands it to [`Renderer::new`]; after that the
//! renderer only needs a [`scales_core::Scene`] per frame.

mod error;
mod renderer;

pub use error::{RenderError, SurfaceRecovery};
pub use renderer::Renderer;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
