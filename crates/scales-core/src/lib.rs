//! Platform-agnostic model of the scales-of-justice header scene.
//!
//! Nothing in here touches the DOM or the GPU. Front-ends own a [`Scene`],
//! feed it pointer, resize and theme events, call [`animation::tick`] once per
//! displayed frame, and hand the result to a renderer.

pub mod animation;
pub mod camera;
pub mod clock;
pub mod color;
pub mod constants;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod material;
pub mod particles;
pub mod scene;
pub mod theme;
pub mod transform;

pub use camera::Camera;
pub use clock::Clock;
pub use color::Rgb;
pub use geometry::{GeometryId, MeshData, Vertex};
pub use input::PointerState;
pub use layout::{on_resize, ContainerBounds, ResizeOutcome, SurfaceSize, ViewportMode};
pub use material::{Material, MaterialId, Materials};
pub use scene::{build, Drawable, Scene, SceneHandles, SceneOptions};
pub use theme::{Theme, ThemeBridge};
