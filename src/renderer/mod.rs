//! Rendering module
//!
//! The scene is drawn through the [`Surface`] trait: a Canvas 2D context in
//! the browser, a recorded [`DrawList`] everywhere else.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw_list;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw_list::{DrawCommand, DrawList};
pub use scene::draw_scene;
pub use surface::Surface;
