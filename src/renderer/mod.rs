//! Rendering module
//!
//! The simulation draws through the [`Surface`] trait. On the web this is a
//! 2D canvas context; headless runs and tests record draw calls instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use surface::{
    Color, DrawCommand, ImageId, RecordingSurface, Surface, TextAlign, draw_pause_overlay,
};
