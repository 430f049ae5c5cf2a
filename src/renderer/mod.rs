//! Canvas 2D rendering module
//!
//! `scene` builds a display list from the game state; `canvas` replays it on
//! a `CanvasRenderingContext2d` in the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{DrawCommand, Rect, build};
