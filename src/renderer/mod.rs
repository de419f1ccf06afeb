//! Canvas 2D rendering module
//!
//! Executes `ui` draw lists on an HTML canvas.

pub mod canvas;

pub use canvas::CanvasRenderer;
