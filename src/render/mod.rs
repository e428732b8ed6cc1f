//! Render module - UI components for drawing the grid
//!
//! This module provides:
//! - Grid canvas widget, the on-screen `SceneAdapter`
//! - Fill tessellation for outlines with concavities and holes

mod canvas;
mod tessellate;

pub use canvas::{Canvas, CanvasSettings};
