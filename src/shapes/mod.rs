//! Shapes module - the catalog of cell shapes
//!
//! This module provides:
//! - Anchor points: symbolic coordinates inside the unit cell
//! - `Outline`: closed outer path plus optional hole
//! - The shape catalog: every named shape, its category, and its outline

mod anchor;
mod catalog;
mod outline;

pub use catalog::{generate, outline_or_default, EnabledShapes, ShapeCategory, ShapeId};
pub use outline::{signed_area, Outline};
