//! Scene module - the seam between the grid engine and whatever draws it
//!
//! The engine never draws anything itself. It owns the grid state and
//! pushes primitive changes through [`SceneAdapter`].

mod traits;

#[cfg(test)]
pub mod recording;

pub use traits::{Material, PrimitiveId, SceneAdapter, Segment, Transform};
