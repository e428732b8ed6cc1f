//! Animation module - time-driven changes to the display grid
//!
//! This module provides:
//! - `CellEffect` trait and `EffectChain` for per-cell offsets
//! - Motion effects: Movement, Rotation, Pulse
//! - Shape cycling driven by the clock and cell coordinate
//! - `AnimationEngine`, which ties both toggles to one clock

mod clock;
mod cycling;
mod engine;
mod motion;
mod traits;

pub use engine::AnimationEngine;
pub use motion::AnimationType;
pub use traits::CellOffset;
