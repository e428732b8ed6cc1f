//! Grid module - composition, display and the controller that links them
//!
//! This module provides:
//! - `CompositionGrid`: the randomly generated shape assignment
//! - `DisplayGrid`: on-screen cells that resample the composition
//! - `GridController`: rebuilds, relayouts and ticks in response to params

mod composition;
mod controller;
mod display;

#[cfg(test)]
pub use composition::CompositionGrid;
pub use controller::GridController;
pub use display::DisplayGrid;
