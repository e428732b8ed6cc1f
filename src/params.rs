//! Grid parameters - the knobs the control panel edits
//!
//! The grid engine only ever reads these. Comparing two snapshots with
//! [`ParamChange::between`] tells the controller how much work a change
//! needs: a full rebuild, a relayout, or just a material update.

use serde::{Deserialize, Serialize};

use crate::animation::AnimationType;
use crate::shapes::EnabledShapes;

/// Largest grid dimension the panel allows
pub const MAX_GRID_DIM: usize = 100;

/// Everything that shapes the grid and its animation
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParams {
    // Display grid
    pub grid_width: usize,
    pub grid_height: usize,
    pub cell_size: f32,

    // Composition grid
    pub composition_width: usize,
    pub composition_height: usize,
    /// Probability that a composition cell gets a random shape
    pub randomness: f32,
    pub enabled_shapes: EnabledShapes,
    /// Fixed RNG seed; `None` draws fresh randomness on every rebuild
    pub seed: Option<u64>,

    // Styling
    pub shape_color: [u8; 3],
    pub background_color: [u8; 3],
    pub show_grid: bool,

    // Animation
    pub enable_shape_cycling: bool,
    pub enable_size_animation: bool,
    pub animation_type: AnimationType,
    pub animation_speed: f32,
    pub movement_amplitude: f32,
    pub movement_frequency: f32,
    pub rotation_amplitude: f32,
    pub rotation_frequency: f32,
    pub scale_amplitude: f32,
    pub scale_frequency: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            grid_width: 12,
            grid_height: 12,
            cell_size: 40.0,

            composition_width: 12,
            composition_height: 12,
            randomness: 0.7,
            enabled_shapes: EnabledShapes::default(),
            seed: None,

            shape_color: [235, 235, 225],
            background_color: [18, 18, 24],
            show_grid: false,

            enable_shape_cycling: false,
            enable_size_animation: false,
            animation_type: AnimationType::Movement,
            animation_speed: 1.0,
            movement_amplitude: 0.2,
            movement_frequency: 1.0,
            rotation_amplitude: 0.5,
            rotation_frequency: 1.0,
            scale_amplitude: 0.3,
            scale_frequency: 1.0,
        }
    }
}

impl GridParams {
    /// Copy with every value pulled into its usable range
    ///
    /// Settings files can hold anything, so this runs before the engine
    /// sees a parameter set.
    pub fn sanitized(&self) -> Self {
        let dim = |v: usize| v.clamp(1, MAX_GRID_DIM);
        let positive = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };

        Self {
            grid_width: dim(self.grid_width),
            grid_height: dim(self.grid_height),
            composition_width: dim(self.composition_width),
            composition_height: dim(self.composition_height),
            cell_size: if self.cell_size.is_finite() && self.cell_size > 0.0 {
                self.cell_size
            } else {
                Self::default().cell_size
            },
            randomness: if self.randomness.is_finite() {
                self.randomness.clamp(0.0, 1.0)
            } else {
                0.0
            },
            animation_speed: positive(self.animation_speed),
            movement_amplitude: positive(self.movement_amplitude),
            movement_frequency: positive(self.movement_frequency),
            rotation_amplitude: positive(self.rotation_amplitude),
            rotation_frequency: positive(self.rotation_frequency),
            scale_amplitude: positive(self.scale_amplitude),
            scale_frequency: positive(self.scale_frequency),
            ..self.clone()
        }
    }
}

/// Which parts of the grid a parameter change invalidates
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ParamChange {
    /// Grid or composition shape changed: rebuild everything
    pub topology: bool,
    /// Only the cell size changed: reposition existing cells
    pub layout: bool,
    /// Shape color changed: update materials
    pub style: bool,
    /// Grid overlay toggled
    pub overlay: bool,
}

impl ParamChange {
    /// Classify the difference between two parameter sets
    ///
    /// Animation knobs are read every tick and never need a dispatch;
    /// the background color belongs to the canvas alone.
    pub fn between(old: &GridParams, new: &GridParams) -> Self {
        Self {
            topology: old.grid_width != new.grid_width
                || old.grid_height != new.grid_height
                || old.composition_width != new.composition_width
                || old.composition_height != new.composition_height
                || old.randomness != new.randomness
                || old.enabled_shapes != new.enabled_shapes
                || old.seed != new.seed,
            layout: old.cell_size != new.cell_size,
            style: old.shape_color != new.shape_color,
            overlay: old.show_grid != new.show_grid,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
