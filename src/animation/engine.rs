//! Animation engine - per-frame updates of the display grid
//!
//! Two independent toggles drive the engine:
//! - shape cycling swaps each cell's shape as a function of time
//! - size animation moves, rotates and scales cells
//!
//! Both read the same clock. The clock only runs while at least one toggle
//! is on, and restarts from zero whenever a toggle switches on or the grid
//! is rebuilt underneath a running animation.

use super::clock::AnimationClock;
use super::cycling::choose_shape;
use super::motion::build_chain;
use crate::grid::DisplayGrid;
use crate::params::GridParams;
use crate::scene::{Material, SceneAdapter};

/// Animation state carried between frames
#[derive(Debug, Default)]
pub struct AnimationEngine {
    clock: AnimationClock,
    /// Shape cycling state seen on the previous tick
    cycling: bool,
    /// Size animation state seen on the previous tick
    sizing: bool,
}

impl AnimationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current animation time
    pub fn time(&self) -> f32 {
        self.clock.time()
    }

    /// Whether either effect was running on the last tick
    pub fn is_active(&self) -> bool {
        self.cycling || self.sizing
    }

    /// The grid was rebuilt; restart the clock if anything is animating
    pub fn on_topology_change(&mut self) {
        if self.is_active() {
            log::debug!("Grid rebuilt while animating, restarting clock");
            self.clock.reset();
        }
    }

    /// Advance one frame
    ///
    /// # Arguments
    /// * `delta` - Seconds since the previous frame
    /// * `params` - Current parameters
    /// * `grid` - Cells to animate
    /// * `scene` - Where primitive changes go
    pub fn tick<S: SceneAdapter + ?Sized>(
        &mut self,
        delta: f32,
        params: &GridParams,
        grid: &mut DisplayGrid,
        scene: &mut S,
    ) {
        let cycling = params.enable_shape_cycling;
        let sizing = params.enable_size_animation;

        if cycling && !self.cycling {
            log::debug!("Shape cycling enabled, restarting clock");
            self.clock.reset();
        }
        if sizing && !self.sizing {
            log::debug!(
                "Size animation enabled ({}), restarting clock",
                build_chain(params).names().join(" + ")
            );
            self.clock.reset();
        }
        if !sizing && self.sizing {
            grid.reset_transforms(scene);
        }
        self.cycling = cycling;
        self.sizing = sizing;

        if !(cycling || sizing) {
            return;
        }
        self.clock.advance(delta * params.animation_speed);

        if cycling {
            self.cycle_shapes(params, grid, scene);
        }
        if sizing {
            self.animate_cells(params, grid, scene);
        }
    }

    fn cycle_shapes<S: SceneAdapter + ?Sized>(&self, params: &GridParams, grid: &mut DisplayGrid, scene: &mut S) {
        let pool = params.enabled_shapes.pool();
        if pool.is_empty() {
            return;
        }
        let material = Material::solid(params.shape_color);
        let time = self.clock.time();

        for index in 0..grid.len() {
            let (x, y) = {
                let cell = &grid.cells()[index];
                (cell.x, cell.y)
            };
            if let Some(shape) = choose_shape(time, params.animation_speed, x, y, &pool) {
                grid.set_shape(index, shape, material, scene);
            }
        }
    }

    fn animate_cells<S: SceneAdapter + ?Sized>(&self, params: &GridParams, grid: &mut DisplayGrid, scene: &mut S) {
        let chain = build_chain(params);
        let time = self.clock.time();
        let cell_size = grid.cell_size();

        for cell in grid.cells_mut() {
            let offset = chain.apply(cell.x, cell.y, time);
            cell.transform = cell.animated(offset, cell_size);
            scene.set_transform(cell.primitive, cell.transform);
        }
    }
}
