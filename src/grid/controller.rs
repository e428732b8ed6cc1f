//! Grid controller - owns the grids and decides how much work a change needs
//!
//! Parameter edits come in as whole snapshots. The controller diffs them
//! against what it last applied and picks the cheapest update: a full
//! rebuild, a relayout, a material update, or nothing.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::composition::CompositionGrid;
use super::display::{grid_lines, DisplayGrid};
use crate::animation::AnimationEngine;
use crate::params::{GridParams, ParamChange};
use crate::scene::{Material, SceneAdapter};
use crate::shapes::ShapeId;

/// Composition, display and animation state for one grid
pub struct GridController {
    composition: CompositionGrid,
    display: DisplayGrid,
    engine: AnimationEngine,
    rng: StdRng,
    params: GridParams,
}

impl GridController {
    /// Build the initial grid with OS-seeded randomness
    pub fn new<S: SceneAdapter + ?Sized>(params: GridParams, scene: &mut S) -> Self {
        Self::with_rng(params, StdRng::from_os_rng(), scene)
    }

    /// Build the initial grid drawing from `rng`
    ///
    /// A fixed `seed` in the params still wins on every rebuild.
    pub fn with_rng<S: SceneAdapter + ?Sized>(params: GridParams, rng: StdRng, scene: &mut S) -> Self {
        let mut controller = Self {
            composition: CompositionGrid::uniform(0, 0, ShapeId::RECT),
            display: DisplayGrid::empty(),
            engine: AnimationEngine::new(),
            rng,
            params,
        };
        controller.rebuild(scene);
        controller
    }

    /// Regenerate the composition and recreate every display cell
    pub fn rebuild<S: SceneAdapter + ?Sized>(&mut self, scene: &mut S) {
        if let Some(seed) = self.params.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }

        self.composition = CompositionGrid::generate(
            self.params.composition_width,
            self.params.composition_height,
            &self.params.enabled_shapes,
            self.params.randomness,
            &mut self.rng,
        );

        self.display.dispose(scene);
        self.display = DisplayGrid::build(&self.params, &self.composition, scene);
        self.update_overlay(scene);
        self.engine.on_topology_change();

        log::info!(
            "Rebuilt grid: {}x{} display over {}x{} composition, {} shapes enabled",
            self.display.width(),
            self.display.height(),
            self.composition.width(),
            self.composition.height(),
            self.params.enabled_shapes.pool().len()
        );
    }

    /// Reposition cells for the current cell size
    pub fn relayout<S: SceneAdapter + ?Sized>(&mut self, scene: &mut S) {
        log::debug!("Relayout at cell size {}", self.params.cell_size);
        self.display.relayout(self.params.cell_size, scene);
        self.update_overlay(scene);
    }

    /// Push the current shape color to every cell
    pub fn restyle<S: SceneAdapter + ?Sized>(&mut self, scene: &mut S) {
        self.display.restyle(Material::solid(self.params.shape_color), scene);
    }

    /// Take a new parameter snapshot and do only the work it requires
    pub fn apply<S: SceneAdapter + ?Sized>(&mut self, params: &GridParams, scene: &mut S) -> ParamChange {
        let change = ParamChange::between(&self.params, params);
        if change.is_empty() {
            // Animation knobs still need to reach the next tick
            self.params = params.clone();
            return change;
        }
        self.params = params.clone();

        if change.topology {
            // A rebuild already picks up layout, style and overlay
            self.rebuild(scene);
            return change;
        }
        if change.layout {
            self.relayout(scene);
        } else if change.overlay {
            self.update_overlay(scene);
        }
        if change.style {
            self.restyle(scene);
        }
        change
    }

    /// Advance the animation by `delta` seconds
    pub fn tick<S: SceneAdapter + ?Sized>(&mut self, delta: f32, scene: &mut S) {
        self.engine.tick(delta, &self.params, &mut self.display, scene);
    }

    fn update_overlay<S: SceneAdapter + ?Sized>(&self, scene: &mut S) {
        if self.params.show_grid {
            scene.set_grid_lines(&grid_lines(
                self.display.width(),
                self.display.height(),
                self.display.cell_size(),
            ));
        } else {
            scene.set_grid_lines(&[]);
        }
    }

    pub fn params(&self) -> &GridParams {
        &self.params
    }

    pub fn composition(&self) -> &CompositionGrid {
        &self.composition
    }

    pub fn display(&self) -> &DisplayGrid {
        &self.display
    }

    pub fn engine(&self) -> &AnimationEngine {
        &self.engine
    }
}
