//! Display grid - the cells actually on screen
//!
//! Each display cell samples one composition cell through a floor-based
//! index map, so the display can be larger or smaller than the
//! composition. When it is smaller, several composition cells are skipped
//! and detail is lost; that is the intended behaviour.
//!
//! The grid owns one scene primitive per cell and releases all of them
//! before it is rebuilt.

use super::composition::CompositionGrid;
use crate::animation::CellOffset;
use crate::params::GridParams;
use crate::scene::{Material, PrimitiveId, SceneAdapter, Segment, Transform};
use crate::shapes::ShapeId;

/// Composition index sampled by display cell (x, y)
///
/// ```text
/// comp_x = floor(x / grid_width  * composition_width)
/// comp_y = floor(y / grid_height * composition_height)
/// index  = comp_y * composition_width + comp_x
/// ```
///
/// Integer arithmetic gives the exact floor. Zero-sized grids are treated
/// as one cell wide.
pub fn sample_index(
    x: usize,
    y: usize,
    grid_width: usize,
    grid_height: usize,
    composition_width: usize,
    composition_height: usize,
) -> usize {
    let comp_x = x * composition_width / grid_width.max(1);
    let comp_y = y * composition_height / grid_height.max(1);
    comp_y * composition_width + comp_x
}

/// World-space center of display cell (x, y)
pub fn base_position(x: usize, y: usize, grid_width: usize, grid_height: usize, cell_size: f32) -> (f32, f32) {
    (
        (x as f32 - grid_width as f32 / 2.0 + 0.5) * cell_size,
        (y as f32 - grid_height as f32 / 2.0 + 0.5) * cell_size,
    )
}

/// Cell boundary lines for the debug overlay
///
/// `grid_width + 1` vertical lines followed by `grid_height + 1`
/// horizontal lines, spanning the grid's physical extent.
pub fn grid_lines(grid_width: usize, grid_height: usize, cell_size: f32) -> Vec<Segment> {
    let half_w = grid_width as f32 * cell_size / 2.0;
    let half_h = grid_height as f32 * cell_size / 2.0;

    let vertical = (0..=grid_width).map(|i| {
        let x = i as f32 * cell_size - half_w;
        [(x, -half_h), (x, half_h)]
    });
    let horizontal = (0..=grid_height).map(|j| {
        let y = j as f32 * cell_size - half_h;
        [(-half_w, y), (half_w, y)]
    });
    vertical.chain(horizontal).collect()
}

/// One renderable cell
#[derive(Clone, Debug)]
pub struct DisplayCell {
    pub x: usize,
    pub y: usize,
    /// Resting center
    pub base: (f32, f32),
    /// Current placement, animated every frame
    pub transform: Transform,
    /// Shape currently shown, used to skip redundant geometry swaps
    pub current_shape: ShapeId,
    pub primitive: PrimitiveId,
}

impl DisplayCell {
    /// Placement at rest: base position, no rotation, scale = cell size
    pub fn rest(&self, cell_size: f32) -> Transform {
        Transform::at(self.base, cell_size)
    }

    /// Placement with an animation offset applied
    pub fn animated(&self, offset: CellOffset, cell_size: f32) -> Transform {
        Transform {
            position: (
                self.base.0 + offset.dx * cell_size,
                self.base.1 + offset.dy * cell_size,
            ),
            rotation: offset.rotation,
            scale: cell_size * offset.scale,
        }
    }
}

/// The on-screen grid of cells, row-major
#[derive(Debug, Default)]
pub struct DisplayGrid {
    width: usize,
    height: usize,
    cell_size: f32,
    cells: Vec<DisplayCell>,
}

impl DisplayGrid {
    /// A grid with no cells and no primitives
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create every cell and its primitive
    pub fn build<S: SceneAdapter + ?Sized>(
        params: &GridParams,
        composition: &CompositionGrid,
        scene: &mut S,
    ) -> Self {
        let (width, height) = (params.grid_width, params.grid_height);
        let cell_size = params.cell_size;
        let material = Material::solid(params.shape_color);

        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let index = sample_index(
                    x,
                    y,
                    width,
                    height,
                    composition.width(),
                    composition.height(),
                );
                let shape = composition.sample(index);
                let base = base_position(x, y, width, height, cell_size);
                let transform = Transform::at(base, cell_size);
                let primitive = scene.add_primitive(&shape.outline(), material, transform);

                cells.push(DisplayCell {
                    x,
                    y,
                    base,
                    transform,
                    current_shape: shape,
                    primitive,
                });
            }
        }

        Self {
            width,
            height,
            cell_size,
            cells,
        }
    }

    /// Release every primitive and leave the grid empty
    pub fn dispose<S: SceneAdapter + ?Sized>(&mut self, scene: &mut S) {
        for cell in self.cells.drain(..) {
            scene.dispose_geometry(cell.primitive);
            scene.remove_primitive(cell.primitive);
        }
        self.width = 0;
        self.height = 0;
    }

    /// Move every cell to its resting placement for a new cell size
    ///
    /// Shapes and composition are untouched.
    pub fn relayout<S: SceneAdapter + ?Sized>(&mut self, cell_size: f32, scene: &mut S) {
        self.cell_size = cell_size;
        for cell in &mut self.cells {
            cell.base = base_position(cell.x, cell.y, self.width, self.height, cell_size);
        }
        self.reset_transforms(scene);
    }

    /// Put every cell back at rest
    pub fn reset_transforms<S: SceneAdapter + ?Sized>(&mut self, scene: &mut S) {
        let cell_size = self.cell_size;
        for cell in &mut self.cells {
            cell.transform = cell.rest(cell_size);
            scene.set_transform(cell.primitive, cell.transform);
        }
    }

    /// Apply a new material to every cell
    pub fn restyle<S: SceneAdapter + ?Sized>(&self, material: Material, scene: &mut S) {
        for cell in &self.cells {
            scene.set_material(cell.primitive, material);
        }
    }

    /// Show `shape` in a cell, swapping geometry only if it changed
    ///
    /// Returns whether the geometry was replaced.
    pub fn set_shape<S: SceneAdapter + ?Sized>(
        &mut self,
        index: usize,
        shape: ShapeId,
        material: Material,
        scene: &mut S,
    ) -> bool {
        let Some(cell) = self.cells.get_mut(index) else {
            return false;
        };
        if cell.current_shape == shape {
            return false;
        }
        scene.replace_geometry(cell.primitive, &shape.outline(), material);
        cell.current_shape = shape;
        true
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[DisplayCell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [DisplayCell] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::recording::RecordingScene;

    #[test]
    fn test_sample_index_worked_example() {
        // 8×8 display over a 30×30 composition
        assert_eq!(sample_index(4, 4, 8, 8, 30, 30), 465);
        assert_eq!(sample_index(0, 0, 8, 8, 30, 30), 0);
        assert_eq!(sample_index(7, 7, 8, 8, 30, 30), 26 * 30 + 26);
    }

    #[test]
    fn test_sample_index_upsampling_aliases() {
        // 30×30 display over an 8×8 composition: many cells share an index
        let indices: Vec<usize> = (0..30).map(|x| sample_index(x, 0, 30, 30, 8, 8)).collect();
        assert_eq!(indices[0], indices[1]);
        assert_eq!(indices[0], indices[3]);
        assert_eq!(indices[29], 7);
        assert!(indices.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sample_index_always_in_range() {
        for gw in 1..=12 {
            for gh in [1, 5, 12] {
                for cw in 1..=12 {
                    for ch in [1, 4, 12] {
                        for y in 0..gh {
                            for x in 0..gw {
                                let index = sample_index(x, y, gw, gh, cw, ch);
                                assert!(index < cw * ch, "{}x{} over {}x{} at ({}, {})", gw, gh, cw, ch, x, y);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_base_position_centers_grid() {
        assert_eq!(base_position(0, 0, 2, 2, 10.0), (-5.0, -5.0));
        assert_eq!(base_position(1, 1, 2, 2, 10.0), (5.0, 5.0));
        assert_eq!(base_position(1, 0, 3, 1, 4.0), (0.0, 0.0));
    }

    #[test]
    fn test_grid_lines_span_extent() {
        let lines = grid_lines(4, 2, 10.0);
        assert_eq!(lines.len(), 5 + 3);
        assert_eq!(lines[0], [(-20.0, -10.0), (-20.0, 10.0)]);
        assert_eq!(lines[4], [(20.0, -10.0), (20.0, 10.0)]);
        assert_eq!(lines[5], [(-20.0, -10.0), (20.0, -10.0)]);
        assert_eq!(lines[7], [(-20.0, 10.0), (20.0, 10.0)]);
    }

    #[test]
    fn test_build_creates_one_primitive_per_cell() {
        let params = GridParams {
            grid_width: 5,
            grid_height: 3,
            ..GridParams::default()
        };
        let composition = CompositionGrid::uniform(2, 2, ShapeId::RECT);
        let mut scene = RecordingScene::new();
        let grid = DisplayGrid::build(&params, &composition, &mut scene);

        assert_eq!(grid.len(), 15);
        assert_eq!(scene.live(), 15);
        for cell in grid.cells() {
            let primitive = scene.primitive(cell.primitive);
            assert_eq!(primitive.transform.scale, params.cell_size);
            assert_eq!(primitive.transform.position, cell.base);
            assert_eq!(primitive.material.color, params.shape_color);
        }
    }

    #[test]
    fn test_build_samples_composition() {
        let diamond = ShapeId::from_name("diamond").unwrap();
        let composition = CompositionGrid::from_cells(2, 1, vec![ShapeId::RECT, diamond]);
        let params = GridParams {
            grid_width: 4,
            grid_height: 1,
            ..GridParams::default()
        };
        let mut scene = RecordingScene::new();
        let grid = DisplayGrid::build(&params, &composition, &mut scene);

        let shapes: Vec<&str> = grid.cells().iter().map(|c| c.current_shape.name()).collect();
        assert_eq!(shapes, vec!["Rect", "Rect", "diamond", "diamond"]);
    }

    #[test]
    fn test_dispose_releases_everything() {
        let params = GridParams::default();
        let composition = CompositionGrid::uniform(3, 3, ShapeId::RECT);
        let mut scene = RecordingScene::new();
        let mut grid = DisplayGrid::build(&params, &composition, &mut scene);
        let count = grid.len();

        grid.dispose(&mut scene);
        assert!(grid.is_empty());
        assert_eq!(scene.live(), 0);
        assert_eq!(scene.disposals, count);
        assert_eq!(scene.removes, count);
    }

    #[test]
    fn test_relayout_is_idempotent() {
        let params = GridParams::default();
        let composition = CompositionGrid::uniform(3, 3, ShapeId::RECT);
        let mut scene = RecordingScene::new();
        let mut grid = DisplayGrid::build(&params, &composition, &mut scene);

        grid.relayout(25.0, &mut scene);
        let first: Vec<Transform> = grid.cells().iter().map(|c| c.transform).collect();
        grid.relayout(25.0, &mut scene);
        let second: Vec<Transform> = grid.cells().iter().map(|c| c.transform).collect();

        assert_eq!(first, second);
        assert!(second.iter().all(|t| t.scale == 25.0 && t.rotation == 0.0));
        let last = grid.cells().last().unwrap();
        assert_eq!(scene.primitive(last.primitive).transform, last.transform);
    }

    #[test]
    fn test_set_shape_skips_unchanged() {
        let params = GridParams {
            grid_width: 1,
            grid_height: 1,
            ..GridParams::default()
        };
        let composition = CompositionGrid::uniform(1, 1, ShapeId::RECT);
        let mut scene = RecordingScene::new();
        let mut grid = DisplayGrid::build(&params, &composition, &mut scene);
        let material = Material::solid(params.shape_color);

        assert!(!grid.set_shape(0, ShapeId::RECT, material, &mut scene));
        assert_eq!(scene.geometry_swaps, 0);

        let diamond = ShapeId::from_name("diamond").unwrap();
        assert!(grid.set_shape(0, diamond, material, &mut scene));
        assert_eq!(scene.geometry_swaps, 1);
        assert_eq!(grid.cells()[0].current_shape, diamond);

        // Out of range is ignored
        assert!(!grid.set_shape(5, diamond, material, &mut scene));
    }
}
