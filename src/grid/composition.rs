//! Composition grid - the source-of-truth shape assignment
//!
//! The composition is sized independently of what is on screen. The
//! display grid resamples it, so a 30×30 composition can drive an 8×8
//! display and vice versa.

use rand::Rng;

use crate::shapes::{EnabledShapes, ShapeId};

/// A width × height grid of shape assignments, row-major
#[derive(Clone, PartialEq, Debug)]
pub struct CompositionGrid {
    width: usize,
    height: usize,
    cells: Vec<ShapeId>,
}

impl CompositionGrid {
    /// Every cell set to `shape`
    pub fn uniform(width: usize, height: usize, shape: ShapeId) -> Self {
        Self {
            width,
            height,
            cells: vec![shape; width * height],
        }
    }

    /// Wrap explicit assignments
    #[cfg(test)]
    pub fn from_cells(width: usize, height: usize, cells: Vec<ShapeId>) -> Self {
        assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a fresh composition
    ///
    /// Each cell independently draws `r` in [0, 1). If `r < randomness` it
    /// gets a uniformly random shape from the enabled pool, otherwise the
    /// pool's first shape. With nothing enabled every cell is `Rect`.
    pub fn generate<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        enabled: &EnabledShapes,
        randomness: f32,
        rng: &mut R,
    ) -> Self {
        let pool = enabled.pool();
        let Some(&default) = pool.first() else {
            return Self::uniform(width, height, ShapeId::RECT);
        };

        let cells = (0..width * height)
            .map(|_| {
                if rng.random::<f32>() < randomness {
                    pool[rng.random_range(0..pool.len())]
                } else {
                    default
                }
            })
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[cfg(test)]
    pub fn cells(&self) -> &[ShapeId] {
        &self.cells
    }

    /// Shape at a row-major index
    pub fn get(&self, index: usize) -> Option<ShapeId> {
        self.cells.get(index).copied()
    }

    /// Shape at a row-major index, `Rect` when out of range
    pub fn sample(&self, index: usize) -> ShapeId {
        self.get(index).unwrap_or(ShapeId::RECT)
    }
}
