//! SceneAdapter trait definition
//!
//! A retained-mode store of filled 2D primitives. The grid engine adds one
//! primitive per display cell and mutates it in place every frame.
//!
//! ## Resource Lifetime
//!
//! Geometry may be backed by renderer resources, so dropping a primitive is
//! two calls: [`SceneAdapter::dispose_geometry`] releases the geometry,
//! [`SceneAdapter::remove_primitive`] detaches the primitive. The engine
//! always makes both calls, in that order.

use crate::shapes::Outline;

/// Handle to a primitive owned by a scene
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PrimitiveId(usize);

impl PrimitiveId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Fill style of a primitive
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Material {
    /// Fill color as RGB
    pub color: [u8; 3],
}

impl Material {
    pub fn solid(color: [u8; 3]) -> Self {
        Self { color }
    }
}

/// Placement of a primitive in world space
///
/// Outlines are unit-cell sized, so `scale` is the on-screen cell size.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform {
    /// Center position
    pub position: (f32, f32),
    /// Rotation about Z in radians
    pub rotation: f32,
    /// Uniform scale
    pub scale: f32,
}

impl Transform {
    /// Unrotated placement at `position` with uniform `scale`
    pub fn at(position: (f32, f32), scale: f32) -> Self {
        Self {
            position,
            rotation: 0.0,
            scale,
        }
    }
}

/// A line segment in world space
pub type Segment = [(f32, f32); 2];

/// A retained scene of filled primitives
pub trait SceneAdapter {
    /// Add a primitive and return its handle
    fn add_primitive(&mut self, outline: &Outline, material: Material, transform: Transform) -> PrimitiveId;

    /// Detach a primitive from the scene
    fn remove_primitive(&mut self, id: PrimitiveId);

    /// Release the geometry held by a primitive
    fn dispose_geometry(&mut self, id: PrimitiveId);

    /// Move, rotate and scale a primitive
    fn set_transform(&mut self, id: PrimitiveId, transform: Transform);

    /// Swap a primitive's geometry and material in one step
    fn replace_geometry(&mut self, id: PrimitiveId, outline: &Outline, material: Material);

    /// Change a primitive's material, keeping its geometry
    fn set_material(&mut self, id: PrimitiveId, material: Material);

    /// Replace the debug grid overlay (empty slice hides it)
    fn set_grid_lines(&mut self, lines: &[Segment]);
}
