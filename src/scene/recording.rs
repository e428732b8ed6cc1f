//! In-memory scene used by tests
//!
//! Records every call so tests can check what the engine asked for
//! without a window or a GPU.

use super::traits::{Material, PrimitiveId, SceneAdapter, Segment, Transform};
use crate::shapes::Outline;

/// A primitive as last seen by the recording scene
#[derive(Clone, Debug)]
pub struct RecordedPrimitive {
    pub outline: Option<Outline>,
    pub material: Material,
    pub transform: Transform,
}

/// Call counters and live primitive state
#[derive(Default)]
pub struct RecordingScene {
    slots: Vec<Option<RecordedPrimitive>>,
    pub grid_lines: Vec<Segment>,
    pub adds: usize,
    pub removes: usize,
    pub disposals: usize,
    pub geometry_swaps: usize,
    pub transform_updates: usize,
    pub material_updates: usize,
}

impl RecordingScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primitives still attached to the scene
    pub fn live(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn primitive(&self, id: PrimitiveId) -> &RecordedPrimitive {
        self.slots[id.index()]
            .as_ref()
            .expect("primitive was removed")
    }

    /// Reset the call counters, keeping the primitives
    pub fn clear_counters(&mut self) {
        self.adds = 0;
        self.removes = 0;
        self.disposals = 0;
        self.geometry_swaps = 0;
        self.transform_updates = 0;
        self.material_updates = 0;
    }

    fn slot_mut(&mut self, id: PrimitiveId) -> &mut RecordedPrimitive {
        self.slots[id.index()]
            .as_mut()
            .expect("primitive was removed")
    }
}

impl SceneAdapter for RecordingScene {
    fn add_primitive(&mut self, outline: &Outline, material: Material, transform: Transform) -> PrimitiveId {
        self.adds += 1;
        self.slots.push(Some(RecordedPrimitive {
            outline: Some(outline.clone()),
            material,
            transform,
        }));
        PrimitiveId::new(self.slots.len() - 1)
    }

    fn remove_primitive(&mut self, id: PrimitiveId) {
        self.removes += 1;
        let removed = self.slots[id.index()].take().expect("primitive removed twice");
        assert!(removed.outline.is_none(), "primitive removed before its geometry was disposed");
    }

    fn dispose_geometry(&mut self, id: PrimitiveId) {
        self.disposals += 1;
        self.slot_mut(id).outline = None;
    }

    fn set_transform(&mut self, id: PrimitiveId, transform: Transform) {
        self.transform_updates += 1;
        self.slot_mut(id).transform = transform;
    }

    fn replace_geometry(&mut self, id: PrimitiveId, outline: &Outline, material: Material) {
        self.geometry_swaps += 1;
        let slot = self.slot_mut(id);
        slot.outline = Some(outline.clone());
        slot.material = material;
    }

    fn set_material(&mut self, id: PrimitiveId, material: Material) {
        self.material_updates += 1;
        self.slot_mut(id).material = material;
    }

    fn set_grid_lines(&mut self, lines: &[Segment]) {
        self.grid_lines = lines.to_vec();
    }
}
