//! Grid canvas widget
//!
//! A retained-mode scene drawn with the egui painter. Primitives are
//! tessellated once when their geometry is set. The screen-space mesh is
//! rebuilt only after a scene change or when the widget rect or zoom moves;
//! other frames repaint the cached mesh.
//!
//! ## Coordinate System
//!
//! World units are pixels at zoom 1.0, with the origin at the widget
//! center and Y pointing up.

use std::cell::RefCell;
#[cfg(test)]
use std::cell::Cell;

use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};
use nalgebra::{Point2, Similarity2, Vector2};

use super::tessellate::{fill_triangles, Triangle};
use crate::scene::{Material, PrimitiveId, SceneAdapter, Segment, Transform};
use crate::shapes::Outline;

/// Display settings for the canvas
#[derive(Clone)]
pub struct CanvasSettings {
    /// Zoom factor (1.0 = one world unit per pixel)
    pub zoom: f32,

    /// Grid overlay color
    pub grid_color: Color32,

    /// Grid overlay thickness in pixels
    pub grid_width: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            grid_color: Color32::from_rgba_unmultiplied(140, 140, 160, 90),
            grid_width: 1.0,
        }
    }
}

/// One primitive as the canvas holds it
struct Slot {
    /// Cached fill; `None` once the geometry has been disposed
    triangles: Option<Vec<Triangle>>,
    material: Material,
    transform: Transform,
}

/// Screen-space mesh and the view it was built for
struct MeshCache {
    rect: Rect,
    zoom: f32,
    mesh: egui::Mesh,
}

/// Canvas widget and primitive store
pub struct Canvas {
    /// Display settings
    pub settings: CanvasSettings,

    slots: Vec<Option<Slot>>,

    /// Indices of removed slots, reused by the next add
    free: Vec<usize>,

    grid_lines: Vec<Segment>,

    /// Cleared by every primitive change
    mesh_cache: RefCell<Option<MeshCache>>,

    #[cfg(test)]
    mesh_builds: Cell<usize>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create an empty canvas with default settings
    pub fn new() -> Self {
        Self::with_settings(CanvasSettings::default())
    }

    /// Create an empty canvas with custom settings
    pub fn with_settings(settings: CanvasSettings) -> Self {
        Self {
            settings,
            slots: Vec::new(),
            free: Vec::new(),
            grid_lines: Vec::new(),
            mesh_cache: RefCell::new(None),
            #[cfg(test)]
            mesh_builds: Cell::new(0),
        }
    }

    /// Number of primitives currently in the scene
    #[cfg(test)]
    pub fn live_primitives(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Number of triangles painted per frame
    pub fn triangle_count(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter_map(|s| s.triangles.as_ref())
            .map(Vec::len)
            .sum()
    }

    /// Slot for a live primitive; the cached mesh is dropped on access
    fn slot_mut(&mut self, id: PrimitiveId) -> Option<&mut Slot> {
        let slot = self.slots.get_mut(id.index()).and_then(Option::as_mut)?;
        self.mesh_cache.get_mut().take();
        Some(slot)
    }

    /// Convert a world point to screen coordinates
    ///
    /// # Arguments
    /// * `point` - World position
    /// * `rect` - The display rectangle
    fn world_to_screen(&self, point: (f32, f32), rect: Rect) -> Pos2 {
        let zoom = self.settings.zoom;
        let center = rect.center();
        // Screen Y increases downward
        Pos2::new(center.x + point.0 * zoom, center.y - point.1 * zoom)
    }

    /// Draw the scene
    ///
    /// # Arguments
    /// * `ui` - The egui UI context
    /// * `background` - Fill color behind the grid
    ///
    /// # Returns
    /// The response from the widget
    pub fn show(&self, ui: &mut egui::Ui, background: [u8; 3]) -> egui::Response {
        let size = ui.available_size().max(Vec2::splat(1.0));
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;

        let [r, g, b] = background;
        painter.rect_filled(rect, 0.0, Color32::from_rgb(r, g, b));

        painter.add(egui::Shape::mesh(self.cached_mesh(rect)));

        let stroke = Stroke::new(self.settings.grid_width, self.settings.grid_color);
        for [from, to] in &self.grid_lines {
            painter.line_segment(
                [self.world_to_screen(*from, rect), self.world_to_screen(*to, rect)],
                stroke,
            );
        }

        response
    }

    /// The screen-space mesh for `rect`, rebuilt only when stale
    fn cached_mesh(&self, rect: Rect) -> egui::Mesh {
        let zoom = self.settings.zoom;
        let mut cache = self.mesh_cache.borrow_mut();
        let fresh = matches!(&*cache, Some(c) if c.rect == rect && c.zoom == zoom);
        if !fresh {
            *cache = Some(MeshCache {
                rect,
                zoom,
                mesh: self.build_mesh(rect),
            });
        }
        cache.as_ref().map(|c| c.mesh.clone()).unwrap_or_default()
    }

    /// Transform every cached triangle into one screen-space mesh
    fn build_mesh(&self, rect: Rect) -> egui::Mesh {
        #[cfg(test)]
        self.mesh_builds.set(self.mesh_builds.get() + 1);

        let mut mesh = egui::Mesh::default();

        for slot in self.slots.iter().flatten() {
            let Some(triangles) = &slot.triangles else {
                continue;
            };
            let t = slot.transform;
            let placement = Similarity2::new(Vector2::new(t.position.0, t.position.1), t.rotation, t.scale);
            let [r, g, b] = slot.material.color;
            let color = Color32::from_rgb(r, g, b);

            for triangle in triangles {
                let base = mesh.vertices.len() as u32;
                for &(x, y) in triangle {
                    let world = placement.transform_point(&Point2::new(x, y));
                    mesh.colored_vertex(self.world_to_screen((world.x, world.y), rect), color);
                }
                mesh.add_triangle(base, base + 1, base + 2);
            }
        }
        mesh
    }
}

impl SceneAdapter for Canvas {
    fn add_primitive(&mut self, outline: &Outline, material: Material, transform: Transform) -> PrimitiveId {
        let slot = Slot {
            triangles: Some(fill_triangles(outline)),
            material,
            transform,
        };
        self.mesh_cache.get_mut().take();
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(slot);
                PrimitiveId::new(index)
            }
            None => {
                self.slots.push(Some(slot));
                PrimitiveId::new(self.slots.len() - 1)
            }
        }
    }

    fn remove_primitive(&mut self, id: PrimitiveId) {
        match self.slots.get_mut(id.index()).and_then(Option::take) {
            Some(slot) => {
                self.mesh_cache.get_mut().take();
                if slot.triangles.is_some() {
                    log::warn!("Primitive {} removed without disposing its geometry", id.index());
                }
                self.free.push(id.index());
            }
            None => log::warn!("Primitive {} removed twice", id.index()),
        }
    }

    fn dispose_geometry(&mut self, id: PrimitiveId) {
        if let Some(slot) = self.slot_mut(id) {
            slot.triangles = None;
        }
    }

    fn set_transform(&mut self, id: PrimitiveId, transform: Transform) {
        if let Some(slot) = self.slot_mut(id) {
            slot.transform = transform;
        }
    }

    fn replace_geometry(&mut self, id: PrimitiveId, outline: &Outline, material: Material) {
        if let Some(slot) = self.slot_mut(id) {
            slot.triangles = Some(fill_triangles(outline));
            slot.material = material;
        }
    }

    fn set_material(&mut self, id: PrimitiveId, material: Material) {
        if let Some(slot) = self.slot_mut(id) {
            slot.material = material;
        }
    }

    fn set_grid_lines(&mut self, lines: &[Segment]) {
        self.grid_lines.clear();
        self.grid_lines.extend_from_slice(lines);
    }
}
