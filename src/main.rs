//! shape-grid - Procedural Shape Grid
//!
//! Fills a grid with shapes drawn from a catalog of 2D outlines, then
//! animates it by cycling shapes and wobbling cells.
//!
//! ## How it works
//! - A composition grid assigns a shape to every cell, partly at random
//! - The display grid resamples that composition at any resolution
//! - Shape cycling and size animation update cells every frame

use eframe::egui;

mod animation;
mod grid;
mod params;
mod render;
mod scene;
mod settings;
mod shapes;

use animation::AnimationType;
use grid::GridController;
use params::{GridParams, MAX_GRID_DIM};
use render::{Canvas, CanvasSettings};
use settings::AppSettings;
use shapes::ShapeCategory;

/// Longest frame step fed to the animation, in seconds
const MAX_FRAME_DELTA: f32 = 0.1;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting shape-grid");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_title("shape-grid"),
        ..Default::default()
    };

    eframe::run_native(
        "shape-grid",
        options,
        Box::new(|cc| Ok(Box::new(GridApp::new(cc)))),
    )
}

/// Main application state
struct GridApp {
    canvas: Canvas,
    controller: GridController,

    /// Parameters as edited in the panel, sanitized before use
    params: GridParams,
    show_settings: bool,

    /// Last seed entered, remembered while fixed seeding is off
    seed_value: u64,
    regenerate: bool,
}

impl GridApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let saved = AppSettings::load();
        let params = saved.params.sanitized();

        let mut canvas = Canvas::with_settings(CanvasSettings {
            zoom: saved.zoom,
            ..CanvasSettings::default()
        });
        let controller = GridController::new(params.clone(), &mut canvas);

        Self {
            canvas,
            controller,
            seed_value: params.seed.unwrap_or(0),
            params,
            show_settings: saved.show_settings,
            regenerate: false,
        }
    }

    fn settings(&self) -> AppSettings {
        AppSettings {
            show_settings: self.show_settings,
            zoom: self.canvas.settings.zoom,
            params: self.params.clone(),
        }
    }

    fn grid_panel(&mut self, ui: &mut egui::Ui) {
        let p = &mut self.params;
        ui.heading("Grid");
        ui.separator();

        ui.add(egui::Slider::new(&mut p.grid_width, 1..=MAX_GRID_DIM).text("Width"));
        ui.add(egui::Slider::new(&mut p.grid_height, 1..=MAX_GRID_DIM).text("Height"));
        ui.add(egui::Slider::new(&mut p.cell_size, 4.0..=120.0).text("Cell size"));
        ui.checkbox(&mut p.show_grid, "Show grid lines");

        ui.separator();
        ui.collapsing("Composition", |ui| {
            ui.add(egui::Slider::new(&mut p.composition_width, 1..=MAX_GRID_DIM).text("Width"));
            ui.add(egui::Slider::new(&mut p.composition_height, 1..=MAX_GRID_DIM).text("Height"));
            ui.add(egui::Slider::new(&mut p.randomness, 0.0..=1.0).text("Randomness"));

            ui.label("Shapes:");
            for &category in ShapeCategory::all() {
                ui.checkbox(p.enabled_shapes.flag_mut(category), category.name());
            }

            ui.horizontal(|ui| {
                let mut fixed = p.seed.is_some();
                if ui.checkbox(&mut fixed, "Fixed seed").changed() {
                    p.seed = fixed.then_some(self.seed_value);
                }
                if p.seed.is_some() && ui.add(egui::DragValue::new(&mut self.seed_value)).changed() {
                    p.seed = Some(self.seed_value);
                }
            });

            if ui.button("Regenerate").clicked() {
                self.regenerate = true;
            }
        });
    }

    fn animation_panel(&mut self, ui: &mut egui::Ui) {
        let p = &mut self.params;
        ui.collapsing("Animation", |ui| {
            ui.checkbox(&mut p.enable_shape_cycling, "Shape cycling");
            ui.checkbox(&mut p.enable_size_animation, "Size animation");
            ui.add(
                egui::Slider::new(&mut p.animation_speed, 0.0..=5.0)
                    .text("Speed")
                    .logarithmic(true),
            );

            egui::ComboBox::from_label("Type")
                .selected_text(p.animation_type.name())
                .show_ui(ui, |ui| {
                    for &kind in AnimationType::all() {
                        ui.selectable_value(&mut p.animation_type, kind, kind.name());
                    }
                });

            let moving = matches!(p.animation_type, AnimationType::Movement | AnimationType::Combined);
            let rotating = matches!(p.animation_type, AnimationType::Rotation | AnimationType::Combined);
            let scaling = matches!(p.animation_type, AnimationType::Scale | AnimationType::Combined);

            if moving {
                ui.add(egui::Slider::new(&mut p.movement_amplitude, 0.0..=1.0).text("Move amount"));
                ui.add(egui::Slider::new(&mut p.movement_frequency, 0.0..=5.0).text("Move rate"));
            }
            if rotating {
                ui.add(egui::Slider::new(&mut p.rotation_amplitude, 0.0..=std::f32::consts::PI).text("Rotate amount"));
                ui.add(egui::Slider::new(&mut p.rotation_frequency, 0.0..=5.0).text("Rotate rate"));
            }
            if scaling {
                ui.add(egui::Slider::new(&mut p.scale_amplitude, 0.0..=1.0).text("Scale amount"));
                ui.add(egui::Slider::new(&mut p.scale_frequency, 0.0..=5.0).text("Scale rate"));
            }
        });
    }

    fn display_panel(&mut self, ui: &mut egui::Ui) {
        ui.collapsing("Display", |ui| {
            ui.add(egui::Slider::new(&mut self.canvas.settings.zoom, 0.1..=4.0).text("Zoom"));
            ui.horizontal(|ui| {
                ui.color_edit_button_srgb(&mut self.params.shape_color);
                ui.label("Shapes");
            });
            ui.horizontal(|ui| {
                ui.color_edit_button_srgb(&mut self.params.background_color);
                ui.label("Background");
            });
        });
    }
}

impl eframe::App for GridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        if ctx.input(|i| i.viewport().close_requested()) {
            self.settings().save();
        }

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("shape-grid");
                ui.separator();

                if ui.button("🔀 Regenerate").clicked() {
                    self.regenerate = true;
                }

                ui.separator();
                ui.toggle_value(&mut self.show_settings, "⚙ Settings");
                if ui.button("💾 Save settings").clicked() {
                    self.settings().save();
                }
            });
        });

        // Settings panel
        if self.show_settings {
            egui::SidePanel::left("settings_panel")
                .min_width(240.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        self.grid_panel(ui);
                        ui.separator();
                        self.animation_panel(ui);
                        ui.separator();
                        self.display_panel(ui);
                    });
                });
        }

        let params = self.params.sanitized();
        self.controller.apply(&params, &mut self.canvas);
        if std::mem::take(&mut self.regenerate) {
            self.controller.rebuild(&mut self.canvas);
        }

        let delta = ctx.input(|i| i.stable_dt).min(MAX_FRAME_DELTA);
        self.controller.tick(delta, &mut self.canvas);

        // Status line
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let display = self.controller.display();
                let composition = self.controller.composition();
                ui.small(format!("Display: {}x{}", display.width(), display.height()));
                ui.separator();
                ui.small(format!(
                    "Composition: {}x{}",
                    composition.width(),
                    composition.height()
                ));
                ui.separator();
                ui.small(format!("Triangles: {}", self.canvas.triangle_count()));
                ui.separator();
                ui.small(format!("Time: {:.2}", self.controller.engine().time()));
            });
        });

        // Main grid display
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.canvas.show(ui, self.controller.params().background_color);
            });
    }
}
