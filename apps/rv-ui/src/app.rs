use crate::input_helper::FluidInput;
use crate::views::{SectionView, SurfaceView};
use egui_file_dialog::{DialogMode, FileDialog};
use rv_app::{IssueSeverity, ParamsIssue, RenderParams, Scene, build_scene, load_params, save_params};
use rv_field::{AxisRange, Quantity};
use std::path::PathBuf;

pub struct ReyviewApp {
    params: RenderParams,
    params_path: Option<PathBuf>,
    scene: Scene,
    issues: Vec<ParamsIssue>,
    active_view: ViewTab,
    surface_view: SurfaceView,
    section_view: SectionView,
    viscosity_input: FluidInput,
    density_input: FluidInput,
    file_dialog: FileDialog,
    file_dialog_action: Option<FileDialogAction>,
    last_error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewTab {
    Surface,
    Section,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FileDialogAction {
    Open,
    Save,
}

impl ReyviewApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let params = RenderParams::default();
        let scene = build_scene(&params);
        let issues = params.validate();
        let viscosity_input =
            FluidInput::new("Viscosity [Pa·s]", Quantity::Viscosity, params.fluid.viscosity_pa_s);
        let density_input =
            FluidInput::new("Density [kg/m³]", Quantity::Density, params.fluid.density_kg_m3);

        Self {
            params,
            params_path: None,
            scene,
            issues,
            active_view: ViewTab::Surface,
            surface_view: SurfaceView::default(),
            section_view: SectionView::default(),
            viscosity_input,
            density_input,
            file_dialog: FileDialog::new(),
            file_dialog_action: None,
            last_error: None,
        }
    }

    /// Recompute every artifact from the current parameters.
    fn rebuild_scene(&mut self) {
        self.scene = build_scene(&self.params);
        self.issues = self.params.validate();
        self.surface_view.invalidate();
    }

    /// Replace the parameters wholesale (file load, reset) and resync the
    /// text inputs.
    fn set_params(&mut self, params: RenderParams) {
        self.params = params;
        self.viscosity_input.set_value(self.params.fluid.viscosity_pa_s);
        self.density_input.set_value(self.params.fluid.density_kg_m3);
        self.rebuild_scene();
    }

    fn open_params(&mut self, path: PathBuf) {
        match load_params(&path) {
            Ok(params) => {
                self.set_params(params);
                self.params_path = Some(path);
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    fn save_params_as(&mut self, path: PathBuf) {
        match save_params(&path, &self.params) {
            Ok(()) => {
                self.params_path = Some(path);
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    fn toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open").clicked() {
                    self.file_dialog_action = Some(FileDialogAction::Open);
                    let initial_dir = self
                        .params_path
                        .as_ref()
                        .and_then(|p| p.parent())
                        .and_then(|p| p.to_str());
                    let _ = self.file_dialog.open(DialogMode::SelectFile, true, initial_dir);
                }

                if ui.button("Save as").clicked() {
                    self.file_dialog_action = Some(FileDialogAction::Save);
                    self.file_dialog.save_file();
                }

                ui.separator();

                if ui.button("Reset to defaults").clicked() {
                    self.set_params(RenderParams::default());
                }

                ui.separator();
                ui.selectable_value(&mut self.active_view, ViewTab::Surface, "Surface");
                ui.selectable_value(&mut self.active_view, ViewTab::Section, "Cross-section");
            });
        });
    }

    fn params_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.heading("Input Parameters");
        ui.separator();

        if let Some(v) = self.viscosity_input.show(ui) {
            self.params.fluid.viscosity_pa_s = v;
        }
        if let Some(v) = self.density_input.show(ui) {
            self.params.fluid.density_kg_m3 = v;
        }

        ui.separator();
        range_row(ui, "Flow rate [mL/min]", &mut self.params.flow_range, 1.0, 100.0);
        range_row(ui, "Nozzle diameter [µm]", &mut self.params.diameter_range, 1.0, 500.0);
        range_row(ui, "Displayed Re", &mut self.params.display_range, 1.0, 10_000.0);

        ui.separator();
        ui.label("Cross-section diameter [µm]");
        let (lo, hi) = (
            self.params.diameter_range.min.min(self.params.diameter_range.max),
            self.params.diameter_range.max.max(self.params.diameter_range.min),
        );
        ui.add(egui::Slider::new(&mut self.params.section_diameter_um, lo..=hi));

        ui.label("Samples per axis");
        ui.add(egui::DragValue::new(&mut self.params.samples).speed(1).range(2..=500));

        if !self.issues.is_empty() {
            ui.separator();
            for issue in &self.issues {
                let color = match issue.severity {
                    IssueSeverity::Warning => egui::Color32::YELLOW,
                    IssueSeverity::Error => egui::Color32::RED,
                };
                ui.colored_label(color, &issue.message);
            }
        }
    }

    fn status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(err) = self.last_error.clone() {
                    ui.colored_label(egui::Color32::RED, err);
                    if ui.button("Dismiss").clicked() {
                        self.last_error = None;
                    }
                } else if let Some(path) = &self.params_path {
                    ui.label(format!("Params: {}", path.display()));
                } else {
                    ui.label("Params: unsaved defaults");
                }
            });
        });
    }
}

impl eframe::App for ReyviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.toolbar(ctx);
        self.status_bar(ctx);

        let before = self.params.clone();
        egui::SidePanel::left("params_panel")
            .default_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.params_sidebar(ui));
            });
        if self.params != before {
            self.rebuild_scene();
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.active_view {
            ViewTab::Surface => {
                self.surface_view
                    .show(ui, &self.scene.surface, &self.params.fluid)
            }
            ViewTab::Section => self.section_view.show(ui, &self.scene.section),
        });

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            match self.file_dialog_action.take() {
                Some(FileDialogAction::Open) => self.open_params(path.to_path_buf()),
                Some(FileDialogAction::Save) => self.save_params_as(path.to_path_buf()),
                None => {}
            }
        }
    }
}

/// Min/max editor pair for one axis range.
fn range_row(ui: &mut egui::Ui, label: &str, range: &mut AxisRange, lo: f64, hi: f64) {
    ui.label(label);
    ui.horizontal(|ui| {
        ui.add(egui::DragValue::new(&mut range.min).speed(1.0).range(lo..=hi));
        ui.label("to");
        ui.add(egui::DragValue::new(&mut range.max).speed(1.0).range(lo..=hi));
    });
}
