//! Colormapped surface view with the laminar/turbulent transition overlay.

use crate::colormap;
use egui::{Color32, ColorImage, TextureHandle, TextureOptions};
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotImage, PlotPoint};
use rv_app::SurfaceScene;
use rv_field::{FluidProperties, SurfaceArtifacts, transition_flow_ml_min};

#[derive(Default)]
pub struct SurfaceView {
    texture: Option<TextureHandle>,
}

impl SurfaceView {
    /// Drop the cached field texture so the next frame re-rasterizes.
    pub fn invalidate(&mut self) {
        self.texture = None;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, scene: &SurfaceScene, fluid: &FluidProperties) {
        let artifacts = &scene.artifacts;

        ui.heading("Reynolds number surface");
        ui.label("Red curve is the boundary between laminar and turbulent flow (Re = 2000)");

        let (color_lo, color_hi) = artifacts.visible_range().unwrap_or(scene.axes.z_range);
        ui.label(format!(
            "{} color scale: {:.0} to {:.0}",
            scene.axes.z.display(),
            color_lo,
            color_hi
        ));

        if self.texture.is_none() {
            let image = rasterize(artifacts, scene.axes.z_range);
            self.texture =
                Some(ui.ctx().load_texture("reynolds_surface", image, TextureOptions::LINEAR));
        }

        let (rows, cols) = artifacts.reynolds.dim();
        let (x_lo, x_hi) = ordered(artifacts.x[[0, 0]], artifacts.x[[0, cols - 1]]);
        let (y_lo, y_hi) = ordered(artifacts.y[[0, 0]], artifacts.y[[rows - 1, 0]]);

        // Transition curve: flow rate reaching Re = 2000 per diameter sample
        let transition: Vec<[f64; 2]> = (0..rows)
            .map(|i| {
                let diameter_um = artifacts.y[[i, 0]];
                [transition_flow_ml_min(diameter_um, fluid), diameter_um]
            })
            .collect();

        let texture = self.texture.as_ref().unwrap().id();

        Plot::new("surface_plot")
            .legend(Legend::default())
            .x_axis_label(scene.axes.x.display())
            .y_axis_label(scene.axes.y.display())
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_lo, y_lo], [x_hi, y_hi]));

                plot_ui.image(PlotImage::new(
                    texture,
                    PlotPoint::new((x_lo + x_hi) / 2.0, (y_lo + y_hi) / 2.0),
                    egui::vec2((x_hi - x_lo) as f32, (y_hi - y_lo) as f32),
                ));

                plot_ui.line(
                    Line::new(transition)
                        .color(Color32::RED)
                        .name("Transition (Re = 2000)"),
                );
            });
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    (a.min(b), a.max(b))
}

/// Rasterize the masked field into an image, normalized over the visible
/// values (falling back to the display range when everything is masked).
fn rasterize(artifacts: &SurfaceArtifacts, z_range: (f64, f64)) -> ColorImage {
    let (rows, cols) = artifacts.reynolds.dim();
    let (lo, hi) = artifacts.visible_range().unwrap_or(z_range);
    let span = if hi > lo { hi - lo } else { 1.0 };

    let mut pixels = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        // Image row 0 is the top of the plot, i.e. the largest diameter
        let row = rows - 1 - i;
        for j in 0..cols {
            let re = artifacts.reynolds[[row, j]];
            pixels.push(colormap::viridis((re - lo) / span));
        }
    }

    ColorImage {
        size: [cols, rows],
        pixels,
    }
}
