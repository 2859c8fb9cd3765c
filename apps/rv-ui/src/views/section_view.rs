//! Fixed-diameter cross-section on a logarithmic Reynolds axis.
//!
//! egui_plot has no native log axis, so the masked profile is plotted as
//! log10 values and the tick formatter prints the de-logged magnitudes. Plot
//! bounds follow the log10 of the display range, matching the fixed axis of
//! the surface view.

use egui::Color32;
use egui_plot::{HLine, Legend, Line, Plot, PlotBounds};
use rv_app::SectionScene;
use rv_field::TRANSITION_REYNOLDS;

#[derive(Default)]
pub struct SectionView;

impl SectionView {
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &SectionScene) {
        let section = &scene.section;

        ui.heading(format!(
            "Cross-section at nozzle diameter = {:.0} µm",
            section.diameter_um
        ));

        let segments = log_segments(&section.flow_ml_min, &section.reynolds);

        let (mut y_lo, mut y_hi) = scene.log_bounds;
        if !(y_lo.is_finite() && y_hi.is_finite() && y_lo < y_hi) {
            // Non-positive display bounds; fall back to the data, then to a
            // plain decade window.
            (y_lo, y_hi) = data_log_bounds(&section.reynolds).unwrap_or((0.0, 4.0));
        }

        let x_first = section.flow_ml_min.first().copied().unwrap_or(0.0);
        let x_last = section.flow_ml_min.last().copied().unwrap_or(1.0);
        let (x_lo, x_hi) = (x_first.min(x_last), x_first.max(x_last));

        Plot::new("section_plot")
            .legend(Legend::default())
            .x_axis_label(scene.x.display())
            .y_axis_label(scene.y.display())
            .y_axis_formatter(|mark, _range| format_decade(mark.value))
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_lo, y_lo], [x_hi, y_hi]));

                let mut named = false;
                for segment in segments {
                    let mut line = Line::new(segment).color(Color32::from_rgb(66, 133, 244));
                    if !named {
                        line = line.name("Reynolds number");
                        named = true;
                    }
                    plot_ui.line(line);
                }

                plot_ui.hline(
                    HLine::new(TRANSITION_REYNOLDS.log10())
                        .color(Color32::RED)
                        .name("Transition (Re = 2000)"),
                );
            });
    }
}

/// Split the masked profile into contiguous positive runs so gaps in the
/// data stay gaps in the plot.
fn log_segments(flows: &[f64], reynolds: &[f64]) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();

    for (&q, &re) in flows.iter().zip(reynolds) {
        if re.is_finite() && re > 0.0 {
            current.push([q, re.log10()]);
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// log10 bounds of the plottable data.
fn data_log_bounds(reynolds: &[f64]) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &re in reynolds {
        if re.is_finite() && re > 0.0 {
            let log_re = re.log10();
            lo = lo.min(log_re);
            hi = hi.max(log_re);
        }
    }
    (lo < hi).then_some((lo, hi))
}

fn format_decade(log_value: f64) -> String {
    let v = 10f64.powf(log_value);
    if v >= 100.0 {
        format!("{:.0}", v)
    } else if v >= 1.0 {
        format!("{:.1}", v)
    } else {
        format!("{:.2}", v)
    }
}
