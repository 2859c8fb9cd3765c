//! Prepared read models for the frontends.
//!
//! `build_scene` runs the field builders once per parameter change and
//! attaches axis metadata so both frontends consume one structure instead of
//! re-deriving labels and bounds.

use rv_field::{CrossSection, SurfaceArtifacts, build_cross_section, build_surface};

use crate::params::RenderParams;

/// Axis label and units.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub name: String,
    pub units: Option<String>,
}

impl AxisLabel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: None,
        }
    }

    pub fn with_units(name: impl Into<String>, units: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: Some(units.into()),
        }
    }

    pub fn display(&self) -> String {
        if let Some(ref units) = self.units {
            format!("{} ({})", self.name, units)
        } else {
            self.name.clone()
        }
    }
}

/// Axis metadata for the surface view.
#[derive(Debug, Clone)]
pub struct SurfaceAxes {
    pub x: AxisLabel,
    pub y: AxisLabel,
    pub z: AxisLabel,
    /// Fixed color/z scale, equal to the display range
    pub z_range: (f64, f64),
}

/// Everything the surface view renders.
#[derive(Debug, Clone)]
pub struct SurfaceScene {
    pub artifacts: SurfaceArtifacts,
    pub axes: SurfaceAxes,
}

/// Everything the cross-section view renders.
#[derive(Debug, Clone)]
pub struct SectionScene {
    pub section: CrossSection,
    pub x: AxisLabel,
    pub y: AxisLabel,
    /// log10 of the display range endpoints. Non-positive endpoints produce
    /// the IEEE result (NaN or -inf); views fall back to data bounds then.
    pub log_bounds: (f64, f64),
}

/// One render pass worth of prepared data.
#[derive(Debug, Clone)]
pub struct Scene {
    pub surface: SurfaceScene,
    pub section: SectionScene,
}

/// Build all artifacts for the current parameters.
pub fn build_scene(params: &RenderParams) -> Scene {
    tracing::debug!(samples = params.samples, "building scene");

    let artifacts = build_surface(
        params.flow_range,
        params.diameter_range,
        params.display_range,
        &params.fluid,
        params.samples,
    );

    let section = build_cross_section(
        params.flow_range,
        params.section_diameter_um,
        params.display_range,
        &params.fluid,
        params.samples,
    );

    let surface = SurfaceScene {
        artifacts,
        axes: SurfaceAxes {
            x: AxisLabel::with_units("Flow rate", "mL/min"),
            y: AxisLabel::with_units("Nozzle diameter", "µm"),
            z: AxisLabel::with_units("Reynolds number", "-"),
            z_range: (params.display_range.min, params.display_range.max),
        },
    };

    let section = SectionScene {
        section,
        x: AxisLabel::with_units("Flow rate", "mL/min"),
        y: AxisLabel::with_units("Reynolds number", "-, log scale"),
        log_bounds: (
            params.display_range.min.log10(),
            params.display_range.max.log10(),
        ),
    };

    Scene { surface, section }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_label_display() {
        assert_eq!(
            AxisLabel::with_units("Flow rate", "mL/min").display(),
            "Flow rate (mL/min)"
        );
        assert_eq!(AxisLabel::new("Position").display(), "Position");
    }

    #[test]
    fn scene_carries_documented_titles() {
        let scene = build_scene(&RenderParams::default());
        assert_eq!(scene.surface.axes.x.display(), "Flow rate (mL/min)");
        assert_eq!(scene.surface.axes.y.display(), "Nozzle diameter (µm)");
        assert_eq!(scene.surface.axes.z.display(), "Reynolds number (-)");
        assert_eq!(scene.section.y.display(), "Reynolds number (-, log scale)");
    }

    #[test]
    fn z_range_equals_display_range() {
        let scene = build_scene(&RenderParams::default());
        assert_eq!(scene.surface.axes.z_range, (1.0, 5000.0));
    }

    #[test]
    fn log_bounds_are_log10_of_display_range() {
        let scene = build_scene(&RenderParams::default());
        assert_eq!(scene.section.log_bounds.0, 0.0);
        assert!((scene.section.log_bounds.1 - 5000f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn non_positive_display_minimum_gives_non_finite_log_bound() {
        let mut params = RenderParams::default();
        params.display_range.min = 0.0;
        let scene = build_scene(&params);
        assert!(!scene.section.log_bounds.0.is_finite());
    }

    #[test]
    fn scene_shapes_follow_samples() {
        let mut params = RenderParams::default();
        params.samples = 37;
        let scene = build_scene(&params);
        assert_eq!(scene.surface.artifacts.reynolds.dim(), (37, 37));
        assert_eq!(scene.section.section.flow_ml_min.len(), 37);
    }
}
