//! Artifact assembly for the surface and cross-section views.
//!
//! Composes axis sampling, meshgrid construction, field evaluation, and
//! display-range masking into the array bundles the frontends consume.

use crate::fluid::FluidProperties;
use crate::grid::{Grid, boundary_plane};
use crate::mask::{mask_profile, mask_surface};
use crate::reynolds::{TRANSITION_REYNOLDS, reynolds_profile, reynolds_surface};
use crate::sweep::AxisRange;
use ndarray::Array2;
use rv_core::finite_min_max;

/// Default number of samples along each axis.
pub const DEFAULT_SAMPLES: usize = 100;

/// Arrays backing the surface view.
#[derive(Debug, Clone)]
pub struct SurfaceArtifacts {
    /// Flow-rate coordinate per grid point [mL/min]
    pub x: Array2<f64>,
    /// Diameter coordinate per grid point [µm]
    pub y: Array2<f64>,
    /// Masked Reynolds number per grid point; NaN outside the display range
    pub reynolds: Array2<f64>,
    /// Constant transition overlay (Re = 2000), same shape as the grid
    pub boundary: Array2<f64>,
    /// Number of in-range entries
    pub num_visible: usize,
    /// Number of masked entries
    pub num_masked: usize,
}

impl SurfaceArtifacts {
    /// Min and max over the visible entries, `None` when fully masked.
    pub fn visible_range(&self) -> Option<(f64, f64)> {
        finite_min_max(self.reynolds.iter().copied())
    }

    /// Share of visible entries below the transition value.
    ///
    /// Returns 0 for a fully masked surface.
    pub fn laminar_fraction(&self) -> f64 {
        if self.num_visible == 0 {
            return 0.0;
        }
        let laminar = self
            .reynolds
            .iter()
            .filter(|v| v.is_finite() && **v < TRANSITION_REYNOLDS)
            .count();
        laminar as f64 / self.num_visible as f64
    }
}

/// Arrays backing the fixed-diameter cross-section view.
#[derive(Debug, Clone)]
pub struct CrossSection {
    /// Diameter the slice was taken at [µm]
    pub diameter_um: f64,
    /// Flow-rate samples [mL/min]
    pub flow_ml_min: Vec<f64>,
    /// Masked Reynolds numbers, same length as `flow_ml_min`
    pub reynolds: Vec<f64>,
    /// Number of in-range entries
    pub num_visible: usize,
    /// Number of masked entries
    pub num_masked: usize,
}

impl CrossSection {
    /// Min and max over the visible entries, `None` when fully masked.
    pub fn visible_range(&self) -> Option<(f64, f64)> {
        finite_min_max(self.reynolds.iter().copied())
    }
}

/// Build the masked surface and its transition overlay.
///
/// Samples both axes at `samples` points, meshes them, evaluates the field,
/// and masks with the display range. Non-finite field values (zero diameter
/// or viscosity) count as masked.
pub fn build_surface(
    flow_range: AxisRange,
    diameter_range: AxisRange,
    display_range: AxisRange,
    fluid: &FluidProperties,
    samples: usize,
) -> SurfaceArtifacts {
    let grid = Grid::mesh(&flow_range.sample(samples), &diameter_range.sample(samples));
    let field = reynolds_surface(&grid, fluid);
    let masked = mask_surface(&field, display_range.min, display_range.max);
    let num_visible = masked.iter().filter(|v| v.is_finite()).count();
    let num_masked = masked.len() - num_visible;
    let boundary = boundary_plane(grid.shape(), TRANSITION_REYNOLDS);
    let Grid { x, y } = grid;

    SurfaceArtifacts {
        x,
        y,
        reynolds: masked,
        boundary,
        num_visible,
        num_masked,
    }
}

/// Build the fixed-diameter cross-section, masked through the same mask as
/// the surface.
pub fn build_cross_section(
    flow_range: AxisRange,
    diameter_um: f64,
    display_range: AxisRange,
    fluid: &FluidProperties,
    samples: usize,
) -> CrossSection {
    let flows = flow_range.sample(samples);
    let field = reynolds_profile(&flows, diameter_um, fluid);
    let masked = mask_profile(&field, display_range.min, display_range.max);
    let num_visible = masked.iter().filter(|v| v.is_finite()).count();
    let num_masked = masked.len() - num_visible;

    CrossSection {
        diameter_um,
        flow_ml_min: flows,
        reynolds: masked,
        num_visible,
        num_masked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_ranges() -> (AxisRange, AxisRange, AxisRange) {
        (
            AxisRange::new(1.0, 20.0),
            AxisRange::new(1.0, 250.0),
            AxisRange::new(1.0, 5000.0),
        )
    }

    #[test]
    fn surface_shapes_match() {
        let (flow, diameter, display) = default_ranges();
        let surface = build_surface(flow, diameter, display, &FluidProperties::WATER, 100);
        assert_eq!(surface.x.dim(), (100, 100));
        assert_eq!(surface.y.dim(), (100, 100));
        assert_eq!(surface.reynolds.dim(), (100, 100));
        assert_eq!(surface.boundary.dim(), (100, 100));
        assert_eq!(surface.num_visible + surface.num_masked, 100 * 100);
    }

    #[test]
    fn boundary_is_transition_everywhere() {
        let (flow, diameter, display) = default_ranges();
        let surface = build_surface(flow, diameter, display, &FluidProperties::WATER, 10);
        assert!(surface.boundary.iter().all(|&v| v == TRANSITION_REYNOLDS));
    }

    #[test]
    fn masked_entries_are_nan() {
        let (flow, diameter, display) = default_ranges();
        let surface = build_surface(flow, diameter, display, &FluidProperties::WATER, 50);
        let fluid = FluidProperties::WATER;
        for ((i, j), &masked) in surface.reynolds.indexed_iter() {
            let raw = fluid.reynolds(surface.x[[i, j]], surface.y[[i, j]]);
            if display.contains(raw) {
                assert_eq!(masked, raw);
            } else {
                assert!(masked.is_nan());
            }
        }
    }

    #[test]
    fn cross_section_matches_surface_row() {
        let (flow, diameter, display) = default_ranges();
        let fluid = FluidProperties::WATER;
        let samples = 40;
        let surface = build_surface(flow, diameter, display, &fluid, samples);

        // Pick a sampled diameter so the slice lines up with a grid row.
        let row = 25;
        let diameter_um = surface.y[[row, 0]];
        let section = build_cross_section(flow, diameter_um, display, &fluid, samples);

        for j in 0..samples {
            assert_eq!(section.flow_ml_min[j], surface.x[[row, j]]);
            let from_surface = surface.reynolds[[row, j]];
            let from_section = section.reynolds[j];
            assert_eq!(from_section.to_bits(), from_surface.to_bits());
        }
    }

    #[test]
    fn zero_diameter_rows_become_gaps() {
        let flow = AxisRange::new(1.0, 20.0);
        let diameter = AxisRange::new(0.0, 250.0);
        let display = AxisRange::new(1.0, 5000.0);
        let surface = build_surface(flow, diameter, display, &FluidProperties::WATER, 10);
        // The diameter = 0 row divides by zero; infinities are masked out.
        for j in 0..10 {
            assert!(surface.reynolds[[0, j]].is_nan());
        }
        assert!(surface.num_masked >= 10);
    }

    #[test]
    fn laminar_fraction_counts_below_transition() {
        let (flow, diameter, display) = default_ranges();
        let surface = build_surface(flow, diameter, display, &FluidProperties::WATER, 50);
        let fraction = surface.laminar_fraction();
        assert!(fraction > 0.0 && fraction <= 1.0);

        // A display window entirely above the transition forces zero.
        let above = build_surface(
            flow,
            diameter,
            AxisRange::new(3000.0, 5000.0),
            &FluidProperties::WATER,
            50,
        );
        assert_eq!(above.laminar_fraction(), 0.0);
    }

    #[test]
    fn visible_range_none_when_fully_masked() {
        let flow = AxisRange::new(1.0, 20.0);
        let diameter = AxisRange::new(1.0, 250.0);
        // Window nothing can reach
        let display = AxisRange::new(1e9, 2e9);
        let surface = build_surface(flow, diameter, display, &FluidProperties::WATER, 20);
        assert_eq!(surface.visible_range(), None);
        assert_eq!(surface.num_visible, 0);
    }

    #[test]
    fn section_counters_add_up() {
        let (flow, _, display) = default_ranges();
        let section = build_cross_section(flow, 250.0, display, &FluidProperties::WATER, 100);
        assert_eq!(section.flow_ml_min.len(), 100);
        assert_eq!(section.reynolds.len(), 100);
        assert_eq!(section.num_visible + section.num_masked, 100);
    }
}
