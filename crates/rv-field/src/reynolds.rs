//! Pipe-flow Reynolds number for volumetric flow through a circular nozzle.
//!
//! The standard `Re = ρ·v·D/µ` is rewritten in terms of volumetric flow rate
//! through the nozzle cross-section (`v = Q/A`, `A = πD²/4`), which cancels
//! one power of diameter. With flow in mL/min and diameter in µm the metric
//! prefixes cancel as well, leaving only the 60 s/min factor in the
//! denominator.

use crate::fluid::FluidProperties;
use crate::grid::Grid;
use ndarray::Array2;
use std::f64::consts::PI;

/// Conventional laminar/turbulent transition value for pipe flow.
pub const TRANSITION_REYNOLDS: f64 = 2000.0;

/// Reynolds number at a single operating point.
///
/// The grouping `(4ρQ)/(60µπD)` is evaluated exactly as written so results
/// stay bit-comparable across frontends; the constants must not be folded
/// into a single factor. Zero diameter or viscosity divides by zero and
/// yields an infinity that the display-range mask later turns into a gap.
#[inline]
pub fn reynolds(flow_ml_min: f64, diameter_um: f64, density_kg_m3: f64, viscosity_pa_s: f64) -> f64 {
    (4.0 * density_kg_m3 * flow_ml_min) / (60.0 * viscosity_pa_s * PI * diameter_um)
}

/// Flow rate [mL/min] at which the flow crosses [`TRANSITION_REYNOLDS`] for
/// a given nozzle diameter. Inverse of [`reynolds`] in its flow argument.
pub fn transition_flow_ml_min(diameter_um: f64, fluid: &FluidProperties) -> f64 {
    (TRANSITION_REYNOLDS * 60.0 * fluid.viscosity_pa_s * PI * diameter_um)
        / (4.0 * fluid.density_kg_m3)
}

/// Evaluate the field along a flow-rate profile at fixed diameter.
pub fn reynolds_profile(flows_ml_min: &[f64], diameter_um: f64, fluid: &FluidProperties) -> Vec<f64> {
    flows_ml_min
        .iter()
        .map(|&q| fluid.reynolds(q, diameter_um))
        .collect()
}

/// Evaluate the field at every point of a meshed grid.
pub fn reynolds_surface(grid: &Grid, fluid: &FluidProperties) -> Array2<f64> {
    grid.map_field(|q, d| fluid.reynolds(q, d))
}
