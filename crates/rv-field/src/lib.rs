//! rv-field: Reynolds number field computation for reyview.
//!
//! Provides:
//! - Fluid property inputs (density, dynamic viscosity)
//! - The pipe-flow Reynolds number formula over scalars, profiles, and grids
//! - Inclusive display-range masking with NaN gaps
//! - Axis sampling and meshgrid construction
//! - Artifact builders for the surface and cross-section views
//!
//! # Architecture
//!
//! The scalar formula in [`reynolds`] is the single source of truth; the
//! profile and surface forms apply it elementwise. The builders in `builder`
//! compose sampling, evaluation, and masking, and never fail: domain
//! anomalies (zero diameter, zero viscosity) propagate as non-finite entries
//! that the masking layer turns into chart gaps.

pub mod builder;
pub mod error;
pub mod fluid;
pub mod grid;
pub mod mask;
pub mod reynolds;
pub mod sweep;
pub mod units;

// Re-exports for ergonomics
pub use builder::{CrossSection, DEFAULT_SAMPLES, SurfaceArtifacts, build_cross_section, build_surface};
pub use error::{FieldError, FieldResult};
pub use fluid::FluidProperties;
pub use grid::{Grid, boundary_plane};
pub use mask::{mask_profile, mask_surface, mask_value};
pub use reynolds::{
    TRANSITION_REYNOLDS, reynolds, reynolds_profile, reynolds_surface, transition_flow_ml_min,
};
pub use sweep::AxisRange;
pub use units::{Quantity, UnitError, parse_quantity};
