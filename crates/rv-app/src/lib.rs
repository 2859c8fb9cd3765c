//! Shared application service layer for reyview.
//!
//! This crate provides a unified interface for both CLI and GUI frontends,
//! centralizing parameter handling, validation, and scene assembly.

pub mod error;
pub mod params;
pub mod scene;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use params::{IssueSeverity, ParamsIssue, RenderParams, load_params, save_params};
pub use scene::{AxisLabel, Scene, SectionScene, SurfaceAxes, SurfaceScene, build_scene};
