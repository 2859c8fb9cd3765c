//! Render parameter schema, YAML persistence, and opt-in validation.
//!
//! Validation reports findings without ever blocking the compute path: the
//! unguarded behavior (non-finite values rendered as gaps) stays the default,
//! and [`RenderParams::ensure_valid`] promotes error-severity findings for
//! callers that want strictness.

use std::path::Path;

use rv_field::{AxisRange, DEFAULT_SAMPLES, FluidProperties};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Everything the parameter sidebar supplies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    pub fluid: FluidProperties,
    /// Flow-rate axis [mL/min]
    pub flow_range: AxisRange,
    /// Nozzle-diameter axis [µm]
    pub diameter_range: AxisRange,
    /// Displayed Reynolds-number axis
    pub display_range: AxisRange,
    /// Diameter the cross-section is taken at [µm]
    pub section_diameter_um: f64,
    /// Samples per axis
    pub samples: usize,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            fluid: FluidProperties::WATER,
            flow_range: AxisRange::new(1.0, 20.0),
            diameter_range: AxisRange::new(1.0, 250.0),
            display_range: AxisRange::new(1.0, 5000.0),
            section_diameter_um: 250.0,
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Warning,
    Error,
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamsIssue {
    pub severity: IssueSeverity,
    pub message: String,
}

impl ParamsIssue {
    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            message: message.into(),
        }
    }
}

impl RenderParams {
    /// Collect validation findings without rejecting anything.
    pub fn validate(&self) -> Vec<ParamsIssue> {
        let mut issues = Vec::new();

        if let Err(e) = self.fluid.validated() {
            issues.push(ParamsIssue::error(e.to_string()));
        }

        for (range, name) in [
            (self.flow_range, "flow range"),
            (self.diameter_range, "diameter range"),
            (self.display_range, "display range"),
        ] {
            if range.min > range.max {
                issues.push(ParamsIssue::warning(format!(
                    "{} is inverted ({} > {})",
                    name, range.min, range.max
                )));
            }
        }

        if self.diameter_range.min <= 0.0 {
            issues.push(ParamsIssue::warning(
                "non-positive diameters produce non-finite Reynolds numbers",
            ));
        }

        if self.display_range.min <= 0.0 {
            issues.push(ParamsIssue::warning(
                "logarithmic axis is undefined for a non-positive display minimum",
            ));
        }

        if !self.diameter_range.contains(self.section_diameter_um) {
            issues.push(ParamsIssue::warning(format!(
                "section diameter {} µm lies outside the diameter range",
                self.section_diameter_um
            )));
        }

        if self.samples < 2 {
            issues.push(ParamsIssue::error("at least 2 samples per axis required"));
        }

        issues
    }

    /// Promote the first error-severity finding to an [`AppError`].
    pub fn ensure_valid(&self) -> AppResult<()> {
        if let Some(issue) = self
            .validate()
            .into_iter()
            .find(|i| i.severity == IssueSeverity::Error)
        {
            return Err(AppError::Validation(issue.message));
        }
        Ok(())
    }
}

/// Load params from a YAML file.
pub fn load_params(path: &Path) -> AppResult<RenderParams> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ParamsFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let params: RenderParams = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Params(format!("Failed to parse params YAML: {}", e)))?;

    tracing::debug!(path = %path.display(), "loaded params");
    Ok(params)
}

/// Save params to a YAML file.
pub fn save_params(path: &Path, params: &RenderParams) -> AppResult<()> {
    let content = serde_yaml::to_string(params)
        .map_err(|e| AppError::Params(format!("Failed to serialize params: {}", e)))?;

    std::fs::write(path, content).map_err(|e| AppError::ParamsFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let params = RenderParams::default();
        assert_eq!(params.fluid, FluidProperties::WATER);
        assert_eq!(params.flow_range, AxisRange::new(1.0, 20.0));
        assert_eq!(params.diameter_range, AxisRange::new(1.0, 250.0));
        assert_eq!(params.display_range, AxisRange::new(1.0, 5000.0));
        assert_eq!(params.section_diameter_um, 250.0);
        assert_eq!(params.samples, 100);
    }

    #[test]
    fn defaults_are_valid() {
        assert!(RenderParams::default().validate().is_empty());
        assert!(RenderParams::default().ensure_valid().is_ok());
    }

    #[test]
    fn yaml_round_trip() {
        let mut params = RenderParams::default();
        params.fluid.viscosity_pa_s = 0.00089;
        params.flow_range = AxisRange::new(2.0, 40.0);

        let yaml = serde_yaml::to_string(&params).unwrap();
        let restored: RenderParams = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(restored, params);
    }

    #[test]
    fn partial_yaml_uses_defaults() {
        let restored: RenderParams = serde_yaml::from_str("samples: 25\n").unwrap();
        assert_eq!(restored.samples, 25);
        assert_eq!(restored.display_range, AxisRange::new(1.0, 5000.0));
    }

    #[test]
    fn non_positive_viscosity_is_an_error() {
        let mut params = RenderParams::default();
        params.fluid.viscosity_pa_s = 0.0;
        assert!(params
            .validate()
            .iter()
            .any(|i| i.severity == IssueSeverity::Error));
        assert!(params.ensure_valid().is_err());
    }

    #[test]
    fn inverted_range_is_a_warning_only() {
        let mut params = RenderParams::default();
        params.flow_range = AxisRange::new(20.0, 1.0);
        let issues = params.validate();
        assert!(issues.iter().any(|i| i.message.contains("inverted")));
        // Warnings never block
        assert!(params.ensure_valid().is_ok());
    }

    #[test]
    fn zero_display_minimum_warns_about_log_axis() {
        let mut params = RenderParams::default();
        params.display_range = AxisRange::new(0.0, 5000.0);
        let issues = params.validate();
        assert!(issues.iter().any(|i| i.message.contains("logarithmic")));
    }

    #[test]
    fn section_diameter_outside_range_warns() {
        let mut params = RenderParams::default();
        params.section_diameter_um = 400.0;
        let issues = params.validate();
        assert!(issues.iter().any(|i| i.message.contains("section diameter")));
    }

    #[test]
    fn load_and_save_round_trip() {
        let dir = std::env::temp_dir().join("rv-app-params-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("params.yaml");

        let params = RenderParams::default();
        save_params(&path, &params).unwrap();
        let restored = load_params(&path).unwrap();
        assert_eq!(restored, params);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = load_params(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("not/here.yaml"));
    }
}
