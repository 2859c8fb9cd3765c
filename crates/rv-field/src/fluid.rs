//! Fluid property inputs.

use crate::error::{FieldError, FieldResult};

/// Density and dynamic viscosity of the working fluid.
///
/// Values are taken in the units the formula bakes in (kg/m³, Pa·s) and are
/// used without further conversion. The computation path accepts any value,
/// including non-physical ones; [`FluidProperties::validated`] is the opt-in
/// positivity check.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FluidProperties {
    /// Density [kg/m³]
    pub density_kg_m3: f64,
    /// Dynamic viscosity [Pa·s]
    pub viscosity_pa_s: f64,
}

impl FluidProperties {
    /// Liquid water near room temperature.
    pub const WATER: Self = Self {
        density_kg_m3: 999.974,
        viscosity_pa_s: 0.001016,
    };

    pub fn new(density_kg_m3: f64, viscosity_pa_s: f64) -> Self {
        Self {
            density_kg_m3,
            viscosity_pa_s,
        }
    }

    /// Reject zero or negative properties.
    ///
    /// Written with negated comparisons so NaN inputs are rejected too.
    pub fn validated(self) -> FieldResult<Self> {
        if !(self.density_kg_m3 > 0.0) {
            return Err(FieldError::NonPhysical { what: "density" });
        }
        if !(self.viscosity_pa_s > 0.0) {
            return Err(FieldError::NonPhysical { what: "viscosity" });
        }
        Ok(self)
    }

    /// Reynolds number at one operating point for this fluid.
    pub fn reynolds(&self, flow_ml_min: f64, diameter_um: f64) -> f64 {
        crate::reynolds::reynolds(
            flow_ml_min,
            diameter_um,
            self.density_kg_m3,
            self.viscosity_pa_s,
        )
    }
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self::WATER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_water() {
        let fluid = FluidProperties::default();
        assert_eq!(fluid.density_kg_m3, 999.974);
        assert_eq!(fluid.viscosity_pa_s, 0.001016);
    }

    #[test]
    fn validated_accepts_positive() {
        assert!(FluidProperties::WATER.validated().is_ok());
    }

    #[test]
    fn validated_rejects_zero_viscosity() {
        let err = FluidProperties::new(1000.0, 0.0).validated().unwrap_err();
        assert_eq!(err, FieldError::NonPhysical { what: "viscosity" });
    }

    #[test]
    fn validated_rejects_negative_density() {
        let err = FluidProperties::new(-1.0, 0.001).validated().unwrap_err();
        assert_eq!(err, FieldError::NonPhysical { what: "density" });
    }

    #[test]
    fn validated_rejects_nan() {
        assert!(FluidProperties::new(f64::NAN, 0.001).validated().is_err());
    }
}
