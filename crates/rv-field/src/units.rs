//! Unit-aware numeric input parsing.
//!
//! Text inputs accept a bare number in the canonical unit or a number with a
//! unit suffix ("1.016 mPa·s", "0.998 g/mL"). Canonical units are the units
//! the formula bakes in (Pa·s, kg/m³); the entered suffix is the only
//! conversion ever applied.

use std::fmt;

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Dynamic viscosity (canonical: Pa·s)
    Viscosity,
    /// Density (canonical: kg/m³)
    Density,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viscosity => write!(f, "Viscosity"),
            Self::Density => write!(f, "Density"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    ParseError(String),
    /// Unit not recognized for this quantity
    UnknownUnit { unit: String, quantity: String },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseError(msg) => write!(f, "Parse error: {}", msg),
            Self::UnknownUnit { unit, quantity } => {
                write!(f, "Unknown unit '{}' for {}", unit, quantity)
            }
        }
    }
}

impl std::error::Error for UnitError {}

/// Parse user text into a canonical value for the given quantity.
///
/// A bare number is taken to be in the canonical unit already.
pub fn parse_quantity(text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let (number, unit) = split_number(text)?;
    if unit.is_empty() {
        return Ok(number);
    }

    let factor = match quantity {
        Quantity::Viscosity => viscosity_factor(unit),
        Quantity::Density => density_factor(unit),
    };

    match factor {
        Some(f) => Ok(number * f),
        None => Err(UnitError::UnknownUnit {
            unit: unit.to_string(),
            quantity: quantity.to_string(),
        }),
    }
}

/// Split leading numeric text from a trailing unit.
fn split_number(text: &str) -> Result<(f64, &str), UnitError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(UnitError::ParseError("empty input".to_string()));
    }

    let split = trimmed
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    let number: f64 = trimmed[..split]
        .parse()
        .map_err(|_| UnitError::ParseError(format!("'{}' is not a number", &trimmed[..split])))?;

    Ok((number, trimmed[split..].trim()))
}

/// Multiplier to Pa·s.
fn viscosity_factor(unit: &str) -> Option<f64> {
    match unit {
        "Pa·s" | "Pa.s" | "Pas" | "Pa s" => Some(1.0),
        "mPa·s" | "mPa.s" | "mPas" | "mPa s" => Some(1e-3),
        "cP" | "cp" => Some(1e-3),
        "P" => Some(0.1),
        _ => None,
    }
}

/// Multiplier to kg/m³.
fn density_factor(unit: &str) -> Option<f64> {
    match unit {
        "kg/m3" | "kg/m^3" | "kg/m³" => Some(1.0),
        "g/cm3" | "g/cm^3" | "g/cm³" | "g/mL" | "g/ml" => Some(1000.0),
        "g/L" | "g/l" => Some(1.0),
        _ => None,
    }
}
