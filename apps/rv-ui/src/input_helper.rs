//! Unit-aware fluid property inputs.
//!
//! Text fields that accept a bare number in the canonical unit or a number
//! with a unit suffix ("1.016 mPa·s", "0.998 g/mL"). The raw text and the
//! last successfully parsed value are kept separately so a half-typed entry
//! never corrupts the parameters.

use egui::{Color32, Ui};
use rv_field::{Quantity, parse_quantity};

pub struct FluidInput {
    label: &'static str,
    quantity: Quantity,
    text: String,
    canonical: f64,
    error: Option<String>,
}

impl FluidInput {
    pub fn new(label: &'static str, quantity: Quantity, initial: f64) -> Self {
        Self {
            label,
            quantity,
            text: format_value(initial),
            canonical: initial,
            error: None,
        }
    }

    /// Reset the field to an externally provided value (file load, defaults).
    pub fn set_value(&mut self, value: f64) {
        self.text = format_value(value);
        self.canonical = value;
        self.error = None;
    }

    /// Render the input; returns the new canonical value when the text
    /// parses to something different.
    pub fn show(&mut self, ui: &mut Ui) -> Option<f64> {
        let mut updated = None;

        ui.label(self.label);
        let response = ui.text_edit_singleline(&mut self.text);
        if response.changed() {
            match parse_quantity(&self.text, self.quantity) {
                Ok(v) => {
                    self.error = None;
                    if v != self.canonical {
                        self.canonical = v;
                        updated = Some(v);
                    }
                }
                Err(e) => self.error = Some(e.to_string()),
            }
        }

        if let Some(err) = &self.error {
            ui.colored_label(Color32::RED, err);
        }

        updated
    }
}

fn format_value(value: f64) -> String {
    // Enough digits to round-trip the defaults without scientific notation
    format!("{}", value)
}
