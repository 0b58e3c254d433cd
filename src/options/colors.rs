use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::elements::{rgb, Color, ColorScheme};

/// Color palette options for atoms and bonds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Element color scheme used for atom spheres.
    pub scheme: ColorScheme,
    /// RGB color for bond cylinders.
    pub bond: Color,
    /// RGB color for bond cylinders joining consecutively selected atoms.
    pub bond_highlight: Color,
    /// RGB color for the measurement polyline.
    pub measurement_line: Color,
    /// Per-element color overrides keyed by symbol, applied before the
    /// scheme.
    pub element_overrides: HashMap<String, Color>,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::Cpk,
            bond: rgb(0xCC, 0xCC, 0xCC),
            bond_highlight: rgb(0xFF, 0x99, 0x00),
            measurement_line: rgb(0xFF, 0xFF, 0x00),
            element_overrides: HashMap::new(),
        }
    }
}

impl ColorOptions {
    /// Bond color for the given highlight state.
    #[must_use]
    pub fn bond_color(&self, highlighted: bool) -> Color {
        if highlighted {
            self.bond_highlight
        } else {
            self.bond
        }
    }
}
