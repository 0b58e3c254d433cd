//! Element symbol → display color and display radius.
//!
//! Both lookups are total: unknown symbols resolve to [`DEFAULT_COLOR`] and
//! [`DEFAULT_RADIUS`]. Callers pick a [`ColorScheme`] explicitly when
//! building an [`ElementTable`]; there is no process-wide scheme.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::ColorOptions;

/// Linear RGB color with components in `0.0..=1.0`.
pub type Color = [f32; 3];

/// Fallback color for elements a scheme does not list (`#E8E8E8`).
pub const DEFAULT_COLOR: Color = rgb(0xE8, 0xE8, 0xE8);

/// Fallback display radius in angstroms.
pub const DEFAULT_RADIUS: f32 = 0.4;

/// Build a color from 8-bit channels.
#[must_use]
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

/// Format a color as `#RRGGBB`.
#[must_use]
pub fn to_hex(color: Color) -> String {
    let [r, g, b] =
        color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Element color palette.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Conventional CPK colors for common organic elements.
    #[default]
    Cpk,
    /// CPK plus silicon and iron.
    Jmol,
}

impl ColorScheme {
    /// Scheme color for `symbol`, or `None` if the scheme does not list it.
    #[must_use]
    pub fn color(self, symbol: &str) -> Option<Color> {
        let shared = match symbol {
            "H" => Some(rgb(0xFF, 0xFF, 0xFF)),
            "C" => Some(rgb(0x90, 0x90, 0x90)),
            "N" => Some(rgb(0x30, 0x50, 0xF8)),
            "O" => Some(rgb(0xFF, 0x0D, 0x0D)),
            "F" => Some(rgb(0x90, 0xE0, 0x50)),
            "Cl" => Some(rgb(0x1F, 0xF0, 0x1F)),
            "Br" => Some(rgb(0xA6, 0x29, 0x29)),
            "I" => Some(rgb(0x94, 0x00, 0x94)),
            "S" => Some(rgb(0xFF, 0xFF, 0x30)),
            "P" => Some(rgb(0xFF, 0x80, 0x00)),
            _ => None,
        };
        match (self, symbol) {
            (Self::Jmol, "Si") => Some(rgb(0xDA, 0xA5, 0x20)),
            (Self::Jmol, "Fe") => Some(rgb(0xE0, 0x66, 0x33)),
            _ => shared,
        }
    }
}

/// Display radius for `symbol` in angstroms (scaled van der Waals radius).
///
/// The radius table does not depend on the color scheme.
#[must_use]
pub fn display_radius(symbol: &str) -> f32 {
    match symbol {
        "H" => 0.25,
        "C" => 0.4,
        "N" => 0.38,
        "O" => 0.35,
        "F" => 0.31,
        "Cl" => 0.55,
        "Br" => 0.65,
        "I" => 0.7,
        "S" | "P" => 0.58,
        _ => DEFAULT_RADIUS,
    }
}

/// Resolved lookup table: a scheme plus per-symbol color overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementTable {
    scheme: ColorScheme,
    overrides: HashMap<String, Color>,
}

impl ElementTable {
    /// Table using `scheme` with no overrides.
    #[must_use]
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            overrides: HashMap::new(),
        }
    }

    /// Table configured from the color options section.
    #[must_use]
    pub fn from_options(colors: &ColorOptions) -> Self {
        Self {
            scheme: colors.scheme,
            overrides: colors.element_overrides.clone(),
        }
    }

    /// Active color scheme.
    #[must_use]
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Display color for an element symbol, matched exactly.
    #[must_use]
    pub fn color_of(&self, element: &str) -> Color {
        self.overrides
            .get(element)
            .copied()
            .or_else(|| self.scheme.color(element))
            .unwrap_or(DEFAULT_COLOR)
    }

    /// Display radius for an element symbol, matched exactly.
    #[must_use]
    pub fn radius_of(&self, element: &str) -> f32 {
        display_radius(element)
    }
}
