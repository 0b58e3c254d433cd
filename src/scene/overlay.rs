use glam::Vec3;
use serde::Serialize;

use crate::elements::{Color, ElementTable};
use crate::measure::MeasurementResult;
use crate::molecule::MoleculeDataset;
use crate::selection::{MeasureMode, SelectionState};

/// Gap between an atom's surface and its pick label.
pub const PICK_LABEL_CLEARANCE: f32 = 0.2;

/// Text label attached to a world-space point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayLabel {
    /// Where the label is anchored.
    pub anchor: Vec3,
    /// Formatted value, e.g. `"109.47°"`.
    pub text: String,
}

/// Polyline through the selected atoms plus the measurement label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementOverlay {
    /// Selected atom positions in selection order.
    pub points: Vec<Vec3>,
    /// Line color.
    pub color: Color,
    /// Present when a measurement is available.
    pub label: Option<OverlayLabel>,
}

/// Overlay for the current selection.
///
/// Requires an active mode and at least two selected atoms, all present in
/// `dataset`. The label sits on the middle selected atom
/// (`points[len / 2]`): the vertex for an angle, the second axis atom for a
/// dihedral.
#[must_use]
pub fn build_overlay(
    dataset: &MoleculeDataset,
    selection: &SelectionState,
    measurement: Option<&MeasurementResult>,
    color: Color,
) -> Option<MeasurementOverlay> {
    if selection.mode() == MeasureMode::None || selection.selected().len() < 2
    {
        return None;
    }
    let points: Vec<Vec3> = selection
        .selected()
        .iter()
        .map(|&i| dataset.position(i))
        .collect::<Option<_>>()?;

    let label = measurement.map(|m| OverlayLabel {
        anchor: points[points.len() / 2],
        text: m.label(),
    });

    Some(MeasurementOverlay {
        points,
        color,
        label,
    })
}

/// One `{element}{index}` label per selected atom, in selection order,
/// floating [`PICK_LABEL_CLEARANCE`] above the atom's sphere along +Y.
///
/// Selected indices missing from `dataset` get no label.
#[must_use]
pub fn build_pick_labels(
    dataset: &MoleculeDataset,
    selection: &SelectionState,
    elements: &ElementTable,
) -> Vec<OverlayLabel> {
    selection
        .selected()
        .iter()
        .filter_map(|&i| dataset.atom(i))
        .map(|atom| {
            let lift = elements.radius_of(&atom.element) + PICK_LABEL_CLEARANCE;
            OverlayLabel {
                anchor: atom.position + Vec3::Y * lift,
                text: format!("{}{}", atom.element, atom.index),
            }
        })
        .collect()
}
