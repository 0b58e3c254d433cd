//! The viewer's complete interactive vocabulary.
//!
//! Every state change the display layer can request (measurement tool
//! buttons, atom clicks, "clear selection", a freshly fetched molecule) is a
//! [`ViewerCommand`] passed to
//! [`MoleculeViewer::execute`](super::MoleculeViewer::execute).

use std::sync::Arc;

use crate::molecule::MoleculeDataset;
use crate::selection::MeasureMode;

/// A discrete operation the viewer can perform.
///
/// ```ignore
/// viewer.execute(ViewerCommand::SetMode(MeasureMode::Angle));
/// viewer.execute(ViewerCommand::SelectAtom { index: 3 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    // ── Measurement ─────────────────────────────────────────────────
    /// Switch measurement tool; clears the selection and result.
    SetMode(MeasureMode),

    /// Pick an atom for the active tool.
    SelectAtom {
        /// Dense atom index.
        index: usize,
    },

    /// Clear the selection and result, keeping the tool.
    ClearSelection,

    // ── Data ────────────────────────────────────────────────────────
    /// Replace the molecule.
    LoadDataset(Arc<MoleculeDataset>),
}
