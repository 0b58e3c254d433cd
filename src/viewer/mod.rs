//! Viewer state: dataset, selection, committed measurement and options.
//!
//! A frame is produced in two steps. [`MoleculeViewer::render`] borrows the
//! viewer immutably, builds primitives and the overlay, and computes the
//! live measurement. If that measurement differs from the committed one, the
//! frame carries a [`CommitRequest`]. After the pass, the host hands the
//! request back through [`MoleculeViewer::end_frame`] and drains it with
//! [`MoleculeViewer::tick`]; a request whose dataset or selection version
//! changed in between is dropped.
//!
//! ```ignore
//! let frame = viewer.render();
//! draw(&frame);
//! viewer.end_frame(frame.commit);
//! viewer.tick();
//! ```

mod command;

use std::sync::Arc;

pub use command::ViewerCommand;

use crate::camera::{frame_points, Camera, CameraFraming};
use crate::elements::ElementTable;
use crate::measure::MeasurementResult;
use crate::molecule::MoleculeDataset;
use crate::options::Options;
use crate::scene::{
    build_overlay, build_pick_labels, build_primitives, MeasurementOverlay,
    OverlayLabel, PrimitiveInput, RenderPrimitive,
};
use crate::scheduler::{CommitScheduler, Generation, TickReport, Ticket};
use crate::selection::{MeasureMode, SelectionMachine, SelectionState};

/// Request to store a measurement computed during a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitRequest {
    /// Value to commit.
    pub result: MeasurementResult,
    /// State versions the value was computed from.
    pub generation: Generation,
}

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Atom spheres followed by bond cylinders.
    pub primitives: Vec<RenderPrimitive>,
    /// Selection polyline and live label.
    pub overlay: Option<MeasurementOverlay>,
    /// `{element}{index}` tag above each selected atom.
    pub pick_labels: Vec<OverlayLabel>,
    /// Camera pose for the current dataset.
    pub framing: CameraFraming,
    /// Measurement computed during this pass, for on-screen labelling.
    pub live_measurement: Option<MeasurementResult>,
    /// Pending write-back of `live_measurement`, if it is new.
    pub commit: Option<CommitRequest>,
}

/// Owns everything the display layer reads from.
#[derive(Debug)]
pub struct MoleculeViewer {
    options: Options,
    elements: ElementTable,
    dataset: Arc<MoleculeDataset>,
    dataset_version: u64,
    selection: SelectionMachine,
    framing: CameraFraming,
    scheduler: CommitScheduler<MeasurementResult>,
}

impl Default for MoleculeViewer {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl MoleculeViewer {
    /// Viewer with an empty dataset and no measurement tool.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let elements = ElementTable::from_options(&options.colors);
        let framing = frame_points(&[], &options.camera);
        Self {
            options,
            elements,
            dataset: Arc::new(MoleculeDataset::empty()),
            dataset_version: 0,
            selection: SelectionMachine::new(),
            framing,
            scheduler: CommitScheduler::new(),
        }
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Apply a command. Returns `true` if viewer state changed.
    pub fn execute(&mut self, command: ViewerCommand) -> bool {
        match command {
            ViewerCommand::SetMode(mode) => {
                self.selection.set_mode(mode);
                true
            }
            ViewerCommand::SelectAtom { index } => {
                self.selection.select_atom(index)
            }
            ViewerCommand::ClearSelection => {
                self.selection.clear_selection();
                true
            }
            ViewerCommand::LoadDataset(dataset) => {
                self.load_dataset(dataset);
                true
            }
        }
    }

    /// Replace the molecule.
    ///
    /// Clears the selection and committed result (the tool stays active),
    /// reframes the camera and discards pending commits.
    pub fn load_dataset(&mut self, dataset: impl Into<Arc<MoleculeDataset>>) {
        let dataset = dataset.into();
        log::info!(
            "loaded molecule: {} atoms, {} bonds",
            dataset.atoms().len(),
            dataset.bonds().len()
        );
        let invalid = dataset.invalid_bonds();
        if !invalid.is_empty() {
            log::debug!(
                "{} bond(s) will not be drawn",
                invalid.len()
            );
        }

        self.framing =
            frame_points(&dataset.positions(), &self.options.camera);
        self.dataset = dataset;
        self.dataset_version = self.dataset_version.wrapping_add(1);
        self.selection.clear_selection();
        let discarded = self.scheduler.clear();
        if discarded > 0 {
            log::trace!("discarded {discarded} pending commit(s) on reload");
        }
    }

    /// Replace the options, rebuilding the element table and framing.
    pub fn set_options(&mut self, options: Options) {
        self.elements = ElementTable::from_options(&options.colors);
        self.framing =
            frame_points(&self.dataset.positions(), &options.camera);
        self.options = options;
    }

    // ── Frame cycle ─────────────────────────────────────────────────

    /// Build the current frame without mutating any state.
    #[must_use]
    pub fn render(&self) -> Frame {
        let state = self.selection.state();
        let live = self.selection.compute(&self.dataset);

        let primitives = build_primitives(&PrimitiveInput {
            dataset: &self.dataset,
            selection: state,
            elements: &self.elements,
            colors: &self.options.colors,
            geometry: &self.options.geometry,
        });
        let overlay = build_overlay(
            &self.dataset,
            state,
            live.as_ref(),
            self.options.colors.measurement_line,
        );
        let pick_labels =
            build_pick_labels(&self.dataset, state, &self.elements);
        let commit = live
            .filter(|r| self.selection.measurement() != Some(*r))
            .map(|result| CommitRequest {
                result,
                generation: self.generation(),
            });

        Frame {
            primitives,
            overlay,
            pick_labels,
            framing: self.framing,
            live_measurement: live,
            commit,
        }
    }

    /// Schedule a frame's commit request to run on the next [`Self::tick`].
    pub fn end_frame(
        &mut self,
        commit: Option<CommitRequest>,
    ) -> Option<Ticket> {
        commit.map(|c| {
            self.scheduler.schedule_after_render(c.result, c.generation)
        })
    }

    /// Run scheduled commits against the current state versions.
    pub fn tick(&mut self) -> TickReport {
        let current = self.generation();
        let selection = &mut self.selection;
        self.scheduler.run_pending(current, |result| {
            if !selection.commit(result, current.selection) {
                log::trace!("selection no longer complete, commit refused");
            }
        })
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Current dataset and selection versions.
    #[must_use]
    pub fn generation(&self) -> Generation {
        Generation {
            dataset: self.dataset_version,
            selection: self.selection.version(),
        }
    }

    /// Current molecule.
    #[must_use]
    pub fn dataset(&self) -> &MoleculeDataset {
        &self.dataset
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        self.selection.state()
    }

    /// Active measurement tool.
    #[must_use]
    pub fn mode(&self) -> MeasureMode {
        self.selection.mode()
    }

    /// Committed measurement.
    #[must_use]
    pub fn measurement(&self) -> Option<MeasurementResult> {
        self.selection.measurement()
    }

    /// Camera pose for the current dataset.
    #[must_use]
    pub fn framing(&self) -> CameraFraming {
        self.framing
    }

    /// Look-at camera for the current framing.
    #[must_use]
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera::framed(&self.framing, aspect, &self.options.camera)
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Commits waiting for the next tick.
    #[must_use]
    pub fn pending_commits(&self) -> usize {
        self.scheduler.pending()
    }
}
