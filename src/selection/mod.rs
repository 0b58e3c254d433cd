//! Atom selection state machine for distance/angle/dihedral measurement.
//!
//! The selected list is both a FIFO (the oldest pick is evicted once the
//! mode's capacity is exceeded) and an ordered tuple whose positions carry
//! geometric roles:
//!
//! | mode     | capacity | roles                                       |
//! |----------|----------|---------------------------------------------|
//! | Distance | 2        | endpoints                                   |
//! | Angle    | 3        | 2nd pick is the vertex                      |
//! | Dihedral | 4        | 2nd–3rd picks form the torsion axis         |
//!
//! [`SelectionMachine`] is the only owner of the selection and of the
//! committed [`MeasurementResult`]; every mutation goes through one of its
//! named transitions and bumps its version, except [`SelectionMachine::commit`]
//! which stores a result only if it was computed from the current version of
//! a complete selection.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::measure::{self, MeasurementResult, Unit};
use crate::molecule::MoleculeDataset;

/// Active measurement tool.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MeasureMode {
    /// Selection disabled.
    #[default]
    None,
    /// Distance between two atoms.
    Distance,
    /// Bond angle over three atoms.
    Angle,
    /// Torsion angle over four atoms.
    Dihedral,
}

impl MeasureMode {
    /// Number of atoms the mode measures over.
    #[must_use]
    pub fn capacity(self) -> usize {
        match self {
            Self::None => 0,
            Self::Distance => 2,
            Self::Angle => 3,
            Self::Dihedral => 4,
        }
    }

    /// Unit of the mode's result, `None` for [`MeasureMode::None`].
    #[must_use]
    pub fn unit(self) -> Option<Unit> {
        match self {
            Self::None => None,
            Self::Distance => Some(Unit::Angstrom),
            Self::Angle | Self::Dihedral => Some(Unit::Degree),
        }
    }
}

/// Where the selection stands relative to the mode's capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// No measurement mode is active.
    Idle,
    /// Fewer atoms than the mode needs are selected.
    Selecting,
    /// Exactly as many atoms as the mode needs are selected.
    Ready,
}

/// Mode plus ordered, duplicate-free selected atom indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    mode: MeasureMode,
    selected: Vec<usize>,
}

impl SelectionState {
    /// Active mode.
    #[must_use]
    pub fn mode(&self) -> MeasureMode {
        self.mode
    }

    /// Selected atom indices, oldest first.
    #[must_use]
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Whether `index` is selected.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Position of `index` within the selection order.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.selected.iter().position(|&i| i == index)
    }

    /// Whether `a` and `b` are both selected and were picked one after the
    /// other (in either order).
    #[must_use]
    pub fn are_consecutive(&self, a: usize, b: usize) -> bool {
        match (self.position_of(a), self.position_of(b)) {
            (Some(pa), Some(pb)) => pa.abs_diff(pb) == 1,
            _ => false,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        let capacity = self.mode.capacity();
        if capacity == 0 {
            SelectionPhase::Idle
        } else if self.selected.len() == capacity {
            SelectionPhase::Ready
        } else {
            SelectionPhase::Selecting
        }
    }

    /// Positions of the measured atoms in selection order, when the
    /// selection is ready and every index exists in `dataset`.
    #[must_use]
    pub fn measured_points(
        &self,
        dataset: &MoleculeDataset,
    ) -> Option<Vec<Vec3>> {
        if self.phase() != SelectionPhase::Ready {
            return None;
        }
        self.selected[..self.mode.capacity()]
            .iter()
            .map(|&i| dataset.position(i))
            .collect()
    }
}

/// Owner of the selection and the committed measurement.
#[derive(Debug, Clone, Default)]
pub struct SelectionMachine {
    state: SelectionState,
    committed: Option<MeasurementResult>,
    version: u64,
}

impl SelectionMachine {
    /// Machine in the `None` mode with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the selection.
    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Active mode.
    #[must_use]
    pub fn mode(&self) -> MeasureMode {
        self.state.mode
    }

    /// Committed measurement, if any.
    #[must_use]
    pub fn measurement(&self) -> Option<MeasurementResult> {
        self.committed
    }

    /// Counter bumped by every selection change.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Switch tools. Always clears the selection and the committed result,
    /// even when `mode` equals the current mode.
    pub fn set_mode(&mut self, mode: MeasureMode) {
        self.state.selected.clear();
        self.committed = None;
        self.state.mode = mode;
        self.bump();
    }

    /// Pick an atom. Returns `true` if the selection changed.
    ///
    /// Ignored while the mode is `None` or when `index` is already
    /// selected. Past capacity, the oldest pick is evicted.
    pub fn select_atom(&mut self, index: usize) -> bool {
        let capacity = self.state.mode.capacity();
        if capacity == 0 || self.state.contains(index) {
            return false;
        }
        self.state.selected.push(index);
        if self.state.selected.len() > capacity {
            let _ = self.state.selected.remove(0);
        }
        self.committed = None;
        self.bump();
        true
    }

    /// Empty the selection and drop the committed result; the mode stays.
    pub fn clear_selection(&mut self) {
        self.state.selected.clear();
        self.committed = None;
        self.bump();
    }

    /// Compute the measurement for the current selection without touching
    /// any state.
    ///
    /// Returns `None` unless the selection is ready and every selected index
    /// exists in `dataset`. Degenerate geometry (coincident or collinear
    /// atoms) also yields `None`; the selection itself is left alone.
    #[must_use]
    pub fn compute(
        &self,
        dataset: &MoleculeDataset,
    ) -> Option<MeasurementResult> {
        let points = self.state.measured_points(dataset)?;
        let unit = self.state.mode.unit()?;
        let value = match (self.state.mode, points.as_slice()) {
            (MeasureMode::Distance, &[a, b]) => Ok(measure::distance(a, b)),
            (MeasureMode::Angle, &[a, b, c]) => measure::angle(a, b, c),
            (MeasureMode::Dihedral, &[a, b, c, d]) => {
                measure::dihedral(a, b, c, d)
            }
            _ => return None,
        };
        match value {
            Ok(value) => Some(MeasurementResult::new(value, unit)),
            Err(e) => {
                log::debug!(
                    "no {:?} measurement for atoms {:?}: {e}",
                    self.state.mode,
                    self.state.selected
                );
                None
            }
        }
    }

    /// Store a result computed at selection version `version`.
    ///
    /// Refused (returning `false`) unless `version` is the current version
    /// and the selection is at capacity, so a committed result always
    /// belongs to a complete, unchanged selection.
    pub fn commit(
        &mut self,
        result: MeasurementResult,
        version: u64,
    ) -> bool {
        if version != self.version
            || self.state.phase() != SelectionPhase::Ready
        {
            return false;
        }
        self.committed = Some(result);
        true
    }

    fn bump(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecule::{Atom, MoleculeDataset};

    fn dataset(points: &[Vec3]) -> MoleculeDataset {
        let atoms = points
            .iter()
            .enumerate()
            .map(|(i, p)| Atom::new(i, "C", *p))
            .collect();
        MoleculeDataset::new(atoms, Vec::new()).unwrap()
    }

    fn machine(mode: MeasureMode, picks: &[usize]) -> SelectionMachine {
        let mut m = SelectionMachine::new();
        m.set_mode(mode);
        for &i in picks {
            let _ = m.select_atom(i);
        }
        m
    }

    #[test]
    fn starts_idle_and_ignores_picks() {
        let mut m = SelectionMachine::new();
        assert_eq!(m.state().phase(), SelectionPhase::Idle);
        assert!(!m.select_atom(3));
        assert!(m.state().selected().is_empty());
    }

    #[test]
    fn dihedral_keeps_last_four_in_order() {
        let m = machine(MeasureMode::Dihedral, &[5, 6, 7, 8, 9]);
        assert_eq!(m.state().selected(), &[6, 7, 8, 9]);
        assert_eq!(m.state().phase(), SelectionPhase::Ready);
    }

    #[test]
    fn reselecting_is_a_noop() {
        let mut m = machine(MeasureMode::Angle, &[1, 2, 3]);
        let version = m.version();
        assert!(!m.select_atom(2));
        assert_eq!(m.state().selected(), &[1, 2, 3]);
        assert_eq!(m.version(), version);
    }

    #[test]
    fn set_mode_clears_everything() {
        let ds = dataset(&[Vec3::ZERO, Vec3::X]);
        let mut m = machine(MeasureMode::Distance, &[0, 1]);
        let result = m.compute(&ds).unwrap();
        let version = m.version();
        assert!(m.commit(result, version));
        assert!(m.measurement().is_some());

        m.set_mode(MeasureMode::Distance);
        assert!(m.state().selected().is_empty());
        assert!(m.measurement().is_none());
        assert_eq!(m.mode(), MeasureMode::Distance);
    }

    #[test]
    fn clear_selection_keeps_mode() {
        let mut m = machine(MeasureMode::Angle, &[0, 1]);
        m.clear_selection();
        assert_eq!(m.mode(), MeasureMode::Angle);
        assert_eq!(m.state().phase(), SelectionPhase::Selecting);
        assert!(m.state().selected().is_empty());
    }

    #[test]
    fn distance_between_two_atoms() {
        let ds = dataset(&[Vec3::ZERO, Vec3::X]);
        let m = machine(MeasureMode::Distance, &[0, 1]);
        let result = m.compute(&ds).unwrap();
        assert_eq!(result.value, 1.0);
        assert_eq!(result.unit, Unit::Angstrom);
    }

    #[test]
    fn second_pick_is_the_angle_vertex() {
        let ds = dataset(&[Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0)]);
        let m = machine(MeasureMode::Angle, &[0, 1, 2]);
        let result = m.compute(&ds).unwrap();
        assert!((result.value - 90.0).abs() < 1e-4);
        assert_eq!(result.unit, Unit::Degree);

        // Vertex at atom 0 instead: 45 degrees
        let m = machine(MeasureMode::Angle, &[1, 0, 2]);
        assert!((m.compute(&ds).unwrap().value - 45.0).abs() < 1e-4);
    }

    #[test]
    fn incomplete_selection_has_no_result() {
        let ds = dataset(&[Vec3::ZERO, Vec3::X, Vec3::Y]);
        let m = machine(MeasureMode::Angle, &[0, 1]);
        assert_eq!(m.compute(&ds), None);
    }

    #[test]
    fn degenerate_geometry_keeps_selection() {
        let ds = dataset(&[Vec3::ZERO, Vec3::ZERO, Vec3::X]);
        let m = machine(MeasureMode::Angle, &[0, 1, 2]);
        assert_eq!(m.compute(&ds), None);
        assert_eq!(m.state().selected(), &[0, 1, 2]);
        assert_eq!(m.state().phase(), SelectionPhase::Ready);
    }

    #[test]
    fn out_of_range_selection_has_no_result() {
        let ds = dataset(&[Vec3::ZERO, Vec3::X]);
        let m = machine(MeasureMode::Distance, &[0, 7]);
        assert_eq!(m.compute(&ds), None);
    }

    #[test]
    fn commit_requires_a_complete_selection() {
        let result = MeasurementResult::new(1.0, Unit::Angstrom);
        let mut m = SelectionMachine::new();
        let version = m.version();
        assert!(!m.commit(result, version));
        assert_eq!(m.measurement(), None);

        let mut m = machine(MeasureMode::Angle, &[0, 1]);
        let version = m.version();
        assert!(!m.commit(result, version));
        assert_eq!(m.measurement(), None);
    }

    #[test]
    fn commit_from_older_selection_is_refused() {
        let ds = dataset(&[Vec3::ZERO, Vec3::X, Vec3::Y]);
        let mut m = machine(MeasureMode::Distance, &[0, 1]);
        let result = m.compute(&ds).unwrap();
        let computed_at = m.version();
        assert!(m.select_atom(2));
        assert_eq!(m.state().phase(), SelectionPhase::Ready);
        assert!(!m.commit(result, computed_at));
        assert_eq!(m.measurement(), None);

        let fresh = m.compute(&ds).unwrap();
        let version = m.version();
        assert!(m.commit(fresh, version));
        assert_eq!(m.measurement(), Some(fresh));
    }

    #[test]
    fn consecutive_picks() {
        let m = machine(MeasureMode::Dihedral, &[4, 2, 9, 1]);
        assert!(m.state().are_consecutive(4, 2));
        assert!(m.state().are_consecutive(9, 2));
        assert!(!m.state().are_consecutive(4, 9));
        assert!(!m.state().are_consecutive(4, 5));
    }
}
