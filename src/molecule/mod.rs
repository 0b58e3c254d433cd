//! Atom/bond dataset delivered by the molecule service.
//!
//! A [`MoleculeDataset`] is immutable once built and is always replaced as a
//! whole. Atom indices are dense and 0-based, so an atom's `index` is also
//! its position in [`MoleculeDataset::atoms`].

mod wire;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::MolError;

/// A single atom with its 3D position.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Dense 0-based atom index.
    pub index: usize,
    /// Chemical element symbol (`"C"`, `"Cl"`, ...).
    pub element: String,
    /// Position in ångström.
    pub position: Vec3,
    /// Formal charge.
    pub charge: f32,
    /// Whether the atom belongs to an aromatic system.
    pub is_aromatic: bool,
    /// Whether the atom is part of a ring.
    pub is_in_ring: bool,
}

impl Atom {
    /// Neutral, non-aromatic, acyclic atom.
    #[must_use]
    pub fn new(
        index: usize,
        element: impl Into<String>,
        position: Vec3,
    ) -> Self {
        Self {
            index,
            element: element.into(),
            position,
            charge: 0.0,
            is_aromatic: false,
            is_in_ring: false,
        }
    }
}

/// Bond order as rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BondType {
    /// One shared electron pair.
    Single,
    /// Two shared electron pairs.
    Double,
    /// Three shared electron pairs.
    Triple,
    /// Delocalized ring bond; drawn like a single bond.
    Aromatic,
}

/// A bond between two atoms of the same dataset.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Bond {
    /// Index of the first atom.
    pub begin_index: usize,
    /// Index of the second atom.
    pub end_index: usize,
    /// Bond order.
    pub bond_type: BondType,
    /// Whether the bond is aromatic.
    pub is_aromatic: bool,
    /// Whether the bond is conjugated.
    pub is_conjugated: bool,
    /// Whether the bond is part of a ring.
    pub is_in_ring: bool,
}

impl Bond {
    /// Non-aromatic, non-conjugated, acyclic bond.
    #[must_use]
    pub fn new(
        begin_index: usize,
        end_index: usize,
        bond_type: BondType,
    ) -> Self {
        Self {
            begin_index,
            end_index,
            bond_type,
            is_aromatic: bond_type == BondType::Aromatic,
            is_conjugated: false,
            is_in_ring: false,
        }
    }
}

/// Bond dropped while decoding because its order is not drawable.
#[derive(Debug, Clone, PartialEq)]
struct SkippedBond {
    position: usize,
    begin: usize,
    end: usize,
    bond_type: String,
}

/// Atoms and bonds of one molecule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoleculeDataset {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    skipped: Vec<SkippedBond>,
}

impl MoleculeDataset {
    /// Build a dataset, ordering atoms by index.
    ///
    /// Bonds whose endpoints fall outside the atom range are kept; the
    /// primitive builder skips them and [`Self::invalid_bonds`] reports
    /// them.
    ///
    /// # Errors
    ///
    /// [`MolError::DatasetDecode`] if atom indices are not exactly
    /// `0..atoms.len()` or a bond joins an atom to itself.
    pub fn new(
        mut atoms: Vec<Atom>,
        bonds: Vec<Bond>,
    ) -> Result<Self, MolError> {
        atoms.sort_by_key(|a| a.index);
        if let Some((expected, atom)) =
            atoms.iter().enumerate().find(|(i, a)| a.index != *i)
        {
            return Err(MolError::DatasetDecode(format!(
                "atom indices must be dense: expected {expected}, found {}",
                atom.index
            )));
        }
        if let Some((i, bond)) = bonds
            .iter()
            .enumerate()
            .find(|(_, b)| b.begin_index == b.end_index)
        {
            return Err(MolError::DatasetDecode(format!(
                "bond {i} joins atom {} to itself",
                bond.begin_index
            )));
        }
        Ok(Self {
            atoms,
            bonds,
            skipped: Vec::new(),
        })
    }

    /// Dataset with no atoms and no bonds.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a molecule service response body.
    ///
    /// Bonds with a type other than single, double, triple or aromatic are
    /// left out of [`Self::bonds`] and listed by [`Self::invalid_bonds`].
    ///
    /// # Errors
    ///
    /// [`MolError::ServiceRejected`] when the service reported failure,
    /// [`MolError::DatasetDecode`] for malformed JSON or non-dense atom
    /// indices.
    pub fn from_json(body: &str) -> Result<Self, MolError> {
        wire::decode(body)
    }

    /// Atoms in index order.
    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Bonds in service order.
    #[must_use]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Atom with the given index.
    #[must_use]
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Position of the atom with the given index.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.atom(index).map(|a| a.position)
    }

    /// All atom positions in index order.
    #[must_use]
    pub fn positions(&self) -> Vec<Vec3> {
        self.atoms.iter().map(|a| a.position).collect()
    }

    /// Whether the dataset has no atoms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Resolve both endpoints of the bond at position `bond`.
    ///
    /// # Errors
    ///
    /// [`MolError::InvalidBondReference`] if either endpoint is out of
    /// range (or `bond` itself is).
    pub fn bond_endpoints(
        &self,
        bond: usize,
    ) -> Result<(&Atom, &Atom), MolError> {
        let invalid = |begin, end| MolError::InvalidBondReference {
            bond,
            begin,
            end,
            atom_count: self.atoms.len(),
        };
        let b = self
            .bonds
            .get(bond)
            .ok_or_else(|| invalid(usize::MAX, usize::MAX))?;
        match (self.atom(b.begin_index), self.atom(b.end_index)) {
            (Some(begin), Some(end)) => Ok((begin, end)),
            _ => Err(invalid(b.begin_index, b.end_index)),
        }
    }

    /// Errors for every bond that will not be drawn: bonds dropped at
    /// decode time for their type, then bonds referencing a missing atom.
    #[must_use]
    pub fn invalid_bonds(&self) -> Vec<MolError> {
        let skipped =
            self.skipped.iter().map(|s| MolError::UnknownBondType {
                bond: s.position,
                begin: s.begin,
                end: s.end,
                bond_type: s.bond_type.clone(),
            });
        let dangling = (0..self.bonds.len())
            .filter_map(|i| self.bond_endpoints(i).err());
        skipped.chain(dangling).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> MoleculeDataset {
        MoleculeDataset::new(
            vec![
                Atom::new(1, "H", Vec3::new(0.96, 0.0, 0.0)),
                Atom::new(0, "O", Vec3::ZERO),
                Atom::new(2, "H", Vec3::new(-0.24, 0.93, 0.0)),
            ],
            vec![
                Bond::new(0, 1, BondType::Single),
                Bond::new(0, 2, BondType::Single),
            ],
        )
        .unwrap()
    }

    #[test]
    fn atoms_are_ordered_by_index() {
        let ds = water();
        let indices: Vec<usize> = ds.atoms().iter().map(|a| a.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(ds.atom(0).unwrap().element, "O");
        assert_eq!(ds.position(2), Some(Vec3::new(-0.24, 0.93, 0.0)));
    }

    #[test]
    fn sparse_indices_are_rejected() {
        let result = MoleculeDataset::new(
            vec![Atom::new(0, "C", Vec3::ZERO), Atom::new(2, "C", Vec3::X)],
            Vec::new(),
        );
        assert!(matches!(result, Err(MolError::DatasetDecode(_))));
    }

    #[test]
    fn self_bonds_are_rejected() {
        let result = MoleculeDataset::new(
            vec![Atom::new(0, "C", Vec3::ZERO)],
            vec![Bond::new(0, 0, BondType::Single)],
        );
        assert!(matches!(result, Err(MolError::DatasetDecode(_))));
    }

    #[test]
    fn dangling_bonds_are_kept_and_reported() {
        let ds = MoleculeDataset::new(
            vec![Atom::new(0, "C", Vec3::ZERO), Atom::new(1, "O", Vec3::X)],
            vec![
                Bond::new(0, 1, BondType::Double),
                Bond::new(0, 99, BondType::Single),
            ],
        )
        .unwrap();
        assert_eq!(ds.bonds().len(), 2);
        assert!(ds.bond_endpoints(0).is_ok());
        let invalid = ds.invalid_bonds();
        assert_eq!(invalid.len(), 1);
        assert!(matches!(
            invalid[0],
            MolError::InvalidBondReference {
                bond: 1,
                end: 99,
                atom_count: 2,
                ..
            }
        ));
    }
}
