//! JSON payload of the molecule service.
//!
//! Only atoms and bonds are decoded; descriptors and the 2D SVG belong to
//! other layers and are ignored.

use glam::Vec3;
use serde::Deserialize;

use super::{Atom, Bond, BondType, MoleculeDataset, SkippedBond};
use crate::error::MolError;

#[derive(Debug, Deserialize)]
struct ServiceResponse {
    success: bool,
    #[serde(default)]
    message: String,
    #[serde(default)]
    atoms: Option<Vec<WireAtom>>,
    #[serde(default)]
    bonds: Option<Vec<WireBond>>,
}

#[derive(Debug, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
struct WireAtom {
    index: usize,
    element: String,
    x: f32,
    y: f32,
    z: f32,
    #[serde(default)]
    charge: f32,
    #[serde(default)]
    is_aromatic: bool,
    #[serde(default)]
    is_in_ring: bool,
}

#[derive(Debug, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
struct WireBond {
    begin: usize,
    end: usize,
    bond_type: String,
    #[serde(default)]
    is_aromatic: bool,
    #[serde(default)]
    is_conjugated: bool,
    #[serde(default)]
    is_in_ring: bool,
}

impl From<WireAtom> for Atom {
    fn from(a: WireAtom) -> Self {
        Self {
            index: a.index,
            element: a.element,
            position: Vec3::new(a.x, a.y, a.z),
            charge: a.charge,
            is_aromatic: a.is_aromatic,
            is_in_ring: a.is_in_ring,
        }
    }
}

/// Bond order for a service type string; the service sends `"unknown"` for
/// anything else RDKit reports.
fn parse_bond_type(name: &str) -> Option<BondType> {
    match name {
        "single" => Some(BondType::Single),
        "double" => Some(BondType::Double),
        "triple" => Some(BondType::Triple),
        "aromatic" => Some(BondType::Aromatic),
        _ => None,
    }
}

impl WireBond {
    fn into_bond(self, position: usize) -> Result<Bond, SkippedBond> {
        match parse_bond_type(&self.bond_type) {
            Some(bond_type) => Ok(Bond {
                begin_index: self.begin,
                end_index: self.end,
                bond_type,
                is_aromatic: self.is_aromatic,
                is_conjugated: self.is_conjugated,
                is_in_ring: self.is_in_ring,
            }),
            None => Err(SkippedBond {
                position,
                begin: self.begin,
                end: self.end,
                bond_type: self.bond_type,
            }),
        }
    }
}

pub(super) fn decode(body: &str) -> Result<MoleculeDataset, MolError> {
    let response: ServiceResponse = serde_json::from_str(body)?;
    if !response.success {
        let message = if response.message.is_empty() {
            "Error processing molecule".to_owned()
        } else {
            response.message
        };
        return Err(MolError::ServiceRejected(message));
    }

    let atoms = response
        .atoms
        .unwrap_or_default()
        .into_iter()
        .map(Atom::from)
        .collect();

    let mut bonds = Vec::new();
    let mut skipped = Vec::new();
    let wire_bonds = response.bonds.unwrap_or_default();
    for (i, wire) in wire_bonds.into_iter().enumerate() {
        match wire.into_bond(i) {
            Ok(bond) => bonds.push(bond),
            Err(s) => {
                log::debug!(
                    "dropping bond {i} ({}-{}): unsupported type {:?}",
                    s.begin,
                    s.end,
                    s.bond_type
                );
                skipped.push(s);
            }
        }
    }

    let mut dataset = MoleculeDataset::new(atoms, bonds)?;
    dataset.skipped = skipped;
    Ok(dataset)
}
