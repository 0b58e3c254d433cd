//! Crate-level error types.

use std::fmt;

/// Errors produced by the molscope crate.
#[derive(Debug)]
pub enum MolError {
    /// A bond endpoint does not name an atom of the current dataset.
    InvalidBondReference {
        /// Position of the bond in the dataset's bond list.
        bond: usize,
        /// Begin atom index as stored on the bond.
        begin: usize,
        /// End atom index as stored on the bond.
        end: usize,
        /// Number of atoms in the dataset.
        atom_count: usize,
    },
    /// The molecule service sent a bond order the viewer cannot draw.
    UnknownBondType {
        /// Position of the bond in the service payload.
        bond: usize,
        /// Begin atom index.
        begin: usize,
        /// End atom index.
        end: usize,
        /// Bond type string as received.
        bond_type: String,
    },
    /// The molecule payload could not be turned into a dataset.
    DatasetDecode(String),
    /// The molecule service answered with `success: false`.
    ServiceRejected(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for MolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBondReference {
                bond,
                begin,
                end,
                atom_count,
            } => write!(
                f,
                "bond {bond} ({begin}-{end}) references an atom outside \
                 0..{atom_count}"
            ),
            Self::UnknownBondType {
                bond,
                begin,
                end,
                bond_type,
            } => write!(
                f,
                "bond {bond} ({begin}-{end}) has unsupported type \
                 {bond_type:?}"
            ),
            Self::DatasetDecode(msg) => {
                write!(f, "dataset decode error: {msg}")
            }
            Self::ServiceRejected(msg) => {
                write!(f, "molecule service rejected the request: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for MolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MolError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for MolError {
    fn from(e: serde_json::Error) -> Self {
        Self::DatasetDecode(e.to_string())
    }
}
