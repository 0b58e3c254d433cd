// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Geometry and measurement core for an interactive 3D molecule viewer.
//!
//! Molscope turns a molecule (atoms with positions, bonds with orders) into
//! renderer-agnostic ball-and-stick primitives, frames a camera around it and
//! measures the geometry between picked atoms.
//!
//! # Key entry points
//!
//! - [`viewer::MoleculeViewer`] - owns the dataset, selection and committed
//!   measurement, and produces a [`viewer::Frame`] per render pass
//! - [`molecule::MoleculeDataset`] - atoms and bonds, decodable from the
//!   structure service's JSON
//! - [`measure`] - distance, angle and dihedral formulas
//! - [`options::Options`] - runtime configuration (colors, geometry, camera)
//!
//! # Frame cycle
//!
//! Rendering never mutates the viewer. [`viewer::MoleculeViewer::render`]
//! borrows it immutably and returns any new measurement as a
//! [`viewer::CommitRequest`]. The host passes that to
//! [`viewer::MoleculeViewer::end_frame`] and applies it with
//! [`viewer::MoleculeViewer::tick`], which drops requests computed from a
//! dataset or selection that has since changed.

pub mod camera;
pub mod elements;
pub mod error;
pub mod measure;
pub mod molecule;
pub mod options;
pub mod scene;
pub mod scheduler;
pub mod selection;
pub mod viewer;

pub use error::MolError;
pub use viewer::{MoleculeViewer, ViewerCommand};
