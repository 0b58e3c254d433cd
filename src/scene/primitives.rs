//! Atom spheres and bond cylinders.
//!
//! Cylinders are modelled along the +Y reference axis and rotated onto the
//! bond direction. Double and triple bonds are drawn as parallel cylinders
//! displaced along the rotated +Z axis.

use glam::{Quat, Vec3};
use serde::Serialize;

use crate::elements::{Color, ElementTable};
use crate::molecule::{Atom, BondType, MoleculeDataset};
use crate::options::{ColorOptions, GeometryOptions};
use crate::selection::SelectionState;

/// Axis a cylinder is modelled along before orientation.
pub const REFERENCE_AXIS: Vec3 = Vec3::Y;

/// Axis multiple-bond offsets are taken along before orientation.
pub const LATERAL_AXIS: Vec3 = Vec3::Z;

/// A renderable shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderPrimitive {
    /// Atom sphere.
    Sphere {
        /// Center in world space.
        center: Vec3,
        /// Radius in ångström.
        radius: f32,
        /// RGB color.
        color: Color,
        /// Whether the atom is selected.
        highlighted: bool,
    },
    /// Bond cylinder.
    Cylinder {
        /// Center in world space.
        center: Vec3,
        /// Rotation taking [`REFERENCE_AXIS`] onto the bond direction.
        orientation: Quat,
        /// End-to-end length.
        length: f32,
        /// Radius in ångström.
        radius: f32,
        /// RGB color.
        color: Color,
        /// Whether the bond joins consecutively selected atoms.
        highlighted: bool,
    },
}

impl RenderPrimitive {
    /// Whether the primitive is drawn highlighted.
    #[must_use]
    pub fn highlighted(&self) -> bool {
        match self {
            Self::Sphere { highlighted, .. }
            | Self::Cylinder { highlighted, .. } => *highlighted,
        }
    }

    /// Center of the primitive.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        match self {
            Self::Sphere { center, .. } | Self::Cylinder { center, .. } => {
                *center
            }
        }
    }
}

/// Everything the builder reads; nothing here is mutated.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveInput<'a> {
    /// Atoms and bonds to draw.
    pub dataset: &'a MoleculeDataset,
    /// Selection driving highlight flags.
    pub selection: &'a SelectionState,
    /// Element colors and radii.
    pub elements: &'a ElementTable,
    /// Bond colors.
    pub colors: &'a ColorOptions,
    /// Bond radius and multiple-bond offsets.
    pub geometry: &'a GeometryOptions,
}

/// Output buffer for primitive generation.
#[derive(Default)]
struct PrimitiveCollector {
    primitives: Vec<RenderPrimitive>,
}

impl PrimitiveCollector {
    fn with_capacity(n: usize) -> Self {
        Self {
            primitives: Vec::with_capacity(n),
        }
    }

    fn push_atom(
        &mut self,
        atom: &Atom,
        elements: &ElementTable,
        highlighted: bool,
    ) {
        self.primitives.push(RenderPrimitive::Sphere {
            center: atom.position,
            radius: elements.radius_of(&atom.element),
            color: elements.color_of(&atom.element),
            highlighted,
        });
    }

    /// Push one cylinder per entry of `offsets`, each displaced along the
    /// bond's lateral axis.
    fn push_bond(
        &mut self,
        endpoints: [Vec3; 2],
        offsets: &[f32],
        radius: f32,
        color: Color,
        highlighted: bool,
    ) {
        let [begin, end] = endpoints;
        let midpoint = (begin + end) * 0.5;
        let length = begin.distance(end);
        let orientation = bond_orientation(end - begin);
        let lateral = orientation * LATERAL_AXIS;

        for &offset in offsets {
            self.primitives.push(RenderPrimitive::Cylinder {
                center: midpoint + lateral * offset,
                orientation,
                length,
                radius,
                color,
                highlighted,
            });
        }
    }
}

/// Rotation taking [`REFERENCE_AXIS`] onto `direction`.
///
/// A zero-length bond keeps the identity rotation.
#[must_use]
pub fn bond_orientation(direction: Vec3) -> Quat {
    let dir = direction.normalize_or_zero();
    if dir == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_arc(REFERENCE_AXIS, dir)
}

/// Build spheres for every atom (index order), then cylinders for every bond
/// with valid endpoints (dataset order).
///
/// Bonds referencing a missing atom are skipped; the rest of the build is
/// unaffected.
#[must_use]
pub fn build_primitives(input: &PrimitiveInput<'_>) -> Vec<RenderPrimitive> {
    let PrimitiveInput {
        dataset,
        selection,
        elements,
        colors,
        geometry,
    } = *input;

    let mut out = PrimitiveCollector::with_capacity(
        dataset.atoms().len() + dataset.bonds().len() * 2,
    );

    for atom in dataset.atoms() {
        out.push_atom(atom, elements, selection.contains(atom.index));
    }

    let double = [-geometry.double_bond_offset, geometry.double_bond_offset];
    let triple = [
        -geometry.triple_bond_offset,
        0.0,
        geometry.triple_bond_offset,
    ];

    for (i, bond) in dataset.bonds().iter().enumerate() {
        let (begin, end) = match dataset.bond_endpoints(i) {
            Ok(pair) => pair,
            Err(e) => {
                log::debug!("skipping bond: {e}");
                continue;
            }
        };
        let offsets: &[f32] = match bond.bond_type {
            BondType::Single | BondType::Aromatic => &[0.0],
            BondType::Double => &double,
            BondType::Triple => &triple,
        };
        let highlighted =
            selection.are_consecutive(bond.begin_index, bond.end_index);

        out.push_bond(
            [begin.position, end.position],
            offsets,
            geometry.bond_radius,
            colors.bond_color(highlighted),
            highlighted,
        );
    }

    out.primitives
}
