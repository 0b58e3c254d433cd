//! Render-ready geometry derived from a dataset and a selection.
//!
//! Everything here is rebuilt from scratch whenever the dataset or the
//! selection changes; nothing is patched in place.

mod overlay;
mod primitives;

pub use overlay::{
    build_overlay, build_pick_labels, MeasurementOverlay, OverlayLabel,
    PICK_LABEL_CLEARANCE,
};
pub use primitives::{
    bond_orientation, build_primitives, PrimitiveInput, RenderPrimitive,
    LATERAL_AXIS, REFERENCE_AXIS,
};
