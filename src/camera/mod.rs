//! Camera placement for a freshly loaded molecule.
//!
//! [`framing`] derives a centroid and viewing distance from the atom set;
//! [`core`] turns that pose into view/projection matrices.

/// Look-at camera and its matrices.
pub mod core;
/// Centroid and framing distance from atom positions.
pub mod framing;

pub use self::core::Camera;
pub use self::framing::{frame, frame_points, CameraFraming};
