use glam::Vec3;
use serde::Serialize;

use crate::molecule::Atom;
use crate::options::CameraOptions;

/// Initial camera pose for a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraFraming {
    /// Mean atom position; the camera looks here.
    pub centroid: Vec3,
    /// Largest atom distance from the centroid.
    pub bounding_radius: f32,
    /// Framing distance used for each eye coordinate.
    pub distance: f32,
}

impl CameraFraming {
    /// Eye position: `(distance, distance, distance)`.
    ///
    /// The eye is not offset by the centroid; it sits on the world diagonal
    /// and looks at the centroid.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        Vec3::splat(self.distance)
    }

    /// Look-at target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.centroid
    }
}

impl Default for CameraFraming {
    fn default() -> Self {
        frame_points(&[], &CameraOptions::default())
    }
}

/// Frame a set of atoms with default camera options.
///
/// An empty slice frames the origin at the minimum distance.
#[must_use]
pub fn frame(atoms: &[Atom]) -> CameraFraming {
    let points: Vec<Vec3> = atoms.iter().map(|a| a.position).collect();
    frame_points(&points, &CameraOptions::default())
}

/// Frame a set of points: centroid, bounding radius and
/// `max(min_distance, bounding_radius * distance_scale)`.
#[must_use]
pub fn frame_points(
    points: &[Vec3],
    options: &CameraOptions,
) -> CameraFraming {
    let centroid = if points.is_empty() {
        Vec3::ZERO
    } else {
        points.iter().copied().sum::<Vec3>() / points.len() as f32
    };

    let bounding_radius = points
        .iter()
        .map(|p| p.distance(centroid))
        .fold(0.0f32, f32::max);

    CameraFraming {
        centroid,
        bounding_radius,
        distance: options
            .min_distance
            .max(bounding_radius * options.distance_scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset_frames_origin() {
        let framing = frame(&[]);
        assert_eq!(framing.centroid, Vec3::ZERO);
        assert_eq!(framing.bounding_radius, 0.0);
        assert_eq!(framing.distance, 5.0);
        assert_eq!(framing.eye(), Vec3::splat(5.0));
    }

    #[test]
    fn small_molecule_uses_minimum_distance() {
        let atoms = [
            Atom::new(0, "C", Vec3::new(-0.5, 0.0, 0.0)),
            Atom::new(1, "C", Vec3::new(0.5, 0.0, 0.0)),
        ];
        let framing = frame(&atoms);
        assert_eq!(framing.centroid, Vec3::ZERO);
        assert!((framing.bounding_radius - 0.5).abs() < 1e-6);
        assert_eq!(framing.distance, 5.0);
    }

    #[test]
    fn large_molecule_scales_with_radius() {
        let points = [
            Vec3::new(10.0, 2.0, 0.0),
            Vec3::new(10.0, 2.0, 4.0),
            Vec3::new(10.0, -2.0, 0.0),
            Vec3::new(10.0, -2.0, 4.0),
        ];
        let framing = frame_points(&points, &CameraOptions::default());
        assert_eq!(framing.centroid, Vec3::new(10.0, 0.0, 2.0));
        let radius = 8.0f32.sqrt();
        assert!((framing.distance - radius * 3.0).abs() < 1e-4);
        assert_eq!(framing.target(), framing.centroid);
    }

    #[test]
    fn options_change_the_scale() {
        let options = CameraOptions {
            min_distance: 1.0,
            distance_scale: 2.0,
            ..CameraOptions::default()
        };
        let points = [Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)];
        let framing = frame_points(&points, &options);
        assert!((framing.distance - 4.0).abs() < 1e-6);
    }
}
