//! Distance, bond angle and dihedral angle over 3D points.
//!
//! All functions are pure. Angles are reported in degrees. Inputs that leave
//! an angle undefined (coincident points, collinear triplets) return
//! [`MeasureError::DegenerateGeometry`] instead of `NaN`.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Smallest squared length treated as a usable direction.
const MIN_LENGTH_SQUARED: f32 = 1e-12;

/// Smallest `|u × v| / (|u| |v|)` treated as non-collinear.
const MIN_SIN_ANGLE: f32 = 1e-6;

/// Failure of a geometric measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureError {
    /// A direction vector or plane normal has (near) zero length.
    DegenerateGeometry,
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGeometry => write!(
                f,
                "degenerate geometry: coincident or collinear points"
            ),
        }
    }
}

impl std::error::Error for MeasureError {}

/// Unit attached to a measurement value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Length in ångström.
    Angstrom,
    /// Angle in degrees.
    Degree,
}

impl Unit {
    /// Suffix appended to a formatted value (`" Å"` or `"°"`).
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Angstrom => " Å",
            Self::Degree => "°",
        }
    }
}

/// A measured value with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementResult {
    /// Measured value (ångström or degrees depending on `unit`).
    pub value: f32,
    /// Unit of `value`.
    pub unit: Unit,
}

impl MeasurementResult {
    /// Pair a value with its unit.
    #[must_use]
    pub fn new(value: f32, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Display label with two decimals, e.g. `"1.54 Å"` or `"109.47°"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.2}{}", self.value, self.unit.suffix())
    }
}

impl fmt::Display for MeasurementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Euclidean distance between `a` and `b`.
#[must_use]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    (a - b).length()
}

/// Angle at vertex `b` between arms `b→a` and `b→c`, in degrees.
///
/// # Errors
///
/// [`MeasureError::DegenerateGeometry`] if either arm has zero length.
pub fn angle(a: Vec3, b: Vec3, c: Vec3) -> Result<f32, MeasureError> {
    let u = direction(a - b)?;
    let v = direction(c - b)?;
    Ok(u.dot(v).clamp(-1.0, 1.0).acos().to_degrees())
}

/// Torsion angle of the chain `a-b-c-d` around the `b→c` axis, in degrees.
///
/// The result lies in `(-180, 180]`. Reversing the chain (`d-c-b-a`) gives
/// the same angle; mirroring the points negates it.
///
/// # Errors
///
/// [`MeasureError::DegenerateGeometry`] if `b` and `c` coincide or if either
/// triplet `a-b-c` / `b-c-d` is collinear.
pub fn dihedral(
    a: Vec3,
    b: Vec3,
    c: Vec3,
    d: Vec3,
) -> Result<f32, MeasureError> {
    let b1 = b - a;
    let b2 = c - b;
    let b3 = d - c;
    let axis = direction(b2)?;
    let n1 = plane_normal(b1, b2)?;
    let n2 = plane_normal(b2, b3)?;

    let x = n1.dot(n2);
    let y = n1.cross(n2).dot(axis);
    Ok(signed_degrees(y, x))
}

/// `atan2(y, x)` in degrees over `(-180, 180]`.
fn signed_degrees(y: f32, x: f32) -> f32 {
    let degrees = y.atan2(x).to_degrees();
    // atan2(-0.0, x < 0) is exactly -180; fold it onto the open end
    if degrees <= -180.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

fn direction(v: Vec3) -> Result<Vec3, MeasureError> {
    if v.length_squared() < MIN_LENGTH_SQUARED {
        return Err(MeasureError::DegenerateGeometry);
    }
    Ok(v.normalize())
}

fn plane_normal(u: Vec3, v: Vec3) -> Result<Vec3, MeasureError> {
    let n = u.cross(v);
    let scale = u.length() * v.length();
    if scale < MIN_LENGTH_SQUARED || n.length() < MIN_SIN_ANGLE * scale {
        return Err(MeasureError::DegenerateGeometry);
    }
    Ok(n.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn chain() -> [Vec3; 4] {
        [
            Vec3::new(1.2, 0.3, -0.4),
            Vec3::new(0.1, 0.0, 0.0),
            Vec3::new(1.6, 0.2, 0.1),
            Vec3::new(2.1, -0.9, 1.3),
        ]
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Vec3::new(3.5, -2.0, 7.25);
        assert_eq!(distance(p, p), 0.0);
        assert!((distance(Vec3::ZERO, Vec3::X) - 1.0).abs() < EPS);
    }

    #[test]
    fn right_angle_at_vertex() {
        let deg = angle(Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0))
            .unwrap();
        assert!((deg - 90.0).abs() < EPS);
    }

    #[test]
    fn angle_is_symmetric_in_endpoints() {
        let [a, b, c, _] = chain();
        let forward = angle(a, b, c).unwrap();
        let backward = angle(c, b, a).unwrap();
        assert!((forward - backward).abs() < EPS);
    }

    #[test]
    fn straight_angle_survives_rounding() {
        let deg = angle(Vec3::new(-1.0, 0.0, 0.0), Vec3::ZERO, Vec3::X)
            .unwrap();
        assert!((deg - 180.0).abs() < EPS);
    }

    #[test]
    fn coincident_vertex_is_degenerate() {
        assert_eq!(
            angle(Vec3::X, Vec3::X, Vec3::Y),
            Err(MeasureError::DegenerateGeometry)
        );
    }

    #[test]
    fn cis_and_trans_torsions() {
        let a = Vec3::new(0.0, 1.0, 0.0);
        let b = Vec3::ZERO;
        let c = Vec3::X;
        let cis = dihedral(a, b, c, Vec3::new(1.0, 1.0, 0.0)).unwrap();
        let trans = dihedral(a, b, c, Vec3::new(1.0, -1.0, 0.0)).unwrap();
        let gauche = dihedral(a, b, c, Vec3::new(1.0, 0.0, 1.0)).unwrap();
        assert!(cis.abs() < EPS);
        assert!((trans.abs() - 180.0).abs() < EPS);
        assert!((gauche.abs() - 90.0).abs() < EPS);
    }

    #[test]
    fn negative_zero_trans_folds_to_positive_180() {
        assert_eq!((-0.0f32).atan2(-1.0), -std::f32::consts::PI);
        let folded = signed_degrees(-0.0, -1.0);
        assert!(folded > 0.0);
        assert!((folded - 180.0).abs() < 1e-4);
        assert!((signed_degrees(0.0, -1.0) - 180.0).abs() < 1e-4);
        assert!((signed_degrees(-1.0, 0.0) + 90.0).abs() < 1e-4);
    }

    #[test]
    fn dihedral_ignores_translation_and_scale() {
        let [a, b, c, d] = chain();
        let base = dihedral(a, b, c, d).unwrap();
        let shift = Vec3::new(-4.0, 10.5, 3.0);
        let moved =
            dihedral(a + shift, b + shift, c + shift, d + shift).unwrap();
        let scaled = dihedral(a * 2.5, b * 2.5, c * 2.5, d * 2.5).unwrap();
        assert!((base - moved).abs() < EPS);
        assert!((base - scaled).abs() < EPS);
    }

    #[test]
    fn reversed_chain_keeps_sign_and_mirror_flips_it() {
        let [a, b, c, d] = chain();
        let base = dihedral(a, b, c, d).unwrap();
        let reversed = dihedral(d, c, b, a).unwrap();
        let mirror = |p: Vec3| Vec3::new(p.x, p.y, -p.z);
        let mirrored =
            dihedral(mirror(a), mirror(b), mirror(c), mirror(d)).unwrap();
        assert!(base.abs() > 1.0);
        assert!((base - reversed).abs() < EPS);
        assert!((base + mirrored).abs() < EPS);
    }

    #[test]
    fn collinear_triplet_is_degenerate() {
        let result = dihedral(
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
        );
        assert_eq!(result, Err(MeasureError::DegenerateGeometry));
    }

    #[test]
    fn labels_use_unit_suffix() {
        let length = MeasurementResult::new(1.0, Unit::Angstrom);
        let bend = MeasurementResult::new(90.0, Unit::Degree);
        assert_eq!(length.label(), "1.00 Å");
        assert_eq!(bend.to_string(), "90.00°");
    }
}
