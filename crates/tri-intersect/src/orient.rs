//! Orientation predicates: epsilon-tolerant sign tests in 2D and 3D.

use nalgebra::{Matrix3, Point3};

/// Absolute tolerance applied to predicate determinant values.
///
/// A determinant within this threshold of zero is treated as exactly zero.
/// Every sign decision in this crate goes through this single constant, so
/// no two predicates can disagree on what "on the plane" means.
pub const EPSILON: f64 = 1e-10;

/// Position of a point relative to a line (2D) or a plane (3D).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Point is on the negative side (opposite the normal direction).
    Negative,
    /// Point lies on the line/plane (determinant within `EPSILON` of zero).
    Zero,
    /// Point is on the positive side (the direction the normal points toward).
    Positive,
}

impl Orientation {
    /// Classifies a determinant value against [`EPSILON`].
    pub fn from_det(det: f64) -> Self {
        if det < -EPSILON {
            Orientation::Negative
        } else if det > EPSILON {
            Orientation::Positive
        } else {
            Orientation::Zero
        }
    }

    /// Returns `true` for `Positive` or `Zero`.
    #[inline]
    pub fn is_non_negative(self) -> bool {
        self != Orientation::Negative
    }

    /// Returns `true` for `Negative` or `Zero`.
    #[inline]
    pub fn is_non_positive(self) -> bool {
        self != Orientation::Positive
    }
}

/// Side of point `d` relative to the plane through `a`, `b`, `c`.
///
/// Sign of the 4x4 determinant of the homogenized points (rows `[x, y, z, 1]`),
/// which is six times the signed volume of the tetrahedron `(a, b, c, d)`.
/// `Positive` when the tetrahedron is positively oriented, i.e. `d` lies on
/// the side opposite the right-hand-rule normal `(b - a) x (c - a)`.
///
/// Pure and total for any finite input.
pub fn orient_3d(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    d: &Point3<f64>,
) -> Orientation {
    // The homogenized 4x4 determinant equals this translated 3x3 form, which
    // keeps the absolute rounding error far below EPSILON for nearby points
    let (u, v, w) = (a - d, b - d, c - d);
    let det = Matrix3::new(
        u.x, u.y, u.z, //
        v.x, v.y, v.z, //
        w.x, w.y, w.z,
    )
    .determinant();
    Orientation::from_det(det)
}

/// Side of point `c` relative to the directed line from `a` to `b`.
///
/// Sign of the 3x3 determinant of the homogenized points with z ignored,
/// which is twice the signed area of the triangle `(a, b, c)`. `Positive`
/// when `c` is to the left of the line. Only meaningful once the points have
/// been projected into a common z=0 frame.
pub fn orient_2d(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Orientation {
    let det = Matrix3::new(
        a.x, a.y, 1.0, //
        b.x, b.y, 1.0, //
        c.x, c.y, 1.0,
    )
    .determinant();
    Orientation::from_det(det)
}
