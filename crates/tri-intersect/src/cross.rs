//! Cross-intersection solver for triangle pairs lying in different planes.

use nalgebra::{Point3, Vector3, distance};

use crate::orient::{EPSILON, Orientation, orient_3d};
use crate::triangle::Triangle;

/// Decides whether two non-coplanar triangles intersect and optionally
/// computes the intersection segment.
///
/// `o1a`, `o1b`, `o1c` are the already-computed sides of `t1`'s vertices
/// relative to `t2`'s plane. Both triangles are working copies and get
/// permuted in place.
pub(crate) fn cross_intersect(
    t1: &mut Triangle,
    t2: &mut Triangle,
    o1a: Orientation,
    o1b: Orientation,
    o1c: Orientation,
    target: Option<&mut Vec<Point3<f64>>>,
) -> bool {
    // Sides of t2's vertices relative to t1's plane
    let o2a = orient_3d(t1.a(), t1.b(), t1.c(), t2.a());
    let o2b = orient_3d(t1.a(), t1.b(), t1.c(), t2.b());
    let o2c = orient_3d(t1.a(), t1.b(), t1.c(), t2.c());

    // t2 entirely on one side of t1's plane: no crossing possible
    if o2a == o2b && o2a == o2c {
        return false;
    }

    make_apex_alone(t1, o1a, o1b, o1c);
    make_apex_alone(t2, o2a, o2b, o2c);

    make_apex_positive(t2, t1);
    make_apex_positive(t1, t2);

    let o1 = orient_3d(t1.a(), t1.b(), t2.a(), t2.b());
    let o2 = orient_3d(t1.a(), t1.c(), t2.c(), t2.a());

    // Zero counts as satisfying the inequality: touching is intersecting
    if o1.is_non_positive() && o2.is_non_positive() {
        if let Some(target) = target {
            segment_endpoints(t1, t2, target);
        }
        return true;
    }

    false
}

/// Permutes the triangle so the vertex whose side differs from the other two
/// becomes vertex `a`.
///
/// When all three sides differ, `a` is taken from the positive side.
fn make_apex_alone(tri: &mut Triangle, oa: Orientation, ob: Orientation, oc: Orientation) {
    if oa == ob {
        // c is alone
        tri.permute_right();
    } else if oa == oc {
        // b is alone
        tri.permute_left();
    } else if ob != oc {
        if ob == Orientation::Positive {
            tri.permute_left();
        } else if oc == Orientation::Positive {
            tri.permute_right();
        }
    }
}

/// Flips `other`'s winding when `tri.a` sits on the negative side of
/// `other`'s plane, so both triangles present their apex consistently.
fn make_apex_positive(tri: &Triangle, other: &mut Triangle) {
    if orient_3d(other.a(), other.b(), other.c(), tri.a()) == Orientation::Negative {
        other.swap_bc();
    }
}

/// Intersection of the line through `a` and `b` with the plane through `p`
/// with normal `n`.
///
/// Solves `a + t * (b - a)` against the plane equation. The caller guarantees
/// the line is not parallel to the plane.
fn intersect_plane(
    a: &Point3<f64>,
    b: &Point3<f64>,
    p: &Point3<f64>,
    n: &Vector3<f64>,
) -> Point3<f64> {
    let u = b - a;
    let v = a - p;
    let t = -n.dot(&v) / n.dot(&u);
    a + u * t
}

/// Computes the endpoints of the intersection segment of two crossing
/// triangles, canonicalized by [`cross_intersect`].
///
/// The two further orientation tests order the four edge-plane crossing
/// points along the shared intersection line; each of the four cases
/// intersects the two edges bounding the overlap interval against the other
/// triangle's plane.
fn segment_endpoints(t1: &Triangle, t2: &Triangle, target: &mut Vec<Point3<f64>>) {
    let n1 = t1.normal();
    let n2 = t2.normal();

    let o1 = orient_3d(t1.a(), t1.c(), t2.b(), t2.a());
    let o2 = orient_3d(t1.a(), t1.b(), t2.c(), t2.a());

    let (i1, i2) = if o1 == Orientation::Positive {
        if o2 == Orientation::Positive {
            // Interval ordering: k i l j
            (
                intersect_plane(t1.a(), t1.c(), t2.a(), &n2),
                intersect_plane(t2.a(), t2.c(), t1.a(), &n1),
            )
        } else {
            // Interval ordering: k i j l
            (
                intersect_plane(t1.a(), t1.c(), t2.a(), &n2),
                intersect_plane(t1.a(), t1.b(), t2.a(), &n2),
            )
        }
    } else if o2 == Orientation::Positive {
        // Interval ordering: i k l j
        (
            intersect_plane(t2.a(), t2.b(), t1.a(), &n1),
            intersect_plane(t2.a(), t2.c(), t1.a(), &n1),
        )
    } else {
        // Interval ordering: i k j l
        (
            intersect_plane(t2.a(), t2.b(), t1.a(), &n1),
            intersect_plane(t1.a(), t1.b(), t2.a(), &n2),
        )
    };

    target.push(i1);
    // The crossing degenerates to a single point when both endpoints coincide
    if distance(&i1, &i2) > EPSILON {
        target.push(i2);
    }
}
