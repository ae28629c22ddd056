//! Triangle-triangle intersection classification.

use log::warn;
use nalgebra::Point3;

use crate::coplanar::coplanar_intersect;
use crate::cross::cross_intersect;
use crate::orient::{Orientation, orient_3d};
use crate::triangle::Triangle;

/// How two triangles intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intersection {
    /// The triangles lie in different planes and pass through each other
    /// (touching counts).
    Cross,
    /// The triangles lie in the same plane and overlap.
    Coplanar,
}

/// Classifies the intersection of two triangles.
///
/// Returns `None` when the triangles do not intersect, or when either input
/// is degenerate (near-zero area); degenerate inputs additionally emit a
/// warning through the [`log`] facade. The caller's triangles are never
/// mutated.
pub fn triangles_intersect(t1: &Triangle, t2: &Triangle) -> Option<Intersection> {
    intersect_impl(t1, t2, None)
}

/// Classifies the intersection of two triangles and collects the
/// intersection geometry into `points`.
///
/// `points` is always cleared, whatever the outcome. On a positive result it
/// receives the intersection geometry: a single point (vertex or tangential
/// touch), two points (a segment), or three or more points forming a convex
/// planar polygon. The winding of the polygon is consistent across repeated
/// calls on the same inputs but otherwise unspecified. Near-coincident
/// points are deduplicated with a Euclidean tolerance of 1e-10.
pub fn triangles_intersect_into(
    t1: &Triangle,
    t2: &Triangle,
    points: &mut Vec<Point3<f64>>,
) -> Option<Intersection> {
    intersect_impl(t1, t2, Some(points))
}

fn intersect_impl(
    t1: &Triangle,
    t2: &Triangle,
    mut target: Option<&mut Vec<Point3<f64>>>,
) -> Option<Intersection> {
    if let Some(points) = target.as_mut() {
        points.clear();
    }

    // Each input is validated on its own so both warnings get emitted
    let mut degenerate = false;
    if t1.is_degenerate() {
        warn!("degenerate triangle provided as t1, skipping: {t1:?}");
        degenerate = true;
    }
    if t2.is_degenerate() {
        warn!("degenerate triangle provided as t2, skipping: {t2:?}");
        degenerate = true;
    }
    if degenerate {
        return None;
    }

    // Working copies: the solvers permute vertices in place
    let mut w1 = t1.clone();
    let mut w2 = t2.clone();

    // Sides of t1's vertices relative to t2's plane, reused by the cross
    // solver
    let o1a = orient_3d(w2.a(), w2.b(), w2.c(), w1.a());
    let o1b = orient_3d(w2.a(), w2.b(), w2.c(), w1.b());
    let o1c = orient_3d(w2.a(), w2.b(), w2.c(), w1.c());

    if o1a == Orientation::Zero && o1b == Orientation::Zero && o1c == Orientation::Zero {
        if coplanar_intersect(&mut w1, &mut w2, target) {
            return Some(Intersection::Coplanar);
        }
        return None;
    }

    if cross_intersect(&mut w1, &mut w2, o1a, o1b, o1c, target) {
        return Some(Intersection::Cross);
    }

    None
}
