//! Coplanar-intersection solver: planar classification and polygon clipping.
//!
//! Both triangles are first mapped into an orthonormal frame of their shared
//! plane so that every further test is a 2D orientation predicate. The
//! classification follows the published Guigue-Devillers decision diagrams;
//! the branch structure encodes case-specific correctness arguments and must
//! not be algebraically simplified.

use log::error;
use nalgebra::{Point3, Vector3, distance};

use crate::orient::{EPSILON, Orientation, orient_2d};
use crate::triangle::Triangle;

/// Orthonormal frame of a triangle's supporting plane.
///
/// Maps points of the plane to `(x', y', z' ~ 0)` coordinates with the origin
/// at the triangle's first vertex, and back. Owned per call, so the solver
/// stays reentrant.
struct PlaneBasis {
    origin: Point3<f64>,
    u: Vector3<f64>,
    v: Vector3<f64>,
    n: Vector3<f64>,
}

impl PlaneBasis {
    /// Builds the frame from the triangle's normal and its `a - b` edge.
    fn from_triangle(tri: &Triangle) -> Self {
        let n = tri.normal().normalize();
        let u = (tri.a() - tri.b()).normalize();
        let v = n.cross(&u);
        Self {
            origin: *tri.a(),
            u,
            v,
            n,
        }
    }

    /// World coordinates to plane coordinates.
    fn project(&self, p: &Point3<f64>) -> Point3<f64> {
        let d = p - self.origin;
        Point3::new(self.u.dot(&d), self.v.dot(&d), self.n.dot(&d))
    }

    /// Plane coordinates back to world coordinates.
    fn unproject(&self, p: &Point3<f64>) -> Point3<f64> {
        self.origin + self.u * p.x + self.v * p.y + self.n * p.z
    }

    fn project_triangle(&self, tri: &Triangle) -> Triangle {
        Triangle::new(
            self.project(tri.a()),
            self.project(tri.b()),
            self.project(tri.c()),
        )
    }
}

/// Decides whether two coplanar triangles overlap and optionally computes
/// the intersection polygon.
///
/// Both triangles are working copies; they are projected into the plane
/// frame, normalized to counter-clockwise winding, and relabeled in place.
pub(crate) fn coplanar_intersect(
    t1: &mut Triangle,
    t2: &mut Triangle,
    target: Option<&mut Vec<Point3<f64>>>,
) -> bool {
    let basis = PlaneBasis::from_triangle(t1);
    *t1 = basis.project_triangle(t1);
    *t2 = basis.project_triangle(t2);

    t1.make_counter_clockwise();
    t2.make_counter_clockwise();

    // Sides of t1's first vertex relative to t2's directed edges
    let o_pq = orient_2d(t2.a(), t2.b(), t1.a());
    let o_qr = orient_2d(t2.b(), t2.c(), t1.a());
    let o_rp = orient_2d(t2.c(), t2.a(), t1.a());

    let intersecting = if o_pq.is_non_negative() {
        if o_qr.is_non_negative() {
            if o_rp.is_non_negative() {
                // + + +: p1 inside t2
                true
            } else {
                // + + -
                intersection_type_r1(t1, t2)
            }
        } else if o_rp.is_non_negative() {
            // + - +
            t2.permute_right();
            intersection_type_r1(t1, t2)
        } else {
            // + - -
            intersection_type_r2(t1, t2)
        }
    } else if o_qr.is_non_negative() {
        if o_rp.is_non_negative() {
            // - + +
            t2.permute_left();
            intersection_type_r1(t1, t2)
        } else {
            // - + -
            t2.permute_left();
            intersection_type_r2(t1, t2)
        }
    } else if o_rp.is_non_negative() {
        // - - +
        t2.permute_right();
        intersection_type_r2(t1, t2)
    } else {
        // - - -: impossible for counter-clockwise non-degenerate triangles
        error!("unreachable sign configuration for coplanar triangles: {t1:?} {t2:?}");
        return false;
    };

    if intersecting {
        if let Some(target) = target {
            clip_triangle(t1, t2, target);
            for p in target.iter_mut() {
                *p = basis.unproject(p);
            }
        }
    }

    intersecting
}

/// Region R1 sub-test: t1.a lies in the open region bounded by one edge of t2.
///
/// A fixed sequence of orientation tests among (p1, q1, r1, p2, r2); every
/// path either proves overlap or falls through to false.
fn intersection_type_r1(t1: &Triangle, t2: &Triangle) -> bool {
    let p1 = t1.a();
    let q1 = t1.b();
    let r1 = t1.c();
    let p2 = t2.a();
    let r2 = t2.c();

    if orient_2d(r2, p2, q1).is_non_negative() {
        // I
        if orient_2d(r2, p1, q1).is_non_negative() {
            // II.a
            if orient_2d(p1, p2, q1).is_non_negative() {
                // III.a
                return true;
            }
            if orient_2d(p1, p2, r1).is_non_negative() {
                // IV.a
                if orient_2d(q1, r1, p2).is_non_negative() {
                    // V
                    return true;
                }
            }
        }
    } else if orient_2d(r2, p2, r1).is_non_negative() {
        // II.b
        if orient_2d(q1, r1, r2).is_non_negative() {
            // III.b
            if orient_2d(p1, p2, r1).is_non_negative() {
                // IV.b
                return true;
            }
        }
    }

    false
}

/// Region R2 sub-test: t1.a lies in the open region bounded by two edges of t2.
///
/// Same contract as [`intersection_type_r1`], over (p1, q1, r1, p2, q2, r2).
fn intersection_type_r2(t1: &Triangle, t2: &Triangle) -> bool {
    let p1 = t1.a();
    let q1 = t1.b();
    let r1 = t1.c();
    let p2 = t2.a();
    let q2 = t2.b();
    let r2 = t2.c();

    if orient_2d(r2, p2, q1).is_non_negative() {
        // I
        if orient_2d(q2, r2, q1).is_non_negative() {
            // II.a
            if orient_2d(p1, p2, q1).is_non_negative() {
                // III.a
                if orient_2d(p1, q2, q1).is_non_positive() {
                    // IV.a
                    return true;
                }
            } else if orient_2d(p1, p2, r1).is_non_negative() {
                // IV.b
                if orient_2d(r2, p2, r1).is_non_positive() {
                    // V.a
                    return true;
                }
            }
        } else if orient_2d(p1, q2, q1).is_non_positive() {
            // III.b
            if orient_2d(q2, r2, r1).is_non_negative() {
                // IV.c
                if orient_2d(q1, r1, q2).is_non_negative() {
                    // V.b
                    return true;
                }
            }
        }
    } else if orient_2d(r2, p2, r1).is_non_negative() {
        // II.b
        if orient_2d(q1, r1, r2).is_non_negative() {
            // III.c
            if orient_2d(r1, p1, p2).is_non_negative() {
                // IV.d
                return true;
            }
        } else if orient_2d(q1, r1, q2).is_non_negative() {
            // IV.e
            if orient_2d(q2, r2, r1).is_non_negative() {
                // V.c
                return true;
            }
        }
    }

    false
}

/// Sutherland-Hodgman clip of subject triangle `t2` against the edges of the
/// convex clip triangle `t1`, in the z=0 frame.
///
/// Vertices on a clip edge (sign zero) count as inside. Accepted points are
/// deduplicated against `target` with Euclidean distance at most [`EPSILON`];
/// `target` must start empty.
fn clip_triangle(t1: &Triangle, t2: &Triangle, target: &mut Vec<Point3<f64>>) {
    let clip = t1.vertices();
    let mut output: Vec<Point3<f64>> = t2.vertices().to_vec();

    // Clip edges in order (c, a), (a, b), (b, c)
    for i in 0..3 {
        let input = std::mem::take(&mut output);
        let i_prev = (i + 2) % 3;
        let e0 = &clip[i_prev];
        let e1 = &clip[i];

        let sides: Vec<Orientation> = input.iter().map(|p| orient_2d(e0, e1, p)).collect();

        for j in 0..input.len() {
            let j_prev = (j + input.len() - 1) % input.len();

            if sides[j].is_non_negative() {
                if sides[j_prev] == Orientation::Negative {
                    output.push(lines_intersect_2d(e0, e1, &input[j_prev], &input[j]));
                }
                output.push(input[j]);
            } else if sides[j_prev].is_non_negative() {
                output.push(lines_intersect_2d(e0, e1, &input[j_prev], &input[j]));
            }
        }
    }

    for point in output {
        let duplicate = target.iter().any(|q| distance(&point, q) <= EPSILON);
        if !duplicate {
            target.push(point);
        }
    }
}

/// Intersection point of two lines in the z=0 frame, each given by two
/// points, via Cramer's rule.
///
/// The clip loop only calls this for segment pairs known to cross, so the
/// denominator is not checked: callers must guarantee non-parallel lines.
fn lines_intersect_2d(
    a1: &Point3<f64>,
    b1: &Point3<f64>,
    a2: &Point3<f64>,
    b2: &Point3<f64>,
) -> Point3<f64> {
    let dx1 = a1.x - b1.x;
    let dx2 = a2.x - b2.x;
    let dy1 = a1.y - b1.y;
    let dy2 = a2.y - b2.y;

    let d = dx1 * dy2 - dx2 * dy1;

    let n1 = a1.x * b1.y - a1.y * b1.x;
    let n2 = a2.x * b2.y - a2.y * b2.x;

    Point3::new((n1 * dx2 - n2 * dx1) / d, (n1 * dy2 - n2 * dy1) / d, 0.0)
}
