//! Triangle representation for intersection queries.

use nalgebra::{Point3, Vector3};

use crate::orient::{EPSILON, Orientation, orient_2d};

/// A triangle in 3D space, defined by three vertices.
///
/// The winding order is meaningful: the normal direction follows the
/// right-hand rule `(b - a) x (c - a)`, and the intersection solvers rely on
/// it to compare windings across triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Point3<f64>; 3],
}

impl Triangle {
    /// Creates a new triangle from three points.
    pub fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Returns the three vertices of the triangle.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>; 3] {
        &self.vertices
    }

    /// First vertex.
    #[inline]
    pub fn a(&self) -> &Point3<f64> {
        &self.vertices[0]
    }

    /// Second vertex.
    #[inline]
    pub fn b(&self) -> &Point3<f64> {
        &self.vertices[1]
    }

    /// Third vertex.
    #[inline]
    pub fn c(&self) -> &Point3<f64> {
        &self.vertices[2]
    }

    /// Computes the (unnormalized) normal vector of the triangle.
    ///
    /// The direction follows the right-hand rule based on vertex winding.
    pub fn normal(&self) -> Vector3<f64> {
        let [a, b, c] = &self.vertices;
        let ab = b - a;
        let ac = c - a;
        ab.cross(&ac)
    }

    /// Checks whether the triangle is degenerate (near-zero area).
    ///
    /// Degenerate iff every component of the edge cross product has magnitude
    /// at most [`EPSILON`], i.e. the edges are parallel or zero-length within
    /// tolerance.
    pub fn is_degenerate(&self) -> bool {
        let n = self.normal();
        n.x.abs() <= EPSILON && n.y.abs() <= EPSILON && n.z.abs() <= EPSILON
    }

    /// Cyclic left rotation of the vertices: `(a, b, c)` becomes `(b, c, a)`.
    ///
    /// Preserves triangle identity and winding direction; only which vertex
    /// is labeled `a` changes.
    pub(crate) fn permute_left(&mut self) {
        self.vertices.rotate_left(1);
    }

    /// Cyclic right rotation of the vertices: `(a, b, c)` becomes `(c, a, b)`.
    pub(crate) fn permute_right(&mut self) {
        self.vertices.rotate_right(1);
    }

    /// Swaps `b` and `c`, reversing the winding direction.
    pub(crate) fn swap_bc(&mut self) {
        self.vertices.swap(1, 2);
    }

    /// Reverses the winding if the triangle is clockwise in the z=0 frame.
    ///
    /// Idempotent. Only meaningful for triangles already projected into a
    /// common plane with `z = 0`.
    pub(crate) fn make_counter_clockwise(&mut self) {
        if orient_2d(self.a(), self.b(), self.c()) == Orientation::Negative {
            self.swap_bc();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Triangle {
        Triangle::new(Point3::from(a), Point3::from(b), Point3::from(c))
    }

    #[test]
    fn degenerate_collinear_vertices() {
        let t = tri([1.0, 1.0, 0.0], [2.0, 2.0, 0.0], [3.0, 3.0, 0.0]);
        assert!(t.is_degenerate());

        // Area below the tolerance still counts as degenerate
        let t = tri(
            [1.0, 1.0, 0.0],
            [2.0 - 1e-11, 2.0 + 1e-11, 0.0],
            [3.0, 3.0, 0.0],
        );
        assert!(t.is_degenerate());
    }

    #[test]
    fn non_degenerate_triangles() {
        let t = tri([1.0, 1.0, 0.0], [3.0, 3.0, 0.0], [3.0, 1.0, 0.0]);
        assert!(!t.is_degenerate());

        // Area above the tolerance is accepted
        let t = tri([1.0, 1.0, 0.0], [2.0 - 1e-9, 2.0, 0.0], [3.0, 3.0, 0.0]);
        assert!(!t.is_degenerate());
    }

    #[test]
    fn permute_left_relabels_vertices() {
        let mut t = tri([1.0, 1.0, 1.0], [2.0, 2.0, 2.0], [3.0, 3.0, 3.0]);
        t.permute_left();
        assert_eq!(t.a(), &Point3::new(2.0, 2.0, 2.0));
        assert_eq!(t.b(), &Point3::new(3.0, 3.0, 3.0));
        assert_eq!(t.c(), &Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn permute_right_relabels_vertices() {
        let mut t = tri([1.0, 1.0, 1.0], [2.0, 2.0, 2.0], [3.0, 3.0, 3.0]);
        t.permute_right();
        assert_eq!(t.a(), &Point3::new(3.0, 3.0, 3.0));
        assert_eq!(t.b(), &Point3::new(1.0, 1.0, 1.0));
        assert_eq!(t.c(), &Point3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn permutations_preserve_normal() {
        let t = tri([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 3.0, 0.0]);
        let n = t.normal();

        let mut left = t.clone();
        left.permute_left();
        assert_eq!(left.normal(), n);

        let mut right = t.clone();
        right.permute_right();
        assert_eq!(right.normal(), n);
    }

    #[test]
    fn make_counter_clockwise_fixes_winding() {
        let a = Point3::new(1.0, 1.0, 0.0);
        let b = Point3::new(3.0, 1.0, 0.0);
        let c = Point3::new(3.0, 3.0, 0.0);

        // Already counter-clockwise: unchanged
        let mut t = Triangle::new(a, b, c);
        t.make_counter_clockwise();
        assert_eq!(t, Triangle::new(a, b, c));

        // Clockwise: b and c get swapped
        let mut t = Triangle::new(a, c, b);
        t.make_counter_clockwise();
        assert_eq!(t, Triangle::new(a, b, c));
    }
}
