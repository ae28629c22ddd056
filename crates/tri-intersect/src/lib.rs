//! Exact triangle-triangle intersection classification in 3D.
//!
//! Implements the Guigue-Devillers triangle-triangle intersection test:
//! given two triangles, decide whether they do not intersect, cross through
//! each other, or lie in the same plane and overlap, and optionally compute
//! the intersection geometry (a point, a segment, or a convex polygon).
//!
//! All sign decisions go through epsilon-tolerant orientation predicates with
//! a single shared tolerance ([`EPSILON`]), which makes the classification
//! robust to floating-point error. Degenerate (near-zero area) triangles are
//! rejected with a warning rather than producing garbage.
//!
//! # Example
//!
//! ```
//! use nalgebra::Point3;
//! use tri_intersect::{Intersection, Triangle, triangles_intersect_into};
//!
//! let t1 = Triangle::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 5.0),
//!     Point3::new(5.0, 0.0, 0.0),
//! );
//! let t2 = Triangle::new(
//!     Point3::new(1.0, -1.0, 1.0),
//!     Point3::new(1.0, -1.0, -1.0),
//!     Point3::new(1.0, 1.0, 1.0),
//! );
//!
//! let mut points = Vec::new();
//! let result = triangles_intersect_into(&t1, &t2, &mut points);
//!
//! assert_eq!(result, Some(Intersection::Cross));
//! assert_eq!(points.len(), 2); // the triangles meet along a segment
//! ```
//!
//! # Architecture
//!
//! - [`triangles_intersect`] / [`triangles_intersect_into`]: the entry
//!   points; validate inputs and route to a solver
//! - `cross`: solver for triangles lying in different planes
//! - `coplanar`: solver for triangles sharing a plane, including the
//!   polygon-clipping step
//! - [`orient_2d`] / [`orient_3d`]: the underlying sign predicates
//!
//! Every call is a pure function of its inputs; there is no shared state, so
//! concurrent use needs no locking.

mod coplanar;
mod cross;
mod intersect;
mod orient;
mod triangle;

pub use intersect::{Intersection, triangles_intersect, triangles_intersect_into};
pub use orient::{EPSILON, Orientation, orient_2d, orient_3d};
pub use triangle::Triangle;
