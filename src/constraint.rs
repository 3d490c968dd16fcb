//! Distance constraints between two mesh points.

use crate::float::Float;
use crate::point::{Point, PointId};

/// Handle of a constraint inside a [`PointGraph`](crate::graph::PointGraph).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintId(pub usize);

/// Keeps two points near the distance they had when the constraint was made.
///
/// `a` is the point whose `attach` created the constraint; the step loop
/// resolves a constraint through that owner only.
#[derive(Clone, Debug)]
pub struct Constraint<F: Float> {
    pub a: PointId,
    pub b: PointId,
    rest_length: F,
}

impl<F: Float> Constraint<F> {
    /// Build a constraint whose rest length is the current `a`–`b` distance.
    pub fn new(a: PointId, b: PointId, points: &[Point<F>]) -> Self {
        let rest_length = points[a.0].dist(&points[b.0]);
        Constraint { a, b, rest_length }
    }

    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    /// The other endpoint, if `id` is one of them.
    pub fn other(&self, id: PointId) -> Option<PointId> {
        if id == self.a {
            Some(self.b)
        } else if id == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    pub fn links(&self, p: PointId, q: PointId) -> bool {
        (self.a == p && self.b == q) || (self.a == q && self.b == p)
    }

    /// One relaxation pass: each free endpoint moves half of the length error.
    ///
    /// Returns `false` without touching anything when the endpoints coincide.
    pub fn resolve(&self, points: &mut [Point<F>]) -> bool {
        let delta = points[self.a.0].pos - points[self.b.0].pos;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-10)) {
            return false;
        }

        let diff = (self.rest_length - dist) / dist;
        let correction = delta.scale(diff * F::half());

        if !points[self.a.0].pinned {
            points[self.a.0].pos += correction;
        }
        if !points[self.b.0].pinned {
            points[self.b.0].pos -= correction;
        }
        true
    }
}
