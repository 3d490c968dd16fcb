//! Arena of shared points and the constraints between them.

use crate::float::Float;
use crate::vec::Vec2;
use crate::point::{Point, PointId};
use crate::constraint::{Constraint, ConstraintId};
use crate::error::PhysicsError;
use alloc::vec::Vec as AllocVec;

/// Outcome of resolving a batch of constraints.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Constraints that applied a correction.
    pub applied: usize,
    /// Constraints skipped because their endpoints coincided.
    pub skipped: usize,
}

impl core::ops::AddAssign for Resolution {
    fn add_assign(&mut self, rhs: Self) {
        self.applied += rhs.applied;
        self.skipped += rhs.skipped;
    }
}

/// Points and constraints addressed by handle, so cells can share vertices.
#[derive(Clone, Debug, Default)]
pub struct PointGraph<F: Float> {
    points: AllocVec<Point<F>>,
    constraints: AllocVec<Constraint<F>>,
}

impl<F: Float> PointGraph<F> {
    pub fn new() -> Self {
        PointGraph {
            points: AllocVec::new(),
            constraints: AllocVec::new(),
        }
    }

    pub fn with_capacity(points: usize, constraints: usize) -> Self {
        PointGraph {
            points: AllocVec::with_capacity(points),
            constraints: AllocVec::with_capacity(constraints),
        }
    }

    pub fn add_point(&mut self, point: Point<F>) -> PointId {
        let id = PointId(self.points.len());
        self.points.push(point);
        id
    }

    /// Constrain `id` to each of `others` at their current distance.
    ///
    /// Pairs that are already constrained, and `id` itself, are ignored.
    /// Returns the number of constraints created.
    pub fn attach(&mut self, id: PointId, others: &[PointId]) -> usize {
        let mut created = 0;
        for &other in others {
            if other == id || self.is_attached(id, other) {
                continue;
            }
            let cid = ConstraintId(self.constraints.len());
            self.constraints.push(Constraint::new(id, other, &self.points));
            self.points[id.0].constraints.push(cid);
            self.points[other.0].constraints.push(cid);
            created += 1;
        }
        created
    }

    pub fn is_attached(&self, p: PointId, q: PointId) -> bool {
        self.points[p.0]
            .constraints
            .iter()
            .any(|cid| self.constraints[cid.0].links(p, q))
    }

    /// Resolve every constraint touching `id` once, newest first.
    pub fn resolve_constraints(&mut self, id: PointId) -> Resolution {
        let mut resolution = Resolution::default();
        for i in (0..self.points[id.0].constraints.len()).rev() {
            let cid = self.points[id.0].constraints[i];
            self.resolve_one(cid, &mut resolution);
        }
        resolution
    }

    /// Resolve only the constraints created by `id`'s own `attach`, newest first.
    pub fn resolve_owned(&mut self, id: PointId) -> Resolution {
        let mut resolution = Resolution::default();
        for i in (0..self.points[id.0].constraints.len()).rev() {
            let cid = self.points[id.0].constraints[i];
            if self.constraints[cid.0].a == id {
                self.resolve_one(cid, &mut resolution);
            }
        }
        resolution
    }

    fn resolve_one(&mut self, cid: ConstraintId, resolution: &mut Resolution) {
        let constraint = &self.constraints[cid.0];
        if constraint.resolve(&mut self.points) {
            resolution.applied += 1;
        } else {
            log::trace!(
                "skipping degenerate constraint {:?} between {:?} and {:?}",
                cid, constraint.a, constraint.b
            );
            resolution.skipped += 1;
        }
    }

    pub fn pin(&mut self, id: PointId) {
        self.points[id.0].pin();
    }

    pub fn add_force(&mut self, id: PointId, force: Vec2<F>) {
        self.points[id.0].add_force(force);
    }

    pub fn update(&mut self, id: PointId, delta: F, damping: F) {
        self.points[id.0].update(delta, damping);
    }

    /// Drag a free point to `pos`. Pinned points refuse and `false` is returned.
    ///
    /// Only `pos` changes, so the move carries into the next `update` as velocity.
    pub fn set_position(&mut self, id: PointId, pos: Vec2<F>) -> bool {
        let point = &mut self.points[id.0];
        if point.pinned {
            return false;
        }
        point.pos = pos;
        true
    }

    pub fn point(&self, id: PointId) -> &Point<F> { &self.points[id.0] }
    pub(crate) fn point_mut(&mut self, id: PointId) -> &mut Point<F> { &mut self.points[id.0] }
    pub fn constraint(&self, id: ConstraintId) -> &Constraint<F> { &self.constraints[id.0] }

    /// Bounds-checked lookup.
    pub fn get(&self, id: PointId) -> Result<&Point<F>, PhysicsError> {
        self.points.get(id.0).ok_or(PhysicsError::PointOutOfBounds {
            index: id.0,
            count: self.points.len(),
        })
    }

    pub fn points(&self) -> &[Point<F>] { &self.points }
    pub fn constraints(&self) -> &[Constraint<F>] { &self.constraints }
    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
}
