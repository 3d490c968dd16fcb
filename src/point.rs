//! Mesh points: damped Verlet integration with implicit velocity.

use crate::float::Float;
use crate::vec::Vec2;
use crate::constraint::ConstraintId;
use alloc::vec::Vec as AllocVec;

/// Damping applied to the implicit velocity on every `update`.
pub const DEFAULT_DAMPING: f32 = 0.99;

/// Handle of a point inside a [`PointGraph`](crate::graph::PointGraph).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

/// A mesh vertex. Velocity is implicit in `pos - prev_pos`.
#[derive(Clone, Debug)]
pub struct Point<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    /// Impulse accumulated since the last `update`.
    pub force: Vec2<F>,
    pub pinned: bool,
    pub(crate) constraints: AllocVec<ConstraintId>,
}

impl<F: Float> Point<F> {
    pub fn new(pos: Vec2<F>) -> Self {
        Point {
            pos,
            prev_pos: pos,
            force: Vec2::zero(),
            pinned: false,
            constraints: AllocVec::new(),
        }
    }

    pub fn pinned(pos: Vec2<F>) -> Self {
        let mut point = Point::new(pos);
        point.pinned = true;
        point
    }

    /// Freeze the point. Positions are left as they are.
    pub fn pin(&mut self) {
        self.pinned = true;
    }

    /// Accumulate an impulse; it is consumed by the next `update`.
    pub fn add_force(&mut self, force: Vec2<F>) {
        self.force += force;
    }

    /// Advance one step: `pos + (pos - prev_pos) * damping + force / 2 * delta`.
    pub fn update(&mut self, delta: F, damping: F) {
        if self.pinned {
            return;
        }
        let next = self.pos
            + (self.pos - self.prev_pos).scale(damping)
            + self.force.scale(F::half() * delta);
        self.prev_pos = self.pos;
        self.pos = next;
        self.force = Vec2::zero();
    }

    /// Rotate the position around `origin` by `theta` radians.
    pub fn rotate(&mut self, origin: Vec2<F>, theta: F) {
        if self.pinned {
            return;
        }
        self.pos = self.pos.rotate_about(origin, theta);
    }

    /// Like [`rotate`](Self::rotate), but the rotated position replaces the
    /// force accumulator and `pos` is untouched.
    pub fn rotate_by(&mut self, origin: Vec2<F>, theta: F) {
        if self.pinned {
            return;
        }
        self.force = self.pos.rotate_about(origin, theta);
    }

    pub fn dist(&self, other: &Point<F>) -> F {
        self.pos.distance(other.pos)
    }

    /// Length of the position vector.
    pub fn length(&self) -> F {
        self.pos.length()
    }

    pub fn normal(&self) -> Vec2<F> {
        self.pos.normal()
    }

    pub fn dot(&self, other: &Point<F>) -> F {
        self.pos.dot(other.pos)
    }

    pub fn angle(&self, other: &Point<F>) -> F {
        self.pos.angle(other.pos)
    }

    /// Displacement over the last step.
    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Handles of every constraint touching this point, in registration order.
    pub fn constraints(&self) -> &[ConstraintId] {
        &self.constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn damping() -> f64 {
        DEFAULT_DAMPING as f64
    }

    #[test]
    fn forces_accumulate_until_update() {
        let mut p = Point::new(Vec2::new(10.0f64, 10.0));
        p.add_force(Vec2::new(1.0, 0.0));
        p.add_force(Vec2::new(1.0, 2.0));
        assert_eq!(p.force, Vec2::new(2.0, 2.0));

        p.update(1.0, damping());
        assert_eq!(p.force, Vec2::zero());
        assert_eq!(p.pos, Vec2::new(11.0, 11.0));
        assert_eq!(p.prev_pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn implicit_velocity_is_damped() {
        let mut p = Point::new(Vec2::new(0.0f64, 0.0));
        p.prev_pos = Vec2::new(-1.0, 0.0);
        p.update(0.175, damping());
        assert!((p.pos.x - 0.99).abs() < 1e-12);
        assert!((p.velocity().x - 0.99).abs() < 1e-12);
    }

    #[test]
    fn rotate_by_writes_force_only() {
        let mut p = Point::new(Vec2::new(2.0f64, 0.0));
        p.rotate_by(Vec2::zero(), core::f64::consts::PI);
        assert_eq!(p.pos, Vec2::new(2.0, 0.0));
        assert!((p.force.x + 2.0).abs() < 1e-12);
        assert!(p.force.y.abs() < 1e-12);
    }

    #[test]
    fn pinned_ignores_rotation() {
        let mut p = Point::pinned(Vec2::new(2.0f64, 0.0));
        p.rotate(Vec2::zero(), 1.0);
        p.rotate_by(Vec2::zero(), 1.0);
        assert_eq!(p.pos, Vec2::new(2.0, 0.0));
        assert_eq!(p.force, Vec2::zero());
    }

    #[test]
    fn pin_is_idempotent() {
        let mut p = Point::new(Vec2::new(4.0f32, 5.0));
        p.pin();
        p.pin();
        assert!(p.pinned);
        assert_eq!(p.pos, p.prev_pos);
    }
}
