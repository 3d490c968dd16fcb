//! Step observer trait for watching the phases of a simulation tick.

use crate::float::Float;
use crate::vec::Vec2;

/// Hooks called by [`Mesh::step`](crate::mesh::Mesh::step).
///
/// Useful for debugging, profiling, or driving a renderer once a tick is
/// done. All methods have default no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called after constraint resolution with how many constraints applied a
    /// correction and how many were skipped as degenerate.
    fn on_constraints_resolved(&mut self, _applied: usize, _skipped: usize) {}

    /// Called after the pointer force was added to the focal cell's corners.
    fn on_force_applied(&mut self, _force: Vec2<F>) {}

    /// Called after all driver points have been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a tick is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}

/// Tallies what happened across ticks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountingObserver {
    pub steps: usize,
    pub applied: usize,
    pub skipped: usize,
    pub forced_steps: usize,
}

impl<F: Float> StepObserver<F> for CountingObserver {
    fn on_constraints_resolved(&mut self, applied: usize, skipped: usize) {
        self.applied += applied;
        self.skipped += skipped;
    }

    fn on_force_applied(&mut self, _force: Vec2<F>) {
        self.forced_steps += 1;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
