//! Configuration for the per-tick simulation step.

use crate::float::Float;
use crate::vec::Vec2;
use crate::point::DEFAULT_DAMPING;

/// Default pointer attraction coefficient.
pub const DEFAULT_FORCE_POWER: f32 = 0.35;

/// Tunables for [`Mesh::step`](crate::mesh::Mesh::step).
///
/// # Builder Pattern
/// ```
/// use squishy::config::SimulationConfig;
/// use squishy::vec::Vec2;
///
/// let config: SimulationConfig<f32> = SimulationConfig::new()
///     .with_force_power(0.5)
///     .with_time_step(1.0 / 6.0)
///     .with_damping(0.98)
///     .with_gravity(Vec2::new(0.0, 0.1));
/// assert_eq!(config.delta(), 1.0 / 6.0);
/// ```
#[derive(Clone, Debug)]
pub struct SimulationConfig<F: Float> {
    /// Multiplier applied to the focal-cell-to-pointer offset. Default: 0.35.
    pub force_power: F,
    /// Integration step. `None` means `force_power / 2`.
    pub time_step: Option<F>,
    /// Fraction of implicit velocity kept per step. 1.0 = no damping. Default: 0.99.
    pub damping: F,
    /// Constant force added to every integrated point each tick. Default: zero.
    pub gravity: Vec2<F>,
}

impl<F: Float> SimulationConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            force_power: F::from_f32(DEFAULT_FORCE_POWER),
            time_step: None,
            damping: F::from_f32(DEFAULT_DAMPING),
            gravity: Vec2::zero(),
        }
    }

    /// Set the pointer force coefficient.
    pub fn with_force_power(mut self, force_power: F) -> Self {
        self.force_power = force_power;
        self
    }

    /// Fix the integration step instead of deriving it from the force power.
    pub fn with_time_step(mut self, time_step: F) -> Self {
        self.time_step = Some(time_step);
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Integration step used by `update`.
    pub fn delta(&self) -> F {
        self.time_step.unwrap_or(self.force_power * F::half())
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_follows_force_power_by_default() {
        let config: SimulationConfig<f64> = SimulationConfig::new().with_force_power(0.5);
        assert_eq!(config.delta(), 0.25);
    }

    #[test]
    fn explicit_time_step_wins() {
        let config: SimulationConfig<f64> = SimulationConfig::new()
            .with_time_step(0.1)
            .with_force_power(2.0);
        assert_eq!(config.delta(), 0.1);
    }
}
