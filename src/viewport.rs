//! Mapping between mesh percentages and screen pixels.

use crate::float::Float;
use crate::vec::Vec2;

/// Screen area the mesh is stretched over. Mesh space is [0, 100] on both axes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport<F: Float> {
    pub width: F,
    pub height: F,
}

impl<F: Float> Viewport<F> {
    pub fn new(width: F, height: F) -> Self {
        Viewport { width, height }
    }

    /// Mesh position to pixels.
    pub fn to_screen(&self, p: Vec2<F>) -> Vec2<F> {
        let hundred = F::from_f32(100.0);
        Vec2::new(p.x / hundred, p.y / hundred).component_mul(Vec2::new(self.width, self.height))
    }

    /// Pixels (e.g. a pointer position) to mesh space.
    pub fn to_mesh(&self, p: Vec2<F>) -> Vec2<F> {
        let hundred = F::from_f32(100.0);
        Vec2::new(p.x / self.width * hundred, p.y / self.height * hundred)
    }
}
