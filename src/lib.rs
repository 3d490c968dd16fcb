//! Jelly quad meshes driven by damped Verlet integration.
//!
//! `squishy` simulates a rows x cols grid of quadrilaterals whose corners are
//! shared Verlet points tied together by distance constraints. The border is
//! pinned, interior vertices are jittered once at build time, and a pointer
//! can tug on a focal cell. Each tick runs a single relaxation pass rather
//! than an iterated solve, so the mesh wobbles and settles over many frames.
//!
//! # Features
//!
//! - **Shared-corner mesh**: `(rows + 1) * (cols + 1)` points behind `rows * cols` cells
//! - **Verlet integration**: Position-based dynamics with implicit, damped velocity
//! - **Soft constraints**: One half-correction pass per constraint per tick
//! - **Deterministic**: Jitter comes from a caller-supplied `rand::Rng`
//! - **Observable**: Monitor tick phases via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use rand::{rngs::SmallRng, SeedableRng};
//! use squishy::{Mesh, MeshConfig, NoOpStepObserver, SimulationConfig, TickInput, Vec2};
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let mut mesh: Mesh<f32> = Mesh::build(&MeshConfig::new(15, 20), &mut rng)?;
//! let config = SimulationConfig::new();
//! let input = TickInput::with_pointer(mesh.center_index(), Vec2::new(60.0, 40.0));
//!
//! for _ in 0..60 {
//!     mesh.step(&input, &config, &mut NoOpStepObserver)?;
//! }
//! assert!(mesh.positions().iter().all(|p| p.is_finite()));
//! # Ok::<(), squishy::PhysicsError>(())
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod constraint;
pub mod graph;
pub mod mesh;
pub mod viewport;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point::{Point, PointId};
pub use constraint::{Constraint, ConstraintId};
pub use graph::{PointGraph, Resolution};
pub use mesh::{Cell, CellIndex, Mesh, MeshConfig, TickInput};
pub use viewport::Viewport;
pub use config::SimulationConfig;
pub use observer::{StepObserver, NoOpStepObserver, CountingObserver};
pub use error::PhysicsError;
