//! Jelly quad mesh: cells sharing corner points, pinned at the border.

use crate::float::Float;
use crate::vec::Vec2;
use crate::point::{Point, PointId};
use crate::graph::{PointGraph, Resolution};
use crate::config::SimulationConfig;
use crate::observer::StepObserver;
use crate::viewport::Viewport;
use crate::error::PhysicsError;
use alloc::vec::Vec as AllocVec;
use rand::Rng;

/// Default vertex jitter, as a fraction of a cell's size.
pub const DEFAULT_JITTER: f32 = 0.175;

/// Configuration for building a mesh.
#[derive(Clone, Debug)]
pub struct MeshConfig<F: Float> {
    pub rows: usize,
    pub cols: usize,
    /// Maximum random offset of a vertex, as a fraction of the cell size.
    pub jitter: F,
    /// Shift `prev_pos` along with `pos` when jittering, so the mesh starts
    /// still. Off by default: jittered points keep their grid position as
    /// `prev_pos` and wobble back over the first frames.
    pub rest_start: bool,
}

impl<F: Float> MeshConfig<F> {
    pub fn new(rows: usize, cols: usize) -> Self {
        MeshConfig {
            rows,
            cols,
            jitter: F::from_f32(DEFAULT_JITTER),
            rest_start: false,
        }
    }

    /// Set the jitter fraction. Zero gives a perfectly regular grid.
    pub fn with_jitter(mut self, jitter: F) -> Self {
        self.jitter = jitter;
        self
    }

    /// Start the jittered mesh at rest instead of with a first-frame wobble.
    pub fn with_rest_start(mut self, rest_start: bool) -> Self {
        self.rest_start = rest_start;
        self
    }
}

/// Row/column address of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub row: usize,
    pub col: usize,
}

impl CellIndex {
    pub fn new(row: usize, col: usize) -> Self {
        CellIndex { row, col }
    }
}

/// One quad of the mesh. Corners are shared with neighbouring cells.
#[derive(Clone, Debug)]
pub struct Cell<F: Float> {
    pub top_left: PointId,
    pub top_right: PointId,
    pub bottom_left: PointId,
    pub bottom_right: PointId,
    /// Midpoint of the top-left/bottom-right diagonal at build time.
    pub center: Vec2<F>,
}

impl<F: Float> Cell<F> {
    /// Corners in polygon winding order.
    pub fn corners(&self) -> [PointId; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}

/// Per-tick input, replacing ambient pointer state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickInput<F: Float> {
    /// Cell whose corners are pulled toward the pointer.
    pub focal: CellIndex,
    /// Pointer position in mesh space, if the pointer is active.
    pub pointer: Option<Vec2<F>>,
}

impl<F: Float> TickInput<F> {
    /// No pointer interaction this tick.
    pub fn idle(focal: CellIndex) -> Self {
        TickInput { focal, pointer: None }
    }

    pub fn with_pointer(focal: CellIndex, pointer: Vec2<F>) -> Self {
        TickInput { focal, pointer: Some(pointer) }
    }
}

/// A rows x cols grid of cells over a shared point graph.
///
/// Cell `(row, col)` is stored at `row * cols + col`. The mesh spans
/// [0, 100] x [0, 100]; scale to pixels with a [`Viewport`].
#[derive(Clone, Debug)]
pub struct Mesh<F: Float> {
    graph: PointGraph<F>,
    cells: AllocVec<Cell<F>>,
    /// Points resolved and integrated each tick, in row-major order.
    drivers: AllocVec<PointId>,
    rows: usize,
    cols: usize,
}

impl<F: Float> Mesh<F> {
    /// Build the mesh, drawing vertex jitter from `rng`.
    ///
    /// Every cell creates its own bottom-right point; the other three corners
    /// come from the cell above or to the left when one exists. The border
    /// is pinned and each bottom-right point is constrained to the other
    /// three corners of its cell.
    pub fn build<R: Rng + ?Sized>(config: &MeshConfig<F>, rng: &mut R) -> Result<Self, PhysicsError> {
        let (rows, cols) = (config.rows, config.cols);
        if rows == 0 || cols == 0 {
            return Err(PhysicsError::InvalidDimension { rows, cols });
        }

        let hundred = F::from_f32(100.0);
        let row_height = hundred / F::from_usize(rows);
        let col_width = hundred / F::from_usize(cols);
        let x_at = |col: usize| F::from_usize(col) * col_width;
        let y_at = |row: usize| F::from_usize(row) * row_height;

        let mut graph = PointGraph::with_capacity((rows + 1) * (cols + 1), 3 * rows * cols);
        let mut cells: AllocVec<Cell<F>> = AllocVec::with_capacity(rows * cols);

        for r in 0..rows {
            for c in 0..cols {
                let last_row = r == rows - 1;
                let last_col = c == cols - 1;

                let top_right = if r == 0 {
                    let id = graph.add_point(Point::new(Vec2::new(x_at(c + 1), F::zero())));
                    if !last_col {
                        jitter_x(&mut graph, id, col_width * config.jitter, config.rest_start, rng);
                    }
                    id
                } else {
                    cells[(r - 1) * cols + c].bottom_right
                };

                let top_left = if c > 0 {
                    cells[r * cols + c - 1].top_right
                } else if r > 0 {
                    cells[(r - 1) * cols].bottom_left
                } else {
                    graph.add_point(Point::new(Vec2::zero()))
                };

                let bottom_left = if c == 0 {
                    let id = graph.add_point(Point::new(Vec2::new(F::zero(), y_at(r + 1))));
                    if !last_row {
                        jitter_y(&mut graph, id, row_height * config.jitter, config.rest_start, rng);
                    }
                    id
                } else {
                    cells[r * cols + c - 1].bottom_right
                };

                let bottom_right = graph.add_point(Point::new(Vec2::new(x_at(c + 1), y_at(r + 1))));
                if !last_row {
                    jitter_y(&mut graph, bottom_right, row_height * config.jitter, config.rest_start, rng);
                }
                if !last_col {
                    jitter_x(&mut graph, bottom_right, col_width * config.jitter, config.rest_start, rng);
                }

                if last_col {
                    graph.pin(bottom_right);
                    graph.pin(top_right);
                }
                if last_row {
                    graph.pin(bottom_right);
                    graph.pin(bottom_left);
                }
                if c == 0 {
                    graph.pin(bottom_left);
                    graph.pin(top_left);
                }
                if r == 0 {
                    graph.pin(top_left);
                    graph.pin(top_right);
                }

                graph.attach(bottom_right, &[top_left, bottom_left, top_right]);

                let center = graph.point(top_left).pos.midpoint(graph.point(bottom_right).pos);
                cells.push(Cell { top_left, top_right, bottom_left, bottom_right, center });
            }
        }

        let drivers = cells[..(rows - 1) * cols]
            .iter()
            .map(|cell| cell.bottom_right)
            .collect();

        log::debug!(
            "built {}x{} mesh: {} points, {} constraints",
            rows, cols, graph.point_count(), graph.constraint_count()
        );

        Ok(Mesh { graph, cells, drivers, rows, cols })
    }

    /// Advance the mesh by one tick.
    ///
    /// Resolves each driver's own constraints, pulls the focal cell's corners
    /// toward the pointer, then integrates every driver. The focal cell is
    /// validated before anything moves.
    pub fn step<O: StepObserver<F>>(
        &mut self,
        input: &TickInput<F>,
        config: &SimulationConfig<F>,
        observer: &mut O,
    ) -> Result<(), PhysicsError> {
        let focal = self.cell_checked(input.focal)?.clone();

        let mut resolution = Resolution::default();
        for &id in self.drivers.iter() {
            resolution += self.graph.resolve_owned(id);
        }
        observer.on_constraints_resolved(resolution.applied, resolution.skipped);

        if let Some(pointer) = input.pointer {
            let force = (pointer - self.graph.point(focal.top_left).pos).scale(config.force_power);
            for id in focal.corners() {
                self.graph.add_force(id, force);
            }
            observer.on_force_applied(force);
        }

        if config.gravity != Vec2::zero() {
            for &id in self.drivers.iter() {
                self.graph.add_force(id, config.gravity);
            }
        }

        let delta = config.delta();
        for &id in self.drivers.iter() {
            self.graph.update(id, delta, config.damping);
        }
        observer.on_integrate();

        observer.on_step_complete();
        Ok(())
    }

    /// Middle cell of the mesh, the usual focal cell for pointer interaction.
    pub fn center_index(&self) -> CellIndex {
        CellIndex::new((self.rows + 1) / 2 - 1, (self.cols + 1) / 2 - 1)
    }

    pub fn cell(&self, index: CellIndex) -> Option<&Cell<F>> {
        if index.row < self.rows && index.col < self.cols {
            self.cells.get(index.row * self.cols + index.col)
        } else {
            None
        }
    }

    fn cell_checked(&self, index: CellIndex) -> Result<&Cell<F>, PhysicsError> {
        self.cell(index).ok_or(PhysicsError::CellOutOfBounds {
            row: index.row,
            col: index.col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Corner positions of a cell in polygon winding order.
    pub fn corners(&self, index: CellIndex) -> Option<[Vec2<F>; 4]> {
        self.cell(index)
            .map(|cell| cell.corners().map(|id| self.graph.point(id).pos))
    }

    /// Corner positions of a cell in pixels.
    pub fn screen_corners(&self, index: CellIndex, viewport: &Viewport<F>) -> Option<[Vec2<F>; 4]> {
        self.corners(index)
            .map(|corners| corners.map(|p| viewport.to_screen(p)))
    }

    /// All point positions in creation order.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.graph.points().iter().map(|p| p.pos).collect()
    }

    pub fn point(&self, id: PointId) -> &Point<F> { self.graph.point(id) }
    pub fn graph(&self) -> &PointGraph<F> { &self.graph }
    pub fn cells(&self) -> &[Cell<F>] { &self.cells }
    pub fn drivers(&self) -> &[PointId] { &self.drivers }
    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn point_count(&self) -> usize { self.graph.point_count() }
    pub fn constraint_count(&self) -> usize { self.graph.constraint_count() }
}

fn jitter_amount<F: Float, R: Rng + ?Sized>(span: F, rng: &mut R) -> F {
    let magnitude = F::from_f32(rng.gen::<f32>());
    if rng.gen_bool(0.5) { -(magnitude * span) } else { magnitude * span }
}

// Only `pos` moves unless `rest_start`; the gap to `prev_pos` is an implicit velocity.
fn jitter_x<F: Float, R: Rng + ?Sized>(
    graph: &mut PointGraph<F>,
    id: PointId,
    span: F,
    rest_start: bool,
    rng: &mut R,
) {
    let offset = jitter_amount(span, rng);
    let p = graph.point_mut(id);
    p.pos.x = p.pos.x + offset;
    if rest_start {
        p.prev_pos.x = p.prev_pos.x + offset;
    }
}

fn jitter_y<F: Float, R: Rng + ?Sized>(
    graph: &mut PointGraph<F>,
    id: PointId,
    span: F,
    rest_start: bool,
    rng: &mut R,
) {
    let offset = jitter_amount(span, rng);
    let p = graph.point_mut(id);
    p.pos.y = p.pos.y + offset;
    if rest_start {
        p.prev_pos.y = p.prev_pos.y + offset;
    }
}
