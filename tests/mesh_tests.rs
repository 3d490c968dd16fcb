use rand::rngs::SmallRng;
use rand::SeedableRng;
use squishy::{CellIndex, Mesh, MeshConfig, PhysicsError, PointId, Vec2, Viewport};
use std::collections::HashSet;

fn build(rows: usize, cols: usize) -> Mesh<f64> {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    Mesh::build(&MeshConfig::new(rows, cols), &mut rng).unwrap()
}

fn on_border(p: Vec2<f64>) -> bool {
    let near = |a: f64, b: f64| (a - b).abs() < 1e-9;
    near(p.x, 0.0) || near(p.x, 100.0) || near(p.y, 0.0) || near(p.y, 100.0)
}

#[test]
fn two_by_two_has_nine_points() {
    let mesh = build(2, 2);
    assert_eq!(mesh.point_count(), 9);

    let unique: HashSet<PointId> = mesh
        .cells()
        .iter()
        .flat_map(|cell| cell.corners())
        .collect();
    assert_eq!(unique.len(), 9);
}

#[test]
fn point_and_constraint_counts() {
    for rows in 1..6 {
        for cols in 1..6 {
            let mesh = build(rows, cols);
            assert_eq!(mesh.point_count(), (rows + 1) * (cols + 1), "{}x{}", rows, cols);
            assert_eq!(mesh.constraint_count(), 3 * rows * cols, "{}x{}", rows, cols);
            assert_eq!(mesh.cells().len(), rows * cols);
        }
    }
}

#[test]
fn zero_dimensions_are_rejected() {
    let mut rng = SmallRng::seed_from_u64(1);
    let err = Mesh::<f32>::build(&MeshConfig::new(0, 4), &mut rng).unwrap_err();
    assert_eq!(err, PhysicsError::InvalidDimension { rows: 0, cols: 4 });
    let err = Mesh::<f32>::build(&MeshConfig::new(3, 0), &mut rng).unwrap_err();
    assert_eq!(err, PhysicsError::InvalidDimension { rows: 3, cols: 0 });
}

#[test]
fn top_left_corner_is_pinned() {
    let mesh = build(3, 3);
    let cell = mesh.cell(CellIndex::new(0, 0)).unwrap();
    let corner = mesh.point(cell.top_left);
    assert!(corner.pinned);
    assert_eq!(corner.pos, Vec2::new(0.0, 0.0));
}

#[test]
fn border_pinned_interior_free() {
    let mesh = build(5, 7);
    for point in mesh.graph().points() {
        assert_eq!(
            point.pinned,
            on_border(point.pos),
            "point at {} pinned = {}",
            point.pos,
            point.pinned,
        );
    }
}

#[test]
fn jitter_stays_within_bounds() {
    let (rows, cols) = (6, 4);
    let mesh = build(rows, cols);
    let (row_height, col_width) = (100.0 / rows as f64, 100.0 / cols as f64);

    for r in 0..rows {
        for c in 0..cols {
            let cell = mesh.cell(CellIndex::new(r, c)).unwrap();
            let p = mesh.point(cell.bottom_right).pos;
            let home = Vec2::new((c + 1) as f64 * col_width, (r + 1) as f64 * row_height);
            assert!((p.x - home.x).abs() <= 0.175 * col_width + 1e-9);
            assert!((p.y - home.y).abs() <= 0.175 * row_height + 1e-9);
        }
    }
}

#[test]
fn jitter_moves_interior_points() {
    let mesh = build(4, 4);
    let moved = mesh
        .drivers()
        .iter()
        .map(|&id| mesh.point(id))
        .filter(|p| !p.pinned)
        .filter(|p| (p.pos.x - 25.0 * (p.pos.x / 25.0).round()).abs() > 1e-9)
        .count();
    assert!(moved > 0, "expected jittered interior points");
}

#[test]
fn rest_start_mesh_has_no_velocity() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let mesh: Mesh<f64> =
        Mesh::build(&MeshConfig::new(4, 5).with_rest_start(true), &mut rng).unwrap();
    for point in mesh.graph().points() {
        assert_eq!(point.velocity(), Vec2::zero());
    }
    for constraint in mesh.graph().constraints() {
        let d = mesh.point(constraint.a).dist(mesh.point(constraint.b));
        assert_eq!(d, constraint.rest_length());
    }
}

#[test]
fn default_jitter_leaves_grid_as_prev_pos() {
    let mesh = build(4, 5);
    let mut wobbling = 0;
    for point in mesh.graph().points() {
        if point.pinned {
            assert_eq!(point.velocity(), Vec2::zero());
        } else if point.velocity() != Vec2::zero() {
            wobbling += 1;
        }
    }
    assert!(wobbling > 0, "jittered points should carry an initial velocity");
}

#[test]
fn each_cell_owns_three_constraints() {
    let mesh = build(3, 4);
    for cell in mesh.cells() {
        let owned: Vec<_> = mesh
            .point(cell.bottom_right)
            .constraints()
            .iter()
            .map(|&cid| mesh.graph().constraint(cid))
            .filter(|c| c.a == cell.bottom_right)
            .map(|c| c.b)
            .collect();
        assert_eq!(owned, vec![cell.top_left, cell.bottom_left, cell.top_right]);
    }
}

#[test]
fn center_is_diagonal_midpoint() {
    let mesh = build(3, 3);
    for cell in mesh.cells() {
        let tl = mesh.point(cell.top_left).pos;
        let br = mesh.point(cell.bottom_right).pos;
        assert!((cell.center.x - (tl.x + br.x) / 2.0).abs() < 1e-12);
        assert!((cell.center.y - (tl.y + br.y) / 2.0).abs() < 1e-12);
    }
}

#[test]
fn corners_follow_polygon_winding() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mesh: Mesh<f64> = Mesh::build(&MeshConfig::new(2, 2).with_jitter(0.0), &mut rng).unwrap();
    let corners = mesh.corners(CellIndex::new(0, 1)).unwrap();
    assert_eq!(
        corners,
        [
            Vec2::new(50.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 50.0),
            Vec2::new(50.0, 50.0),
        ]
    );
    assert!(mesh.corners(CellIndex::new(2, 0)).is_none());

    let screen = mesh
        .screen_corners(CellIndex::new(0, 1), &Viewport::new(1024.0, 768.0))
        .unwrap();
    assert_eq!(screen[2], Vec2::new(1024.0, 384.0));
}
