//! Structured-grid scenario tests.
//!
//! Exercises the grid builders and the derived-geometry invariants on the
//! grids the solver actually runs: a Cartesian test grid, an
//! elliptic-coordinate patch with a known analytic area, and the hyperboloid
//! forebody configuration.

use std::f64::consts::PI;

use fv2d::{
    cross2d, make_cartesian, make_elliptic, make_hyperbolic_forebody, read_plot3d, write_plot3d,
    Vector2,
};

#[test]
fn test_cartesian_scenario() {
    // 5x3-vertex grid on [-2, 2] x [-1, 1]: 4x2 unit-square cells.
    let grid = make_cartesian((-2.0, 2.0), (-1.0, 1.0), [5, 3]).unwrap();

    assert_eq!(grid.vertex(2, 1), Vector2::new(0.0, 0.0));
    assert_eq!(grid.vertex(0, 2), Vector2::new(-2.0, 1.0));
    assert_eq!(grid.vertex(4, 0), Vector2::new(2.0, -1.0));

    assert!((grid.cell(0, 0).volume() - 1.0).abs() < 1e-14);
    assert_eq!(grid.iface(0, 0).area(), Vector2::new(1.0, 0.0));
    assert_eq!(grid.jface(0, 0).area(), Vector2::new(0.0, 1.0));

    assert_eq!(grid.interior_ifaces().into_iter().count(), 6);
}

#[test]
fn test_range_closure_counts() {
    for (ni, nj) in [(2, 2), (3, 4), (5, 3), (11, 7)] {
        let grid = make_cartesian((0.0, 1.0), (0.0, 1.0), [ni, nj]).unwrap();
        let [ci, cj] = grid.cell_size();
        let [fi, fj] = grid.iface_size();
        let [gi, gj] = grid.jface_size();

        assert_eq!(grid.cells().into_iter().count(), ci * cj);
        assert_eq!(grid.min_ifaces().into_iter().count(), fj);
        assert_eq!(grid.max_ifaces().into_iter().count(), fj);
        assert_eq!(grid.interior_ifaces().into_iter().count(), (fi - 2) * fj);
        assert_eq!(grid.min_jfaces().into_iter().count(), gi);
        assert_eq!(grid.max_jfaces().into_iter().count(), gi);
        assert_eq!(grid.interior_jfaces().into_iter().count(), gi * (gj - 2));
    }
}

#[test]
fn test_interior_neighbor_relations() {
    let grid = make_cartesian((0.0, 1.0), (0.0, 1.0), [6, 5]).unwrap();
    let [_, nj] = grid.iface_size();
    for f in grid.interior_ifaces() {
        let i = f.id() / nj;
        let j = f.id() % nj;
        assert_eq!(f.cell(0), grid.cell(i - 1, j));
        assert_eq!(f.cell(1), grid.cell(i, j));
    }
    let [_, mj] = grid.jface_size();
    for f in grid.interior_jfaces() {
        let i = f.id() / mj;
        let j = f.id() % mj;
        assert_eq!(f.cell(0), grid.cell(i, j - 1));
        assert_eq!(f.cell(1), grid.cell(i, j));
    }
}

#[test]
fn test_elliptic_patch_area() {
    // Analytic area of the patch mu in (0, 1), nu in (pi/6, pi/3) with
    // eccentricity a = 2 is pi a^2 sinh(2) / 24.
    let a = 2.0;
    let exact = PI * a * a * (2.0_f64).sinh() / 24.0;
    let grid = make_elliptic(a, (0.0, 1.0), (PI / 6.0, PI / 3.0), [21, 17]).unwrap();
    let area: f64 = grid.cells().into_iter().map(|c| c.volume()).sum();
    assert!(
        (area - exact).abs() < 0.001,
        "grid area {} deviates from analytic {}",
        area,
        exact
    );
}

#[test]
fn test_forebody_scenario() {
    let n = 10;
    let grid = make_hyperbolic_forebody(2.0, 1.0, 0.2, PI / 4.0, [n + 1, n + 1]).unwrap();
    let tol = 1e-12;

    assert!(grid.vertex(0, 0).length() < tol, "nose tip not at origin");
    assert!((grid.vertex(0, n).x - -7.136646549690036e-01).abs() < tol);
    assert!(grid.vertex(0, n).y.abs() < tol);
    assert!((grid.vertex(n, n).x - 9.295030175464944e-01).abs() < tol);
    assert!((grid.vertex(n, n).y - 2.738612787525831e+00).abs() < tol);
}

#[test]
fn test_curvilinear_geometry_invariants() {
    // Positive volumes and consistent face orientation on a curved grid.
    let grid = make_hyperbolic_forebody(2.0, 1.0, 0.2, PI / 4.0, [17, 13]).unwrap();

    for c in grid.cells() {
        assert!(c.volume() > 0.0, "cell {} has non-positive volume", c.id());
    }
    for f in grid.ifaces() {
        let t = f.vertex(1) - f.vertex(0);
        assert!(cross2d(t, f.area()) > 0.0, "iface {} mis-oriented", f.id());
    }
    for f in grid.jfaces() {
        let t = f.vertex(1) - f.vertex(0);
        assert!(cross2d(t, f.area()) > 0.0, "jface {} mis-oriented", f.id());
    }
}

#[test]
fn test_translation_invariance() {
    let mut grid = make_hyperbolic_forebody(2.0, 1.0, 0.2, PI / 4.0, [11, 11]).unwrap();
    let offset = Vector2::new(-3.5, 12.25);

    let vertices: Vec<Vector2> = grid.vertices().to_vec();
    let volumes: Vec<f64> = grid.cells().into_iter().map(|c| c.volume()).collect();
    let iface_areas: Vec<Vector2> = grid.ifaces().into_iter().map(|f| f.area()).collect();
    let jface_areas: Vec<Vector2> = grid.jfaces().into_iter().map(|f| f.area()).collect();

    grid.translate(offset);

    for (before, after) in vertices.iter().zip(grid.vertices()) {
        assert!((*before + offset - *after).length() < 1e-14);
    }
    for (c, &vol) in grid.cells().into_iter().zip(&volumes) {
        assert_eq!(c.volume(), vol);
    }
    for (f, &area) in grid.ifaces().into_iter().zip(&iface_areas) {
        assert_eq!(f.area(), area);
    }
    for (f, &area) in grid.jfaces().into_iter().zip(&jface_areas) {
        assert_eq!(f.area(), area);
    }
}

#[test]
fn test_plot3d_round_trip() {
    let grid = make_hyperbolic_forebody(2.0, 1.0, 0.2, PI / 4.0, [11, 11]).unwrap();

    let file = tempfile::NamedTempFile::new().unwrap();
    write_plot3d(&grid, file.path()).unwrap();
    let reloaded = read_plot3d(file.path()).unwrap();

    assert_eq!(reloaded.vertex_size(), grid.vertex_size());
    for (a, b) in grid.vertices().iter().zip(reloaded.vertices()) {
        assert!(
            (*a - *b).length() < 1e-12,
            "vertex moved across round trip: {:?} -> {:?}",
            a,
            b
        );
    }
}
