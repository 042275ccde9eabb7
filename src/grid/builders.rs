//! Parametric structured-grid builders.
//!
//! Three grid families:
//! - [`make_cartesian`]: uniform rectangle, mostly for tests.
//! - [`make_elliptic`]: rectangle in elliptic coordinates `(μ, ν)`.
//! - [`make_hyperbolic_forebody`]: elliptic grid fitted to a hyperboloid
//!   forebody, the configuration the CLI driver runs.

use crate::grid::{GridError, StructuredGrid};
use crate::types::{Size2, Vector2};

/// Uniform Cartesian grid over `[x_min, x_max] x [y_min, y_max]`.
pub fn make_cartesian(
    xrange: (f64, f64),
    yrange: (f64, f64),
    size: Size2,
) -> Result<StructuredGrid, GridError> {
    if size[0] < 2 || size[1] < 2 {
        return Err(GridError::InvalidSize(size[0], size[1]));
    }
    let dx = (xrange.1 - xrange.0) / (size[0] - 1) as f64;
    let dy = (yrange.1 - yrange.0) / (size[1] - 1) as f64;
    let mut vertices = Vec::with_capacity(size[0] * size[1]);
    for i in 0..size[0] {
        for j in 0..size[1] {
            let x = xrange.0 + i as f64 * dx;
            let y = yrange.0 + j as f64 * dy;
            vertices.push(Vector2::new(x, y));
        }
    }
    StructuredGrid::from_vertices(size, vertices)
}

/// Grid over a rectangle in elliptic coordinates.
///
/// With linear eccentricity `a` (distance from the origin to a focus), the
/// mapping is `x = a cosh μ cos ν`, `y = a sinh μ sin ν`. The i-axis runs
/// along `μ`, the j-axis along `ν`. Constant-μ lines are ellipses and
/// constant-ν lines are hyperbolas, all confocal.
pub fn make_elliptic(
    eccentricity: f64,
    mu_range: (f64, f64),
    nu_range: (f64, f64),
    size: Size2,
) -> Result<StructuredGrid, GridError> {
    if eccentricity < 0.0 {
        return Err(GridError::InvalidEccentricity(eccentricity));
    }
    if size[0] < 2 || size[1] < 2 {
        return Err(GridError::InvalidSize(size[0], size[1]));
    }
    let a = eccentricity;
    let dmu = (mu_range.1 - mu_range.0) / (size[0] - 1) as f64;
    let dnu = (nu_range.1 - nu_range.0) / (size[1] - 1) as f64;
    let mut vertices = Vec::with_capacity(size[0] * size[1]);
    for i in 0..size[0] {
        for j in 0..size[1] {
            let mu = mu_range.0 + i as f64 * dmu;
            let nu = nu_range.0 + j as f64 * dnu;
            let x = a * mu.cosh() * nu.cos();
            let y = a * mu.sinh() * nu.sin();
            vertices.push(Vector2::new(x, y));
        }
    }
    StructuredGrid::from_vertices(size, vertices)
}

/// Elliptic grid fitted to a hyperboloid forebody.
///
/// The body contour (the `j = 0` boundary) is the hyperbola with the given
/// length, base radius and nose radius of curvature; the `j = max` boundary
/// is the confocal hyperbola whose asymptote makes `boundary_angle` (radians)
/// with the axis at the outflow plane. The i-axis runs along the body from
/// the nose (`i = 0`) to the base.
///
/// Requires `base_radius^2 / (length * nose_radius) >= 2`; blunter noses have
/// no hyperboloid with these proportions. After construction the grid is
/// translated so the nose tip `vertex(0, 0)` sits at the origin.
pub fn make_hyperbolic_forebody(
    length: f64,
    base_radius: f64,
    nose_radius: f64,
    boundary_angle: f64,
    size: Size2,
) -> Result<StructuredGrid, GridError> {
    let ratio = base_radius * base_radius / (length * nose_radius);
    if ratio < 2.0 {
        return Err(GridError::NoseRadiusTooLarge(ratio));
    }

    // Body hyperbola semi-axes (a, b) and the confocal-family eccentricity.
    let mu_max = (ratio - 1.0).acosh();
    let a = length / (mu_max.cosh() - 1.0);
    let b = base_radius / mu_max.sinh();
    let c = (a * a + b * b).sqrt();
    let nu_min = (b / a).atan();
    let nu_max = (boundary_angle.tan() * mu_max.tanh()).atan();

    let mut grid = make_elliptic(c, (0.0, mu_max), (nu_min, nu_max), size)?;
    let nose = grid.vertex(0, 0);
    grid.translate(-nose);
    Ok(grid)
}
