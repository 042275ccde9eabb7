//! Vocabulary types shared across the solver.
//!
//! The solver works almost exclusively with two fixed-size numeric vectors:
//! - [`Vector2`] for points, offsets and signed face-area vectors,
//! - [`Vector4`] for conservative states and fluxes `(ρ, ρu, ρv, ρE)`.
//!
//! Both are aliases over glam's double-precision vectors, which provide the
//! componentwise arithmetic, dot products and norms the solver needs.

/// 2D point / direction / signed area vector.
pub type Vector2 = glam::DVec2;

/// 4-component state or flux vector.
pub type Vector4 = glam::DVec4;

/// Logical grid extent along the two coordinate axes, `[n_i, n_j]`.
pub type Size2 = [usize; 2];

/// 2D cross product (z-component of the 3D cross product).
///
/// `cross2d((a, b), (c, d)) = a·d - b·c`. Positive when `b` lies
/// counter-clockwise of `a`.
#[inline]
pub fn cross2d(a: Vector2, b: Vector2) -> f64 {
    a.perp_dot(b)
}
