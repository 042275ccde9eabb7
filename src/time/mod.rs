//! Explicit time integration.
//!
//! A [`System`] exposes a right-hand side `dx/dt = R(t, x)` over a state type
//! that supports the vector-space operations in [`Integrable`]. The three
//! integrators advance such a system one step at a time:
//!
//! - [`ForwardEuler`]: first order, one RHS evaluation,
//! - [`ShuOsher`]: strong-stability-preserving two-stage RK (SSP-RK2),
//! - [`Rk4`]: classical fourth-order Runge-Kutta.
//!
//! Each step reports the componentwise RMS of the first-stage residual,
//! which steady-state drivers use as their convergence measure. The
//! [`integrate`] driver runs a fixed number of steps over a time span.

use crate::types::Vector4;

/// State types that explicit integrators can advance.
///
/// Provides the in-place vector-space operations the Runge-Kutta stage
/// arithmetic is built from:
/// - `scale`: `x <- c * x`
/// - `axpy`: `x <- x + c * y`
///
/// plus the componentwise RMS reduction reported by [`TimeIntegrator::step`].
pub trait Integrable: Clone {
    /// Scale in place: `self <- c * self`.
    fn scale(&mut self, c: f64);

    /// Add a scaled vector in place: `self <- self + c * other`.
    fn axpy(&mut self, c: f64, other: &Self);

    /// Componentwise root-mean-square over cells.
    ///
    /// For a field of `n` 4-component entries this is
    /// `sqrt(sum_c q[c][k]^2 / n)` per component `k`; for a single
    /// [`Vector4`] it reduces to the componentwise absolute value.
    fn rms(&self) -> Vector4;
}

impl Integrable for Vector4 {
    fn scale(&mut self, c: f64) {
        *self *= c;
    }

    fn axpy(&mut self, c: f64, other: &Self) {
        *self += c * *other;
    }

    fn rms(&self) -> Vector4 {
        self.abs()
    }
}

impl Integrable for Vec<Vector4> {
    fn scale(&mut self, c: f64) {
        for q in self.iter_mut() {
            *q *= c;
        }
    }

    fn axpy(&mut self, c: f64, other: &Self) {
        debug_assert_eq!(self.len(), other.len(), "field lengths differ");
        for (q, r) in self.iter_mut().zip(other) {
            *q += c * *r;
        }
    }

    fn rms(&self) -> Vector4 {
        let mut sum = Vector4::ZERO;
        for q in self {
            sum += *q * *q;
        }
        let mean = sum / self.len() as f64;
        Vector4::new(mean.x.sqrt(), mean.y.sqrt(), mean.z.sqrt(), mean.w.sqrt())
    }
}

/// A dynamic system with an explicit right-hand side.
pub trait System {
    /// State advanced by the integrator; the residual shares this type.
    type State: Integrable;

    /// Evaluate the time derivative at `(t, x)`.
    fn compute_rhs(&self, t: f64, x: &Self::State) -> Self::State;
}

/// An explicit single-step time integrator.
pub trait TimeIntegrator {
    /// Advance `x` in place from `t` to `t + dt`.
    ///
    /// Returns the componentwise RMS of the residual evaluated at the
    /// beginning of the step.
    fn step<S: System>(&self, sys: &S, dt: f64, t: f64, x: &mut S::State) -> Vector4;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Formal order of accuracy.
    fn order(&self) -> usize;
}

/// First-order forward Euler: `x <- x + dt * R(t, x)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl TimeIntegrator for ForwardEuler {
    fn step<S: System>(&self, sys: &S, dt: f64, t: f64, x: &mut S::State) -> Vector4 {
        let k1 = sys.compute_rhs(t, x);
        x.axpy(dt, &k1);
        k1.rms()
    }

    fn name(&self) -> &'static str {
        "euler"
    }

    fn order(&self) -> usize {
        1
    }
}

/// Shu-Osher two-stage SSP Runge-Kutta (SSP-RK2).
///
/// ```text
/// k1 = R(t, x)
/// k2 = R(t + dt, x + dt k1)
/// x <- x + dt (k1 + k2) / 2
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ShuOsher;

impl TimeIntegrator for ShuOsher {
    fn step<S: System>(&self, sys: &S, dt: f64, t: f64, x: &mut S::State) -> Vector4 {
        let k1 = sys.compute_rhs(t, x);

        let mut x1 = x.clone();
        x1.axpy(dt, &k1);
        let k2 = sys.compute_rhs(t + dt, &x1);

        x.axpy(0.5 * dt, &k1);
        x.axpy(0.5 * dt, &k2);
        k1.rms()
    }

    fn name(&self) -> &'static str {
        "shu-osher"
    }

    fn order(&self) -> usize {
        2
    }
}

/// Classical fourth-order Runge-Kutta.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rk4;

impl TimeIntegrator for Rk4 {
    fn step<S: System>(&self, sys: &S, dt: f64, t: f64, x: &mut S::State) -> Vector4 {
        let k1 = sys.compute_rhs(t, x);

        let mut x1 = x.clone();
        x1.axpy(0.5 * dt, &k1);
        let k2 = sys.compute_rhs(t + 0.5 * dt, &x1);

        let mut x2 = x.clone();
        x2.axpy(0.5 * dt, &k2);
        let k3 = sys.compute_rhs(t + 0.5 * dt, &x2);

        let mut x3 = x.clone();
        x3.axpy(dt, &k3);
        let k4 = sys.compute_rhs(t + dt, &x3);

        x.axpy(dt / 6.0, &k1);
        x.axpy(dt / 3.0, &k2);
        x.axpy(dt / 3.0, &k3);
        x.axpy(dt / 6.0, &k4);
        k1.rms()
    }

    fn name(&self) -> &'static str {
        "rk4"
    }

    fn order(&self) -> usize {
        4
    }
}

/// Advance `x0` from `tspan.0` to `tspan.1` in `n_steps` equal steps.
///
/// Returns the final time and state.
pub fn integrate<I, S>(
    integrator: &I,
    sys: &S,
    x0: S::State,
    tspan: (f64, f64),
    n_steps: usize,
) -> (f64, S::State)
where
    I: TimeIntegrator,
    S: System,
{
    let mut x = x0;
    let dt = (tspan.1 - tspan.0) / n_steps as f64;
    let mut t = tspan.0;
    for _ in 0..n_steps {
        integrator.step(sys, dt, t, &mut x);
        t += dt;
    }
    (t, x)
}
