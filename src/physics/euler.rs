//! Compressible Euler equations in two dimensions.
//!
//! Conservative state layout `(ρ, ρu, ρv, ρE)`, stored as a [`Vector4`].
//! The [`Euler`] object carries the gas model and the freestream reference
//! state, and provides the flux functions the finite-volume assembler
//! integrates:
//!
//! - [`compute_flux`](Euler::compute_flux): physical inviscid flux through a
//!   signed area vector,
//! - [`compute_wall_flux`](Euler::compute_wall_flux): slip wall, pressure
//!   only,
//! - [`compute_freestream_flux`](Euler::compute_freestream_flux): flux of the
//!   stored freestream state,
//! - [`compute_jump_flux`](Euler::compute_jump_flux): Rusanov (local
//!   Lax-Friedrichs) flux with scalar dissipation.
//!
//! All flux functions take the face's signed area vector rather than a unit
//! normal, so results are already scaled by face length.

use crate::physics::PerfectGas;
use crate::types::{Vector2, Vector4};

/// Indices of the conserved fields within a state or flux vector.
pub mod field {
    /// Mass density ρ.
    pub const DENSITY: usize = 0;
    /// x-momentum density ρu.
    pub const MOMENTUM_X: usize = 1;
    /// y-momentum density ρv.
    pub const MOMENTUM_Y: usize = 2;
    /// Total energy density ρE.
    pub const TOTAL_ENERGY: usize = 3;
}

/// Euler physics: gas model plus freestream reference state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Euler {
    gas: PerfectGas,
    freestream: Vector4,
}

impl Euler {
    /// Create an Euler physics object with a zero freestream.
    ///
    /// Set the freestream before evaluating boundary fluxes that use it.
    pub fn new(gas: PerfectGas) -> Self {
        Self {
            gas,
            freestream: Vector4::ZERO,
        }
    }

    /// The gas model.
    pub fn gas(&self) -> &PerfectGas {
        &self.gas
    }

    /// The stored freestream conservative state.
    pub fn freestream(&self) -> Vector4 {
        self.freestream
    }

    /// Build a conservative state from pressure, temperature and velocity.
    pub fn make_state(&self, p: f64, t: f64, u: f64, v: f64) -> Vector4 {
        let rho = self.gas.density(p, t);
        let energy = self.gas.energy(t) + 0.5 * (u * u + v * v);
        Vector4::new(rho, rho * u, rho * v, rho * energy)
    }

    /// Set the freestream from pressure, temperature and velocity.
    pub fn set_freestream(&mut self, p: f64, t: f64, u: f64, v: f64) {
        self.freestream = self.make_state(p, t, u, v);
    }

    /// Set the freestream directly from a conservative state.
    pub fn set_freestream_state(&mut self, q: Vector4) {
        self.freestream = q;
    }

    /// Physical inviscid flux `F(q) · n`.
    pub fn compute_flux(&self, q: Vector4, n: Vector2) -> Vector4 {
        let rho = q[field::DENSITY];
        let rhou = q[field::MOMENTUM_X];
        let rhov = q[field::MOMENTUM_Y];
        let rhoe = q[field::TOTAL_ENERGY];

        let u = rhou / rho;
        let v = rhov / rho;
        let e = rhoe / rho - 0.5 * (u * u + v * v);
        let p = self.gas.pressure(e, rho);

        let un = u * n.x + v * n.y;
        Vector4::new(
            un * rho,
            un * rhou + p * n.x,
            un * rhov + p * n.y,
            un * (rhoe + p),
        )
    }

    /// Slip-wall flux: no mass or energy transport, pressure-only momentum.
    pub fn compute_wall_flux(&self, q: Vector4, n: Vector2) -> Vector4 {
        let rho = q[field::DENSITY];
        let u = q[field::MOMENTUM_X] / rho;
        let v = q[field::MOMENTUM_Y] / rho;
        let e = q[field::TOTAL_ENERGY] / rho - 0.5 * (u * u + v * v);
        let p = self.gas.pressure(e, rho);
        Vector4::new(0.0, p * n.x, p * n.y, 0.0)
    }

    /// Flux of the stored freestream state; the interior state is ignored.
    pub fn compute_freestream_flux(&self, _q: Vector4, n: Vector2) -> Vector4 {
        self.compute_flux(self.freestream, n)
    }

    /// Rusanov (local Lax-Friedrichs) jump flux across an interface.
    ///
    /// `F* = (F(ql)·n + F(qr)·n - λ (qr - ql)) / 2` with `λ` the larger
    /// spectral radius of the two states. Consistent: `F*(q, q, n) = F(q)·n`.
    pub fn compute_jump_flux(&self, ql: Vector4, qr: Vector4, n: Vector2) -> Vector4 {
        let lambda = self.spectral_radius(ql, n).max(self.spectral_radius(qr, n));
        let fl = self.compute_flux(ql, n);
        let fr = self.compute_flux(qr, n);
        0.5 * (fl + fr - lambda * (qr - ql))
    }

    /// Estimate of the flux-Jacobian spectral radius, `c + |u·nx + v·ny|`.
    fn spectral_radius(&self, q: Vector4, n: Vector2) -> f64 {
        let rho = q[field::DENSITY];
        let u = q[field::MOMENTUM_X] / rho;
        let v = q[field::MOMENTUM_Y] / rho;
        let e = q[field::TOTAL_ENERGY] / rho - 0.5 * (u * u + v * v);
        let c = self.gas.sound_speed(e);
        c + (u * n.x + v * n.y).abs()
    }
}
