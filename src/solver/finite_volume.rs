//! Cell-centered finite-volume residual assembler.
//!
//! Wraps a borrowed [`StructuredGrid`] and an [`Euler`] physics object and
//! produces `dU/dt` for a cell-centered state field by summing numerical
//! fluxes over every face:
//!
//! | face range        | flux                    | applied to |
//! |-------------------|-------------------------|------------|
//! | interior i/j      | Rusanov jump flux       | both cells |
//! | i = min, i = max  | extrapolation (interior state) | boundary cell |
//! | j = min           | slip wall               | boundary cell |
//! | j = max           | freestream              | boundary cell |
//!
//! A face's area vector points from its left (lower-index) cell to its right
//! (higher-index) cell, so the left cell loses the flux and the right cell
//! gains it. The accumulated sums are scaled by each cell's inverse volume,
//! cached at construction.

use thiserror::Error;

use crate::grid::StructuredGrid;
use crate::physics::Euler;
use crate::time::System;
use crate::types::Vector4;

/// Error raised when constructing a [`FiniteVolume`] assembler.
#[derive(Debug, Error)]
pub enum SolverError {
    /// A cell with zero volume cannot be advanced in time.
    #[error("cell {id} has zero volume")]
    DegenerateCell { id: usize },
}

/// Finite-volume spatial discretization of the Euler equations on a
/// structured grid.
///
/// Borrows the grid for its lifetime; the state and residual fields it
/// produces are owned by the caller.
pub struct FiniteVolume<'g> {
    grid: &'g StructuredGrid,
    physics: Euler,
    /// Reciprocal cell volumes, cached once.
    inverse_volumes: Vec<f64>,
}

impl<'g> FiniteVolume<'g> {
    /// Build an assembler around `grid` with the given physics.
    ///
    /// Fails with [`SolverError::DegenerateCell`] if any cell has zero
    /// volume.
    pub fn new(grid: &'g StructuredGrid, physics: Euler) -> Result<Self, SolverError> {
        let mut inverse_volumes = Vec::with_capacity(grid.num_cells());
        for cell in grid.cells() {
            let volume = cell.volume();
            if volume == 0.0 {
                return Err(SolverError::DegenerateCell { id: cell.id() });
            }
            inverse_volumes.push(1.0 / volume);
        }
        Ok(Self {
            grid,
            physics,
            inverse_volumes,
        })
    }

    /// The grid this assembler discretizes.
    pub fn grid(&self) -> &'g StructuredGrid {
        self.grid
    }

    /// The physics object (gas model and freestream).
    pub fn physics(&self) -> &Euler {
        &self.physics
    }

    /// Mutable access to the physics, e.g. to change the freestream between
    /// runs.
    pub fn physics_mut(&mut self) -> &mut Euler {
        &mut self.physics
    }

    /// Allocate a state field with every cell set to `init`.
    pub fn make_state_vector(&self, init: Vector4) -> Vec<Vector4> {
        vec![init; self.grid.num_cells()]
    }

    /// Allocate a zero-initialized residual field.
    pub fn make_residual_vector(&self) -> Vec<Vector4> {
        vec![Vector4::ZERO; self.grid.num_cells()]
    }
}

impl System for FiniteVolume<'_> {
    type State = Vec<Vector4>;

    fn compute_rhs(&self, _t: f64, u: &Vec<Vector4>) -> Vec<Vector4> {
        debug_assert_eq!(u.len(), self.grid.num_cells(), "state field length");
        let mut residual = self.make_residual_vector();

        // Interior fluxes: one jump flux per face, applied with opposite
        // signs to the two neighbors.
        for f in self.grid.interior_ifaces() {
            let left = f.cell(0).id();
            let right = f.cell(1).id();
            let flux = self.physics.compute_jump_flux(u[left], u[right], f.area());
            residual[left] -= flux;
            residual[right] += flux;
        }
        for f in self.grid.interior_jfaces() {
            let left = f.cell(0).id();
            let right = f.cell(1).id();
            let flux = self.physics.compute_jump_flux(u[left], u[right], f.area());
            residual[left] -= flux;
            residual[right] += flux;
        }

        // Boundary fluxes. The i boundaries extrapolate the interior state;
        // j = min is the body wall, j = max the farfield.
        for f in self.grid.min_ifaces() {
            let id = f.cell(1).id();
            residual[id] += self.physics.compute_flux(u[id], f.area());
        }
        for f in self.grid.max_ifaces() {
            let id = f.cell(0).id();
            residual[id] -= self.physics.compute_flux(u[id], f.area());
        }
        for f in self.grid.min_jfaces() {
            let id = f.cell(1).id();
            residual[id] += self.physics.compute_wall_flux(u[id], f.area());
        }
        for f in self.grid.max_jfaces() {
            let id = f.cell(0).id();
            residual[id] -= self.physics.compute_freestream_flux(u[id], f.area());
        }

        for (r, ivol) in residual.iter_mut().zip(&self.inverse_volumes) {
            *r *= *ivol;
        }
        residual
    }
}
