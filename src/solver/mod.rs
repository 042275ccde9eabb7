//! Finite-volume spatial discretization.

mod finite_volume;

pub use finite_volume::{FiniteVolume, SolverError};
