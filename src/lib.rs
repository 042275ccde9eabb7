//! # fv2d
//!
//! A 2D cell-centered finite-volume solver for the compressible Euler
//! equations on curvilinear structured grids.
//!
//! This crate provides the building blocks of the solver:
//! - Structured grid topology and geometry (cells, i-faces, j-faces)
//! - Parametric grid builders (Cartesian, elliptic, hyperboloid forebody)
//! - Plot3D ASCII grid serialization
//! - Perfect-gas model and Euler flux functions (Rusanov interface flux,
//!   slip-wall and freestream boundary fluxes)
//! - Finite-volume residual assembly with per-boundary flux policies
//! - Explicit time integration (forward Euler, Shu-Osher SSP-RK2, RK4)
//! - TOML run configuration for the CLI driver
//!
//! A typical run builds a grid, wraps it in a [`FiniteVolume`] assembler,
//! initializes the cell states to the freestream and repeatedly applies a
//! [`TimeIntegrator`]:
//!
//! ```
//! use fv2d::{make_cartesian, Euler, FiniteVolume, ForwardEuler, PerfectGas, TimeIntegrator};
//!
//! let grid = make_cartesian((0.0, 1.0), (0.0, 1.0), [9, 9]).unwrap();
//! let mut physics = Euler::new(PerfectGas::default());
//! physics.set_freestream(101_325.0, 288.15, 500.0, 0.0);
//! let freestream = physics.freestream();
//!
//! let system = FiniteVolume::new(&grid, physics).unwrap();
//! let mut state = system.make_state_vector(freestream);
//!
//! let mut t = 0.0;
//! let dt = 1e-6;
//! for _ in 0..10 {
//!     let rms = ForwardEuler.step(&system, dt, t, &mut state);
//!     assert!(!rms.is_nan());
//!     t += dt;
//! }
//! ```

pub mod config;
pub mod grid;
pub mod physics;
pub mod solver;
pub mod time;
pub mod types;

// Re-export the main types for convenience.
pub use config::{Config, ConfigError};
pub use grid::{
    make_cartesian, make_elliptic, make_hyperbolic_forebody, read_plot3d, write_plot3d, Cell,
    GridError, IFace, JFace, Plot3dError, StructuredGrid,
};
pub use physics::{field, Euler, PerfectGas};
pub use solver::{FiniteVolume, SolverError};
pub use time::{integrate, ForwardEuler, Integrable, Rk4, ShuOsher, System, TimeIntegrator};
pub use types::{cross2d, Size2, Vector2, Vector4};
