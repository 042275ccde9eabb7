//! Structured grid: topology, derived geometry, builders and Plot3D I/O.

pub mod builders;
pub mod plot3d;
mod structured;

pub use builders::{make_cartesian, make_elliptic, make_hyperbolic_forebody};
pub use plot3d::{read_plot3d, read_plot3d_from, write_plot3d, write_plot3d_to, Plot3dError};
pub use structured::{
    Cell, GridElement, GridError, IFace, JFace, Range2d, Range2dIter, StructuredGrid,
};
