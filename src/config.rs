//! Run configuration.
//!
//! A run is described by a TOML document with three sections:
//!
//! ```toml
//! [freestream]
//! pressure = 2000.0       # Pa
//! temperature = 220.0     # K
//! u_velocity = 1360.0     # m/s
//! v_velocity = 0.0        # m/s
//!
//! [grid]
//! body_length = 2.0       # m
//! base_radius = 1.0       # m
//! nose_radius = 0.2       # m
//! boundary_angle = 45.0   # degrees
//! size = [41, 41]         # vertices along/normal to the body
//!
//! [solver]
//! timestep = 1e-6         # s
//! iterations = 1000
//! start_time = 0.0        # s
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Error raised while loading or validating a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or is missing required keys.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file parsed but describes a non-physical or unusable run.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Complete run configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub freestream: FreestreamConfig,
    pub grid: GridConfig,
    pub solver: SolverConfig,
}

/// Freestream conditions applied at the farfield boundary.
#[derive(Clone, Debug, Deserialize)]
pub struct FreestreamConfig {
    /// Static pressure (Pa).
    pub pressure: f64,
    /// Static temperature (K).
    pub temperature: f64,
    /// x-velocity (m/s).
    pub u_velocity: f64,
    /// y-velocity (m/s).
    pub v_velocity: f64,
}

/// Forebody grid parameters.
#[derive(Clone, Debug, Deserialize)]
pub struct GridConfig {
    /// Body length (m).
    pub body_length: f64,
    /// Body radius at the base plane (m).
    pub base_radius: f64,
    /// Nose radius of curvature (m).
    pub nose_radius: f64,
    /// Farfield boundary angle at the outflow plane (degrees).
    pub boundary_angle: f64,
    /// Number of vertices along and normal to the body.
    pub size: [u64; 2],
}

impl GridConfig {
    /// Boundary angle converted to radians.
    pub fn boundary_angle_radians(&self) -> f64 {
        self.boundary_angle.to_radians()
    }
}

/// Time-integration parameters.
#[derive(Clone, Debug, Deserialize)]
pub struct SolverConfig {
    /// Time step (s).
    pub timestep: f64,
    /// Number of steps to run.
    pub iterations: u64,
    /// Initial time (s).
    pub start_time: f64,
}

impl Config {
    /// Load and validate a configuration file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Config = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.size[0] < 2 || self.grid.size[1] < 2 {
            return Err(ConfigError::Invalid(format!(
                "grid.size must be at least 2 along each axis, got [{}, {}]",
                self.grid.size[0], self.grid.size[1]
            )));
        }
        if !(self.grid.boundary_angle > 0.0 && self.grid.boundary_angle < 90.0) {
            return Err(ConfigError::Invalid(format!(
                "grid.boundary_angle must lie in (0, 90) degrees, got {}",
                self.grid.boundary_angle
            )));
        }
        if self.freestream.pressure <= 0.0 || self.freestream.temperature <= 0.0 {
            return Err(ConfigError::Invalid(
                "freestream pressure and temperature must be positive".to_string(),
            ));
        }
        if self.solver.timestep <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "solver.timestep must be positive, got {}",
                self.solver.timestep
            )));
        }
        Ok(())
    }
}
