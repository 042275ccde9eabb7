//! Plot3D ASCII grid file I/O.
//!
//! Reads and writes single-block 2D Plot3D files, the plain-text structured
//! grid layout used across aerospace CFD tooling:
//!
//! ```text
//!               1                          <- block count
//!               5              3           <- Nvi, Nvj
//!  x(0,0) x(1,0) x(2,0) x(3,0)             <- X array, column-major
//!  ...
//!  y(0,0) y(1,0) y(2,0) y(3,0)             <- Y array, column-major
//!  ...
//! ```
//!
//! Values are packed column-major (i fastest within j), four per line, each
//! in scientific notation with a 15-digit mantissa in a 24-character field.
//! The in-memory grid stores vertices j-fastest, so reading and writing
//! transpose on the fly.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::grid::{GridError, StructuredGrid};
use crate::types::Vector2;

/// Error type for Plot3D I/O operations.
#[derive(Debug, Error)]
pub enum Plot3dError {
    /// File could not be opened, read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed file contents.
    #[error("parse error: {0}")]
    Parse(String),

    /// The parsed header describes an invalid grid.
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
}

/// Write `grid` to `path` as a single-block Plot3D ASCII file.
pub fn write_plot3d(grid: &StructuredGrid, path: &Path) -> Result<(), Plot3dError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_plot3d_to(grid, &mut out)
}

/// Write `grid` to an arbitrary stream as a single-block Plot3D ASCII file.
pub fn write_plot3d_to<W: Write>(grid: &StructuredGrid, out: &mut W) -> Result<(), Plot3dError> {
    let [ni, nj] = grid.vertex_size();
    writeln!(out, "{:>15}", 1)?;
    writeln!(out, "{:>15}{:>15}", ni, nj)?;
    write_coordinate_array(out, ni, nj, |i, j| grid.vertex(i, j).x)?;
    write_coordinate_array(out, ni, nj, |i, j| grid.vertex(i, j).y)?;
    Ok(())
}

/// Read a single-block Plot3D ASCII file from `path`.
pub fn read_plot3d(path: &Path) -> Result<StructuredGrid, Plot3dError> {
    let file = File::open(path)?;
    read_plot3d_from(BufReader::new(file))
}

/// Read a single-block Plot3D ASCII grid from an arbitrary stream.
pub fn read_plot3d_from<R: BufRead>(mut reader: R) -> Result<StructuredGrid, Plot3dError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let nblock: usize = next_token(&mut tokens, "block count")?;
    if nblock != 1 {
        return Err(Plot3dError::Parse(format!(
            "expected a single block, file declares {}",
            nblock
        )));
    }
    let ni: usize = next_token(&mut tokens, "i-dimension")?;
    let nj: usize = next_token(&mut tokens, "j-dimension")?;

    // Stream the column-major arrays into the j-fastest vertex layout.
    let mut vertices = vec![Vector2::ZERO; ni * nj];
    for j in 0..nj {
        for i in 0..ni {
            vertices[i * nj + j].x = next_token(&mut tokens, "x coordinate")?;
        }
    }
    for j in 0..nj {
        for i in 0..ni {
            vertices[i * nj + j].y = next_token(&mut tokens, "y coordinate")?;
        }
    }

    Ok(StructuredGrid::from_vertices([ni, nj], vertices)?)
}

fn write_coordinate_array<W, F>(out: &mut W, ni: usize, nj: usize, value: F) -> Result<(), Plot3dError>
where
    W: Write,
    F: Fn(usize, usize) -> f64,
{
    const VALUES_PER_LINE: usize = 4;
    let mut counter = VALUES_PER_LINE;
    for j in 0..nj {
        for i in 0..ni {
            write!(out, "{:>24.15e}", value(i, j))?;
            counter -= 1;
            if counter == 0 {
                counter = VALUES_PER_LINE;
                writeln!(out)?;
            }
        }
    }
    if counter != VALUES_PER_LINE {
        writeln!(out)?;
    }
    Ok(())
}

fn next_token<'a, T, I>(tokens: &mut I, what: &str) -> Result<T, Plot3dError>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| Plot3dError::Parse(format!("unexpected end of file reading {}", what)))?;
    token
        .parse()
        .map_err(|_| Plot3dError::Parse(format!("invalid {}: '{}'", what, token)))
}
