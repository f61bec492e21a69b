//! Hexline Grid Topology
//!
//! Axial hexagonal coordinates, the hex distance metric and straight-line
//! path interpolation between two cells.
//!
//! # Coordinate Model
//!
//! A cell is addressed by two axial `i32` values (x, y). The third cube axis is
//! derived as z = -(x + y), so x + y + z = 0 holds for every coordinate by
//! construction. Distance is half the L1 norm of the cube difference.
//!
//! # Lines
//!
//! [`interpolate`] samples `distance + 1` evenly spaced points on the segment
//! and rounds the two axial components independently, ties to even.
//! [`cube_line`] samples the same points but snaps them with three-axis cube
//! rounding, which always lands on the nearest cell.
//!
//! ```
//! use hexline_topology::{interpolate, Coordinate};
//!
//! let path = interpolate(Coordinate::new(2, 5), Coordinate::new(5, 3));
//! assert_eq!(path.len(), 4);
//! assert_eq!(path[2], Coordinate::new(4, 4));
//! ```

mod error;
mod hex;
mod line;
mod neighbors;

pub use error::{Error, Result};
pub use hex::Coordinate;
pub use line::{cube_line, cube_round, interpolate};
pub use neighbors::{are_neighbors, range, ring, slots_within, Diagonal, Direction};

/// Edge-adjacent cells around any coordinate.
pub const NEIGHBOR_COUNT: usize = 6;

/// Vertex-adjacent (distance 2) cells around any coordinate.
pub const DIAGONAL_COUNT: usize = 6;
