//! Straight lines between two cells.
//!
//! Both line functions take `distance + 1` evenly spaced samples along the
//! segment from `start` to `end` and snap each one back onto the grid. They
//! differ only in the snapping:
//!
//! - [`interpolate`] rounds x and y independently (ties to even). Cheap, but
//!   a sample near a cell corner can snap to a cell that is not the nearest
//!   one, so consecutive steps may repeat a cell or jump two cells.
//! - [`cube_line`] uses [`cube_round`], which always picks the nearest cell.
//!
//! A zero-length line is the start cell alone; the sampling fraction i/steps
//! is never evaluated with steps = 0. The first and last cells are always
//! the exact endpoints, never a rounded sample.

use tracing::{debug, trace};

use crate::Coordinate;

/// Axial straight line from `start` to `end`, one step per unit of hex
/// distance.
///
/// Returns `start.hex_distance(&end) + 1` cells. The first is `start`, the
/// last is `end`. Intermediate samples are rounded per axis with
/// round-half-to-even, so a sample at (0.5, 0.5) becomes (0, 0).
///
/// ```
/// use hexline_topology::{interpolate, Coordinate};
///
/// let a = Coordinate::new(0, 0);
/// let b = Coordinate::new(1, 1);
/// assert_eq!(
///     interpolate(a, b),
///     vec![a, Coordinate::new(0, 0), b],
/// );
/// assert_eq!(interpolate(a, a), vec![a]);
/// ```
pub fn interpolate(start: Coordinate, end: Coordinate) -> Vec<Coordinate> {
    sample_line(start, end, |x, y| {
        Coordinate::new(x.round_ties_even() as i32, y.round_ties_even() as i32)
    })
}

/// Cube-rounded straight line from `start` to `end`.
///
/// Same sampling as [`interpolate`], snapped with [`cube_round`].
pub fn cube_line(start: Coordinate, end: Coordinate) -> Vec<Coordinate> {
    sample_line(start, end, cube_round)
}

/// Snap a fractional axial position to the nearest cell.
///
/// All three cube components are rounded (ties to even) and the one that
/// moved furthest is rebuilt from the other two so the result stays on the
/// x + y + z = 0 plane.
pub fn cube_round(x: f64, y: f64) -> Coordinate {
    let z = -x - y;

    let mut rx = x.round_ties_even();
    let mut ry = y.round_ties_even();
    let rz = z.round_ties_even();

    let dx = (rx - x).abs();
    let dy = (ry - y).abs();
    let dz = (rz - z).abs();

    if dx > dy && dx > dz {
        rx = -ry - rz;
    } else if dy > dz {
        ry = -rx - rz;
    }

    Coordinate::new(rx as i32, ry as i32)
}

fn sample_line<F>(start: Coordinate, end: Coordinate, snap: F) -> Vec<Coordinate>
where
    F: Fn(f64, f64) -> Coordinate,
{
    let steps = start.hex_distance(&end);
    if steps == 0 {
        debug!(%start, "zero-length line");
        return vec![start];
    }

    debug!(%start, %end, steps, "sampling hex line");

    let (x0, y0) = (start.x as f64, start.y as f64);
    let (x1, y1) = (end.x as f64, end.y as f64);
    let n = steps as f64;

    (0..=steps)
        .map(|i| {
            if i == 0 {
                return start;
            }
            if i == steps {
                return end;
            }
            let t = i as f64 / n;
            let x = x0 * (1.0 - t) + x1 * t;
            let y = y0 * (1.0 - t) + y1 * t;
            let cell = snap(x, y);
            trace!(step = i, t, x, y, %cell, "snapped sample");
            cell
        })
        .collect()
}
