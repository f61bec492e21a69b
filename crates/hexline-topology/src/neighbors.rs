//! Neighbourhoods on the hexagonal grid.
//!
//! Every cell has six edge neighbours at distance 1 and six diagonal
//! (vertex) neighbours at distance 2. Both sets are named by the angle they
//! point at, edge neighbours on multiples of 60 degrees and diagonals offset
//! by 30.

use crate::Coordinate;

/// The six edge directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Degree0,
    Degree60,
    Degree120,
    Degree180,
    Degree240,
    Degree300,
}

impl Direction {
    /// All directions in rotational order. Consecutive entries are adjacent
    /// to each other, which [`ring`] relies on.
    pub const ALL: [Self; 6] = [
        Self::Degree0,
        Self::Degree60,
        Self::Degree120,
        Self::Degree180,
        Self::Degree240,
        Self::Degree300,
    ];

    /// Unit displacement for this direction.
    pub const fn offset(self) -> Coordinate {
        match self {
            Self::Degree0 => Coordinate::new(0, -1),
            Self::Degree60 => Coordinate::new(1, -1),
            Self::Degree120 => Coordinate::new(1, 0),
            Self::Degree180 => Coordinate::new(0, 1),
            Self::Degree240 => Coordinate::new(-1, 1),
            Self::Degree300 => Coordinate::new(-1, 0),
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Degree0 => Self::Degree180,
            Self::Degree60 => Self::Degree240,
            Self::Degree120 => Self::Degree300,
            Self::Degree180 => Self::Degree0,
            Self::Degree240 => Self::Degree60,
            Self::Degree300 => Self::Degree120,
        }
    }
}

/// The six diagonal directions, pointing through the corners of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagonal {
    Degree30,
    Degree90,
    Degree150,
    Degree210,
    Degree270,
    Degree330,
}

impl Diagonal {
    /// All diagonals in rotational order.
    pub const ALL: [Self; 6] = [
        Self::Degree30,
        Self::Degree90,
        Self::Degree150,
        Self::Degree210,
        Self::Degree270,
        Self::Degree330,
    ];

    /// Displacement for this diagonal. Each is the sum of the two edge
    /// directions either side of it.
    pub const fn offset(self) -> Coordinate {
        match self {
            Self::Degree30 => Coordinate::new(1, -2),
            Self::Degree90 => Coordinate::new(2, -1),
            Self::Degree150 => Coordinate::new(1, 1),
            Self::Degree210 => Coordinate::new(-1, 2),
            Self::Degree270 => Coordinate::new(-2, 1),
            Self::Degree330 => Coordinate::new(-1, -1),
        }
    }

    /// The diagonal pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Degree30 => Self::Degree210,
            Self::Degree90 => Self::Degree270,
            Self::Degree150 => Self::Degree330,
            Self::Degree210 => Self::Degree30,
            Self::Degree270 => Self::Degree90,
            Self::Degree330 => Self::Degree150,
        }
    }
}

/// Check if two cells share an edge.
pub fn are_neighbors(a: Coordinate, b: Coordinate) -> bool {
    a.hex_distance(&b) == 1
}

/// Number of cells within `radius` of a centre, inclusive.
///
/// Formula: 1 + 3r(r+1)
#[inline]
pub const fn slots_within(radius: u64) -> u64 {
    1 + 3 * radius * (radius + 1)
}

/// Cells at exactly `radius` from `center`.
///
/// Radius 0 yields the centre alone; otherwise 6 * radius cells, starting
/// from the Degree240 corner and walking the ring in [`Direction::ALL`]
/// order.
pub fn ring(center: Coordinate, radius: u32) -> Vec<Coordinate> {
    if radius == 0 {
        return vec![center];
    }

    let r = radius as i32;
    let mut cells = Vec::with_capacity(6 * radius as usize);
    let mut cell = center + Direction::Degree240.offset() * r;

    for direction in Direction::ALL {
        for _ in 0..radius {
            cells.push(cell);
            cell = cell.neighbor(direction);
        }
    }

    cells
}

/// All cells within `radius` of `center`, row by row.
pub fn range(center: Coordinate, radius: u32) -> Vec<Coordinate> {
    let r = radius as i32;
    let mut cells = Vec::with_capacity(slots_within(u64::from(radius)) as usize);

    for dx in -r..=r {
        let low = (-r).max(-dx - r);
        let high = r.min(-dx + r);
        for dy in low..=high {
            cells.push(center + Coordinate::new(dx, dy));
        }
    }

    cells
}
