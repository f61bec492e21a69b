//! Hexagonal coordinate system using axial coordinates.
//!
//! Axial coordinates use two axes (x, y) at 60 degrees, with an implicit
//! third axis z = -(x + y). Only the two axial values are stored, so the
//! cube constraint x + y + z = 0 can never be broken by mutation.
//!
//! The stored axes are `i32`; the derived axis and distances are computed in
//! `i64`/`u64`, which hold every result for any pair of stored coordinates.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::{Diagonal, Direction, Error};

/// A cell on the hexagonal grid.
///
/// Also used as a displacement between two cells: `b - a` is the vector
/// that moves `a` onto `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// First axial coordinate
    pub x: i32,
    /// Second axial coordinate
    pub y: i32,
}

impl Coordinate {
    /// Origin of the grid.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The derived third axis: z = -(x + y).
    pub const fn z(&self) -> i64 {
        -(self.x as i64 + self.y as i64)
    }

    /// Hexagonal distance between two cells.
    ///
    /// Half the sum of the absolute differences on all three cube axes. The
    /// sum is always even on the lattice.
    ///
    /// ```
    /// use hexline_topology::Coordinate;
    ///
    /// let a = Coordinate::new(2, 5);
    /// let b = Coordinate::new(5, 3);
    /// assert_eq!(a.hex_distance(&b), 3);
    /// ```
    pub fn hex_distance(&self, other: &Self) -> u64 {
        let dx = (self.x as i64 - other.x as i64).unsigned_abs();
        let dy = (self.y as i64 - other.y as i64).unsigned_abs();
        let dz = (self.z() - other.z()).unsigned_abs();
        let sum = dx + dy + dz;
        debug_assert!(
            sum % 2 == 0,
            "odd cube distance {} between {} and {}",
            sum,
            self,
            other
        );
        sum / 2
    }

    /// Distance from the origin, the magnitude of this coordinate as a
    /// displacement.
    pub fn length(&self) -> u64 {
        self.hex_distance(&Self::ORIGIN)
    }

    /// The edge-adjacent cell in the given direction.
    pub fn neighbor(&self, direction: Direction) -> Self {
        *self + direction.offset()
    }

    /// All six edge-adjacent cells, in [`Direction::ALL`] order.
    pub fn neighbors(&self) -> [Self; 6] {
        Direction::ALL.map(|d| self.neighbor(d))
    }

    /// The vertex-adjacent cell across the given diagonal.
    pub fn diagonal(&self, diagonal: Diagonal) -> Self {
        *self + diagonal.offset()
    }

    /// All six vertex-adjacent cells, in [`Diagonal::ALL`] order.
    pub fn diagonals(&self) -> [Self; 6] {
        Diagonal::ALL.map(|d| self.diagonal(d))
    }
}

impl Add for Coordinate {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Coordinate {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Coordinate {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<i32> for Coordinate {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: i32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    /// Parse `"x,y"` or the display form `"(x, y)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 2 {
            return Err(Error::ComponentCount {
                input: s.to_string(),
                found: parts.len(),
            });
        }

        let parse = |value: &str| {
            value.parse::<i32>().map_err(|source| Error::InvalidInteger {
                value: value.to_string(),
                source,
            })
        };

        Ok(Self::new(parse(parts[0])?, parse(parts[1])?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_zero() {
        let origin = Coordinate::ORIGIN;
        assert_eq!(origin.x, 0);
        assert_eq!(origin.y, 0);
        assert_eq!(origin.z(), 0);
        assert_eq!(origin, Coordinate::default());
    }

    #[test]
    fn z_axis_constraint() {
        let coords = [
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(1, -1),
            Coordinate::new(-3, 5),
            Coordinate::new(2, 5),
        ];
        for c in coords {
            assert_eq!(i64::from(c.x) + i64::from(c.y) + c.z(), 0);
        }
        assert_eq!(Coordinate::new(2, 5).z(), -7);
        assert_eq!(Coordinate::new(5, 3).z(), -8);
    }

    #[test]
    fn distance_worked_example() {
        let start = Coordinate::new(2, 5);
        let end = Coordinate::new(5, 3);

        // dx = 3, dy = 2, dz = 1
        assert_eq!(start.hex_distance(&end), 3);
        assert_eq!(end.hex_distance(&start), 3);
        assert_eq!(start.hex_distance(&start), 0);
    }

    #[test]
    fn z_and_distance_at_extremes() {
        let max = Coordinate::new(i32::MAX, i32::MAX);
        let min = Coordinate::new(i32::MIN, i32::MIN);

        assert_eq!(max.z(), -(2 * i64::from(i32::MAX)));
        assert_eq!(min.z(), -(2 * i64::from(i32::MIN)));
        assert_eq!(Coordinate::new(i32::MAX, 1).z(), -(i64::from(i32::MAX) + 1));

        // dx = dy = 2^32 - 1, dz = 2^33 - 2
        assert_eq!(min.hex_distance(&max), (1u64 << 33) - 2);
        assert_eq!(max.hex_distance(&min), (1u64 << 33) - 2);

        // Opposite corners share z = 1
        let a = Coordinate::new(i32::MAX, i32::MIN);
        let b = Coordinate::new(i32::MIN, i32::MAX);
        assert_eq!(a.z(), 1);
        assert_eq!(a.hex_distance(&b), u64::from(u32::MAX));
        assert_eq!(max.hex_distance(&max), 0);
    }

    #[test]
    fn length_from_origin() {
        assert_eq!(Coordinate::ORIGIN.length(), 0);
        for n in Coordinate::ORIGIN.neighbors() {
            assert_eq!(n.length(), 1);
        }
        assert_eq!(Coordinate::new(2, 0).length(), 2);
        assert_eq!(Coordinate::new(1, 1).length(), 2);
        assert_eq!(Coordinate::new(-3, 1).length(), 3);
    }

    #[test]
    fn arithmetic() {
        let a = Coordinate::new(1, 2);
        let b = Coordinate::new(4, -1);

        assert_eq!(a + b, Coordinate::new(5, 1));
        assert_eq!(a - b, Coordinate::new(-3, 3));
        assert_eq!(a + (-b), a - b);
        assert_eq!(a * 3, Coordinate::new(3, 6));
        assert_eq!((b - a).length(), a.hex_distance(&b));
    }

    #[test]
    fn display_form() {
        assert_eq!(Coordinate::new(2, -5).to_string(), "(2, -5)");
    }

    #[test]
    fn parse_plain_and_display_forms() {
        assert_eq!("2,5".parse::<Coordinate>(), Ok(Coordinate::new(2, 5)));
        assert_eq!(" -3 , 7 ".parse::<Coordinate>(), Ok(Coordinate::new(-3, 7)));
        assert_eq!("(4, -1)".parse::<Coordinate>(), Ok(Coordinate::new(4, -1)));

        let c = Coordinate::new(-12, 40);
        assert_eq!(c.to_string().parse::<Coordinate>(), Ok(c));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "1,2,3".parse::<Coordinate>(),
            Err(Error::ComponentCount { found: 3, .. })
        ));
        assert!(matches!(
            "7".parse::<Coordinate>(),
            Err(Error::ComponentCount { found: 1, .. })
        ));
        assert!(matches!(
            "1,x".parse::<Coordinate>(),
            Err(Error::InvalidInteger { ref value, .. }) if value == "x"
        ));
        assert!(matches!(
            "1.5,2".parse::<Coordinate>(),
            Err(Error::InvalidInteger { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_field_names() {
        let json = serde_json::to_string(&Coordinate::new(3, -4)).unwrap();
        assert_eq!(json, r#"{"x":3,"y":-4}"#);
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Coordinate::new(3, -4));
    }
}
