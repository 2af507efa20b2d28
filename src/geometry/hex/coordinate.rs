use super::direction::Direction;
use num::Integer;
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    convert::TryFrom,
    ops::{Add, AddAssign},
};

/// Offset hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates-offset).
///
/// Odd rows are shifted half a cell east relative to even rows. `x` grows to the east and `y`
/// grows to the south; the grid is unbounded.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display("({x}, {y})")]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

/// `0` for even rows, `1` for odd rows, including negative ones.
#[inline]
fn row_parity(y: i32) -> i32 {
    (y % 2).abs()
}

/// Half of `y`, rounded towards negative infinity.
#[inline]
fn half_row(y: i64) -> i64 {
    Integer::div_floor(&y, &2)
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Coordinate {
        Coordinate { x, y }
    }

    /// The cell reached by walking `distance` steps from `self` in `direction`.
    ///
    /// A distance of `0` returns `self`. Negative distances walk backwards: moving `-n` steps
    /// `NorthEast` lands on the same cell as moving `n` steps `SouthWest`.
    pub fn moved(self, direction: Direction, distance: i32) -> Coordinate {
        match direction {
            Direction::East => Coordinate::new(self.x + distance, self.y),
            Direction::West => Coordinate::new(self.x - distance, self.y),
            _ => {
                let y = if direction.is_northward() {
                    self.y - distance
                } else {
                    self.y + distance
                };

                // entering an odd row from an even one pulls x back by half a cell, and vice versa
                let x_offset = match row_parity(y).cmp(&row_parity(self.y)) {
                    Ordering::Greater => -1,
                    Ordering::Less => 1,
                    Ordering::Equal => 0,
                };
                let dx = if direction.is_eastward() {
                    i64::from(distance)
                } else {
                    -i64::from(distance)
                };

                // `x_offset + dx` is always even, so truncating division is exact here
                let half_step = (x_offset + dx) / 2;
                Coordinate::new(self.x + half_step as i32, y)
            }
        }
    }

    /// Minimum number of single steps between `self` and `other`.
    ///
    /// Saturates at `i32::MAX` for cells further apart than that.
    pub fn distance(self, other: Coordinate) -> i32 {
        let (x1, y1) = (i64::from(self.x), i64::from(self.y));
        let (x2, y2) = (i64::from(other.x), i64::from(other.y));

        let dy = (y2 - y1).abs();
        let dq = (-half_row(y2) + x2 + half_row(y1) - x1).abs();
        let ds = (-y2 + half_row(y2) - x2 + y1 - half_row(y1) + x1).abs();
        i32::try_from(dy.max(dq).max(ds)).unwrap_or(i32::MAX)
    }

    /// The direction one would have to travel in a straight line to get from `self` to
    /// `destination`.
    ///
    /// Returns `None` when no straight line connects them, which includes `destination == self`.
    pub fn direction_to(self, destination: Coordinate) -> Option<Direction> {
        if destination.y == self.y {
            return match destination.x.cmp(&self.x) {
                Ordering::Less => Some(Direction::West),
                Ordering::Greater => Some(Direction::East),
                Ordering::Equal => None,
            };
        }

        let distance = self.distance(destination);
        let direction = [
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::SouthEast,
            Direction::SouthWest,
        ]
        .iter()
        .copied()
        .find(|&direction| self.moved(direction, distance) == destination);

        if direction.is_none() {
            log::trace!("no straight line from {} to {}", self, destination);
        }
        direction
    }

    /// Whether `target` lies to the left (`Less`), right (`Greater`), or in the same column
    /// (`Equal`) as `self`.
    ///
    /// `ordering as i8` gives the conventional `-1`, `1`, `0`.
    ///
    /// When the two rows have different parity there is no shared column. Ties then go right
    /// when the target is on an odd row, and left when it is on an even row.
    pub fn orientation(self, target: Coordinate) -> Ordering {
        let origin_parity = row_parity(self.y);
        let target_parity = row_parity(target.y);

        if origin_parity == target_parity {
            target.x.cmp(&self.x)
        } else if target_parity == 1 {
            if target.x >= self.x {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        } else if target.x <= self.x {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// The six cells adjacent to this one, clockwise from the north-west.
    pub fn neighbors(self) -> impl 'static + Iterator<Item = Coordinate> {
        Direction::iter().map(move |direction| self + direction)
    }

    /// Take one step for each direction in `path`, returning the final position.
    pub fn follow(self, path: impl IntoIterator<Item = Direction>) -> Coordinate {
        path.into_iter().fold(self, |position, direction| position + direction)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Coordinate::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(Coordinate { x, y }: Coordinate) -> Self {
        (x, y)
    }
}

impl AddAssign<Direction> for Coordinate {
    fn add_assign(&mut self, rhs: Direction) {
        *self = self.moved(rhs, 1);
    }
}

impl Add<Direction> for Coordinate {
    type Output = Coordinate;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}
