//! Collections of cells forming common shapes.
//!
//! Every generator is built from repeated single steps ([`Coordinate::moved`]) and
//! [`Direction::rotate`]. Output order is deterministic. Degenerate parameters (negative
//! distances, `max_distance < min_distance`, empty rectangles) produce empty output.

use super::{Coordinate, Direction};
use itertools::iproduct;

/// Iterator over the cells of a straight line.
///
/// Created by the [`line`] function. See there for more details.
#[derive(Clone, Debug)]
pub struct Line {
    current: Coordinate,
    direction: Direction,
    remaining: usize,
}

impl Iterator for Line {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let next = self.current;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.current += self.direction;
        }

        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl std::iter::ExactSizeIterator for Line {}

impl std::iter::FusedIterator for Line {}

/// Cells from `min_distance` to `max_distance` (inclusive) steps away from `origin` in
/// `direction`, nearest first.
///
/// A `min_distance` of `0` includes the origin itself.
pub fn line(origin: Coordinate, direction: Direction, min_distance: i32, max_distance: i32) -> Line {
    let length = i64::from(max_distance) - i64::from(min_distance) + 1;
    if length <= 0 {
        return Line {
            current: origin,
            direction,
            remaining: 0,
        };
    }

    Line {
        current: origin.moved(direction, min_distance),
        direction,
        remaining: length as usize,
    }
}

/// The hollow ring of cells exactly `distance` steps from `origin`.
///
/// Starts at the north-west corner and proceeds clockwise, producing `6 * distance` cells.
/// A `distance` of `0` produces only the origin.
pub fn ring(origin: Coordinate, distance: i32) -> Vec<Coordinate> {
    if distance == 0 {
        return vec![origin];
    }
    if distance < 0 {
        return Vec::new();
    }

    let mut ring = Vec::with_capacity(6 * distance as usize);
    let mut current = origin.moved(Direction::NorthWest, distance);

    for side in 0..6 {
        let direction = Direction::East.rotate(side);
        for _ in 0..distance {
            current += direction;
            ring.push(current);
        }
    }

    ring
}

/// Concatenated rings for every distance in `min_distance..=max_distance`, innermost first.
///
/// A `min_distance` of `0` produces a filled disk; anything larger leaves a hole.
pub fn filled_ring(origin: Coordinate, min_distance: i32, max_distance: i32) -> Vec<Coordinate> {
    (min_distance..=max_distance)
        .flat_map(|distance| ring(origin, distance))
        .collect()
}

/// Two lines of `side_length` cells joined at `origin` so that they point in `direction`.
///
/// An arc facing `East` looks like a greater-than symbol: `>`. The origin comes first, then the
/// counter-clockwise arm, then the clockwise arm, each listed outwards from the origin.
pub fn arc(origin: Coordinate, direction: Direction, side_length: i32) -> Vec<Coordinate> {
    std::iter::once(origin)
        .chain(line(origin, direction.rotate(-2), 1, side_length))
        .chain(line(origin, direction.rotate(2), 1, side_length))
        .collect()
}

/// Lines in all six directions from `origin`, forming a six-pointed star.
///
/// Lines are listed clockwise from `NorthWest`. A `min_distance` greater than `0` cuts a hole
/// out of the center; a `min_distance` of `0` lists the origin once per line.
pub fn asterisk(origin: Coordinate, min_distance: i32, max_distance: i32) -> Vec<Coordinate> {
    Direction::iter()
        .flat_map(|direction| line(origin, direction, min_distance, max_distance))
        .collect()
}

/// A `width` by `height` block of cells whose top left cell is `origin`.
///
/// Cells are listed column by column. Odd row offsets are pulled back half a cell so that
/// consecutive rows line up, and the last column gets one extra cell on those rows so that the
/// right edge is straight.
pub fn rectangle(origin: Coordinate, width: i32, height: i32) -> Vec<Coordinate> {
    let mut tiles = Vec::new();
    let last_column = origin.x + width - 1;

    for (x, y_offset) in iproduct!(origin.x..origin.x + width, 0..height) {
        if y_offset % 2 == 0 {
            tiles.push(Coordinate::new(x, origin.y + y_offset));
        } else {
            let tile = Coordinate::new(x, origin.y + y_offset - 1) + Direction::SouthWest;
            tiles.push(tile);
            if x == last_column {
                tiles.push(tile + Direction::East);
            }
        }
    }

    tiles
}
