use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Direction in a hexagonal coordinate system
///
/// Assumes that the major orientation is horizontal: `East` and `West` neighbors share a row,
/// and there is no `North` or `South`.
///
/// Variants are declared in clockwise order starting from `NorthWest`. [`Direction::rotate`]
/// depends on that order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Direction {
    #[display("nw")]
    NorthWest,
    #[display("ne")]
    NorthEast,
    #[display("e")]
    East,
    #[display("se")]
    SouthEast,
    #[display("sw")]
    SouthWest,
    #[display("w")]
    West,
}

const CLOCKWISE: [Direction; 6] = [
    Direction::NorthWest,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::West,
];

impl Direction {
    /// Iterate through all `Direction`s, clockwise from `NorthWest`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        CLOCKWISE.iter().copied()
    }

    /// Rotate this direction by `turns` sixths of a full turn.
    ///
    /// Positive `turns` rotate clockwise, negative `turns` counter-clockwise.
    /// Any magnitude is accepted; the rotation wraps every 6 turns.
    pub fn rotate(self, turns: i32) -> Direction {
        let idx = (self as i32 + turns.rem_euclid(6)) % 6;
        CLOCKWISE[idx as usize]
    }

    /// The opposite direction.
    pub fn reverse(self) -> Direction {
        self.rotate(3)
    }

    /// `true` for the directions which decrease `y`.
    pub fn is_northward(self) -> bool {
        matches!(self, Direction::NorthWest | Direction::NorthEast)
    }

    /// `true` for the directions which lean towards increasing `x`.
    pub fn is_eastward(self) -> bool {
        matches!(
            self,
            Direction::NorthEast | Direction::East | Direction::SouthEast
        )
    }

    /// Attempt to parse a direction from the head of the given string.
    ///
    /// Returns `(maybe_direction, unused_portion)`.
    ///
    /// Legal inputs (case sensitive): `e`, `se`, `sw`, `w`, `nw`, `ne`.
    pub fn try_parse(s: &str) -> (Option<Direction>, &str) {
        let mut chars = s.chars();
        let first = chars.next();
        let second = chars.next();
        match (first, second) {
            (Some('e'), _) => (Some(Direction::East), &s[1..]),
            (Some('s'), Some('e')) => (Some(Direction::SouthEast), &s[2..]),
            (Some('s'), Some('w')) => (Some(Direction::SouthWest), &s[2..]),
            (Some('w'), _) => (Some(Direction::West), &s[1..]),
            (Some('n'), Some('w')) => (Some(Direction::NorthWest), &s[2..]),
            (Some('n'), Some('e')) => (Some(Direction::NorthEast), &s[2..]),
            _ => (None, s),
        }
    }
}

/// Helper for parsing an undelimited path of directions, e.g. `"esenee"`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directions(pub Vec<Direction>);

impl FromStr for Directions {
    type Err = ParseDirectionsError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        // `s` is always a suffix of `untrimmed`, so the length difference is a byte offset into
        // the caller's string
        let untrimmed = input.trim_end();
        let mut directions = Vec::with_capacity(untrimmed.len());
        let mut s = untrimmed.trim_start();

        while !s.is_empty() {
            let (direction, remaining) = Direction::try_parse(s);
            match direction {
                None => {
                    let position = untrimmed.len() - s.len();
                    log::debug!("no hex direction at byte {} of {:?}", position, input);
                    return Err(ParseDirectionsError {
                        position,
                        remainder: s.to_owned(),
                    });
                }
                Some(direction) => directions.push(direction),
            }

            s = remaining;
        }

        Ok(Directions(directions))
    }
}

impl IntoIterator for Directions {
    type Item = Direction;
    type IntoIter = std::vec::IntoIter<Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Parsing failed for a path of hex directions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Parsing hex direction failed at byte {position}: {remainder:?}")]
pub struct ParseDirectionsError {
    /// Byte offset of the first unrecognized direction, counted from the start of the input
    /// including any leading whitespace.
    pub position: usize,
    /// Unparsed tail of the input.
    pub remainder: String,
}
