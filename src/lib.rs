//! Geometry for hexagonal tile grids addressed by offset coordinates.
//!
//! Odd rows are shifted half a cell to the east of even rows. Every query is a pure function of
//! its arguments; see [`geometry::hex`] for the entry points.

pub mod geometry;

pub use geometry::hex::{shapes, Coordinate, Direction};
