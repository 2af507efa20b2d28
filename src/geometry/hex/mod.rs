//! Hexagonal geometry support.
//!
//! Cells are addressed with "odd-r" offset coordinates: plain `(x, y)` pairs in which every odd
//! row is drawn half a cell to the east of the even rows around it.
//!
//! ```notrust
//!  o o o o      y = 0
//!   o o o o     y = 1
//!  o o o o      y = 2
//!   o o o o     y = 3
//! ```
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/#coordinates-offset)

pub mod coordinate;
pub mod direction;
pub mod shapes;

pub use coordinate::Coordinate;
pub use direction::{Direction, Directions, ParseDirectionsError};
pub use shapes::{arc, asterisk, filled_ring, line, rectangle, ring, Line};
