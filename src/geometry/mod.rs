pub mod hex;

pub use hex::{Coordinate, Direction};
