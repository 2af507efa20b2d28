//! Run with: `cargo test --test scenarios`

use hexgrid::{
    geometry::hex::{Directions, ParseDirectionsError},
    shapes, Coordinate, Direction,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const ORIGIN: Coordinate = Coordinate::new(0, 0);

#[test]
fn test_moves_from_origin() {
    assert_eq!(ORIGIN.moved(Direction::East, 3), Coordinate::new(3, 0));
    assert_eq!(ORIGIN.moved(Direction::NorthEast, 1), Coordinate::new(0, -1));
    assert_eq!(ORIGIN.distance(Coordinate::new(3, 0)), 3);
}

#[test]
fn test_unit_ring_around_origin() {
    let ring = shapes::ring(ORIGIN, 1);
    assert_eq!(ring.len(), 6);
    assert!(ring.iter().all(|&cell| ORIGIN.distance(cell) == 1));
    assert!(ring.iter().all(|&cell| ORIGIN.direction_to(cell).is_some()));
}

#[test]
fn test_rotate_east_half_turn() {
    assert_eq!(Direction::East.rotate(3), Direction::West);
}

#[test]
fn test_compute_direction() {
    assert_eq!(ORIGIN.direction_to(Coordinate::new(5, 0)), Some(Direction::East));

    let target = Coordinate::new(1, 1);
    let distance = ORIGIN.distance(target);
    let on_a_diagonal = Direction::iter()
        .filter(|direction| !matches!(direction, Direction::East | Direction::West))
        .any(|direction| ORIGIN.moved(direction, distance) == target);
    assert!(!on_a_diagonal);
    assert_eq!(ORIGIN.direction_to(target), None);
}

#[test]
fn test_rectangle_right_edge() {
    let tiles = shapes::rectangle(ORIGIN, 4, 4);
    for y in 0..4 {
        let right_edge = tiles
            .iter()
            .filter(|cell| cell.y == y)
            .map(|cell| cell.x)
            .max();
        assert_eq!(right_edge, Some(3));
    }
}

#[test]
fn test_targeting_from_text() {
    let start: Coordinate = "(4, 6)".parse().unwrap();
    let Directions(path) = "nenenee".parse().unwrap();
    let end = start.follow(path);

    assert_eq!(start.distance(end), 4);
    assert_eq!(start.orientation(end), Ordering::Greater);
    assert_eq!(end.orientation(start) as i8, -1);

    let err: ParseDirectionsError = "nenex".parse::<Directions>().unwrap_err();
    assert_eq!(err.position, 4);
}

#[test]
fn test_arc_and_asterisk_share_arms() {
    let center = Coordinate::new(10, 10);
    let arc = shapes::arc(center, Direction::SouthEast, 3);
    let star = shapes::asterisk(center, 1, 3);

    assert_eq!(arc.len(), 7);
    assert_eq!(star.len(), 18);
    assert!(arc[1..].iter().all(|cell| star.contains(cell)));
}

/// A saved targeting query, as a caller might persist it.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Volley {
    origin: Coordinate,
    facing: Direction,
    targets: Vec<Coordinate>,
}

#[test]
fn test_shape_query_survives_serialization() {
    let origin = Coordinate::new(-3, 7);
    let facing = Direction::NorthWest;
    let volley = Volley {
        origin,
        facing,
        targets: shapes::arc(origin, facing, 2),
    };

    let saved = toml::to_string(&volley).unwrap();
    let loaded: Volley = toml::from_str(&saved).unwrap();
    assert_eq!(loaded, volley);
}

#[test]
fn test_coordinate_serializes_as_named_fields() {
    let saved = toml::to_string(&Coordinate::new(3, -4)).unwrap();
    let loaded: toml::Value = toml::from_str(&saved).unwrap();
    assert_eq!(loaded["x"].as_integer(), Some(3));
    assert_eq!(loaded["y"].as_integer(), Some(-4));
}
