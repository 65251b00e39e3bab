use broadside::{Coord, Direction, GameError};
use proptest::prelude::*;

#[test]
fn text_form_examples() {
    assert_eq!(Coord::new(1, 1).unwrap().to_string(), "A1");
    assert_eq!(Coord::new(10, 10).unwrap().to_string(), "J10");
    assert_eq!(Coord::new(4, 7).unwrap().to_string(), "D7");
    assert_eq!("b7".parse::<Coord>().unwrap(), Coord::new(2, 7).unwrap());
}

#[test]
fn malformed_text_is_rejected() {
    for text in ["", "5", "K1", "A0", "A11", "AA", "1A", "A 1", "A1x"] {
        assert!(
            matches!(text.parse::<Coord>(), Err(GameError::MalformedCoord(_))),
            "{:?} should not parse",
            text
        );
    }
}

#[test]
fn out_of_range_pairs_are_never_constructed() {
    assert!(Coord::new(0, 5).is_none());
    assert!(Coord::new(5, 0).is_none());
    assert!(Coord::new(11, 5).is_none());
    assert!(Coord::new(5, 11).is_none());
}

#[test]
fn neighbors_clamp_at_edges() {
    let corner = Coord::new(1, 1).unwrap();
    assert_eq!(corner.neighbor(Direction::Left), None);
    assert_eq!(corner.neighbor(Direction::Up), None);
    assert_eq!(
        corner.neighbor(Direction::Right),
        Some(Coord::new(2, 1).unwrap())
    );
    assert_eq!(corner.neighbors().len(), 2);

    let edge = Coord::new(10, 4).unwrap();
    assert_eq!(edge.neighbor(Direction::Right), None);
    assert_eq!(edge.neighbors().len(), 3);

    let center = Coord::new(5, 5).unwrap();
    assert_eq!(center.neighbors().len(), 4);
}

#[test]
fn line_returns_none_when_leaving_the_board() {
    let origin = Coord::new(8, 3).unwrap();
    assert!(origin.line(Direction::Right, 4).is_none());
    assert!(origin.line(Direction::Up, 4).is_none());

    let cells = origin.line(Direction::Left, 3).unwrap();
    let expected: Vec<Coord> = ["H3", "G3", "F3"]
        .iter()
        .map(|t| t.parse().unwrap())
        .collect();
    assert_eq!(cells, expected);
}

#[test]
fn all_covers_the_board_once() {
    let cells: Vec<Coord> = Coord::all().collect();
    assert_eq!(cells.len(), 100);
    for (i, cell) in cells.iter().enumerate() {
        assert!(!cells[..i].contains(cell));
    }
}

proptest! {
    #[test]
    fn pair_to_text_roundtrip(col in 1u8..=10, row in 1u8..=10) {
        let coord = Coord::new(col, row).unwrap();
        prop_assert_eq!(coord.to_string().parse::<Coord>().unwrap(), coord);
    }

    #[test]
    fn text_to_pair_roundtrip(col in 0u8..10, row in 1u8..=10) {
        let text = format!("{}{}", (b'A' + col) as char, row);
        let coord: Coord = text.parse().unwrap();
        prop_assert_eq!(coord.to_string(), text);
    }
}
