use broadside::{Coord, GameError, Outcome, Ship, SideBoard, TOTAL_SHIP_CELLS};

fn ship(texts: &[&str]) -> Ship {
    let cells = texts.iter().map(|t| t.parse().unwrap()).collect();
    Ship::new(cells).unwrap()
}

/// A fixed legal fleet laid out on rows 1 through 5.
fn fleet() -> Vec<Ship> {
    vec![
        ship(&["A1", "B1", "C1", "D1", "E1"]),
        ship(&["A2", "B2", "C2", "D2"]),
        ship(&["A3", "B3", "C3"]),
        ship(&["A4", "B4", "C4"]),
        ship(&["A5", "B5"]),
    ]
}

fn coord(text: &str) -> Coord {
    text.parse().unwrap()
}

#[test]
fn legal_fleet_is_accepted() {
    let board = SideBoard::with_fleet(fleet()).unwrap();
    assert_eq!(board.ships().len(), 5);
    assert_eq!(board.cells_afloat(), TOTAL_SHIP_CELLS);
    assert!(board.attacked().is_empty());
    assert!(!board.all_sunk());
}

#[test]
fn wrong_fleet_composition_is_rejected() {
    // missing a ship
    let mut ships = fleet();
    ships.pop();
    assert_eq!(SideBoard::with_fleet(ships), Err(GameError::FleetMismatch));

    // two carriers instead of carrier + battleship
    let ships = vec![
        ship(&["A1", "B1", "C1", "D1", "E1"]),
        ship(&["A2", "B2", "C2", "D2", "E2"]),
        ship(&["A3", "B3", "C3"]),
        ship(&["A4", "B4", "C4"]),
        ship(&["A5", "B5"]),
    ];
    assert_eq!(SideBoard::with_fleet(ships), Err(GameError::FleetMismatch));

    // an extra destroyer
    let mut ships = fleet();
    ships.push(ship(&["A7", "B7"]));
    assert_eq!(SideBoard::with_fleet(ships), Err(GameError::FleetMismatch));
}

#[test]
fn overlapping_ships_are_rejected() {
    let ships = vec![
        ship(&["A1", "B1", "C1", "D1", "E1"]),
        ship(&["C1", "C2", "C3", "C4"]),
        ship(&["A3", "B3", "C3"]),
        ship(&["A4", "B4", "C4"]),
        ship(&["A5", "B5"]),
    ];
    assert_eq!(
        SideBoard::with_fleet(ships),
        Err(GameError::OverlappingShips(coord("C1")))
    );
}

#[test]
fn attacks_resolve_to_miss_hit_and_sunk() {
    let mut board = SideBoard::with_fleet(fleet()).unwrap();

    assert_eq!(board.resolve_attack(coord("J10")).unwrap(), Outcome::Miss);
    assert_eq!(board.attacked(), &[coord("J10")]);

    match board.resolve_attack(coord("A5")).unwrap() {
        Outcome::Hit(ship) => assert_eq!(ship.class(), "Destroyer"),
        other => panic!("expected hit, got {:?}", other),
    }
    match board.resolve_attack(coord("B5")).unwrap() {
        Outcome::Sunk(ship) => assert_eq!(ship.class(), "Destroyer"),
        other => panic!("expected sunk, got {:?}", other),
    }
    assert_eq!(board.cells_afloat(), TOTAL_SHIP_CELLS - 2);
}

#[test]
fn full_ship_yields_hits_then_one_sunk() {
    let mut board = SideBoard::with_fleet(fleet()).unwrap();
    let carrier = ["A1", "B1", "C1", "D1", "E1"];
    for (i, cell) in carrier.iter().enumerate() {
        let outcome = board.resolve_attack(coord(cell)).unwrap();
        if i + 1 < carrier.len() {
            assert!(matches!(outcome, Outcome::Hit(_)), "cell {} not a hit", cell);
        } else {
            assert!(matches!(outcome, Outcome::Sunk(_)), "last cell must sink");
        }
    }
    assert!(!board.all_sunk());
}

#[test]
fn duplicate_attack_is_rejected_without_mutation() {
    let mut board = SideBoard::with_fleet(fleet()).unwrap();
    board.resolve_attack(coord("A1")).unwrap();
    let before = board.clone();

    assert_eq!(
        board.resolve_attack(coord("A1")),
        Err(GameError::AlreadyAttacked(coord("A1")))
    );
    assert_eq!(board, before);

    // a miss coordinate is guarded the same way
    board.resolve_attack(coord("H8")).unwrap();
    assert_eq!(
        board.resolve_attack(coord("H8")),
        Err(GameError::AlreadyAttacked(coord("H8")))
    );
}

#[test]
fn sinking_everything_empties_the_board() {
    let mut board = SideBoard::with_fleet(fleet()).unwrap();
    let cells: Vec<Coord> = board
        .ships()
        .iter()
        .flat_map(|s| s.cells().to_vec())
        .collect();
    for cell in cells {
        board.resolve_attack(cell).unwrap();
    }
    assert!(board.all_sunk());
    assert_eq!(board.cells_afloat(), 0);
    assert_eq!(board.hits_received(), TOTAL_SHIP_CELLS);
}
