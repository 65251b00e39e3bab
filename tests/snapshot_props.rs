use broadside::{generate_layout, Coord, Difficulty, Game, Side, Snapshot};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Build a mid-game session: generated fleets, then a handful of human
/// attacks with the automated replies they trigger.
fn mid_game(seed: u64, attacks: usize) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    let human_fleet = generate_layout(&mut rng).unwrap();
    let automated_fleet = generate_layout(&mut rng).unwrap();
    let mut game = Game::new(Difficulty::Hard, human_fleet, automated_fleet).unwrap();
    for _ in 0..attacks {
        if game.is_over() {
            break;
        }
        let untried: Vec<Coord> = Coord::all()
            .filter(|&c| !game.board(Side::Automated).was_attacked(c))
            .collect();
        let target = untried[rng.random_range(0..untried.len())];
        game.apply_attack(Side::Automated, target, &mut rng).unwrap();
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn capture_restore_capture_is_identity(seed in any::<u64>(), attacks in 0usize..15) {
        let game = mid_game(seed, attacks);
        prop_assume!(!game.is_over());

        let snapshot = Snapshot::capture(&game);
        let restored = snapshot.restore().unwrap();
        prop_assert_eq!(Snapshot::capture(&restored), snapshot);
    }

    #[test]
    fn restored_boards_match_the_originals(seed in any::<u64>(), attacks in 0usize..15) {
        let game = mid_game(seed, attacks);
        prop_assume!(!game.is_over());

        let restored = Snapshot::capture(&game).restore().unwrap();
        prop_assert_eq!(restored.board(Side::Human), game.board(Side::Human));
        prop_assert_eq!(restored.board(Side::Automated), game.board(Side::Automated));
        prop_assert_eq!(restored.difficulty(), game.difficulty());
        prop_assert_eq!(restored.created_at(), game.created_at());
    }

    #[test]
    fn binary_encoding_roundtrips(seed in any::<u64>(), attacks in 0usize..15) {
        let game = mid_game(seed, attacks);
        prop_assume!(!game.is_over());

        let snapshot = Snapshot::capture(&game);
        let bytes = bincode::serialize(&snapshot).unwrap();
        let decoded: Snapshot = bincode::deserialize(&bytes).unwrap();
        prop_assert_eq!(decoded, snapshot);
    }
}

#[test]
fn snapshot_field_shapes() {
    let game = mid_game(11, 4);
    let snapshot = Snapshot::capture(&game);

    assert_eq!(snapshot.difficulty, "hard");
    assert_eq!(snapshot.human_ships.len(), 5);
    assert_eq!(snapshot.automated_ships.len(), 5);
    let mut lengths: Vec<usize> = snapshot.human_ships.iter().map(Vec::len).collect();
    lengths.sort_unstable();
    assert_eq!(lengths, vec![2, 3, 3, 4, 5]);

    // every coordinate travels in text form
    for text in snapshot
        .human_attacked_against
        .iter()
        .chain(&snapshot.automated_attacked_against)
        .chain(&snapshot.ai_engaged_hits)
    {
        text.parse::<Coord>().unwrap();
    }
}

#[test]
fn unknown_difficulty_is_rejected() {
    let game = mid_game(13, 0);
    let mut snapshot = Snapshot::capture(&game);
    snapshot.difficulty = "impossible".to_string();
    assert!(snapshot.restore().is_err());
}

#[test]
fn date_may_be_refreshed_by_the_collaborator() {
    let game = mid_game(17, 2);
    let mut snapshot = Snapshot::capture(&game);
    snapshot.date = 1_700_000_000;
    let restored = snapshot.restore().unwrap();
    assert_eq!(restored.created_at(), 1_700_000_000);
}
