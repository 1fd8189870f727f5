use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{generate_board, BoardError, Coord, ShotOutcome, FLEET};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_cells_in_bounds(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = generate_board(&mut rng, 6, &FLEET, false).unwrap();
        for ship in board.ships() {
            for cell in ship.cells() {
                prop_assert!(cell.row >= 0 && cell.col >= 0 && cell.row < 6 && cell.col < 6);
            }
        }
    }

    #[test]
    fn shot_idempotent_rejecting(seed in any::<u64>(), row in 0..6i32, col in 0..6i32) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = generate_board(&mut rng, 6, &FLEET, false).unwrap();
        let coord = Coord::new(row, col);
        board.resolve_shot(coord).unwrap();
        let err = board.resolve_shot(coord).unwrap_err();
        prop_assert_eq!(err, BoardError::AlreadyTargeted { coord });
    }

    #[test]
    fn sinking_takes_exactly_length_hits(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = generate_board(&mut rng, 6, &FLEET, false).unwrap();
        let ship = board
            .ships()
            .iter()
            .find(|s| s.length() == 3)
            .unwrap()
            .clone();
        let cells: Vec<_> = ship.cells().collect();
        for cell in &cells[..cells.len() - 1] {
            prop_assert_eq!(board.resolve_shot(*cell).unwrap(), ShotOutcome::Hit);
        }
        prop_assert_eq!(
            board.resolve_shot(cells[cells.len() - 1]).unwrap(),
            ShotOutcome::Sunk
        );
        prop_assert_eq!(board.destroyed(), 1);
    }

    #[test]
    fn defeat_iff_all_ships_sunk(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = generate_board(&mut rng, 6, &FLEET, false).unwrap();
        for r in 0..6 {
            for c in 0..6 {
                prop_assert_eq!(
                    board.defeat(),
                    board.ships().iter().all(|s| s.is_sunk())
                );
                // revealed buffer cells answer AlreadyTargeted; ignore
                let _ = board.resolve_shot(Coord::new(r, c));
            }
        }
        prop_assert!(board.defeat());
        for ship in board.ships() {
            prop_assert!(ship.is_sunk());
        }
    }
}
