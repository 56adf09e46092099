use std::collections::VecDeque;

use seabattle::{
    generate_fleet, AutoPlayer, Battlefield, BoardView, Cell, Coord, Fleet, GameEngine,
    GameStatus, GuessResult, Player, Ship, TargetingStrategy,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn single(r: usize, c: usize) -> Ship {
    Ship::new(vec![(r, c)]).unwrap()
}

fn fleet(ships: Vec<Ship>) -> Fleet {
    Fleet::new(ships).unwrap()
}

/// Fires at a fixed list of cells in order.
struct Scripted(VecDeque<Coord>);

impl TargetingStrategy for Scripted {
    fn next_target(&mut self, _rng: &mut SmallRng) -> Coord {
        self.0.pop_front().expect("script exhausted")
    }

    fn record_result(&mut self, _coord: Coord, _result: GuessResult) {}
}

fn scripted(cells: &[Coord]) -> Box<dyn TargetingStrategy> {
    Box::new(Scripted(cells.iter().copied().collect()))
}

#[test]
fn single_cell_ship_is_destroyed_and_bordered() {
    let mut field = Battlefield::new(fleet(vec![single(0, 0), single(5, 5)]));
    assert_eq!(field.fire((0, 0)), GuessResult::ShipDestroyed(0));
    assert!(field.is_destroyed(0));
    let border: Vec<_> = field.border().iter_set_bits().collect();
    assert_eq!(border, vec![(0, 1), (1, 0), (1, 1)]);

    let view = BoardView::project(&field, false);
    assert_eq!(view.cell(0, 0), Some(Cell::Hit));
    assert_eq!(view.cell(1, 1), Some(Cell::Miss));
    assert_eq!(view.cell(5, 5), Some(Cell::Water));
}

#[test]
fn border_skips_cells_already_fired_at() {
    let mut field = Battlefield::new(fleet(vec![Ship::new(vec![(4, 4), (4, 5)]).unwrap()]));
    assert_eq!(field.fire((3, 3)), GuessResult::Miss);
    assert_eq!(field.fire((4, 4)), GuessResult::Hit);
    assert_eq!(field.fire((4, 5)), GuessResult::ShipDestroyed(0));
    assert!(!field.border().contains((3, 3)));
    assert!(!field.border().contains((4, 4)));
    assert_eq!(field.border().count_ones(), 9);
}

#[test]
fn classification_is_idempotent() {
    let mut field = Battlefield::new(fleet(vec![Ship::new(vec![(2, 2), (2, 3)]).unwrap()]));
    assert_eq!(field.classify((2, 2)), GuessResult::Hit);
    assert_eq!(field.classify((2, 2)), GuessResult::Hit);
    assert_eq!(field.classify((7, 7)), GuessResult::Miss);
    field.fire((2, 2));
    assert_eq!(field.classify((2, 3)), GuessResult::ShipDestroyed(0));
    assert_eq!(field.classify((2, 3)), GuessResult::ShipDestroyed(0));
}

#[test]
fn destroyed_ship_reported_once() {
    let mut field = Battlefield::new(fleet(vec![single(1, 1)]));
    assert_eq!(field.fire((1, 1)), GuessResult::ShipDestroyed(0));
    assert_eq!(field.fire((1, 1)), GuessResult::Hit);
    assert_eq!(field.destroyed_ids(), vec![0]);
}

#[test]
fn player_wins_when_opponent_fleet_is_covered() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut engine = GameEngine::with_strategy(
        fleet(vec![single(0, 0)]),
        fleet(vec![single(9, 9), single(9, 7)]),
        scripted(&[(5, 5), (5, 6)]),
    );
    let first = engine.play_round(&mut rng, (9, 9));
    assert_eq!(first.turn, 1);
    assert_eq!(first.player_result, GuessResult::ShipDestroyed(0));
    assert_eq!(first.opponent_result, GuessResult::Miss);
    assert_eq!(first.status, GameStatus::InProgress);

    let second = engine.play_round(&mut rng, (9, 7));
    assert_eq!(second.turn, 2);
    assert_eq!(second.player_result, GuessResult::ShipDestroyed(1));
    assert_eq!(engine.status(), GameStatus::PlayerWon);
    assert_eq!(engine.turn(), 3);
}

#[test]
fn opponent_wins_when_player_fleet_is_covered() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut engine = GameEngine::with_strategy(
        fleet(vec![single(0, 0)]),
        fleet(vec![single(9, 9)]),
        scripted(&[(0, 0)]),
    );
    let report = engine.play_round(&mut rng, (4, 4));
    assert_eq!(report.player_result, GuessResult::Miss);
    assert_eq!(report.opponent_result, GuessResult::ShipDestroyed(0));
    assert_eq!(report.status, GameStatus::OpponentWon);
}

#[test]
fn player_win_is_checked_first() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut engine = GameEngine::with_strategy(
        fleet(vec![single(0, 0)]),
        fleet(vec![single(9, 9)]),
        scripted(&[(0, 0)]),
    );
    let report = engine.play_round(&mut rng, (9, 9));
    assert_eq!(report.opponent_result, GuessResult::ShipDestroyed(0));
    assert_eq!(report.status, GameStatus::PlayerWon);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "opponent move off the board")]
fn off_board_opponent_move_is_caught() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut engine = GameEngine::with_strategy(
        fleet(vec![single(0, 0)]),
        fleet(vec![single(9, 9)]),
        scripted(&[(10, 0)]),
    );
    engine.play_round(&mut rng, (5, 5));
}

#[test]
fn off_board_shot_is_a_miss_when_classified() {
    let field = Battlefield::new(fleet(vec![single(0, 0)]));
    assert_eq!(field.classify((10, 10)), GuessResult::Miss);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn state_only_grows_until_someone_wins(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut mover = AutoPlayer::new();
        let mut engine = GameEngine::new(
            mover.place_ships(&mut rng).unwrap(),
            generate_fleet(&mut rng).unwrap(),
        );
        let mut last = (0, 0, 0, 0);
        let mut rounds = 0;
        while !engine.status().is_over() {
            let mv = mover.select_target(&mut rng, engine.player_hits()).unwrap();
            let report = engine.play_round(&mut rng, mv);
            rounds += 1;
            prop_assert_eq!(report.turn, rounds);
            prop_assert!(engine.player_hits().contains(report.player_move));
            prop_assert!(engine.opponent_hits().contains(report.opponent_move));

            let now = (
                engine.player_hits().count_ones(),
                engine.opponent_hits().count_ones(),
                engine.opponent_field().destroyed_ids().len(),
                engine.player_field().destroyed_ids().len(),
            );
            prop_assert_eq!(now.0, last.0 + 1);
            prop_assert_eq!(now.1, last.1 + 1);
            prop_assert!(now.2 >= last.2 && now.3 >= last.3);
            last = now;
            prop_assert!(rounds <= 100);
        }
        match engine.status() {
            GameStatus::PlayerWon => prop_assert!(engine.opponent_field().all_destroyed()),
            GameStatus::OpponentWon => {
                prop_assert!(engine.player_field().all_destroyed());
                prop_assert!(!engine.opponent_field().all_destroyed());
            }
            GameStatus::InProgress => unreachable!(),
        }
    }
}
