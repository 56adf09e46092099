use seabattle::persist::{read_layout, write_layout, ROUND_LOG_HEADER};
use seabattle::{
    generate_fleet, Battlefield, BoardView, Fleet, GameStatus, GuessResult, RoundLog,
    RoundRecord, RoundReport, Ship, BOARD_SIZE, SHIP_SIZES, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn layout_roundtrip() {
    let mut rng = SmallRng::seed_from_u64(5);
    let fleet = generate_fleet(&mut rng).unwrap();
    let mut buf = Vec::new();
    write_layout(&fleet, &mut buf).unwrap();

    let text = String::from_utf8(buf.clone()).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("ship_id,row,col"));
    assert_eq!(lines.count(), TOTAL_SHIP_CELLS);

    let restored = read_layout(buf.as_slice()).unwrap();
    assert_eq!(restored, fleet);
    assert!(restored.has_lengths(&SHIP_SIZES));
}

#[test]
fn layout_keeps_ship_ids() {
    let csv = "ship_id,row,col\n0,0,0\n0,0,1\n1,5,5\n";
    let fleet = read_layout(csv.as_bytes()).unwrap();
    assert_eq!(fleet.len(), 2);
    assert_eq!(fleet.ship(0).unwrap().cells(), &[(0, 0), (0, 1)]);
    assert_eq!(fleet.owner_of((5, 5)), Some(1));
}

#[test]
fn layout_rejects_bad_input() {
    let gap = "ship_id,row,col\n0,0,0\n2,5,5\n";
    assert!(read_layout(gap.as_bytes()).is_err());

    let touching = "ship_id,row,col\n0,0,0\n1,1,1\n";
    assert!(read_layout(touching.as_bytes()).is_err());

    let off_board = "ship_id,row,col\n0,0,10\n";
    assert!(read_layout(off_board.as_bytes()).is_err());

    let garbage = "ship_id,row,col\nzero,0,0\n";
    assert!(read_layout(garbage.as_bytes()).is_err());
}

#[test]
fn board_serialization() {
    let fleet = Fleet::new(vec![Ship::new(vec![(0, 0)]).unwrap()]).unwrap();
    let mut field = Battlefield::new(fleet);
    let hidden = BoardView::project(&field, false).serialize();
    let shown = BoardView::project(&field, true).serialize();
    assert_eq!(hidden.len(), BOARD_SIZE * BOARD_SIZE);
    assert!(hidden.chars().all(|c| c == '~'));
    assert!(shown.starts_with("S~"));

    field.fire((9, 9));
    field.fire((0, 0));
    let shown = BoardView::project(&field, true).serialize();
    assert!(shown.starts_with("XM"));
    assert!(shown.ends_with('M'));
    assert_eq!(shown.chars().filter(|&c| c == 'M').count(), 4);
}

#[test]
fn board_display_has_headers() {
    let field = Battlefield::new(Fleet::new(vec![]).unwrap());
    let text = BoardView::project(&field, true).to_string();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("  0 1 2 3 4 5 6 7 8 9"));
    assert_eq!(lines.next(), Some("0 ~ ~ ~ ~ ~ ~ ~ ~ ~ ~"));
    assert_eq!(text.lines().count(), BOARD_SIZE + 1);
}

#[test]
fn round_log_writes_header_then_rows() {
    let log = RoundLog::new(Vec::new()).unwrap();
    let text = String::from_utf8(log.into_inner().unwrap()).unwrap();
    assert_eq!(text.trim_end(), ROUND_LOG_HEADER.join(","));

    let field = Battlefield::new(Fleet::new(vec![]).unwrap());
    let view = BoardView::project(&field, true);
    let report = RoundReport {
        turn: 3,
        player_move: (1, 2),
        player_result: GuessResult::ShipDestroyed(4),
        opponent_move: (7, 8),
        opponent_result: GuessResult::Miss,
        status: GameStatus::InProgress,
    };
    let mut log = RoundLog::new(Vec::new()).unwrap();
    log.append(&RoundRecord::new(&report, &view, &view)).unwrap();
    log.append(&RoundRecord::new(&report, &view, &view)).unwrap();
    let text = String::from_utf8(log.into_inner().unwrap()).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    let water = "~".repeat(BOARD_SIZE * BOARD_SIZE);
    assert_eq!(
        lines[1],
        format!("3,1 2,Ship destroyed,7 8,Miss,{},{}", water, water)
    );
}
