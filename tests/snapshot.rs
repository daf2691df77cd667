//! The snapshot contract shared with the persistence collaborator: JSON
//! round-trips and rejection of malformed board data.

use breakthrough::game::{
    Game, GameSnapshot, Move, Player, Side, SnapshotError, Square, StandardRules,
};
use pretty_assertions::assert_eq;

fn mid_game() -> Game {
    let mut game = Game::new(
        Player::new("Alice", Side::White),
        Player::new("Bob", Side::Black),
        Box::new(StandardRules),
    );
    let script = [("c2", "c3"), ("f7", "f6"), ("c3", "d4"), ("f6", "e5")];
    for (from, to) in script {
        let m = Move::new(
            Square::try_from(from).unwrap(),
            Square::try_from(to).unwrap(),
        );
        assert_eq!(game.try_apply_move(m), Ok(None));
    }
    game
}

#[test]
fn json_roundtrip_reproduces_the_game() {
    let game = mid_game();
    let snapshot = game.snapshot();

    let json = serde_json::to_string_pretty(&snapshot).unwrap();
    let restored_snapshot: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored_snapshot, snapshot);

    let restored = Game::from_snapshot(&restored_snapshot, Box::new(StandardRules)).unwrap();
    assert_eq!(restored.snapshot(), snapshot);
    assert_eq!(restored.turn(), game.turn());
    assert_eq!(restored.ply_count(), game.ply_count());
    assert_eq!(restored.player(Side::White).name(), "Alice");
    assert_eq!(restored.player(Side::Black).name(), "Bob");
}

#[test]
fn loaded_game_continues_normally() {
    let game = mid_game();
    let mut restored = Game::from_snapshot(&game.snapshot(), Box::new(StandardRules)).unwrap();
    // d4 can capture the black pawn on e5.
    let capture = Move::new(
        Square::try_from("d4").unwrap(),
        Square::try_from("e5").unwrap(),
    );
    assert_eq!(restored.try_apply_move(capture), Ok(None));
    assert_eq!(restored.ply_count(), 5);
    assert_eq!(restored.board().count_pieces(Side::Black), 15);
}

#[test]
fn malformed_boards_are_rejected() {
    let base = mid_game().snapshot();

    let mut missing_row = base.clone();
    let _ = missing_row.rows.remove(0);
    assert_eq!(
        Game::from_snapshot(&missing_row, Box::new(StandardRules)).err(),
        Some(SnapshotError::RowCount(7))
    );

    let mut extra_row = base.clone();
    extra_row.rows.push("........".to_owned());
    assert_eq!(
        Game::from_snapshot(&extra_row, Box::new(StandardRules)).err(),
        Some(SnapshotError::RowCount(9))
    );

    let mut long_row = base.clone();
    long_row.rows[5].push('.');
    assert_eq!(
        Game::from_snapshot(&long_row, Box::new(StandardRules)).err(),
        Some(SnapshotError::RowLength { row: 5, len: 9 })
    );

    let mut bad_cell = base;
    bad_cell.rows[0] = "w.......".to_owned();
    assert_eq!(
        Game::from_snapshot(&bad_cell, Box::new(StandardRules)).err(),
        Some(SnapshotError::UnknownCell {
            row: 0,
            col: 0,
            cell: 'w'
        })
    );
}
