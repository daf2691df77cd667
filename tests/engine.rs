//! End-to-end games driven through the public API.

use breakthrough::game::{Game, IllegalMove, Move, Player, Side, Square, StandardRules};
use pretty_assertions::assert_eq;

fn fresh_game() -> Game {
    Game::new(
        Player::new("Alice", Side::White),
        Player::new("Bob", Side::Black),
        Box::new(StandardRules),
    )
}

fn mv(from: &str, to: &str) -> Move {
    Move::new(
        Square::try_from(from).unwrap(),
        Square::try_from(to).unwrap(),
    )
}

#[test]
fn scripted_game_to_an_edge_win() {
    let mut game = fresh_game();
    // White marches up the a-file, captures into b7 and breaks through on
    // c8; Black wastes time on the h-side.
    let quiet_moves = [
        ("a2", "a3"),
        ("h7", "h6"),
        ("a3", "a4"),
        ("h6", "h5"),
        ("a4", "a5"),
        ("h5", "h4"),
        ("a5", "a6"),
        ("g7", "g6"),
        ("a6", "b7"), // diagonal capture
        ("g6", "g5"),
    ];
    for (ply, (from, to)) in quiet_moves.iter().enumerate() {
        assert_eq!(game.try_apply_move(mv(from, to)), Ok(None), "move {ply}");
        assert_eq!(game.ply_count(), ply as u32 + 1);
    }
    assert_eq!(game.turn(), Side::White);

    // Capturing into c8 reaches Black's home edge: immediate win, even
    // though both sides still have pieces.
    assert_eq!(game.try_apply_move(mv("b7", "c8")), Ok(Some(Side::White)));
    assert_eq!(game.ply_count(), 11);
    assert!(game.board().count_pieces(Side::Black) > 0);
}

#[test]
fn rejected_moves_do_not_advance_the_game() {
    let mut game = fresh_game();
    let attempts = [
        (mv("a2", "a4"), IllegalMove::WrongDirection),
        (mv("a1", "a2"), IllegalMove::BlockedBySelf),
        (mv("a7", "a6"), IllegalMove::WrongOwner),
        (mv("a4", "a5"), IllegalMove::EmptySource),
        (
            Move::new(Square::new(6, 0), Square::new(5, -1)),
            IllegalMove::OutOfBounds,
        ),
    ];
    for (m, expected) in attempts {
        assert_eq!(game.try_apply_move(m), Err(expected));
    }
    assert_eq!(game.ply_count(), 0);
    assert_eq!(game.turn(), Side::White);
    assert_eq!(game.snapshot(), fresh_game().snapshot());
}

#[test]
fn move_listing_matches_what_the_engine_accepts() {
    let mut game = fresh_game();
    let _ = game.try_apply_move(mv("d2", "d3")).unwrap();
    let _ = game.try_apply_move(mv("e7", "e6")).unwrap();

    let legal = game.legal_moves(game.turn());
    assert!(game.has_any_legal_move(game.turn()));
    for m in &legal {
        let mut probe = Game::from_snapshot(&game.snapshot(), Box::new(StandardRules)).unwrap();
        assert!(
            probe.try_apply_move(*m).is_ok(),
            "listed move {m} was rejected"
        );
    }
}
