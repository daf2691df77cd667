//! Text rendering of the board and the static help screen.

use crate::game::core::{Square, BOARD_WIDTH};
use crate::game::Game;

/// Rules and command reference printed by `:help` and the main menu.
pub const HELP: &str = "\
Rules (in short):
- Pieces move one square forward, straight or diagonally (into empty cells).
- Captures are one square diagonally forward, onto an opposing piece.
- Win by reaching the opposite edge of the board, taking every opposing
  piece, or leaving the opponent without a legal move.

Enter a move as two squares: a2 a3
Commands:
- :menu   abandon the match, back to the main menu
- :exit   quit
- :help   this text
- :moves  list legal moves for the side to move
- :save [file.json]  (default save.json)
- :load [file.json]  (default save.json)
- :scores show the record table
";

/// Renders the full in-game screen: a status line and the board with file
/// letters and rank numbers on the margins.
#[must_use]
pub fn render(game: &Game) -> String {
    let mut out = String::new();
    out.push_str("Breakthrough\n");
    out.push_str(&format!(
        "Turn: {} ({})   |   Plies: {}\n",
        game.current_player().name(),
        game.turn(),
        game.ply_count()
    ));
    out.push_str("Commands: :menu, :exit, :help, :moves, :save [file], :load [file], :scores\n");
    out.push_str("Move: two squares, e.g.  a2 a3\n\n");

    out.push_str(&file_letters());
    for row in 0..BOARD_WIDTH {
        let rank = BOARD_WIDTH - row;
        out.push_str(&format!(" {rank} "));
        for col in 0..BOARD_WIDTH {
            match game.board().get(Square::new(row, col)) {
                Some(piece) => out.push_str(&format!(" {} ", piece.symbol())),
                None => out.push_str(" . "),
            }
        }
        out.push_str(&format!(" {rank}\n"));
    }
    out.push_str(&file_letters());
    out
}

fn file_letters() -> String {
    let mut line = String::from("   ");
    for col in 0..BOARD_WIDTH {
        line.push_str(&format!(" {} ", (b'a' + col as u8) as char));
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::game::{Player, Side, StandardRules};

    #[test]
    fn fresh_board_rendering() {
        let game = Game::new(
            Player::new("Alice", Side::White),
            Player::new("Bob", Side::Black),
            Box::new(StandardRules),
        );
        let screen = render(&game);
        let lines: Vec<&str> = screen.lines().collect();
        assert_eq!(lines[0], "Breakthrough");
        assert_eq!(lines[1], "Turn: Alice (White)   |   Plies: 0");
        assert_eq!(lines[5], "    a  b  c  d  e  f  g  h ");
        // Rank 8 is the top row and belongs to Black.
        assert_eq!(lines[6], " 8  B  B  B  B  B  B  B  B  8");
        assert_eq!(lines[9], " 5  .  .  .  .  .  .  .  .  5");
        assert_eq!(lines[13], " 1  W  W  W  W  W  W  W  W  1");
        assert_eq!(lines[14], "    a  b  c  d  e  f  g  h ");
    }
}
