//! The game orchestrator: move validation, turn sequencing, win-condition
//! priority and the snapshot views every collaborator (rendering, input,
//! persistence) builds on.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::board::Board;
use crate::game::core::{Move, MoveList, Piece, Side, Square, BOARD_WIDTH};
use crate::game::rules::Rules;

/// A participant of a match: display name plus the side they play, both
/// fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    side: Side,
}

impl Player {
    /// Creates a player record. A blank name defaults to the side's display
    /// name ("White"/"Black"); any other name is trimmed.
    #[must_use]
    pub fn new(name: &str, side: Side) -> Self {
        let name = name.trim();
        let name = if name.is_empty() {
            side.to_string()
        } else {
            name.to_owned()
        };
        Self { name, side }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.side)
    }
}

/// Reasons a move is rejected. Every variant is a normal, recoverable
/// outcome carrying a human-readable explanation; the caller decides whether
/// to re-prompt. Checks run in the order the variants are listed and the
/// first failure short-circuits.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum IllegalMove {
    /// One of the move's endpoints is off the board.
    #[error("both squares must be inside the board")]
    OutOfBounds,
    /// The source cell holds no piece.
    #[error("there is no piece on the source square")]
    EmptySource,
    /// The source piece belongs to the other side.
    #[error("that piece is not yours")]
    WrongOwner,
    /// The destination is not exactly one row forward, or is more than one
    /// column to the side.
    #[error("pieces move exactly one square forward, straight or diagonally")]
    WrongDirection,
    /// The destination holds a piece of the moving side.
    #[error("the destination square is occupied by your own piece")]
    BlockedBySelf,
    /// A straight advance into an occupied cell; captures are diagonal-only.
    #[error("straight moves need an empty destination; capture diagonally instead")]
    BlockedStraightMove,
}

/// Reasons a [`GameSnapshot`] cannot be turned back into a [`Game`]. Unlike
/// [`IllegalMove`], these abort reconstruction outright: a half-built board
/// would break the one-piece-per-cell invariant.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// The snapshot does not have exactly 8 rows.
    #[error("board should have 8 rows, got {0}")]
    RowCount(usize),
    /// A row is not exactly 8 characters long.
    #[error("row {row} should be 8 characters, got {len}")]
    RowLength {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        len: usize,
    },
    /// A cell character outside `{'W', 'B', '.'}`.
    #[error("unknown cell character '{cell}' at row {row}, column {col}")]
    UnknownCell {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        col: usize,
        #[allow(missing_docs)]
        cell: char,
    },
}

/// Plain-data view of a [`Game`], the contract shared with the persistence
/// collaborator. The board is encoded as 8 strings of 8 characters each,
/// 'W'/'B' for pieces and '.' for empty cells, row 0 first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[allow(missing_docs)]
    pub white_name: String,
    #[allow(missing_docs)]
    pub black_name: String,
    /// Side to move.
    pub turn: Side,
    /// Number of moves applied since the game began.
    pub ply_count: u32,
    /// Board rows, top row (row 0) first.
    pub rows: Vec<String>,
}

/// A running match: the board, both players, the side to move, the ply
/// counter and the injected [`Rules`] policy.
///
/// The engine never ends a game on its own initiative: [`Game::try_apply_move`]
/// reports the winner on the move that produced one, and the caller is
/// expected to stop driving the game afterwards.
pub struct Game {
    board: Board,
    white: Player,
    black: Player,
    turn: Side,
    ply_count: u32,
    rules: Box<dyn Rules>,
}

impl Game {
    /// Starts a fresh game with the initial setup, White to move.
    #[must_use]
    pub fn new(white: Player, black: Player, rules: Box<dyn Rules>) -> Self {
        Self {
            board: Board::starting(),
            white,
            black,
            turn: Side::White,
            ply_count: 0,
            rules,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn turn(&self) -> Side {
        self.turn
    }

    /// Number of successfully applied moves since the game began. One ply is
    /// a single-side move, not a full round.
    #[must_use]
    pub const fn ply_count(&self) -> u32 {
        self.ply_count
    }

    /// The player record for the given side.
    #[must_use]
    pub const fn player(&self, side: Side) -> &Player {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> &Player {
        self.player(self.turn)
    }

    /// Validates and applies a move for the side to move.
    ///
    /// On success the piece is relocated (a captured piece, if any, is
    /// discarded), the ply counter is incremented and the win conditions are
    /// evaluated in fixed priority order:
    ///
    /// 1. the mover's piece reached a winning row;
    /// 2. the opponent has no pieces left;
    /// 3. the opponent has no legal move (a blockade loses for the blocked
    ///    side).
    ///
    /// `Ok(Some(side))` reports the winner; `Ok(None)` means the game goes
    /// on and the turn has passed to the opponent.
    ///
    /// # Errors
    ///
    /// [`IllegalMove`] describes the first failed validation check; the game
    /// state is left untouched.
    pub fn try_apply_move(&mut self, m: Move) -> Result<Option<Side>, IllegalMove> {
        let Move { from, to } = m;

        if !from.is_inside() || !to.is_inside() {
            return Err(IllegalMove::OutOfBounds);
        }
        let piece = self.board.get(from).ok_or(IllegalMove::EmptySource)?;
        if piece.side != self.turn {
            return Err(IllegalMove::WrongOwner);
        }

        let row_delta = to.row - from.row;
        let col_delta = to.col - from.col;
        if row_delta != self.rules.forward_direction(self.turn) {
            return Err(IllegalMove::WrongDirection);
        }
        if col_delta.abs() > 1 {
            return Err(IllegalMove::WrongDirection);
        }

        let target = self.board.get(to);
        if target.is_some_and(|occupant| occupant.side == self.turn) {
            return Err(IllegalMove::BlockedBySelf);
        }
        if col_delta == 0 && target.is_some() {
            return Err(IllegalMove::BlockedStraightMove);
        }

        // The move survived every check: a straight advance into an empty
        // cell, a diagonal advance into an empty cell, or a diagonal capture.
        self.board.put(from, None);
        self.board.put(to, Some(piece));
        self.ply_count += 1;

        let winner = self.winner_after_move(to, self.turn);
        if winner.is_none() {
            self.turn = self.turn.opponent();
        }
        Ok(winner)
    }

    /// True iff the side has at least one legal move. Agrees with
    /// [`Game::legal_moves`]: the returned list is non-empty iff this is
    /// true.
    #[must_use]
    pub fn has_any_legal_move(&self, side: Side) -> bool {
        self.board
            .pieces()
            .filter(|(_, piece)| piece.side == side)
            .any(|(square, _)| {
                self.candidate_targets(square, side)
                    .into_iter()
                    .any(|(target, straight)| self.target_playable(side, target, straight))
            })
    }

    /// Enumerates every legal move of the given side: for each piece, the
    /// straight-forward cell (legal iff empty) and both forward-diagonal
    /// cells (legal iff empty or held by the other side). There are no other
    /// candidate moves in the game.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> MoveList {
        let mut moves = MoveList::new();
        for (square, piece) in self.board.pieces() {
            if piece.side != side {
                continue;
            }
            for (target, straight) in self.candidate_targets(square, side) {
                if self.target_playable(side, target, straight) {
                    moves.push(Move::new(square, target));
                }
            }
        }
        moves
    }

    /// The three cells a piece on `square` could move to, paired with
    /// whether the move is a straight advance.
    fn candidate_targets(&self, square: Square, side: Side) -> [(Square, bool); 3] {
        let dir = self.rules.forward_direction(side);
        [
            (square.shifted(dir, 0), true),
            (square.shifted(dir, -1), false),
            (square.shifted(dir, 1), false),
        ]
    }

    fn target_playable(&self, side: Side, target: Square, straight: bool) -> bool {
        if !target.is_inside() {
            return false;
        }
        match self.board.get(target) {
            None => true,
            // An occupied cell only works for a diagonal capture.
            Some(occupant) => !straight && occupant.side != side,
        }
    }

    fn winner_after_move(&self, landed: Square, mover: Side) -> Option<Side> {
        if self.rules.is_winning_row(mover, landed.row) {
            return Some(mover);
        }
        if self.board.count_pieces(mover.opponent()) == 0 {
            return Some(mover);
        }
        if !self.has_any_legal_move(mover.opponent()) {
            return Some(mover);
        }
        None
    }

    /// Encodes the game as a plain-data snapshot for persistence.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let rows = (0..BOARD_WIDTH)
            .map(|row| {
                (0..BOARD_WIDTH)
                    .map(|col| match self.board.get(Square::new(row, col)) {
                        Some(piece) => piece.symbol(),
                        None => '.',
                    })
                    .collect()
            })
            .collect();
        GameSnapshot {
            white_name: self.white.name().to_owned(),
            black_name: self.black.name().to_owned(),
            turn: self.turn,
            ply_count: self.ply_count,
            rows,
        }
    }

    /// Reconstructs a game from a snapshot, cell by cell.
    ///
    /// # Errors
    ///
    /// [`SnapshotError`] when the board data is malformed: wrong row count,
    /// a row of the wrong length, or a cell character outside
    /// `{'W', 'B', '.'}`. No partially-built game escapes.
    pub fn from_snapshot(snapshot: &GameSnapshot, rules: Box<dyn Rules>) -> Result<Self, SnapshotError> {
        if snapshot.rows.len() != BOARD_WIDTH as usize {
            return Err(SnapshotError::RowCount(snapshot.rows.len()));
        }
        let mut board = Board::empty();
        for (row, cells) in snapshot.rows.iter().enumerate() {
            if cells.chars().count() != BOARD_WIDTH as usize {
                return Err(SnapshotError::RowLength {
                    row,
                    len: cells.chars().count(),
                });
            }
            for (col, cell) in cells.chars().enumerate() {
                let piece = match cell {
                    'W' => Some(Piece::pawn(Side::White)),
                    'B' => Some(Piece::pawn(Side::Black)),
                    '.' => None,
                    _ => return Err(SnapshotError::UnknownCell { row, col, cell }),
                };
                board.put(Square::new(row as i8, col as i8), piece);
            }
        }
        Ok(Self {
            board,
            white: Player::new(&snapshot.white_name, Side::White),
            black: Player::new(&snapshot.black_name, Side::Black),
            turn: snapshot.turn,
            ply_count: snapshot.ply_count,
            rules,
        })
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?}", self.board)?;
        writeln!(f, "Turn: {} ({})", self.current_player().name(), self.turn)?;
        write!(f, "Plies: {}", self.ply_count)
    }
}
