//! Game primitives commonly used within [`crate::game`]: squares, sides,
//! pieces and moves.

use std::fmt::{self, Write};

use arrayvec::ArrayVec;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The board is square, 8 cells a side.
pub const BOARD_WIDTH: i8 = 8;

/// Errors produced while reading algebraic coordinates. These belong to the
/// input layer: a square that failed to parse never reaches the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSquareError {
    /// The token is not exactly two characters long.
    #[error("square should be two characters (e.g. \"a2\"), got \"{0}\"")]
    Length(String),
    /// The first character is not a file letter.
    #[error("file should be within 'a'..='h', got '{0}'")]
    File(char),
    /// The second character is not a rank digit.
    #[error("rank should be within '1'..='8', got '{0}'")]
    Rank(char),
}

/// A cell on the board, addressed by zero-based `(row, col)`.
///
/// Row 0 is the top of the board as rendered (Black's home edge), row 7 the
/// bottom (White's home edge). The fields are signed and deliberately
/// unchecked so that candidate squares one step off the board can be formed
/// and then filtered with [`Square::is_inside`]; a square obtained by parsing
/// algebraic notation is always inside.
///
/// ```
/// use breakthrough::game::core::Square;
///
/// let square = Square::try_from("a1").unwrap();
/// assert_eq!(square, Square::new(7, 0));
/// assert!(square.is_inside());
/// assert!(!Square::new(8, 0).is_inside());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    /// Zero-based row, counted from the top of the rendered board.
    pub row: i8,
    /// Zero-based column; column 0 is file 'a'.
    pub col: i8,
}

impl Square {
    /// Connects a row and a column. No bounds check is performed.
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Pure bounds check: true iff both coordinates are within `0..8`.
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.row >= 0 && self.row < BOARD_WIDTH && self.col >= 0 && self.col < BOARD_WIDTH
    }

    /// Returns the square shifted by the given row and column deltas. The
    /// result may be outside the board.
    #[must_use]
    pub const fn shifted(self, row_delta: i8, col_delta: i8) -> Self {
        Self::new(self.row + row_delta, self.col + col_delta)
    }
}

impl TryFrom<&str> for Square {
    type Error = ParseSquareError;

    /// Parses a square from algebraic notation, e.g. "e2". Input is trimmed
    /// and lowercased first; anything but a file letter followed by a rank
    /// digit is rejected.
    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let input = input.trim().to_lowercase();
        let Some((file, rank)) = input.chars().collect_tuple() else {
            return Err(ParseSquareError::Length(input));
        };
        if !file.is_ascii_lowercase() || file > 'h' {
            return Err(ParseSquareError::File(file));
        }
        if !rank.is_ascii_digit() || rank == '0' || rank == '9' {
            return Err(ParseSquareError::Rank(rank));
        }
        let col = file as i8 - 'a' as i8;
        let row = BOARD_WIDTH - (rank as i8 - '0' as i8);
        Ok(Self::new(row, col))
    }
}

impl fmt::Display for Square {
    /// Formats the square in algebraic notation; the exact inverse of
    /// [`Square::try_from`] for every square inside the board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_assert!(self.is_inside());
        let file = (b'a' + self.col as u8) as char;
        let rank = BOARD_WIDTH - self.row;
        write!(f, "{file}{rank}")
    }
}

/// One of the two players of a match. White sits at the bottom of the
/// rendered board and has the first turn.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// "Flips" the side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::White => "White",
            Self::Black => "Black",
        })
    }
}

/// Kinds of movable units. Breakthrough is played with pawns only, but the
/// board and the snapshot format are kind-agnostic, so adding a variant here
/// is all a new unit type would need at this level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    /// The single standard unit: advances one row forward, captures one cell
    /// diagonally forward.
    Pawn,
}

/// A unit on the board, owned by the cell holding it. Moving a piece
/// transfers it from one cell to another; it is never duplicated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    /// The side that owns the piece.
    pub side: Side,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    /// Creates a pawn for the given side.
    #[must_use]
    pub const fn pawn(side: Side) -> Self {
        Self {
            side,
            kind: PieceKind::Pawn,
        }
    }

    /// Display symbol, also the cell character of the snapshot format.
    #[must_use]
    pub const fn symbol(self) -> char {
        match (self.side, self.kind) {
            (Side::White, PieceKind::Pawn) => 'W',
            (Side::Black, PieceKind::Pawn) => 'B',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

/// A (source, destination) pair. A move carries no piece reference: the piece
/// is resolved from the board at validation time, so moves are safe to build
/// speculatively when enumerating candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    #[allow(missing_docs)]
    pub from: Square,
    #[allow(missing_docs)]
    pub to: Square,
}

impl Move {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    /// Prints the move the way it is entered: two algebraic squares
    /// separated by a space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// Upper bound on the number of legal moves in any position: every occupied
/// cell has at most three candidate targets.
pub const MAX_LEGAL_MOVES: usize = 64 * 3;

/// Stack-allocated list of moves.
pub type MoveList = ArrayVec<Move, MAX_LEGAL_MOVES>;
