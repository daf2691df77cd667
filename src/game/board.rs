//! Square-centric board representation: an 8×8 grid of optional pieces with
//! no game logic of its own, just storage and enumeration.

use std::fmt::{self, Write};

use thiserror::Error;

use crate::game::core::{Piece, Side, Square, BOARD_WIDTH};

/// Error returned when writing to a cell outside the board.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("({row}, {col}) is outside the board")]
pub struct OutOfRange {
    #[allow(missing_docs)]
    pub row: i8,
    #[allow(missing_docs)]
    pub col: i8,
}

/// The playing field. Each cell holds at most one piece; writes always
/// replace the previous occupant, so the invariant holds by construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
}

impl Board {
    /// Creates a board with no pieces on it, to be filled cell by cell (e.g.
    /// by the snapshot parser).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; BOARD_WIDTH as usize]; BOARD_WIDTH as usize],
        }
    }

    /// Creates a board in the starting setup of the standard game.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// Clears every cell, then places each side's pawns on the two rows
    /// nearest its own edge: Black on rows 0–1 (advancing towards row 7),
    /// White on rows 6–7 (advancing towards row 0).
    pub fn reset(&mut self) {
        self.cells = [[None; BOARD_WIDTH as usize]; BOARD_WIDTH as usize];
        for col in 0..BOARD_WIDTH {
            for row in 0..=1 {
                self.put(Square::new(row, col), Some(Piece::pawn(Side::Black)));
            }
            for row in BOARD_WIDTH - 2..BOARD_WIDTH {
                self.put(Square::new(row, col), Some(Piece::pawn(Side::White)));
            }
        }
    }

    /// Returns the piece at the given square, or `None` when the cell is
    /// empty or the square is outside the board. Never fails.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Piece> {
        if !square.is_inside() {
            return None;
        }
        self.cells[square.row as usize][square.col as usize]
    }

    /// Overwrites the cell at the given square; `None` clears it.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] when the square is outside the board.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Result<(), OutOfRange> {
        if !square.is_inside() {
            return Err(OutOfRange {
                row: square.row,
                col: square.col,
            });
        }
        self.put(square, piece);
        Ok(())
    }

    /// Unchecked write for callers that guarantee the square is inside.
    pub(crate) fn put(&mut self, square: Square, piece: Option<Piece>) {
        debug_assert!(square.is_inside());
        self.cells[square.row as usize][square.col as usize] = piece;
    }

    /// Enumerates all pieces with their squares in row-major order, row 0
    /// first. The iterator is finite, deterministic and restartable.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..BOARD_WIDTH).flat_map(move |row| {
            (0..BOARD_WIDTH).filter_map(move |col| {
                let square = Square::new(row, col);
                self.get(square).map(|piece| (square, piece))
            })
        })
    }

    /// Counts the pieces of one side still on the board.
    #[must_use]
    pub fn count_pieces(&self, side: Side) -> usize {
        self.pieces().filter(|(_, piece)| piece.side == side).count()
    }
}

impl fmt::Debug for Board {
    /// Dumps the grid one row per line, '.' for an empty cell and the piece
    /// symbol otherwise; matches the row strings of the snapshot format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_WIDTH {
            for col in 0..BOARD_WIDTH {
                match self.get(Square::new(row, col)) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => f.write_char('.')?,
                }
            }
            if row != BOARD_WIDTH - 1 {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_board() {
        let board = Board::empty();
        assert_eq!(board.pieces().count(), 0);
        assert_eq!(board.get(Square::new(4, 4)), None);
    }

    #[test]
    fn starting_setup() {
        let board = Board::starting();
        assert_eq!(board.count_pieces(Side::White), 16);
        assert_eq!(board.count_pieces(Side::Black), 16);
        for col in 0..BOARD_WIDTH {
            assert_eq!(
                board.get(Square::new(0, col)),
                Some(Piece::pawn(Side::Black))
            );
            assert_eq!(
                board.get(Square::new(1, col)),
                Some(Piece::pawn(Side::Black))
            );
            assert_eq!(board.get(Square::new(3, col)), None);
            assert_eq!(
                board.get(Square::new(6, col)),
                Some(Piece::pawn(Side::White))
            );
            assert_eq!(
                board.get(Square::new(7, col)),
                Some(Piece::pawn(Side::White))
            );
        }
    }

    #[test]
    fn reset_clears_previous_state() {
        let mut board = Board::empty();
        board
            .set(Square::new(4, 4), Some(Piece::pawn(Side::White)))
            .unwrap();
        board.reset();
        assert_eq!(board.get(Square::new(4, 4)), None);
        assert_eq!(board, Board::starting());
    }

    #[test]
    fn get_outside_is_none() {
        let board = Board::starting();
        assert_eq!(board.get(Square::new(-1, 0)), None);
        assert_eq!(board.get(Square::new(0, 8)), None);
    }

    #[test]
    fn set_outside_is_rejected() {
        let mut board = Board::empty();
        assert_eq!(
            board.set(Square::new(8, 0), Some(Piece::pawn(Side::White))),
            Err(OutOfRange { row: 8, col: 0 })
        );
    }

    #[test]
    fn set_replaces_occupant() {
        let mut board = Board::empty();
        let square = Square::new(5, 2);
        board.set(square, Some(Piece::pawn(Side::White))).unwrap();
        board.set(square, Some(Piece::pawn(Side::Black))).unwrap();
        assert_eq!(board.get(square), Some(Piece::pawn(Side::Black)));
        board.set(square, None).unwrap();
        assert_eq!(board.get(square), None);
    }

    #[test]
    fn enumeration_is_row_major() {
        let mut board = Board::empty();
        board
            .set(Square::new(2, 7), Some(Piece::pawn(Side::Black)))
            .unwrap();
        board
            .set(Square::new(2, 1), Some(Piece::pawn(Side::Black)))
            .unwrap();
        board
            .set(Square::new(0, 3), Some(Piece::pawn(Side::White)))
            .unwrap();
        let squares: Vec<Square> = board.pieces().map(|(square, _)| square).collect();
        assert_eq!(
            squares,
            vec![Square::new(0, 3), Square::new(2, 1), Square::new(2, 7)]
        );
    }

    #[test]
    fn debug_dump() {
        let board = Board::starting();
        let dump = format!("{board:?}");
        let rows: Vec<&str> = dump.lines().collect();
        assert_eq!(rows[0], "BBBBBBBB");
        assert_eq!(rows[1], "BBBBBBBB");
        assert_eq!(rows[4], "........");
        assert_eq!(rows[7], "WWWWWWWW");
    }
}
