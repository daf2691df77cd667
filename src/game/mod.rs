//! The rule engine: board representation, move legality, turn sequencing and
//! win-condition priority. Everything here is pure and synchronous; file and
//! console I/O live in [`crate::storage`] and [`crate::ui`].

pub mod board;
pub mod core;
pub mod rules;
pub mod state;

pub use board::Board;
pub use core::{Move, Piece, PieceKind, Side, Square};
pub use rules::{Rules, StandardRules};
pub use state::{Game, GameSnapshot, IllegalMove, Player, SnapshotError};
