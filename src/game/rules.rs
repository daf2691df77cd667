//! Pluggable movement-geometry policy. Keeping the forward direction and the
//! winning-row test behind a trait decouples the state machine in
//! [`crate::game::state`] from the standard board orientation, so variants
//! (mirrored setup, different winning rows) can be swapped in without
//! touching [`crate::game::state::Game`].

use crate::game::core::Side;

/// Movement geometry of a game variant. Both functions are pure.
pub trait Rules {
    /// The row delta a piece of the given side advances through on a
    /// non-capturing move: `-1` (towards row 0) or `+1` (towards row 7).
    fn forward_direction(&self, side: Side) -> i8;

    /// True iff a piece of the given side that reaches this row wins the
    /// game immediately.
    fn is_winning_row(&self, side: Side, row: i8) -> bool;
}

/// The standard game: White starts on rows 6–7 and advances towards row 0,
/// Black starts on rows 0–1 and advances towards row 7; each side wins by
/// reaching the far edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRules;

impl Rules for StandardRules {
    fn forward_direction(&self, side: Side) -> i8 {
        match side {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    fn is_winning_row(&self, side: Side, row: i8) -> bool {
        match side {
            Side::White => row == 0,
            Side::Black => row == 7,
        }
    }
}
