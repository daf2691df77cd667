//! File-backed persistence collaborators: game saves and the scoreboard,
//! both stored as pretty-printed JSON. The engine never touches the
//! filesystem itself; everything here consumes or produces the plain-data
//! contracts exposed by [`crate::game`].

pub mod saves;
pub mod scores;

pub use scores::{ScoreEntry, Scoreboard};
