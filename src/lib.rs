//! Breakthrough: a two-player abstract strategy game on an 8×8 grid. Pieces
//! advance one step forward or capture one step diagonally forward; a game
//! ends by reaching the far edge, eliminating the opponent's pieces, or
//! leaving the opponent without a legal move.
//!
//! The [`game`] module owns all game semantics and performs no I/O;
//! [`storage`] persists snapshots and the scoreboard as JSON files; [`ui`]
//! drives a match from the terminal.

#![warn(missing_docs, variant_size_differences)]
#![warn(
    absolute_paths_not_starting_with_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_lifetimes,
    unused_qualifications
)]
#![warn(
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity
)]

pub mod game;
pub mod storage;
pub mod ui;
