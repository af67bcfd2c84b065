#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![doc = include_str!("../README.md")]

/// Module containing the board, mark and move representation.
pub mod types;

/// Search contract shared by all game tree search implementations.
pub mod game_tree_search;

/// Re-exports the `smallvec` crate
pub use smallvec;

/// Re-exports the `thiserror` crate
pub use thiserror;

pub mod prelude {
    pub use crate::game_tree_search::{
        EvalResult, GameTreeSearch, Matchup, Score, SearchCounter, SearchResult,
    };
    pub use crate::types::game_state::{Board, BoardError, Mark, Move, MoveList, WIN_LINES};
}
