//! # grid-mcts
//!
//! A move-selection engine for small, fully-observable, two-player grid
//! games, built on Monte Carlo Tree Search with UCT selection and
//! implemented entirely in integer fixed-point arithmetic.
//!
//! ## Design Principles
//!
//! 1. **No floating point on the search path**: every priority the search
//!    compares is a scaled integer, so the same seed picks the same move
//!    on every platform.
//!
//! 2. **Game-agnostic core**: the engine consumes games through the narrow
//!    [`rules::BoardRules`] trait — legal moves, terminal classification,
//!    move application — and assumes nothing else about the board.
//!
//! 3. **One call, one tree**: each `select_move` call builds its tree in a
//!    private arena and drops it on return. No persistence, no sharing, no
//!    concurrent access.
//!
//! ## Modules
//!
//! - `core`: players and deterministic, forkable RNG
//! - `fixed`: fixed-point log, sqrt, and power primitives
//! - `rules`: the board oracle trait games implement
//! - `mcts`: the search tree, UCT score, and search loop
//! - `games`: bundled reference games (tic-tac-toe)

pub mod core;
pub mod fixed;
pub mod games;
pub mod mcts;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Player, SearchRng};
pub use crate::fixed::{Fixed, SCALE_BITS};
pub use crate::mcts::{
    NodeId, SearchError, SearchNode, SearchStats, SearchTree, UctConfig, UctSearch,
};
pub use crate::rules::{BoardRules, Outcome};
