//! Monte Carlo Tree Search with fixed-point UCT selection.
//!
//! ## Overview
//!
//! The four classic phases run over an arena-backed tree:
//!
//! - **Selection**: descend by UCT score; unvisited children are taken
//!   first, ties go to the earliest-created child
//! - **Expansion**: a visited leaf gains one child per legal move, all at
//!   once, in enumeration order
//! - **Simulation**: a never-visited node is valued by a uniformly-random
//!   playout to a terminal position
//! - **Backpropagation**: visit counts and scores bubble to the root,
//!   flipping perspective at every ply
//!
//! Every quantity the search compares is an integer [`crate::fixed::Fixed`]
//! value, so identical seeds give identical moves on any platform.
//!
//! ## Usage
//!
//! ```rust
//! use grid_mcts::core::Player;
//! use grid_mcts::games::tictactoe::{Grid, TicTacToe};
//! use grid_mcts::mcts::{UctConfig, UctSearch};
//!
//! let config = UctConfig::default().with_iterations(1_000);
//! let mut search = UctSearch::new(TicTacToe, config);
//!
//! let board = Grid::empty();
//! let cell = search.select_move(&board, Player::X).unwrap();
//! assert!(board.is_empty_cell(cell));
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::UctConfig;
pub use node::{NodeId, SearchNode};
pub use policy::{uct_score, DEFAULT_EXPLORATION};
pub use search::{SearchError, UctSearch};
pub use stats::SearchStats;
pub use tree::SearchTree;
