//! Bundled game implementations.
//!
//! The engine itself is game-agnostic; these modules provide concrete
//! [`crate::rules::BoardRules`] implementations used by tests, examples,
//! and benchmarks.

pub mod tictactoe;
