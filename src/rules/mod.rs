//! The board oracle: the narrow interface between the engine and a game.

pub mod oracle;

pub use oracle::{BoardRules, Outcome};
