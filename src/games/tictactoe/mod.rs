//! Tic-tac-toe: the reference grid game.

pub mod game;

pub use game::{Grid, TicTacToe, CELLS, SIZE};
