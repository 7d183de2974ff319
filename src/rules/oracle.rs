//! Board oracle contract for game implementations.
//!
//! The engine knows nothing about boards beyond this trait: what moves are
//! legal, whether a position is over, and how a finished position scores.
//! Implementations must be deterministic — `legal_moves` in particular must
//! enumerate in a fixed order, because child creation order doubles as the
//! engine's tie-break rule.

use crate::core::Player;
use crate::fixed::Fixed;

/// Classification of a finished position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// One side has won.
    Win(Player),
    /// Neither side can win.
    Draw,
}

impl Outcome {
    /// Score of this outcome from `player`'s perspective.
    ///
    /// A win scores one unit, a loss zero, a draw half a unit.
    #[must_use]
    pub fn score_for(self, player: Player) -> Fixed {
        match self {
            Outcome::Win(winner) if winner == player => Fixed::ONE,
            Outcome::Win(_) => Fixed::ZERO,
            Outcome::Draw => Fixed::HALF,
        }
    }

    /// Check whether a player won.
    #[must_use]
    pub fn is_win_for(self, player: Player) -> bool {
        matches!(self, Outcome::Win(winner) if winner == player)
    }
}

/// Rules of a small, fully-observable, two-player grid game.
///
/// The search engine only ever mutates private clones of the caller's
/// board, so `apply_move` may mutate freely.
pub trait BoardRules {
    /// Board state. Cloned once per search iteration; keep it cheap.
    type Board: Clone;

    /// Move identifier, typically a cell index.
    type Move: Copy + Eq + std::fmt::Debug;

    /// All playable moves for this position, in a fixed deterministic
    /// order. Empty means no moves remain.
    fn legal_moves(&self, board: &Self::Board) -> Vec<Self::Move>;

    /// Classify the position. `None` means the game continues.
    fn outcome(&self, board: &Self::Board) -> Option<Outcome>;

    /// Play `mv` for `player` on the board.
    fn apply_move(&self, board: &mut Self::Board, mv: Self::Move, player: Player);
}
