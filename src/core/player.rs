//! Player marks for two-player grid games.

use serde::{Deserialize, Serialize};

/// One of the two players, identified by the mark it places on the grid.
///
/// The engine is strictly two-player: every ply flips the side to move,
/// and backpropagation inverts scores on the way up for the same reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opposing player.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark character, as it would appear on a printed board.
    #[must_use]
    pub const fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_involution() {
        assert_eq!(Player::X.other(), Player::O);
        assert_eq!(Player::O.other(), Player::X);
        assert_eq!(Player::X.other().other(), Player::X);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::X), "X");
        assert_eq!(format!("{}", Player::O), "O");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Player::O).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Player::O);
    }
}
