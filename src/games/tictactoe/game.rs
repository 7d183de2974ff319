//! Tic-tac-toe rules implementation.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::rules::{BoardRules, Outcome};

/// Grid side length.
pub const SIZE: usize = 3;

/// Number of cells on the grid; also the search tree's branching factor.
pub const CELLS: usize = SIZE * SIZE;

/// The eight winning lines: rows, columns, diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 board. Cells are indexed 0..9, row-major from the top left.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [Option<Player>; CELLS],
}

impl Grid {
    /// An empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a board from three rows of `X`, `O`, and `.` characters.
    ///
    /// Intended for tests and examples; panics on malformed rows.
    #[must_use]
    pub fn from_rows(rows: [&str; SIZE]) -> Self {
        let mut grid = Self::empty();
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), SIZE, "row {} must have {} cells", r, SIZE);
            for (c, ch) in row.chars().enumerate() {
                grid.cells[r * SIZE + c] = match ch {
                    'X' => Some(Player::X),
                    'O' => Some(Player::O),
                    '.' => None,
                    _ => panic!("unexpected cell character {:?}", ch),
                };
            }
        }
        grid
    }

    /// The mark in a cell, if any.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Player> {
        self.cells[index]
    }

    /// Whether a cell is playable.
    #[must_use]
    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.cells[index].is_none()
    }

    /// Place a mark in a cell.
    pub fn place(&mut self, index: usize, player: Player) {
        debug_assert!(self.cells[index].is_none(), "cell {} already taken", index);
        self.cells[index] = Some(player);
    }

    /// Whether every cell is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let ch = match self.cells[row * SIZE + col] {
                    Some(p) => p.mark(),
                    None => '.',
                };
                write!(f, "{}", ch)?;
            }
            if row + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Tic-tac-toe rules. Stateless; all state lives in the [`Grid`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl BoardRules for TicTacToe {
    type Board = Grid;
    type Move = usize;

    fn legal_moves(&self, board: &Grid) -> Vec<usize> {
        (0..CELLS).filter(|&i| board.is_empty_cell(i)).collect()
    }

    fn outcome(&self, board: &Grid) -> Option<Outcome> {
        for line in &LINES {
            if let Some(player) = board.cell(line[0]) {
                if board.cell(line[1]) == Some(player) && board.cell(line[2]) == Some(player) {
                    return Some(Outcome::Win(player));
                }
            }
        }
        board.is_full().then_some(Outcome::Draw)
    }

    fn apply_move(&self, board: &mut Grid, mv: usize, player: Player) {
        board.place(mv, player);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let grid = Grid::empty();
        assert!(!grid.is_full());
        assert_eq!(TicTacToe.legal_moves(&grid), (0..CELLS).collect::<Vec<_>>());
        assert_eq!(TicTacToe.outcome(&grid), None);
    }

    #[test]
    fn test_from_rows_round_trip() {
        let grid = Grid::from_rows(["XO.", ".X.", "..O"]);
        assert_eq!(grid.cell(0), Some(Player::X));
        assert_eq!(grid.cell(1), Some(Player::O));
        assert_eq!(grid.cell(4), Some(Player::X));
        assert_eq!(grid.cell(8), Some(Player::O));
        assert_eq!(format!("{}", grid), "XO.\n.X.\n..O");
    }

    #[test]
    fn test_row_win() {
        let grid = Grid::from_rows(["XXX", "OO.", "..."]);
        assert_eq!(TicTacToe.outcome(&grid), Some(Outcome::Win(Player::X)));
    }

    #[test]
    fn test_column_win() {
        let grid = Grid::from_rows(["OX.", "OX.", "O.X"]);
        assert_eq!(TicTacToe.outcome(&grid), Some(Outcome::Win(Player::O)));
    }

    #[test]
    fn test_diagonal_win() {
        let grid = Grid::from_rows(["X.O", ".XO", "..X"]);
        assert_eq!(TicTacToe.outcome(&grid), Some(Outcome::Win(Player::X)));
    }

    #[test]
    fn test_draw_on_full_board() {
        let grid = Grid::from_rows(["XOX", "XOO", "OXX"]);
        assert_eq!(TicTacToe.outcome(&grid), Some(Outcome::Draw));
    }

    #[test]
    fn test_legal_moves_in_ascending_order() {
        let grid = Grid::from_rows(["X.O", "...", ".X."]);
        assert_eq!(TicTacToe.legal_moves(&grid), vec![1, 3, 4, 5, 6, 8]);
    }

    #[test]
    fn test_apply_move() {
        let mut grid = Grid::empty();
        TicTacToe.apply_move(&mut grid, 4, Player::X);
        assert_eq!(grid.cell(4), Some(Player::X));
        assert!(!grid.is_empty_cell(4));
    }

    #[test]
    fn test_serialization() {
        let grid = Grid::from_rows(["X..", ".O.", "..X"]);
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, back);
    }
}
