use serde::{Deserialize, Serialize};
use std::fmt;

/// 五目並べの勝利条件 (連続する石の数)
pub const WIN_CONDITION: usize = 5;

/// Smallest board the session accepts.
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest board the session accepts.
pub const MAX_BOARD_SIZE: usize = 19;

/// 盤面のマスの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    PlayerHuman,
    PlayerMinimax,
    PlayerAlphaBeta,
}

impl Cell {
    /// The three player identities, in the order the rules check them.
    pub const PLAYERS: [Cell; 3] = [Cell::PlayerHuman, Cell::PlayerMinimax, Cell::PlayerAlphaBeta];

    pub fn players() -> &'static [Cell] {
        &Self::PLAYERS
    }

    pub fn is_player(self) -> bool {
        self != Cell::Empty
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerHuman => 'X',
            Cell::PlayerMinimax => 'M',
            Cell::PlayerAlphaBeta => 'A',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Cell::Empty => "Empty",
            Cell::PlayerHuman => "Human",
            Cell::PlayerMinimax => "Minimax AI",
            Cell::PlayerAlphaBeta => "AlphaBeta AI",
        }
    }
}

/// 盤面座標 (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Step by `(dr, dc)` scaled by `k`, or `None` when the result would be
    /// negative. Upper bounds are the board's concern.
    pub fn offset(self, dr: isize, dc: isize, k: isize) -> Option<Position> {
        let row = self.row as isize + dr * k;
        let col = self.col as isize + dc * k;
        if row < 0 || col < 0 {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_exclude_empty() {
        assert_eq!(Cell::players().len(), 3);
        assert!(Cell::players().iter().all(|c| c.is_player()));
        assert!(!Cell::Empty.is_player());
    }

    #[test]
    fn test_offset_rejects_negative() {
        let p = Position::new(0, 2);
        assert_eq!(p.offset(-1, 0, 1), None);
        assert_eq!(p.offset(1, -1, 2), Some(Position::new(2, 0)));
        assert_eq!(p.offset(0, -1, 3), None);
    }

    #[test]
    fn test_symbols_match_console_layout() {
        let symbols: String = [
            Cell::Empty,
            Cell::PlayerHuman,
            Cell::PlayerMinimax,
            Cell::PlayerAlphaBeta,
        ]
        .iter()
        .map(|c| c.symbol())
        .collect();
        assert_eq!(symbols, ".XMA");
    }
}
