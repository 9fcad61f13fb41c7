use super::types::{Cell, Position, WIN_CONDITION};
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤面
///
/// `size x size` のグリッド。サイズは生成時に固定され、以後変わらない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// 行優先で並んだマス
    cells: Vec<Cell>,
}

impl Board {
    /// Empty board. Size bounds are checked by `GameConfig::validate`, not here.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_condition(&self) -> usize {
        WIN_CONDITION
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Cell content, `None` when off-board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.in_bounds(pos) {
            Some(self.cells[pos.row * self.size + pos.col])
        } else {
            None
        }
    }

    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Places `player` at `pos`. On failure the board is untouched.
    pub fn try_make_move(&mut self, pos: Position, player: Cell) -> Result<()> {
        if !player.is_player() {
            return Err(GameError::NotAPlayer(player));
        }
        match self.get(pos) {
            None => Err(GameError::OutOfBounds {
                position: pos,
                size: self.size,
            }),
            Some(Cell::Empty) => {
                self.cells[pos.row * self.size + pos.col] = player;
                Ok(())
            }
            Some(occupant) => Err(GameError::CellOccupied {
                position: pos,
                occupant,
            }),
        }
    }

    pub fn make_move(&mut self, pos: Position, player: Cell) -> bool {
        self.try_make_move(pos, player).is_ok()
    }

    /// 探索のアンドゥ用
    pub fn clear_cell(&mut self, pos: Position) {
        if self.in_bounds(pos) {
            self.cells[pos.row * self.size + pos.col] = Cell::Empty;
        }
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Position::new(row, col)))
    }

    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_player()).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.stone_count()
    }

    pub fn is_empty(&self) -> bool {
        self.stone_count() == 0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header: Vec<String> = (0..self.size).map(|i| format!("{:2}", i)).collect();
        writeln!(f, "   {}", header.join("|"))?;
        writeln!(f, "---{}", vec!["--"; self.size].join("+"))?;
        for row in 0..self.size {
            let cells: Vec<String> = (0..self.size)
                .map(|col| format!(" {}", self.cells[row * self.size + col].symbol()))
                .collect();
            writeln!(f, "{:2} |{}", row, cells.join("|"))?;
        }
        Ok(())
    }
}
