use crate::core::{Board, Cell, Position};
use crate::logic::{random_free_cell_index, valid_moves};
use crate::player::PlayerController;

/// 候補手から一様に選ぶだけの AI (アリーナの基準用)
pub struct RandomAI {
    pub name: String,
    stone: Cell,
}

impl RandomAI {
    pub fn new(name: &str, stone: Cell) -> Self {
        RandomAI {
            name: name.to_string(),
            stone,
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board) -> Option<Position> {
        let moves = valid_moves(board);
        random_free_cell_index(board).and_then(|i| moves.get(i).copied())
    }

    fn stone(&self) -> Cell {
        self.stone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_move_is_candidate() {
        let mut board = Board::new(6);
        board.make_move(Position::new(0, 0), Cell::PlayerHuman);
        let ai = RandomAI::new("Random", Cell::PlayerAlphaBeta);
        for _ in 0..20 {
            let mv = ai.choose_move(&board).unwrap();
            assert!(valid_moves(&board).contains(&mv));
        }
    }
}
