use crate::core::{Board, Cell, Position};
use rand::Rng;

/// 勝利判定で走査する 4 方向 (縦・横・斜め 2 方向)
pub const LINE_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// 8 近傍
pub const NEIGHBOR_DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// `player` が縦横斜めのいずれかで `WIN_CONDITION` 個連続しているか
///
/// Every cell is tried as a run start; the check is re-run from scratch after
/// each move rather than maintained incrementally.
pub fn check_winner(board: &Board, player: Cell) -> bool {
    if !player.is_player() {
        return false;
    }
    board.positions().any(|start| {
        LINE_DIRECTIONS
            .iter()
            .any(|&(dr, dc)| check_line(board, start, dr, dc, player))
    })
}

fn check_line(board: &Board, start: Position, dr: isize, dc: isize, player: Cell) -> bool {
    (0..board.win_condition() as isize).all(|i| {
        start
            .offset(dr, dc, i)
            .and_then(|pos| board.get(pos))
            .map_or(false, |cell| cell == player)
    })
}

/// First player holding a winning line, checked in `Cell::PLAYERS` order.
pub fn winner(board: &Board) -> Option<Cell> {
    Cell::players()
        .iter()
        .copied()
        .find(|&p| check_winner(board, p))
}

/// 引き分け判定
///
/// True when the move generator offers fewer than two candidates and nobody
/// has a five. With exactly one candidate left the winner check still runs, so
/// a last move that completed a line is not reported as a draw.
pub fn is_draw(board: &Board) -> bool {
    if free_cells_counter(board) > 1 {
        return false;
    }
    winner(board).is_none()
}

/// 候補手生成
///
/// Empty cells touching an occupied cell (8-neighbourhood), each listed once in
/// row-major order. On a board with no stones this falls back to every empty
/// cell.
pub fn valid_moves(board: &Board) -> Vec<Position> {
    let near: Vec<Position> = board
        .positions()
        .filter(|&pos| board.is_valid_move(pos) && has_occupied_neighbor(board, pos))
        .collect();

    if !near.is_empty() {
        return near;
    }

    board
        .positions()
        .filter(|&pos| board.is_valid_move(pos))
        .collect()
}

fn has_occupied_neighbor(board: &Board, pos: Position) -> bool {
    NEIGHBOR_DIRECTIONS.iter().any(|&(dr, dc)| {
        pos.offset(dr, dc, 1)
            .and_then(|n| board.get(n))
            .map_or(false, |cell| cell.is_player())
    })
}

/// Size of `valid_moves`. With stones on the board this counts only
/// generator-eligible cells, not every empty cell.
pub fn free_cells_counter(board: &Board) -> usize {
    valid_moves(board).len()
}

/// 一様乱数で候補手のインデックスを選ぶ (候補が無ければ None)
pub fn random_free_cell_index(board: &Board) -> Option<usize> {
    random_index(free_cells_counter(board), &mut rand::thread_rng())
}

pub fn random_index<R: Rng>(count: usize, rng: &mut R) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(rng.gen_range(0..count))
}
