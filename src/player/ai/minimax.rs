use super::eval::evaluate;
use super::search::{seed_move, SearchResult, SearchStats, ThinkingInfo, LOSS_SCORE, WIN_SCORE};
use crate::core::{Board, Cell, Position};
use crate::logic::{check_winner, valid_moves};
use crate::player::PlayerController;
use std::sync::Mutex;
use std::time::Instant;

/// 固定深さのミニマックス探索 (枝刈りなし)
///
/// `depth` counts up from the root until it reaches `depth_limit`. The
/// maximizing ply places `PlayerMinimax`, the minimizing ply always places
/// `PlayerHuman` whatever `current_player` is. `current_player` only feeds the
/// loss check of this call; nested calls model the human again.
///
/// The board is returned to its original contents before this returns.
pub fn minimax(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    depth_limit: usize,
    current_player: Cell,
) -> SearchResult {
    let mut stats = SearchStats::default();
    minimax_with_stats(
        board,
        depth,
        is_maximizing,
        depth_limit,
        current_player,
        &mut stats,
    )
}

pub fn minimax_with_stats(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    depth_limit: usize,
    current_player: Cell,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;

    if check_winner(board, Cell::PlayerMinimax) {
        stats.leaves += 1;
        return SearchResult::leaf(WIN_SCORE);
    }
    if check_winner(board, current_player) {
        stats.leaves += 1;
        return SearchResult::leaf(LOSS_SCORE);
    }
    if depth >= depth_limit {
        stats.leaves += 1;
        return SearchResult::leaf(evaluate(board, Cell::PlayerMinimax) as f64);
    }

    let moves = valid_moves(board);
    if moves.is_empty() {
        // 盤面が埋まった
        stats.leaves += 1;
        return SearchResult::leaf(evaluate(board, Cell::PlayerMinimax) as f64);
    }

    let mut best_move = seed_move(&moves);

    if is_maximizing {
        let mut max_eval = LOSS_SCORE;
        for &mv in &moves {
            let score = probe(board, mv, Cell::PlayerMinimax, |b| {
                minimax_with_stats(b, depth + 1, false, depth_limit, Cell::PlayerHuman, stats).score
            });
            if score > max_eval {
                max_eval = score;
                best_move = Some(mv);
            }
        }
        SearchResult {
            score: max_eval,
            best_move,
        }
    } else {
        let mut min_eval = WIN_SCORE;
        for &mv in &moves {
            let score = probe(board, mv, Cell::PlayerHuman, |b| {
                minimax_with_stats(b, depth + 1, true, depth_limit, Cell::PlayerHuman, stats).score
            });
            if score < min_eval {
                min_eval = score;
                best_move = Some(mv);
            }
        }
        SearchResult {
            score: min_eval,
            best_move,
        }
    }
}

/// Places `stone` at `mv`, runs `f`, then clears the cell again.
pub(crate) fn probe<F>(board: &mut Board, mv: Position, stone: Cell, f: F) -> f64
where
    F: FnOnce(&mut Board) -> f64,
{
    let placed = board.make_move(mv, stone);
    debug_assert!(placed, "generator produced an occupied cell {}", mv);
    let score = f(board);
    board.clear_cell(mv);
    score
}

pub struct MinimaxAI {
    pub name: String,
    pub depth_limit: usize,
    /// Identity checked for an opponent win at the root of each search.
    pub opponent: Cell,
    thinking: Mutex<Option<ThinkingInfo>>,
}

impl MinimaxAI {
    pub fn new(name: &str, depth_limit: usize, opponent: Cell) -> Self {
        Self {
            name: name.to_string(),
            depth_limit,
            opponent,
            thinking: Mutex::new(None),
        }
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board) -> Option<Position> {
        // 呼び出し元の盤面は触らない
        let mut scratch = board.clone();
        let mut stats = SearchStats::default();
        let start = Instant::now();

        let result = minimax_with_stats(
            &mut scratch,
            0,
            true,
            self.depth_limit,
            self.opponent,
            &mut stats,
        );

        if let Ok(mut slot) = self.thinking.lock() {
            *slot = Some(ThinkingInfo {
                result,
                stats,
                elapsed_ms: start.elapsed().as_millis(),
            });
        }
        result.best_move
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn stone(&self) -> Cell {
        Cell::PlayerMinimax
    }

    fn last_thinking(&self) -> Option<ThinkingInfo> {
        self.thinking.lock().ok().and_then(|slot| *slot)
    }
}
