use super::eval::evaluate;
use super::minimax::probe;
use super::search::{seed_move, SearchResult, SearchStats, ThinkingInfo, LOSS_SCORE, WIN_SCORE};
use crate::core::{Board, Cell, Position};
use crate::logic::{check_winner, valid_moves};
use crate::player::PlayerController;
use std::sync::Mutex;
use std::time::Instant;

/// Alpha-Beta 探索
///
/// `depth` is the remaining budget and counts down to 0. The maximizing ply
/// places `PlayerAlphaBeta`, the minimizing ply places `PlayerMinimax`; the
/// human identity never appears in this tree. Call with
/// `alpha = -inf, beta = +inf` for an exact root value.
///
/// The returned score equals the unpruned minimax value over the same
/// identities. The move may differ from the unpruned search among equally
/// scored candidates.
pub fn alpha_beta(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    alpha: f64,
    beta: f64,
) -> SearchResult {
    let mut stats = SearchStats::default();
    alpha_beta_with_stats(board, depth, is_maximizing, alpha, beta, &mut stats)
}

pub fn alpha_beta_with_stats(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    mut alpha: f64,
    mut beta: f64,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;

    if check_winner(board, Cell::PlayerAlphaBeta) {
        stats.leaves += 1;
        return SearchResult::leaf(WIN_SCORE);
    }
    if check_winner(board, Cell::PlayerMinimax) {
        stats.leaves += 1;
        return SearchResult::leaf(LOSS_SCORE);
    }
    if depth == 0 {
        stats.leaves += 1;
        return SearchResult::leaf(evaluate(board, Cell::PlayerAlphaBeta) as f64);
    }

    let moves = valid_moves(board);
    if moves.is_empty() {
        stats.leaves += 1;
        return SearchResult::leaf(evaluate(board, Cell::PlayerAlphaBeta) as f64);
    }

    let mut best_move = seed_move(&moves);

    if is_maximizing {
        let mut max_eval = LOSS_SCORE;
        for (i, &mv) in moves.iter().enumerate() {
            let score = probe(board, mv, Cell::PlayerAlphaBeta, |b| {
                alpha_beta_with_stats(b, depth - 1, false, alpha, beta, stats).score
            });
            if score > max_eval {
                max_eval = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                if i + 1 < moves.len() {
                    stats.cutoffs += 1;
                }
                break;
            }
        }
        SearchResult {
            score: max_eval,
            best_move,
        }
    } else {
        let mut min_eval = WIN_SCORE;
        for (i, &mv) in moves.iter().enumerate() {
            let score = probe(board, mv, Cell::PlayerMinimax, |b| {
                alpha_beta_with_stats(b, depth - 1, true, alpha, beta, stats).score
            });
            if score < min_eval {
                min_eval = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
            if beta <= alpha {
                if i + 1 < moves.len() {
                    stats.cutoffs += 1;
                }
                break;
            }
        }
        SearchResult {
            score: min_eval,
            best_move,
        }
    }
}

pub struct AlphaBetaAI {
    name: String,
    pub depth: usize,
    thinking: Mutex<Option<ThinkingInfo>>,
}

impl AlphaBetaAI {
    pub fn new(name: &str, depth: usize) -> Self {
        Self {
            name: name.to_string(),
            depth,
            thinking: Mutex::new(None),
        }
    }
}

impl PlayerController for AlphaBetaAI {
    fn choose_move(&self, board: &Board) -> Option<Position> {
        let mut scratch = board.clone();
        let mut stats = SearchStats::default();
        let start = Instant::now();

        let result = alpha_beta_with_stats(
            &mut scratch,
            self.depth,
            true,
            LOSS_SCORE,
            WIN_SCORE,
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
        Cell::PlayerAlphaBeta
    }

    fn last_thinking(&self) -> Option<ThinkingInfo> {
        self.thinking.lock().ok().and_then(|slot| *slot)
    }
}
