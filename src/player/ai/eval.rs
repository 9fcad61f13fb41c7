//! # Evaluation Module
//!
//! Static heuristic for positions where the search stops without a winner.
//! The score is signed from the point of view of `maximizing`: positive favours
//! it, negative favours everybody else. Both other player identities are merged
//! into a single "opponent" for scoring.
//!
//! ## Scoring Strategy
//! Every cell is tried as the start of a `WIN_CONDITION`-long window in each of
//! the four line directions. The window is walked cell by cell and, each time an
//! `Empty` cell is met, the stones counted so far contribute:
//! - only `maximizing` stones: `+weight(count)`
//! - only opponent stones: `-weight(count)`
//! - mixed or none: nothing
//!
//! A window with no `Empty` cell (including one cut short by the board edge
//! before reaching an empty cell) contributes nothing.

use crate::core::{Board, Cell, Position};
use crate::logic::LINE_DIRECTIONS;

/// 連の長さごとの重み (長さ 5 は勝利判定側で扱う)
const RUN_WEIGHTS: [i64; 5] = [0, 10, 100, 1_000, 10_000];

pub fn run_weight(count: usize) -> i64 {
    RUN_WEIGHTS.get(count).copied().unwrap_or(0)
}

pub fn evaluate(board: &Board, maximizing: Cell) -> i64 {
    let mut score = 0;
    for &(dr, dc) in LINE_DIRECTIONS.iter() {
        for start in board.positions() {
            score += score_window(board, start, dr, dc, maximizing);
        }
    }
    score
}

/// Contribution of the window starting at `start` along `(dr, dc)`.
pub(crate) fn score_window(
    board: &Board,
    start: Position,
    dr: isize,
    dc: isize,
    maximizing: Cell,
) -> i64 {
    let mut score = 0;
    let mut cnt_max = 0;
    let mut cnt_opp = 0;

    for i in 0..board.win_condition() as isize {
        let cell = match start.offset(dr, dc, i).and_then(|pos| board.get(pos)) {
            Some(cell) => cell,
            None => break,
        };

        if cell == maximizing {
            cnt_max += 1;
        } else if cell.is_player() {
            cnt_opp += 1;
        } else if cnt_max > 0 && cnt_opp == 0 {
            score += run_weight(cnt_max);
        } else if cnt_opp > 0 && cnt_max == 0 {
            score -= run_weight(cnt_opp);
        }
    }
    score
}
