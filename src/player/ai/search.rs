use crate::core::Position;
use crate::logic::random_index;
use serde::Serialize;

/// 評価値。勝敗は ±∞ で表す。
pub type Score = f64;

pub const WIN_SCORE: Score = f64::INFINITY;
pub const LOSS_SCORE: Score = f64::NEG_INFINITY;

/// 探索結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult {
    pub score: Score,
    /// `None` only when no candidate move exists at the root of the call.
    pub best_move: Option<Position>,
}

impl SearchResult {
    pub fn leaf(score: Score) -> Self {
        SearchResult {
            score,
            best_move: None,
        }
    }

    pub fn is_win(&self) -> bool {
        self.score == WIN_SCORE
    }

    pub fn is_loss(&self) -> bool {
        self.score == LOSS_SCORE
    }
}

/// Counters collected while walking the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Calls into the recursive search, root included.
    pub nodes: usize,
    /// Calls that returned without expanding (win, loss, depth limit).
    pub leaves: usize,
    /// Candidate loops left early by an alpha-beta cutoff.
    pub cutoffs: usize,
}

/// 既定の最善手を候補からランダムに選ぶ
///
/// Used as `best_move` before any candidate is scored, so equal-score searches
/// do not always return the first candidate.
pub(crate) fn seed_move(moves: &[Position]) -> Option<Position> {
    random_index(moves.len(), &mut rand::thread_rng()).map(|i| moves[i])
}

/// AI が最後に行った探索の記録 (ステータス表示用)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThinkingInfo {
    pub result: SearchResult,
    pub stats: SearchStats,
    pub elapsed_ms: u128,
}

impl std::fmt::Display for ThinkingInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mv = match self.result.best_move {
            Some(pos) => pos.to_string(),
            None => "none".to_string(),
        };
        write!(
            f,
            "-> {} score={} nodes={} cutoffs={} ms={}",
            mv, self.result.score, self.stats.nodes, self.stats.cutoffs, self.elapsed_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_move_is_a_candidate() {
        let moves = vec![Position::new(0, 1), Position::new(2, 2), Position::new(3, 0)];
        for _ in 0..20 {
            let mv = seed_move(&moves).unwrap();
            assert!(moves.contains(&mv));
        }
        assert_eq!(seed_move(&[]), None);
    }

    #[test]
    fn test_thinking_display() {
        let info = ThinkingInfo {
            result: SearchResult {
                score: WIN_SCORE,
                best_move: Some(Position::new(4, 6)),
            },
            stats: SearchStats {
                nodes: 12,
                leaves: 10,
                cutoffs: 1,
            },
            elapsed_ms: 3,
        };
        assert_eq!(info.to_string(), "-> (4, 6) score=inf nodes=12 cutoffs=1 ms=3");
    }
}
