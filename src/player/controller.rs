use crate::core::{Board, Cell, Position};
use crate::player::ai::ThinkingInfo;

/// プレイヤー操作のtrait
pub trait PlayerController: Send + Sync {
    /// `None` means the player has no move (AI: board exhausted, human: resigned).
    fn choose_move(&self, board: &Board) -> Option<Position>;
    fn name(&self) -> &str;
    /// Stone this controller places.
    fn stone(&self) -> Cell;

    fn is_human(&self) -> bool {
        false
    }

    fn last_thinking(&self) -> Option<ThinkingInfo> {
        None
    }

    /// Called by the session before each turn so interactive controllers can
    /// show the opponent's last move and summaries.
    fn observe(&self, _last_move: Option<Position>, _info_lines: &[String]) {}
}
