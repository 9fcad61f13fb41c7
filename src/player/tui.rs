use crate::core::{Board, Cell, Position};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::sync::Mutex;
use std::time::Duration;

/// キーボードで石を置く人間プレイヤー
pub struct TuiController {
    name: String,
    stone: Cell,
    seen: Mutex<(Option<Position>, Vec<String>)>,
}

impl TuiController {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stone: Cell::PlayerHuman,
            seen: Mutex::new((None, Vec::new())),
        }
    }
}

/// Cursor motion clamped to the board.
pub fn step_cursor(cursor: Position, code: KeyCode, size: usize) -> Position {
    let mut next = cursor;
    match code {
        KeyCode::Up if next.row > 0 => next.row -= 1,
        KeyCode::Down if next.row + 1 < size => next.row += 1,
        KeyCode::Left if next.col > 0 => next.col -= 1,
        KeyCode::Right if next.col + 1 < size => next.col += 1,
        _ => {}
    }
    next
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn stone(&self) -> Cell {
        self.stone
    }

    fn is_human(&self) -> bool {
        true
    }

    fn observe(&self, last_move: Option<Position>, info_lines: &[String]) {
        if let Ok(mut seen) = self.seen.lock() {
            *seen = (last_move, info_lines.to_vec());
        }
    }

    fn choose_move(&self, board: &Board) -> Option<Position> {
        let mut state = DisplayState::new();
        state.show_cursor = true;
        if let Ok(seen) = self.seen.lock() {
            state.last_move = seen.0;
            state.info_lines = seen.1.clone();
        }
        // 初期カーソルは直前の手か盤の中央
        state.cursor = state
            .last_move
            .unwrap_or_else(|| Position::new(board.size() / 2, board.size() / 2));
        let prompt = format!("{}'s turn ({})", self.name, self.stone.symbol());
        state.status_msg = Some(prompt.clone());

        loop {
            if render_board(board, &state).is_err() {
                return None;
            }
            print!("[Arrows]: Move | [Enter]: Place | [q]: Resign\r\n");

            if !event::poll(Duration::from_millis(100)).unwrap_or(false) {
                continue;
            }
            let code = match event::read() {
                Ok(Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    ..
                })) => code,
                Ok(_) => continue,
                Err(_) => return None,
            };

            match code {
                KeyCode::Char('q') => return None,
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if board.is_valid_move(state.cursor) {
                        return Some(state.cursor);
                    }
                    state.status_msg = Some(format!(
                        "{} | Invalid move. Cell occupied or out of range.",
                        prompt
                    ));
                }
                other => state.cursor = step_cursor(state.cursor, other, board.size()),
            }
        }
    }
}
