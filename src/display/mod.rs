use crate::core::{Board, Cell, Position};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::{self, stdout, Write};

pub struct DisplayState {
    pub cursor: Position,
    pub status_msg: Option<String>,
    /// Extra lines under the board (AI thinking summaries).
    pub info_lines: Vec<String>,
    pub last_move: Option<Position>,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Position::default(),
            status_msg: None,
            info_lines: Vec::new(),
            last_move: None,
            show_cursor: false,
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Cell text for the terminal grid: `[X]` cursor, `{X}` last move, ` X ` otherwise.
pub fn cell_text(board: &Board, pos: Position, state: &DisplayState) -> String {
    let symbol = board.get(pos).unwrap_or_default().symbol();
    let (prefix, suffix) = if state.show_cursor && state.cursor == pos {
        ("[", "]")
    } else if state.last_move == Some(pos) {
        ("{", "}")
    } else {
        (" ", " ")
    };
    format!("{}{}{}", prefix, symbol, suffix)
}

pub fn render_board(board: &Board, state: &DisplayState) -> io::Result<()> {
    let mut out = stdout();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    print!("=== Gomoku Duel ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    // 列ラベル
    print!("    ");
    for col in 0..board.size() {
        print!("{:^3}", col);
    }
    print!("\r\n");
    print!("   +{}+\r\n", "---".repeat(board.size()));

    for row in 0..board.size() {
        print!("{:2} |", row);
        for col in 0..board.size() {
            let pos = Position::new(row, col);
            let text = cell_text(board, pos, state);

            if state.show_cursor && state.cursor == pos {
                print!("{}", text.yellow());
            } else if state.last_move == Some(pos) {
                print!("{}", text.red());
            } else {
                match board.get(pos) {
                    Some(Cell::PlayerHuman) => print!("{}", text.cyan()),
                    Some(Cell::PlayerMinimax) => print!("{}", text.magenta()),
                    Some(Cell::PlayerAlphaBeta) => print!("{}", text.green()),
                    _ => print!("{}", text),
                }
            }
        }
        print!("|\r\n");
    }
    print!("   +{}+\r\n", "---".repeat(board.size()));

    for line in &state.info_lines {
        print!("{}\r\n", line);
    }
    out.flush()
}
