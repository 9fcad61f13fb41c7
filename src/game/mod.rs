use crate::core::{Board, Cell, Position};
use crate::display::{render_board, DisplayState};
use crate::error::{GameError, Result};
use crate::logic::{check_winner, is_draw};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode};
use std::fmt;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

/// 対局結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Cell),
    Draw,
    /// A human controller gave up its turn.
    Resigned(Cell),
    /// An AI found no candidate move; treated as a draw.
    NoMoves,
    /// Interactive session left with `q` while an AI was thinking.
    Abandoned,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Cell> {
        match self {
            GameOutcome::Win(cell) => Some(*cell),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameOutcome::Win(Cell::PlayerHuman) => write!(f, "Congratulations, you win!"),
            GameOutcome::Win(cell) => write!(f, "{} wins!", cell.label()),
            GameOutcome::Draw => write!(f, "Game is a draw."),
            GameOutcome::Resigned(cell) => write!(f, "{} resigned.", cell.label()),
            GameOutcome::NoMoves => write!(f, "No moves left - game over."),
            GameOutcome::Abandoned => write!(f, "Game abandoned."),
        }
    }
}

/// One game on one board. Players alternate starting with the first
/// controller passed to `play` / `play_silent`.
pub struct Game {
    pub board: Board,
    /// 着手履歴 (メモリ上のみ)
    pub history: Vec<(Cell, Position)>,
    /// Print one `[AI]` line per AI move to stderr.
    pub verbose: bool,
}

impl Game {
    pub fn new(board_size: usize) -> Self {
        Game {
            board: Board::new(board_size),
            history: Vec::new(),
            verbose: false,
        }
    }

    pub fn last_move(&self) -> Option<Position> {
        self.history.last().map(|&(_, pos)| pos)
    }

    /// Applies `mv` for `controller` and reports the outcome if the game ended.
    pub fn apply(
        &mut self,
        controller: &dyn PlayerController,
        mv: Position,
    ) -> Result<Option<GameOutcome>> {
        let stone = controller.stone();
        if !self.board.make_move(mv, stone) {
            return Err(GameError::IllegalMove {
                player: stone.label(),
                position: mv,
            });
        }
        self.history.push((stone, mv));

        if check_winner(&self.board, stone) {
            return Ok(Some(GameOutcome::Win(stone)));
        }
        if is_draw(&self.board) {
            return Ok(Some(GameOutcome::Draw));
        }
        Ok(None)
    }

    fn no_move_outcome(controller: &dyn PlayerController) -> GameOutcome {
        if controller.is_human() {
            GameOutcome::Resigned(controller.stone())
        } else {
            GameOutcome::NoMoves
        }
    }

    /// `[AI]` line for the last search of `controller`, when verbose.
    fn report_line(&self, controller: &dyn PlayerController) -> Option<String> {
        if !self.verbose {
            return None;
        }
        controller
            .last_thinking()
            .map(|info| format!("[AI] {} {}", controller.name(), info))
    }

    /// Runs the game to the end without touching the terminal.
    pub fn play_silent(
        &mut self,
        p1: &dyn PlayerController,
        p2: &dyn PlayerController,
    ) -> Result<GameOutcome> {
        let mut turn = 0;
        loop {
            let controller = if turn % 2 == 0 { p1 } else { p2 };
            let mv = match controller.choose_move(&self.board) {
                Some(mv) => mv,
                None => return Ok(Self::no_move_outcome(controller)),
            };
            if let Some(line) = self.report_line(controller) {
                eprintln!("{}", line);
            }
            if let Some(outcome) = self.apply(controller, mv)? {
                return Ok(outcome);
            }
            turn += 1;
        }
    }

    /// Interactive loop: renders after every move and runs AI searches on a
    /// worker thread so `q` stays responsive. Search reports go to the info
    /// lines under the board, never to stderr, while the screen is in raw mode.
    pub fn play(
        &mut self,
        p1: Arc<dyn PlayerController>,
        p2: Arc<dyn PlayerController>,
    ) -> Result<GameOutcome> {
        let mut turn = 0;
        let mut info_lines: Vec<String> = Vec::new();

        loop {
            let controller = if turn % 2 == 0 { &p1 } else { &p2 };

            let mv = if controller.is_human() {
                controller.observe(self.last_move(), &info_lines);
                controller.choose_move(&self.board)
            } else {
                let mut state = DisplayState::new();
                state.last_move = self.last_move();
                state.info_lines = info_lines.clone();
                state.status_msg = Some(format!("{} is thinking... ([q]: Quit)", controller.name()));
                render_board(&self.board, &state)?;

                match self.think_in_background(Arc::clone(controller))? {
                    Some(choice) => choice,
                    None => return Ok(GameOutcome::Abandoned),
                }
            };

            let mv = match mv {
                Some(mv) => mv,
                None => return Ok(Self::no_move_outcome(controller.as_ref())),
            };

            if let Some(info) = controller.last_thinking() {
                info_lines = vec![format!("{} {}", controller.name(), info)];
            }

            if let Some(outcome) = self.apply(controller.as_ref(), mv)? {
                let mut state = DisplayState::new();
                state.last_move = self.last_move();
                state.info_lines = info_lines;
                state.status_msg = Some(outcome.to_string());
                render_board(&self.board, &state)?;
                return Ok(outcome);
            }
            turn += 1;
        }
    }

    /// `Ok(None)` when the user quit before the search finished.
    fn think_in_background(
        &self,
        controller: Arc<dyn PlayerController>,
    ) -> Result<Option<Option<Position>>> {
        let snapshot = self.board.clone();
        let name = controller.name().to_string();
        let (tx, rx) = mpsc::channel();

        // 探索は盤面のコピー上で行う
        std::thread::spawn(move || {
            let _ = tx.send(controller.choose_move(&snapshot));
        });

        loop {
            match rx.recv_timeout(Duration::from_millis(100)) {
                Ok(choice) => return Ok(Some(choice)),
                Err(RecvTimeoutError::Timeout) => {
                    if quit_requested()? {
                        return Ok(None);
                    }
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(GameError::SearchFailed { player: name });
                }
            }
        }
    }
}

fn quit_requested() -> Result<bool> {
    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if key.code == KeyCode::Char('q') {
                return Ok(true);
            }
        }
    }
    Ok(false)
}
