use crate::core::Cell;
use crate::error::Result;
use crate::game::Game;
use crate::player::{AlphaBetaAI, MinimaxAI, PlayerController, RandomAI};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Second seat in an arena game. Minimax always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArenaOpponent {
    #[default]
    AlphaBeta,
    /// Uniform random legal moves; a baseline for the minimax AI.
    Random,
}

impl ArenaOpponent {
    pub fn label(self) -> &'static str {
        match self {
            ArenaOpponent::AlphaBeta => "AlphaBeta",
            ArenaOpponent::Random => "Random",
        }
    }

    fn controller(self, alpha_beta_depth: usize) -> Box<dyn PlayerController> {
        match self {
            ArenaOpponent::AlphaBeta => {
                Box::new(AlphaBetaAI::new("AlphaBeta AI", alpha_beta_depth))
            }
            ArenaOpponent::Random => Box::new(RandomAI::new("Random AI", Cell::PlayerAlphaBeta)),
        }
    }
}

pub struct ArenaConfig {
    pub num_games: usize,
    pub opponent: ArenaOpponent,
    pub board_size: usize,
    pub minimax_depth: usize,
    pub alpha_beta_depth: usize,
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Cell>,
    pub moves: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaStats {
    pub total_games: usize,
    pub minimax_wins: usize,
    /// Wins by the second seat, whichever opponent holds it.
    pub opponent_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub opponent: ArenaOpponent,
    pub board_size: usize,
    pub minimax_depth: usize,
    pub alpha_beta_depth: usize,
    pub games: Vec<GameResult>,
}

impl ArenaStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(Cell::PlayerMinimax) => self.minimax_wins += 1,
            Some(Cell::PlayerAlphaBeta) => self.opponent_wins += 1,
            _ => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }

    fn percent(&self, n: usize) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            n as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl fmt::Display for ArenaStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== Arena Results ===")?;
        write!(
            f,
            "Board {}x{} | Minimax depth {} | Opponent {}",
            self.board_size,
            self.board_size,
            self.minimax_depth,
            self.opponent.label()
        )?;
        if self.opponent == ArenaOpponent::AlphaBeta {
            write!(f, " (depth {})", self.alpha_beta_depth)?;
        }
        writeln!(f)?;
        writeln!(f, "Games: {}", self.total_games)?;
        writeln!(
            f,
            "Minimax Wins: {} ({:.1}%)",
            self.minimax_wins,
            self.percent(self.minimax_wins)
        )?;
        writeln!(
            f,
            "{} Wins: {} ({:.1}%)",
            self.opponent.label(),
            self.opponent_wins,
            self.percent(self.opponent_wins)
        )?;
        writeln!(f, "Draws: {} ({:.1}%)", self.draws, self.percent(self.draws))?;
        writeln!(f, "Avg Moves: {:.1}", self.avg_moves)?;
        write!(f, "Avg Time: {:.1}ms", self.avg_time_ms)
    }
}

/// Minimax (先手) 対 `config.opponent` の対局を並列に回す
///
/// Each game owns its board and controllers; rayon only spreads whole games
/// across threads.
pub fn run_arena(config: &ArenaConfig) -> Result<ArenaStats> {
    let results: Vec<GameResult> = (0..config.num_games)
        .into_par_iter()
        .map(|_| run_single_game(config))
        .collect::<Result<Vec<_>>>()?;

    let mut stats = ArenaStats::new();
    stats.opponent = config.opponent;
    stats.board_size = config.board_size;
    stats.minimax_depth = config.minimax_depth;
    stats.alpha_beta_depth = config.alpha_beta_depth;
    for result in results {
        stats.add_result(result);
    }
    Ok(stats)
}

fn run_single_game(config: &ArenaConfig) -> Result<GameResult> {
    let start_time = Instant::now();
    let minimax = MinimaxAI::new("Minimax AI", config.minimax_depth, Cell::PlayerAlphaBeta);
    let opponent = config.opponent.controller(config.alpha_beta_depth);

    let mut game = Game::new(config.board_size);
    game.verbose = config.verbose;
    let outcome = game.play_silent(&minimax, opponent.as_ref())?;

    Ok(GameResult {
        winner: outcome.winner(),
        moves: game.history.len(),
        time_ms: start_time.elapsed().as_millis(),
    })
}
