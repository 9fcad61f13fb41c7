use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{execute, terminal};
use gomoku_duel::config::{GameConfig, GameMode, DEFAULT_CONFIG_PATH};
use gomoku_duel::core::Cell;
use gomoku_duel::game::{Game, GameOutcome};
use gomoku_duel::player::{AlphaBetaAI, MinimaxAI, PlayerController, TuiController};
use gomoku_duel::selfplay::{run_arena, ArenaConfig, ArenaOpponent};
use gomoku_duel::ui;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "gomoku-duel")]
#[command(version, about = "Five in a row against minimax and alpha-beta AIs", long_about = None)]
struct Cli {
    /// JSON config file (missing file means defaults)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Board size (5-19)
    #[arg(long)]
    size: Option<usize>,

    /// Depth limit for the minimax AI
    #[arg(long)]
    minimax_depth: Option<usize>,

    /// Depth for the alpha-beta AI
    #[arg(long)]
    alpha_beta_depth: Option<usize>,

    /// Print one line per AI move to stderr (arena only; interactive games show it under the board)
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively in the terminal
    Play {
        /// Skip the setup prompts and use the config / flags as given
        #[arg(long)]
        quick: bool,

        /// Start Minimax vs AlphaBeta instead of Human vs Minimax (skips the mode menu)
        #[arg(long)]
        ai_vs_ai: bool,
    },
    /// Run Minimax vs AlphaBeta games in parallel and print statistics
    Arena {
        #[arg(long, default_value_t = 10)]
        games: usize,

        /// Who plays second against the minimax AI
        #[arg(long, value_enum, default_value_t = OpponentArg::AlphaBeta)]
        opponent: OpponentArg,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OpponentArg {
    AlphaBeta,
    Random,
}

impl From<OpponentArg> for ArenaOpponent {
    fn from(arg: OpponentArg) -> Self {
        match arg {
            OpponentArg::AlphaBeta => ArenaOpponent::AlphaBeta,
            OpponentArg::Random => ArenaOpponent::Random,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::load_from_or_default(&cli.config);
    if let Some(size) = cli.size {
        config.board_size = size;
    }
    if let Some(depth) = cli.minimax_depth {
        config.minimax_depth = depth;
    }
    if let Some(depth) = cli.alpha_beta_depth {
        config.alpha_beta_depth = depth;
    }

    match cli.command {
        Some(Commands::Arena {
            games,
            opponent,
            json,
        }) => run_arena_command(&config, games, opponent.into(), json, cli.verbose),
        Some(Commands::Play { quick, ai_vs_ai }) => {
            let setup = Setup::from_flags(quick, ai_vs_ai);
            if ai_vs_ai {
                config.mode = GameMode::MinimaxVsAlphaBeta;
            }
            run_interactive(config, setup)
        }
        None => run_interactive(config, Setup::Full),
    }
}

fn run_arena_command(
    config: &GameConfig,
    games: usize,
    opponent: ArenaOpponent,
    json: bool,
    verbose: bool,
) -> Result<()> {
    config.validate()?;
    let stats = run_arena(&ArenaConfig {
        num_games: games,
        opponent,
        board_size: config.board_size,
        minimax_depth: config.minimax_depth,
        alpha_beta_depth: config.alpha_beta_depth,
        verbose,
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", stats);
    }
    Ok(())
}

/// How much of the setup menu to show before a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Setup {
    /// Mode menu and all prompts.
    Full,
    /// Mode already chosen on the command line; prompts only.
    FixedMode,
    /// No prompts at all.
    Quick,
}

impl Setup {
    fn from_flags(quick: bool, ai_vs_ai: bool) -> Self {
        if quick {
            Setup::Quick
        } else if ai_vs_ai {
            Setup::FixedMode
        } else {
            Setup::Full
        }
    }

    fn asks_mode(self) -> bool {
        self == Setup::Full
    }

    fn asks_numbers(self) -> bool {
        self != Setup::Quick
    }
}

fn run_interactive(config: GameConfig, setup: Setup) -> Result<()> {
    // ターミナル初期化
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = play_session(config, setup);

    // ターミナル復帰
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    if let Ok(Some((outcome, board_text))) = &res {
        print!("{}", board_text);
        println!("{}", outcome);
    }
    res.map(|_| ())
}

fn play_session(
    mut config: GameConfig,
    setup: Setup,
) -> Result<Option<(GameOutcome, String)>> {
    if setup.asks_numbers() {
        print!("Welcome to Gomoku! Connect five in a row to win.\r\n");
    }
    if setup.asks_mode() {
        print!("\r\nSelect mode:\r\n");
        print!("1. Human vs Minimax AI\r\n");
        print!("2. Minimax AI vs AlphaBeta AI\r\n");
        config.mode = match ui::wait_for_choice(&['1', '2'])? {
            Some('1') => GameMode::HumanVsMinimax,
            Some(_) => GameMode::MinimaxVsAlphaBeta,
            None => return Ok(None),
        };
    }
    if setup.asks_numbers() {
        config.board_size = ui::read_number(config.board_size, "Board size (5 ~ 19)")?;
        config.minimax_depth = ui::read_number(config.minimax_depth, "Minimax AI depth (>= 1)")?;
        if config.mode == GameMode::MinimaxVsAlphaBeta {
            config.alpha_beta_depth =
                ui::read_number(config.alpha_beta_depth, "AlphaBeta AI depth (>= 1)")?;
        }
        config = config.clamped();
    }
    config.validate()?;

    let (p1, p2): (Arc<dyn PlayerController>, Arc<dyn PlayerController>) = match config.mode {
        GameMode::HumanVsMinimax => (
            Arc::new(TuiController::new("You")),
            Arc::new(MinimaxAI::new(
                "Minimax AI",
                config.minimax_depth,
                Cell::PlayerHuman,
            )),
        ),
        GameMode::MinimaxVsAlphaBeta => (
            Arc::new(MinimaxAI::new(
                "Minimax AI",
                config.minimax_depth,
                Cell::PlayerAlphaBeta,
            )),
            Arc::new(AlphaBetaAI::new("AlphaBeta AI", config.alpha_beta_depth)),
        ),
    };

    let mut game = Game::new(config.board_size);
    let outcome = game.play(p1, p2)?;

    if outcome != GameOutcome::Abandoned {
        print!("\r\nPress any key to exit.\r\n");
        ui::wait_for_any_key()?;
    }
    Ok(Some((outcome, game.board.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_vs_ai_flag_skips_mode_menu() {
        let setup = Setup::from_flags(false, true);
        assert!(!setup.asks_mode());
        assert!(setup.asks_numbers());

        let cli = Cli::parse_from(["gomoku-duel", "play", "--ai-vs-ai"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Play {
                quick: false,
                ai_vs_ai: true
            })
        ));
    }

    #[test]
    fn test_setup_from_flags() {
        assert_eq!(Setup::from_flags(false, false), Setup::Full);
        assert!(Setup::from_flags(false, false).asks_mode());
        assert_eq!(Setup::from_flags(true, true), Setup::Quick);
        assert!(!Setup::Quick.asks_numbers());
    }

    #[test]
    fn test_arena_opponent_flag() {
        let cli = Cli::parse_from(["gomoku-duel", "arena", "--games", "3", "--opponent", "random"]);
        match cli.command {
            Some(Commands::Arena { games, opponent, json }) => {
                assert_eq!(games, 3);
                assert!(!json);
                assert_eq!(ArenaOpponent::from(opponent), ArenaOpponent::Random);
            }
            _ => panic!("expected arena subcommand"),
        }
    }
}
