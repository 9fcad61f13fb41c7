use gomoku_duel::config::GameConfig;
use gomoku_duel::core::Cell;
use gomoku_duel::game::{Game, GameOutcome};
use gomoku_duel::logic::{check_winner, is_draw};
use gomoku_duel::player::{AlphaBetaAI, MinimaxAI, PlayerController};
use gomoku_duel::selfplay::{run_arena, ArenaConfig, ArenaOpponent};

#[test]
fn minimax_vs_alpha_beta_plays_to_the_end() {
    let config = GameConfig {
        board_size: 6,
        minimax_depth: 1,
        alpha_beta_depth: 2,
        ..GameConfig::default()
    };
    config.validate().unwrap();

    let minimax = MinimaxAI::new("Minimax AI", config.minimax_depth, Cell::PlayerAlphaBeta);
    let alpha_beta = AlphaBetaAI::new("AlphaBeta AI", config.alpha_beta_depth);
    let mut game = Game::new(config.board_size);
    let outcome = game.play_silent(&minimax, &alpha_beta).unwrap();

    match outcome {
        GameOutcome::Win(cell) => {
            assert!(check_winner(&game.board, cell));
            assert_eq!(game.history.last().unwrap().0, cell);
        }
        GameOutcome::Draw | GameOutcome::NoMoves => assert!(is_draw(&game.board)),
        other => panic!("unexpected outcome {:?}", other),
    }

    // 交互に打っている
    for (i, (stone, _)) in game.history.iter().enumerate() {
        let expected = if i % 2 == 0 { minimax.stone() } else { alpha_beta.stone() };
        assert_eq!(*stone, expected);
    }
    assert!(minimax.last_thinking().is_some());
}

#[test]
fn arena_stats_serialize() {
    let stats = run_arena(&ArenaConfig {
        num_games: 2,
        opponent: ArenaOpponent::AlphaBeta,
        board_size: 5,
        minimax_depth: 1,
        alpha_beta_depth: 1,
        verbose: false,
    })
    .unwrap();

    assert_eq!(stats.games.len(), 2);
    let json = serde_json::to_string(&stats).unwrap();
    assert!(json.contains("\"total_games\":2"));
    assert!(json.contains("\"opponent\":\"alpha_beta\""));
}
