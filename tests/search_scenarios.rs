use gomoku_duel::core::{Board, Cell, Position};
use gomoku_duel::logic::{is_draw, valid_moves, winner};
use gomoku_duel::player::ai::{
    alpha_beta, alpha_beta_with_stats, minimax, minimax_with_stats, SearchStats, LOSS_SCORE,
    WIN_SCORE,
};
use gomoku_duel::player::{PlayerController, RandomAI};

/// Random mid-game position built from legal generator moves.
fn random_position(size: usize, stones: usize) -> Board {
    let mut board = Board::new(size);
    let players = [
        RandomAI::new("H", Cell::PlayerHuman),
        RandomAI::new("M", Cell::PlayerMinimax),
        RandomAI::new("A", Cell::PlayerAlphaBeta),
    ];
    for i in 0..stones {
        if winner(&board).is_some() || is_draw(&board) {
            break;
        }
        let p = &players[i % players.len()];
        let mv = p.choose_move(&board).expect("candidate available");
        assert!(board.make_move(mv, p.stone()));
    }
    board
}

#[test]
fn searches_leave_board_untouched() {
    for round in 0..8 {
        let start = random_position(6, 3 + round);

        let mut board = start.clone();
        minimax(&mut board, 0, true, 2, Cell::PlayerHuman);
        assert_eq!(board, start);

        minimax(&mut board, 0, false, 2, Cell::PlayerAlphaBeta);
        assert_eq!(board, start);

        alpha_beta(&mut board, 2, true, LOSS_SCORE, WIN_SCORE);
        assert_eq!(board, start);

        alpha_beta(&mut board, 3, false, LOSS_SCORE, WIN_SCORE);
        assert_eq!(board, start);
    }
}

#[test]
fn empty_five_by_five_minimax() {
    let mut board = Board::new(5);
    let all = valid_moves(&board);
    assert_eq!(all.len(), 25);

    let result = minimax(&mut board, 0, true, 1, Cell::PlayerHuman);
    let mv = result.best_move.expect("move on empty board");
    assert!(all.contains(&mv));
    assert!(result.score.is_finite());
}

#[test]
fn minimax_completes_open_four() {
    let mut board = Board::new(10);
    for c in 3..7 {
        board.make_move(Position::new(5, c), Cell::PlayerMinimax);
    }
    board.make_move(Position::new(8, 8), Cell::PlayerHuman);

    let result = minimax(&mut board, 0, true, 1, Cell::PlayerHuman);
    assert_eq!(result.score, WIN_SCORE);
    let mv = result.best_move.unwrap();
    assert!(mv == Position::new(5, 2) || mv == Position::new(5, 7));

    board.make_move(mv, Cell::PlayerMinimax);
    assert_eq!(winner(&board), Some(Cell::PlayerMinimax));
}

#[test]
fn alpha_beta_sees_unstoppable_four() {
    let mut board = Board::new(9);
    for r in 2..6 {
        board.make_move(Position::new(r, 4), Cell::PlayerMinimax);
    }
    board.make_move(Position::new(0, 0), Cell::PlayerAlphaBeta);
    board.make_move(Position::new(8, 8), Cell::PlayerAlphaBeta);

    let mut stats = SearchStats::default();
    let result = alpha_beta_with_stats(&mut board, 2, true, LOSS_SCORE, WIN_SCORE, &mut stats);
    assert_eq!(result.score, LOSS_SCORE);
    assert!(result.best_move.is_some());
    assert!(stats.cutoffs >= 1);
}

#[test]
fn pruning_visits_fewer_nodes_than_full_tree() {
    let mut board = Board::new(7);
    board.make_move(Position::new(3, 3), Cell::PlayerMinimax);
    board.make_move(Position::new(3, 4), Cell::PlayerAlphaBeta);

    // No five is reachable in three plies, so both trees have the same shape
    let mut full = SearchStats::default();
    let plain = minimax_with_stats(&mut board, 0, true, 3, Cell::PlayerHuman, &mut full);

    let mut pruned = SearchStats::default();
    let ab = alpha_beta_with_stats(&mut board, 3, true, LOSS_SCORE, WIN_SCORE, &mut pruned);

    assert!(plain.score.is_finite() && ab.score.is_finite());
    assert_eq!(full.cutoffs, 0);
    assert!(pruned.cutoffs > 0);
    assert!(pruned.nodes < full.nodes);
}
