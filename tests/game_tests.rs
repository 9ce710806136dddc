//! Game adapter scenarios driven through the selector.

use rust_minimax::core::{Player, Score};
use rust_minimax::game::{GameAdapter, GameResult, WithHeuristic};
use rust_minimax::games::connect_four::{Board as Grid, ConnectFour, Disc};
use rust_minimax::games::nim::{Nim, NimState, Take, NIM_HEURISTIC};
use rust_minimax::games::tictactoe::{Board, Cell, Mark, TicTacToe};
use rust_minimax::search::{alpha_beta_complete, minimax_limited, MoveSelector, SearchConfig};

// =============================================================================
// Tic-tac-toe
// =============================================================================

#[test]
fn test_tictactoe_empty_board_is_a_draw() {
    let selector = MoveSelector::new(TicTacToe::new(), SearchConfig::minimax_complete());
    let decision = selector
        .select(&TicTacToe::empty_board(), Player::Maximizing)
        .unwrap();
    assert_eq!(decision.value, Score::DRAW);
    // Every opening draws; the first in row-major order is kept.
    assert_eq!(decision.best_move, Cell::new(0, 0));
}

#[test]
fn test_tictactoe_takes_the_win() {
    let selector = MoveSelector::new(TicTacToe::new(), SearchConfig::alpha_beta_complete());
    let board: Board = "XX./OO./...".parse().unwrap();
    let decision = selector.select(&board, Player::Maximizing).unwrap();
    assert_eq!(decision.into_pair(), (Cell::new(0, 2), Score::WIN));
}

#[test]
fn test_tictactoe_minimizer_blocks() {
    let selector = MoveSelector::new(TicTacToe::new(), SearchConfig::alpha_beta_complete());
    let board: Board = "XX./.O./...".parse().unwrap();
    let decision = selector.select(&board, Player::Minimizing).unwrap();
    assert_eq!(decision.best_move, Cell::new(0, 2));
    assert_eq!(decision.value, Score::DRAW);
}

#[test]
fn test_tictactoe_o_as_maximizer() {
    let game = TicTacToe::new().with_maximizer(Mark::O);
    let board: Board = "OO./XX./X..".parse().unwrap();
    let selector = MoveSelector::new(game, SearchConfig::minimax_limited(1));
    let decision = selector.select(&board, Player::Maximizing).unwrap();
    assert_eq!(decision.into_pair(), (Cell::new(0, 2), Score::WIN));
}

// =============================================================================
// Connect four
// =============================================================================

#[test]
fn test_connect_four_small_board_complete() {
    // Three columns are too narrow for a horizontal line, so the first
    // player can only win vertically, and the second can always block.
    let game = ConnectFour::with_size(4, 3);
    let outcome = alpha_beta_complete(&game, &game.empty_board(), Player::Maximizing).unwrap();
    assert_eq!(outcome.value, Score::DRAW);
}

#[test]
fn test_connect_four_wins_diagonally() {
    let game = ConnectFour::with_size(4, 4);
    let grid: Grid = "..../..RY/.RYY/RYYR".parse().unwrap();
    let outcome = minimax_limited(&game, &grid, Player::Maximizing, 1).unwrap();
    assert_eq!(outcome.best_move, Some(3));
    assert_eq!(outcome.value, Score::WIN);

    let after = game.apply(&grid, &3, Player::Maximizing).unwrap();
    assert_eq!(after.winner(), Some(Disc::Red));
    assert_eq!(game.outcome(&after), Some(GameResult::Winner(Player::Maximizing)));
}

#[test]
fn test_connect_four_heuristic_prefers_building_runs() {
    let game = ConnectFour::with_size(6, 7);
    let grid: Grid = "......./......./......./......./......./RR..YY.".parse().unwrap();
    let outcome = minimax_limited(&game, &grid, Player::Maximizing, 1).unwrap();
    // Extending the red pair to a triple is worth the most after one ply.
    assert_eq!(outcome.best_move, Some(2));
    assert_eq!(outcome.value, Score::from(12));
}

// =============================================================================
// Nim
// =============================================================================

#[test]
fn test_nim_1357_is_lost_for_the_first_player() {
    let game = Nim::new();
    let root = game.initial_state(Player::Maximizing);
    assert_eq!(root.nim_sum(), 0);

    let outcome = alpha_beta_complete(&game, &root, Player::Maximizing).unwrap();
    assert_eq!(outcome.value, Score::LOSS);
    assert_eq!(outcome.best_move, Some(Take::new(0, 1)));
}

#[test]
fn test_nim_1357_every_root_move_loses() {
    let selector = MoveSelector::new(Nim::new(), SearchConfig::alpha_beta_complete());
    let root = selector.game().initial_state(Player::Maximizing);

    let scores = selector.score_moves(&root, Player::Maximizing).unwrap();
    assert_eq!(scores.len(), 16);
    for (take, value) in scores {
        assert_eq!(value, Score::LOSS, "{take} should lose");
    }
}

#[test]
fn test_nim_winning_move_restores_zero_nim_sum() {
    let game = Nim::with_heaps(&[3, 4, 5]);
    let selector = MoveSelector::new(game.clone(), SearchConfig::alpha_beta_complete());
    let root = game.initial_state(Player::Maximizing);

    let decision = selector.select(&root, Player::Maximizing).unwrap();
    assert_eq!(decision.value, Score::WIN);
    let next = game.apply(&root, &decision.best_move, Player::Maximizing).unwrap();
    assert_eq!(next.nim_sum(), 0);
}

#[test]
fn test_nim_limited_search_uses_corrected_heuristic() {
    // Depth 1 from 1-3-5-7 sees only non-zero nim-sums for the opponent.
    let game = Nim::new();
    let root = game.initial_state(Player::Maximizing);
    let outcome = minimax_limited(&game, &root, Player::Maximizing, 1).unwrap();
    assert_eq!(outcome.value.value(), -NIM_HEURISTIC);

    // Depth 2 finds the opponent's replies back to zero as well.
    let outcome = minimax_limited(&game, &root, Player::Maximizing, 2).unwrap();
    assert_eq!(outcome.value.value(), -NIM_HEURISTIC);
}

#[test]
fn test_nim_minimizer_moving_first() {
    let game = Nim::with_heaps(&[2, 1]);
    let root = game.initial_state(Player::Minimizing);
    let outcome = alpha_beta_complete(&game, &root, Player::Minimizing).unwrap();
    // MIN wins, so MAX's value is a loss.
    assert_eq!(outcome.value, Score::LOSS);
    assert_eq!(outcome.best_move, Some(Take::new(0, 1)));
}

// =============================================================================
// Pluggable heuristics
// =============================================================================

#[test]
fn test_with_heuristic_changes_limited_choice() {
    // Prefer leaving as few objects as possible.
    let greedy = WithHeuristic::new(Nim::with_heaps(&[2, 5]), |state: &NimState, _| {
        Score::heuristic(-(state.remaining() as f64))
    });
    let root = greedy.inner().initial_state(Player::Maximizing);
    let outcome = minimax_limited(&greedy, &root, Player::Maximizing, 1).unwrap();
    assert_eq!(outcome.best_move, Some(Take::new(1, 5)));
    assert_eq!(outcome.value, Score::from(-2));

    // Rules are untouched: complete search still follows the nim-sum.
    let complete = alpha_beta_complete(&greedy, &root, Player::Maximizing).unwrap();
    assert_eq!(complete.value, Score::WIN);
    assert_eq!(complete.best_move, Some(Take::new(1, 3)));
}

#[test]
fn test_states_serialize() {
    let board: Board = "XO./.X./..O".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

    let grid = ConnectFour::with_size(4, 5).empty_board();
    let grid = ConnectFour::with_size(4, 5).apply(&grid, &2, Player::Maximizing).unwrap();
    let json = serde_json::to_string(&grid).unwrap();
    assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), grid);

    let heaps = NimState::new(&[1, 0, 4], Player::Minimizing);
    let json = serde_json::to_string(&heaps).unwrap();
    assert_eq!(serde_json::from_str::<NimState>(&json).unwrap(), heaps);
}
