//! Whole-game tests: agents, the match driver and match configs.

use rust_minimax::core::{Player, SearchError};
use rust_minimax::game::{GameAdapter, GameResult};
use rust_minimax::games::connect_four::ConnectFour;
use rust_minimax::games::nim::Nim;
use rust_minimax::games::tictactoe::TicTacToe;
use rust_minimax::play::{play_match, run_match, AgentKind, MatchConfig, RandomAgent, SearchAgent};
use rust_minimax::search::SearchConfig;

#[test_log::test]
fn test_perfect_tictactoe_is_a_draw() {
    let game = TicTacToe::new();
    let mut x = SearchAgent::new(SearchConfig::alpha_beta_complete());
    let mut o = SearchAgent::new(SearchConfig::minimax_limited(9));

    let record = play_match(
        &game,
        &TicTacToe::empty_board(),
        Player::Maximizing,
        &mut x,
        &mut o,
        100,
    )
    .unwrap();

    assert_eq!(record.result, Some(GameResult::Draw));
    assert_eq!(record.plies(), 9);
    assert_eq!(x.decisions(), 5);
    assert_eq!(o.decisions(), 4);
}

#[test_log::test]
fn test_search_never_loses_tictactoe_to_random() {
    let game = TicTacToe::new();
    for seed in 0..10 {
        let config = MatchConfig::new()
            .with_maximizer(AgentKind::Search(SearchConfig::alpha_beta_complete()))
            .with_minimizer(AgentKind::Random { seed })
            .with_first(if seed % 2 == 0 { Player::Maximizing } else { Player::Minimizing });

        let record = run_match(&game, &TicTacToe::empty_board(), &config).unwrap();
        assert!(record.is_finished());
        assert_ne!(record.winner(), Some(Player::Minimizing), "seed {seed}");
    }
}

#[test_log::test]
fn test_perfect_nim_second_player_wins() {
    let game = Nim::new();
    let config = MatchConfig::new()
        .with_maximizer(AgentKind::Random { seed: 42 })
        .with_minimizer(AgentKind::Search(SearchConfig::alpha_beta_complete()));

    let record = run_match(&game, &game.initial_state(Player::Maximizing), &config).unwrap();
    assert_eq!(record.winner(), Some(Player::Minimizing));
    assert!(record.final_state.is_cleared());
}

#[test_log::test]
fn test_random_first_mover_loses_balanced_nim() {
    let game = Nim::with_heaps(&[1, 2, 3]);
    let mut firsts = Vec::new();
    for seed in 0..16 {
        let config = MatchConfig::new()
            .with_maximizer(AgentKind::Search(SearchConfig::alpha_beta_complete()))
            .with_minimizer(AgentKind::Search(SearchConfig::minimax_complete()))
            .with_random_first(seed);
        let first = config.first_mover();

        let record = run_match(&game, &game.initial_state(first), &config).unwrap();
        assert_eq!(record.first, first);
        assert_eq!(record.moves[0].player, first);
        // 1 ^ 2 ^ 3 == 0: whoever moves first loses against perfect play.
        assert_eq!(record.winner(), Some(first.opposite()), "seed {seed}");
        firsts.push(first);
    }
    assert!(firsts.contains(&Player::Maximizing));
    assert!(firsts.contains(&Player::Minimizing));
}

#[test]
fn test_connect_four_limited_vs_random() {
    let game = ConnectFour::with_size(5, 5);
    let mut red = SearchAgent::new(SearchConfig::alpha_beta_limited(4));
    let mut yellow = RandomAgent::new(3);

    let record = play_match(&game, &game.empty_board(), Player::Maximizing, &mut red, &mut yellow, 25)
        .unwrap();
    assert!(record.is_finished());
    assert!(game.is_terminal(&record.final_state));
    assert_eq!(record.result, game.outcome(&record.final_state).or(Some(GameResult::Draw)));
}

#[test]
fn test_random_matches_are_reproducible() {
    let game = ConnectFour::with_size(4, 5);
    let config = MatchConfig::new()
        .with_maximizer(AgentKind::Random { seed: 8 })
        .with_minimizer(AgentKind::Random { seed: 9 });

    let a = run_match(&game, &game.empty_board(), &config).unwrap();
    let b = run_match(&game, &game.empty_board(), &config).unwrap();
    assert_eq!(a.moves, b.moves);
    assert_eq!(a.final_state, b.final_state);
}

#[test]
fn test_menu_built_agents() {
    let game = Nim::with_heaps(&[1, 2, 3]);
    let config = MatchConfig::new()
        .with_maximizer(AgentKind::from_menu("ABlimited", 2, 0).unwrap())
        .with_minimizer(AgentKind::from_menu("Random", 2, 5).unwrap())
        .with_max_plies(2);

    let record = run_match(&game, &game.initial_state(Player::Maximizing), &config).unwrap();
    assert_eq!(record.plies(), 2);
    assert!(!record.is_finished());
}

#[test]
fn test_invalid_agent_config_stops_before_play() {
    let game = TicTacToe::new();
    let config = MatchConfig::new()
        .with_maximizer(AgentKind::Search(SearchConfig::alpha_beta_limited(0)));
    match run_match(&game, &TicTacToe::empty_board(), &config) {
        Err(SearchError::Config(reason)) => assert!(reason.starts_with("MAX agent: "), "{reason}"),
        other => panic!("expected a config error, got {other:?}"),
    }
}
