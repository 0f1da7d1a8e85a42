//! End-to-end checks of dealing and playing through the public API.

use catstack::config::GameConfig;
use catstack::constants::MAX_DEALT_RUN;
use catstack::game::{Activation, Board, CatColor, Cell, Game, GameEvent, Generator};
use rand::rngs::StdRng;
use rand::SeedableRng;

const W: Cell = Cell::Cat(CatColor::White);
const K: Cell = Cell::Cat(CatColor::Black);
const E: Cell = Cell::Empty;

fn board(rows: &[&[Cell]]) -> Board {
    Board::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

fn two_color_config() -> GameConfig {
    GameConfig {
        rows: 3,
        cols: 4,
        palette: vec![CatColor::White, CatColor::Black],
        cats_per_color: 3,
        generation_retry_cap: 100,
    }
}

// =============================================================================
// Dealing
// =============================================================================

#[test]
fn fresh_games_start_fair_and_complete() {
    let config = GameConfig::default();

    for seed in 0..25 {
        let mut game = Game::with_seed(config.clone(), seed);
        let degraded = game
            .take_events()
            .iter()
            .any(|e| matches!(e, GameEvent::GenerationDegraded { .. }));
        let board = game.board();

        assert!(!degraded, "seed {seed}");
        assert!(board.respects_run_limit(MAX_DEALT_RUN), "seed {seed}");
        for &color in &config.palette {
            assert_eq!(board.count(color), config.cats_per_color);
        }
        assert!(board.is_column_empty(config.cols - 1));
        assert!(board.is_column_empty(config.cols - 2));
        assert!(board.is_settled());
        assert_eq!(game.moves(), 0);
    }
}

#[test]
fn default_layout_deals_fairly() {
    let config = GameConfig::default();
    let generator = Generator::new(&config);

    for seed in [1, 2, 3, 100, 9001] {
        let generated = generator.generate(&mut StdRng::seed_from_u64(seed));
        assert!(!generated.degraded, "seed {seed}");
        assert!(generated.board.respects_run_limit(MAX_DEALT_RUN), "seed {seed}");
        assert!(generated.attempts < config.generation_retry_cap, "seed {seed}");
    }
}

#[test]
fn degraded_deal_is_reported_once() {
    let config = GameConfig {
        rows: 3,
        cols: 3,
        palette: vec![CatColor::Calico],
        cats_per_color: 3,
        generation_retry_cap: 100,
    };

    let generated = Generator::new(&config).generate(&mut StdRng::seed_from_u64(3));
    assert!(generated.degraded);
    assert_eq!(generated.attempts, 100);

    let mut game = Game::with_seed(config, 3);
    assert_eq!(
        game.take_events(),
        vec![GameEvent::GenerationDegraded { attempts: 100 }]
    );
    assert!(game.take_events().is_empty());
}

// =============================================================================
// Moves
// =============================================================================

#[test]
fn floating_cats_are_refused() {
    assert!(Board::from_rows(vec![
        vec![E, W, E],
        vec![W, E, E],
        vec![E, W, E],
    ])
    .is_none());
}

#[test]
fn move_legality_matches_target_top() {
    // col 0: W over K, col 1: W on top, col 2: K on top, col 3: empty
    let start = board(&[&[E, E, E, E], &[W, W, K, E], &[K, K, W, E]]);

    for (to, legal) in [(1, true), (2, false), (3, true)] {
        let mut game = Game::from_board(two_color_config(), start.clone());
        game.on_column_activated(0);
        let outcome = game.on_column_activated(to);

        if legal {
            assert!(matches!(outcome, Activation::Moved(_)), "to {to}");
            assert_eq!(game.moves(), 1);
            assert!(game.board().is_settled());
        } else {
            assert!(matches!(outcome, Activation::Rejected { .. }), "to {to}");
            assert_eq!(game.board(), &start);
            assert_eq!(game.moves(), 0);
        }
        assert_eq!(game.selected(), None);
    }
}

#[test]
fn each_move_counts_once() {
    let start = board(&[&[E, E, E, E], &[W, K, E, E], &[K, W, E, E]]);
    let mut game = Game::from_board(two_color_config(), start);

    let mut expected = 0;
    for (from, to) in [(0, 2), (1, 3), (0, 1), (2, 3)] {
        let before = game.moves();
        game.on_column_activated(from);
        if let Activation::Moved(_) = game.on_column_activated(to) {
            expected += 1;
            assert_eq!(game.moves(), before + 1);
        } else {
            assert_eq!(game.moves(), before);
        }
    }
    assert_eq!(game.moves(), expected);
}

#[test]
fn example_scenario_moves_onto_empty_floor() {
    let config = GameConfig {
        rows: 3,
        cols: 3,
        palette: vec![CatColor::White],
        cats_per_color: 3,
        generation_retry_cap: 10,
    };
    let mut game = Game::from_board(config, board(&[&[W, E, E], &[W, K, E], &[W, K, E]]));

    game.on_column_activated(1);
    game.on_column_activated(2);

    assert_eq!(game.board().get(2, 2), Some(K));
    assert_eq!(game.board().get(1, 1), Some(E));
    // the full white column clears on the same pass
    assert!(game.board().is_column_empty(0));
}

// =============================================================================
// Clearing
// =============================================================================

#[test]
fn simultaneous_completions_all_clear() {
    // col 0 is already complete; the move completes col 1 as well
    let start = board(&[&[W, E, E, E], &[W, K, K, E], &[W, K, W, E]]);
    let mut game = Game::from_board(two_color_config(), start);

    game.on_column_activated(2);
    game.on_column_activated(1);

    let cleared: Vec<_> = game
        .take_events()
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::ColumnCleared { column, color } => Some((column, color)),
            _ => None,
        })
        .collect();
    assert_eq!(
        cleared,
        vec![(0, CatColor::White), (1, CatColor::Black)]
    );
    assert!(game.board().is_column_empty(0));
    assert!(game.board().is_column_empty(1));
    assert!(!game.is_cleared());
}

#[test]
fn playing_out_a_board_fires_game_clear_once() {
    let start = board(&[&[E, E, E, E], &[W, K, E, E], &[K, W, W, K]]);
    let mut game = Game::from_board(two_color_config(), start);
    let mut events = Vec::new();

    for (from, to) in [(0, 2), (1, 3), (0, 3), (1, 2)] {
        game.on_column_activated(from);
        assert!(matches!(game.on_column_activated(to), Activation::Moved(_)));
        events.extend(game.take_events());
    }

    assert!(game.board().is_empty());
    assert!(game.is_cleared());
    assert_eq!(game.moves(), 4);
    assert_eq!(
        events.iter().filter(|e| **e == GameEvent::GameCleared).count(),
        1
    );
    assert_eq!(events.last(), Some(&GameEvent::GameCleared));

    // nothing left to select once cleared
    assert_eq!(game.on_column_activated(0), Activation::Ignored);
}
