//! Exhaustive enumeration over real (small) dominoes games.
//!
//! Full double-six trees are far too large for a test run, so these use
//! small sets and short random prefixes, the way the CLI does.

use dominoes::search::{
    enumerate_parallel, enumerate_terminal, play_moves, summarize, summarize_parallel,
    EnumerationConfig, EnumerationStats, UniformRandom,
};
use dominoes::{Domino, Game, GameConfig, GameResult, GameRng, PlayerId};
use rustc_hash::FxHashMap;

/// Double-three set, three tiles each, four in the boneyard.
fn small_game(seed: u64) -> Game {
    let config = GameConfig::default().with_max_pip(3).with_hand_size(3);
    let mut game = Game::new(config, seed).unwrap();
    play_moves(&mut game, 2, &UniformRandom, &mut GameRng::new(seed)).unwrap();
    game
}

fn length_multiset(games: &[Game]) -> FxHashMap<usize, u64> {
    let mut lengths = FxHashMap::default();
    for game in games {
        *lengths.entry(game.board().len()).or_default() += 1;
    }
    lengths
}

#[test]
fn test_every_terminal_game_is_consistent() {
    for seed in 0..5 {
        let root = small_game(seed);
        let games = enumerate_terminal(root.clone()).unwrap();
        assert!(!games.is_empty());

        for game in &games {
            assert!(game.is_terminal());
            assert!(game.valid_moves().is_empty());

            let mut tiles = game.all_tiles();
            tiles.sort();
            assert_eq!(tiles, Domino::full_set(3));

            // Every terminal game extends the root's line of play.
            assert!(game.board().len() >= root.board().len());
            assert_eq!(
                game.history().iter().take(root.history().len()).cloned().collect::<Vec<_>>(),
                root.history().iter().cloned().collect::<Vec<_>>()
            );
        }
    }
}

#[test]
fn test_enumeration_leaves_root_untouched() {
    let root = small_game(1);
    let before = root.clone();

    let _ = enumerate_terminal(root.clone()).unwrap();

    assert_eq!(root.board(), before.board());
    assert_eq!(root.hands(), before.hands());
    assert_eq!(root.history(), before.history());
}

#[test]
fn test_enumeration_is_repeatable() {
    let config = EnumerationConfig::default().with_workers(4);

    for seed in [3, 8] {
        let first = enumerate_parallel(small_game(seed), &config).unwrap();
        let second = enumerate_parallel(small_game(seed), &config).unwrap();
        let sequential = enumerate_terminal(small_game(seed)).unwrap();

        assert_eq!(first.len(), second.len());
        assert_eq!(first.len(), sequential.len());
        assert_eq!(length_multiset(&first), length_multiset(&second));
        assert_eq!(length_multiset(&first), length_multiset(&sequential));
    }
}

#[test]
fn test_summary_agrees_with_collected_games() {
    let root = small_game(4);
    let games = enumerate_terminal(root.clone()).unwrap();

    let mut expected = EnumerationStats::new();
    for game in &games {
        expected.record_terminal(game.result().unwrap(), game.board().len());
    }

    let sequential = summarize(root.clone()).unwrap();
    let parallel = summarize_parallel(root, &EnumerationConfig::default().with_workers(2)).unwrap();

    for stats in [&sequential, &parallel] {
        assert_eq!(stats.terminal_games, expected.terminal_games);
        assert_eq!(stats.wins, expected.wins);
        assert_eq!(stats.blocked, expected.blocked);
        assert_eq!(stats.lengths, expected.lengths);
    }
    assert_eq!(sequential.nodes_expanded, parallel.nodes_expanded);
}

#[test]
fn test_tiny_tree_by_hand() {
    use dominoes::Hand;

    // Player 0: [0|1] [1|2]; player 1: [2|2]. Empty boneyard.
    let hands = vec![
        [Domino::new(0, 1), Domino::new(1, 2)].into_iter().collect::<Hand>(),
        [Domino::new(2, 2)].into_iter().collect::<Hand>(),
    ];
    let root = Game::from_parts(hands, vec![], PlayerId::new(0)).unwrap();

    // Opening [0|1]: player 1 cannot answer and passes, player 0 plays
    // [1|2] on the right and wins (the left end shows 0).
    // Opening [1|2]: player 1 plays [2|2] on the right and wins.
    let games = enumerate_terminal(root).unwrap();
    let mut outcomes: Vec<_> = games
        .iter()
        .map(|g| (g.board().to_string(), g.result().unwrap()))
        .collect();
    outcomes.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(
        outcomes,
        vec![
            ("[0|1][1|2]".to_string(), GameResult::Winner(PlayerId::new(0))),
            ("[1|2][2|2]".to_string(), GameResult::Winner(PlayerId::new(1))),
        ]
    );
}
