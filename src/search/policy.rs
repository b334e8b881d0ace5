//! Move-selection policies and random playouts.
//!
//! Policies are trait-based so drivers do not care how a move is picked:
//! - `UniformRandom`: any legal move with equal probability
//! - `FirstLegal`: the first move offered, for reproducible scripted games

use tracing::debug;

use crate::core::GameRng;
use crate::error::Result;
use crate::rules::{GameResult, RulesEngine};

use super::stats::EnumerationStats;

/// Policy for choosing among legal moves.
pub trait MovePolicy<E: RulesEngine>: Send + Sync {
    /// Choose one of `moves`. Returns `None` only if `moves` is empty.
    fn choose(&self, state: &E, moves: &[E::Move], rng: &mut GameRng) -> Option<E::Move>;
}

/// Uniform random move selection.
#[derive(Clone, Debug, Default)]
pub struct UniformRandom;

impl<E: RulesEngine> MovePolicy<E> for UniformRandom {
    fn choose(&self, _state: &E, moves: &[E::Move], rng: &mut GameRng) -> Option<E::Move> {
        rng.choose(moves).cloned()
    }
}

/// Always plays the first legal move.
#[derive(Clone, Debug, Default)]
pub struct FirstLegal;

impl<E: RulesEngine> MovePolicy<E> for FirstLegal {
    fn choose(&self, _state: &E, moves: &[E::Move], _rng: &mut GameRng) -> Option<E::Move> {
        moves.first().cloned()
    }
}

/// Play up to `count` moves chosen by `policy`.
///
/// Stops early if the game ends and returns its result.
pub fn play_moves<E, P>(
    state: &mut E,
    count: usize,
    policy: &P,
    rng: &mut GameRng,
) -> Result<Option<GameResult>>
where
    E: RulesEngine,
    P: MovePolicy<E>,
{
    for _ in 0..count {
        if state.result().is_some() {
            break;
        }
        let moves = state.legal_moves();
        let Some(mv) = policy.choose(state, &moves, rng) else {
            break;
        };
        state.apply_move(&mv)?;
    }
    Ok(state.result())
}

/// Play until the game ends.
///
/// Returns `None` only if a non-terminal state offers no moves.
pub fn play_out<E, P>(state: &mut E, policy: &P, rng: &mut GameRng) -> Result<Option<GameResult>>
where
    E: RulesEngine,
    P: MovePolicy<E>,
{
    while state.result().is_none() {
        let moves = state.legal_moves();
        let Some(mv) = policy.choose(state, &moves, rng) else {
            break;
        };
        state.apply_move(&mv)?;
    }
    Ok(state.result())
}

/// Play `games` independent games from `root`, each on its own fork of `rng`.
pub fn simulate<E, P>(
    root: &E,
    games: usize,
    policy: &P,
    rng: &mut GameRng,
) -> Result<EnumerationStats>
where
    E: RulesEngine,
    P: MovePolicy<E>,
{
    let mut stats = EnumerationStats::new();
    for _ in 0..games {
        let mut state = root.clone();
        let mut playout_rng = rng.fork();
        if let Some(result) = play_out(&mut state, policy, &mut playout_rng)? {
            stats.record_terminal(result, state.depth());
        }
    }
    debug!(games, terminal = stats.terminal_games, "simulated playouts");
    Ok(stats)
}
