//! Rules engine trait for search drivers.
//!
//! Enumeration and random play only need to know:
//! - Which moves are legal in a state
//! - How applying a move changes the state
//! - Whether the state is terminal
//!
//! The drivers call into `RulesEngine` but never interpret dominoes-specific
//! concepts directly.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::error::Result;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The player emptied their hand.
    Winner(PlayerId),
    /// Every player passed in turn with nothing left to draw.
    Blocked,
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Blocked => write!(f, "blocked"),
        }
    }
}

/// Rules engine trait.
///
/// A state that owns its own rules: search drivers clone it to branch and
/// mutate the clone through `apply_move`.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Must be empty exactly when the state is terminal, so a
///   driver can treat "no moves" as a leaf
/// - `apply_move`: Must be deterministic, so enumeration is repeatable
/// - `Clone`: Must produce a fully independent copy
pub trait RulesEngine: Clone {
    /// A choice offered to the player to move.
    type Move: Clone + std::fmt::Debug;

    /// Enumerate the moves open to the player to move.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a move.
    ///
    /// Returns `Some(result)` if the move ended the game, `None` if it continues.
    fn apply_move(&mut self, mv: &Self::Move) -> Result<Option<GameResult>>;

    /// The result, if the game is over.
    fn result(&self) -> Option<GameResult>;

    /// Number of players.
    fn player_count(&self) -> usize;

    /// Size measure reported for terminal states (board length for dominoes).
    fn depth(&self) -> usize;

    /// Clone and apply in one step.
    fn branch(&self, mv: &Self::Move) -> Result<(Self, Option<GameResult>)> {
        let mut next = self.clone();
        let result = next.apply_move(mv)?;
        Ok((next, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_display() {
        assert_eq!(GameResult::Winner(PlayerId::new(0)).to_string(), "Player 0 wins");
        assert_eq!(GameResult::Blocked.to_string(), "blocked");
    }
}
