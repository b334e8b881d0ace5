//! Enumeration statistics.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::GameResult;

/// Totals collected while walking a game tree.
///
/// Statistics from independent subtrees combine with [`EnumerationStats::merge`];
/// no field depends on the order subtrees were visited in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationStats {
    /// Terminal games reached.
    pub terminal_games: u64,

    /// Wins per seat, indexed by player index.
    pub wins: Vec<u64>,

    /// Terminal games that ended blocked.
    pub blocked: u64,

    /// Non-terminal states whose moves were expanded.
    pub nodes_expanded: u64,

    /// Terminal games by final board length.
    pub lengths: FxHashMap<usize, u64>,

    /// Wall time spent (microseconds).
    pub time_us: u64,
}

impl EnumerationStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one terminal game.
    pub fn record_terminal(&mut self, result: GameResult, depth: usize) {
        self.terminal_games += 1;
        match result {
            GameResult::Winner(player) => {
                if self.wins.len() <= player.index() {
                    self.wins.resize(player.index() + 1, 0);
                }
                self.wins[player.index()] += 1;
            }
            GameResult::Blocked => self.blocked += 1,
        }
        *self.lengths.entry(depth).or_default() += 1;
    }

    /// Fold another subtree's statistics into these.
    ///
    /// Times add up, so after a parallel merge `time_us` is CPU time
    /// across workers; callers overwrite it with wall time.
    pub fn merge(&mut self, other: &EnumerationStats) {
        self.terminal_games += other.terminal_games;
        if self.wins.len() < other.wins.len() {
            self.wins.resize(other.wins.len(), 0);
        }
        for (mine, theirs) in self.wins.iter_mut().zip(&other.wins) {
            *mine += theirs;
        }
        self.blocked += other.blocked;
        self.nodes_expanded += other.nodes_expanded;
        for (&len, &count) in &other.lengths {
            *self.lengths.entry(len).or_default() += count;
        }
        self.time_us += other.time_us;
    }

    /// Wins for `player`.
    #[must_use]
    pub fn wins_for(&self, player: PlayerId) -> u64 {
        self.wins.get(player.index()).copied().unwrap_or(0)
    }

    /// Longest terminal board seen.
    #[must_use]
    pub fn max_length(&self) -> Option<usize> {
        self.lengths.keys().copied().max()
    }

    /// Board-length histogram sorted by length.
    #[must_use]
    pub fn sorted_lengths(&self) -> Vec<(usize, u64)> {
        let mut lengths: Vec<_> = self.lengths.iter().map(|(&k, &v)| (k, v)).collect();
        lengths.sort_unstable();
        lengths
    }

    /// Calculate terminal games found per second.
    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.terminal_games as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = EnumerationStats::new();
        assert_eq!(stats.terminal_games, 0);
        assert_eq!(stats.max_length(), None);
        assert_eq!(stats.games_per_second(), 0.0);
    }

    #[test]
    fn test_record_terminal() {
        let mut stats = EnumerationStats::new();
        stats.record_terminal(GameResult::Winner(PlayerId::new(1)), 9);
        stats.record_terminal(GameResult::Blocked, 12);
        stats.record_terminal(GameResult::Winner(PlayerId::new(1)), 9);

        assert_eq!(stats.terminal_games, 3);
        assert_eq!(stats.wins_for(PlayerId::new(0)), 0);
        assert_eq!(stats.wins_for(PlayerId::new(1)), 2);
        assert_eq!(stats.blocked, 1);
        assert_eq!(stats.sorted_lengths(), vec![(9, 2), (12, 1)]);
        assert_eq!(stats.max_length(), Some(12));
    }

    #[test]
    fn test_merge() {
        let mut a = EnumerationStats::new();
        a.record_terminal(GameResult::Winner(PlayerId::new(0)), 5);
        a.nodes_expanded = 4;

        let mut b = EnumerationStats::new();
        b.record_terminal(GameResult::Winner(PlayerId::new(2)), 5);
        b.record_terminal(GameResult::Blocked, 7);
        b.nodes_expanded = 6;

        a.merge(&b);

        assert_eq!(a.terminal_games, 3);
        assert_eq!(a.wins, vec![1, 0, 1]);
        assert_eq!(a.blocked, 1);
        assert_eq!(a.nodes_expanded, 10);
        assert_eq!(a.sorted_lengths(), vec![(5, 2), (7, 1)]);
    }

    #[test]
    fn test_games_per_second() {
        let mut stats = EnumerationStats::new();
        stats.terminal_games = 1000;
        stats.time_us = 1_000_000;

        assert_eq!(stats.games_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = EnumerationStats::new();
        stats.record_terminal(GameResult::Blocked, 3);

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: EnumerationStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
