//! Enumeration configuration parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Enumeration configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationConfig {
    /// Random moves played from the deal before exhaustive enumeration.
    /// A fresh double-six game is far too large to enumerate in full.
    pub fixed_moves: usize,

    /// Worker threads (`None` = one per core).
    pub workers: Option<usize>,

    /// Seed for the deal and the random prefix.
    pub seed: u64,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            fixed_moves: 8,
            workers: None,
            seed: 42,
        }
    }
}

impl EnumerationConfig {
    /// Set the number of random prefix moves.
    #[must_use]
    pub fn with_fixed_moves(mut self, moves: usize) -> Self {
        self.fixed_moves = moves;
        self
    }

    /// Set the worker count.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the worker pool described by this config.
    pub fn thread_pool(&self) -> Result<rayon::ThreadPool> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(Error::InvalidConfig("at least one worker is required".into()));
            }
            builder = builder.num_threads(workers);
        }
        builder
            .build()
            .map_err(|e| Error::InvalidConfig(format!("cannot start worker pool: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnumerationConfig::default();
        assert_eq!(config.fixed_moves, 8);
        assert_eq!(config.workers, None);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EnumerationConfig::default()
            .with_fixed_moves(10)
            .with_workers(2)
            .with_seed(7);

        assert_eq!(config.fixed_moves, 10);
        assert_eq!(config.workers, Some(2));
        assert_eq!(config.seed, 7);
        assert_eq!(config.thread_pool().unwrap().current_num_threads(), 2);
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = EnumerationConfig::default().with_workers(0);
        assert!(matches!(config.thread_pool(), Err(Error::InvalidConfig(_))));
    }
}
