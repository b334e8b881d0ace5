//! Drivers that sit on top of the rules: random play and exhaustive
//! enumeration of game trees.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dominoes::{Game, GameConfig, GameRng};
//! use dominoes::search::{play_moves, summarize_parallel, EnumerationConfig, UniformRandom};
//!
//! let mut game = Game::new(GameConfig::default(), 42).unwrap();
//!
//! // A fresh game tree is enormous; play a random prefix first.
//! let mut rng = GameRng::new(42);
//! play_moves(&mut game, 12, &UniformRandom, &mut rng).unwrap();
//!
//! let stats = summarize_parallel(game, &EnumerationConfig::default()).unwrap();
//! println!("{} terminal games", stats.terminal_games);
//! ```

pub mod config;
pub mod enumerate;
pub mod policy;
pub mod stats;

pub use config::EnumerationConfig;
pub use enumerate::{enumerate_parallel, enumerate_terminal, summarize, summarize_parallel};
pub use policy::{play_moves, play_out, simulate, FirstLegal, MovePolicy, UniformRandom};
pub use stats::EnumerationStats;
