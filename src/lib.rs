//! # dominoes
//!
//! A dominoes engine: the board and its matching rules, a turn-based game
//! state machine, and drivers that play or exhaustively enumerate games.
//!
//! ## Design Principles
//!
//! 1. **The board owns the invariant**: neighbouring tiles always touch on
//!    equal pips, and a rejected tile leaves the board untouched.
//!
//! 2. **N-Player First**: Seats are `PlayerId`s and per-seat data lives in
//!    a `PlayerMap`. Nothing assumes two players.
//!
//! 3. **Clone to branch**: `Game` clones are fully independent. Board,
//!    boneyard and history use `im` persistent vectors, so a clone is O(1)
//!    and copy-on-write.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, moves and history records
//! - `tiles`: Dominoes, tile sets and hands
//! - `board`: The line of play
//! - `rules`: `RulesEngine` trait and game results
//! - `game`: The dominoes game state machine
//! - `search`: Random play and exhaustive (parallel) enumeration

pub mod core;
pub mod error;
pub mod tiles;
pub mod board;
pub mod rules;
pub mod game;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, End, GameConfig, GameRng, Move, PlayerId, PlayerMap, StartingPlayer,
};

pub use crate::error::{Error, Result};

pub use crate::tiles::{Domino, Hand, Pip};

pub use crate::board::{Board, PlacedTile};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::game::Game;

pub use crate::search::{
    EnumerationConfig, EnumerationStats, FirstLegal, MovePolicy, UniformRandom,
};
