//! Core engine types: players, RNG, configuration, moves.
//!
//! These are shared by the board, the game state machine and the search
//! drivers layered on top of them.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, StartingPlayer};
pub use action::{Action, ActionRecord, End, Move};
