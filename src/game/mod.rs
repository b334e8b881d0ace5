//! The dominoes game: dealing, legal moves and the turn state machine.
//!
//! Rules implemented:
//! - Tiles are dealt from a shuffled set; the rest form the boneyard
//! - On your turn, play a tile from your hand on a matching end
//! - If you cannot, draw until you can; pass if the boneyard is empty
//! - First player to empty their hand wins; if everyone passes in a row,
//!   the game is blocked
//!
//! Supports any number of players the tile set can deal to.

mod state;

pub use state::Game;
