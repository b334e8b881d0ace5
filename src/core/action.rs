//! Moves and the action history.
//!
//! A `Move` is what a player chooses: a tile and the board end to play it
//! on. An `Action` is what actually happened on a turn, which also covers
//! the forced draws and passes the game applies on a player's behalf.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::tiles::Domino;

/// One of the two extremities of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum End {
    Left,
    Right,
}

impl std::fmt::Display for End {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            End::Left => write!(f, "left"),
            End::Right => write!(f, "right"),
        }
    }
}

/// A candidate play: put `domino` on the `end` side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub domino: Domino,
    pub end: End,
}

impl Move {
    #[must_use]
    pub const fn new(domino: Domino, end: End) -> Self {
        Self { domino, end }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on the {}", self.domino, self.end)
    }
}

/// Something a player did (or was made to do) on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A tile was placed on the board.
    Play(Move),
    /// A tile was taken from the boneyard.
    Draw(Domino),
    /// No legal play and nothing left to draw.
    Pass,
}

/// Record of an action, kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who acted.
    pub player: PlayerId,
    /// What they did.
    pub action: Action,
    /// Position in the history, starting at 0.
    pub sequence: u32,
}
