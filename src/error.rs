//! Error type shared by the board, game and search layers.

use thiserror::Error;

use crate::core::{End, PlayerId};
use crate::tiles::{Domino, Pip};

/// Errors raised by the dominoes engine.
///
/// Every operation that returns one of these leaves the state it was called
/// on exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// An end of the board was requested while no tiles have been placed.
    #[error("the board is empty")]
    EmptyBoard,

    /// A tile does not share a pip with the end it was played against.
    #[error("{domino} does not match the {end} end ({exposed})")]
    EndsMismatch {
        domino: Domino,
        end: End,
        exposed: Pip,
    },

    /// `Domino::other_end` was asked about a pip the tile does not carry.
    #[error("{domino} has no {pip} pip")]
    NoMatchingPip { domino: Domino, pip: Pip },

    /// The tile being played is not in the current player's hand.
    #[error("{domino} is not in the hand of {player}")]
    NotInHand { player: PlayerId, domino: Domino },

    /// A move was submitted after the game reached a result.
    #[error("the game is already over")]
    GameOver,

    /// A tile appears more than once across hands, boneyard and board.
    #[error("{0} appears more than once")]
    DuplicateTile(Domino),

    /// Rejected game or enumeration configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
