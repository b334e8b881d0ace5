//! The board and its matching-pip rules.

mod board;

pub use board::{Board, PlacedTile};
