//! Tiles and the collections that hold them before they reach the board.

pub mod domino;
pub mod hand;

pub use domino::{Domino, Pip, DOUBLE_SIX};
pub use hand::Hand;
