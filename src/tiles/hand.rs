//! A player's hand of tiles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::domino::Domino;

/// Tiles held by one player, in the order they were received.
///
/// Backed by a `SmallVec` sized for a standard seven-tile deal so cloning a
/// game for branching does not allocate per hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: SmallVec<[Domino; 8]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tiles held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// True if the hand holds `domino` in either orientation.
    #[must_use]
    pub fn contains(&self, domino: Domino) -> bool {
        self.tiles.contains(&domino)
    }

    /// Add a tile to the end of the hand.
    pub fn push(&mut self, domino: Domino) {
        self.tiles.push(domino);
    }

    /// Remove `domino`, returning the tile as it was held.
    ///
    /// Remaining tiles keep their relative order.
    pub fn remove(&mut self, domino: Domino) -> Option<Domino> {
        let idx = self.tiles.iter().position(|&d| d == domino)?;
        Some(self.tiles.remove(idx))
    }

    /// Iterate over the held tiles.
    pub fn iter(&self) -> impl Iterator<Item = Domino> + '_ {
        self.tiles.iter().copied()
    }

    /// The highest double in the hand, if any.
    #[must_use]
    pub fn highest_double(&self) -> Option<Domino> {
        self.iter().filter(|d| d.is_double()).max()
    }
}

impl FromIterator<Domino> for Hand {
    fn from_iter<I: IntoIterator<Item = Domino>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in &self.tiles {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
