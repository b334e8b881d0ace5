//! The line of play.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::End;
use crate::error::{Error, Result};
use crate::tiles::{Domino, Pip};

/// A tile as it lies on the board.
///
/// The orientation is stored, not recomputed: `left` touches the previous
/// tile (or is the board's left end), `right` touches the next one.
/// Comparing placed tiles is orientation-sensitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedTile {
    pub left: Pip,
    pub right: Pip,
}

impl PlacedTile {
    /// The tile, in its placed orientation.
    #[must_use]
    pub const fn domino(self) -> Domino {
        Domino::new(self.left, self.right)
    }
}

impl std::fmt::Display for PlacedTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

/// The board: placed tiles in order, extended at either end.
///
/// Every pair of neighbouring tiles touches on equal pips. Tiles only enter
/// through [`Board::add_left`] and [`Board::add_right`], which refuse a tile
/// that does not match the end it is played against and leave the board
/// untouched when they do.
///
/// Backed by an `im::Vector`, so cloning a board to branch a game tree is
/// O(1) and the clones never observe each other's mutations.
///
/// ```
/// use dominoes::board::Board;
/// use dominoes::tiles::Domino;
///
/// let mut board = Board::new();
/// board.add_left(Domino::new(1, 2)).unwrap();
/// board.add_left(Domino::new(1, 3)).unwrap();
/// assert_eq!(board.to_string(), "[3|1][1|2]");
/// assert_eq!(board.left_end().unwrap(), 3);
/// assert_eq!(board.right_end().unwrap(), 2);
/// assert!(board.add_left(Domino::new(4, 4)).is_err());
/// assert_eq!(board.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    tiles: Vector<PlacedTile>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placed tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Exposed pip on the left side of the first tile.
    pub fn left_end(&self) -> Result<Pip> {
        self.tiles.front().map(|t| t.left).ok_or(Error::EmptyBoard)
    }

    /// Exposed pip on the right side of the last tile.
    pub fn right_end(&self) -> Result<Pip> {
        self.tiles.back().map(|t| t.right).ok_or(Error::EmptyBoard)
    }

    /// Exposed pip at `end`.
    pub fn end(&self, end: End) -> Result<Pip> {
        match end {
            End::Left => self.left_end(),
            End::Right => self.right_end(),
        }
    }

    /// True if `domino` may be played at `end`. Anything may open the board.
    #[must_use]
    pub fn accepts(&self, domino: Domino, end: End) -> bool {
        self.end(end).map_or(true, |pip| domino.matches(pip))
    }

    /// Place `domino` on the left.
    ///
    /// On an empty board the tile is placed as constructed. Otherwise it is
    /// turned so its matching pip faces the current left end, and its other
    /// pip becomes the new left end.
    pub fn add_left(&mut self, domino: Domino) -> Result<()> {
        let tile = match self.tiles.front() {
            None => PlacedTile {
                left: domino.first(),
                right: domino.second(),
            },
            Some(front) => PlacedTile {
                left: Self::far_pip(domino, End::Left, front.left)?,
                right: front.left,
            },
        };
        self.tiles.push_front(tile);
        Ok(())
    }

    /// Place `domino` on the right. Mirror image of [`Board::add_left`].
    pub fn add_right(&mut self, domino: Domino) -> Result<()> {
        let tile = match self.tiles.back() {
            None => PlacedTile {
                left: domino.first(),
                right: domino.second(),
            },
            Some(back) => PlacedTile {
                left: back.right,
                right: Self::far_pip(domino, End::Right, back.right)?,
            },
        };
        self.tiles.push_back(tile);
        Ok(())
    }

    /// Place `domino` at `end`.
    pub fn add(&mut self, domino: Domino, end: End) -> Result<()> {
        match end {
            End::Left => self.add_left(domino),
            End::Right => self.add_right(domino),
        }
    }

    /// Iterate over placed tiles from left to right.
    pub fn tiles(&self) -> impl Iterator<Item = PlacedTile> + '_ {
        self.tiles.iter().copied()
    }

    /// True if `domino` has been placed, in either orientation.
    #[must_use]
    pub fn contains(&self, domino: Domino) -> bool {
        self.tiles.iter().any(|t| t.domino() == domino)
    }

    fn far_pip(domino: Domino, end: End, exposed: Pip) -> Result<Pip> {
        domino.other_end(exposed).map_err(|_| Error::EndsMismatch {
            domino,
            end,
            exposed,
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in &self.tiles {
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_chained(board: &Board) {
        let tiles: Vec<_> = board.tiles().collect();
        for pair in tiles.windows(2) {
            assert_eq!(pair[0].right, pair[1].left, "broken chain in {board}");
        }
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert_eq!(board.len(), 0);
        assert!(board.is_empty());
        assert_eq!(board.left_end(), Err(Error::EmptyBoard));
        assert_eq!(board.right_end(), Err(Error::EmptyBoard));
        assert_eq!(board.to_string(), "");
    }

    #[test]
    fn test_first_tile_keeps_construction_order() {
        let mut left = Board::new();
        left.add_left(Domino::new(5, 2)).unwrap();
        let mut right = Board::new();
        right.add_right(Domino::new(5, 2)).unwrap();

        assert_eq!(left.to_string(), "[5|2]");
        assert_eq!(left, right);
    }

    #[test]
    fn test_doubles_chain_by_value() {
        let mut board = Board::new();
        board.add_right(Domino::new(3, 3)).unwrap();
        board.add_right(Domino::new(3, 6)).unwrap();
        board.add_right(Domino::new(6, 6)).unwrap();
        board.add_left(Domino::new(1, 3)).unwrap();

        assert_eq!(board.to_string(), "[1|3][3|3][3|6][6|6]");
        assert_eq!(board.left_end(), Ok(1));
        assert_eq!(board.right_end(), Ok(6));
        assert_chained(&board);
    }

    #[test]
    fn test_mismatch_only_checks_requested_end() {
        let mut board = Board::new();
        board.add_left(Domino::new(1, 2)).unwrap();

        // [2|4] matches the right end but not the left one.
        let err = board.add_left(Domino::new(2, 4)).unwrap_err();
        assert_eq!(
            err,
            Error::EndsMismatch {
                domino: Domino::new(2, 4),
                end: End::Left,
                exposed: 1,
            }
        );
        assert_eq!(board.to_string(), "[1|2]");

        board.add_right(Domino::new(2, 4)).unwrap();
        assert_eq!(board.to_string(), "[1|2][2|4]");
    }

    #[test]
    fn test_accepts() {
        let mut board = Board::new();
        assert!(board.accepts(Domino::new(0, 0), End::Left));
        assert!(board.accepts(Domino::new(0, 0), End::Right));

        board.add(Domino::new(2, 5), End::Left).unwrap();
        assert!(board.accepts(Domino::new(2, 2), End::Left));
        assert!(!board.accepts(Domino::new(2, 2), End::Right));
        assert!(board.accepts(Domino::new(5, 1), End::Right));
    }

    #[test]
    fn test_equality_is_orientation_sensitive() {
        let mut a = Board::new();
        a.add_left(Domino::new(1, 2)).unwrap();
        let mut b = Board::new();
        b.add_left(Domino::new(2, 1)).unwrap();

        assert_ne!(a, b);
        assert!(a.contains(Domino::new(2, 1)));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Board::new();
        original.add_left(Domino::new(1, 2)).unwrap();

        let mut branch = original.clone();
        branch.add_right(Domino::new(2, 6)).unwrap();

        assert_eq!(original.to_string(), "[1|2]");
        assert_eq!(branch.to_string(), "[1|2][2|6]");
    }
}
