//! The domino tile: an unordered pair of pip values.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of pips on one half of a tile.
pub type Pip = u8;

/// Highest pip value of the standard double-six set.
pub const DOUBLE_SIX: Pip = 6;

/// A domino tile.
///
/// The construction order of the two pips is kept so the tile renders the
/// way it was built, but equality, hashing and ordering treat the tile as an
/// unordered pair: `Domino::new(1, 2) == Domino::new(2, 1)`.
///
/// ```
/// use dominoes::tiles::Domino;
///
/// let d = Domino::new(3, 5);
/// assert_eq!(d, Domino::new(5, 3));
/// assert!(d.matches(5));
/// assert_eq!(d.other_end(5).unwrap(), 3);
/// assert_eq!(d.to_string(), "[3|5]");
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Domino {
    a: Pip,
    b: Pip,
}

impl Domino {
    /// Create a tile from two pip values, in display order.
    #[must_use]
    pub const fn new(a: Pip, b: Pip) -> Self {
        Self { a, b }
    }

    /// First pip, as constructed.
    #[must_use]
    pub const fn first(self) -> Pip {
        self.a
    }

    /// Second pip, as constructed.
    #[must_use]
    pub const fn second(self) -> Pip {
        self.b
    }

    /// Both pips with the lower one first.
    #[must_use]
    pub fn normalized(self) -> (Pip, Pip) {
        (self.a.min(self.b), self.a.max(self.b))
    }

    /// True if both halves carry the same value.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.a == self.b
    }

    /// True if either half carries `pip`.
    #[must_use]
    pub const fn matches(self, pip: Pip) -> bool {
        self.a == pip || self.b == pip
    }

    /// Given one half of the tile, return the value on the opposite half.
    pub fn other_end(self, pip: Pip) -> Result<Pip> {
        if self.a == pip {
            Ok(self.b)
        } else if self.b == pip {
            Ok(self.a)
        } else {
            Err(Error::NoMatchingPip { domino: self, pip })
        }
    }

    /// Every distinct tile with values in `0..=max_pip`, doubles included.
    ///
    /// Tiles come out in `normalized` order, which makes the set stable for
    /// seeded shuffling.
    ///
    /// ```
    /// use dominoes::tiles::Domino;
    ///
    /// assert_eq!(Domino::full_set(6).len(), 28);
    /// assert_eq!(Domino::full_set(0), vec![Domino::new(0, 0)]);
    /// ```
    #[must_use]
    pub fn full_set(max_pip: Pip) -> Vec<Domino> {
        (0..=max_pip)
            .flat_map(|a| (a..=max_pip).map(move |b| Domino::new(a, b)))
            .collect()
    }

    /// Size of the set generated by [`Domino::full_set`].
    #[must_use]
    pub fn set_size(max_pip: Pip) -> usize {
        let n = usize::from(max_pip) + 1;
        n * (n + 1) / 2
    }
}

impl PartialEq for Domino {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Domino {}

impl Hash for Domino {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl PartialOrd for Domino {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Domino {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized().cmp(&other.normalized())
    }
}

impl std::fmt::Display for Domino {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.a, self.b)
    }
}
