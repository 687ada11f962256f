use super::codes::{Code, Label, IS_WILDCARD, LETTER_MASK, UNINIT};
use super::list::Item;
use super::Letter;
use crate::error::Error;
use std::convert::TryFrom;
use std::num::NonZeroU8;

/// A letter in a formed word, either taken from the rack as is,
/// or not held by the rack (covered by a blank, or still to be acquired).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Tile(pub(super) NonZeroU8);

impl Default for Tile {
    fn default() -> Self {
        Self(NonZeroU8::new(UNINIT).unwrap())
    }
}

impl Item for Tile {
    fn code(&self) -> Code {
        self.0.get()
    }
}

impl Tile {
    /// Create `Tile` from a (non blank) rack `Letter`
    pub fn from_letter(letter: Letter) -> Tile {
        Tile(letter.0)
    }

    /// Return a wildcard tile for letter `label`.
    /// ## Example
    /// ```
    /// use rack_helper::{Item, Tile};
    /// let tile = Tile::wildcard_from_letter(1);
    /// assert_eq!(tile.code(), 65);
    /// assert_eq!(tile.label(), 1);
    /// ```
    pub fn wildcard_from_letter(label: Label) -> Tile {
        Tile(NonZeroU8::new((label & LETTER_MASK) | IS_WILDCARD).unwrap())
    }

    /// Check if the tile is a wildcard
    pub fn is_wildcard(&self) -> bool {
        self.code() & IS_WILDCARD != 0
    }

    /// Get label for tile, ignoring the wildcard attribute.
    pub fn label(&self) -> Label {
        self.code() & LETTER_MASK
    }
}

impl TryFrom<Code> for Tile {
    type Error = Error;
    fn try_from(code: Code) -> Result<Self, Self::Error> {
        match code {
            1..=26 | 65..=90 => Ok(Self(NonZeroU8::new(code).unwrap())),
            _ => Err(Self::Error::InvalidTileCode(code)),
        }
    }
}

impl From<Tile> for Code {
    fn from(tile: Tile) -> Code {
        tile.0.get()
    }
}
