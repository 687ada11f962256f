//! Basic types for working with tiles.
mod codec;
mod codes;
mod letter;
mod list;
mod tile;

/// Maximum length of a rack or word
pub(crate) const DIM: usize = 16;
pub use codec::{Codec, BLANK_CHAR};
pub use codes::{Code, Label, BLANK};
pub use letter::Letter;
pub use list::{Item, ItemList, Letters, Word};
pub use tile::Tile;

impl Word {
    /// A regular tile for `label`
    pub(crate) fn tile(label: Label) -> Tile {
        Tile::from_letter(Letter::from_label(label))
    }

    /// The labels of the letters, ignoring wildcards
    pub fn labels(&self) -> Vec<Label> {
        self.iter().map(|tile| tile.label()).collect()
    }
}
