use super::codes::Code;
use super::{Letter, Tile, DIM};
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt::Debug;
use std::iter::{FromIterator, IntoIterator};
use std::ops::{Index, Range};
use std::slice::Iter;
use tinyvec::{ArrayVec, ArrayVecIterator};

/// common trait for [`Tile`](crate::Tile) and [`Letter`](crate::Letter)
pub trait Item:
    Debug + Clone + Copy + Eq + PartialEq + Default + Into<Code> + TryFrom<Code, Error = Error>
{
    fn code(&self) -> Code;
}

pub(super) type Items<T> = ArrayVec<[T; DIM]>;

/// A wrapper around a list of at most 16 `Item`s.
/// Used to represent [`Word`](crate::Word) and [`Letters`](crate::Letters).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ItemList<T: Item>(pub Items<T>);

/// A collection of [`Tile`](crate::Tile): a word as formed from a rack.
pub type Word = ItemList<Tile>;

/// A collection of [`Letter`](crate::Letter): the tiles on a rack.
pub type Letters = ItemList<Letter>;

impl<T: Item> Index<usize> for ItemList<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T: Item> Index<Range<usize>> for ItemList<T> {
    type Output = [T];
    fn index(&self, range: Range<usize>) -> &Self::Output {
        &self.0[range]
    }
}

impl<T: Item> ItemList<T> {
    pub fn new() -> ItemList<T> {
        ItemList::<T>(Items::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append `item`.
    /// ## Panics
    /// If the list already holds 16 items.
    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    pub fn iter(&self) -> Iter<T> {
        self.0.iter()
    }

    /// Return a copy with the item at `pos` removed.
    pub fn remove(&self, pos: usize) -> ItemList<T> {
        let mut list = *self;
        list.0.remove(pos);
        list
    }

    pub fn codes(&self) -> Vec<Code> {
        self.iter().map(|&item| item.into()).collect()
    }
}

impl Letters {
    /// The number of blanks in the list
    pub fn blanks(&self) -> usize {
        self.iter().filter(|letter| letter.is_blank()).count()
    }

    /// Position of the first regular letter with `label`
    pub fn position_of(&self, label: u8) -> Option<usize> {
        self.iter()
            .position(|letter| !letter.is_blank() && letter.label() == label)
    }
}

impl Word {
    /// Number of tiles that were not taken from the rack as is
    pub fn wildcards(&self) -> usize {
        self.iter().filter(|tile| tile.is_wildcard()).count()
    }
}

impl<T: Item> FromIterator<T> for ItemList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ItemList::<T>(iter.into_iter().collect())
    }
}

impl<T: Item> IntoIterator for ItemList<T> {
    type Item = T;
    type IntoIter = ArrayVecIterator<[T; DIM]>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: Item> TryFrom<Vec<u8>> for ItemList<T> {
    type Error = Error;
    fn try_from(codes: Vec<u8>) -> Result<Self, Error> {
        if codes.len() > DIM {
            return Err(Error::EncodeStringTooLong(format!("{:?}", codes)));
        }
        codes.into_iter().map(T::try_from).collect()
    }
}
