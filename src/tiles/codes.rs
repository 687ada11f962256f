/// Code 1..26 for the letters `a`..`z`
pub type Label = u8;

/// Code used to represent a [`Tile`](crate::Tile) or [`Letter`](crate::Letter). See [`Codec`](crate::Codec).
pub type Code = u8;

/// code for BLANK tile
pub const BLANK: Code = 0x40;

/// Mask to get label value 0..31
pub const LETTER_MASK: u8 = 0b11111;

/// bitflag for a letter made with a blank
pub const IS_WILDCARD: Code = 0x40;

/// An uninitialized tile
pub(super) const UNINIT: Code = 0x7f;
