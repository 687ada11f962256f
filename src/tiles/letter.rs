use super::codes::{Code, Label, BLANK, LETTER_MASK, UNINIT};
use super::list::Item;
use crate::error::Error;
use std::convert::TryFrom;
use std::num::NonZeroU8;

/// A tile on the rack.
///
/// Either a regular letter or a `blank` that can be used as any letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Letter(pub(super) NonZeroU8);

impl Default for Letter {
    fn default() -> Self {
        Self(NonZeroU8::new(UNINIT).unwrap())
    }
}

impl Item for Letter {
    fn code(&self) -> Code {
        self.0.get()
    }
}

impl Letter {
    /// Return the letter with `label` 1..=26
    pub(crate) fn from_label(label: Label) -> Letter {
        debug_assert!((1..=26).contains(&label));
        Letter(NonZeroU8::new(label & LETTER_MASK).unwrap())
    }

    /// Check if letter is `blank`
    pub fn is_blank(&self) -> bool {
        self.code() == BLANK
    }

    /// Get label for letter. A blank has label 0.
    pub fn label(&self) -> Label {
        self.code() & LETTER_MASK
    }
}

impl TryFrom<Code> for Letter {
    type Error = Error;
    fn try_from(code: Code) -> Result<Self, Self::Error> {
        match code {
            1..=26 | BLANK => Ok(Self(NonZeroU8::new(code).unwrap())),
            _ => Err(Self::Error::InvalidLetterCode(code)),
        }
    }
}

impl From<Letter> for Code {
    fn from(letter: Letter) -> Code {
        letter.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank() {
        let blank = Letter::try_from(BLANK).unwrap();
        assert!(blank.is_blank());
        assert_eq!(blank.label(), 0);
        assert_eq!(blank.code(), BLANK);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Letter::try_from(3).unwrap().label(), 3);
        assert!(Letter::try_from(0).is_err());
        assert!(Letter::try_from(27).is_err());
        assert!(Letter::try_from(BLANK).unwrap().is_blank());
    }
}
