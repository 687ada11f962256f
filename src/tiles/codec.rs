use super::codes::{Code, Label, BLANK, IS_WILDCARD, LETTER_MASK};
use super::{Letters, Word, DIM};
use crate::error::Error;
use std::convert::TryFrom;

/// The character used for a blank tile on the rack
pub const BLANK_CHAR: char = ' ';

/// Translate from string to tile codes and vice versa.
/// - 1 .. 26: `a` .. `z`
/// - 64: blank tile (` ` on the rack)
/// - 65 .. 90: `A` .. `Z`, a letter that was not taken from the rack as is
///
/// Input is case insensitive: `A` and `a` both encode to 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec;

impl Codec {
    fn encode_char(ch: char, blank_allowed: bool) -> Result<Code, Error> {
        match ch {
            'a'..='z' => Ok(ch as u8 - b'a' + 1),
            'A'..='Z' => Ok(ch as u8 - b'A' + 1),
            BLANK_CHAR if blank_allowed => Ok(BLANK),
            _ => Err(Error::InvalidToken(String::from(ch))),
        }
    }

    fn encode(word: &str, blank_allowed: bool) -> Result<Vec<Code>, Error> {
        if word.chars().count() > DIM {
            return Err(Error::EncodeStringTooLong(String::from(word)));
        }
        word.chars()
            .map(|ch| Self::encode_char(ch, blank_allowed))
            .collect()
    }

    /// Encode the tiles on a rack. A space is a blank tile.
    /// ## Errors
    /// If a token is not a letter or a space, or there are more than 16 tokens.
    /// ## Examples
    /// ```
    /// use rack_helper::{Codec, Error};
    /// let letters = Codec.encode_rack("Ska ")?;
    /// assert_eq!(letters.codes(), vec![19, 11, 1, 64]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn encode_rack(&self, rack: &str) -> Result<Letters, Error> {
        Letters::try_from(Self::encode(rack, true)?)
    }

    /// Encode a dictionary word.
    /// ## Errors
    /// If a token is not a letter, or the word is longer than 16 letters.
    pub fn encode_word(&self, word: &str) -> Result<Word, Error> {
        Word::try_from(Self::encode(word, false)?)
    }

    /// Encode a word of any length as labels.
    /// ## Errors
    /// If a token is not a letter.
    pub(crate) fn encode_labels(&self, word: &str) -> Result<Vec<Label>, Error> {
        word.chars().map(|ch| Self::encode_char(ch, false)).collect()
    }

    /// Decode a single code
    pub fn decode_code(&self, code: Code) -> char {
        let label = code & LETTER_MASK;
        match code {
            BLANK => BLANK_CHAR,
            _ if code & IS_WILDCARD != 0 => (b'A' + label - 1) as char,
            _ => (b'a' + label - 1) as char,
        }
    }

    /// Decode codes as a string.
    /// ## Examples
    /// ```
    /// use rack_helper::Codec;
    /// assert_eq!(Codec.decode(&[19, 11, 1, 71]), "skaG");
    /// assert_eq!(Codec.decode(&[1, 64]), "a ");
    /// ```
    pub fn decode(&self, codes: &[Code]) -> String {
        codes.iter().map(|&code| self.decode_code(code)).collect()
    }

    /// Decode a word in lowercase, ignoring wildcards
    pub fn decode_letters(&self, word: &Word) -> String {
        word.iter()
            .map(|tile| self.decode_code(tile.label()))
            .collect()
    }
}
