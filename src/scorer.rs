use crate::matcher::can_form;
use crate::tiles::{Label, Word};
use crate::values::{letter_points, points};
use crate::Rack;
use multiset::HashMultiSet;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// The letters in a word that are played with a blank.
pub type BlankAssignment = HashMultiSet<Label>;

/// The lowest and highest score a word can get, depending on the
/// letters that are played with a blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreRange {
    pub min: u32,
    pub max: u32,
}

impl ScoreRange {
    /// A range with a single score
    pub fn fixed(score: u32) -> ScoreRange {
        ScoreRange {
            min: score,
            max: score,
        }
    }

    /// Check if the score does not depend on the blanks
    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }
}

/// Display as "7", or "7 to 9" if the score is not fixed.
impl fmt::Display for ScoreRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "{}", self.max)
        } else {
            write!(f, "{} to {}", self.min, self.max)
        }
    }
}

/// The points of `word`, where the letters in `blanks` are played with a blank.
/// Letters in `blanks` that are not in the word are ignored.
/// ## Examples
/// ```
/// # use rack_helper::{score, BlankAssignment, Codec, Error};
/// let word = Codec.encode_word("skag")?;
/// assert_eq!(score(&word, &BlankAssignment::new()), 9);
/// let blanks: BlankAssignment = vec![11, 26].into_iter().collect();
/// assert_eq!(score(&word, &blanks), 4);
/// # Ok::<(), Error>(())
/// ```
pub fn score(word: &Word, blanks: &BlankAssignment) -> u32 {
    let mut blanks = blanks.clone();
    word.iter()
        .filter(|tile| !blanks.remove(&tile.label()))
        .map(|&tile| letter_points(tile))
        .sum()
}

/// The score range of `word` when it is formed with `rack`.
///
/// Blanks are used for letters the rack does not hold; letters
/// that are acquired are regular tiles. The highest score is reached when the blanks
/// replace the cheapest missing letters, the lowest when they replace the most valuable.
/// Without blanks, both are the sum of the letter values.
/// ## Examples
/// ```
/// # use rack_helper::{score_range, Codec, Error, Rack, ScoreRange};
/// let rack: Rack = "ska ".parse()?;
/// let range = score_range(&Codec.encode_word("skag")?, &rack);
/// assert_eq!(range, ScoreRange::fixed(7));
///
/// let range = score_range(&Codec.encode_word("skags")?, &rack);
/// assert_eq!(range, ScoreRange { min: 8, max: 9 });
/// # Ok::<(), Error>(())
/// ```
pub fn score_range(word: &Word, rack: &Rack) -> ScoreRange {
    let result = can_form(word, rack);
    range_with_missing(word, result.missing.iter().copied(), rack.blanks())
}

/// Score range of `word` with `blanks` available to cover the `missing` letters.
pub(crate) fn range_with_missing<I>(word: &Word, missing: I, blanks: usize) -> ScoreRange
where
    I: IntoIterator<Item = Label>,
{
    let total: u32 = word.iter().map(|&tile| letter_points(tile)).sum();
    let mut values: Vec<u32> = missing.into_iter().map(points).collect();
    values.sort_unstable();
    let covered = blanks.min(values.len());
    let cheapest: u32 = values[..covered].iter().sum();
    let dearest: u32 = values[values.len() - covered..].iter().sum();
    ScoreRange {
        min: total - dearest,
        max: total - cheapest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Codec, Error};

    fn range_helper(word: &str, letters: &str) -> Result<ScoreRange, Error> {
        let rack: Rack = letters.parse()?;
        Ok(score_range(&Codec.encode_word(word)?, &rack))
    }

    #[test]
    fn test_score_ignores_unused_blanks() -> Result<(), Error> {
        let word = Codec.encode_word("fizz")?;
        let blanks: BlankAssignment = vec![26, 26, 26].into_iter().collect();
        assert_eq!(score(&word, &blanks), 5);
        let blanks: BlankAssignment = vec![26].into_iter().collect();
        assert_eq!(score(&word, &blanks), 15);
        Ok(())
    }

    #[test]
    fn test_range_without_blanks() -> Result<(), Error> {
        assert_eq!(range_helper("skag", "gaks")?, ScoreRange::fixed(9));
        assert_eq!(range_helper("skags", "ska")?, ScoreRange::fixed(10));
        Ok(())
    }

    #[test]
    fn test_range_blank_forced() -> Result<(), Error> {
        assert_eq!(range_helper("skag", "ska ")?, ScoreRange::fixed(7));
        Ok(())
    }

    #[test]
    fn test_range_blank_choice() -> Result<(), Error> {
        // one blank for "q" or "z", the other is acquired
        let range = range_helper("quiz", "ui ")?;
        assert_eq!(range, ScoreRange { min: 12, max: 12 });
        // one blank for "j" (8) or "m" (3)
        let range = range_helper("jam", "a ")?;
        assert_eq!(range, ScoreRange { min: 4, max: 9 });
        assert_eq!(range.to_string(), "4 to 9");
        Ok(())
    }

    #[test]
    fn test_range_spare_blanks() -> Result<(), Error> {
        // the rack holds both letters, blanks are not used
        assert_eq!(range_helper("ax", "ax  ")?, ScoreRange::fixed(9));
        assert_eq!(range_helper("ax", "a  ")?, ScoreRange::fixed(1));
        Ok(())
    }

    #[test]
    fn test_range_matches_score() -> Result<(), Error> {
        let rack: Rack = "jm ".parse()?;
        let word = Codec.encode_word("jam")?;
        let range = score_range(&word, &rack);
        let blanks: BlankAssignment = vec![1].into_iter().collect();
        assert_eq!(range, ScoreRange::fixed(score(&word, &blanks)));
        assert!(range.min <= range.max);
        Ok(())
    }
}
