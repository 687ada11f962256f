use crate::tiles::{Codec, Label, Word};
use crate::Rack;
use multiset::HashMultiSet;

/// The result of matching a word against a rack.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// The word can be played with the rack as it is
    pub playable: bool,
    /// Number of letters to acquire, after the blanks are used
    pub deficit: usize,
    /// Number of blanks needed to cover missing letters
    pub blanks_used: usize,
    /// Letters in the word not covered by the regular letters on the rack
    pub missing: HashMultiSet<Label>,
}

impl MatchResult {
    /// True if the word needs between 1 and `budget` extra letters.
    pub fn is_near_miss(&self, budget: usize) -> bool {
        (1..=budget).contains(&self.deficit)
    }

    /// The number of missing letters, before blanks are used
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// The missing letters with their count, in alphabetic order
    pub fn missing_letters(&self) -> Vec<(char, usize)> {
        let mut letters: Vec<(char, usize)> = self
            .missing
            .distinct_elements()
            .map(|&label| (Codec.decode_code(label), self.missing.count_of(&label)))
            .collect();
        letters.sort_unstable();
        letters
    }
}

/// Check if `word` can be formed with the letters on `rack`.
///
/// Every occurrence of a letter in the word needs its own tile. Occurrences
/// the rack can not supply are missing; blanks cover missing letters, and
/// what is left is the deficit.
/// ## Examples
/// ```
/// # use rack_helper::{can_form, Codec, Error, Rack};
/// let rack: Rack = "ska ".parse()?;
/// let result = can_form(&Codec.encode_word("skag")?, &rack);
/// assert!(result.playable);
/// assert_eq!(result.blanks_used, 1);
///
/// let result = can_form(&Codec.encode_word("skags")?, &rack);
/// assert_eq!(result.deficit, 1);
/// assert_eq!(result.missing_letters(), vec![('g', 1), ('s', 1)]);
/// # Ok::<(), Error>(())
/// ```
pub fn can_form(word: &Word, rack: &Rack) -> MatchResult {
    let required: HashMultiSet<Label> = word.iter().map(|tile| tile.label()).collect();
    let missing = required - rack.counts().clone();
    let blanks_used = missing.len().min(rack.blanks());
    let deficit = missing.len() - blanks_used;
    MatchResult {
        playable: deficit == 0,
        deficit,
        blanks_used,
        missing,
    }
}
