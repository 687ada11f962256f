use crate::labelset::LabelSet;
use crate::tiles::{Codec, Label, Letters};
use crate::Error;
use multiset::HashMultiSet;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The tiles a player holds: a multiset of letters and a number of blanks.
///
/// ## Examples
/// ```
/// use rack_helper::{Error, Rack};
/// let rack: Rack = "skaS ".parse()?;
/// assert_eq!(rack.len(), 5);
/// assert_eq!(rack.blanks(), 1);
/// assert_eq!(rack.letter_counts(), vec![('a', 1), ('k', 1), ('s', 2)]);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Rack {
    letters: Letters,
    counts: HashMultiSet<Label>,
    blanks: usize,
}

impl Rack {
    /// Create a rack from encoded letters
    pub fn new(letters: Letters) -> Rack {
        let counts = letters
            .iter()
            .filter(|letter| !letter.is_blank())
            .map(|letter| letter.label())
            .collect();
        Rack {
            letters,
            counts,
            blanks: letters.blanks(),
        }
    }

    /// All tiles, in the order given
    pub fn letters(&self) -> Letters {
        self.letters
    }

    /// The regular letters without the blanks
    pub(crate) fn regular_letters(&self) -> Letters {
        self.letters
            .iter()
            .copied()
            .filter(|letter| !letter.is_blank())
            .collect()
    }

    /// The regular letters as a multiset of labels
    pub fn counts(&self) -> &HashMultiSet<Label> {
        &self.counts
    }

    /// Number of tiles with letter `label`
    pub fn count_of(&self, label: Label) -> usize {
        self.counts.count_of(&label)
    }

    /// Number of blanks
    pub fn blanks(&self) -> usize {
        self.blanks
    }

    /// Total number of tiles, including blanks
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The set of distinct regular letters
    pub fn labels(&self) -> LabelSet {
        self.counts.distinct_elements().copied().collect()
    }

    /// Count for each distinct letter, in alphabetic order
    pub fn letter_counts(&self) -> Vec<(char, usize)> {
        self.labels()
            .iter()
            .map(|label| (Codec.decode_code(label), self.count_of(label)))
            .collect()
    }
}

impl FromStr for Rack {
    type Err = Error;

    /// Parse a rack: letters `a`..`z` (case insensitive) and ` ` for a blank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Rack::new(Codec.encode_rack(s)?))
    }
}

impl TryFrom<&str> for Rack {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Codec.decode(&self.letters.codes()))
    }
}
