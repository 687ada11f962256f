use crate::dictionary::Dictionary;
use crate::error::Error;
use crate::options::SearchOptions;
use crate::rack::Rack;
use crate::suggest::{analyse, plays, suggest, Analysis, Play, Suggestions};

/// A dictionary with the options used to search it.
///
/// ## Examples
/// ```
/// use rack_helper::Helper;
/// let helper = Helper::default().with_dictionary_from_words(&["skag", "skags", "ask"])?;
/// let plays = helper.plays("ska ")?;
/// assert_eq!(plays[0].word, "ask");
/// let suggestions = helper.suggestions("ska")?;
/// assert_eq!(suggestions.len(), 2);
/// # Ok::<(), rack_helper::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Helper {
    dictionary: Dictionary,
    options: SearchOptions,
}

impl Helper {
    /// Create a helper with an empty dictionary and default options
    pub fn new() -> Helper {
        Helper::default()
    }

    /// Read the dictionary from `wordfile`, one word per line.
    /// ## Errors
    /// If the file can not be read, or contains no valid words.
    pub fn with_dictionary_from_file(mut self, wordfile: &str) -> Result<Helper, Error> {
        self.dictionary = Dictionary::from_file(wordfile)?;
        Ok(self)
    }

    /// Specify the dictionary by a list of words.
    /// ## Errors
    /// If a word contains something other than letters.
    pub fn with_dictionary_from_words<S: AsRef<str>>(
        mut self,
        words: &[S],
    ) -> Result<Helper, Error> {
        self.dictionary = Dictionary::from_words(words)?;
        Ok(self)
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Deserialize the dictionary from a [`bincode`](https://docs.rs/bincode) encoded `wordfile`.
    /// ## Errors
    /// If the `wordfile` does not exist, or cannot be decoded.
    pub fn with_dictionary_deserialize_from(mut self, wordfile: &str) -> Result<Helper, Error> {
        self.dictionary = Dictionary::deserialize_from(wordfile)?;
        Ok(self)
    }

    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Helper {
        self.dictionary = dictionary;
        self
    }

    pub fn with_options(mut self, options: SearchOptions) -> Helper {
        self.options = options;
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Parse `letters` as a rack, and check its length.
    /// ## Errors
    /// If `letters` contains something other than letters and blanks,
    /// or more tiles than `options.max_rack_len`.
    pub fn rack(&self, letters: &str) -> Result<Rack, Error> {
        let rack: Rack = letters.parse()?;
        self.options.check_rack(&rack)?;
        Ok(rack)
    }

    /// The words that can be played with `letters`
    pub fn plays(&self, letters: &str) -> Result<Vec<Play>, Error> {
        plays(&self.rack(letters)?, &self.dictionary, &self.options)
    }

    /// The words that are worth going for with `letters`
    pub fn suggestions(&self, letters: &str) -> Result<Suggestions, Error> {
        suggest(&self.rack(letters)?, &self.dictionary, &self.options)
    }

    /// Plays, and suggestions if `with_suggestions` is set
    pub fn analyse(&self, letters: &str, with_suggestions: bool) -> Result<Analysis, Error> {
        self.analyse_rack(&self.rack(letters)?, with_suggestions)
    }

    /// Same as [`analyse`](Helper::analyse), for a rack that is already parsed
    pub fn analyse_rack(&self, rack: &Rack, with_suggestions: bool) -> Result<Analysis, Error> {
        if with_suggestions {
            analyse(rack, &self.dictionary, &self.options)
        } else {
            Ok(Analysis {
                plays: plays(rack, &self.dictionary, &self.options)?,
                suggestions: Suggestions::default(),
            })
        }
    }

    /// At most `n` words in the dictionary that are close to `word`,
    /// see [`Dictionary::alternatives`].
    pub fn alternatives(&self, word: &str, n: usize) -> Result<Vec<String>, Error> {
        self.dictionary.alternatives(word, n)
    }
}
