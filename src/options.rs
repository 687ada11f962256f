use crate::{Error, Rack};

/// Number of tiles on a scrabble rack
pub const RACK_SIZE: usize = 7;

/// Options for a search in the dictionary.
///
/// ## Examples
/// ```
/// use rack_helper::SearchOptions;
/// let options = SearchOptions::default().with_budget(1).with_min_len(2);
/// assert_eq!(options.budget, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of letters to acquire for a suggestion
    pub budget: usize,
    /// Minimum length of a word
    pub min_len: usize,
    /// Maximum number of tiles on a rack
    pub max_rack_len: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            budget: 2,
            min_len: 1,
            max_rack_len: RACK_SIZE,
        }
    }
}

impl SearchOptions {
    #[must_use]
    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    #[must_use]
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    #[must_use]
    pub fn with_max_rack_len(mut self, max_rack_len: usize) -> Self {
        self.max_rack_len = max_rack_len;
        self
    }

    /// Check the size of `rack`.
    /// ## Errors
    /// If the rack holds more than `max_rack_len` tiles.
    pub fn check_rack(&self, rack: &Rack) -> Result<(), Error> {
        if rack.len() > self.max_rack_len {
            return Err(Error::RackTooLong {
                len: rack.len(),
                max: self.max_rack_len,
            });
        }
        Ok(())
    }
}
