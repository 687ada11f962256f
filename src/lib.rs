//! A scrabble rack helper for Rust.
//! <br>
//! Given the tiles on your rack, this crate finds the words you can play right now,
//! and the words that are worth going for: words you could make if you acquire
//! one or two more letters. For each of these it tells you which letters you
//! are missing, and the score you can expect.
//!
//! Blanks are written as a space (`' '`). In the results, a letter that is played
//! with a blank is shown in uppercase, and counts for 0 points.
//!
//! It can use the `rayon` crate to search the dictionary in parallel.
//!
//! # Basic usage
//!  ```
//! use rack_helper::{Helper, SearchOptions};
//!
//! let helper = Helper::default()
//!     .with_dictionary_from_words(&["skag", "skags", "ask", "quiz"])?
//!     .with_options(SearchOptions::default().with_budget(2));
//! let analysis = helper.analyse("ska ", true)?;
//! for play in &analysis.plays {
//!     println!("{} ({} points)", play.tiles, play.score);
//! }
//! for suggestion in &analysis.suggestions {
//!     println!("{} needs {} more, {}", suggestion.word, suggestion.required, suggestion.range);
//! }
//! assert_eq!(analysis.plays.len(), 2);
//! assert_eq!(analysis.suggestions.len(), 1);
//! # Ok::<(), rack_helper::Error>(())
//! ```
//!
//! # About implementation
//! The dictionary is stored as a trie, flattened in breadth first order. The children
//! of a node are a [`LabelSet`](struct.LabelSet.html), a bitset of letters, which
//! makes the lookup of a child a popcount.
//! A search walks the trie with the letters of the rack. Letters the rack does not hold
//! are added as wildcards, and a branch is cut as soon as it misses more letters than the
//! blanks and the budget allow.
mod dictionary;
mod error;
mod helper;
mod labelset;
mod matcher;
mod options;
mod rack;
mod scorer;
mod suggest;
mod tiles;
mod values;

pub use dictionary::Dictionary;
pub use error::Error;
pub use helper::Helper;
pub use labelset::LabelSet;
pub use matcher::{can_form, MatchResult};
pub use options::{SearchOptions, RACK_SIZE};
pub use rack::Rack;
pub use scorer::{score, score_range, BlankAssignment, ScoreRange};
pub use suggest::{analyse, plays, suggest, Analysis, Play, Suggestion, Suggestions};
pub use tiles::{Code, Codec, Item, ItemList, Label, Letter, Letters, Tile, Word, BLANK_CHAR};
pub use values::{points, word_points};
