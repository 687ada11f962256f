use crate::dictionary::Dictionary;
use crate::options::SearchOptions;
use crate::scorer::{range_with_missing, ScoreRange};
use crate::tiles::{Codec, Word};
use crate::values::word_points;
use crate::{Error, Rack};

#[cfg(feature = "flame_it")]
use flamer::flame;
use log::debug;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A word that can be played with the rack as it is.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Play {
    /// The word in lowercase
    pub word: String,
    /// The word as played: letters played with a blank are in uppercase
    pub tiles: String,
    /// Points for the word, blanks count for 0
    pub score: u32,
}

impl Play {
    fn new(word: &Word) -> Play {
        Play {
            word: Codec.decode_letters(word),
            tiles: Codec.decode(&word.codes()),
            score: word_points(word),
        }
    }
}

/// A word that can be made by acquiring `required` more letters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Suggestion {
    /// The word in lowercase
    pub word: String,
    /// Letters the rack does not hold, with their count, in alphabetic order.
    /// The blanks on the rack cover some of these.
    pub missing: Vec<(char, usize)>,
    /// The number of letters to acquire
    pub required: usize,
    /// Lowest and highest score, depending on the letters played with a blank
    pub range: ScoreRange,
}

impl Suggestion {
    fn new(word: &Word, blanks: usize) -> Suggestion {
        let mut labels: Vec<_> = word
            .iter()
            .filter(|tile| tile.is_wildcard())
            .map(|tile| tile.label())
            .collect();
        labels.sort_unstable();
        let mut missing: Vec<(char, usize)> = Vec::new();
        for &label in &labels {
            let ch = Codec.decode_code(label);
            match missing.last_mut() {
                Some((last, count)) if *last == ch => *count += 1,
                _ => missing.push((ch, 1)),
            }
        }
        Suggestion {
            word: Codec.decode_letters(word),
            missing,
            required: labels.len().saturating_sub(blanks),
            range: range_with_missing(word, labels, blanks),
        }
    }

    /// The missing letters, each repeated by its count
    pub fn missing_letters(&self) -> Vec<char> {
        self.missing
            .iter()
            .flat_map(|&(ch, count)| std::iter::repeat(ch).take(count))
            .collect()
    }

    /// Total number of missing letters, before the blanks are used
    pub fn missing_count(&self) -> usize {
        self.missing.iter().map(|&(_, count)| count).sum()
    }
}

/// Suggestions ordered by the number of letters to acquire (fewest first),
/// then by highest possible score, then alphabetically.
///
/// The collection can be iterated any number of times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Suggestions {
    entries: Vec<Suggestion>,
}

impl Suggestions {
    fn new(mut entries: Vec<Suggestion>) -> Suggestions {
        entries.sort_by(|a, b| {
            (a.required, Reverse(a.range.max), &a.word).cmp(&(
                b.required,
                Reverse(b.range.max),
                &b.word,
            ))
        });
        Suggestions { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<Suggestion> {
        self.entries.iter()
    }

    /// The suggestions that need `required` letters
    pub fn with_required(&self, required: usize) -> &[Suggestion] {
        let start = self.entries.partition_point(|s| s.required < required);
        let end = self.entries.partition_point(|s| s.required <= required);
        &self.entries[start..end]
    }

    /// Group the suggestions by the number of letters to acquire
    pub fn groups(&self) -> Vec<(usize, &[Suggestion])> {
        let mut groups = Vec::new();
        let mut rest = &self.entries[..];
        while let Some(first) = rest.first() {
            let n = rest.partition_point(|s| s.required == first.required);
            groups.push((first.required, &rest[..n]));
            rest = &rest[n..];
        }
        groups
    }

    pub fn into_vec(self) -> Vec<Suggestion> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Suggestions {
    type Item = &'a Suggestion;
    type IntoIter = std::slice::Iter<'a, Suggestion>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Plays and suggestions for a rack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Analysis {
    pub plays: Vec<Play>,
    pub suggestions: Suggestions,
}

impl Analysis {
    /// Nothing can be played, and nothing is worth going for.
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty() && self.suggestions.is_empty()
    }
}

/// All words in `dictionary` that miss at most `budget` letters after using the blanks
#[cfg_attr(feature = "flame_it", flame)]
fn scan(rack: &Rack, dictionary: &Dictionary, budget: usize, min_len: usize) -> Vec<Word> {
    #[cfg(feature = "rayon")]
    let words: Vec<Word> = dictionary
        .walk(rack, budget)
        .split()
        .into_par_iter()
        .flat_map(|walk| walk.filter(|word| word.len() >= min_len).collect::<Vec<_>>())
        .collect();
    #[cfg(not(feature = "rayon"))]
    let words: Vec<Word> = dictionary
        .walk(rack, budget)
        .filter(|word| word.len() >= min_len)
        .collect();
    debug!(
        "rack \"{}\", budget {}: {} candidate words",
        rack,
        budget,
        words.len()
    );
    words
}

fn sort_plays(plays: &mut [Play]) {
    plays.sort_by(|a, b| (Reverse(a.score), &a.word).cmp(&(Reverse(b.score), &b.word)));
}

/// Return all words in `dictionary` that can be played with `rack`,
/// ordered by score (highest first), then alphabetically.
/// ## Errors
/// If the dictionary is empty.
/// ## Examples
/// ```
/// # use rack_helper::{plays, Dictionary, Error, SearchOptions};
/// let dictionary = Dictionary::from_words(&["skag", "skags", "ask", "sky"])?;
/// let found = plays(&"ska ".parse()?, &dictionary, &SearchOptions::default())?;
/// let words: Vec<_> = found.iter().map(|p| (p.tiles.as_str(), p.score)).collect();
/// assert_eq!(words, vec![("ask", 7), ("skaG", 7), ("skY", 6)]);
/// # Ok::<(), Error>(())
/// ```
pub fn plays(
    rack: &Rack,
    dictionary: &Dictionary,
    options: &SearchOptions,
) -> Result<Vec<Play>, Error> {
    if dictionary.is_empty() {
        return Err(Error::EmptyDictionary);
    }
    let mut plays: Vec<Play> = scan(rack, dictionary, 0, options.min_len)
        .iter()
        .map(Play::new)
        .collect();
    sort_plays(&mut plays);
    Ok(plays)
}

/// Return the words in `dictionary` that can be made with `rack` when
/// between 1 and `options.budget` letters are acquired.
/// ## Errors
/// If the dictionary is empty.
/// ## Examples
/// ```
/// # use rack_helper::{suggest, Dictionary, Error, SearchOptions};
/// let dictionary = Dictionary::from_words(&["skag", "skags"])?;
/// let options = SearchOptions::default().with_budget(2);
/// let suggestions = suggest(&"ska".parse()?, &dictionary, &options)?;
/// let entries: Vec<_> = suggestions.iter().map(|s| (s.word.as_str(), s.required)).collect();
/// assert_eq!(entries, vec![("skag", 1), ("skags", 2)]);
/// # Ok::<(), Error>(())
/// ```
pub fn suggest(
    rack: &Rack,
    dictionary: &Dictionary,
    options: &SearchOptions,
) -> Result<Suggestions, Error> {
    Ok(analyse(rack, dictionary, options)?.suggestions)
}

/// Find the plays and the suggestions for `rack` in one pass over the dictionary.
/// ## Errors
/// If the dictionary is empty.
pub fn analyse(
    rack: &Rack,
    dictionary: &Dictionary,
    options: &SearchOptions,
) -> Result<Analysis, Error> {
    if dictionary.is_empty() {
        return Err(Error::EmptyDictionary);
    }
    let blanks = rack.blanks();
    let (playable, near): (Vec<Word>, Vec<Word>) =
        scan(rack, dictionary, options.budget, options.min_len)
            .into_iter()
            .partition(|word| word.wildcards() <= blanks);
    let mut plays: Vec<Play> = playable.iter().map(Play::new).collect();
    sort_plays(&mut plays);
    let suggestions = near
        .iter()
        .map(|word| Suggestion::new(word, blanks))
        .collect();
    Ok(Analysis {
        plays,
        suggestions: Suggestions::new(suggestions),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::can_form;
    use crate::scorer::score_range;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const WORDS: &[&str] = &[
        "a", "ask", "sky", "skag", "skags", "gas", "sag", "kas", "yak", "jazz", "quiz", "zax",
        "axe", "banana", "bandana", "fizz", "fuzz", "ka", "ta", "at", "tsk",
    ];

    fn dictionary() -> Dictionary {
        Dictionary::from_words(WORDS).unwrap()
    }

    fn words(suggestions: &Suggestions) -> Vec<(&str, usize)> {
        suggestions
            .iter()
            .map(|s| (s.word.as_str(), s.required))
            .collect()
    }

    #[test]
    fn test_skag_with_blank() -> Result<(), Error> {
        let rack: Rack = "ska ".parse()?;
        let plays = plays(&rack, &dictionary(), &SearchOptions::default())?;
        let skag = plays.iter().find(|p| p.word == "skag").unwrap();
        assert_eq!(skag.tiles, "skaG");
        assert_eq!(skag.score, 7);
        Ok(())
    }

    #[test]
    fn test_skags_needs_two() -> Result<(), Error> {
        let rack: Rack = "ska".parse()?;
        let options = SearchOptions::default().with_budget(1);
        let suggestions = suggest(&rack, &dictionary(), &options)?;
        assert!(suggestions.iter().all(|s| s.word != "skags"));

        let suggestions = suggest(&rack, &dictionary(), &options.with_budget(2))?;
        let skags = suggestions.iter().find(|s| s.word == "skags").unwrap();
        assert_eq!(skags.missing, vec![('g', 1), ('s', 1)]);
        assert_eq!(skags.required, 2);
        assert_eq!(skags.range, ScoreRange::fixed(10));
        Ok(())
    }

    #[test]
    fn test_order() -> Result<(), Error> {
        let rack: Rack = "ska".parse()?;
        let options = SearchOptions::default().with_budget(2).with_min_len(2);
        let suggestions = suggest(&rack, &dictionary(), &options)?;
        assert_eq!(
            words(&suggestions),
            vec![
                ("sky", 1),
                ("yak", 1),
                ("skag", 1),
                ("tsk", 1),
                ("gas", 1),
                ("sag", 1),
                ("at", 1),
                ("ta", 1),
                ("zax", 2),
                ("axe", 2),
                ("skags", 2),
            ]
        );
        let groups = suggestions.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, 1);
        assert_eq!(groups[0].1.len(), 8);
        assert_eq!(suggestions.with_required(2).len(), 3);
        assert!(suggestions.with_required(3).is_empty());
        Ok(())
    }

    #[test]
    fn test_suggestion_with_blank() -> Result<(), Error> {
        let rack: Rack = "a ".parse()?;
        let options = SearchOptions::default().with_budget(1);
        let suggestions = suggest(&rack, &dictionary(), &options)?;
        let zax = suggestions.iter().find(|s| s.word == "zax").unwrap();
        assert_eq!(zax.missing, vec![('x', 1), ('z', 1)]);
        assert_eq!(zax.missing_letters(), vec!['x', 'z']);
        assert_eq!(zax.missing_count(), 2);
        assert_eq!(zax.required, 1);
        assert_eq!(zax.range, ScoreRange { min: 9, max: 11 });
        Ok(())
    }

    #[test]
    fn test_no_matches() -> Result<(), Error> {
        let rack: Rack = "vvw".parse()?;
        // "a" misses a single letter
        let options = SearchOptions::default().with_budget(1).with_min_len(2);
        let analysis = analyse(&rack, &dictionary(), &options)?;
        assert!(analysis.plays.is_empty());
        assert!(analysis.suggestions.is_empty());
        assert!(analysis.is_empty());
        Ok(())
    }

    #[test]
    fn test_unbounded_budget() -> Result<(), Error> {
        let dictionary = Dictionary::from_words(&["skag", "quiz"])?;
        let options = SearchOptions::default().with_budget(usize::MAX);
        let analysis = analyse(&"ska ".parse()?, &dictionary, &options)?;
        assert_eq!(analysis.plays.len(), 1);
        assert_eq!(words(&analysis.suggestions), vec![("quiz", 3)]);
        Ok(())
    }

    #[test]
    fn test_empty_dictionary() -> Result<(), Error> {
        let rack: Rack = "ska ".parse()?;
        let empty = Dictionary::default();
        let options = SearchOptions::default();
        assert!(matches!(plays(&rack, &empty, &options), Err(Error::EmptyDictionary)));
        assert!(matches!(suggest(&rack, &empty, &options), Err(Error::EmptyDictionary)));
        assert!(matches!(analyse(&rack, &empty, &options), Err(Error::EmptyDictionary)));
        Ok(())
    }

    #[test]
    fn test_deterministic() -> Result<(), Error> {
        let rack: Rack = "sak t".parse()?;
        let dictionary = dictionary();
        let options = SearchOptions::default();
        let first = analyse(&rack, &dictionary, &options)?;
        let second = analyse(&rack, &dictionary, &options)?;
        assert_eq!(first, second);
        let again: Vec<_> = first.suggestions.iter().collect();
        assert_eq!(again.len(), first.suggestions.len());
        Ok(())
    }

    #[test]
    fn test_plays_order() -> Result<(), Error> {
        let rack: Rack = "aksty".parse()?;
        let options = SearchOptions::default().with_min_len(2);
        let plays = plays(&rack, &dictionary(), &options)?;
        let found: Vec<_> = plays.iter().map(|p| (p.word.as_str(), p.score)).collect();
        assert_eq!(
            found,
            vec![
                ("sky", 10),
                ("yak", 10),
                ("ask", 7),
                ("kas", 7),
                ("tsk", 7),
                ("ka", 6),
                ("at", 2),
                ("ta", 2),
            ]
        );
        Ok(())
    }

    /// Compare the dictionary walk with matching every word on its own
    #[test]
    fn test_walk_equals_brute_force() -> Result<(), Error> {
        let dictionary = dictionary();
        let mut rng = StdRng::seed_from_u64(123);
        let alphabet: Vec<char> = "aaaeksstgyzxb  ".chars().collect();
        for _ in 0..200 {
            let n = rng.gen_range(0..=7);
            let letters: String = (0..n)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect();
            let rack: Rack = letters.parse()?;
            let budget = rng.gen_range(0..=2);
            let options = SearchOptions::default().with_budget(budget);
            let analysis = analyse(&rack, &dictionary, &options)?;

            let mut expected_plays = Vec::new();
            let mut expected_suggestions = Vec::new();
            for word in dictionary.words() {
                let result = can_form(&word, &rack);
                let range = score_range(&word, &rack);
                assert!(range.min <= range.max);
                let name = Codec.decode_letters(&word);
                if result.playable {
                    assert!(range.is_fixed());
                    expected_plays.push((name, range.max));
                } else if result.is_near_miss(budget) {
                    expected_suggestions.push((name, result.deficit, range));
                }
            }
            let mut found_plays: Vec<_> = analysis
                .plays
                .iter()
                .map(|p| (p.word.clone(), p.score))
                .collect();
            found_plays.sort();
            expected_plays.sort();
            assert_eq!(found_plays, expected_plays, "plays for rack \"{}\"", letters);

            let mut found: Vec<_> = analysis
                .suggestions
                .iter()
                .map(|s| (s.word.clone(), s.required, s.range))
                .collect();
            found.sort_by(|a, b| a.0.cmp(&b.0));
            expected_suggestions.sort_by(|a, b| a.0.cmp(&b.0));
            assert_eq!(found, expected_suggestions, "rack \"{}\"", letters);
        }
        Ok(())
    }
}
