mod alternatives;
mod trievec;
mod walk;

use self::trievec::TrieVec;
use crate::labelset::LabelSet;
use crate::tiles::{Codec, Label, Word};
use crate::Error;
use log::{debug, info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::fs::read_to_string;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A trie data structure that holds all the valid words.
///
/// The trie is flattened in breadth first order. The children of a node are stored
/// next to each other, in alphabetic order.
pub struct Dictionary {
    /// List of nodes in trie. Each node is a tuple with the index of the first
    /// child node, and a `LabelSet` with the labels of all child nodes.
    nodes: Vec<(u32, LabelSet)>,
    /// Label of each node (0 for the root).
    labels: Vec<Label>,
    /// Flags for nodes that end a word
    terminal: Vec<bool>,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if the dictionary is not read from a file.
    wordfile: String,
    word_count: usize,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, {} nodes from '{}'>",
            self.word_count,
            self.nodes.len(),
            self.wordfile
        )
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary::from(TrieVec::new())
    }
}

impl From<TrieVec<Label>> for Dictionary {
    fn from(trie: TrieVec<Label>) -> Self {
        let mut nodes: Vec<(u32, LabelSet)> = Vec::new();
        let mut labels: Vec<Label> = Vec::new();
        let mut terminal: Vec<bool> = Vec::new();
        let mut word_count = 0;

        let mut queue = VecDeque::new();
        queue.push_back((&trie, 0, 0));
        while let Some((node, parent, label)) = queue.pop_front() {
            let i = nodes.len();
            let mut children = LabelSet::new();
            for (child_label, child) in node.children() {
                children.insert(*child_label);
                queue.push_back((child, i, *child_label));
            }
            if node.terminal() {
                word_count += 1;
            }
            nodes.push((0, children));
            terminal.push(node.terminal());
            labels.push(label);
            // the first child seen for a parent has the lowest index
            if i > 0 && nodes[parent].0 == 0 {
                nodes[parent].0 = i as u32;
            }
        }
        Dictionary {
            nodes,
            labels,
            terminal,
            wordfile: String::new(),
            word_count,
        }
    }
}

/// Iterator over the children of a node, as (`label`, `index`) tuples.
pub struct IteratorChildren<'a> {
    dictionary: &'a Dictionary,
    range: std::ops::Range<usize>,
}

impl<'a> Iterator for IteratorChildren<'a> {
    type Item = (Label, usize);
    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|i| (self.dictionary.labels[i], i))
    }
}

/// Iterator over all words in a `Dictionary`, in alphabetic order.
pub struct Words<'a> {
    dictionary: &'a Dictionary,
    stack: Vec<(usize, Word)>,
}

impl<'a> Iterator for Words<'a> {
    type Item = Word;
    fn next(&mut self) -> Option<Word> {
        while let Some((node, word)) = self.stack.pop() {
            let children: Vec<_> = self.dictionary.iter_children(node).collect();
            for (label, child) in children.into_iter().rev() {
                let mut next = word;
                next.push(Word::tile(label));
                self.stack.push((child, next));
            }
            if self.dictionary.terminal[node] && !word.is_empty() {
                return Some(word);
            }
        }
        None
    }
}

impl Dictionary {
    /// Read the dictionary from a file. The file must be encoded in utf-8 and
    /// have one word per line. Words are trimmed and lowercased.
    /// Lines with characters other than `a`..`z`, or with more than 16 letters,
    /// are skipped.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the file does not contain any valid words.
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let text = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut builder = TrieVec::new();
        let mut skipped = 0;
        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            match Codec.encode_word(&line.to_lowercase()) {
                Ok(word) => builder.insert(word.labels()),
                Err(err) => {
                    debug!("Skip \"{}\": {}", line, err);
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            warn!("Skipped {} lines in wordfile {}", skipped, wordfile);
        }
        let mut dictionary = Dictionary::from(builder);
        dictionary.wordfile = String::from(wordfile);
        info!("Loaded {}", dictionary);
        if dictionary.is_empty() {
            return Err(Error::EmptyDictionary);
        }
        Ok(dictionary)
    }

    /// Build a dictionary from a list of words.
    /// Empty strings and words longer than 16 letters are skipped, duplicates are stored once.
    /// ## Errors
    /// If a word contains something other than the letters `a`..`z`.
    /// ## Examples
    /// ```
    /// # use rack_helper::{Dictionary, Error};
    /// let dictionary = Dictionary::from_words(&["skag", "skags", "Rust"])?;
    /// assert_eq!(dictionary.len(), 3);
    /// assert!(dictionary.contains("rust"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Dictionary, Error> {
        let mut builder = TrieVec::new();
        for word in words.iter().map(AsRef::as_ref).filter(|w| !w.is_empty()) {
            match Codec.encode_word(word) {
                Ok(encoded) => builder.insert(encoded.labels()),
                Err(Error::EncodeStringTooLong(_)) => debug!("Skip \"{}\": too long", word),
                Err(err) => return Err(err),
            }
        }
        Ok(Dictionary::from(builder))
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Deserialize the dictionary from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Dictionary, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut dictionary: Dictionary = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordfileDeserializeError(String::from(wordfile)))?;
        dictionary.wordfile = String::from(wordfile);
        info!("Loaded {}", dictionary);
        Ok(dictionary)
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Serialize the dictionary to a bincoded file, to be read with
    /// [`deserialize_from`](Dictionary::deserialize_from).
    /// ## Errors
    /// If the file can not be written.
    pub fn serialize_into(&self, path: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::WordfileDeserializeError(String::from(path)))
    }

    /// The number of words
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// The number of nodes in the trie
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The wordfile the dictionary was read from
    pub fn wordfile(&self) -> &str {
        &self.wordfile
    }

    /// Return the index range of the child nodes of node `i`.
    pub fn range_children(&self, i: usize) -> std::ops::Range<usize> {
        let (start, labels) = &self.nodes[i];
        let start = *start as usize;
        start..start + labels.len()
    }

    /// Iterate over the children of node `i`.
    pub fn iter_children(&self, i: usize) -> IteratorChildren {
        IteratorChildren {
            dictionary: self,
            range: self.range_children(i),
        }
    }

    /// The labels of the children of node `i`
    pub(crate) fn child_labels(&self, i: usize) -> LabelSet {
        self.nodes[i].1
    }

    /// Check if node `i` ends a word
    pub(crate) fn is_terminal(&self, i: usize) -> bool {
        self.terminal[i]
    }

    /// Get the index of child with `label` for node `i` if present.
    pub fn get(&self, i: usize, label: Label) -> Option<usize> {
        let (start, labels) = &self.nodes[i];
        labels.index_of(label).map(|pos| *start as usize + pos)
    }

    /// Returns true if the word with `labels` is in the dictionary
    pub fn is_word<K: AsRef<[Label]>>(&self, labels: K) -> bool {
        let mut i = 0;
        for &label in labels.as_ref() {
            match self.get(i, label) {
                Some(child) => i = child,
                None => return false,
            }
        }
        i > 0 && self.terminal[i]
    }

    /// Returns true if `word` is in the dictionary. Case insensitive.
    pub fn contains(&self, word: &str) -> bool {
        Codec
            .encode_word(word)
            .map_or(false, |word| self.is_word(word.labels()))
    }

    /// Iterate over all words in alphabetic order
    pub fn words(&self) -> Words {
        Words {
            dictionary: self,
            stack: vec![(0, Word::new())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
    ];

    fn test_dictionary() -> Dictionary {
        Dictionary::from_words(WORDS).unwrap()
    }

    #[test]
    fn test_range() {
        let dictionary = test_dictionary();
        assert_eq!(dictionary.len(), 11);
        assert_eq!(dictionary.node_count(), 17);
        assert_eq!(dictionary.range_children(0), 1..3);
        assert_eq!(dictionary.range_children(1), 3..7);
        assert!(dictionary.range_children(4).is_empty());
    }

    #[test]
    fn test_children() {
        let dictionary = test_dictionary();
        let children: Vec<_> = dictionary.iter_children(0).collect();
        assert_eq!(children, vec![(1, 1), (2, 2)]);
        assert_eq!(dictionary.get(0, 2), Some(2));
        assert_eq!(dictionary.get(0, 3), None);
    }

    #[test]
    fn test_contains() {
        let dictionary = test_dictionary();
        for &word in WORDS {
            assert!(dictionary.contains(word), "missing {}", word);
        }
        assert!(dictionary.contains("BELT"));
        assert!(!dictionary.contains("be"));
        assert!(!dictionary.contains(""));
        assert!(!dictionary.contains("b3l"));
    }

    #[test]
    fn test_words_sorted() {
        let dictionary = test_dictionary();
        let words: Vec<String> = dictionary
            .words()
            .map(|word| Codec.decode_letters(&word))
            .collect();
        let mut expected: Vec<String> = WORDS.iter().map(|w| w.to_string()).collect();
        expected.sort();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_duplicates() {
        let dictionary = Dictionary::from_words(&["tab", "bat", "tab", ""]).unwrap();
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn test_empty() {
        let dictionary = Dictionary::default();
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.words().count(), 0);
        assert!(Dictionary::from_words::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_long_word_skipped() -> Result<(), Error> {
        let dictionary = Dictionary::from_words(&["skag", "antidisestablishmentarianism"])?;
        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.contains("skag"));
        assert!(!dictionary.contains("antidisestablishmentarianism"));
        Ok(())
    }

    #[test]
    fn test_invalid_word() {
        let err = Dictionary::from_words(&["don't"]).unwrap_err();
        assert!(matches!(err, Error::InvalidToken(_)));
    }

    #[test]
    fn test_from_file() -> Result<(), Error> {
        let path = std::env::temp_dir().join("rack_helper_test_from_file.txt");
        std::fs::write(&path, "Skag\nskags\n\n  ska  \ndon't\nabcdefghijklmnopqrstu\n").unwrap();
        let dictionary = Dictionary::from_file(path.to_str().unwrap())?;
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("skag"));
        assert!(dictionary.contains("ska"));
        assert!(!dictionary.contains("dont"));
        assert_eq!(dictionary.wordfile(), path.to_str().unwrap());
        Ok(())
    }

    #[test]
    fn test_from_file_errors() {
        let err = Dictionary::from_file("no/such/wordfile.txt").unwrap_err();
        assert!(matches!(err, Error::ReadError { .. }));

        let path = std::env::temp_dir().join("rack_helper_test_empty.txt");
        std::fs::write(&path, "\n123\n").unwrap();
        let err = Dictionary::from_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, Error::EmptyDictionary));
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    #[test]
    fn test_bincode() -> Result<(), Error> {
        let path = std::env::temp_dir().join("rack_helper_test.bin");
        let path = path.to_str().unwrap();
        test_dictionary().serialize_into(path)?;
        let dictionary = Dictionary::deserialize_from(path)?;
        assert_eq!(dictionary.len(), WORDS.len());
        assert!(dictionary.contains("belt"));
        Ok(())
    }
}
