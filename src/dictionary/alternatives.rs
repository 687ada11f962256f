use super::Dictionary;
use crate::tiles::{Codec, Label};
use crate::Error;
use log::debug;

impl Dictionary {
    /// Return at most `n` words from the dictionary that are close to `word`,
    /// for example to correct its spelling.
    ///
    /// Candidates are searched in this order, and each word is returned once:
    /// 1. two adjacent letters swapped,
    /// 2. one letter removed,
    /// 3. one letter added,
    /// 4. one letter replaced,
    /// 5. the words just before and after `word` in alphabetic order.
    ///
    /// `word` itself is never returned. Within a step, words appear in the order
    /// of the position that is changed, then alphabetically.
    /// ## Errors
    /// If `word` contains something other than the letters `a`..`z`.
    /// ## Examples
    /// ```
    /// # use rack_helper::{Dictionary, Error};
    /// let dictionary = Dictionary::from_words(&["brid", "bid", "birds", "bard", "dog"])?;
    /// assert_eq!(
    ///     dictionary.alternatives("bird", 10)?,
    ///     vec!["brid", "bid", "birds", "bard"]
    /// );
    /// assert_eq!(dictionary.alternatives("bird", 2)?, vec!["brid", "bid"]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn alternatives(&self, word: &str, n: usize) -> Result<Vec<String>, Error> {
        let labels = Codec.encode_labels(word)?;
        let mut found: Vec<Vec<Label>> = Vec::new();
        let mut add = |candidate: Vec<Label>| {
            if found.len() < n && candidate != labels && !found.contains(&candidate) {
                found.push(candidate);
            }
        };

        let len = labels.len();
        for i in 1..len {
            let mut swapped = labels.clone();
            swapped.swap(i - 1, i);
            if self.is_word(&swapped) {
                add(swapped);
            }
        }
        for i in 0..len {
            let mut removed = labels.clone();
            removed.remove(i);
            if self.is_word(&removed) {
                add(removed);
            }
        }
        for i in 0..=len {
            let mut pattern: Vec<Option<Label>> = labels.iter().copied().map(Some).collect();
            pattern.insert(i, None);
            self.matching(&pattern).into_iter().for_each(&mut add);
        }
        for i in 0..len {
            let mut pattern: Vec<Option<Label>> = labels.iter().copied().map(Some).collect();
            pattern[i] = None;
            self.matching(&pattern).into_iter().for_each(&mut add);
        }
        let (before, after) = self.neighbours(&labels);
        before.into_iter().chain(after).for_each(&mut add);

        debug!("{} alternatives for \"{}\"", found.len(), word);
        Ok(found.iter().map(|labels| Codec.decode(labels)).collect())
    }

    /// Words that match `pattern`, where `None` matches any letter, in alphabetic order
    fn matching(&self, pattern: &[Option<Label>]) -> Vec<Vec<Label>> {
        let mut found = Vec::new();
        let mut prefix = Vec::with_capacity(pattern.len());
        self.collect_matching(0, pattern, &mut prefix, &mut found);
        found
    }

    fn collect_matching(
        &self,
        node: usize,
        pattern: &[Option<Label>],
        prefix: &mut Vec<Label>,
        found: &mut Vec<Vec<Label>>,
    ) {
        match pattern.split_first() {
            None => {
                if node > 0 && self.is_terminal(node) {
                    found.push(prefix.clone());
                }
            }
            Some((Some(label), rest)) => {
                if let Some(child) = self.get(node, *label) {
                    prefix.push(*label);
                    self.collect_matching(child, rest, prefix, found);
                    prefix.pop();
                }
            }
            Some((None, rest)) => {
                for (label, child) in self.iter_children(node) {
                    prefix.push(label);
                    self.collect_matching(child, rest, prefix, found);
                    prefix.pop();
                }
            }
        }
    }

    /// The last word before, and the first word after `labels` in alphabetic order
    fn neighbours(&self, labels: &[Label]) -> (Option<Vec<Label>>, Option<Vec<Label>>) {
        let mut before = None;
        for word in self.words() {
            let word = word.labels();
            match word.as_slice().cmp(labels) {
                std::cmp::Ordering::Less => before = Some(word),
                std::cmp::Ordering::Equal => {}
                std::cmp::Ordering::Greater => return (before, Some(word)),
            }
        }
        (before, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alternatives(words: &[&str], word: &str) -> Vec<String> {
        Dictionary::from_words(words)
            .unwrap()
            .alternatives(word, 10)
            .unwrap()
    }

    #[test]
    fn test_swapped() {
        assert_eq!(alternatives(&["brid", "ibrd", "bird"], "bird"), vec!["ibrd", "brid"]);
    }

    #[test]
    fn test_removed() {
        assert_eq!(
            alternatives(&["ird", "brd", "bir", "bid"], "bird"),
            vec!["ird", "brd", "bid", "bir"]
        );
    }

    #[test]
    fn test_added() {
        assert_eq!(alternatives(&["birds", "abird", "bird"], "bird"), vec!["abird", "birds"]);
    }

    #[test]
    fn test_replaced() {
        let dictionary = Dictionary::from_words(&["bard", "bind", "word"]).unwrap();
        assert_eq!(dictionary.alternatives("bird", 2).unwrap(), vec!["bard", "bind"]);
        assert_eq!(
            dictionary.alternatives("bird", 10).unwrap(),
            vec!["bard", "bind", "word"]
        );
    }

    #[test]
    fn test_neighbours() {
        assert_eq!(alternatives(&["apple", "zebra", "mango"], "kiwi"), vec!["apple", "mango"]);
        assert_eq!(alternatives(&["apple", "mango"], "zebra"), vec!["mango"]);
        assert_eq!(alternatives(&["mango", "zebra"], "apple"), vec!["mango"]);
    }

    #[test]
    fn test_limits() -> Result<(), Error> {
        let dictionary = Dictionary::from_words(&["bard", "bind"])?;
        assert!(dictionary.alternatives("bird", 0)?.is_empty());
        assert!(Dictionary::default().alternatives("bird", 5)?.is_empty());
        assert_eq!(dictionary.alternatives("BIRD", 1)?, vec!["bard"]);
        let err = dictionary.alternatives("b1rd", 5).unwrap_err();
        assert!(matches!(err, Error::InvalidToken(_)));
        Ok(())
    }
}
