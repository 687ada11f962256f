use super::Dictionary;
use crate::labelset::LabelSet;
use crate::tiles::{Letters, Tile, Word};
use crate::Rack;
use std::iter::Iterator;

/// Walk the dictionary with the letters of a rack, and return every word
/// that misses at most `reach` letters.
///
/// Rack letters are used where possible. A letter the rack does not hold is added
/// to the word as a wildcard tile: it must come from a blank, or be acquired.
/// A branch is cut as soon as it misses more than `reach` letters.
#[derive(Debug)]
pub struct Walk<'a> {
    dictionary: &'a Dictionary,
    reach: usize,
    stack: Vec<Args>,
}

#[derive(Debug, Clone, Copy)]
struct Args {
    node: usize,
    letters: Letters,
    word: Word,
}

impl<'a> Iterator for Walk<'a> {
    type Item = Word;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(args) = self.stack.pop() {
            self.expand(&args);
            if self.dictionary.is_terminal(args.node) && !args.word.is_empty() {
                return Some(args.word);
            }
        }
        None
    }
}

impl<'a> Walk<'a> {
    pub fn new(dictionary: &'a Dictionary, rack: &Rack, budget: usize) -> Walk<'a> {
        let args = Args {
            node: 0,
            letters: rack.regular_letters(),
            word: Word::new(),
        };
        Walk {
            dictionary,
            reach: rack.blanks().saturating_add(budget),
            stack: vec![args],
        }
    }

    /// Split the walk in one walk per first letter.
    /// The words of all parts together are the words of the whole walk.
    pub fn split(mut self) -> Vec<Walk<'a>> {
        let mut parts = Vec::new();
        if let Some(root) = self.stack.pop() {
            self.expand(&root);
        }
        for args in self.stack {
            parts.push(Walk {
                dictionary: self.dictionary,
                reach: self.reach,
                stack: vec![args],
            });
        }
        parts
    }

    fn expand(&mut self, args: &Args) {
        let mut candidates = self.dictionary.child_labels(args.node);
        if args.word.wildcards() >= self.reach {
            // no more letters can be missed
            let available: LabelSet = args.letters.iter().map(|letter| letter.label()).collect();
            candidates = candidates.intersection(available);
        }
        for label in candidates.iter() {
            let child = match self.dictionary.get(args.node, label) {
                Some(child) => child,
                None => continue,
            };
            let mut word = args.word;
            let letters = match args.letters.position_of(label) {
                Some(pos) => {
                    word.push(Word::tile(label));
                    args.letters.remove(pos)
                }
                None => {
                    word.push(Tile::wildcard_from_letter(label));
                    args.letters
                }
            };
            self.stack.push(Args {
                node: child,
                letters,
                word,
            });
        }
    }
}

impl Dictionary {
    /// Return the words that can be made with `rack`, when at most `budget`
    /// letters are acquired. Letters that do not come from the rack are wildcard tiles.
    pub(crate) fn walk<'a>(&'a self, rack: &Rack, budget: usize) -> Walk<'a> {
        Walk::new(self, rack, budget)
    }
}
