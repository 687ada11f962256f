#[cfg(feature = "bitintr")]
use bitintr::{Bzhi, Popcnt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;

use crate::tiles::Label;

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.popcnt()
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.count_ones()
}

#[cfg(feature = "bitintr")]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n.bzhi(v)
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n & ((1 << v) - 1)
}

/// A bitset of letter labels (1..=26).
/// Used for the children of a dictionary node, and the letters present in a rack.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelSet(u32);

impl LabelSet {
    pub fn new() -> LabelSet {
        LabelSet(0)
    }

    pub fn contains(&self, label: Label) -> bool {
        label < 32 && self.0 & (1 << label) != 0
    }

    /// Insert `label`, return true if it was already present.
    pub fn insert(&mut self, label: Label) -> bool {
        assert!(label < 32);
        let present = self.contains(label);
        self.0 |= 1 << label;
        present
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Labels present in both `self` and `other`
    pub fn intersection(&self, other: LabelSet) -> LabelSet {
        LabelSet(self.0 & other.0)
    }

    pub fn iter(&self) -> IteratorLabelSet {
        IteratorLabelSet { value: self.0 }
    }

    /// Return the rank of `label` in the set if present.
    /// The children of a dictionary node are stored in label order,
    /// so this is the offset of the child node.
    pub fn index_of(&self, label: Label) -> Option<usize> {
        if !self.contains(label) {
            return None;
        }
        Some(count_ones(zero_highbits(self.0, label as u32)) as usize)
    }
}

impl fmt::Debug for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self
            .iter()
            .map(|label| format!("{}", label))
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{{{}}}", s)
    }
}

/// Iterate over the labels in a `LabelSet` in ascending order
pub struct IteratorLabelSet {
    value: u32,
}

impl Iterator for IteratorLabelSet {
    type Item = Label;
    fn next(&mut self) -> Option<Label> {
        if self.value == 0 {
            return None;
        }
        let label = self.value.trailing_zeros() as Label;
        self.value &= self.value - 1;
        Some(label)
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut set = LabelSet::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert() {
        let mut labels = LabelSet::new();
        assert!(!labels.insert(19));
        assert!(labels.insert(19));
        labels.insert(1);
        assert!(labels.contains(1));
        assert!(labels.contains(19));
        assert!(!labels.contains(2));
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn test_iter() {
        let labels: LabelSet = vec![26u8, 1, 11, 1].into_iter().collect();
        assert_eq!(labels.iter().collect::<Vec<_>>(), vec![1, 11, 26]);
        assert_eq!(format!("{:?}", labels), "{1,11,26}");
    }

    #[test]
    fn test_index_of() {
        let labels: LabelSet = vec![1u8, 5, 7, 19, 26].into_iter().collect();
        assert_eq!(labels.index_of(1), Some(0));
        assert_eq!(labels.index_of(19), Some(3));
        assert_eq!(labels.index_of(26), Some(4));
        assert_eq!(labels.index_of(2), None);
    }

    #[test]
    fn test_intersection() {
        let word: LabelSet = vec![19u8, 11, 1, 7].into_iter().collect();
        let rack: LabelSet = vec![19u8, 11, 2].into_iter().collect();
        assert_eq!(word.intersection(rack).iter().collect::<Vec<_>>(), vec![11, 19]);
    }

    #[test]
    fn test_zero_highbits() {
        assert_eq!(zero_highbits(0b1111_0010, 5), 0b0001_0010);
        assert_eq!(count_ones(0b0101_1010), 4);
    }
}
