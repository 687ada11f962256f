/// Naive trie supporting dynamic insertion, used to build a [`Dictionary`](crate::Dictionary).
///
/// Children are kept sorted by label, so a breadth first walk
/// visits the children of each node in alphabetic order.
#[derive(Debug, Default)]
pub struct TrieVec<T> {
    children: Vec<(T, Box<TrieVec<T>>)>,
    terminal: bool,
}

impl<T> TrieVec<T> {
    pub fn new() -> TrieVec<T> {
        TrieVec {
            children: Vec::new(),
            terminal: false,
        }
    }

    pub fn children(&self) -> &[(T, Box<Self>)] {
        &self.children
    }

    pub fn terminal(&self) -> bool {
        self.terminal
    }
}

impl<T: Ord + Copy> TrieVec<T> {
    /// Insert `key`. Inserting a key twice has no effect.
    pub fn insert<K: AsRef<[T]>>(&mut self, key: K) {
        let mut t = self;
        for &c in key.as_ref() {
            let pos = match t.children.binary_search_by(|(c2, _)| c2.cmp(&c)) {
                Ok(pos) => pos,
                Err(pos) => {
                    t.children.insert(pos, (c, Box::new(TrieVec::new())));
                    pos
                }
            };
            t = &mut { t }.children[pos].1;
        }
        t.terminal = true;
    }

    /// Returns `true` if the trie contains `key`.
    pub fn contains<K: AsRef<[T]>>(&self, key: K) -> bool {
        let mut t = self;
        for c in key.as_ref() {
            match t.children.binary_search_by(|(c2, _)| c2.cmp(c)) {
                Ok(pos) => t = &t.children[pos].1,
                Err(_) => return false,
            }
        }
        t.terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trie_vec() {
        let mut t = TrieVec::new();
        let keys: &[&[u8]] = &[&[20, 15], &[20, 5, 1], &[20, 5, 14], &[9], &[9, 14], &[9, 14]];
        let keys_not: &[&[u8]] = &[&[20, 5], &[9, 14, 14], &[23], &[]];
        for key in keys {
            t.insert(key);
        }
        for key in keys {
            assert!(t.contains(key), "t should have key {:?}", key);
        }
        for key in keys_not {
            assert!(!t.contains(key), "t should not have key {:?}", key);
        }
        let labels: Vec<u8> = t.children().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec![9, 20]);
    }
}
