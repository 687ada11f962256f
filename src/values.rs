//! Points for each tile, as in the english edition of scrabble.
use crate::tiles::{Code, Item, Tile, Word};

/// label, points. Index is the tile code, index 0 is the blank.
type TileInfo = (char, u32);

const TILE_POINTS: [TileInfo; 27] = [
    (' ', 0),
    ('a', 1),
    ('b', 3),
    ('c', 3),
    ('d', 2),
    ('e', 1),
    ('f', 4),
    ('g', 2),
    ('h', 4),
    ('i', 1),
    ('j', 8),
    ('k', 5),
    ('l', 1),
    ('m', 3),
    ('n', 1),
    ('o', 1),
    ('p', 3),
    ('q', 10),
    ('r', 1),
    ('s', 1),
    ('t', 1),
    ('u', 1),
    ('v', 4),
    ('w', 4),
    ('x', 8),
    ('y', 4),
    ('z', 10),
];

/// Return the points for a tile code.
/// A blank, or a letter made with a blank (code >= 64), is worth 0 points.
/// ## Examples
/// ```
/// use rack_helper::{points, Tile, Item};
/// assert_eq!(points(11), 5);
/// assert_eq!(points(Tile::wildcard_from_letter(11).code()), 0);
/// ```
pub fn points(code: Code) -> u32 {
    TILE_POINTS
        .get(code as usize)
        .map_or(0, |&(_, points)| points)
}

/// Points for the letter of `tile`, as if it was a regular tile.
pub(crate) fn letter_points(tile: Tile) -> u32 {
    points(tile.label())
}

/// Sum of the letter values of `word`. Wildcard tiles count for 0.
pub fn word_points(word: &Word) -> u32 {
    word.iter().map(|tile| points(tile.code())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::BLANK;
    use crate::Codec;

    #[test]
    fn test_table() {
        for (i, &(ch, _)) in TILE_POINTS.iter().enumerate().skip(1) {
            assert_eq!(Codec.decode_code(i as u8), ch);
        }
        let total: u32 = TILE_POINTS.iter().map(|&(_, p)| p).sum();
        assert_eq!(total, 87);
    }

    #[test]
    fn test_word_points() {
        let word = Codec.encode_word("skag").unwrap();
        assert_eq!(word_points(&word), 9);
        let word = Codec.encode_word("quiz").unwrap();
        assert_eq!(word_points(&word), 22);
    }

    #[test]
    fn test_blank_points() {
        assert_eq!(points(BLANK), 0);
        assert_eq!(points(0), 0);
    }
}
