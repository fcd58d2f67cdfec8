/// Braille dot index (1-6) to its home-row key symbol. Fixed across
/// languages; matching is exact and case-sensitive.
pub static KEY_FOR_DOT: &[(u8, char)] = &[
    (1, 'D'),
    (2, 'W'),
    (3, 'Q'),
    (4, 'K'),
    (5, 'O'),
    (6, 'P'),
];

/// The six recognized key symbols, in dot order.
pub const VALID_KEYS: &[char] = &['D', 'W', 'Q', 'K', 'O', 'P'];

/// Standard braille letter cells, shared by the built-in languages.
pub static LATIN_LETTERS: &[(char, &[u8])] = &[
    ('a', &[1]),
    ('b', &[1, 2]),
    ('c', &[1, 4]),
    ('d', &[1, 4, 5]),
    ('e', &[1, 5]),
    ('f', &[1, 2, 4]),
    ('g', &[1, 2, 4, 5]),
    ('h', &[1, 2, 5]),
    ('i', &[2, 4]),
    ('j', &[2, 4, 5]),
    ('k', &[1, 3]),
    ('l', &[1, 2, 3]),
    ('m', &[1, 3, 4]),
    ('n', &[1, 3, 4, 5]),
    ('o', &[1, 3, 5]),
    ('p', &[1, 2, 3, 4]),
    ('q', &[1, 2, 3, 4, 5]),
    ('r', &[1, 2, 3, 5]),
    ('s', &[2, 3, 4]),
    ('t', &[2, 3, 4, 5]),
    ('u', &[1, 3, 6]),
    ('v', &[1, 2, 3, 6]),
    ('w', &[2, 4, 5, 6]),
    ('x', &[1, 3, 4, 6]),
    ('y', &[1, 3, 4, 5, 6]),
    ('z', &[1, 3, 5, 6]),
];

/// Languages registered out of the box. English and french share the same
/// base cells; accented letters are not covered by the source data and fall
/// back to the empty pattern during word encoding.
pub static BUILTIN_LANGUAGES: &[(&str, &[(char, &[u8])])] = &[
    ("english", LATIN_LETTERS),
    ("french", LATIN_LETTERS),
];

/// Whole-word shorthand cells, inserted as single root-level trie edges.
pub static CONTRACTIONS: &[(&str, &[u8])] = &[("the", &[2, 3, 4, 6])];

/// The one language whose dictionaries receive [`CONTRACTIONS`] on load.
pub const CONTRACTION_LANGUAGE: &str = "english";
