use std::fmt::{Display, Formatter};

/// Identifier of a [`WordPair`], assigned once when the pair is created and never reused.
pub type WordId = u32;

/// A dictionary entry: a word in the learner's own language and its translation.
///
/// Crosswords are built from [`translation`](Self::translation) only.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct WordPair {
    /// Stable identity of this pair; two pairs are the same word if and only if their ids match.
    pub id: WordId,
    /// Text in the learner's own language.
    pub original: String,
    /// Text in the language being learned.
    pub translation: String,
}

impl WordPair {
    /// Construct a pair with an already known `id`.
    pub fn new(id: WordId, original: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id,
            original: original.into(),
            translation: translation.into(),
        }
    }

    /// Length of the translation in characters, which is also its length on the grid.
    pub fn len(&self) -> usize {
        self.translation.chars().count()
    }

    /// Whether the translation has no characters at all.
    pub fn is_empty(&self) -> bool {
        self.translation.is_empty()
    }

    /// The translation split into grid characters.
    pub fn letters(&self) -> Vec<char> {
        self.translation.chars().collect()
    }

    #[inline]
    pub(crate) fn same_word(&self, other: &WordPair) -> bool {
        self.id == other.id
    }
}

impl Display for WordPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.original, self.translation)
    }
}

/// Case-insensitive letter comparison used for intersections and scoring.
pub(crate) fn letters_match(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
