use log::trace;

use crate::error::DictionaryError;
use crate::word::{WordId, WordPair};

/// Source of the word collection a crossword is built from.
///
/// A snapshot must not change while a search runs; searches never go back to the store.
pub trait WordStore {
    /// Every word currently stored, in no particular order.
    fn snapshot(&self) -> Vec<WordPair>;
}

impl WordStore for [WordPair] {
    fn snapshot(&self) -> Vec<WordPair> {
        self.to_vec()
    }
}

impl WordStore for Vec<WordPair> {
    fn snapshot(&self) -> Vec<WordPair> {
        self.clone()
    }
}

/// An in-memory word store.
///
/// Ids are handed out from 1 upwards and are never reused, even after a word is removed or the dictionary is cleared.
#[derive(Clone, Debug)]
pub struct Dictionary {
    words: Vec<WordPair>,
    next_id: WordId,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            next_id: 1,
        }
    }
}

impl Dictionary {
    /// An empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word, returning its new id.
    ///
    /// Both texts are trimmed and must not be empty afterwards.
    pub fn insert(&mut self, original: &str, translation: &str) -> Result<WordId, DictionaryError> {
        let (original, translation) = Self::validate(original, translation)?;

        let id = self.next_id;
        self.next_id += 1;
        trace!("adding word {id}: {original:?} -> {translation:?}");
        self.words.push(WordPair::new(id, original, translation));

        Ok(id)
    }

    /// Replace both texts of the word with this `id`.
    pub fn update(&mut self, id: WordId, original: &str, translation: &str) -> Result<(), DictionaryError> {
        let (original, translation) = Self::validate(original, translation)?;

        let word = self.words.iter_mut()
            .find(|word| word.id == id)
            .ok_or(DictionaryError::UnknownWord(id))?;
        word.original = original.to_owned();
        word.translation = translation.to_owned();

        Ok(())
    }

    /// Remove the word with this `id`, returning it.
    pub fn remove(&mut self, id: WordId) -> Result<WordPair, DictionaryError> {
        let index = self.words.iter()
            .position(|word| word.id == id)
            .ok_or(DictionaryError::UnknownWord(id))?;

        Ok(self.words.remove(index))
    }

    /// Remove every word.
    pub fn clear(&mut self) {
        trace!("clearing {} words", self.words.len());
        self.words.clear();
    }

    /// Look up a word by id.
    pub fn get(&self, id: WordId) -> Option<&WordPair> {
        self.words.iter().find(|word| word.id == id)
    }

    /// Number of words stored.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words are stored.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stored words in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &WordPair> {
        self.words.iter()
    }

    fn validate<'a>(original: &'a str, translation: &'a str) -> Result<(&'a str, &'a str), DictionaryError> {
        let (original, translation) = (original.trim(), translation.trim());
        if original.is_empty() {
            return Err(DictionaryError::EmptyOriginal);
        }
        if translation.is_empty() {
            return Err(DictionaryError::EmptyTranslation);
        }

        Ok((original, translation))
    }
}

impl WordStore for Dictionary {
    fn snapshot(&self) -> Vec<WordPair> {
        self.words.clone()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Dictionary {
    /// Collect `(original, translation)` pairs, skipping any with empty text.
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut dictionary = Self::new();
        for (original, translation) in iter {
            if let Err(error) = dictionary.insert(original, translation) {
                trace!("skipping {original:?} -> {translation:?}: {error}");
            }
        }
        dictionary
    }
}
