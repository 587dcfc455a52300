//! JavaScript bindings, enabled by the `wasm` feature.

use itertools::Itertools;
use js_sys::Array;
use log::debug;
use wasm_bindgen::prelude::*;

use crate::answer::AnswerSheet;
use crate::finder::find_crossword;
use crate::layout::Slot;
use crate::order::RandomOrder;
use crate::puzzle::Puzzle;
use crate::word::WordPair;

/// A found puzzle together with the learner's answers.
#[wasm_bindgen]
pub struct CrosswordSession {
    puzzle: Puzzle,
    sheet: AnswerSheet,
}

#[wasm_bindgen]
impl CrosswordSession {
    /// Search for a puzzle among words given as parallel arrays of ids and translations.
    ///
    /// Entries whose translation is not a string are ignored.
    /// Returns `undefined` when the arrays differ in length or no crossword is available.
    pub fn find(ids: Vec<u32>, translations: Array, seed: u32) -> Option<CrosswordSession> {
        let words = word_pairs(ids, translations.iter().map(|translation| translation.as_string()).collect_vec())?;

        let puzzle = find_crossword(&words, &mut RandomOrder::seeded(seed.into())).into_puzzle()?;
        let sheet = AnswerSheet::new(&puzzle);
        Some(Self { puzzle, sheet })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.sheet.layout().width()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.sheet.layout().height()
    }

    /// Whether `cell` should be drawn as a non-interactive blank.
    #[wasm_bindgen(js_name = isBlank)]
    pub fn is_blank(&self, cell: usize) -> bool {
        self.sheet.layout().is_blank(cell)
    }

    /// Record a letter; returns `false` if `cell` is blank or off the grid.
    pub fn enter(&mut self, cell: usize, letter: char) -> bool {
        self.sheet.enter(cell, letter).is_ok()
    }

    /// The letter currently entered at `cell`, if any word passes through it.
    #[wasm_bindgen(js_name = letterAt)]
    pub fn letter_at(&self, cell: usize) -> Option<char> {
        self.sheet.letter_at(cell).filter(|letter| *letter != ' ')
    }

    /// Id of the vertical word.
    #[wasm_bindgen(js_name = mainWordId)]
    pub fn main_word_id(&self) -> u32 {
        self.puzzle.word(Slot::Main).id
    }

    /// Id of the cross word that fixes the main word's column.
    #[wasm_bindgen(js_name = firstWordId)]
    pub fn first_word_id(&self) -> u32 {
        self.puzzle.word(Slot::First).id
    }

    /// Id of the other cross word.
    #[wasm_bindgen(js_name = secondWordId)]
    pub fn second_word_id(&self) -> u32 {
        self.puzzle.word(Slot::Second).id
    }

    /// Letters answered correctly so far.
    pub fn correct(&self) -> usize {
        self.sheet.score().correct
    }

    /// Letters in the puzzle.
    pub fn total(&self) -> usize {
        self.sheet.score().total
    }
}

fn word_pairs(ids: Vec<u32>, translations: Vec<Option<String>>) -> Option<Vec<WordPair>> {
    if ids.len() != translations.len() {
        debug!("{} ids given for {} translations", ids.len(), translations.len());
        return None;
    }

    Some(ids.into_iter()
        .zip(translations)
        .filter_map(|(id, translation)| translation.map(|t| WordPair::new(id, String::new(), t)))
        .collect_vec())
}

#[cfg(test)]
mod tests {
    use super::word_pairs;

    #[test]
    fn mismatched_arrays_are_rejected() {
        assert!(word_pairs(vec![1, 2, 3], vec![Some("casa".to_owned()), Some("gato".to_owned())]).is_none());
        assert!(word_pairs(vec![1], vec![Some("casa".to_owned()), Some("gato".to_owned())]).is_none());
    }

    #[test]
    fn non_string_translations_are_skipped() {
        let words = word_pairs(vec![4, 5], vec![None, Some("gato".to_owned())]).unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!((words[0].id, words[0].translation.as_str()), (5, "gato"));
    }
}
