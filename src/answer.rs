use std::fmt::{Display, Formatter};

use itertools::Itertools;
use strum::VariantArray;

use crate::error::AnswerError;
use crate::layout::{self, Layout, Slot};
use crate::puzzle::Puzzle;
use crate::word::letters_match;

/// Letters answered correctly out of all letters in the puzzle.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Score {
    /// Letters matching the solution.
    pub correct: usize,
    /// Letters in the solution, counting an intersection once for each of its two words.
    pub total: usize,
}

impl Score {
    /// Whether every letter is correct.
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }

    fn add(&mut self, solution: &[char], answer: &[char]) {
        self.correct += solution.iter()
            .zip(answer)
            .filter(|(expected, given)| letters_match(**expected, **given))
            .count();
        self.total += solution.len();
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Score one answer per word of `puzzle`.
///
/// Each answer must have exactly as many letters as its word; letters are compared position by position without regard to case.
/// Unanswered positions are conventionally spaces and never match.
pub fn score(puzzle: &Puzzle, main: &str, first: &str, second: &str) -> Result<Score, AnswerError> {
    let mut score = Score::default();

    for (slot, answer) in [(Slot::Main, main), (Slot::First, first), (Slot::Second, second)] {
        let solution = puzzle.word(slot).letters();
        let answer = answer.chars().collect_vec();
        if answer.len() != solution.len() {
            return Err(AnswerError::LengthMismatch {
                slot,
                expected: solution.len(),
                found: answer.len(),
            });
        }

        score.add(&solution, &answer);
    }

    Ok(score)
}

/// A learner's answers to a puzzle, entered one grid cell at a time.
///
/// A letter typed into an intersection cell answers both words passing through it.
#[derive(Clone, Debug)]
pub struct AnswerSheet {
    layout: Layout,
    solution: [Vec<char>; 3],
    entries: [Vec<char>; 3],
}

impl AnswerSheet {
    /// An empty sheet for `puzzle`, with every letter unanswered.
    pub fn new(puzzle: &Puzzle) -> Self {
        let solution = Slot::letters_of(puzzle);
        let entries = solution.clone().map(|letters| vec![' '; letters.len()]);

        Self {
            layout: puzzle.layout(),
            solution,
            entries,
        }
    }

    /// The grid this sheet is drawn on.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Record `letter` at `cell`, in every word passing through it.
    pub fn enter(&mut self, cell: usize, letter: char) -> Result<(), AnswerError> {
        for (slot, offset) in self.claims(cell)? {
            self.entries[slot.index()][offset] = letter;
        }

        Ok(())
    }

    /// Forget the answer at `cell`.
    pub fn clear(&mut self, cell: usize) -> Result<(), AnswerError> {
        self.enter(cell, ' ')
    }

    /// The letter currently recorded at `cell`, or `None` for a blank or out-of-range cell.
    pub fn letter_at(&self, cell: usize) -> Option<char> {
        self.layout.claims(cell)
            .first()
            .map(|(slot, offset)| self.entries[slot.index()][*offset])
    }

    /// The answer so far for the word in `slot`, with spaces for unanswered letters.
    pub fn entry(&self, slot: Slot) -> String {
        self.entries[slot.index()].iter().collect()
    }

    /// Score the answers recorded so far.
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for slot in Slot::VARIANTS {
            score.add(&self.solution[slot.index()], &self.entries[slot.index()]);
        }
        score
    }

    /// Whether every letter is answered, right or wrong.
    pub fn is_complete(&self) -> bool {
        self.entries.iter().flatten().all(|letter| *letter != ' ')
    }

    fn claims(&self, cell: usize) -> Result<Vec<(Slot, usize)>, AnswerError> {
        if cell >= self.layout.len() {
            return Err(AnswerError::CellOutOfBounds { cell, cells: self.layout.len() });
        }

        let claims = self.layout.claims(cell);
        if claims.is_empty() {
            return Err(AnswerError::BlankCell(cell));
        }

        Ok(claims)
    }
}

impl Display for AnswerSheet {
    /// The grid as answered so far: `.` for blank cells and `_` for unanswered letters.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let grid = self.layout.to_array().map(|claim| match claim {
            Some((slot, offset)) => match self.entries[slot.index()][*offset] {
                ' ' => '_',
                letter => letter,
            },
            None => '.',
        });
        write!(f, "{}", layout::print(grid))
    }
}
