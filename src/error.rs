//! Error types for operations that take caller-supplied input.
//!
//! Not finding a crossword is not an error; see [`Search::Unavailable`](crate::Search::Unavailable).

use thiserror::Error;

use crate::layout::Slot;
use crate::word::WordId;

/// Reasons a [`Dictionary`](crate::Dictionary) rejects a change.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DictionaryError {
    /// The original text was empty or only whitespace.
    #[error("original text must not be empty")]
    EmptyOriginal,
    /// The translation was empty or only whitespace.
    #[error("translation must not be empty")]
    EmptyTranslation,
    /// No word with this id exists.
    #[error("no word with id {0}")]
    UnknownWord(WordId),
}

/// A [`Layout`](crate::Layout) that does not describe a working crossword for its puzzle.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LayoutError {
    /// The main word and a cross word disagree on where their shared letter is.
    #[error("{slot} word meets the main word at cell {cross_cell}, expected cell {main_cell}")]
    MisplacedIntersection {
        slot: Slot,
        main_cell: usize,
        cross_cell: usize,
    },
    /// The shared cell would need two different letters.
    #[error("cell {cell} holds '{main}' in the main word but '{cross}' in the {slot} word")]
    LetterMismatch {
        slot: Slot,
        cell: usize,
        main: char,
        cross: char,
    },
    /// A cross word does not stay on the row where it meets the main word.
    #[error("{slot} word wraps onto another row at cell {cell}")]
    Wrapped { slot: Slot, cell: usize },
    /// Two words claim a cell that is not one of the designed intersections.
    #[error("cell {cell} is claimed by both the {a} and {b} words")]
    Overlap { cell: usize, a: Slot, b: Slot },
    /// A word runs off the grid.
    #[error("{slot} word runs past the last cell ({cell} >= {cells})")]
    OutOfBounds { slot: Slot, cell: usize, cells: usize },
}

/// Reasons an answer cannot be recorded or scored.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum AnswerError {
    /// The cell does not exist on the grid.
    #[error("cell {cell} is outside a grid of {cells} cells")]
    CellOutOfBounds { cell: usize, cells: usize },
    /// The cell exists but no word passes through it.
    #[error("cell {0} is blank")]
    BlankCell(usize),
    /// An answer was not the same length as the word it answers.
    #[error("answer for the {slot} word has {found} letters, expected {expected}")]
    LengthMismatch {
        slot: Slot,
        expected: usize,
        found: usize,
    },
}
