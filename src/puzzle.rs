use std::fmt::{Display, Formatter};

use crate::answer::{self, Score};
use crate::error::AnswerError;
use crate::layout::{self, layout_grid, Layout, Slot};
use crate::word::WordPair;

/// How a cross word attaches to the main word.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Intersection {
    /// Offset of the shared letter in the main word's translation.
    pub main_char_index: usize,
    /// The cross word.
    pub attached: WordPair,
    /// Offset of the shared letter in the cross word's translation.
    pub word_char_index: usize,
}

/// Outcome of a crossword search.
///
/// [`Unavailable`](Search::Unavailable) is an everyday result, e.g. for any dictionary with fewer than three words.
#[derive(Debug)]
pub enum Search {
    /// A valid main word and two cross words were found.
    Found(Puzzle),
    /// No three words in the collection form a crossword.
    Unavailable,
}

impl Search {
    /// Whether a puzzle was found.
    pub fn is_available(&self) -> bool {
        matches!(self, Search::Found(_))
    }

    /// Borrow the puzzle, if one was found.
    pub fn puzzle(&self) -> Option<&Puzzle> {
        match self {
            Search::Found(puzzle) => Some(puzzle),
            Search::Unavailable => None,
        }
    }

    /// Take the puzzle, if one was found.
    pub fn into_puzzle(self) -> Option<Puzzle> {
        match self {
            Search::Found(puzzle) => Some(puzzle),
            Search::Unavailable => None,
        }
    }
}

/// A main word and the two cross words attached to it.
///
/// The crosses are kept in the order they were found; [`first`](Self::first) and [`second`](Self::second) give the order in which they are laid out.
#[derive(Clone, Debug)]
pub struct Puzzle {
    main: WordPair,
    crosses: (Intersection, Intersection),
}

impl Puzzle {
    /// Assemble a puzzle from its parts.
    ///
    /// Nothing is validated here; [`Layout::check`] reports puzzles that cannot be drawn.
    pub fn new(main: WordPair, cross1: Intersection, cross2: Intersection) -> Self {
        Self {
            main,
            crosses: (cross1, cross2),
        }
    }

    /// The vertical word.
    pub fn main(&self) -> &WordPair {
        &self.main
    }

    /// Both cross words, in the order they were found.
    pub fn crosses(&self) -> (&Intersection, &Intersection) {
        (&self.crosses.0, &self.crosses.1)
    }

    /// The cross word placed first: the one whose shared letter sits further into the word.
    /// On a tie, the cross word found second.
    pub fn first(&self) -> &Intersection {
        layout::order_crosses(&self.crosses.0, &self.crosses.1).0
    }

    /// The other cross word.
    pub fn second(&self) -> &Intersection {
        layout::order_crosses(&self.crosses.0, &self.crosses.1).1
    }

    /// The word occupying `slot`.
    pub fn word(&self, slot: Slot) -> &WordPair {
        match slot {
            Slot::Main => &self.main,
            Slot::First => &self.first().attached,
            Slot::Second => &self.second().attached,
        }
    }

    /// Number of letters across all three words, counting intersection cells once per word.
    pub fn total_letters(&self) -> usize {
        self.main.len() + self.crosses.0.attached.len() + self.crosses.1.attached.len()
    }

    /// Compute the grid for this puzzle. Equivalent to [`layout_grid`].
    pub fn layout(&self) -> Layout {
        layout_grid(&self.main, &self.crosses.0, &self.crosses.1)
    }

    /// Score one answer per word. See [`answer::score`].
    pub fn score(&self, main: &str, first: &str, second: &str) -> Result<Score, AnswerError> {
        answer::score(self, main, first, second)
    }
}

impl Display for Puzzle {
    /// The solved grid, one row per line, with `.` for blank cells.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let letters = Slot::letters_of(self);
        let grid = self.layout().to_array().map(|claim| match claim {
            Some((slot, offset)) => letters[slot.index()][*offset],
            None => '.',
        });
        write!(f, "{}", layout::print(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::{Intersection, Puzzle};
    use crate::layout::Slot;
    use crate::word::WordPair;

    fn cross(main_char_index: usize, id: u32, translation: &str, word_char_index: usize) -> Intersection {
        Intersection {
            main_char_index,
            attached: WordPair::new(id, translation, translation),
            word_char_index,
        }
    }

    #[test]
    fn crosses_keep_their_found_order() {
        let puzzle = Puzzle::new(WordPair::new(1, "main", "ranger"), cross(3, 2, "page", 2), cross(0, 3, "draw", 1));

        let (cross1, cross2) = puzzle.crosses();
        assert_eq!((cross1.attached.id, cross2.attached.id), (2, 3));
        assert_eq!(puzzle.first().attached.id, 2);
        assert_eq!(puzzle.second().attached.id, 3);
    }

    #[test]
    fn tied_crosses_place_the_later_one_first() {
        let main = WordPair::new(1, "main", "abdca");
        let found = Puzzle::new(main.clone(), cross(1, 2, "xbz", 1), cross(3, 3, "ycz", 1));
        let swapped = Puzzle::new(main, cross(3, 3, "ycz", 1), cross(1, 2, "xbz", 1));

        assert_eq!(found.word(Slot::First).id, 3);
        assert_eq!(swapped.word(Slot::First).id, 2);
        assert_eq!(found.crosses().0.attached.id, 2);
        assert_eq!(swapped.crosses().0.attached.id, 3);
    }
}
