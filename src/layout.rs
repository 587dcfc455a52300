use std::collections::HashMap;

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::error::LayoutError;
use crate::puzzle::{Intersection, Puzzle};
use crate::word::{letters_match, WordPair};

/// The three words placed on a crossword grid.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Slot {
    /// The vertical word.
    Main,
    /// The cross word whose shared letter sits further into the word; it fixes the main word's column.
    First,
    /// The other cross word.
    Second,
}

impl Slot {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn letters_of(puzzle: &Puzzle) -> [Vec<char>; 3] {
        [Slot::Main, Slot::First, Slot::Second].map(|slot| puzzle.word(slot).letters())
    }
}

/// Order two cross words for placement; see [`Puzzle::first`].
pub(crate) fn order_crosses<'a>(
    cross1: &'a Intersection,
    cross2: &'a Intersection,
) -> (&'a Intersection, &'a Intersection) {
    if cross1.word_char_index > cross2.word_char_index {
        (cross1, cross2)
    } else {
        (cross2, cross1)
    }
}

/// Grid geometry of a puzzle: a flat, row-major grid of `width * height` cells and the cells each word occupies.
///
/// The main word runs down column [`main_start_column`](Self::main_start_column); the cross words run left to right through it.
/// Cells not claimed by any word are blank.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Layout {
    width: usize,
    height: usize,
    main_start_column: usize,
    // indexed by `Slot::index`
    cells: [Vec<usize>; 3],
}

/// Compute the grid for a main word and its two cross words, given in the order they were found.
///
/// The cross word with the larger [`word_char_index`](Intersection::word_char_index) is placed first and decides the main word's column; on a tie, `cross2` is.
/// The grid is exactly as wide as the two cross words need around that column, so both stay on their own row.
pub fn layout_grid(main: &WordPair, cross1: &Intersection, cross2: &Intersection) -> Layout {
    let (first, second) = order_crosses(cross1, cross2);

    let height = main.len();
    let main_start_column = first.word_char_index;
    let width = (first.word_char_index + second.attached.len().saturating_sub(second.word_char_index))
        // a long first word would otherwise wrap onto the row below
        .max(first.attached.len());

    let main_cells = (0..height)
        .map(|row| main_start_column + row * width)
        .collect_vec();

    let cross_cells = |cross: &Intersection| {
        let anchor = main_start_column + cross.main_char_index * width;
        let start = anchor.saturating_sub(cross.word_char_index);
        (0..cross.attached.len()).map(|k| start + k).collect_vec()
    };

    Layout {
        width,
        height,
        main_start_column,
        cells: [main_cells, cross_cells(first), cross_cells(second)],
    }
}

impl Layout {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, equal to the main word's length.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Column holding the main word.
    pub fn main_start_column(&self) -> usize {
        self.main_start_column
    }

    /// Total number of cells, blank or not.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether the grid has no cells, which happens only for an empty main word.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cells of the word in `slot`, one per letter, in reading order.
    pub fn cells(&self, slot: Slot) -> &[usize] {
        &self.cells[slot.index()]
    }

    /// Every word passing through `cell`, with the offset of `cell` within that word.
    ///
    /// Intersection cells are claimed by two words; blank cells by none.
    pub fn claims(&self, cell: usize) -> Vec<(Slot, usize)> {
        Slot::VARIANTS.iter()
            .filter_map(|slot| self.cells(*slot).iter().position(|c| *c == cell).map(|offset| (*slot, offset)))
            .collect_vec()
    }

    /// Whether no word passes through `cell`. Cells past the end of the grid are blank.
    pub fn is_blank(&self, cell: usize) -> bool {
        Slot::VARIANTS.iter().all(|slot| !self.cells(*slot).contains(&cell))
    }

    /// `(column, row)` of `cell`.
    pub fn location(&self, cell: usize) -> (usize, usize) {
        (cell % self.width, cell / self.width)
    }

    /// The grid as a `height x width` array. Each cell holds the first word claiming it, in [`Slot`] order, and that word's offset.
    pub fn to_array(&self) -> Array2<Option<(Slot, usize)>> {
        let mut claimed: HashMap<usize, (Slot, usize)> = HashMap::with_capacity(self.cells.iter().map(Vec::len).sum());
        for slot in Slot::VARIANTS.iter().rev() {
            for (offset, cell) in self.cells(*slot).iter().enumerate() {
                claimed.insert(*cell, (*slot, offset));
            }
        }

        Array2::from_shape_fn((self.height, self.width), |(row, col)| {
            claimed.get(&(row * self.width + col)).copied()
        })
    }

    /// Check that this layout draws `puzzle` as a working crossword.
    ///
    /// Both cross words must meet the main word on the cell holding their shared letter, the letters must agree without regard to case,
    /// every word must fit on the grid with each cross word on a single row, and no other cell may be claimed twice.
    pub fn check(&self, puzzle: &Puzzle) -> Result<(), LayoutError> {
        let cells = self.len();
        for slot in Slot::VARIANTS {
            if let Some(cell) = self.cells(*slot).iter().find(|cell| **cell >= cells) {
                return Err(LayoutError::OutOfBounds { slot: *slot, cell: *cell, cells });
            }
        }

        let main_letters = puzzle.main().letters();
        let mut intersections = Vec::with_capacity(2);
        for (slot, cross) in [(Slot::First, puzzle.first()), (Slot::Second, puzzle.second())] {
            let main_cell = self.main_start_column + cross.main_char_index * self.width;
            let cross_cell = self.cells(slot).get(cross.word_char_index).copied();
            if cross_cell != Some(main_cell) || cross.main_char_index >= self.height {
                return Err(LayoutError::MisplacedIntersection {
                    slot,
                    main_cell,
                    cross_cell: cross_cell.unwrap_or(cells),
                });
            }

            let row = cross.main_char_index;
            if let Some(cell) = self.cells(slot).iter().find(|cell| **cell / self.width != row) {
                return Err(LayoutError::Wrapped { slot, cell: *cell });
            }

            let main = main_letters.get(cross.main_char_index).copied();
            let other = cross.attached.letters().get(cross.word_char_index).copied();
            match (main, other) {
                (Some(main), Some(other)) if !letters_match(main, other) => {
                    return Err(LayoutError::LetterMismatch { slot, cell: main_cell, main, cross: other });
                }
                (Some(_), Some(_)) => {}
                _ => return Err(LayoutError::MisplacedIntersection { slot, main_cell, cross_cell: main_cell }),
            }

            intersections.push(main_cell);
        }

        let mut owners: HashMap<usize, Slot> = HashMap::with_capacity(cells);
        for slot in Slot::VARIANTS {
            for cell in self.cells(*slot) {
                if let Some(owner) = owners.insert(*cell, *slot) {
                    let designed = owner == Slot::Main && intersections.contains(cell);
                    if !designed {
                        return Err(LayoutError::Overlap { cell: *cell, a: owner, b: *slot });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Dump `grid` one row per line.
pub(crate) fn print(grid: Array2<char>) -> String {
    let mut out = String::with_capacity(grid.nrows() * (grid.ncols() + 1));

    for row in grid.rows() {
        for cell in row {
            out.push(*cell);
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{layout_grid, Slot};
    use crate::error::LayoutError;
    use crate::puzzle::{Intersection, Puzzle};
    use crate::word::WordPair;

    fn cross(main_char_index: usize, id: u32, translation: &str, word_char_index: usize) -> Intersection {
        Intersection {
            main_char_index,
            attached: WordPair::new(id, translation, translation),
            word_char_index,
        }
    }

    #[test]
    fn larger_offset_goes_first() {
        let main = WordPair::new(1, "main", "ranger");
        let a = cross(0, 2, "draw", 1);
        let b = cross(3, 3, "page", 2);

        let layout = layout_grid(&main, &a, &b);
        assert_eq!(layout.main_start_column(), 2);
        // 2 + (4 - 1)
        assert_eq!(layout.width(), 5);
        assert_eq!(layout.height(), 6);
        assert_eq!(layout.cells(Slot::Main), [2, 7, 12, 17, 22, 27]);
        assert_eq!(layout.cells(Slot::First), [15, 16, 17, 18]);
        assert_eq!(layout.cells(Slot::Second), [1, 2, 3, 4]);

        assert_eq!(layout, layout_grid(&main, &b, &a));
    }

    #[test]
    fn long_first_word_widens_grid() {
        let main = WordPair::new(1, "main", "bxxd");
        let first = cross(0, 2, "abcdef", 1);
        let second = cross(3, 3, "dog", 0);

        let layout = layout_grid(&main, &first, &second);
        assert_eq!(layout.width(), 6);
        assert_eq!(layout.cells(Slot::First), [0, 1, 2, 3, 4, 5]);
        assert_eq!(layout.cells(Slot::Second), [19, 20, 21]);

        let puzzle = Puzzle::new(main, first, second);
        assert_eq!(layout.check(&puzzle), Ok(()));
    }

    #[test]
    fn claims_and_blanks() {
        let main = WordPair::new(1, "main", "abdca");
        let layout = layout_grid(&main, &cross(1, 2, "xbz", 1), &cross(3, 3, "ycz", 1));

        assert_eq!(layout.claims(4), [(Slot::Main, 1), (Slot::Second, 1)]);
        assert_eq!(layout.claims(9), [(Slot::First, 0)]);
        assert!(layout.claims(0).is_empty());
        assert!(layout.is_blank(0));
        assert!(!layout.is_blank(7));
        assert!(layout.is_blank(100));
        assert_eq!(layout.location(10), (1, 3));
    }

    #[test]
    fn array_projection() {
        let main = WordPair::new(1, "main", "abdca");
        let layout = layout_grid(&main, &cross(1, 2, "xbz", 1), &cross(3, 3, "ycz", 1));
        let array = layout.to_array();

        assert_eq!(array.dim(), (5, 3));
        assert_eq!(array[(0, 0)], None);
        assert_eq!(array[(1, 1)], Some((Slot::Main, 1)));
        assert_eq!(array[(1, 2)], Some((Slot::Second, 2)));
        assert_eq!(array[(3, 0)], Some((Slot::First, 0)));
    }

    #[test]
    fn check_rejects_letter_mismatch() {
        let main = WordPair::new(1, "main", "abdca");
        let first = cross(3, 3, "yqz", 1);
        let second = cross(1, 2, "xbz", 1);

        let puzzle = Puzzle::new(main, second, first);
        assert_eq!(
            puzzle.layout().check(&puzzle),
            Err(LayoutError::LetterMismatch { slot: Slot::First, cell: 10, main: 'c', cross: 'q' })
        );
    }

    #[test]
    fn check_rejects_overlap() {
        // both crosses on the same row of the main word
        let main = WordPair::new(1, "main", "abcde");
        let puzzle = Puzzle::new(main, cross(2, 2, "xcx", 1), cross(2, 3, "ycy", 1));
        assert!(matches!(puzzle.layout().check(&puzzle), Err(LayoutError::Overlap { .. })));
    }

    #[test]
    fn check_rejects_offsets_past_the_main_word() {
        let main = WordPair::new(1, "main", "abc");
        let puzzle = Puzzle::new(main, cross(0, 2, "xax", 1), cross(5, 3, "ycy", 1));
        assert!(puzzle.layout().check(&puzzle).is_err());
    }
}
