#![warn(missing_docs)]

//! # `wordcross`
//!
//! Small crosswords for vocabulary practice: one vertical *main* word crossed by two horizontal *cross* words, all taken from a learner's dictionary.
//! Take a snapshot of a [`WordStore`] such as a [`Dictionary`], search it with [`find_crossword`], lay the resulting [`Puzzle`] out with [`Puzzle::layout`],
//! and collect answers on an [`AnswerSheet`].
//!
//! ```
//! use wordcross::{find_crossword, AnswerSheet, Dictionary, InsertionOrder, WordStore};
//!
//! let dictionary = Dictionary::from_iter([("main", "abdca"), ("one", "xbz"), ("two", "ycz")]);
//! let puzzle = find_crossword(&dictionary.snapshot(), &mut InsertionOrder).into_puzzle().unwrap();
//! assert_eq!(puzzle.to_string(), ".a.\nxbz\n.d.\nycz\n.a.\n");
//!
//! let mut sheet = AnswerSheet::new(&puzzle);
//! sheet.enter(4, 'b').unwrap();
//! assert_eq!(sheet.score().to_string(), "2/11");
//! ```
//!
//! # Internals
//! The search is greedy and cheap: for each candidate main word, in an order chosen by a [`CandidateOrder`], the first candidate sharing a letter becomes the first cross word,
//! and the first other candidate sharing a letter far enough from the first becomes the second.
//! Cross words must be 3 to 6 letters long and may not meet the main word on the same or neighbouring letters, and the first one never meets its first letter; see [`CrosswordRules`].
//!
//! The grid is a flat, row-major array of `width * height` cells. The main word runs down one column, each cross word along the row of the letter it shares.
//! Whichever cross word shares a letter further into itself is placed [`First`](Slot::First) and fixes the main word's column.

pub use answer::{score, AnswerSheet, Score};
pub use dictionary::{Dictionary, WordStore};
pub use error::{AnswerError, DictionaryError, LayoutError};
pub use finder::{find_crossword, find_matching_word, CrosswordFinder};
pub use layout::{layout_grid, Layout, Slot};
pub use order::{CandidateOrder, InsertionOrder, RandomOrder};
pub use puzzle::{Intersection, Puzzle, Search};
pub use rules::CrosswordRules;
pub use word::{WordId, WordPair};

pub(crate) mod answer;
pub(crate) mod dictionary;
pub mod error;
pub(crate) mod finder;
pub(crate) mod layout;
pub mod order;
pub(crate) mod puzzle;
pub mod rules;
pub(crate) mod word;
#[cfg(feature = "wasm")]
pub mod wasm;
