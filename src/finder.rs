use itertools::Itertools;
use log::{debug, trace};

use crate::order::CandidateOrder;
use crate::puzzle::{Intersection, Puzzle, Search};
use crate::rules::CrosswordRules;
use crate::word::{letters_match, WordPair};

/// Searches a word collection for a main word and two cross words that fit together.
///
/// The search is greedy: the first main word that yields two valid cross words is accepted, and for each candidate cross word only the first matching letter is tried.
/// Variety between puzzles comes entirely from the [`CandidateOrder`] passed to [`find`](Self::find).
#[derive(Clone, Debug, Default)]
pub struct CrosswordFinder {
    rules: CrosswordRules,
}

impl CrosswordFinder {
    /// A finder applying `rules` instead of the defaults.
    pub fn with_rules(rules: CrosswordRules) -> Self {
        Self { rules }
    }

    /// The rules this finder applies.
    pub fn rules(&self) -> &CrosswordRules {
        &self.rules
    }

    /// Search `words` for a crossword, trying candidates in the order chosen by `order`.
    ///
    /// Returns [`Search::Unavailable`] for fewer than three words or when no main word has two valid cross words.
    pub fn find(&self, words: &[WordPair], order: &mut impl CandidateOrder) -> Search {
        if words.len() < 3 {
            debug!("no crossword: only {} words available", words.len());
            return Search::Unavailable;
        }

        let mut candidates = words.iter().collect_vec();
        order.arrange(&mut candidates);

        for main in candidates.iter().copied() {
            trace!("trying {:?} as the main word", main.translation);

            let Some(first) = self.find_matching_word(&candidates, main, None) else {
                continue;
            };
            let Some(second) = self.find_matching_word(&candidates, main, Some(&first)) else {
                trace!("{:?} has only one cross word", main.translation);
                continue;
            };

            debug!(
                "crossword found: {:?} crossed by {:?} at {} and {:?} at {}",
                main.translation,
                first.attached.translation,
                first.main_char_index,
                second.attached.translation,
                second.main_char_index,
            );
            return Search::Found(Puzzle::new(main.clone(), first, second));
        }

        debug!("no crossword among {} words", words.len());
        Search::Unavailable
    }

    /// Find the first word in `candidates` that can cross `main`.
    ///
    /// `exclude` is a cross word already attached to `main`: it is skipped, and its offset on `main` (and any offset closer than the minimum spacing) is not reused.
    /// Candidates are scanned in order, then each offset of `main`, and the first letter of the candidate matching it without regard to case is taken.
    pub fn find_matching_word(
        &self,
        candidates: &[&WordPair],
        main: &WordPair,
        exclude: Option<&Intersection>,
    ) -> Option<Intersection> {
        let main_letters = main.letters();
        let taken = exclude.map(|intersection| intersection.main_char_index);

        for candidate in candidates.iter().copied() {
            if candidate.same_word(main)
                || exclude.is_some_and(|intersection| intersection.attached.same_word(candidate))
            {
                continue;
            }
            if !self.rules.accepts_cross_length(candidate.len()) {
                continue;
            }

            let letters = candidate.letters();
            for (main_char_index, &letter) in main_letters.iter().enumerate() {
                if !self.rules.accepts_offset(main_char_index, taken) {
                    continue;
                }

                if let Some(word_char_index) = letters.iter().position(|&other| letters_match(letter, other)) {
                    return Some(Intersection {
                        main_char_index,
                        attached: candidate.clone(),
                        word_char_index,
                    });
                }
            }
        }

        None
    }
}

/// Search `words` for a crossword with the default [`CrosswordRules`].
///
/// Pass [`RandomOrder::thread`](crate::RandomOrder::thread) for a different puzzle each session, or [`InsertionOrder`](crate::InsertionOrder) for a deterministic search.
pub fn find_crossword(words: &[WordPair], order: &mut impl CandidateOrder) -> Search {
    CrosswordFinder::default().find(words, order)
}

/// Find the first word in `candidates` that can cross `main` under the default [`CrosswordRules`].
/// See [`CrosswordFinder::find_matching_word`].
pub fn find_matching_word(
    candidates: &[&WordPair],
    main: &WordPair,
    exclude: Option<&Intersection>,
) -> Option<Intersection> {
    CrosswordFinder::default().find_matching_word(candidates, main, exclude)
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{find_crossword, find_matching_word, CrosswordFinder};
    use crate::order::InsertionOrder;
    use crate::rules::CrosswordRules;
    use crate::word::WordPair;

    fn words(translations: &[&str]) -> Vec<WordPair> {
        translations.iter()
            .enumerate()
            .map(|(i, t)| WordPair::new(i as u32 + 1, format!("word {}", i + 1), *t))
            .collect_vec()
    }

    #[test]
    fn matching_word_takes_first_letter() {
        let words = words(&["banana", "xnanx"]);
        let refs = words.iter().collect_vec();

        // 'b' has no partner, 'a' at offset 1 first matches index 2 of "xnanx"
        let found = find_matching_word(&refs, &words[0], None).unwrap();
        assert_eq!(found.main_char_index, 1);
        assert_eq!(found.attached.id, 2);
        assert_eq!(found.word_char_index, 2);
    }

    #[test]
    fn first_cross_never_uses_offset_zero() {
        let words = words(&["cat", "arc"]);
        let refs = words.iter().collect_vec();

        // 'c' at offset 0 is skipped, 'a' at offset 1 matches the start of "arc"
        let found = find_matching_word(&refs, &words[0], None).unwrap();
        assert_eq!(found.main_char_index, 1);
        assert_eq!(found.word_char_index, 0);
    }

    #[test]
    fn matching_word_takes_first_occurrence() {
        let words = words(&["bob", "xoxo"]);
        let refs = words.iter().collect_vec();

        let found = find_matching_word(&refs, &words[0], None).unwrap();
        assert_eq!((found.main_char_index, found.word_char_index), (1, 1));
    }

    #[test]
    fn matching_word_skips_main_and_excluded() {
        let words = words(&["abcde", "abcde", "zzez"]);
        let refs = words.iter().collect_vec();

        let first = find_matching_word(&refs, &words[0], None).unwrap();
        assert_eq!(first.attached.id, 2);
        assert_eq!((first.main_char_index, first.word_char_index), (1, 1));

        let second = find_matching_word(&refs, &words[0], Some(&first)).unwrap();
        assert_eq!(second.attached.id, 3);
        assert_eq!(second.main_char_index, 4);
        assert_eq!(second.word_char_index, 2);
    }

    #[test]
    fn matching_word_respects_spacing() {
        let words = words(&["abc", "xab", "ybz"]);
        let refs = words.iter().collect_vec();

        let first = find_matching_word(&refs, &words[0], None).unwrap();
        assert_eq!((first.attached.id, first.main_char_index), (2, 1));

        // offsets 0 and 2 both neighbour offset 1
        assert!(find_matching_word(&refs, &words[0], Some(&first)).is_none());
    }

    #[test]
    fn matching_word_rejects_lengths() {
        let words = words(&["abcdef", "ab", "abcdefg"]);
        let refs = words.iter().collect_vec();
        assert!(find_matching_word(&refs, &words[0], None).is_none());

        let finder = CrosswordFinder::with_rules(CrosswordRules::default().with_cross_length(2..=7));
        assert_eq!(finder.find_matching_word(&refs, &words[0], None).unwrap().attached.id, 2);
    }

    #[test]
    fn matching_word_ignores_case() {
        let words = words(&["Gato", "PAGO"]);
        let refs = words.iter().collect_vec();

        let found = find_matching_word(&refs, &words[0], None).unwrap();
        assert_eq!((found.main_char_index, found.word_char_index), (1, 1));
    }

    #[test]
    fn too_few_words() {
        assert!(!find_crossword(&[], &mut InsertionOrder).is_available());
        assert!(!find_crossword(&words(&["abc"]), &mut InsertionOrder).is_available());
        assert!(!find_crossword(&words(&["abc", "abc"]), &mut InsertionOrder).is_available());
    }

    #[test]
    fn short_main_word_has_no_room() {
        // the first cross takes offset 1 of "abc", leaving only its neighbours
        let words = words(&["abc", "abc", "abc"]);
        assert!(!find_crossword(&words, &mut InsertionOrder).is_available());
    }

    #[test]
    fn no_shared_letters() {
        let words = words(&["abc", "def", "ghi", "jkl"]);
        assert!(!find_crossword(&words, &mut InsertionOrder).is_available());
    }

    #[test]
    fn first_main_word_wins() {
        // both "abdca" and "qbqcq" could be main words; insertion order tries "abdca" first
        let words = words(&["abdca", "qbqcq", "xbz", "ycz"]);
        let puzzle = find_crossword(&words, &mut InsertionOrder).into_puzzle().unwrap();
        assert_eq!(puzzle.main().id, 1);

        let (first, second) = puzzle.crosses();
        assert_eq!((first.attached.id, first.main_char_index, first.word_char_index), (2, 1, 1));
        assert_eq!((second.attached.id, second.main_char_index, second.word_char_index), (4, 3, 1));
    }
}
