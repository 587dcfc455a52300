//! The order in which candidate words are tried.
//!
//! Puzzles vary between sessions because candidates are shuffled before each search.
//! Tests and reproducible sessions inject [`InsertionOrder`] or a seeded [`RandomOrder`] instead.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::word::WordPair;

/// Decides the order in which a [`CrosswordFinder`](crate::CrosswordFinder) tries candidate words.
pub trait CandidateOrder {
    /// Reorder `words` in place.
    fn arrange(&mut self, words: &mut [&WordPair]);
}

/// Keeps candidates in the order the word store returned them.
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertionOrder;

impl CandidateOrder for InsertionOrder {
    fn arrange(&mut self, _words: &mut [&WordPair]) {}
}

/// Shuffles candidates with the wrapped random number generator.
#[derive(Clone, Debug)]
pub struct RandomOrder<R: Rng>(pub R);

impl RandomOrder<ThreadRng> {
    /// Shuffle with the thread-local generator, giving a different puzzle on most calls.
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl RandomOrder<ChaCha8Rng> {
    /// Shuffle reproducibly; the same `seed` and word list always give the same puzzle.
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> CandidateOrder for RandomOrder<R> {
    fn arrange(&mut self, words: &mut [&WordPair]) {
        words.shuffle(&mut self.0);
    }
}
