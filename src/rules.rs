//! Tunable limits on which words may cross.

use std::ops::RangeInclusive;

/// Shortest cross word accepted by default.
pub const MIN_CROSS_LENGTH: usize = 3;
/// Longest cross word accepted by default.
pub const MAX_CROSS_LENGTH: usize = 6;
/// Default minimum distance between the two points where cross words meet the main word.
pub const MIN_SPACING: usize = 2;

/// Constraints a crossword must satisfy, consulted by the [`CrosswordFinder`](crate::CrosswordFinder).
///
/// The defaults keep cross words between 3 and 6 letters and forbid the two cross words from sharing or neighbouring a main word letter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CrosswordRules {
    cross_length: RangeInclusive<usize>,
    min_spacing: usize,
}

impl Default for CrosswordRules {
    fn default() -> Self {
        Self {
            cross_length: MIN_CROSS_LENGTH..=MAX_CROSS_LENGTH,
            min_spacing: MIN_SPACING,
        }
    }
}

impl CrosswordRules {
    /// Replace the inclusive range of accepted cross word lengths.
    pub fn with_cross_length(mut self, cross_length: RangeInclusive<usize>) -> Self {
        self.cross_length = cross_length;
        self
    }

    /// Replace the minimum distance between the two intersection points on the main word.
    ///
    /// Values below 1 are raised to 1, since two cross words can never share a main word letter.
    pub fn with_min_spacing(mut self, min_spacing: usize) -> Self {
        self.min_spacing = min_spacing.max(1);
        self
    }

    /// The inclusive range of accepted cross word lengths.
    pub fn cross_length(&self) -> &RangeInclusive<usize> {
        &self.cross_length
    }

    /// The minimum distance between the two intersection points on the main word.
    pub fn min_spacing(&self) -> usize {
        self.min_spacing
    }

    pub(crate) fn accepts_cross_length(&self, length: usize) -> bool {
        self.cross_length.contains(&length)
    }

    // `previous` is the main word offset already taken by the other cross word.
    // With none taken yet, the search measures from one before the first letter, so offset 0 is never used first.
    pub(crate) fn accepts_offset(&self, offset: usize, previous: Option<usize>) -> bool {
        let distance = match previous {
            None => offset + 1,
            Some(previous) => offset.abs_diff(previous),
        };
        distance >= self.min_spacing
    }
}
