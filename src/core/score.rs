//! Guess scoring
//!
//! A `Score` is the feedback for one guess: how many holes match the secret in
//! both color and position, and how many further guess colors appear in the
//! secret at some other, not-yet-matched position.

use super::Code;
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for a single guess
///
/// `exact` counts holes matching in color and position; `color_only` counts
/// guess colors present in the secret elsewhere. Always `exact + color_only`
/// at most the number of holes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    exact: usize,
    color_only: usize,
}

impl Score {
    /// Create a score from raw counts
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, color_only: usize) -> Self {
        Self { exact, color_only }
    }

    /// Score `guess` against `secret`
    ///
    /// Both codes must fill the same number of holes; the engine validates
    /// this before calling.
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches; every secret color the guess missed
    ///    goes into an availability pool.
    /// 2. Second pass: each missed guess color consumes at most one pooled
    ///    occurrence of that color and counts as a color-only match.
    ///
    /// Consuming from the pool is what stops a single secret color instance
    /// from satisfying more than one guess color instance.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    ///
    /// let secret = Code::parse("red red blue green").unwrap();
    /// let guess = Code::parse("red blue red green").unwrap();
    ///
    /// let score = Score::tally(&guess, &secret);
    /// assert_eq!(score.exact(), 2);
    /// assert_eq!(score.color_only(), 2);
    /// ```
    #[must_use]
    pub fn tally(guess: &Code, secret: &Code) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "codes must fill the same holes");

        let mut available: FxHashMap<&str, usize> = FxHashMap::default();

        // First pass: exact matches; pool the secret colors at missed holes
        let mut exact = 0;
        for (g, s) in guess.colors().iter().zip(secret.colors()) {
            if g == s {
                exact += 1;
            } else {
                *available.entry(s.name()).or_insert(0) += 1;
            }
        }

        // Second pass: missed guess colors consume from the pool
        let mut color_only = 0;
        for (g, s) in guess.colors().iter().zip(secret.colors()) {
            if g != s
                && let Some(count) = available.get_mut(g.name())
                && *count > 0
            {
                color_only += 1;
                *count -= 1;
            }
        }

        Self { exact, color_only }
    }

    /// Holes matched in both color and position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Guess colors present in the secret at other positions
    #[inline]
    #[must_use]
    pub const fn color_only(self) -> usize {
        self.color_only
    }

    /// Total number of matched guess colors
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.exact + self.color_only
    }

    /// Check whether the guess broke a code of `holes` holes
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, holes: usize) -> bool {
        self.exact == holes
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} exact, {} color-only",
            self.exact, self.color_only
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(guess: &str, secret: &str) -> Score {
        Score::tally(&Code::parse(guess).unwrap(), &Code::parse(secret).unwrap())
    }

    #[test]
    fn tally_all_exact() {
        let score = tally("red blue green yellow", "red blue green yellow");
        assert_eq!(score, Score::new(4, 0));
        assert!(score.is_perfect(4));
    }

    #[test]
    fn tally_no_shared_colors() {
        let score = tally("red red red red", "blue green blue green");
        assert_eq!(score, Score::new(0, 0));
    }

    #[test]
    fn tally_full_rotation_is_all_color_only() {
        let score = tally("yellow green blue red", "red blue green yellow");
        assert_eq!(score, Score::new(0, 4));
        assert!(!score.is_perfect(4));
    }

    #[test]
    fn tally_repeated_secret_and_guess_colors() {
        // Positions 0 and 3 match exactly; the remaining secret pool is
        // {red, blue} and the remaining guess colors {blue, red} both hit it.
        let score = tally("red blue red green", "red red blue green");
        assert_eq!(score, Score::new(2, 2));
    }

    #[test]
    fn tally_over_represented_guess_color() {
        // Exact matches at positions 0 and 2; the pooled a and c offer
        // nothing to the two remaining b's.
        let score = tally("a b b b", "a a b c");
        assert_eq!(score, Score::new(2, 0));
    }

    #[test]
    fn tally_secret_color_not_double_counted_after_exact() {
        // The only d in the secret is consumed by its exact match; the second
        // d in the guess must not also score color-only.
        let score = tally("e d e d", "b c a d");
        assert_eq!(score, Score::new(1, 0));
    }

    #[test]
    fn tally_misplaced_color_consumed_once() {
        // One misplaced b in the secret, two b's in the guess: only one scores.
        let score = tally("b b c c", "a a a b");
        assert_eq!(score, Score::new(0, 1));
    }

    #[test]
    fn tally_counts_bounded_by_holes() {
        for (guess, secret) in [
            ("red red red red", "red red blue blue"),
            ("blue red red blue", "red blue blue red"),
            ("green green blue blue", "blue blue green green"),
        ] {
            let score = tally(guess, secret);
            assert!(score.exact() <= 4);
            assert!(score.total() <= 4);
        }
    }

    #[test]
    fn tally_single_hole() {
        assert_eq!(tally("red", "red"), Score::new(1, 0));
        assert_eq!(tally("red", "blue"), Score::new(0, 0));
    }

    #[test]
    fn score_total() {
        assert_eq!(Score::new(2, 1).total(), 3);
        assert_eq!(Score::new(0, 0).total(), 0);
    }

    #[test]
    fn score_display() {
        assert_eq!(format!("{}", Score::new(2, 1)), "2 exact, 1 color-only");
    }
}
