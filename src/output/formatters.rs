//! Formatting utilities for terminal output

use crate::core::Score;

/// Render a score as a row of key pegs
///
/// Exact matches come first as filled pegs, then color-only matches as hollow
/// pegs; unmatched holes show as dots so every row has the same width.
#[must_use]
pub fn peg_row(score: Score, holes: usize) -> String {
    let misses = holes.saturating_sub(score.total());

    let mut row = String::new();
    row.push_str(&"●".repeat(score.exact()));
    row.push_str(&"○".repeat(score.color_only()));
    row.push_str(&"·".repeat(misses));

    row
}
