//! One-shot guess scoring
//!
//! Evaluates a single guess against an explicitly given secret, for checking
//! positions from a physical board or a recorded game.

use crate::core::{Code, Palette, Score};
use crate::engine::CodeKeeper;

/// A scoring request: both codes as raw text plus the palette in play
pub struct ScoreRequest {
    pub secret: String,
    pub guess: String,
    pub palette: Palette,
}

/// Result of scoring one guess
#[derive(Debug)]
pub struct ScoreReport {
    pub guess: Code,
    pub holes: usize,
    pub score: Score,
}

/// Score a guess against a known secret
///
/// Routes through a throwaway [`CodeKeeper`] so the request gets the same
/// validation a live session applies.
///
/// # Errors
///
/// Returns an error if:
/// - Either code fails to parse as color names
/// - The secret is empty or uses colors outside the palette
/// - The guess length differs from the secret or uses colors outside the palette
pub fn score_guess(request: ScoreRequest) -> Result<ScoreReport, String> {
    let secret = Code::parse(&request.secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess = Code::parse(&request.guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let mut keeper = CodeKeeper::with_secret(secret, request.palette, 1)
        .map_err(|e| format!("Invalid secret: {e}"))?;
    let holes = keeper.holes();

    let score = keeper
        .evaluate_guess(&guess)
        .map_err(|e| format!("Invalid guess: {e}"))?;

    Ok(ScoreReport {
        guess,
        holes,
        score,
    })
}
