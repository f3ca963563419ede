//! The code keeper
//!
//! `CodeKeeper` holds one session's secret code and remaining-guess counter,
//! and evaluates guesses against the secret. It is the only stateful piece of
//! the game; everything else derives from the scores it hands out.

use crate::core::{Code, Color, Palette, Score};
use std::fmt;

/// Error type for invalid game configuration
///
/// Fatal to session creation; there is no partially constructed keeper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoHoles,
    EmptyPalette,
    NoGuesses,
    SecretOutsidePalette(Color),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHoles => write!(f, "A code must fill at least one hole"),
            Self::EmptyPalette => write!(f, "The palette must contain at least one color"),
            Self::NoGuesses => write!(f, "At least one guess must be allowed"),
            Self::SecretOutsidePalette(color) => {
                write!(f, "Secret color '{color}' is not in the palette")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error type for guesses the keeper refuses to evaluate
///
/// Recoverable: the guess is rejected before the counter moves, so the caller
/// can re-prompt without the player losing a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    WrongLength { expected: usize, actual: usize },
    UnknownColor(Color),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Guess must fill {expected} holes, got {actual}")
            }
            Self::UnknownColor(color) => {
                write!(f, "Color '{color}' is not in the palette")
            }
        }
    }
}

impl std::error::Error for GuessError {}

/// Keeper of one session's secret code
///
/// The secret is generated at construction and never leaves the keeper; only
/// derived scores and the code length are observable. The keeper does not
/// decide wins or losses — callers compare [`Score::is_perfect`] and
/// [`guesses_remaining`](Self::guesses_remaining) themselves — and it keeps
/// accepting well-formed guesses after the counter runs out, so stopping the
/// session is also the caller's call.
///
/// # Examples
/// ```
/// use mastermind::core::{Code, Palette};
/// use mastermind::engine::CodeKeeper;
///
/// let palette = Palette::parse("red,blue,green,yellow").unwrap();
/// let secret = Code::parse("red blue green yellow").unwrap();
/// let mut keeper = CodeKeeper::with_secret(secret, palette, 12).unwrap();
///
/// let guess = Code::parse("yellow green blue red").unwrap();
/// let score = keeper.evaluate_guess(&guess).unwrap();
///
/// assert_eq!(score.exact(), 0);
/// assert_eq!(score.color_only(), 4);
/// assert_eq!(keeper.guesses_remaining(), 11);
/// ```
pub struct CodeKeeper {
    palette: Palette,
    secret: Code,
    remaining: i64,
}

impl CodeKeeper {
    /// Create a keeper with a randomly generated secret
    ///
    /// The secret is sampled `holes` times, independently and uniformly with
    /// replacement, from the palette.
    ///
    /// # Errors
    /// Returns `ConfigError` if `holes` is zero, the palette is empty, or
    /// `max_guesses` is zero.
    pub fn new(holes: usize, palette: Palette, max_guesses: u32) -> Result<Self, ConfigError> {
        Self::check_rules(holes, &palette, max_guesses)?;

        let mut rng = rand::rng();
        let secret = Code::random(&palette, holes, &mut rng).ok_or(ConfigError::EmptyPalette)?;

        Ok(Self {
            palette,
            secret,
            remaining: i64::from(max_guesses),
        })
    }

    /// Create a keeper around a known secret
    ///
    /// Used where the secret comes from outside the session, such as scoring a
    /// recorded game position.
    ///
    /// # Errors
    /// Returns `ConfigError` under the same rules as [`new`](Self::new), plus
    /// `SecretOutsidePalette` if the secret uses a color the palette lacks.
    pub fn with_secret(
        secret: Code,
        palette: Palette,
        max_guesses: u32,
    ) -> Result<Self, ConfigError> {
        Self::check_rules(secret.len(), &palette, max_guesses)?;

        if let Some(color) = secret.colors().iter().find(|c| !palette.contains(c)) {
            return Err(ConfigError::SecretOutsidePalette(color.clone()));
        }

        Ok(Self {
            palette,
            secret,
            remaining: i64::from(max_guesses),
        })
    }

    fn check_rules(holes: usize, palette: &Palette, max_guesses: u32) -> Result<(), ConfigError> {
        if holes == 0 {
            return Err(ConfigError::NoHoles);
        }
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if max_guesses == 0 {
            return Err(ConfigError::NoGuesses);
        }
        Ok(())
    }

    /// Evaluate a guess against the secret
    ///
    /// Costs one guess from the counter — unconditionally, even when the guess
    /// wins or the counter is already spent.
    ///
    /// # Errors
    /// Returns `GuessError` if the guess has the wrong length or uses a color
    /// outside the palette. Rejected guesses leave the counter untouched.
    pub fn evaluate_guess(&mut self, guess: &Code) -> Result<Score, GuessError> {
        if guess.len() != self.secret.len() {
            return Err(GuessError::WrongLength {
                expected: self.secret.len(),
                actual: guess.len(),
            });
        }

        if let Some(color) = guess.colors().iter().find(|c| !self.palette.contains(c)) {
            return Err(GuessError::UnknownColor(color.clone()));
        }

        self.remaining -= 1;
        Ok(Score::tally(guess, &self.secret))
    }

    /// Guesses left in the session
    ///
    /// Goes negative when callers keep evaluating past the limit.
    #[inline]
    #[must_use]
    pub const fn guesses_remaining(&self) -> i64 {
        self.remaining
    }

    /// Number of holes in the secret code
    #[inline]
    #[must_use]
    pub fn holes(&self) -> usize {
        self.secret.len()
    }

    /// The palette the session is played with
    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }
}
