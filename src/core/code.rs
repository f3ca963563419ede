//! Code sequences
//!
//! A `Code` is an ordered sequence of colors filling the holes of the board.
//! Both the hidden secret and every submitted guess are codes.

use super::{Color, ColorError, Palette};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// An ordered sequence of colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    colors: Vec<Color>,
}

impl Code {
    /// Create a code from a list of colors
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Parse a code from whitespace- or comma-separated color names
    ///
    /// # Errors
    /// Returns `ColorError` for the first invalid name encountered.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let a = Code::parse("red blue green yellow").unwrap();
    /// let b = Code::parse("red,blue,green,yellow").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.len(), 4);
    /// ```
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let colors = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(Color::new)
            .collect::<Result<Vec<Color>, ColorError>>()?;

        Ok(Self::new(colors))
    }

    /// Sample a code of `holes` colors, independently and uniformly with
    /// replacement, from the palette
    ///
    /// Returns `None` when the palette has no colors to draw from.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(palette: &Palette, holes: usize, rng: &mut R) -> Option<Self> {
        let colors = (0..holes)
            .map(|_| palette.colors().choose(rng).cloned())
            .collect::<Option<Vec<Color>>>()?;

        Some(Self::new(colors))
    }

    /// Get the colors in order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of holes the code fills
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check whether the code has no colors
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.colors.iter().map(Color::name).collect();
        write!(f, "{}", names.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_parse_space_separated() {
        let code = Code::parse("red blue green yellow").unwrap();
        assert_eq!(code.len(), 4);
        assert_eq!(code.colors()[0].name(), "red");
        assert_eq!(code.colors()[3].name(), "yellow");
    }

    #[test]
    fn code_parse_comma_separated() {
        let code = Code::parse("red,blue, green").unwrap();
        assert_eq!(code.len(), 3);
        assert_eq!(code.colors()[2].name(), "green");
    }

    #[test]
    fn code_parse_invalid_name() {
        assert!(Code::parse("red blu3 green").is_err());
    }

    #[test]
    fn code_parse_empty_input_is_empty_code() {
        let code = Code::parse("   ").unwrap();
        assert!(code.is_empty());
    }

    #[test]
    fn code_parse_keeps_duplicates() {
        let code = Code::parse("red red blue").unwrap();
        assert_eq!(code.len(), 3);
        assert_eq!(code.colors()[0], code.colors()[1]);
    }

    #[test]
    fn code_equality_is_positional() {
        let a = Code::parse("red blue").unwrap();
        let b = Code::parse("blue red").unwrap();
        assert_ne!(a, b);
        assert_eq!(a, Code::parse("RED BLUE").unwrap());
    }

    #[test]
    fn code_random_draws_from_palette() {
        let palette = Palette::parse("red,blue,green").unwrap();
        let mut rng = rand::rng();

        let code = Code::random(&palette, 8, &mut rng).unwrap();
        assert_eq!(code.len(), 8);
        assert!(code.colors().iter().all(|c| palette.contains(c)));
    }

    #[test]
    fn code_random_single_color_palette() {
        let palette = Palette::parse("red").unwrap();
        let mut rng = rand::rng();

        let code = Code::random(&palette, 4, &mut rng).unwrap();
        assert_eq!(code, Code::parse("red red red red").unwrap());
    }

    #[test]
    fn code_random_empty_palette_is_none() {
        let palette = Palette::new(vec![]);
        let mut rng = rand::rng();

        assert!(Code::random(&palette, 4, &mut rng).is_none());
    }

    #[test]
    fn code_display() {
        let code = Code::parse("red,blue,green").unwrap();
        assert_eq!(format!("{code}"), "red blue green");
    }
}
