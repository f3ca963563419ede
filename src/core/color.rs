//! Color names and palettes
//!
//! A `Color` is an opaque symbolic value; equality is the only operation the
//! game logic needs. A `Palette` is the finite set of colors a session is
//! configured with, and is what secret codes are sampled from.

use std::fmt;

/// A single peg color, identified by a lowercase name
///
/// Names are normalized to lowercase on construction, so `Color::new("Red")`
/// and `Color::new("red")` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

/// Error type for invalid color names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    Empty,
    InvalidName(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Color name must not be empty"),
            Self::InvalidName(name) => {
                write!(f, "Color name '{name}' must contain only ASCII letters")
            }
        }
    }
}

impl std::error::Error for ColorError {}

impl Color {
    /// Create a new Color from a name
    ///
    /// # Errors
    /// Returns `ColorError` if the name is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// let red = Color::new("red").unwrap();
    /// assert_eq!(red.name(), "red");
    /// assert_eq!(red, Color::new("RED").unwrap());
    ///
    /// assert!(Color::new("").is_err());
    /// assert!(Color::new("peg 3").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, ColorError> {
        let name: String = name.into().to_lowercase();

        if name.is_empty() {
            return Err(ColorError::Empty);
        }

        if !name.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(ColorError::InvalidName(name));
        }

        Ok(Self(name))
    }

    /// Get the color name as a string slice
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// The set of colors a game is played with
///
/// Keeps its colors in first-seen order with duplicates removed, so drawing a
/// random color stays uniform over the distinct colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from a list of colors, dropping repeats
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        let mut distinct: Vec<Color> = Vec::with_capacity(colors.len());
        for color in colors {
            if !distinct.contains(&color) {
                distinct.push(color);
            }
        }
        Self { colors: distinct }
    }

    /// Parse a palette from a comma-separated list of names
    ///
    /// Whitespace around names is ignored. Parsing is strict: any invalid name
    /// fails the whole palette rather than being silently dropped, since a
    /// missing color would change the sampling odds.
    ///
    /// # Errors
    /// Returns `ColorError` for the first invalid name encountered.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Palette;
    ///
    /// let palette = Palette::parse("red, blue, green").unwrap();
    /// assert_eq!(palette.len(), 3);
    ///
    /// assert!(Palette::parse("red,,blue").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let colors = s
            .split(',')
            .map(|name| Color::new(name.trim()))
            .collect::<Result<Vec<Color>, ColorError>>()?;

        Ok(Self::new(colors))
    }

    /// Get the palette colors in order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Check whether a color belongs to the palette
    #[inline]
    #[must_use]
    pub fn contains(&self, color: &Color) -> bool {
        self.colors.contains(color)
    }

    /// Number of distinct colors
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check whether the palette has no colors
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.colors.iter().map(Color::name).collect();
        write!(f, "{}", names.join(", "))
    }
}
