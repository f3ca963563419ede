//! Mastermind
//!
//! The core evaluation logic of the Mastermind code-breaking game: secret code
//! generation, guess scoring, and turn-limit tracking, with a thin terminal
//! front end on top. The engine itself has no UI dependency and only supplies
//! raw facts; win/loss policy belongs to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Palette};
//! use mastermind::engine::CodeKeeper;
//!
//! let palette = Palette::parse("red,blue,green,yellow").unwrap();
//!
//! // A live session generates its secret randomly from the palette
//! let mut keeper = CodeKeeper::new(4, palette, 12).unwrap();
//!
//! let guess = Code::parse("red blue green yellow").unwrap();
//! let score = keeper.evaluate_guess(&guess).unwrap();
//!
//! assert!(score.exact() + score.color_only() <= keeper.holes());
//! assert_eq!(keeper.guesses_remaining(), 11);
//! ```

// Core domain types
pub mod core;

// The game engine
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
