//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero knowledge of
//! the terminal front end. All types here are pure and directly testable.

mod code;
mod color;
mod score;

pub use code::Code;
pub use color::{Color, ColorError, Palette};
pub use score::Score;
