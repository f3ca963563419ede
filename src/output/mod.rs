//! Terminal output formatting
//!
//! Display utilities for the CLI front end.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_guess_row, print_out_of_guesses, print_score_report, print_win};
