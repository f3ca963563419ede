//! Interactive play mode
//!
//! The terminal caller around the engine: reads guesses, shows peg feedback,
//! and applies the win/loss policy the keeper itself stays out of.

use crate::core::Code;
use crate::engine::CodeKeeper;
use crate::output::display::{print_banner, print_guess_row, print_out_of_guesses, print_win};
use std::io::{self, BufRead, Write};

/// How a play session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The player found the secret code
    CodeBroken { turns: u32 },
    /// The guess counter ran out first
    OutOfGuesses,
    /// The player quit or input ended
    Quit,
}

/// Run an interactive game over the given reader
///
/// Takes any `BufRead` so tests can drive a full session from a `Cursor`.
/// Malformed guesses are re-prompted without costing a turn; the session stops
/// on a perfect score or once the keeper's counter reaches zero.
///
/// # Errors
///
/// Returns an error only for I/O failures on the reader or stdout.
pub fn run_play<R: BufRead>(mut keeper: CodeKeeper, reader: &mut R) -> Result<PlayOutcome, String> {
    print_banner(keeper.palette(), keeper.holes(), keeper.guesses_remaining());

    let mut turn: u32 = 1;

    loop {
        if keeper.guesses_remaining() <= 0 {
            print_out_of_guesses();
            return Ok(PlayOutcome::OutOfGuesses);
        }

        let prompt = format!("Guess {turn} ({} left)", keeper.guesses_remaining());
        let Some(input) = read_line(&prompt, reader)? else {
            println!("\nBye!");
            return Ok(PlayOutcome::Quit);
        };

        if input.is_empty() {
            continue;
        }

        if matches!(input.as_str(), "quit" | "q" | "exit") {
            println!("Bye!");
            return Ok(PlayOutcome::Quit);
        }

        let guess = match Code::parse(&input) {
            Ok(guess) => guess,
            Err(e) => {
                println!("✗ {e}");
                continue;
            }
        };

        match keeper.evaluate_guess(&guess) {
            Ok(score) => {
                print_guess_row(turn, &guess, score, keeper.holes());

                if score.is_perfect(keeper.holes()) {
                    print_win(turn);
                    return Ok(PlayOutcome::CodeBroken { turns: turn });
                }

                turn += 1;
            }
            Err(e) => {
                // No turn spent on a rejected guess
                println!("✗ {e}");
            }
        }
    }
}

/// Prompt and read one trimmed line; `None` on end of input
fn read_line<R: BufRead>(prompt: &str, reader: &mut R) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = reader.read_line(&mut input).map_err(|e| e.to_string())?;

    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_lowercase()))
}
