//! Display functions for game output

use super::formatters::peg_row;
use crate::commands::ScoreReport;
use crate::core::{Code, Color, Palette, Score};
use colored::{ColoredString, Colorize};

/// Render a color name in its own terminal color where one exists
fn color_swatch(color: &Color) -> ColoredString {
    let name = color.name();
    match name {
        "red" => name.red(),
        "green" => name.green(),
        "blue" => name.blue(),
        "yellow" => name.yellow(),
        "purple" | "magenta" => name.magenta(),
        "cyan" => name.cyan(),
        "white" => name.white(),
        "black" => name.bright_black(),
        "brown" => name.truecolor(150, 82, 32),
        _ => name.normal(),
    }
}

fn code_swatches(code: &Code) -> String {
    let names: Vec<String> = code
        .colors()
        .iter()
        .map(|c| color_swatch(c).to_string())
        .collect();
    names.join(" ")
}

/// Print the session banner
pub fn print_banner(palette: &Palette, holes: usize, guesses: i64) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Mastermind - Break the Code                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let swatches: Vec<String> = palette
        .colors()
        .iter()
        .map(|c| color_swatch(c).to_string())
        .collect();

    println!("A secret code of {holes} colors has been set.");
    println!("Colors: {}", swatches.join(", "));
    println!("You have {guesses} guesses. Enter {holes} color names per guess.\n");
    println!("Pegs: {} exact match   {} right color, wrong hole\n", "●".green(), "○".yellow());
}

/// Print one evaluated guess with its peg feedback
pub fn print_guess_row(turn: u32, guess: &Code, score: Score, holes: usize) {
    println!(
        "{:>3}. {}  {}",
        turn,
        code_swatches(guess),
        peg_row(score, holes)
    );
}

/// Print the win banner
pub fn print_win(turns: u32) {
    println!(
        "\n{}",
        format!(
            "🎉 Congratulations, you broke the code in {turns} {}!",
            if turns == 1 { "guess" } else { "guesses" }
        )
        .green()
        .bold()
    );
}

/// Print the out-of-guesses message
///
/// The secret stays hidden; the keeper has no way to reveal it.
pub fn print_out_of_guesses() {
    println!("\n{}", "Sorry, you ran out of guesses.".red().bold());
}

/// Print the result of a one-shot scoring
pub fn print_score_report(report: &ScoreReport) {
    println!(
        "\nGuess: {}  {}",
        code_swatches(&report.guess),
        peg_row(report.score, report.holes)
    );
    println!("Score: {}", report.score);

    if report.score.is_perfect(report.holes) {
        println!("{}", "Code broken!".green().bold());
    }
}
