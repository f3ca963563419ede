//! Mastermind - CLI
//!
//! Play the code-breaking game in the terminal, or score a single guess
//! against a known secret.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{ScoreRequest, run_play, score_guess},
    core::Palette,
    engine::CodeKeeper,
    output::print_score_report,
};
use std::io;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game for the terminal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of holes in the secret code
    #[arg(long, global = true, default_value_t = 4)]
    holes: usize,

    /// Comma-separated palette of peg colors
    #[arg(
        long,
        global = true,
        default_value = "yellow,brown,red,purple,blue,green"
    )]
    colors: String,

    /// Number of guesses allowed
    #[arg(long, global = true, default_value_t = 12)]
    guesses: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against a randomly generated secret code (default)
    Play,

    /// Score a guess against a known secret code
    Score {
        /// The secret code, e.g. "red,blue,green,yellow"
        secret: String,

        /// The guess to score against it
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let palette =
        Palette::parse(&cli.colors).map_err(|e| anyhow::anyhow!("invalid --colors: {e}"))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.holes, palette, cli.guesses),
        Commands::Score { secret, guess } => run_score_command(secret, guess, palette),
    }
}

fn run_play_command(holes: usize, palette: Palette, guesses: u32) -> Result<()> {
    let keeper = CodeKeeper::new(holes, palette, guesses)?;

    let mut stdin = io::stdin().lock();
    run_play(keeper, &mut stdin).map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

fn run_score_command(secret: String, guess: String, palette: Palette) -> Result<()> {
    let request = ScoreRequest {
        secret,
        guess,
        palette,
    };
    let report = score_guess(request).map_err(|e| anyhow::anyhow!(e))?;

    print_score_report(&report);
    Ok(())
}
