//! Simple line-mode game
//!
//! Plays the game in a plain terminal without the TUI: one guess per line.

use crate::core::WordLength;
use crate::game::{Board, GameConfig, GameError, InputRouter, RouteOutcome};
use crate::output::{print_board, print_game_over};
use crate::wordlists::WordCatalog;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Guess(String),
    Quit,
    /// New secret word, same settings
    New,
    /// Same secret word, cleared board
    Retry,
    Length(WordLength),
    Help,
    Unknown(String),
}

impl LineCommand {
    /// Parse one line of input
    ///
    /// Anything starting with `:` is a command; everything else is a guess.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(command) = line.strip_prefix(':') else {
            return Self::Guess(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("q" | "quit" | "exit"), None) => Self::Quit,
            (Some("n" | "new"), None) => Self::New,
            (Some("r" | "retry"), None) => Self::Retry,
            (Some("h" | "help"), None) => Self::Help,
            (Some("l" | "length"), Some(n)) => n
                .parse::<WordLength>()
                .map_or_else(|_| Self::Unknown(line.to_string()), Self::Length),
            _ => Self::Unknown(line.to_string()),
        }
    }
}

fn print_help() {
    println!("Type a guess and press Enter. Commands:");
    println!("  :new         new secret word");
    println!("  :retry       same word, clear the board");
    println!("  :length N    switch to N-letter words (4-6)");
    println!("  :help        show this help");
    println!("  :quit        exit\n");
}

/// Run the line-mode game
///
/// # Errors
///
/// Returns an error on terminal I/O failure or if the catalog has no word of
/// the configured length.
pub fn run_simple(catalog: &WordCatalog, config: GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Line Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut board = Board::new(catalog, config).context("failed to start a game")?;
    let mut router = InputRouter::new();

    loop {
        print_board(&board);

        if board.status().is_over() {
            print_game_over(&board);
            let answer = get_user_input("Play again? (yes/retry/no)")?.to_lowercase();
            match answer.as_str() {
                "yes" | "y" => board.reset_for_retry()?,
                "retry" | "r" => board.replay(),
                _ => break,
            }
            router.reset();
            continue;
        }

        let prompt = format!(
            "Guess {}/{} ({} letters)",
            board.active_row() + 1,
            board.max_attempts(),
            board.word_length()
        );

        match LineCommand::parse(&get_user_input(&prompt)?) {
            LineCommand::Quit => break,
            LineCommand::Help => print_help(),
            LineCommand::New => {
                board.reset_for_retry()?;
                router.reset();
                println!("\n🔄 New word!");
            }
            LineCommand::Retry => {
                board.replay();
                router.reset();
                println!("\n🔄 Board cleared, same word.");
            }
            LineCommand::Length(length) => {
                let config = board.config().with_word_length(length);
                match board.new_game(config) {
                    Ok(()) => {
                        router.reset();
                        println!("\n🔄 Now playing {length}-letter words.");
                    }
                    Err(e) => println!("{}", format!("❌ {e}").red()),
                }
            }
            LineCommand::Unknown(text) => {
                println!("{}", format!("❌ unknown command: {text}").red());
            }
            LineCommand::Guess(text) => match router.route_line(&mut board, &text) {
                RouteOutcome::Submitted(outcome) => {
                    println!("  {}", outcome.feedback.to_emoji());
                }
                RouteOutcome::Rejected(GameError::InvalidWord(word)) => {
                    println!(
                        "{}",
                        format!("❌ {} is not in the word list", word.to_uppercase()).red()
                    );
                }
                RouteOutcome::Rejected(e) => println!("{}", format!("❌ {e}").red()),
                RouteOutcome::Ignored
                | RouteOutcome::LetterAdded
                | RouteOutcome::LetterRemoved => {}
            },
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    if read == 0 {
        // EOF behaves like :quit
        return Ok(":quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_guess() {
        assert_eq!(
            LineCommand::parse("  crane \n"),
            LineCommand::Guess("crane".to_string())
        );
    }

    #[test]
    fn parses_commands() {
        assert_eq!(LineCommand::parse(":quit"), LineCommand::Quit);
        assert_eq!(LineCommand::parse(":q"), LineCommand::Quit);
        assert_eq!(LineCommand::parse(":new"), LineCommand::New);
        assert_eq!(LineCommand::parse(":retry"), LineCommand::Retry);
        assert_eq!(LineCommand::parse(":help"), LineCommand::Help);
        assert_eq!(
            LineCommand::parse(":length 6"),
            LineCommand::Length(WordLength::SIX)
        );
    }

    #[test]
    fn bad_commands_are_unknown() {
        assert_eq!(
            LineCommand::parse(":length 9"),
            LineCommand::Unknown(":length 9".to_string())
        );
        assert_eq!(
            LineCommand::parse(":dance"),
            LineCommand::Unknown(":dance".to_string())
        );
        assert_eq!(
            LineCommand::parse(":new now"),
            LineCommand::Unknown(":new now".to_string())
        );
    }
}
