//! Display functions for boards and command results

use super::formatters::{
    KEYBOARD_ROWS, classification_label, colored_letter, colored_tile, create_progress_bar,
};
use crate::commands::{AuditResult, ScoreResult, summary_line};
use crate::core::LetterClassification;
use crate::game::{Board, GameStatus};
use colored::Colorize;

/// Print the board grid followed by the keyboard hints
pub fn print_board(board: &Board<'_>) {
    println!();
    for (i, row) in board.rows().iter().enumerate() {
        let tiles: Vec<String> = row.tiles().iter().map(|t| colored_tile(t).to_string()).collect();
        let marker = if i == board.active_row() && !board.status().is_over() {
            "▶".bright_cyan().to_string()
        } else {
            " ".to_string()
        };
        println!("  {marker} {}", tiles.join(" "));
    }
    println!();
    print_keyboard(board);
}

/// Print the keyboard with the best classification seen for each letter
pub fn print_keyboard(board: &Board<'_>) {
    let hints = board.letter_hints();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|ch| {
                let class = hints
                    .get(&ch)
                    .copied()
                    .unwrap_or(LetterClassification::Pending);
                colored_letter(Some(ch), class).to_string()
            })
            .collect();
        println!("  {}{}", "  ".repeat(indent), keys.join(""));
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_over(board: &Board<'_>) {
    let secret = board.secret_word().text().to_uppercase();
    println!("{}", "═".repeat(50).bright_cyan());

    match board.status() {
        GameStatus::Won => {
            let used = board.attempts_used();
            println!(
                "  {} {}",
                "🎉 Solved!".bright_green().bold(),
                format!(
                    "{secret} in {used} {}",
                    if used == 1 { "guess" } else { "guesses" }
                )
                .bright_white()
            );
        }
        GameStatus::Lost => {
            println!(
                "  {} The word was {}",
                "❌ Out of guesses.".red().bold(),
                secret.bright_yellow().bold()
            );
        }
        GameStatus::InProgress => return,
    }

    println!();
    for row in board.rows().iter().filter(|r| r.is_submitted()) {
        let emoji: String = row
            .classifications()
            .iter()
            .map(|c| c.to_emoji())
            .collect();
        println!("    {} {}", emoji, row.word().to_uppercase().bright_white());
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.text().to_uppercase().bright_yellow().bold(),
        result.guess.text().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let tiles: Vec<String> = result
        .guess
        .text()
        .chars()
        .zip(result.feedback.classifications())
        .map(|(ch, &class)| colored_letter(Some(ch), class).to_string())
        .collect();
    println!("\n  {}", tiles.join(" "));
    println!("  {}  {}", result.feedback.to_emoji(), result.feedback);

    println!();
    for (ch, &class) in result
        .guess
        .text()
        .chars()
        .zip(result.feedback.classifications())
    {
        println!(
            "   {} {}",
            ch.to_ascii_uppercase(),
            classification_label(class)
        );
    }

    if !result.accepted {
        println!(
            "\n{}",
            "⚠ not in the accepted word list; a game would reject it".yellow()
        );
    }
}

/// Print the result of a catalog audit
pub fn print_audit_result(result: &AuditResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CATALOG AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let stats = &result.load_stats;
    println!("\n📚 {}", "Word lists:".bright_cyan().bold());
    println!("   Accepted guesses:  {}", result.accepted_count);
    println!("   Duplicates:        {}", stats.duplicate_solutions);
    println!(
        "   Unlisted answers:  {} (added to accepted)",
        stats.unlisted_solutions.len()
    );
    if stats.skipped_solutions.is_empty() {
        println!("   Skipped entries:   {}", "0".green());
    } else {
        println!(
            "   Skipped entries:   {}",
            stats.skipped_solutions.len().to_string().red()
        );
        for entry in stats.skipped_solutions.iter().take(10) {
            println!("     • {entry:?}");
        }
    }

    println!("\n🔎 {}", "Scoring checks:".bright_cyan().bold());
    for audit in &result.lengths {
        let max = audit.length.get() as f64;
        println!(
            "   {}-letter: {:5} words, {:8} pairs, {} violations",
            audit.length,
            audit.solutions,
            audit.pairs_checked,
            if audit.violation_count == 0 {
                "0".green()
            } else {
                audit.violation_count.to_string().red()
            }
        );
        println!(
            "      greens  [{}] {:.2}",
            create_progress_bar(audit.average_correct, max, 20).green(),
            audit.average_correct
        );
        println!(
            "      yellows [{}] {:.2}",
            create_progress_bar(audit.average_wrong_spot, max, 20).yellow(),
            audit.average_wrong_spot
        );
        for (secret, guess, reason) in &audit.violations {
            println!("      {} {secret} / {guess}: {reason}", "✗".red());
        }
    }

    println!(
        "\n   Time taken: {:.2}s",
        result.duration.as_secs_f64()
    );
    println!("   {}", summary_line(result));
}
