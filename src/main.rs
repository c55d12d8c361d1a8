//! Wordle - CLI
//!
//! Word-guessing game with TUI and line modes, plus scoring and catalog
//! audit tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use wordle_board::{
    commands::{run_audit, run_simple, score_guess},
    core::WordLength,
    game::GameConfig,
    output::{print_audit_result, print_score_result},
    wordlists::WordCatalog,
};

#[derive(Parser)]
#[command(
    name = "wordle_board",
    about = "Guess the hidden 4, 5 or 6 letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length: 4, 5 or 6 (default 5; audit checks all lengths if omitted)
    #[arg(short, long, global = true)]
    length: Option<WordLength>,

    /// Number of guesses per game
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// Custom solutions list, one word per line (requires --accepted)
    #[arg(long, global = true, requires = "accepted")]
    solutions: Option<PathBuf>,

    /// Custom accepted-guesses list, one word per line (requires --solutions)
    #[arg(long, global = true, requires = "solutions")]
    accepted: Option<PathBuf>,

    /// Seed for reproducible secret words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file (the only way to get logs in TUI mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-mode game without the TUI
    Simple,

    /// Score a guess against a secret word
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Check the word lists and the scoring rules over every solution pair
    Audit,
}

fn init_logging(verbosity: u8, log_file: Option<&Path>, tui: bool) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder
                .filter_level(level)
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        // Anything written to stderr would corrupt the alternate screen
        None if tui => {
            builder.filter_level(log::LevelFilter::Off);
        }
        None => {
            builder.filter_level(level);
        }
    }

    builder.try_init().context("failed to initialise logging")
}

fn load_catalog(cli: &Cli) -> Result<WordCatalog> {
    match (&cli.solutions, &cli.accepted) {
        (Some(solutions), Some(accepted)) => {
            WordCatalog::from_files(solutions, accepted).context("failed to load word lists")
        }
        _ => Ok(WordCatalog::embedded()),
    }
}

fn game_config(cli: &Cli) -> Result<GameConfig> {
    let length = cli.length.unwrap_or_default();
    let config = GameConfig::new(length.get(), cli.attempts)?;
    Ok(config.with_seed(cli.seed))
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(
        cli.verbose,
        cli.log_file.as_deref(),
        matches!(command, Commands::Play),
    )?;

    let catalog = load_catalog(&cli)?;

    match command {
        Commands::Play => run_play_command(&catalog, game_config(&cli)?),
        Commands::Simple => run_simple(&catalog, game_config(&cli)?),
        Commands::Score { secret, guess } => {
            let result = score_guess(&secret, &guess, &catalog)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Audit => {
            run_audit_command(&catalog, cli.length);
            Ok(())
        }
    }
}

fn run_audit_command(catalog: &WordCatalog, length: Option<WordLength>) {
    let lengths: Vec<WordLength> = length.map_or_else(|| WordLength::ALL.to_vec(), |l| vec![l]);

    println!("\n{}", "═".repeat(70));
    println!(" Word Catalog Audit ");
    println!("{}", "═".repeat(70));
    for &l in &lengths {
        println!("  {l}-letter solutions: {}", catalog.solution_count(l));
    }
    println!();

    let result = run_audit(catalog, &lengths, true);
    log::info!("{}", wordle_board::commands::summary_line(&result));
    print_audit_result(&result);
}

fn run_play_command(catalog: &WordCatalog, config: GameConfig) -> Result<()> {
    use wordle_board::interactive::{App, run_tui};

    let app = App::new(catalog, config).context("failed to start a game")?;
    run_tui(app)
}
