//! Wordle - CLI
//!
//! Play Wordle with 4-8 letter words in a TUI or a plain line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{run_reset, run_simple, share_last_game, show_stats},
    config::{AppConfig, CONFIG_FILE, Overrides, default_data_dir},
    interactive::{App, run_tui},
    session::Session,
    stats::StatsRecorder,
    storage::JsonFileStore,
    wordlists::WordLists,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle in the terminal with 4-8 letter words and saved statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length, 4-8
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Guesses per game, 4-8
    #[arg(short, long, global = true)]
    max_guesses: Option<usize>,

    /// Directory holding the saved game, statistics and log
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (default: <data-dir>/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Custom list of accepted guesses, one word per line
    #[arg(long, global = true)]
    valid_words: Option<PathBuf>,

    /// Custom list of possible answers, one word per line
    #[arg(long, global = true)]
    answer_words: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show saved statistics (for one word length with --length)
    Stats,

    /// Delete the saved game
    Reset {
        /// Delete statistics as well
        #[arg(long)]
        stats: bool,
    },

    /// Print the emoji grid of the last finished game
    Share,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let length_filter = cli.length;
    let explicit_settings = cli.length.is_some() || cli.max_guesses.is_some();
    let command = cli.command.unwrap_or(Commands::Play);

    init_tracing(&config, matches!(command, Commands::Play))?;
    tracing::debug!(?config, "configuration loaded");

    let mut store = JsonFileStore::open(&config.data_dir)
        .with_context(|| format!("opening data directory {}", config.data_dir.display()))?;

    match command {
        Commands::Play => {
            let session = open_session(&config, store, explicit_settings)?;
            run_tui(App::new(session))
        }
        Commands::Simple => {
            let mut session = open_session(&config, store, explicit_settings)?;
            run_simple(&mut session)
        }
        Commands::Stats => {
            show_stats(&store, length_filter, config.max_guesses);
            Ok(())
        }
        Commands::Reset { stats } => {
            run_reset(&mut store, stats)?;
            println!(
                "Saved game deleted{}.",
                if stats { " along with statistics" } else { "" }
            );
            Ok(())
        }
        Commands::Share => {
            match share_last_game(&store) {
                Some(text) => println!("{text}"),
                None => println!("No finished game to share."),
            }
            Ok(())
        }
    }
}

/// Config file from `--config`, else `<data_dir>/config.toml`, then flags
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let path = cli.config.clone().unwrap_or_else(|| {
        cli.data_dir
            .clone()
            .unwrap_or_else(default_data_dir)
            .join(CONFIG_FILE)
    });

    let base = if cli.config.is_some() {
        AppConfig::load(&path)
    } else {
        AppConfig::load_or_default(&path)
    }
    .with_context(|| format!("loading config from {}", path.display()))?;

    let overrides = Overrides {
        word_length: cli.length,
        max_guesses: cli.max_guesses,
        data_dir: cli.data_dir.clone(),
        valid_words: cli.valid_words.clone(),
        answer_words: cli.answer_words.clone(),
    };
    base.with_overrides(overrides)
        .context("invalid command-line settings")
}

/// TUI mode logs to a file so the alternate screen stays clean
fn init_tracing(config: &AppConfig, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if tui {
        std::fs::create_dir_all(&config.data_dir)
            .with_context(|| format!("creating {}", config.data_dir.display()))?;
        let path = config.data_dir.join("wordle.log");
        let log_file = std::fs::File::create(&path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

/// Resumes any unfinished game unless `--length`/`--max-guesses` asked for
/// a different one
fn open_session(
    config: &AppConfig,
    store: JsonFileStore,
    explicit_settings: bool,
) -> Result<Session<WordLists, JsonFileStore>> {
    let words = WordLists::from_files(
        config.valid_words.as_deref(),
        config.answer_words.as_deref(),
    )
    .context("loading word lists")?;
    let recorder = StatsRecorder::new(config.dedupe_window());

    let (word_length, max_guesses) = (config.word_length, config.max_guesses);
    let session = if explicit_settings {
        Session::load_or_create_matching(words, store, recorder, word_length, max_guesses)
    } else {
        Session::load_or_create(words, store, recorder, word_length, max_guesses)
    };
    session.context("starting a game")
}
