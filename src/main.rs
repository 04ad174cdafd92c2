use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use memory_match::config::AppConfig;
use memory_match::scores::FileScoreStore;
use memory_match::ui::App;

/// Two-player memory game on the console.
#[derive(Parser)]
#[command(name = "memory_match", about = "Two-player memory card game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "memory.toml")]
    config: PathBuf,

    /// Override number of grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of grid columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override the score file location
    #[arg(long)]
    scores: Option<PathBuf>,

    /// Seed the deck shuffle for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Let players pick already-matched cells (the turn is wasted)
    #[arg(long)]
    allow_cleared_picks: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config_found = cli.config.exists();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.deck.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.deck.cols = cols;
    }
    if let Some(path) = cli.scores {
        config.scores.path = path;
    }
    if cli.allow_cleared_picks {
        config.rules.allow_cleared_picks = true;
    }
    if cli.no_color || !io::stdout().is_terminal() {
        config.console.color = false;
    }
    config.validate().context("invalid configuration")?;

    memory_match::logging::init(&config.logging, cli.verbose);
    if !config_found {
        debug!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!(
        rows = config.deck.rows,
        cols = config.deck.cols,
        scores = %config.scores.path.display(),
        "starting session"
    );

    let store = FileScoreStore::new(&config.scores.path);
    let stdin = io::stdin();
    let mut app = App::new(&config, stdin.lock(), io::stdout(), store, rng);
    app.run().context("game session failed")?;
    Ok(())
}
