use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use memory_match::config::AppConfig;
use memory_match::scores::{FileScoreStore, Leaderboard};

/// Show or reset the memory game leaderboard.
#[derive(Parser)]
#[command(name = "scores", about = "Show the memory game leaderboard")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "memory.toml")]
    config: PathBuf,

    /// Override the score file location
    #[arg(long)]
    scores: Option<PathBuf>,

    /// Print the scores as a JSON array
    #[arg(long, conflicts_with = "clear")]
    json: bool,

    /// Remove every stored score
    #[arg(long)]
    clear: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(path) = cli.scores {
        config.scores.path = path;
    }
    memory_match::logging::init(&config.logging, cli.verbose);

    let path = config.scores.path.clone();
    let mut leaderboard = Leaderboard::new(FileScoreStore::new(&path), config.scores.capacity);

    if cli.clear {
        leaderboard
            .clear()
            .with_context(|| format!("clearing {}", path.display()))?;
        println!("Cleared {}", path.display());
        return Ok(());
    }

    let scores = leaderboard
        .top()
        .with_context(|| format!("reading {}", path.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string(&scores)?);
    } else if scores.is_empty() {
        println!("No scores recorded yet.");
    } else {
        println!("High scores ({}):", path.display());
        for (rank, score) in scores.iter().enumerate() {
            println!("{:>3}. {}", rank + 1, score);
        }
    }
    Ok(())
}
