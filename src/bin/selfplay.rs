//! Batch AI-vs-AI matches; prints summary statistics as JSON.

use clap::Parser;
use std::path::PathBuf;
use stonehenge::config::{GameConfig, DEFAULT_CONFIG_PATH};
use stonehenge::player::StrategyKind;
use stonehenge::selfplay::{run_selfplay, SelfPlayConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "selfplay", version, about = "Run Stonehenge self-play matches")]
struct Args {
    /// Path to the JSON config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Number of games
    #[arg(short = 'n', long)]
    games: Option<usize>,

    /// Board side length
    #[arg(short, long)]
    side: Option<usize>,

    #[arg(long, value_enum, default_value = "minimax")]
    player1: StrategyKind,

    #[arg(long, value_enum, default_value = "rough")]
    player2: StrategyKind,

    #[arg(long)]
    seed: Option<u64>,

    /// Write the stats JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = GameConfig::load_or_default(&args.config)?;
    if let Some(games) = args.games {
        config.selfplay.num_games = games;
    }
    if let Some(side) = args.side {
        config.side_length = side;
    }
    if args.seed.is_some() {
        config.selfplay.seed = args.seed;
    }
    config.validate()?;

    let stats = run_selfplay(&SelfPlayConfig {
        num_games: config.selfplay.num_games,
        side_length: config.side_length,
        player1: args.player1,
        player2: args.player2,
        seed: config.selfplay.seed,
    })?;

    let report = serde_json::json!({
        "timestamp": chrono::Local::now().to_rfc3339(),
        "stats": stats,
    });
    let text = serde_json::to_string_pretty(&report)?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, text)?;
            tracing::info!(path = %path.display(), "stats written");
        }
        None => println!("{text}"),
    }
    Ok(())
}
