use clap::Parser;
use std::path::PathBuf;
use stonehenge::config::{GameConfig, DEFAULT_CONFIG_PATH};
use stonehenge::core::PlayerId;
use stonehenge::display::{print_board, DisplayState};
use stonehenge::game::{Game, INSTRUCTIONS};
use stonehenge::logic::new_state;
use stonehenge::player::StrategyKind;
use tracing_subscriber::EnvFilter;

/// Play Stonehenge in the terminal
#[derive(Parser, Debug)]
#[command(name = "stonehenge", version, about, long_about = None)]
struct Cli {
    /// Path to the JSON config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Board side length (overrides the config file)
    #[arg(short, long)]
    side: Option<usize>,

    /// Strategy for player 1
    #[arg(long, value_enum)]
    player1: Option<StrategyKind>,

    /// Strategy for player 2
    #[arg(long, value_enum)]
    player2: Option<StrategyKind>,

    /// Which player moves first (1 or 2)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    first: Option<u8>,

    /// Seed for random strategies
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(side) = cli.side {
        config.side_length = side;
    }
    if let Some(p1) = cli.player1 {
        config.player1 = p1;
    }
    if let Some(p2) = cli.player2 {
        config.player2 = p2;
    }
    if let Some(first) = cli.first {
        config.first_player = if first == 1 {
            PlayerId::Player1
        } else {
            PlayerId::Player2
        };
    }
    config.validate()?;
    tracing::debug!(?config, "effective configuration");

    println!("=== Stonehenge ===");
    println!("{INSTRUCTIONS}");
    println!();

    let p1 = config
        .player1
        .build(&format!("Player 1 ({})", config.player1), cli.seed);
    let p2 = config
        .player2
        .build(&format!("Player 2 ({})", config.player2), cli.seed);

    let mut game = Game::new(new_state(config.side_length, config.first_player)?);
    let result = game.play(p1.as_ref(), p2.as_ref(), |player, mv, _| {
        println!("{player} claims {mv}");
    });

    let mut display = DisplayState::new();
    display.status_msg = Some(match result.winner {
        Some(winner) if result.resigned => format!("{} resigned. {winner} wins!", winner.opponent()),
        Some(winner) => format!("{winner} wins after {} moves!", result.moves),
        None => "The game ended without a winner.".to_string(),
    });
    print_board(&game.state, &display);
    Ok(())
}
