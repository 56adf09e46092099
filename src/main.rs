use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{init_logging, AutoPlayer, CliPlayer, GameConfig, GameSession, Winner};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the bot from the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, env = "SEABATTLE_DATA_DIR", default_value = "data")]
        data_dir: PathBuf,
    },
    /// Let a random mover play the bot and print the summary.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, env = "SEABATTLE_DATA_DIR", default_value = "data")]
        data_dir: PathBuf,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, data_dir } => {
            println!("Welcome to Battleship! May the odds be ever in your favor.");
            let mut rng = make_rng(seed);
            let mut session =
                GameSession::new(CliPlayer::stdio()).with_persistence(GameConfig::new(data_dir));
            session.run(&mut rng)?;
            println!("Game over!");
        }
        Commands::Auto { seed, data_dir } => {
            let mut rng = make_rng(seed);
            let mut session =
                GameSession::new(AutoPlayer::new()).with_persistence(GameConfig::new(data_dir));
            let summary = session.run(&mut rng)?;
            let winner = match summary.winner {
                Some(Winner::Player) => "random mover",
                Some(Winner::Bot) => "bot",
                None => "nobody",
            };
            println!(
                "{} won after {} turns ({} player shots, {} bot shots)",
                winner, summary.turns, summary.player_shots, summary.bot_shots
            );
        }
    }
    Ok(())
}
