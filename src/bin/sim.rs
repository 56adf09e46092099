use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{AutoPlayer, GameSession, GameSummary, Winner};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let mut summaries: Vec<GameSummary> = Vec::new();
    for i in 0..games {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i));
        let mut session = GameSession::new(AutoPlayer::new());
        summaries.push(session.run(&mut rng)?);
    }

    let wins = |w: Winner| summaries.iter().filter(|s| s.winner == Some(w)).count();
    let result = json!({
        "seed": seed,
        "games": summaries,
        "player_wins": wins(Winner::Player),
        "bot_wins": wins(Winner::Bot),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
