use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, AiPlayer, Board, BoardPlacer, MatchController};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let placer = BoardPlacer::new();
    let b1: Board = placer.place(&mut rng1).map_err(|e| anyhow::anyhow!(e))?;
    let b2: Board = placer.place(&mut rng2).map_err(|e| anyhow::anyhow!(e))?;

    let p1 = AiPlayer::named("player1", rng1);
    let p2 = AiPlayer::named("player2", rng2);

    let mut game = MatchController::new(Box::new(p1), b1, Box::new(p2), b2);
    let report = game.run()?;

    let result = json!({
        "winner": report.winner_name,
        "turns": report.turns,
        "shots": report.shots,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
