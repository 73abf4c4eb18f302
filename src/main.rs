use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use seabattle::{
    init_logging, AiPlayer, CliPlayer, MatchController, Side, BOARD_SIZE, FLEET,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer (default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play against itself.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => play(seed),
        Commands::Auto { seed } => auto(seed),
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn greet() {
    println!("-----------------------------------");
    println!("|      Welcome to Sea Battle!     |");
    println!("-----------------------------------");
    println!("|  Board: {0}x{0}, fleet: {1} ships    |", BOARD_SIZE, FLEET.len());
    println!("|  Enter a shot as: row col       |");
    println!("|  e.g. 3 4 (both from 1 to {})    |", BOARD_SIZE);
    println!("|  Hit or sink to fire again.     |");
    println!("-----------------------------------");
}

fn play(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let computer = AiPlayer::new(SmallRng::seed_from_u64(rng.random()));
    let mut game = MatchController::with_random_boards(
        Box::new(CliPlayer::stdio()),
        Box::new(computer),
        &mut rng,
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    game.board_mut(Side::Second).set_hidden(true);

    greet();
    let report = game.run()?;
    log::info!("match report: {:?}", report);
    Ok(())
}

fn auto(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let first = AiPlayer::named("Computer 1", SmallRng::seed_from_u64(rng.random()));
    let second = AiPlayer::named("Computer 2", SmallRng::seed_from_u64(rng.random()));
    let mut game = MatchController::with_random_boards(Box::new(first), Box::new(second), &mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;
    let report = game.run()?;

    for side in [Side::First, Side::Second] {
        println!("\nBoard of {:?}:\n{}", side, game.board(side));
    }
    println!(
        "\n{} wins after {} shots ({} vs {}).",
        report.winner_name, report.turns, report.shots[0], report.shots[1]
    );
    Ok(())
}
