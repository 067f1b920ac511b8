use clap::{Parser, Subcommand};
use flotilla::{init_logging, Board};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random fleet layout and print it.
    Layout {
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Generate several layouts in a row, as a reorder button would.
    Reorder {
        #[arg(long, help = "Fix RNG seed for reproducible layouts")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 3)]
        count: usize,
    },
}

fn rng_from_seed(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn print_layout(board: &mut Board) {
    for (i, ship) in board.ships().iter().enumerate() {
        let (x, y) = ship.anchor();
        println!(
            "  ship {}: length {} {:?} at ({}, {})",
            i,
            ship.length(),
            ship.orientation(),
            x,
            y
        );
    }
    println!("{}", board.snapshot());
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout { seed } => {
            let mut rng = rng_from_seed(seed);
            let mut board = Board::new();
            board.init_roster(&mut rng)?;
            println!("Fleet layout:");
            print_layout(&mut board);
        }
        Commands::Reorder { seed, count } => {
            let mut rng = rng_from_seed(seed);
            let mut board = Board::new();
            for round in 1..=count {
                board.init_roster(&mut rng)?;
                println!("Layout {}:", round);
                print_layout(&mut board);
            }
        }
    }
    Ok(())
}
