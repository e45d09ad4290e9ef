//! Generates a random solvable puzzle, solves it, and prints the resulting
//! grid of tile ids together with search statistics.
//!
//! ```text
//! cargo run --example solve_random -- --size 5 --colours 4 --seed 7
//! ```

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tessera::{
    generator::random_puzzle,
    solver::{engine::SolverEngine, stats::render_stats_table},
};

#[derive(Parser)]
#[command(about = "Generate and solve a random edge-matching puzzle")]
struct Args {
    /// Side length of the board.
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// Number of distinct edge colours; fewer colours means a harder,
    /// more ambiguous puzzle.
    #[arg(long, default_value_t = 6)]
    colours: u32,

    /// RNG seed, so runs are reproducible.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let puzzle = random_puzzle(args.size, args.colours, &mut rng)?;

    let (solution, stats) = SolverEngine::new().solve(&puzzle)?;
    match solution {
        Some(solution) => {
            for row in solution.rows() {
                let cells: Vec<String> = row.iter().map(|id| format!("{id:>3}")).collect();
                println!("{}", cells.join(" "));
            }
        }
        None => println!("no solution"),
    }
    println!("{}", render_stats_table(&stats));

    Ok(())
}
