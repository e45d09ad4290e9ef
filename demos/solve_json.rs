//! Solves a puzzle supplied as JSON on stdin, standing in for the perception
//! layer that would normally produce the colour matrix.
//!
//! Input: an n×n matrix where each entry is a tile's four edge colours in
//! top/right/bottom/left order, e.g. `[[[0,1,2,3],[4,5,6,1]], ...]`.
//! Output: the n×n matrix of tile ids as JSON, or `null` when the puzzle is
//! unsolvable. Tile id `k` refers to input cell `(k / n, k % n)`.

use std::io::Read;

use clap::Parser;
use tessera::solver::{
    engine::SolverEngine,
    puzzle::{Puzzle, Tile},
    stats::render_stats_table,
};

#[derive(Parser)]
#[command(about = "Solve an edge-matching puzzle described as JSON on stdin")]
struct Args {
    /// Print search statistics to stderr.
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let matrix: Vec<Vec<[u32; 4]>> = serde_json::from_str(&input)?;
    let rows = matrix
        .into_iter()
        .map(|row| row.into_iter().map(Tile::from).collect())
        .collect();
    let puzzle = Puzzle::from_rows(rows)?;

    let (solution, stats) = SolverEngine::new().solve(&puzzle)?;
    if args.stats {
        eprintln!("{}", render_stats_table(&stats));
    }
    println!("{}", serde_json::to_string(&solution.map(|s| s.rows()))?);

    Ok(())
}
