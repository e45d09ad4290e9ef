//! Random generation of solvable puzzle instances.
//!
//! Useful for demos, benchmarks, and property tests: there is no external
//! corpus of edge-matching instances to test against, so we build our own
//! from a known-solved board.

use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{Error, Result},
    solver::puzzle::{Puzzle, Tile},
};

/// The label type produced by the generator. Callers with richer labels
/// (pixel clusters, strings) construct [`Puzzle`] directly.
pub type Colour = u32;

/// Generates a random n×n puzzle that is guaranteed to have at least one
/// solution.
///
/// Works backwards from a solved board: every interior and boundary edge
/// slot gets a colour drawn from `palette` distinct colours, the board is
/// cut into tiles along those slots, and the tray order is shuffled. Smaller
/// palettes produce more accidental matches and therefore harder, more
/// ambiguous instances; uniqueness of the solution is *not* guaranteed.
///
/// A `palette` of zero is treated as one colour.
pub fn random_puzzle<R: Rng + ?Sized>(
    n: usize,
    palette: u32,
    rng: &mut R,
) -> Result<Puzzle<Colour>> {
    if n == 0 {
        return Err(Error::EmptyPuzzle);
    }
    let palette = palette.max(1);

    // horizontal[r][c] colours the edge above row r; vertical[r][c] colours
    // the edge left of column c.
    let horizontal: Vec<Vec<Colour>> = (0..=n)
        .map(|_| (0..n).map(|_| rng.gen_range(0..palette)).collect())
        .collect();
    let vertical: Vec<Vec<Colour>> = (0..n)
        .map(|_| (0..=n).map(|_| rng.gen_range(0..palette)).collect())
        .collect();

    let mut tiles = Vec::with_capacity(n * n);
    for r in 0..n {
        for c in 0..n {
            tiles.push(Tile::new(
                horizontal[r][c],
                vertical[r][c + 1],
                horizontal[r + 1][c],
                vertical[r][c],
            ));
        }
    }
    tiles.shuffle(rng);

    Puzzle::from_tiles(n, tiles)
}
