use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tracing::debug;

use crate::{
    error::{Error, Result},
    solver::{
        domain::DomainStore,
        propagate::propagate,
        puzzle::{EdgeLabel, Puzzle, TileId},
        solution::Solution,
        stats::SearchStats,
    },
};

/// The main engine for solving edge-matching puzzles.
///
/// Interleaves work-list constraint propagation with depth-first
/// backtracking search. Each branch operates on its own snapshot of the
/// domain store, so abandoning a branch needs no undo bookkeeping.
///
/// The search is fully deterministic: the branch position is the one with
/// the fewest remaining candidates (row-major tie-break) and candidates are
/// tried in ascending id order, so repeated solves of the same puzzle return
/// the same assignment.
pub struct SolverEngine {
    cancel: Option<Arc<AtomicBool>>,
}

impl SolverEngine {
    pub fn new() -> Self {
        Self { cancel: None }
    }

    /// An engine that polls `cancel` between branch attempts and aborts the
    /// solve with [`Error::Cancelled`] once it is set. This is the hook for
    /// callers that need an external deadline around a solve.
    pub fn with_cancel_flag(cancel: Arc<AtomicBool>) -> Self {
        Self {
            cancel: Some(cancel),
        }
    }

    /// Attempts to solve the given puzzle.
    ///
    /// # Returns
    ///
    /// * `Ok((Some(solution), stats))` if a complete assignment was found.
    /// * `Ok((None, stats))` if the puzzle is proven unsolvable.
    /// * `Err(error)` only for cancellation; unsolvability is an expected
    ///   outcome, not a fault.
    pub fn solve<C: EdgeLabel>(
        &self,
        puzzle: &Puzzle<C>,
    ) -> Result<(Option<Solution>, SearchStats)> {
        let mut stats = SearchStats::default();
        let store = DomainStore::full(puzzle.n());
        let found = self.search(puzzle, store, &mut stats)?;
        debug!(
            nodes = stats.nodes_visited,
            backtracks = stats.backtracks,
            solved = found.is_some(),
            "search finished"
        );
        Ok((found.map(|store| Solution::from_store(&store)), stats))
    }

    fn search<C: EdgeLabel>(
        &self,
        puzzle: &Puzzle<C>,
        store: DomainStore,
        stats: &mut SearchStats,
    ) -> Result<Option<DomainStore>> {
        stats.nodes_visited += 1;

        if store.is_complete() {
            return Ok(Some(store));
        }

        let Some(pos) = store.select_branch_position() else {
            // Unreachable when `is_complete` is false, but handled anyway.
            return Ok(Some(store));
        };

        let candidates: Vec<TileId> = store.candidates(pos).iter().copied().collect();
        for tile in candidates {
            self.check_cancelled()?;
            debug!(?pos, tile, "branching");

            let guess = store.fix(pos, tile);
            if let Some(propagated) = propagate(puzzle, guess, pos, stats) {
                if let Some(found) = self.search(puzzle, propagated, stats)? {
                    return Ok(Some(found));
                }
            }
            stats.backtracks += 1;
        }

        // Every candidate at this position leads to a contradiction.
        Ok(None)
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::puzzle::Tile;

    /// The 2×2 tray whose only valid arrangement is the identity layout:
    /// tile 0 top-left, 1 top-right, 2 bottom-left, 3 bottom-right.
    fn unique_2x2() -> Puzzle<u8> {
        Puzzle::from_tiles(
            2,
            vec![
                Tile::new(0, 1, 2, 3),
                Tile::new(4, 5, 6, 1),
                Tile::new(2, 7, 8, 9),
                Tile::new(6, 10, 11, 7),
            ],
        )
        .unwrap()
    }

    #[test]
    fn single_tile_puzzle_solves_immediately() {
        let puzzle = Puzzle::from_tiles(1, vec![Tile::new('a', 'b', 'c', 'd')]).unwrap();
        let (solution, stats) = SolverEngine::new().solve(&puzzle).unwrap();

        let solution = solution.unwrap();
        assert_eq!(solution.rows(), vec![vec![0]]);
        assert_eq!(stats.nodes_visited, 1);
        assert_eq!(stats.backtracks, 0);
    }

    #[test]
    fn uniquely_constrained_2x2_returns_the_expected_grid() {
        let _ = tracing_subscriber::fmt::try_init();

        let puzzle = unique_2x2();
        let (solution, _stats) = SolverEngine::new().solve(&puzzle).unwrap();

        let solution = solution.unwrap();
        assert_eq!(solution.rows(), vec![vec![0, 1], vec![2, 3]]);
        assert!(solution.satisfies(&puzzle));
    }

    #[test]
    fn unmatchable_tiles_are_reported_unsatisfiable() {
        // Sixteen pairwise-distinct colours: no two edges can ever match.
        let tiles = (0..4)
            .map(|k| Tile::new(4 * k, 4 * k + 1, 4 * k + 2, 4 * k + 3))
            .collect();
        let puzzle = Puzzle::from_tiles(2, tiles).unwrap();

        let (solution, stats) = SolverEngine::new().solve(&puzzle).unwrap();
        assert!(solution.is_none());
        assert!(stats.backtracks > 0);
    }

    #[test]
    fn ambiguous_puzzles_resolve_deterministically() {
        // Uniform tiles: every arrangement is valid, so the result is pinned
        // entirely by the branch ordering.
        let tiles = (0..9).map(|_| Tile::new(0u8, 0, 0, 0)).collect();
        let puzzle = Puzzle::from_tiles(3, tiles).unwrap();
        let engine = SolverEngine::new();

        let (first, _) = engine.solve(&puzzle).unwrap();
        let (second, _) = engine.solve(&puzzle).unwrap();

        let first = first.unwrap();
        assert_eq!(first, second.unwrap());
        // Ascending candidate order at each step yields the identity grid.
        assert_eq!(first.rows(), vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]);
    }

    #[test]
    fn a_raised_cancel_flag_aborts_the_solve() {
        let flag = Arc::new(AtomicBool::new(true));
        let engine = SolverEngine::with_cancel_flag(flag);

        let result = engine.solve(&unique_2x2());
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[test]
    fn solutions_survive_a_json_round_trip() {
        let puzzle = unique_2x2();
        let (solution, _) = SolverEngine::new().solve(&puzzle).unwrap();
        let solution = solution.unwrap();

        let encoded = serde_json::to_string(&solution).unwrap();
        let decoded: Solution = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, solution);
    }
}
