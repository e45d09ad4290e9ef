//! Per-position candidate sets, the mutable state of a solve.

use im::{OrdSet, Vector};

use crate::solver::puzzle::{Position, TileId};

/// Maps every board position to the set of tiles still allowed there.
///
/// Backed by persistent collections, so cloning a store gives a search
/// branch an independent snapshot in O(log n); sibling branches never
/// observe each other's mutations. Candidate sets are ordered, which is what
/// makes the search's ascending value order deterministic.
#[derive(Debug, Clone)]
pub struct DomainStore {
    n: usize,
    cells: Vector<OrdSet<TileId>>,
}

impl DomainStore {
    /// The initial store for an n×n board: every position admits every tile.
    pub fn full(n: usize) -> Self {
        let all: OrdSet<TileId> = (0..(n * n) as TileId).collect();
        let cells = (0..n * n).map(|_| all.clone()).collect();
        Self { n, cells }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn candidates(&self, pos: Position) -> &OrdSet<TileId> {
        &self.cells[pos.index(self.n)]
    }

    pub(crate) fn set_candidates(&mut self, pos: Position, candidates: OrdSet<TileId>) {
        self.cells.set(pos.index(self.n), candidates);
    }

    /// A copy of this store with `pos` forced to exactly `tile`.
    ///
    /// The caller is expected to run propagation seeded at `pos` afterwards.
    pub fn fix(&self, pos: Position, tile: TileId) -> DomainStore {
        debug_assert!(
            self.candidates(pos).contains(&tile),
            "fixed a tile that is not a candidate at {pos:?}"
        );
        Self {
            n: self.n,
            cells: self.cells.update(pos.index(self.n), OrdSet::unit(tile)),
        }
    }

    /// All board positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let n = self.n;
        (0..n).flat_map(move |row| (0..n).map(move |col| Position::new(row, col)))
    }

    /// True when every position has exactly one candidate left.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|candidates| candidates.len() == 1)
    }

    /// Picks the position to branch on next: the undetermined position with
    /// the fewest remaining candidates (fail-first), ties broken by row-major
    /// scan order so repeated solves are reproducible.
    pub fn select_branch_position(&self) -> Option<Position> {
        let mut best: Option<(usize, Position)> = None;
        for pos in self.positions() {
            let len = self.candidates(pos).len();
            if len > 1 && best.map_or(true, |(smallest, _)| len < smallest) {
                best = Some((len, pos));
                if len == 2 {
                    // No branchable position can have fewer candidates.
                    break;
                }
            }
        }
        best.map(|(_, pos)| pos)
    }
}
