use serde::{Deserialize, Serialize};

use crate::solver::{
    domain::DomainStore,
    puzzle::{EdgeLabel, Position, Puzzle, TileId},
};

/// A completed assignment: which tile occupies each board position.
///
/// Produced only by the engine once every domain is a singleton, so the tile
/// ids are pairwise distinct and every adjacency constraint holds by
/// construction. Tile id `k` decodes to tray cell `(k / n, k % n)`, which is
/// what a caller driving drag gestures needs to locate the source tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    n: usize,
    grid: Vec<TileId>,
}

impl Solution {
    pub(crate) fn from_store(store: &DomainStore) -> Self {
        debug_assert!(store.is_complete(), "solution taken from incomplete store");
        let grid = store
            .positions()
            .map(|pos| *store.candidates(pos).get_min().unwrap())
            .collect();
        Self { n: store.n(), grid }
    }

    /// The side length of the board.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The tile placed at `pos`.
    pub fn tile_at(&self, pos: Position) -> TileId {
        self.grid[pos.index(self.n)]
    }

    /// The grid as rows of tile ids.
    pub fn rows(&self) -> Vec<Vec<TileId>> {
        self.grid.chunks(self.n).map(|row| row.to_vec()).collect()
    }

    /// Decodes a tile id back to its tray cell, `(k / n, k % n)`.
    pub fn source_position(&self, id: TileId) -> Position {
        Position::new(id as usize / self.n, id as usize % self.n)
    }

    /// Every placement as `(board position, tile id)`, row-major.
    pub fn placements(&self) -> impl Iterator<Item = (Position, TileId)> + '_ {
        let n = self.n;
        self.grid.iter().enumerate().map(move |(i, &id)| (Position::new(i / n, i % n), id))
    }

    /// Checks this assignment against `puzzle`: every tile used exactly
    /// once, and every pair of touching edges carrying equal colours.
    ///
    /// The engine only ever returns assignments for which this holds; the
    /// check exists so callers (and tests) can verify independently.
    pub fn satisfies<C: EdgeLabel>(&self, puzzle: &Puzzle<C>) -> bool {
        if puzzle.n() != self.n || puzzle.tile_count() != self.grid.len() {
            return false;
        }
        let mut seen = vec![false; self.grid.len()];
        for &id in &self.grid {
            let Some(slot) = seen.get_mut(id as usize) else {
                return false;
            };
            if std::mem::replace(slot, true) {
                return false;
            }
        }
        for (pos, id) in self.placements() {
            let tile = puzzle.tile(id);
            for (direction, neighbour) in pos.neighbours(self.n) {
                let other = puzzle.tile(self.tile_at(neighbour));
                if tile.edge(direction) != other.edge(direction.opposite()) {
                    return false;
                }
            }
        }
        true
    }
}
