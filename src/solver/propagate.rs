//! Arc-consistency propagation over the domain store.

use im::OrdSet;
use tracing::debug;

use crate::solver::{
    domain::DomainStore,
    puzzle::{EdgeLabel, Position, Puzzle, TileId},
    stats::SearchStats,
    work_list::WorkList,
};

/// Propagates the consequences of `seed` having collapsed to a single tile,
/// running to fixpoint.
///
/// Two rules fire for every singleton position holding tile `T`:
///
/// 1. **Uniqueness** — `T` is removed from every other position's
///    candidates.
/// 2. **Adjacency** — each neighbour keeps only candidates whose facing edge
///    colour equals `T`'s edge colour towards that neighbour.
///
/// A position whose domain shrinks *to* a singleton is queued for its own
/// round of propagation; a position that was already singleton is not
/// re-queued. Returns the updated store, or `None` when some domain was
/// emptied — a contradiction, handled by the caller as a backtrack signal,
/// never surfaced as an error.
pub(crate) fn propagate<C: EdgeLabel>(
    puzzle: &Puzzle<C>,
    mut store: DomainStore,
    seed: Position,
    stats: &mut SearchStats,
) -> Option<DomainStore> {
    let mut worklist = WorkList::new();
    worklist.push_back(seed);

    while let Some(pos) = worklist.pop_front() {
        let candidates = store.candidates(pos);
        debug_assert!(
            candidates.len() == 1,
            "propagated a non-singleton position {pos:?}"
        );
        let tile = *candidates.get_min()?;

        // Uniqueness: no other position may still hold `tile`.
        for other in store.positions() {
            if other == pos || !store.candidates(other).contains(&tile) {
                continue;
            }
            let shrunk = store.candidates(other).without(&tile);
            match shrunk.len() {
                0 => {
                    debug!(?other, tile, "domain emptied by uniqueness rule");
                    return None;
                }
                1 => worklist.push_back(other),
                _ => {}
            }
            stats.prunings += 1;
            store.set_candidates(other, shrunk);
        }

        // Adjacency: neighbours must match the fixed tile's facing colour.
        for (direction, neighbour) in pos.neighbours(store.n()) {
            let colour = puzzle.tile(tile).edge(direction);
            let facing = direction.opposite();
            let before = store.candidates(neighbour).len();
            let kept: OrdSet<TileId> = store
                .candidates(neighbour)
                .iter()
                .copied()
                .filter(|&candidate| puzzle.tile(candidate).edge(facing) == colour)
                .collect();
            if kept.is_empty() {
                debug!(?neighbour, tile, "domain emptied by adjacency rule");
                return None;
            }
            if kept.len() == 1 && before > 1 {
                worklist.push_back(neighbour);
            }
            stats.prunings += (before - kept.len()) as u64;
            store.set_candidates(neighbour, kept);
        }
    }

    Some(store)
}
