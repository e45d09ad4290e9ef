pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported by puzzle construction and the solver.
///
/// An unsolvable puzzle is *not* an error: [`SolverEngine::solve`] reports it
/// as `Ok((None, stats))` so callers can distinguish "no solution exists"
/// from a malformed request.
///
/// [`SolverEngine::solve`]: crate::solver::engine::SolverEngine::solve
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("a puzzle needs at least one tile")]
    EmptyPuzzle,

    #[error("puzzle must be square: {rows} rows but row {row} holds {len} tiles")]
    RaggedRows { rows: usize, row: usize, len: usize },

    #[error("a {n}x{n} puzzle needs {expected} tiles, got {actual}")]
    WrongTileCount {
        n: usize,
        expected: usize,
        actual: usize,
    },

    #[error("solve was cancelled")]
    Cancelled,
}
