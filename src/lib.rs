//! Tessera is a constraint-propagation solver for Tetravex-style
//! edge-matching tile puzzles.
//!
//! An n×n board must be filled with n² distinct tiles, each carrying four
//! coloured edges (top/right/bottom/left); adjacent tiles must agree on the
//! colour of their touching edges. The solver interleaves arc-consistency
//! propagation with backtracking search and returns either the assignment of
//! tiles to positions or a proof that none exists.
//!
//! # Core Concepts
//!
//! - **[`Puzzle`]**: the validated input — the tray of tiles, each described
//!   by four edge colours. Colours are opaque labels; anything satisfying
//!   [`EdgeLabel`] works.
//! - **[`DomainStore`]**: the per-position sets of tiles still considered
//!   possible, the state that propagation and search operate on.
//! - **[`SolverEngine`]**: runs the search and produces a [`Solution`], the
//!   grid of tile ids. Tile id `k` refers to tray cell `(k / n, k % n)`.
//!
//! # Example: a 2×2 puzzle
//!
//! ```
//! use tessera::solver::engine::SolverEngine;
//! use tessera::solver::puzzle::{Puzzle, Tile};
//!
//! // Tiles listed in tray order; edge colours are top, right, bottom, left.
//! let puzzle = Puzzle::from_rows(vec![
//!     vec![Tile::new(0u8, 1, 2, 3), Tile::new(4, 5, 6, 1)],
//!     vec![Tile::new(2, 7, 8, 9), Tile::new(6, 10, 11, 7)],
//! ])
//! .unwrap();
//!
//! let (solution, _stats) = SolverEngine::new().solve(&puzzle).unwrap();
//! let solution = solution.expect("this puzzle is solvable");
//!
//! // These tiles happen to be laid out solved already, so the solver
//! // places each tile where it came from.
//! assert_eq!(solution.rows(), vec![vec![0, 1], vec![2, 3]]);
//! ```
//!
//! Unsolvable puzzles are an expected outcome, not an error: `solve` returns
//! `Ok((None, stats))` for them.
//!
//! [`Puzzle`]: solver::puzzle::Puzzle
//! [`EdgeLabel`]: solver::puzzle::EdgeLabel
//! [`DomainStore`]: solver::domain::DomainStore
//! [`SolverEngine`]: solver::engine::SolverEngine
//! [`Solution`]: solver::solution::Solution

pub mod error;
pub mod generator;
pub mod solver;
