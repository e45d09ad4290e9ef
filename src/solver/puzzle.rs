//! The fixed data model of an edge-matching puzzle: tiles, their edge
//! colours, and the grid positions they can be placed on.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The base trait for any type usable as an edge colour.
///
/// Colours are opaque labels: the solver only ever compares them for
/// equality, so small integers, strings, or enums all qualify. This is a
/// marker trait; any type satisfying the bounds implements `EdgeLabel`.
pub trait EdgeLabel: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> EdgeLabel for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}

/// Identifies a tile in the tray. Tile `k` sits at tray row `k / n`,
/// column `k % n`; callers rely on this numbering to map a solved grid back
/// to source tiles.
pub type TileId = u32;

/// One of the four edges of a tile, or equivalently the direction from a
/// position towards one of its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// The edge a neighbouring tile presents back across this direction:
    /// top pairs with bottom, left pairs with right.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::Right => 1,
            Direction::Bottom => 2,
            Direction::Left => 3,
        }
    }
}

/// A single tile: four edge colours in top/right/bottom/left order.
///
/// Tiles are immutable once constructed; the solver never rotates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile<C> {
    edges: [C; 4],
}

impl<C: EdgeLabel> Tile<C> {
    pub fn new(top: C, right: C, bottom: C, left: C) -> Self {
        Self {
            edges: [top, right, bottom, left],
        }
    }

    /// The colour of the edge facing `direction`.
    pub fn edge(&self, direction: Direction) -> &C {
        &self.edges[direction.index()]
    }
}

impl<C: EdgeLabel> From<[C; 4]> for Tile<C> {
    fn from(edges: [C; 4]) -> Self {
        Self { edges }
    }
}

/// A cell of the board, in `[0, n) x [0, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub(crate) fn index(self, n: usize) -> usize {
        self.row * n + self.col
    }

    /// The in-grid neighbours of this position, up to four, each tagged with
    /// the direction pointing from `self` towards the neighbour.
    pub fn neighbours(self, n: usize) -> Vec<(Direction, Position)> {
        let mut out = Vec::with_capacity(4);
        if self.row > 0 {
            out.push((Direction::Top, Position::new(self.row - 1, self.col)));
        }
        if self.col + 1 < n {
            out.push((Direction::Right, Position::new(self.row, self.col + 1)));
        }
        if self.row + 1 < n {
            out.push((Direction::Bottom, Position::new(self.row + 1, self.col)));
        }
        if self.col > 0 {
            out.push((Direction::Left, Position::new(self.row, self.col - 1)));
        }
        out
    }
}

/// A validated puzzle instance: the n×n multiset of tiles to be arranged.
///
/// Construction is the only place malformed input is caught; once a `Puzzle`
/// exists, the solver can assume a square grid with exactly `n²` tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle<C> {
    n: usize,
    tiles: Vec<Tile<C>>,
}

impl<C: EdgeLabel> Puzzle<C> {
    /// Builds a puzzle from the tray laid out as rows of tiles.
    ///
    /// Tile ids are assigned in row-major order, so the tile at tray cell
    /// `(r, c)` gets id `r * n + c`.
    pub fn from_rows(rows: Vec<Vec<Tile<C>>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(Error::EmptyPuzzle);
        }
        for (row, tiles) in rows.iter().enumerate() {
            if tiles.len() != n {
                return Err(Error::RaggedRows {
                    rows: n,
                    row,
                    len: tiles.len(),
                });
            }
        }
        Ok(Self {
            n,
            tiles: rows.into_iter().flatten().collect(),
        })
    }

    /// Builds a puzzle from a flat, row-major list of `n²` tiles.
    pub fn from_tiles(n: usize, tiles: Vec<Tile<C>>) -> Result<Self> {
        if n == 0 {
            return Err(Error::EmptyPuzzle);
        }
        if tiles.len() != n * n {
            return Err(Error::WrongTileCount {
                n,
                expected: n * n,
                actual: tiles.len(),
            });
        }
        Ok(Self { n, tiles })
    }

    /// The side length of the board.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn tile(&self, id: TileId) -> &Tile<C> {
        &self.tiles[id as usize]
    }

    /// Decodes a tile id back to its tray cell, `(k / n, k % n)`.
    pub fn source_position(&self, id: TileId) -> Position {
        Position::new(id as usize / self.n, id as usize % self.n)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;

    fn uniform_tile(c: u8) -> Tile<u8> {
        Tile::new(c, c, c, c)
    }

    #[test]
    fn direction_pairing_is_symmetric() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
        }
        assert_eq!(Direction::Top.opposite(), Direction::Bottom);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    #[test]
    fn tile_edges_are_indexed_in_trbl_order() {
        let tile = Tile::new('t', 'r', 'b', 'l');
        assert_eq!(*tile.edge(Direction::Top), 't');
        assert_eq!(*tile.edge(Direction::Right), 'r');
        assert_eq!(*tile.edge(Direction::Bottom), 'b');
        assert_eq!(*tile.edge(Direction::Left), 'l');
    }

    #[test]
    fn corner_and_centre_neighbours() {
        let corner = Position::new(0, 0).neighbours(3);
        assert_eq!(
            corner,
            vec![
                (Direction::Right, Position::new(0, 1)),
                (Direction::Bottom, Position::new(1, 0)),
            ]
        );

        let centre = Position::new(1, 1).neighbours(3);
        assert_eq!(centre.len(), 4);
    }

    #[test]
    fn single_cell_grid_has_no_neighbours() {
        assert!(Position::new(0, 0).neighbours(1).is_empty());
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![
            vec![uniform_tile(0), uniform_tile(1)],
            vec![uniform_tile(2)],
        ];
        assert!(matches!(
            Puzzle::from_rows(rows),
            Err(Error::RaggedRows { rows: 2, row: 1, len: 1 })
        ));
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        assert!(matches!(
            Puzzle::<u8>::from_rows(vec![]),
            Err(Error::EmptyPuzzle)
        ));
    }

    #[test]
    fn from_tiles_rejects_wrong_count() {
        let tiles = (0..3).map(uniform_tile).collect();
        assert!(matches!(
            Puzzle::from_tiles(2, tiles),
            Err(Error::WrongTileCount {
                n: 2,
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn tile_ids_decode_to_tray_cells() {
        let tiles = (0..9).map(uniform_tile).collect();
        let puzzle = Puzzle::from_tiles(3, tiles).unwrap();
        assert_eq!(puzzle.source_position(0), Position::new(0, 0));
        assert_eq!(puzzle.source_position(5), Position::new(1, 2));
        assert_eq!(puzzle.source_position(8), Position::new(2, 2));
    }
}
