use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

pub mod tile;
pub mod tile_collection;
pub mod tile_data;

pub use tile::{Tile, TileState};
pub use tile_collection::TileCollection;

use crate::error::{GameError, Result};

pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 6;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// Every constructed grid gets its own tag, so ids from a discarded or
// unrelated grid are never mistaken for tiles of the current one.
static NEXT_GRID_TAG: AtomicU64 = AtomicU64::new(1);

/// Stable handle to a tile in a [`Grid`]. Two tiles with the same letter and
/// value are still different tiles, and a handle only resolves in the grid
/// that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TileId {
    grid: u64,
    index: usize,
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.grid, self.index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// True for the 8 surrounding cells. A cell is not its own neighbor.
    pub fn is_adjacent_to(&self, other: &Position) -> bool {
        let row_distance = self.row.abs_diff(other.row);
        let col_distance = self.col.abs_diff(other.col);
        row_distance.max(col_distance) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed-size arena of tiles, stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    tag: u64,
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Deals `rows * cols` tiles from the front of `pool`, filling the grid
    /// row by row. Nothing is taken from the pool when it is too small.
    pub fn construct(rows: usize, cols: usize, pool: &mut TileCollection) -> Result<Self> {
        let cell_count = rows * cols;
        if pool.size() < cell_count {
            return Err(GameError::EmptyPool);
        }

        let tiles = (0..cell_count)
            .map(|_| pool.remove_one())
            .collect::<Result<Vec<Tile>>>()?;

        Ok(Self {
            tag: NEXT_GRID_TAG.fetch_add(1, Ordering::Relaxed),
            rows,
            cols,
            tiles,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    fn id_for(&self, index: usize) -> TileId {
        TileId {
            grid: self.tag,
            index,
        }
    }

    /// True only for ids this grid handed out.
    pub fn contains(&self, id: TileId) -> bool {
        id.grid == self.tag && id.index < self.tiles.len()
    }

    fn index_of(&self, id: TileId) -> Result<usize> {
        if self.contains(id) {
            Ok(id.index)
        } else {
            Err(GameError::TileNotFound(id))
        }
    }

    pub fn position_of(&self, id: TileId) -> Result<Position> {
        let index = self.index_of(id)?;
        Ok(Position {
            row: index / self.cols,
            col: index % self.cols,
        })
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Option<TileId> {
        if row < self.rows && col < self.cols {
            Some(self.id_for(row * self.cols + col))
        } else {
            None
        }
    }

    pub fn tile(&self, id: TileId) -> Result<&Tile> {
        let index = self.index_of(id)?;
        Ok(&self.tiles[index])
    }

    pub fn tile_mut(&mut self, id: TileId) -> Result<&mut Tile> {
        let index = self.index_of(id)?;
        Ok(&mut self.tiles[index])
    }

    pub fn ids(&self) -> impl Iterator<Item = TileId> {
        let tag = self.tag;
        (0..self.tiles.len()).map(move |index| TileId { grid: tag, index })
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileId, &Tile)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.id_for(index), tile))
    }

    pub fn is_adjacent(&self, a: TileId, b: TileId) -> Result<bool> {
        Ok(self.position_of(a)?.is_adjacent_to(&self.position_of(b)?))
    }

    pub fn neighbors(&self, id: TileId) -> Result<Vec<TileId>> {
        let position = self.position_of(id)?;
        let neighbors = NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(row_offset, col_offset)| {
                // Offsets that leave the grid fall out here
                let row = position.row.checked_add_signed(row_offset)?;
                let col = position.col.checked_add_signed(col_offset)?;
                self.tile_at(row, col)
            })
            .collect();
        Ok(neighbors)
    }
}

/// Grids compare by layout and letters, not by which deal produced them.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.tiles == other.tiles
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.cols.max(1)) {
            for tile in row {
                write!(f, " {} ", tile.letter().to_ascii_uppercase())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
