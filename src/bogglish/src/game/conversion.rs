use serde::Serialize;

use super::grid::TileState;
use super::session::{GameSession, ScoredWord};

/// Everything a renderer needs to draw the current game.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub rows: Vec<SnapshotRow>,
    pub current_word: String,
    pub score: u32,
    pub history: Vec<ScoredWord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotRow {
    pub tiles: Vec<SnapshotTile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotTile {
    pub letter: char,
    pub value: u32,
    pub row: usize,
    pub col: usize,
    pub state: TileState,
}

impl From<&GameSession> for GameSnapshot {
    fn from(session: &GameSession) -> Self {
        let grid = session.grid();
        let cols = grid.cols().max(1);

        // Grid::iter walks row-major, so the index gives the cell
        let tiles: Vec<SnapshotTile> = grid
            .iter()
            .enumerate()
            .map(|(index, (id, tile))| SnapshotTile {
                letter: tile.letter(),
                value: tile.value(),
                row: index / cols,
                col: index % cols,
                state: session.state_for(id, tile),
            })
            .collect();

        let rows = tiles
            .chunks(cols)
            .map(|row| SnapshotRow {
                tiles: row.to_vec(),
            })
            .collect();

        Self {
            rows,
            current_word: session.current_word(),
            score: session.score(),
            history: session.history().to_vec(),
        }
    }
}
