use std::path::PathBuf;
use thiserror::Error;

use crate::game::grid::TileId;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("tile pool is empty")]
    EmptyPool,

    #[error("tile {0} is not part of this grid")]
    TileNotFound(TileId),

    #[error("failed to load dictionary from {}", path.display())]
    DictionaryLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
