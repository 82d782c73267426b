pub mod controller;
pub mod conversion;
pub mod dictionary;
pub mod grid;
pub mod scoring;
pub mod session;
pub mod trie;
pub mod word_finder;

pub use controller::{GameController, GameObserver};
pub use conversion::GameSnapshot;
pub use dictionary::Dictionary;
pub use grid::{Grid, Position, Tile, TileCollection, TileId, TileState};
pub use session::{GameSession, IgnoreReason, ScoredWord, SelectOutcome, Submission};
pub use word_finder::WordFinder;
