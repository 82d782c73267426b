use core::fmt;
use std::collections::HashSet;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_seeder::Seeder;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::conversion::GameSnapshot;
use super::dictionary::Dictionary;
use super::grid::{Grid, Tile, TileCollection, TileId, TileState, GRID_COLS, GRID_ROWS};
use super::scoring;
use super::word_finder::WordFinder;
use crate::config::GameConfig;
use crate::error::Result;

/// A word accepted by the dictionary, with the points it earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredWord {
    pub word: String,
    pub score: u32,
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Used,
    NotAdjacent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    /// The clicked tile and every tile after it were dropped from the path.
    Deselected { count: usize },
    Ignored(IgnoreReason),
}

impl SelectOutcome {
    pub fn changed_state(&self) -> bool {
        !matches!(self, SelectOutcome::Ignored(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Scored(ScoredWord),
    Rejected { word: String },
}

/// One game in progress: the grid, the tiles being spelled, and the score.
pub struct GameSession {
    dictionary: Arc<Dictionary>,
    rng: StdRng,
    grid: Grid,
    selection: Vec<TileId>,
    used: HashSet<TileId>,
    score: u32,
    history: Vec<ScoredWord>,
}

impl GameSession {
    pub fn new(dictionary: Arc<Dictionary>, config: &GameConfig) -> Result<Self> {
        let rng = match &config.seed {
            Some(seed) => {
                info!("Seeding tile pools from {:?}", seed);
                StdRng::from_seed(Seeder::from(seed.as_str()).make_seed())
            }
            None => StdRng::from_entropy(),
        };
        Self::with_rng(dictionary, rng)
    }

    pub fn with_rng(dictionary: Arc<Dictionary>, mut rng: StdRng) -> Result<Self> {
        let grid = Self::deal_grid(&mut rng)?;
        Ok(Self::with_grid(dictionary, grid, rng))
    }

    /// Starts play on a prepared grid. Later resets deal from `rng`.
    pub fn with_grid(dictionary: Arc<Dictionary>, grid: Grid, rng: StdRng) -> Self {
        Self {
            dictionary,
            rng,
            grid,
            selection: Vec::new(),
            used: HashSet::new(),
            score: 0,
            history: Vec::new(),
        }
    }

    fn deal_grid(rng: &mut StdRng) -> Result<Grid> {
        let mut pool = TileCollection::new(rng);
        Grid::construct(GRID_ROWS, GRID_COLS, &mut pool)
    }

    pub fn select(&mut self, id: TileId) -> Result<SelectOutcome> {
        // Also rejects ids left over from a previous grid
        let position = self.grid.position_of(id)?;

        if self.used.contains(&id) {
            debug!("Ignoring click on used tile at {}", position);
            return Ok(SelectOutcome::Ignored(IgnoreReason::Used));
        }

        // Clicking a tile already on the path undoes back through it
        if let Some(index) = self.selection.iter().position(|&selected| selected == id) {
            let popped = self.selection.split_off(index);
            for &popped_id in &popped {
                self.grid.tile_mut(popped_id)?.set_active(false);
            }
            debug!("Deselected {} tiles back to {}", popped.len(), position);
            return Ok(SelectOutcome::Deselected {
                count: popped.len(),
            });
        }

        // An empty path accepts any tile, otherwise it must touch the last one
        if let Some(&last) = self.selection.last() {
            if !self.grid.position_of(last)?.is_adjacent_to(&position) {
                debug!("Ignoring click on {}: not next to the last tile", position);
                return Ok(SelectOutcome::Ignored(IgnoreReason::NotAdjacent));
            }
        }

        self.grid.tile_mut(id)?.set_active(true);
        self.selection.push(id);
        debug!("Selected {}, word is now {}", position, self.current_word());
        Ok(SelectOutcome::Selected)
    }

    pub fn submit(&mut self) -> Result<Submission> {
        let word = self.current_word();
        if !self.dictionary.contains(&word) {
            warn!("Rejected '{}': not in the dictionary", word);
            return Ok(Submission::Rejected { word });
        }

        let tiles = self
            .selection
            .iter()
            .map(|&id| self.grid.tile(id))
            .collect::<Result<Vec<&Tile>>>()?;
        let scored = ScoredWord {
            word,
            score: scoring::score_tiles(tiles),
        };

        // Retire the whole path; these tiles never come back this game
        for id in self.selection.drain(..) {
            self.grid.tile_mut(id)?.set_active(false);
            self.used.insert(id);
        }
        self.score += scored.score;
        self.history.push(scored.clone());

        info!("Scored {}, total is now {}", scored, self.score);
        Ok(Submission::Scored(scored))
    }

    /// Deals a new grid from a freshly shuffled pool and clears all progress.
    pub fn reset(&mut self) -> Result<()> {
        self.grid = Self::deal_grid(&mut self.rng)?;
        self.selection.clear();
        self.used.clear();
        self.score = 0;
        self.history.clear();

        info!("Started a new game");
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state_of(&self, id: TileId) -> Result<TileState> {
        let tile = self.grid.tile(id)?;
        Ok(self.state_for(id, tile))
    }

    /// State of a tile taken from [`Grid::iter`], which cannot be stale.
    pub fn state_for(&self, id: TileId, tile: &Tile) -> TileState {
        if self.is_used(id) {
            TileState::Used
        } else if tile.is_active() {
            TileState::Active
        } else {
            TileState::Inactive
        }
    }

    /// Tile ids in the order they were selected.
    pub fn selection(&self) -> &[TileId] {
        &self.selection
    }

    /// The path only ever holds ids issued by the current grid; `reset`
    /// clears it together with the grid.
    pub fn selected_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.selection
            .iter()
            .filter_map(|&id| self.grid.tile(id).ok())
    }

    pub fn current_word(&self) -> String {
        self.selected_tiles().map(|tile| tile.letter()).collect()
    }

    pub fn is_used(&self, id: TileId) -> bool {
        self.used.contains(&id)
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn history(&self) -> &[ScoredWord] {
        &self.history
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    /// Dictionary words that can still be spelled from unused tiles.
    pub fn remaining_words(&self, min_length: usize) -> Result<Vec<ScoredWord>> {
        WordFinder::new(&self.dictionary, min_length).find_words(&self.grid, &self.used)
    }
}
