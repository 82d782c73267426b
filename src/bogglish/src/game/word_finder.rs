use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use super::dictionary::Dictionary;
use super::grid::{Grid, TileId};
use super::session::ScoredWord;
use crate::error::Result;

/// Searches a grid for dictionary words that can still be spelled.
pub struct WordFinder<'a> {
    dictionary: &'a Dictionary,
    min_length: usize,
}

/// The path currently being walked: its letters, the tiles it covers and
/// the sum of their values.
#[derive(Default)]
struct Path {
    word: String,
    visited: HashSet<TileId>,
    value_sum: u32,
}

impl<'a> WordFinder<'a> {
    pub fn new(dictionary: &'a Dictionary, min_length: usize) -> Self {
        Self {
            dictionary,
            min_length,
        }
    }

    /// Words spellable without touching `blocked` tiles, best scoring first.
    /// A word is scored by the tiles of its best path on this grid, the same
    /// way a submitted word would be.
    pub fn find_words(&self, grid: &Grid, blocked: &HashSet<TileId>) -> Result<Vec<ScoredWord>> {
        let mut found = HashMap::new();
        let mut path = Path::default();

        for id in grid.ids().filter(|id| !blocked.contains(id)) {
            self.find_words_from(grid, id, &mut path, blocked, &mut found)?;
        }

        let mut words: Vec<ScoredWord> = found
            .into_iter()
            .map(|(word, score)| ScoredWord { word, score })
            .collect();
        words.sort_by(|a, b| {
            Reverse(a.score)
                .cmp(&Reverse(b.score))
                .then_with(|| a.word.cmp(&b.word))
        });
        Ok(words)
    }

    fn find_words_from(
        &self,
        grid: &Grid,
        id: TileId,
        path: &mut Path,
        blocked: &HashSet<TileId>,
        found: &mut HashMap<String, u32>,
    ) -> Result<()> {
        let tile = grid.tile(id)?;
        path.word.push(tile.letter());
        path.value_sum += tile.value();

        // Nothing in the dictionary starts this way, so stop walking here
        if self.dictionary.has_prefix(&path.word) {
            let length = path.word.chars().count();
            if length >= self.min_length && self.dictionary.contains(&path.word) {
                // The same word can show up along several paths; keep the best
                let score = path.value_sum * length as u32;
                let best = found.entry(path.word.clone()).or_insert(0);
                *best = (*best).max(score);
            }

            path.visited.insert(id);
            for neighbor in grid.neighbors(id)? {
                if !path.visited.contains(&neighbor) && !blocked.contains(&neighbor) {
                    self.find_words_from(grid, neighbor, path, blocked, found)?;
                }
            }
            path.visited.remove(&id);
        }

        // Backtrack
        path.value_sum -= tile.value();
        path.word.pop();
        Ok(())
    }
}
