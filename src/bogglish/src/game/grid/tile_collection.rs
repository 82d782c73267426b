use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use super::tile::Tile;
use super::tile_data::{TileSpec, TILE_TABLE};
use crate::error::{GameError, Result};

/// A shuffled pool of tiles that grids are dealt from.
#[derive(Debug, Clone)]
pub struct TileCollection {
    tiles: VecDeque<Tile>,
}

impl TileCollection {
    /// A freshly shuffled pool built from the standard letter table.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::generate(&TILE_TABLE, rng)
    }

    /// Builds one tile per table entry occurrence, in table order, then
    /// applies a uniform shuffle.
    pub fn generate<R: Rng>(table: &phf::OrderedMap<char, TileSpec>, rng: &mut R) -> Self {
        let mut tiles: Vec<Tile> = table
            .entries()
            .flat_map(|(&letter, spec)| {
                (0..spec.count).map(move |_| Tile::new(letter, spec.value))
            })
            .collect();
        tiles.shuffle(rng);

        Self {
            tiles: tiles.into(),
        }
    }

    pub fn remove_one(&mut self) -> Result<Tile> {
        // Deal from the front
        self.tiles.pop_front().ok_or(GameError::EmptyPool)
    }

    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}

/// An unshuffled pool, dealt in the given order.
impl From<Vec<Tile>> for TileCollection {
    fn from(tiles: Vec<Tile>) -> Self {
        Self {
            tiles: tiles.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::tile_data::total_tiles;
    use phf::phf_ordered_map;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    static SMALL_TABLE: phf::OrderedMap<char, TileSpec> = phf_ordered_map! {
        'A' => TileSpec { count: 3, value: 1 },
        'B' => TileSpec { count: 1, value: 3 },
        'Z' => TileSpec { count: 2, value: 10 },
    };

    fn letter_counts(collection: &TileCollection) -> HashMap<char, usize> {
        let mut counts = HashMap::new();
        for tile in collection.iter() {
            *counts.entry(tile.letter()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_size_matches_table() {
        let mut rng = StdRng::seed_from_u64(7);
        let collection = TileCollection::new(&mut rng);
        assert_eq!(collection.size(), total_tiles(&TILE_TABLE));

        let small = TileCollection::generate(&SMALL_TABLE, &mut rng);
        assert_eq!(small.size(), 6);
    }

    #[test]
    fn test_letter_multiset_is_preserved() {
        let mut rng = StdRng::seed_from_u64(42);
        let collection = TileCollection::generate(&SMALL_TABLE, &mut rng);
        let counts = letter_counts(&collection);
        assert_eq!(counts[&'A'], 3);
        assert_eq!(counts[&'B'], 1);
        assert_eq!(counts[&'Z'], 2);
        assert!(collection
            .iter()
            .all(|tile| Some(tile.value()) == SMALL_TABLE.get(&tile.letter()).map(|spec| spec.value)));
        assert!(collection.iter().all(|tile| !tile.is_active()));
    }

    #[test]
    fn test_remove_one_until_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut collection = TileCollection::generate(&SMALL_TABLE, &mut rng);

        for remaining in (0..6).rev() {
            assert!(collection.remove_one().is_ok());
            assert_eq!(collection.size(), remaining);
        }

        assert!(collection.is_empty());
        assert!(matches!(collection.remove_one(), Err(GameError::EmptyPool)));
        assert!(matches!(collection.remove_one(), Err(GameError::EmptyPool)));
        assert_eq!(collection.size(), 0);
    }

    #[test]
    fn test_remove_one_takes_from_the_front() {
        let mut collection =
            TileCollection::from(vec![Tile::new('X', 8), Tile::new('Y', 4)]);
        assert_eq!(collection.remove_one().unwrap().letter(), 'X');
        assert_eq!(collection.remove_one().unwrap().letter(), 'Y');
    }

    #[test]
    fn test_shuffle_varies_with_seed() {
        let order = |seed: u64| -> String {
            let mut rng = StdRng::seed_from_u64(seed);
            TileCollection::new(&mut rng)
                .iter()
                .map(|tile| tile.letter())
                .collect()
        };

        assert_eq!(order(3), order(3), "Same seed should deal the same pool");
        assert_ne!(order(3), order(4), "Different seeds should deal different pools");

        let unshuffled: String = TILE_TABLE
            .entries()
            .flat_map(|(&letter, spec)| std::iter::repeat(letter).take(spec.count as usize))
            .collect();
        assert_ne!(order(3), unshuffled);
    }

    #[test]
    fn test_shuffle_spreads_letters_across_positions() {
        // Each of the 6 slots should see the single 'B' at some point.
        let mut seen = [false; 6];
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let collection = TileCollection::generate(&SMALL_TABLE, &mut rng);
            let slot = collection
                .iter()
                .position(|tile| tile.letter() == 'B')
                .unwrap();
            seen[slot] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
