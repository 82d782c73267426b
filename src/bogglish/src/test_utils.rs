#[cfg(test)]
pub mod test_utils {
    use crate::game::grid::tile_data;
    use crate::game::{Dictionary, GameSession, Grid, Tile, TileCollection};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    /// Builds a grid from letters given row by row, e.g. "catdog" for
    /// C A T / D O G. Values come from the standard letter table.
    pub fn create_test_grid(letters: &str, rows: usize, cols: usize) -> Grid {
        assert_eq!(letters.chars().count(), rows * cols, "letter count must fill the grid");
        let tiles: Vec<Tile> = letters
            .chars()
            .map(|c| {
                let letter = c.to_ascii_uppercase();
                Tile::new(letter, tile_data::value_of(letter))
            })
            .collect();
        let mut pool = TileCollection::from(tiles);
        Grid::construct(rows, cols, &mut pool).unwrap()
    }

    pub fn create_test_dictionary(words: &[&str]) -> Arc<Dictionary> {
        Arc::new(words.iter().copied().collect())
    }

    /// A session on a fixed grid; resets deal from a seeded pool.
    pub fn create_test_session(
        letters: &str,
        rows: usize,
        cols: usize,
        words: &[&str],
    ) -> GameSession {
        GameSession::with_grid(
            create_test_dictionary(words),
            create_test_grid(letters, rows, cols),
            StdRng::seed_from_u64(42),
        )
    }
}
