use super::grid::Tile;

/// Word score: the sum of the letter values, multiplied by the word length.
pub fn score_tiles<'a, I>(tiles: I) -> u32
where
    I: IntoIterator<Item = &'a Tile>,
{
    let (sum, length) = tiles
        .into_iter()
        .fold((0u32, 0u32), |(sum, length), tile| (sum + tile.value(), length + 1));
    sum * length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_scores_fifteen() {
        let tiles = [Tile::new('C', 3), Tile::new('A', 1), Tile::new('T', 1)];
        assert_eq!(score_tiles(&tiles), 15);
    }

    #[test]
    fn test_length_multiplies_value_sum() {
        let tiles = [Tile::new('Q', 10), Tile::new('I', 1)];
        assert_eq!(score_tiles(&tiles), 22);

        let single = [Tile::new('Z', 10)];
        assert_eq!(score_tiles(&single), 10);
    }

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(score_tiles(std::iter::empty()), 0);
    }
}
