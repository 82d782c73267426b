use std::collections::HashSet;

use bogglish::game::{Dictionary, Grid, TileCollection, WordFinder};
use bogglish::game::grid::{GRID_COLS, GRID_ROWS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_seeder::Seeder;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let dictionary_path = args.next().unwrap_or_else(|| "dictionary.txt".to_string());
    let seed = args.next().unwrap_or_else(|| "demo".to_string());

    let dictionary = Dictionary::from_file(&dictionary_path)?;
    let mut rng = StdRng::from_seed(Seeder::from(seed.as_str()).make_seed());
    let mut pool = TileCollection::new(&mut rng);
    let grid = Grid::construct(GRID_ROWS, GRID_COLS, &mut pool)?;

    println!("Board for seed {:?}:", seed);
    println!("{}", grid);

    let words = WordFinder::new(&dictionary, 3).find_words(&grid, &HashSet::new())?;
    println!("{} words on this board", words.len());
    for (i, scored) in words.iter().take(20).enumerate() {
        println!("{}. {} (score: {})", i + 1, scored.word, scored.score);
    }
    if words.len() > 20 {
        println!("... and {} more words", words.len() - 20);
    }

    Ok(())
}
