use phf::phf_ordered_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpec {
    pub count: u32,
    pub value: u32,
}

const fn spec(count: u32, value: u32) -> TileSpec {
    TileSpec { count, value }
}

/// English letter distribution without blanks, 98 tiles in total.
pub static TILE_TABLE: phf::OrderedMap<char, TileSpec> = phf_ordered_map! {
    'A' => spec(9, 1),
    'B' => spec(2, 3),
    'C' => spec(2, 3),
    'D' => spec(4, 2),
    'E' => spec(12, 1),
    'F' => spec(2, 4),
    'G' => spec(3, 2),
    'H' => spec(2, 4),
    'I' => spec(9, 1),
    'J' => spec(1, 8),
    'K' => spec(1, 5),
    'L' => spec(4, 1),
    'M' => spec(2, 3),
    'N' => spec(6, 1),
    'O' => spec(8, 1),
    'P' => spec(2, 3),
    'Q' => spec(1, 10),
    'R' => spec(6, 1),
    'S' => spec(4, 1),
    'T' => spec(6, 1),
    'U' => spec(4, 1),
    'V' => spec(2, 4),
    'W' => spec(2, 4),
    'X' => spec(1, 8),
    'Y' => spec(2, 4),
    'Z' => spec(1, 10),
};

pub fn total_tiles(table: &phf::OrderedMap<char, TileSpec>) -> usize {
    table.values().map(|spec| spec.count as usize).sum()
}

/// Point value of a letter, case-insensitive. Unknown letters are worth nothing.
pub fn value_of(letter: char) -> u32 {
    TILE_TABLE
        .get(&letter.to_ascii_uppercase())
        .map(|spec| spec.value)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_totals() {
        assert_eq!(TILE_TABLE.len(), 26);
        assert_eq!(total_tiles(&TILE_TABLE), 98);
    }

    #[test]
    fn test_table_order_is_alphabetical() {
        let letters: String = TILE_TABLE.keys().collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn test_value_of() {
        assert_eq!(value_of('C'), 3);
        assert_eq!(value_of('a'), 1);
        assert_eq!(value_of('q'), 10);
        assert_eq!(value_of('*'), 0);
    }
}
