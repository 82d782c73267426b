use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    letter: char,
    value: u32,
    active: bool,
}

impl Tile {
    pub fn new(letter: char, value: u32) -> Self {
        Self {
            letter,
            value,
            active: false,
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Where a tile sits in the play cycle. A tile is in exactly one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileState {
    Inactive,
    Active,
    Used,
}
