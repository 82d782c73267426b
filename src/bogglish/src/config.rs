use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub dictionary_path: PathBuf,
    pub seed: Option<String>,
    pub hint_min_length: usize,
    pub hint_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from("dictionary.txt"),
            seed: None,
            hint_min_length: 3,
            hint_limit: 10,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("BOGGLISH_DICTIONARY") {
            config.dictionary_path = PathBuf::from(path);
        }

        if let Some(seed) = lookup("BOGGLISH_SEED") {
            if !seed.trim().is_empty() {
                config.seed = Some(seed);
            }
        }

        if let Some(length) = lookup("BOGGLISH_HINT_MIN_LENGTH") {
            if let Ok(value) = length.parse::<usize>() {
                config.hint_min_length = value.max(1);
            }
        }

        if let Some(limit) = lookup("BOGGLISH_HINT_LIMIT") {
            if let Ok(value) = limit.parse::<usize>() {
                config.hint_limit = value;
            }
        }

        config
    }
}
