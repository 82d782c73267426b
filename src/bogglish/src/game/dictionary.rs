use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::{debug, info};

use super::trie::Trie;
use crate::error::{GameError, Result};

/// Lowercase word list, loaded once and never modified.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Trie,
    len: usize,
}

impl Dictionary {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let load_error = |source: std::io::Error| GameError::DictionaryLoad {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(load_error)?;
        let mut dictionary = Dictionary::default();
        for line in BufReader::new(file).lines() {
            dictionary.insert(&line.map_err(load_error)?);
        }

        info!(
            "Loaded {} words from dictionary {}",
            dictionary.len,
            path.display()
        );
        Ok(dictionary)
    }

    fn insert(&mut self, word: &str) {
        // Word lists often carry trailing whitespace or blank lines
        let word = word.trim();
        if word.is_empty() {
            return;
        }
        // Count only new words so len matches what contains() accepts
        if self.words.insert(&word.to_lowercase()) {
            self.len += 1;
        } else {
            debug!("Skipping duplicate dictionary word {}", word);
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.search(&word.to_lowercase())
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.words.has_prefix(&prefix.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'a> FromIterator<&'a str> for Dictionary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut dictionary = Dictionary::default();
        for word in words {
            dictionary.insert(word);
        }
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "cat").unwrap();
        writeln!(temp_file, "Dog").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "  tile  ").unwrap();
        writeln!(temp_file, "cat").unwrap();
        temp_file.flush().unwrap();

        let dictionary = Dictionary::from_file(temp_file.path()).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("dog"));
        assert!(dictionary.contains("tile"));
        assert!(!dictionary.contains(""));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dictionary: Dictionary = ["cat", "GRID"].into_iter().collect();
        assert!(dictionary.contains("CAT"));
        assert!(dictionary.contains("Cat"));
        assert!(dictionary.contains("grid"));
        assert!(dictionary.has_prefix("GR"));
        assert!(!dictionary.contains("ca"));
        assert!(!dictionary.has_prefix("x"));
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-words.txt");

        match Dictionary::from_file(&missing) {
            Err(GameError::DictionaryLoad { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected a dictionary load error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_dictionary() {
        let dictionary = Dictionary::default();
        assert!(dictionary.is_empty());
        assert!(!dictionary.contains("cat"));
    }
}
