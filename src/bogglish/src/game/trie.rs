use std::str::Chars;

/// Prefix tree over words. Children are kept in a small vector since most
/// nodes only branch a few ways.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Trie {
    next: Vec<(char, Box<Trie>)>,
    finish: bool,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the word was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.insert_chars(&mut word.chars())
    }

    fn insert_chars(&mut self, word: &mut Chars) -> bool {
        match word.next() {
            // End of the word: mark this node, and report whether it was new
            None => !std::mem::replace(&mut self.finish, true),
            Some(c) => {
                // Reuse the child for this letter, or grow a new branch
                let pos = match self.next.iter().position(|(ch, _)| *ch == c) {
                    Some(pos) => pos,
                    None => {
                        self.next.push((c, Box::default()));
                        self.next.len() - 1
                    }
                };
                // Hand the rest of the word down
                self.next[pos].1.insert_chars(word)
            }
        }
    }

    fn node_for(&self, prefix: &mut Chars) -> Option<&Trie> {
        // Follow one letter per level; a missing child means no word starts this way
        match prefix.next() {
            Some(c) => self
                .next
                .iter()
                .find(|(ch, _)| *ch == c)
                .and_then(|(_, child)| child.node_for(prefix)),
            // Prefix used up, this node is where it ends
            None => Some(self),
        }
    }

    pub fn search(&self, word: &str) -> bool {
        // Reaching the node is not enough, a word has to end there
        self.node_for(&mut word.chars())
            .map_or(false, |node| node.finish)
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.node_for(&mut prefix.chars()).is_some()
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut result = Trie::new();
        for word in words {
            result.insert(word);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search() {
        let t: Trie = ["apple", "banana"].into_iter().collect();
        assert!(t.search("apple"));
        assert!(t.search("banana"));
        assert!(!t.search("app"));
        assert!(!t.search("testingtesting123"));

        let t2: Trie = ["apple", "app", "application", "applause", "happy"]
            .into_iter()
            .collect();
        assert!(!t2.search("abdsas"));
        assert!(t2.search("app"));
        assert!(t2.search("happy"));
    }

    #[test]
    fn test_has_prefix() {
        let t: Trie = ["apple", "app", "application", "applause", "happy"]
            .into_iter()
            .collect();

        assert!(t.has_prefix(""));
        assert!(t.has_prefix("a"));
        assert!(t.has_prefix("appl"));
        assert!(t.has_prefix("appla"));
        assert!(t.has_prefix("hap"));
        assert!(t.has_prefix("happy"));

        assert!(!t.has_prefix("b"));
        assert!(!t.has_prefix("apple123"));
        assert!(!t.has_prefix("happyy"));
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut t = Trie::new();
        assert!(t.insert("cat"));
        assert!(!t.insert("cat"));
        assert!(t.insert("ca"));
        assert!(t.search("ca"));
    }

    #[test]
    fn test_empty_word() {
        let mut t = Trie::new();
        assert!(!t.search(""));
        t.insert("");
        assert!(t.search(""));
    }
}
