//! Rule-based fact lookup: fixed-phrase keys mapped to canned answers.
//!
//! The table is ordered. Lookup scans keys in declaration order and the
//! first key that is a substring of the input wins, so broader keys should
//! be declared after their more specific variants.

use serde::{Deserialize, Serialize};

/// Ordered fixed-phrase fact table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactTable {
    entries: Vec<(String, String)>,
}

impl FactTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key/answer pair. Keys are matched lowercase.
    pub fn insert(&mut self, key: &str, answer: &str) {
        self.entries.push((key.to_lowercase(), answer.to_string()));
    }

    /// First answer whose key is a substring of the (lowercased) input.
    pub fn lookup(&self, text: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| text.contains(key.as_str()))
            .map(|(_, answer)| answer.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Built-in general-knowledge table.
    pub fn default_table() -> Self {
        let mut table = Self::new();
        table.insert("capital of india", "The capital of India is New Delhi 🇮🇳");
        table.insert(
            "what is the capital of india",
            "The capital of India is New Delhi 🇮🇳",
        );
        table.insert(
            "who invented computer",
            "Charles Babbage is known as the father of the computer 🧠",
        );
        table.insert(
            "invented computer",
            "Charles Babbage is known as the father of the computer 🧠",
        );
        table.insert("largest ocean", "The Pacific Ocean is the largest ocean 🌊");
        table.insert(
            "largest ocean in the world",
            "The Pacific Ocean is the largest ocean 🌊",
        );
        table.insert(
            "fastest animal",
            "The cheetah is the fastest land animal 🐆",
        );
        table.insert(
            "speed of light",
            "The speed of light is about 299,792 km per second ⚡",
        );
        table.insert(
            "tallest mountain",
            "Mount Everest is the tallest mountain 🏔",
        );
        table.insert(
            "highest mountain",
            "Mount Everest is the tallest mountain 🏔",
        );
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_lookup() {
        let table = FactTable::default_table();

        let answer = table.lookup("tell me the capital of india please");
        assert_eq!(answer, Some("The capital of India is New Delhi 🇮🇳"));
    }

    #[test]
    fn test_first_match_wins() {
        let mut table = FactTable::new();
        table.insert("largest ocean", "first");
        table.insert("ocean", "second");

        assert_eq!(table.lookup("what is the largest ocean"), Some("first"));
        assert_eq!(table.lookup("which ocean is deepest"), Some("second"));
    }

    #[test]
    fn test_lookup_miss() {
        let table = FactTable::default_table();

        assert_eq!(table.lookup("hello there"), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn test_default_table_size() {
        assert_eq!(FactTable::default_table().len(), 10);
    }
}
