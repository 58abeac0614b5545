use crate::error::{GameError, Result};
use crate::rng::RandomSource;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

/// A named list of candidate secret words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCategory {
    name: String,
    words: Vec<String>,
}

impl WordCategory {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Draw one word uniformly at random.
    pub fn pick_word(&self, rng: &mut dyn RandomSource) -> Result<&str> {
        if self.words.is_empty() {
            return Err(GameError::EmptyCategory(self.name.clone()));
        }
        Ok(self.words[rng.choose_index(self.words.len())].as_str())
    }
}

/// Read-only categorized word lists, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    categories: Vec<WordCategory>,
}

impl WordBank {
    /// The word bank compiled into the binary.
    pub fn embedded() -> Self {
        load_wordbank_from_str(EMBEDDED_WORDBANK)
    }

    pub fn categories(&self) -> &[WordCategory] {
        &self.categories
    }

    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(WordCategory::name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Case-insensitive lookup by name.
    pub fn category(&self, name: &str) -> Option<&WordCategory> {
        let wanted = name.trim().to_lowercase();
        self.categories.iter().find(|c| c.name == wanted)
    }

    /// Pick a category uniformly at random.
    pub fn random_category(&self, rng: &mut dyn RandomSource) -> Result<&WordCategory> {
        if self.categories.is_empty() {
            return Err(GameError::EmptyWordBank);
        }
        Ok(&self.categories[rng.choose_index(self.categories.len())])
    }
}

fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Parse a word bank: `[name]` headers followed by one word per line.
///
/// Blank lines and `#` comments are skipped, words are lowercased and
/// anything non-alphabetic is dropped. Words before the first header are
/// ignored, as are categories left without words.
pub fn load_wordbank_from_str(data: &str) -> WordBank {
    let mut categories: Vec<WordCategory> = Vec::new();
    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            categories.push(WordCategory {
                name: name.trim().to_lowercase(),
                words: Vec::new(),
            });
            continue;
        }
        let word = line.to_lowercase();
        if let Some(current) = categories.last_mut()
            && is_valid_word(&word)
        {
            current.words.push(word);
        }
    }
    categories.retain(|c| !c.words.is_empty());
    WordBank { categories }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    #[test]
    fn test_embedded_wordbank_categories() {
        let bank = WordBank::embedded();
        assert_eq!(bank.names(), vec!["animals", "countries", "tech", "random"]);
        for category in bank.categories() {
            assert_eq!(category.words().len(), 12, "category {}", category.name());
            assert!(category.words().iter().all(|w| is_valid_word(w)));
            assert!(category.words().iter().all(|w| *w == w.to_lowercase()));
        }
    }

    #[test]
    fn test_category_lookup_case_insensitive() {
        let bank = WordBank::embedded();
        assert_eq!(bank.category("TECH").map(WordCategory::name), Some("tech"));
        let padded = bank.category("  Animals ").map(WordCategory::name);
        assert_eq!(padded, Some("animals"));
        assert!(bank.category("planets").is_none());
        assert!(bank.category("").is_none());
    }

    #[test]
    fn test_load_skips_comments_and_invalid_words() {
        let data = "# comment\norphan\n[Fruit]\nApple\nk1wi\n\nplum\n[empty]\n";
        let bank = load_wordbank_from_str(data);
        assert_eq!(bank.names(), vec!["fruit"]);
        let fruit = bank.category("fruit").unwrap();
        assert_eq!(fruit.words(), &["apple".to_string(), "plum".to_string()]);
    }

    #[test]
    fn test_load_empty_input() {
        let bank = load_wordbank_from_str("");
        assert!(bank.is_empty());
        let mut rng = ScriptedRng::new(vec![0]);
        assert!(matches!(
            bank.random_category(&mut rng),
            Err(GameError::EmptyWordBank)
        ));
    }

    #[test]
    fn test_random_category_and_word_follow_rng() {
        let bank = WordBank::embedded();
        // Category index 2 (tech), then word index 11 (python)
        let mut rng = ScriptedRng::new(vec![2, 11]);
        let category = bank.random_category(&mut rng).unwrap();
        assert_eq!(category.name(), "tech");
        assert_eq!(category.pick_word(&mut rng).unwrap(), "python");
    }
}
