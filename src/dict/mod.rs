//! Per-language dictionaries keyed by dot-pattern sequences.

mod trie;

pub use trie::PatternTrie;

use std::collections::HashMap;

use tracing::debug;

use crate::keymap::{BUILTIN_LANGUAGES, CONTRACTIONS, CONTRACTION_LANGUAGE};
use crate::pattern::DotPattern;
use crate::EngineError;

/// Registry of per-language tries plus the letter tables used to encode
/// words into dot-pattern paths.
///
/// Construct once, load word lists, then share immutably: suggestion
/// requests only read, so an initialized `Lexicon` is safe for concurrent
/// use behind a shared reference.
pub struct Lexicon {
    tables: HashMap<String, HashMap<char, DotPattern>>,
    tries: HashMap<String, PatternTrie>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Registry with the built-in language tables and no words loaded.
    pub fn new() -> Self {
        let mut lexicon = Self {
            tables: HashMap::new(),
            tries: HashMap::new(),
        };
        for &(language, letters) in BUILTIN_LANGUAGES {
            lexicon.register_language(language, letters);
        }
        lexicon
    }

    /// Register (or replace) the letter table for `language`. Languages are
    /// free-form string keys; a table must exist before words can be added.
    pub fn register_language(&mut self, language: &str, letters: &[(char, &[u8])]) {
        let table = letters
            .iter()
            .map(|&(ch, dots)| (ch, DotPattern::new(dots.iter().copied())))
            .collect();
        self.tables.insert(language.to_string(), table);
    }

    /// Insert one word, decomposed per character through `language`'s letter
    /// table. Characters absent from the table map to the empty pattern.
    /// The original casing is what suggestions later return.
    pub fn add_word(&mut self, word: &str, language: &str) -> Result<(), EngineError> {
        let path = self.word_path(word, language)?;
        let trie = self.tries.entry(language.to_string()).or_default();
        if let Some(previous) = trie.insert(&path, word) {
            if previous != word {
                // Homograph collision on the encoded path; the newer word wins.
                debug!(language, previous = %previous, word, "terminal overwrite");
            }
        }
        Ok(())
    }

    /// Insert a whole-word shorthand under a single root-level pattern,
    /// bypassing per-character decomposition.
    pub fn add_contraction(&mut self, word: &str, pattern: DotPattern, language: &str) {
        let trie = self.tries.entry(language.to_string()).or_default();
        trie.insert(std::slice::from_ref(&pattern), word);
    }

    /// Bulk-load a word list, then apply the configured contractions when
    /// `language` is the contraction-designated one.
    pub fn load_dictionary<I, S>(&mut self, words: I, language: &str) -> Result<(), EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref(), language)?;
        }
        if language == CONTRACTION_LANGUAGE {
            for &(word, dots) in CONTRACTIONS {
                self.add_contraction(word, DotPattern::new(dots.iter().copied()), language);
            }
        }
        Ok(())
    }

    /// Trie for `language`, present once any word or contraction was loaded.
    pub fn trie(&self, language: &str) -> Option<&PatternTrie> {
        self.tries.get(language)
    }

    /// Languages that currently have a loaded trie.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tries.keys().map(String::as_str)
    }

    /// Re-derive the dot-pattern path a word encodes to, case-folded, using
    /// `language`'s letter table.
    pub fn word_path(&self, word: &str, language: &str) -> Result<Vec<DotPattern>, EngineError> {
        let table = self
            .tables
            .get(language)
            .ok_or_else(|| EngineError::UnknownLanguage {
                language: language.to_string(),
            })?;
        Ok(word
            .to_lowercase()
            .chars()
            .map(|ch| table.get(&ch).cloned().unwrap_or_else(DotPattern::empty))
            .collect())
    }
}
