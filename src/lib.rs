//! Chorded braille autocorrect engine.
//!
//! Maps noisy chorded keyboard input (`"D+K D W+Q+O"`) to the most likely
//! dictionary word. Each whitespace-separated token is one braille cell typed
//! as `'+'`-joined home-row keys; the per-language dictionary is a trie keyed
//! by dot-pattern sequences; candidates are ranked by a weighted edit
//! distance minus a small bonus for previously accepted corrections.
//!
//! The caller owns the [`Lexicon`] and [`LearningStore`]; there is no global
//! state. A loaded `Lexicon` is never mutated by suggestion requests and is
//! safe to share across threads; [`LearningStore::record_correction`] takes
//! `&mut self` and is the only mutation.

pub mod dict;
pub mod keymap;
pub mod learning;
pub mod pattern;
pub mod scorer;
pub mod suggest;
pub mod trace_init;

pub use dict::{Lexicon, PatternTrie};
pub use keymap::{parse_group, parse_sequence};
pub use learning::LearningStore;
pub use pattern::DotPattern;
pub use suggest::{process_input, suggest, Suggestion};

/// Unified error surface for the engine.
///
/// Exactly two failure modes reach callers; everything else (no match, empty
/// input) is an empty result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A chord token contained symbols outside the six valid keys.
    #[error("invalid keys detected: {offending:?}; valid keys are {valid:?}")]
    InvalidKeys {
        offending: Vec<String>,
        valid: &'static [char],
    },

    /// No dictionary has been loaded for the requested language.
    #[error("no dictionary loaded for language {language:?}")]
    UnknownLanguage { language: String },
}
