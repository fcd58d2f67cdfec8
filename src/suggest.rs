//! Candidate generation: rank every dictionary terminal against the input.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::dict::Lexicon;
use crate::keymap;
use crate::learning::LearningStore;
use crate::scorer::sequence_distance;
use crate::EngineError;

/// One ranked candidate. `score` is `distance` minus the learning bonus;
/// ties fall back to raw distance, then to the word itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub word: String,
    pub distance: f64,
    pub score: f64,
}

/// Rank every word in `language`'s dictionary against `input` and return the
/// best `k`.
///
/// Parsing failures surface as [`EngineError::InvalidKeys`]. An empty parsed
/// sequence short-circuits to an empty list before the language check, so
/// blank input never errors. Each call walks the language's whole trie;
/// there is no visit budget, so cost is O(nodes) per request.
pub fn suggest(
    lexicon: &Lexicon,
    learning: &LearningStore,
    input: &str,
    language: &str,
    k: usize,
) -> Result<Vec<Suggestion>, EngineError> {
    let span = debug_span!("suggest", language, k);
    let _enter = span.enter();

    let input_patterns = keymap::parse_sequence(input)?;
    if input_patterns.is_empty() {
        return Ok(Vec::new());
    }
    let trie = lexicon
        .trie(language)
        .ok_or_else(|| EngineError::UnknownLanguage {
            language: language.to_string(),
        })?;

    let mut candidates: Vec<Suggestion> = Vec::new();
    trie.for_each_terminal(|path, word| {
        let distance = sequence_distance(&input_patterns, path);
        let score = distance - learning.bonus(word);
        candidates.push(Suggestion {
            word: word.to_string(),
            distance,
            score,
        });
    });

    // Full collect-then-sort; no incremental top-k structure is needed.
    candidates.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(Ordering::Equal)
            .then(a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal))
            .then_with(|| a.word.cmp(&b.word))
    });
    candidates.truncate(k);
    debug!(returned = candidates.len(), "ranked suggestions");
    Ok(candidates)
}

/// Collaborator entry point: the single best word for `input`, if any.
pub fn process_input(
    lexicon: &Lexicon,
    learning: &LearningStore,
    input: &str,
    language: &str,
) -> Result<Vec<String>, EngineError> {
    Ok(suggest(lexicon, learning, input, language, 1)?
        .into_iter()
        .map(|s| s.word)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::format_sequence;

    fn test_lexicon() -> Lexicon {
        let mut lexicon = Lexicon::new();
        lexicon
            .load_dictionary(["cat", "hat", "the", "hello", "dog", "bad"], "english")
            .unwrap();
        lexicon
            .load_dictionary(["chat", "ami", "amie"], "french")
            .unwrap();
        lexicon
    }

    fn top(input: &str, language: &str) -> Vec<String> {
        let lexicon = test_lexicon();
        let learning = LearningStore::new();
        process_input(&lexicon, &learning, input, language).unwrap()
    }

    #[test]
    fn test_missing_dot_in_last_chord() {
        // W+Q+O = {2,3,5} drops dot 4 from 't'; cat still ranks first.
        assert_eq!(top("D+K D W+Q+O", "english"), vec!["cat"]);
    }

    #[test]
    fn test_added_dot_in_first_chord() {
        assert_eq!(top("D+K+O D W+Q+O", "english"), vec!["cat"]);
    }

    #[test]
    fn test_substituted_first_chord() {
        assert_eq!(top("D D W+Q+O", "english"), vec!["cat"]);
    }

    #[test]
    fn test_noisy_chat_french() {
        // 2nd chord has dot 4 where 'h' has dot 2; 4th drops dot 4 of 't'.
        assert_eq!(top("D+K D+K+O D W+Q+O", "french"), vec!["chat"]);
    }

    #[test]
    fn test_contraction_the() {
        assert_eq!(top("W+Q+K+P", "english"), vec!["the"]);
    }

    #[test]
    fn test_dropped_chord() {
        assert_eq!(top("D W+Q+O", "english"), vec!["cat"]);
    }

    #[test]
    fn test_hello_with_noisy_chords() {
        assert_eq!(top("D+W+O D+O D+W+Q D+W+Q D+Q+O", "english"), vec!["hello"]);
    }

    #[test]
    fn test_shifted_first_chord() {
        assert_eq!(top("W+K D W+Q+O", "english"), vec!["cat"]);
    }

    #[test]
    fn test_empty_input_is_empty_result() {
        assert_eq!(top("", "english"), Vec::<String>::new());
        assert_eq!(top("   ", "english"), Vec::<String>::new());
    }

    #[test]
    fn test_noisy_dog_input_prefers_hat() {
        // {2,4,5} {3,4} {2,3,5} sits at distance 1.75 from "hat" but 1.85
        // from "dog"; raw distance alone favours "hat".
        assert_eq!(top("W+K+O Q+K W+Q+O", "english"), vec!["hat"]);
    }

    #[test]
    fn test_french_amie() {
        assert_eq!(top("D D+O W+K D", "french"), vec!["amie"]);
    }

    #[test]
    fn test_trailing_contraction_chord_still_cat() {
        assert_eq!(top("D+K D W+Q+O W+Q+K+P", "english"), vec!["cat"]);
    }

    #[test]
    fn test_invalid_keys_error() {
        let lexicon = test_lexicon();
        let learning = LearningStore::new();
        let err = process_input(&lexicon, &learning, "A+B C+D", "english").unwrap_err();
        match err {
            EngineError::InvalidKeys { offending, .. } => {
                assert_eq!(offending, vec!["A".to_string(), "B".to_string()]);
            }
            other => panic!("expected InvalidKeys, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_language_error() {
        let lexicon = test_lexicon();
        let learning = LearningStore::new();
        let err = suggest(&lexicon, &learning, "D", "german", 1).unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownLanguage {
                language: "german".to_string()
            }
        );
    }

    #[test]
    fn test_empty_input_skips_language_check() {
        // Parse-first contract: blank input returns [] even for a language
        // with no dictionary.
        let lexicon = test_lexicon();
        let learning = LearningStore::new();
        assert_eq!(
            suggest(&lexicon, &learning, "  ", "german", 3).unwrap(),
            vec![]
        );
    }

    #[test]
    fn test_invalid_keys_beats_unknown_language() {
        let lexicon = test_lexicon();
        let learning = LearningStore::new();
        let err = suggest(&lexicon, &learning, "A", "german", 1).unwrap_err();
        assert!(matches!(err, EngineError::InvalidKeys { .. }));
    }

    #[test]
    fn test_exact_match_has_distance_zero_and_top_rank() {
        // "D+K D W+Q+K+O" is cat's exact path: c={1,4}, a={1}, t={2,3,4,5}.
        let lexicon = test_lexicon();
        let learning = LearningStore::new();
        let results = suggest(&lexicon, &learning, "D+K D W+Q+K+O", "english", 10).unwrap();
        assert_eq!(results[0].word, "cat");
        assert_eq!(results[0].distance, 0.0);
        assert_eq!(results[0].score, 0.0);
        // Without a learning bonus no candidate can score below zero.
        for s in &results {
            assert!(s.score >= 0.0);
            assert!(s.distance >= 0.0);
        }
    }

    #[test]
    fn test_k_larger_than_dictionary_returns_all() {
        let lexicon = test_lexicon();
        let learning = LearningStore::new();
        let results = suggest(&lexicon, &learning, "D+K D W+Q+O", "english", 100).unwrap();
        // 6 words + the "the" contraction terminal; "the" appears twice
        // because its letterwise path and its contraction path are distinct
        // terminals.
        assert_eq!(results.len(), 7);
    }

    #[test]
    fn test_k_zero_returns_nothing() {
        let lexicon = test_lexicon();
        let learning = LearningStore::new();
        let results = suggest(&lexicon, &learning, "D+K D W+Q+O", "english", 0).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_ranking_is_sorted() {
        let lexicon = test_lexicon();
        let learning = LearningStore::new();
        let results = suggest(&lexicon, &learning, "D W+Q+O", "english", 10).unwrap();
        for pair in results.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
    }

    #[test]
    fn test_word_breaks_exact_ties() {
        // "ab" and "ba" are equidistant (0.5) from input "D D"; the
        // lexicographically smaller word wins.
        let mut lexicon = Lexicon::new();
        lexicon.load_dictionary(["ba", "ab"], "english").unwrap();
        let learning = LearningStore::new();
        let results = suggest(&lexicon, &learning, "D D", "english", 2).unwrap();
        assert_eq!(results[0].word, "ab");
        assert_eq!(results[1].word, "ba");
        assert_eq!(results[0].distance, results[1].distance);
    }

    #[test]
    fn test_learning_bonus_flips_ranking() {
        // Raw distances: hat 1.75, dog 1.85. One acceptance leaves a score
        // tie that the distance tie-break resolves in hat's favour; a second
        // acceptance puts dog strictly ahead.
        let lexicon = test_lexicon();
        let mut learning = LearningStore::new();

        learning.record_correction("dog");
        assert_eq!(
            process_input(&lexicon, &learning, "W+K+O Q+K W+Q+O", "english").unwrap(),
            vec!["hat"]
        );

        learning.record_correction("dog");
        assert_eq!(
            process_input(&lexicon, &learning, "W+K+O Q+K W+Q+O", "english").unwrap(),
            vec!["dog"]
        );
    }

    #[test]
    fn test_learning_bonus_saturates() {
        let lexicon = test_lexicon();
        let mut learning = LearningStore::new();
        for _ in 0..5 {
            learning.record_correction("dog");
        }
        let at_five = suggest(&lexicon, &learning, "W+K+O Q+K W+Q+O", "english", 10).unwrap();
        let dog_at_five = at_five.iter().find(|s| s.word == "dog").unwrap().score;
        assert!((dog_at_five - (1.85 - 0.5)).abs() < 1e-9);
        assert_eq!(at_five[0].word, "dog");

        // Sixth acceptance: identical scores everywhere.
        learning.record_correction("dog");
        let at_six = suggest(&lexicon, &learning, "W+K+O Q+K W+Q+O", "english", 10).unwrap();
        assert_eq!(at_five, at_six);
    }

    #[test]
    fn test_round_trip_every_word() {
        let lexicon = test_lexicon();
        let learning = LearningStore::new();
        let words: &[(&str, &str)] = &[
            ("cat", "english"),
            ("hat", "english"),
            ("the", "english"),
            ("hello", "english"),
            ("dog", "english"),
            ("bad", "english"),
            ("chat", "french"),
            ("ami", "french"),
            ("amie", "french"),
        ];
        for &(word, language) in words {
            let path = lexicon.word_path(word, language).unwrap();
            let input = format_sequence(&path);
            let results = suggest(&lexicon, &learning, &input, language, 1).unwrap();
            assert_eq!(results[0].word, word, "round trip failed for {word}");
            assert_eq!(results[0].distance, 0.0);
        }
    }
}
