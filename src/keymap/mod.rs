//! Chord token parsing: raw `"D+K D W+Q+O"` input to dot-pattern sequences.

mod table;

pub use table::{
    BUILTIN_LANGUAGES, CONTRACTIONS, CONTRACTION_LANGUAGE, KEY_FOR_DOT, LATIN_LETTERS, VALID_KEYS,
};

use crate::pattern::DotPattern;
use crate::EngineError;

/// Parse one `'+'`-joined chord token into a canonical dot pattern.
///
/// Every fragment must be one of the six key symbols (exact case). Unknown
/// fragments fail with [`EngineError::InvalidKeys`] naming all of them;
/// duplicate keys collapse into a single dot.
pub fn parse_group(token: &str) -> Result<DotPattern, EngineError> {
    let mut dots = Vec::new();
    let mut offending: Vec<String> = Vec::new();
    for fragment in token.split('+') {
        match dot_for_key(fragment) {
            Some(dot) => dots.push(dot),
            None => offending.push(fragment.to_string()),
        }
    }
    if !offending.is_empty() {
        offending.sort();
        offending.dedup();
        return Err(EngineError::InvalidKeys {
            offending,
            valid: VALID_KEYS,
        });
    }
    Ok(DotPattern::new(dots))
}

/// Parse whitespace-separated chord tokens in left-to-right order.
///
/// Empty or whitespace-only input is an empty sequence, not an error. The
/// first invalid token aborts the parse.
pub fn parse_sequence(input: &str) -> Result<Vec<DotPattern>, EngineError> {
    input.split_whitespace().map(parse_group).collect()
}

/// Render one pattern back into a `'+'`-joined chord token. The empty
/// pattern renders as an empty string, which has no input-side spelling.
pub fn format_group(pattern: &DotPattern) -> String {
    let keys: Vec<String> = pattern
        .dots()
        .iter()
        .filter_map(|&dot| {
            KEY_FOR_DOT
                .iter()
                .find(|&&(d, _)| d == dot)
                .map(|&(_, key)| key.to_string())
        })
        .collect();
    keys.join("+")
}

/// Render a pattern sequence back into space-separated chord tokens.
pub fn format_sequence(patterns: &[DotPattern]) -> String {
    patterns
        .iter()
        .map(format_group)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A fragment maps to a dot only if it is exactly one known key symbol.
fn dot_for_key(fragment: &str) -> Option<u8> {
    let mut chars = fragment.chars();
    let symbol = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    KEY_FOR_DOT
        .iter()
        .find(|&&(_, key)| key == symbol)
        .map(|&(dot, _)| dot)
}
