//! Input-to-word matching.
//!
//! Pure: takes the typed text and the live words, returns what should happen.
//! The session applies the result.

use crate::entities::{EntityId, WordEntity};

/// The live word an input matched.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedWord {
    /// Position in the live entity list at resolution time.
    pub index: usize,
    pub id: EntityId,
    pub word: &'static str,
    pub x: f64,
    pub y: f64,
}

/// Outcome of resolving one input change.
#[derive(Debug, Clone, PartialEq)]
pub struct InputResolution {
    /// New contents of the input buffer: cleared on a match, otherwise the
    /// normalized text.
    pub input: String,
    pub matched: Option<MatchedWord>,
    pub score_delta: u64,
}

/// Inputs compare case-insensitively against the uppercase vocabulary.
pub fn normalize_input(text: &str) -> String {
    text.to_uppercase()
}

/// Match `text` against the live words.
///
/// The first entity in spawn order whose word equals the normalized text wins.
/// Prefixes and garbage are not errors: they simply do not match.
pub fn resolve_input(text: &str, entities: &[WordEntity]) -> InputResolution {
    let normalized = normalize_input(text);

    let matched = entities
        .iter()
        .enumerate()
        .find(|(_, e)| e.word == normalized)
        .map(|(index, e)| MatchedWord {
            index,
            id: e.id,
            word: e.word,
            x: e.x,
            y: e.y,
        });

    match matched {
        Some(m) => InputResolution {
            input: String::new(),
            score_delta: entities[m.index].points(),
            matched: Some(m),
        },
        None => InputResolution {
            input: normalized,
            matched: None,
            score_delta: 0,
        },
    }
}
