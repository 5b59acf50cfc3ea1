//! Building token sequences from raw text.
//!
//! Real pipeline runs receive their tokens from an upstream tokenizer; this
//! exists so tests and fixtures can construct token sequences without one.

use unicode_segmentation::UnicodeSegmentation;

use crate::{ParseToken, Span};

/// Split `text` into [`ParseToken`]s on Unicode word boundaries.
///
/// Whitespace-only segments are dropped; punctuation becomes its own token.
/// Spans are byte offsets into `text`.
pub fn create_tokens_from_string(text: &str) -> Vec<ParseToken> {
    text.split_word_bound_indices()
        .filter(|(_, segment)| !segment.trim().is_empty())
        .map(|(offset, segment)| {
            ParseToken::new(Span::new(offset, offset + segment.len()), segment)
        })
        .collect()
}
