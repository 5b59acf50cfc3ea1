//! Minimal CoNLL-U reader.
//!
//! Enough of the format to load dependency fixtures: comment lines are
//! skipped, multiword-token ranges (`1-2`) and empty nodes (`3.1`) are
//! ignored, and each word row contributes a token, its UPOS tag, and one
//! typed-dependency triple from the HEAD and DEPREL columns.
//!
//! CoNLL-U carries no character offsets, so token spans are synthesized by
//! laying the tokens out left to right with single spaces between them.

use medspan::{ParseToken, PosTag, Span};
use thiserror::Error;

use crate::TypedDependency;

const FIELD_COUNT: usize = 10;

/// Errors raised while reading CoNLL-U text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConlluError {
    #[error("line {line}: expected 10 tab-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid token id {value:?}")]
    InvalidId { line: usize, value: String },

    #[error("line {line}: invalid head index {value:?}")]
    InvalidHead { line: usize, value: String },
}

/// One sentence block read from CoNLL-U text.
#[derive(Debug, Clone)]
pub struct ConlluSentence {
    pub tokens: Vec<ParseToken>,
    pub pos_tags: Vec<PosTag>,
    pub triples: Vec<TypedDependency>,
}

impl ConlluSentence {
    /// The span covering all of this sentence's tokens.
    pub fn span(&self) -> Span {
        match (self.tokens.first(), self.tokens.last()) {
            (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
            _ => Span::new(0, 0),
        }
    }
}

/// Read every sentence block (separated by blank lines) from `text`.
pub fn read_sentences(text: &str) -> Result<Vec<ConlluSentence>, ConlluError> {
    let mut sentences = Vec::new();
    let mut current = SentenceBuilder::default();

    for (line_idx, line) in text.lines().enumerate() {
        let line_no = line_idx + 1;
        if line.trim().is_empty() {
            if let Some(sentence) = current.finish() {
                sentences.push(sentence);
            }
            current = SentenceBuilder::default();
            continue;
        }
        if line.starts_with('#') {
            continue;
        }
        current.push_row(line, line_no)?;
    }
    if let Some(sentence) = current.finish() {
        sentences.push(sentence);
    }

    Ok(sentences)
}

#[derive(Default)]
struct SentenceBuilder {
    tokens: Vec<ParseToken>,
    pos_tags: Vec<PosTag>,
    triples: Vec<TypedDependency>,
    offset: usize,
}

impl SentenceBuilder {
    fn push_row(&mut self, line: &str, line_no: usize) -> Result<(), ConlluError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != FIELD_COUNT {
            return Err(ConlluError::FieldCount {
                line: line_no,
                found: fields.len(),
            });
        }

        let id = fields[0];
        // Multiword-token ranges and empty nodes carry no dependency row.
        if id.contains('-') || id.contains('.') {
            return Ok(());
        }
        let dependent: usize = id.parse().map_err(|_| ConlluError::InvalidId {
            line: line_no,
            value: id.to_string(),
        })?;

        let form = fields[1];
        let upos = fields[3];
        let head: usize = fields[6].parse().map_err(|_| ConlluError::InvalidHead {
            line: line_no,
            value: fields[6].to_string(),
        })?;
        let deprel = fields[7];

        if !self.tokens.is_empty() {
            self.offset += 1;
        }
        let span = Span::new(self.offset, self.offset + form.len());
        self.offset += form.len();

        self.tokens.push(ParseToken::new(span, form));
        self.pos_tags.push(PosTag::new(span, upos));
        self.triples
            .push(TypedDependency::new(head, dependent, deprel));
        Ok(())
    }

    fn finish(self) -> Option<ConlluSentence> {
        if self.tokens.is_empty() {
            return None;
        }
        Some(ConlluSentence {
            tokens: self.tokens,
            pos_tags: self.pos_tags,
            triples: self.triples,
        })
    }
}
