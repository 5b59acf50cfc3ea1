//! Token-level labels shared by the pipeline crates.

use crate::{Label, Span};

/// A single token as the syntactic layer consumes it.
///
/// Identity within a sentence is positional: the linearizer refers to tokens
/// by their index in the sentence's token sequence, not by span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseToken {
    pub span: Span,
    pub text: String,
}

impl ParseToken {
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }
}

impl Label for ParseToken {
    fn span(&self) -> Span {
        self.span
    }
}

/// A part-of-speech tag covering one token.
///
/// The tag text is opaque here; it is passed through to the external parser
/// model untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosTag {
    pub span: Span,
    pub tag: String,
}

impl PosTag {
    pub fn new(span: Span, tag: impl Into<String>) -> Self {
        Self {
            span,
            tag: tag.into(),
        }
    }
}

impl Label for PosTag {
    fn span(&self) -> Span {
        self.span
    }
}

/// A detected sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence {
    pub span: Span,
}

impl Sentence {
    pub fn new(span: Span) -> Self {
        Self { span }
    }
}

impl Label for Sentence {
    fn span(&self) -> Span {
        self.span
    }
}
