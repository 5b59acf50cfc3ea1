//! Social-history candidate labels.
//!
//! Upstream classifiers mark sentences that mention substance use; the
//! parsing pipeline only reads these labels to decide which sentences are
//! worth the cost of a syntactic parse. Each candidate covers the whole
//! sentence it was detected in.

use medspan::{Label, Span};

/// A sentence flagged as mentioning alcohol use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlcoholCandidate {
    pub span: Span,
}

impl AlcoholCandidate {
    pub fn new(span: Span) -> Self {
        Self { span }
    }
}

impl Label for AlcoholCandidate {
    fn span(&self) -> Span {
        self.span
    }
}

/// A sentence flagged as mentioning drug use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrugCandidate {
    pub span: Span,
}

impl DrugCandidate {
    pub fn new(span: Span) -> Self {
        Self { span }
    }
}

impl Label for DrugCandidate {
    fn span(&self) -> Span {
        self.span
    }
}

/// A sentence flagged as mentioning nicotine use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NicotineCandidate {
    pub span: Span,
}

impl NicotineCandidate {
    pub fn new(span: Span) -> Self {
        Self { span }
    }
}

impl Label for NicotineCandidate {
    fn span(&self) -> Span {
        self.span
    }
}

/// The candidate categories a [`crate::SocialHistoryParser`] can gate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    Alcohol,
    Drug,
    Nicotine,
}

impl CandidateKind {
    /// All candidate categories, the default gate.
    pub const ALL: [CandidateKind; 3] = [
        CandidateKind::Alcohol,
        CandidateKind::Drug,
        CandidateKind::Nicotine,
    ];
}
