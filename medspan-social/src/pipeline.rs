//! Candidate-gated dependency parsing over a document's sentences.

use medspan::{Label, LabelIndex, Labeler, ParseToken, PosTag, Sentence, Span};
use medspan_syntax::{label_dependency_parse, Dependency, DependencyParse, GraphError};
use thiserror::Error;

use crate::{
    AlcoholCandidate, CandidateKind, DependencyParser, DrugCandidate, NicotineCandidate,
};

/// Errors raised while processing a document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The external parser model failed on a sentence.
    #[error("dependency parser failed on sentence {sentence}: {source}")]
    Parser {
        sentence: Span,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The parser's triples could not be linearized.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// The label indexes the social-history parser reads.
///
/// In a full deployment these come out of the document store; tests build
/// them directly.
#[derive(Debug)]
pub struct SocialHistoryView {
    pub sentences: LabelIndex<Sentence>,
    pub tokens: LabelIndex<ParseToken>,
    pub pos_tags: LabelIndex<PosTag>,
    pub alcohol_candidates: LabelIndex<AlcoholCandidate>,
    pub drug_candidates: LabelIndex<DrugCandidate>,
    pub nicotine_candidates: LabelIndex<NicotineCandidate>,
}

/// Parses the sentences flagged by the social-history candidate classifiers.
///
/// For each sentence covered by a candidate of a gated kind, the sentence's
/// tokens and tags go to the external parser model, and the resulting triples
/// are linearized into [`Dependency`] and [`DependencyParse`] labels. All
/// other sentences are skipped untouched.
pub struct SocialHistoryParser<P> {
    model: P,
    gate: Vec<CandidateKind>,
}

impl<P: DependencyParser> SocialHistoryParser<P> {
    /// Gate on all candidate kinds.
    pub fn new(model: P) -> Self {
        Self {
            model,
            gate: CandidateKind::ALL.to_vec(),
        }
    }

    /// Restrict parsing to sentences flagged by the given candidate kinds.
    pub fn with_candidate_kinds(mut self, kinds: &[CandidateKind]) -> Self {
        self.gate = kinds.to_vec();
        self
    }

    fn is_candidate(&self, view: &SocialHistoryView, sentence: &Sentence) -> bool {
        self.gate.iter().any(|kind| match kind {
            CandidateKind::Alcohol => view.alcohol_candidates.contains_span(&sentence.span),
            CandidateKind::Drug => view.drug_candidates.contains_span(&sentence.span),
            CandidateKind::Nicotine => view.nicotine_candidates.contains_span(&sentence.span),
        })
    }

    /// Run over every candidate sentence, writing edges and root markers to
    /// the given sinks.
    pub fn process(
        &self,
        view: &SocialHistoryView,
        dependency_labeler: &mut impl Labeler<Dependency>,
        root_labeler: &mut impl Labeler<DependencyParse>,
    ) -> Result<(), ParseError> {
        for sentence in view.sentences.iter() {
            if !self.is_candidate(view, sentence) {
                continue;
            }

            let tokens: Vec<ParseToken> = view.tokens.inside(&sentence.span).cloned().collect();
            let pos_tags: Vec<PosTag> = view.pos_tags.inside(&sentence.span).cloned().collect();

            let triples =
                self.model
                    .parse(&tokens, &pos_tags)
                    .map_err(|source| ParseError::Parser {
                        sentence: sentence.span(),
                        source: Box::new(source),
                    })?;

            label_dependency_parse(
                &triples,
                sentence.span(),
                &tokens,
                dependency_labeler,
                root_labeler,
            )?;
        }
        Ok(())
    }
}
