//! The seam to the external dependency parser model.

use std::collections::HashMap;

use medspan::{ParseToken, PosTag};
use medspan_syntax::TypedDependency;
use thiserror::Error;

/// An external model that parses one sentence into typed-dependency triples.
///
/// Implementations wrap whatever parser the deployment uses; the pipeline
/// only sees the triples. Token indices in the returned triples are 1-based,
/// with 0 as the root sentinel.
pub trait DependencyParser {
    type Error: std::error::Error + Send + Sync + 'static;

    fn parse(
        &self,
        tokens: &[ParseToken],
        pos_tags: &[PosTag],
    ) -> Result<Vec<TypedDependency>, Self::Error>;
}

/// Map-backed [`DependencyParser`] for tests and fixtures.
///
/// Parses are keyed by the sentence's space-joined token text; a sentence
/// without a registered parse is an error, so tests notice unexpected parser
/// invocations.
#[derive(Debug, Clone, Default)]
pub struct FixtureParser {
    parses: HashMap<String, Vec<TypedDependency>>,
}

impl FixtureParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the parse for one sentence.
    pub fn with_parse(mut self, sentence: &str, triples: Vec<TypedDependency>) -> Self {
        self.parses.insert(sentence.to_string(), triples);
        self
    }

    fn key(tokens: &[ParseToken]) -> String {
        tokens
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// No parse was registered for a sentence handed to a [`FixtureParser`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no parse fixture for sentence {sentence:?}")]
pub struct MissingParse {
    pub sentence: String,
}

impl DependencyParser for FixtureParser {
    type Error = MissingParse;

    fn parse(
        &self,
        tokens: &[ParseToken],
        _pos_tags: &[PosTag],
    ) -> Result<Vec<TypedDependency>, Self::Error> {
        let key = Self::key(tokens);
        self.parses
            .get(&key)
            .cloned()
            .ok_or(MissingParse { sentence: key })
    }
}
