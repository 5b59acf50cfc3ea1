//! Dependency label types.

use std::sync::Arc;

use medspan::{Label, ParseToken, Span};
use serde::{Deserialize, Serialize};

use crate::UdRelation;

/// One typed-dependency triple as an external parser reports it.
///
/// Token indices are 1-based positions within the sentence; index
/// [`TypedDependency::ROOT_SENTINEL`] denotes the absence of a real token
/// (no governor, or a synthetic root triple with no dependent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedDependency {
    pub governor: usize,
    pub dependent: usize,
    pub relation: String,
}

impl TypedDependency {
    /// The 1-based index meaning "no token".
    pub const ROOT_SENTINEL: usize = 0;

    pub fn new(governor: usize, dependent: usize, relation: impl Into<String>) -> Self {
        Self {
            governor,
            dependent,
            relation: relation.into(),
        }
    }
}

/// A head-linked dependency edge over one token.
///
/// `head` is `None` for the sentence root. For every other edge it points at
/// an edge resolved earlier in the same sentence pass, so following `head`
/// always walks toward the root and terminates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub dep: ParseToken,
    pub relation: UdRelation,
    pub head: Option<Arc<Dependency>>,
}

impl Dependency {
    /// Returns true if this edge has no governor.
    pub fn is_root(&self) -> bool {
        self.head.is_none()
    }

    /// The governing token, if any.
    pub fn head_token(&self) -> Option<&ParseToken> {
        self.head.as_deref().map(|head| &head.dep)
    }
}

impl Label for Dependency {
    fn span(&self) -> Span {
        self.dep.span
    }
}

/// Marks the syntactic root token of a parsed sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyParse {
    pub sentence: Span,
    pub root: ParseToken,
}

impl DependencyParse {
    pub fn new(sentence: Span, root: ParseToken) -> Self {
        Self { sentence, root }
    }
}

impl Label for DependencyParse {
    fn span(&self) -> Span {
        self.sentence
    }
}
