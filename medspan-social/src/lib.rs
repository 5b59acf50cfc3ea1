//! Social-history dependency parsing for the medspan pipeline.
//!
//! Clinical notes mention substance use in a small fraction of their
//! sentences. Upstream classifiers flag those sentences with candidate
//! labels; this crate parses only the flagged sentences, handing each one's
//! tokens to an external [`DependencyParser`] and converting its output into
//! dependency labels via `medspan_syntax`.

mod candidates;
mod parser;
mod pipeline;

pub use candidates::{AlcoholCandidate, CandidateKind, DrugCandidate, NicotineCandidate};
pub use parser::{DependencyParser, FixtureParser, MissingParse};
pub use pipeline::{ParseError, SocialHistoryParser, SocialHistoryView};
