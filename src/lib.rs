//! Annotation primitives for the medspan clinical text pipeline.
//!
//! This crate holds the label model the member crates build on: byte-offset
//! [`Span`]s, token-level labels ([`ParseToken`], [`PosTag`], [`Sentence`]),
//! and the two container seams every processor works through: [`Labeler`]
//! output sinks and span-queryable [`LabelIndex`]es.
//!
//! Detection (sentence splitting, POS tagging, candidate classification) and
//! the document store live upstream; processors here only read indexes and
//! write labels.

mod label;
mod span;
mod token;
mod tokenize;

pub use label::{Label, LabelIndex, Labeler, VecLabeler};
pub use span::Span;
pub use token::{ParseToken, PosTag, Sentence};
pub use tokenize::create_tokens_from_string;
