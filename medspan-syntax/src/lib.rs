//! Dependency-parse labels for the medspan pipeline.
//!
//! An external parser produces typed-dependency triples over a sentence's
//! tokens; this crate converts them into the pipeline's own label types:
//! head-linked [`Dependency`] edges and a [`DependencyParse`] marker for the
//! sentence root. The conversion ([`label_dependency_parse`]) resolves the
//! unordered triples in topological order from the root, so every emitted
//! edge's head reference already exists.

mod conllu;
mod dependency;
mod display;
mod linearize;
mod relation;

pub use conllu::{read_sentences, ConlluError, ConlluSentence};
pub use dependency::{Dependency, DependencyParse, TypedDependency};
pub use display::DependencyTreeDisplay;
pub use linearize::{label_dependency_parse, GraphError};
pub use relation::UdRelation;
