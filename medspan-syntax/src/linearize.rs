//! Linearization of a typed-dependency graph into head-linked labels.
//!
//! External parsers hand over an unordered bag of (governor, dependent,
//! relation) triples. To label them as [`Dependency`] edges whose `head`
//! references are always already-resolved, the triples are worked off a
//! double-ended queue in topological order from the root: a triple whose
//! governor has not been resolved yet goes to the back of the queue instead
//! of blocking the pass.

use std::collections::VecDeque;
use std::sync::Arc;

use medspan::{Labeler, ParseToken, Span};
use thiserror::Error;

use crate::{Dependency, DependencyParse, TypedDependency, UdRelation};

/// Errors raised while linearizing a sentence's dependency triples.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A triple's dependent index points outside the sentence's tokens.
    #[error("dependent index {dependent} outside sentence of {token_count} tokens")]
    TokenOutOfRange {
        dependent: usize,
        token_count: usize,
    },

    /// A governor index is never resolvable: it appears as no triple's
    /// dependent and is not the root sentinel, or the triples form a cycle.
    #[error("malformed dependency graph: governor {governor} cannot be resolved")]
    MalformedGraph { governor: usize },

    /// The parser reported a relation name outside the mapping table.
    #[error("unknown dependency relation {name:?}")]
    UnknownRelation { name: String },
}

/// Convert `triples` into head-linked [`Dependency`] labels.
///
/// Every resolved triple emits exactly one edge to `dependency_labeler`; a
/// triple whose unqualified relation is `root` additionally emits a
/// [`DependencyParse`] to `root_labeler`. Sink order follows resolution
/// order, not input order. Triples whose dependent is the root sentinel are
/// discarded.
///
/// Input that can never resolve (a cycle, or a governor that is neither the
/// sentinel nor any triple's dependent) is detected after one full
/// revolution of the queue without progress and reported as
/// [`GraphError::MalformedGraph`].
///
/// # Example
///
/// ```
/// use medspan::{create_tokens_from_string, Span, VecLabeler};
/// use medspan_syntax::{label_dependency_parse, TypedDependency};
///
/// let tokens = create_tokens_from_string("She smokes");
/// let triples = vec![
///     TypedDependency::new(2, 1, "nsubj"),
///     TypedDependency::new(0, 2, "root"),
/// ];
/// let mut dependencies = VecLabeler::new();
/// let mut roots = VecLabeler::new();
/// label_dependency_parse(&triples, Span::new(0, 10), &tokens, &mut dependencies, &mut roots)?;
///
/// assert_eq!(dependencies.labels().len(), 2);
/// assert_eq!(roots.labels()[0].root.text, "smokes");
/// # Ok::<(), medspan_syntax::GraphError>(())
/// ```
pub fn label_dependency_parse(
    triples: &[TypedDependency],
    sentence: Span,
    tokens: &[ParseToken],
    dependency_labeler: &mut impl Labeler<Dependency>,
    root_labeler: &mut impl Labeler<DependencyParse>,
) -> Result<(), GraphError> {
    // Resolved edges keyed by 0-based dependent index; lookups scan at most
    // one sentence's edges.
    let mut resolved: Vec<(usize, Arc<Dependency>)> = Vec::with_capacity(triples.len());
    let mut queue: VecDeque<&TypedDependency> = triples.iter().collect();
    let mut stalled = 0usize;

    while let Some(triple) = queue.pop_front() {
        if triple.dependent == TypedDependency::ROOT_SENTINEL {
            continue;
        }
        let dep_index = triple.dependent - 1;

        let head = if triple.governor == TypedDependency::ROOT_SENTINEL {
            None
        } else {
            let gov_index = triple.governor - 1;
            match resolved.iter().find(|(index, _)| *index == gov_index) {
                Some((_, governor)) => Some(Arc::clone(governor)),
                None => {
                    // Not resolvable yet; defer. Once every queued triple has
                    // been deferred in a row, no further progress is possible.
                    stalled += 1;
                    if stalled > queue.len() + 1 {
                        return Err(GraphError::MalformedGraph {
                            governor: triple.governor,
                        });
                    }
                    queue.push_back(triple);
                    continue;
                }
            }
        };
        stalled = 0;

        let dep = tokens
            .get(dep_index)
            .cloned()
            .ok_or(GraphError::TokenOutOfRange {
                dependent: triple.dependent,
                token_count: tokens.len(),
            })?;

        let relation = UdRelation::from_short_name(&triple.relation).ok_or_else(|| {
            GraphError::UnknownRelation {
                name: triple.relation.clone(),
            }
        })?;

        if relation == UdRelation::Root {
            root_labeler.add(DependencyParse::new(sentence, dep.clone()));
        }

        let dependency = Arc::new(Dependency {
            dep,
            relation,
            head,
        });
        dependency_labeler.add(Dependency::clone(&dependency));
        resolved.push((dep_index, dependency));
    }

    Ok(())
}
