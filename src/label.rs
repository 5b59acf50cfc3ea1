//! Label containers: append-only sinks and span-queryable indexes.
//!
//! These are the seams the pipeline crates consume. A processor reads its
//! inputs from [`LabelIndex`]es and writes its outputs through [`Labeler`]s;
//! it never owns a document.

use crate::Span;

/// Anything that labels a stretch of document text.
pub trait Label {
    fn span(&self) -> Span;
}

/// An append-only, order-preserving sink for one label type.
pub trait Labeler<T: Label> {
    fn add(&mut self, label: T);
}

/// In-memory [`Labeler`] that keeps labels in insertion order.
#[derive(Debug, Clone)]
pub struct VecLabeler<T> {
    labels: Vec<T>,
}

impl<T> VecLabeler<T> {
    pub fn new() -> Self {
        Self { labels: Vec::new() }
    }

    /// Labels in the order they were added.
    pub fn labels(&self) -> &[T] {
        &self.labels
    }

    pub fn into_labels(self) -> Vec<T> {
        self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<T> Default for VecLabeler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Label> Labeler<T> for VecLabeler<T> {
    fn add(&mut self, label: T) {
        self.labels.push(label);
    }
}

/// A read-only collection of one label type, queryable by span.
///
/// Labels are kept sorted by start offset so that `inside` returns results in
/// document order regardless of insertion order.
#[derive(Debug, Clone)]
pub struct LabelIndex<T> {
    labels: Vec<T>,
}

impl<T: Label> LabelIndex<T> {
    pub fn new(mut labels: Vec<T>) -> Self {
        labels.sort_by_key(|label| (label.span().start, label.span().end));
        Self { labels }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns true if some label in the index covers exactly `span`.
    ///
    /// Candidate labels cover whole sentences, so gating a sentence on its
    /// candidates is an exact-span lookup.
    pub fn contains_span(&self, span: &Span) -> bool {
        self.labels.iter().any(|label| label.span() == *span)
    }

    /// All labels lying entirely inside `span`, in document order.
    pub fn inside(&self, span: &Span) -> impl Iterator<Item = &T> {
        let span = *span;
        self.labels
            .iter()
            .filter(move |label| span.contains(&label.span()))
    }
}

impl<T: Label> FromIterator<T> for LabelIndex<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParseToken, Sentence};

    fn token(start: usize, end: usize, text: &str) -> ParseToken {
        ParseToken::new(Span::new(start, end), text)
    }

    #[test]
    fn vec_labeler_preserves_order() {
        let mut labeler = VecLabeler::new();
        labeler.add(token(5, 8, "dog"));
        labeler.add(token(0, 3, "the"));

        let texts: Vec<_> = labeler.labels().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["dog", "the"]);
    }

    #[test]
    fn index_sorts_by_start() {
        let index: LabelIndex<_> =
            vec![token(5, 8, "dog"), token(0, 3, "the"), token(9, 13, "runs")]
                .into_iter()
                .collect();

        let texts: Vec<_> = index.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["the", "dog", "runs"]);
    }

    #[test]
    fn inside_filters_to_span() {
        let index: LabelIndex<_> = vec![
            token(0, 3, "the"),
            token(4, 7, "dog"),
            token(8, 12, "runs"),
            token(13, 17, "home"),
        ]
        .into_iter()
        .collect();

        let inside: Vec<_> = index
            .inside(&Span::new(4, 12))
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(inside, ["dog", "runs"]);
    }

    #[test]
    fn contains_span_is_exact() {
        let index: LabelIndex<_> =
            vec![Sentence::new(Span::new(0, 20))].into_iter().collect();

        assert!(index.contains_span(&Span::new(0, 20)));
        assert!(!index.contains_span(&Span::new(0, 19)));
        assert!(!index.contains_span(&Span::new(1, 20)));
    }
}
