//! Behavioral tests for the dependency graph linearizer.

use medspan::{create_tokens_from_string, Span, VecLabeler};

use crate::{
    label_dependency_parse, Dependency, DependencyParse, DependencyTreeDisplay, GraphError,
    TypedDependency, UdRelation,
};

fn triple(governor: usize, dependent: usize, relation: &str) -> TypedDependency {
    TypedDependency::new(governor, dependent, relation)
}

fn linearize(
    triples: &[TypedDependency],
    text: &str,
) -> Result<(Vec<Dependency>, Vec<DependencyParse>), GraphError> {
    let tokens = create_tokens_from_string(text);
    let mut dependencies = VecLabeler::new();
    let mut roots = VecLabeler::new();
    label_dependency_parse(
        triples,
        Span::new(0, text.len()),
        &tokens,
        &mut dependencies,
        &mut roots,
    )?;
    Ok((dependencies.into_labels(), roots.into_labels()))
}

#[test]
fn resolves_in_topological_order_from_root() {
    // The root triple arrives second; the nsubj triple arrives first and must
    // be requeued until its governor exists.
    let triples = vec![
        triple(2, 1, "nsubj"),
        triple(0, 2, "root"),
        triple(2, 3, "obj"),
    ];
    let (dependencies, roots) = linearize(&triples, "one two three").unwrap();

    let emitted: Vec<_> = dependencies
        .iter()
        .map(|d| (d.dep.text.as_str(), d.relation))
        .collect();
    assert_eq!(
        emitted,
        [
            ("two", UdRelation::Root),
            ("three", UdRelation::Obj),
            ("one", UdRelation::Nsubj),
        ]
    );

    assert!(dependencies[0].is_root());
    assert_eq!(dependencies[1].head_token().unwrap().text, "two");
    assert_eq!(dependencies[2].head_token().unwrap().text, "two");

    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].root.text, "two");
}

#[test]
fn every_head_is_emitted_before_its_dependent() {
    // Deliberately anti-topological input order over a three-level tree.
    let triples = vec![
        triple(5, 4, "nummod"),
        triple(3, 5, "nmod:tmod"),
        triple(2, 3, "obj"),
        triple(2, 1, "nsubj"),
        triple(2, 7, "punct"),
        triple(5, 6, "case"),
        triple(0, 2, "root"),
    ];
    let (dependencies, _) = linearize(&triples, "She quit smoking two years ago .").unwrap();
    assert_eq!(dependencies.len(), 7);

    for (position, dependency) in dependencies.iter().enumerate() {
        if let Some(head) = dependency.head_token() {
            let head_position = dependencies
                .iter()
                .position(|other| other.dep.span == head.span)
                .expect("head must be emitted");
            assert!(
                head_position < position,
                "head {:?} emitted at {} but dependent {:?} at {}",
                head.text,
                head_position,
                dependency.dep.text,
                position
            );
        }
    }
}

#[test]
fn edge_count_matches_non_sentinel_dependents() {
    // The synthetic root triple (dependent = sentinel) contributes nothing.
    let triples = vec![
        triple(0, 0, "root"),
        triple(2, 1, "nsubj"),
        triple(0, 2, "root"),
        triple(2, 3, "obj"),
    ];
    let (dependencies, roots) = linearize(&triples, "one two three").unwrap();
    assert_eq!(dependencies.len(), 3);
    assert_eq!(roots.len(), 1);
}

#[test]
fn root_marker_requires_root_relation() {
    // A sentinel governor with a non-root relation yields a headless edge but
    // no root marker.
    let triples = vec![triple(0, 2, "root"), triple(0, 1, "dep")];
    let (dependencies, roots) = linearize(&triples, "one two").unwrap();

    assert_eq!(dependencies.len(), 2);
    assert!(dependencies.iter().all(|d| d.is_root()));
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].root.text, "two");
}

#[test]
fn no_marker_without_root_relation() {
    let triples = vec![triple(0, 1, "dep"), triple(1, 2, "conj")];
    let (dependencies, roots) = linearize(&triples, "one two").unwrap();
    assert_eq!(dependencies.len(), 2);
    assert!(roots.is_empty());
}

#[test]
fn qualified_relation_resolves_like_base() {
    let qualified = linearize(
        &[triple(0, 2, "root"), triple(2, 1, "nsubj:xsubj")],
        "one two",
    )
    .unwrap();
    let bare = linearize(&[triple(0, 2, "root"), triple(2, 1, "nsubj")], "one two").unwrap();

    assert_eq!(qualified.0[1].relation, UdRelation::Nsubj);
    assert_eq!(qualified.0[1].relation, bare.0[1].relation);
}

#[test]
fn unresolvable_governor_is_reported() {
    // Governor 5 is never any triple's dependent and is not the sentinel.
    let triples = vec![triple(0, 2, "root"), triple(5, 1, "nsubj")];
    let err = linearize(&triples, "one two").unwrap_err();
    assert_eq!(err, GraphError::MalformedGraph { governor: 5 });
}

#[test]
fn cyclic_input_is_reported() {
    let triples = vec![triple(2, 1, "conj"), triple(1, 2, "conj")];
    let err = linearize(&triples, "one two").unwrap_err();
    assert!(matches!(err, GraphError::MalformedGraph { .. }));
}

#[test]
fn dependent_outside_token_sequence_is_fatal() {
    let triples = vec![triple(0, 5, "root")];
    let err = linearize(&triples, "one two").unwrap_err();
    assert_eq!(
        err,
        GraphError::TokenOutOfRange {
            dependent: 5,
            token_count: 2
        }
    );
}

#[test]
fn unknown_relation_is_reported() {
    let triples = vec![triple(0, 1, "frobnicate")];
    let err = linearize(&triples, "one two").unwrap_err();
    assert_eq!(
        err,
        GraphError::UnknownRelation {
            name: "frobnicate".into()
        }
    );
}

#[test]
fn labels_clinical_sentence() {
    let text = "Patient denies alcohol use.";
    let tokens = create_tokens_from_string(text);
    let triples = vec![
        triple(2, 1, "nsubj"),
        triple(0, 2, "root"),
        triple(4, 3, "compound"),
        triple(2, 4, "obj"),
        triple(2, 5, "punct"),
    ];
    let mut dependencies = VecLabeler::new();
    let mut roots = VecLabeler::new();
    label_dependency_parse(
        &triples,
        Span::new(0, text.len()),
        &tokens,
        &mut dependencies,
        &mut roots,
    )
    .unwrap();

    let display = DependencyTreeDisplay::new(&tokens, dependencies.labels());
    insta::assert_snapshot!(display.to_string(), @r###"
    Patient  denies  alcohol  use  .
             ╰root
                              ╰obj─>denies
                                   ╰punct─>denies
    ╰nsubj─>denies
                     ╰compound─>use
    "###);

    let roots = roots.into_labels();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].root.text, "denies");
    assert_eq!(roots[0].sentence, Span::new(0, text.len()));
}
