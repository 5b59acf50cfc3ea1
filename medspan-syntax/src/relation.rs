//! Universal-dependency relation tags.
//!
//! External parsers emit relation names as strings, optionally carrying a
//! colon-separated subtype qualifier (`nsubj:xsubj`, `obl:tmod`). The
//! pipeline only keys on the base relation, so lookup strips the qualifier
//! before consulting the table.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A Universal Dependencies v2 relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UdRelation {
    Acl,
    Advcl,
    Advmod,
    Amod,
    Appos,
    Aux,
    Case,
    Cc,
    Ccomp,
    Clf,
    Compound,
    Conj,
    Cop,
    Csubj,
    Dep,
    Det,
    Discourse,
    Dislocated,
    Expl,
    Fixed,
    Flat,
    Goeswith,
    Iobj,
    List,
    Mark,
    Nmod,
    Nsubj,
    Nummod,
    Obj,
    Obl,
    Orphan,
    Parataxis,
    Punct,
    Reparandum,
    Root,
    Vocative,
    Xcomp,
}

static RELATIONS: Lazy<HashMap<&'static str, UdRelation>> = Lazy::new(|| {
    use UdRelation::*;

    let mut table = HashMap::new();
    for (name, relation) in [
        ("acl", Acl),
        ("advcl", Advcl),
        ("advmod", Advmod),
        ("amod", Amod),
        ("appos", Appos),
        ("aux", Aux),
        ("case", Case),
        ("cc", Cc),
        ("ccomp", Ccomp),
        ("clf", Clf),
        ("compound", Compound),
        ("conj", Conj),
        ("cop", Cop),
        ("csubj", Csubj),
        ("dep", Dep),
        ("det", Det),
        ("discourse", Discourse),
        ("dislocated", Dislocated),
        ("expl", Expl),
        ("fixed", Fixed),
        ("flat", Flat),
        ("goeswith", Goeswith),
        ("iobj", Iobj),
        ("list", List),
        ("mark", Mark),
        ("nmod", Nmod),
        ("nsubj", Nsubj),
        ("nummod", Nummod),
        ("obj", Obj),
        ("obl", Obl),
        ("orphan", Orphan),
        ("parataxis", Parataxis),
        ("punct", Punct),
        ("reparandum", Reparandum),
        ("root", Root),
        ("vocative", Vocative),
        ("xcomp", Xcomp),
        // v1 names still emitted by older parser models
        ("dobj", Obj),
        ("nsubjpass", Nsubj),
        ("csubjpass", Csubj),
        ("auxpass", Aux),
        ("neg", Advmod),
        ("mwe", Fixed),
    ] {
        table.insert(name, relation);
    }
    table
});

impl UdRelation {
    /// Look up a relation by the name an external parser reports.
    ///
    /// A `:`-separated subtype qualifier, if present, is stripped first, so
    /// `"nsubj:xsubj"` and `"nsubj"` resolve to the same tag. Returns `None`
    /// for names outside the mapping table.
    pub fn from_short_name(name: &str) -> Option<UdRelation> {
        let short = name.split_once(':').map_or(name, |(base, _)| base);
        RELATIONS.get(short).copied()
    }

    /// The canonical lowercase relation name.
    pub fn name(&self) -> &'static str {
        use UdRelation::*;
        match self {
            Acl => "acl",
            Advcl => "advcl",
            Advmod => "advmod",
            Amod => "amod",
            Appos => "appos",
            Aux => "aux",
            Case => "case",
            Cc => "cc",
            Ccomp => "ccomp",
            Clf => "clf",
            Compound => "compound",
            Conj => "conj",
            Cop => "cop",
            Csubj => "csubj",
            Dep => "dep",
            Det => "det",
            Discourse => "discourse",
            Dislocated => "dislocated",
            Expl => "expl",
            Fixed => "fixed",
            Flat => "flat",
            Goeswith => "goeswith",
            Iobj => "iobj",
            List => "list",
            Mark => "mark",
            Nmod => "nmod",
            Nsubj => "nsubj",
            Nummod => "nummod",
            Obj => "obj",
            Obl => "obl",
            Orphan => "orphan",
            Parataxis => "parataxis",
            Punct => "punct",
            Reparandum => "reparandum",
            Root => "root",
            Vocative => "vocative",
            Xcomp => "xcomp",
        }
    }
}

impl std::fmt::Display for UdRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
