use crate::{
    node::{KeywordNode, MultiField},
    shape::Member,
};

///
/// Analyzer variants
///
/// The closed vocabulary members may declare. `AS_IS` keeps the raw
/// keyword queryable and contributes no multi-field; the rest name
/// catalog views.
///

pub const AS_IS: &str = "keyword";
pub const FULL_TEXT: &str = "full_text";
pub const IGNORE_CASE: &str = "ignore_case";
pub const AUTO_COMPLETE: &str = "autocomplete";

/// Catalog in canonical attach order. Declared sets attach in this
/// order regardless of how the metadata lists them, and duplicates
/// collapse, keeping the output deterministic.
const CATALOG: &[(&str, MultiField)] = &[
    (FULL_TEXT, MultiField::FULL_TEXT),
    (IGNORE_CASE, MultiField::IGNORE_CASE),
    (AUTO_COMPLETE, MultiField::AUTO_COMPLETE),
];

/// Catalog multi-field for a declared variant name.
#[must_use]
pub fn multi_field_for(variant: &str) -> Option<MultiField> {
    CATALOG
        .iter()
        .find(|(name, _)| *name == variant)
        .map(|(_, mf)| *mf)
}

fn is_variant(name: &str) -> bool {
    name == AS_IS || CATALOG.iter().any(|(v, _)| *v == name)
}

/// Apply a member's declared analysis to a keyword leaf.
///
/// `not_indexed` suppresses everything. A declared set without the
/// as-is variant leaves the raw value unsearchable; its views carry the
/// queries instead. No declaration (or an empty set) keeps the default:
/// indexed as-is, no views. Unknown variant names are dropped with a
/// warning since the schema silently differs from what was intended.
#[must_use]
pub fn compose(mut leaf: KeywordNode, member: &Member) -> KeywordNode {
    if member.config.not_indexed {
        leaf.index = Some(false);
        return leaf;
    }

    let Some(declared) = member.config.analyzers.filter(|names| !names.is_empty()) else {
        return leaf;
    };

    for unknown in declared.iter().filter(|name| !is_variant(name)) {
        log::warn!(
            "member '{}': unknown analyzer variant '{unknown}' ignored",
            member.name
        );
    }

    for (variant, multi_field) in CATALOG {
        if declared.contains(variant) {
            leaf.fields.insert(multi_field.name, *multi_field);
        }
    }

    if !declared.contains(&AS_IS) {
        leaf.index = Some(false);
    }

    leaf
}

///
/// TESTS
///
