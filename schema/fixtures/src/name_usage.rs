use crate::vocab;
use namedex_mapping::{
    analyzer::{AS_IS, AUTO_COMPLETE, FULL_TEXT, IGNORE_CASE},
    prelude::*,
};

///
/// The name usage document: one accepted name, synonym or bare name
/// together with its classification, flattened for the search index.
/// Exercises every mapping facility the fixtures cover, so most test
/// surfaces build on this shape.
///

/// Identifier scalar; storage resolves through the parent chain.
pub static TAXON_ID: TypeShape = TypeShape {
    name: "TaxonId",
    kind: ShapeKind::Struct,
    parent: Some(&builtin::STRING),
    members: &[],
};

/// Lower-cased and normalized spellings of the name parts, kept for
/// prefix matching in the suggestion service.
pub static NAME_STRINGS: TypeShape = TypeShape {
    name: "NameStrings",
    kind: ShapeKind::Struct,
    parent: None,
    members: &[
        Member::field("genus", MemberValue::one(&builtin::STRING)).with_config(MemberConfig {
            analyzers: Some(&[AS_IS, AUTO_COMPLETE]),
            ..MemberConfig::NONE
        }),
        Member::field("epithet", MemberValue::one(&builtin::STRING)).with_config(MemberConfig {
            analyzers: Some(&[AS_IS, AUTO_COMPLETE]),
            ..MemberConfig::NONE
        }),
    ],
};

/// One rank/name pair on the classification path.
pub static MONOMIAL: TypeShape = TypeShape {
    name: "Monomial",
    kind: ShapeKind::Struct,
    parent: None,
    members: &[
        Member::field("rank", MemberValue::one(&vocab::RANK)),
        Member::field("name", MemberValue::one(&builtin::STRING)),
    ],
};

/// Editorial decision attached to the usage.
pub static DECISION: TypeShape = TypeShape {
    name: "Decision",
    kind: ShapeKind::Struct,
    parent: None,
    members: &[
        Member::field("dataset_key", MemberValue::one(&builtin::I32)),
        Member::field("mode", MemberValue::one(&vocab::DECISION_MODE)),
    ],
};

/// Base document members shared by every indexed usage kind.
pub static USAGE_BASE: TypeShape = TypeShape {
    name: "UsageBase",
    kind: ShapeKind::Struct,
    parent: None,
    members: &[
        // Search-engine metadata, never part of the document body.
        Member::constant("index_name", MemberValue::one(&builtin::STRING)),
        Member::field("document_id", MemberValue::one(&builtin::STRING)).with_config(
            MemberConfig {
                skip: true,
                ..MemberConfig::NONE
            },
        ),
        Member::field("label", MemberValue::one(&builtin::STRING)),
        Member::field("created", MemberValue::one(&builtin::DATETIME)),
        Member::field("modified", MemberValue::opt(&builtin::DATETIME)),
    ],
};

pub static NAME_USAGE: TypeShape = TypeShape {
    name: "NameUsage",
    kind: ShapeKind::Struct,
    parent: Some(&USAGE_BASE),
    members: &[
        Member::field("usage_id", MemberValue::one(&TAXON_ID)),
        Member::field("dataset_key", MemberValue::one(&builtin::I32)).with_config(MemberConfig {
            map_to: Some(&builtin::STRING),
            ..MemberConfig::NONE
        }),
        Member::field("publisher_key", MemberValue::opt(&builtin::UUID)),
        // Computed scientific name plus authorship; overrides the stored
        // base label and feeds the suggestion service.
        Member::accessor("label", MemberValue::one(&builtin::STRING)).with_config(MemberConfig {
            analyzers: Some(&[AS_IS, AUTO_COMPLETE]),
            ..MemberConfig::NONE
        }),
        Member::field("scientific_name", MemberValue::one(&builtin::STRING)).with_config(
            MemberConfig {
                analyzers: Some(&[AS_IS, FULL_TEXT, IGNORE_CASE, AUTO_COMPLETE]),
                ..MemberConfig::NONE
            },
        ),
        // Facet field; the raw keyword carries every query.
        Member::field("authorship", MemberValue::many(&builtin::STRING)),
        // Searchable only through its views; the raw value is not.
        Member::field("authorship_complete", MemberValue::opt(&builtin::STRING)).with_config(
            MemberConfig {
                analyzers: Some(&[IGNORE_CASE, AUTO_COMPLETE]),
                ..MemberConfig::NONE
            },
        ),
        Member::field("rank", MemberValue::one(&vocab::RANK)),
        Member::field("status", MemberValue::one(&vocab::TAXONOMIC_STATUS)),
        Member::field("nom_code", MemberValue::opt(&vocab::NOM_CODE)),
        Member::field("issues", MemberValue::many(&vocab::ISSUE)),
        Member::field("extinct", MemberValue::opt(&builtin::BOOL)),
        Member::field("name_strings", MemberValue::one(&NAME_STRINGS)),
        Member::field("classification_ids", MemberValue::many(&TAXON_ID)).with_config(
            MemberConfig {
                analyzers: Some(&[AS_IS]),
                ..MemberConfig::NONE
            },
        ),
        // Queried as a flat object path, never with nested queries.
        Member::field("classification", MemberValue::many(&MONOMIAL)).with_config(MemberConfig {
            not_nested: true,
            ..MemberConfig::NONE
        }),
        // Nested documents; queries must use nested query logic.
        Member::field("decisions", MemberValue::many(&DECISION)),
        Member::field("accepted_name", MemberValue::opt(&builtin::STRING)).with_config(
            MemberConfig {
                not_indexed: true,
                ..MemberConfig::NONE
            },
        ),
        // Zipped source record; stored for retrieval, never searched.
        Member::field("payload", MemberValue::one(&builtin::STRING)).with_config(MemberConfig {
            not_indexed: true,
            ..MemberConfig::NONE
        }),
    ],
};

///
/// NameUsageDoc
///

pub struct NameUsageDoc;

impl DocumentKind for NameUsageDoc {
    fn shape() -> &'static TypeShape {
        &NAME_USAGE
    }
}
