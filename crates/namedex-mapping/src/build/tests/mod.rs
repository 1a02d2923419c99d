
use crate::{
    build::{EnumMode, MappingConfig, build},
    error::MappingError,
    node::Mapping,
    shape::{Member, MemberConfig, MemberValue, ShapeKind, TypeShape, builtin},
    types::EsType,
};

fn build_ok(shape: &'static TypeShape) -> Mapping {
    build(shape, &MappingConfig::default()).unwrap()
}

static RANK: TypeShape = TypeShape::enumeration("Rank");

static TAXON_ID: TypeShape = TypeShape {
    name: "TaxonId",
    kind: ShapeKind::Struct,
    parent: Some(&builtin::STRING),
    members: &[],
};

static MONOMIAL: TypeShape = TypeShape {
    name: "Monomial",
    kind: ShapeKind::Struct,
    parent: None,
    members: &[
        Member::field("rank", MemberValue::one(&RANK)),
        Member::field("name", MemberValue::one(&builtin::STRING)),
    ],
};

#[test]
fn primitive_members_map_to_simple_leaves() {
    static SPECIMEN: TypeShape = TypeShape {
        name: "Specimen",
        kind: ShapeKind::Struct,
        parent: None,
        members: &[
            Member::field("extinct", MemberValue::opt(&builtin::BOOL)),
            Member::field("year", MemberValue::one(&builtin::I32)),
            Member::field("confidence", MemberValue::one(&builtin::F64)),
            Member::field("collected", MemberValue::one(&builtin::DATE)),
        ],
    };

    let mapping = build_ok(&SPECIMEN);
    assert_eq!(mapping.doc_type(), "Specimen");

    assert_eq!(mapping.field("extinct").unwrap().es_type(), EsType::Boolean);
    assert_eq!(mapping.field("year").unwrap().es_type(), EsType::Integer);
    assert_eq!(mapping.field("confidence").unwrap().es_type(), EsType::Double);
    assert_eq!(mapping.field("collected").unwrap().es_type(), EsType::Date);

    for name in ["extinct", "year", "confidence", "collected"] {
        assert!(!mapping.field(name).unwrap().is_multi_valued());
    }
}

#[test]
fn container_members_carry_the_multi_valued_tag() {
    static SYNONYMY: TypeShape = TypeShape {
        name: "Synonymy",
        kind: ShapeKind::Struct,
        parent: None,
        members: &[
            Member::field("ids", MemberValue::many(&builtin::STRING)),
            Member::field("years", MemberValue::many(&builtin::I32)),
        ],
    };

    let mapping = build_ok(&SYNONYMY);

    let ids = mapping.field("ids").unwrap();
    assert_eq!(ids.es_type(), EsType::Keyword);
    assert!(ids.is_multi_valued());

    let years = mapping.field("years").unwrap();
    assert_eq!(years.es_type(), EsType::Integer);
    assert!(years.is_multi_valued());
}

#[test]
fn identifier_shapes_resolve_through_their_parent_chain() {
    static TAXON: TypeShape = TypeShape {
        name: "Taxon",
        kind: ShapeKind::Struct,
        parent: None,
        members: &[
            Member::field("id", MemberValue::one(&TAXON_ID)),
            // Self-referential by value, not by embedding; this is legal.
            Member::field("parent_id", MemberValue::one(&TAXON_ID)),
        ],
    };

    let mapping = build_ok(&TAXON);
    assert_eq!(mapping.field("id").unwrap().es_type(), EsType::Keyword);
    assert_eq!(mapping.field("parent_id").unwrap().es_type(), EsType::Keyword);
}

#[test]
fn enum_members_follow_the_global_policy() {
    static USAGE: TypeShape = TypeShape {
        name: "Usage",
        kind: ShapeKind::Struct,
        parent: None,
        members: &[
            Member::field("rank", MemberValue::one(&RANK)),
            Member::field("issues", MemberValue::many(&RANK)),
        ],
    };

    let by_name = build_ok(&USAGE);
    assert_eq!(by_name.field("rank").unwrap().es_type(), EsType::Keyword);
    let issues = by_name.field("issues").unwrap();
    assert_eq!(issues.es_type(), EsType::Keyword);
    assert!(issues.is_multi_valued());

    let config = MappingConfig {
        enums: EnumMode::Ordinal,
    };
    let by_ordinal = build(&USAGE, &config).unwrap();
    assert_eq!(by_ordinal.field("rank").unwrap().es_type(), EsType::Integer);
    assert!(by_ordinal.field("issues").unwrap().is_multi_valued());
}

#[test]
fn map_to_overrides_storage_but_not_cardinality() {
    static DATASET: TypeShape = TypeShape {
        name: "Dataset",
        kind: ShapeKind::Struct,
        parent: None,
        members: &[
            Member::field("key", MemberValue::one(&builtin::I32)).with_config(MemberConfig {
                map_to: Some(&builtin::STRING),
                ..MemberConfig::NONE
            }),
            Member::field("source_keys", MemberValue::many(&builtin::I32)).with_config(
                MemberConfig {
                    map_to: Some(&builtin::STRING),
                    ..MemberConfig::NONE
                },
            ),
        ],
    };

    let mapping = build_ok(&DATASET);

    let key = mapping.field("key").unwrap();
    assert_eq!(key.es_type(), EsType::Keyword);
    assert!(!key.is_multi_valued());

    let source_keys = mapping.field("source_keys").unwrap();
    assert_eq!(source_keys.es_type(), EsType::Keyword);
    assert!(source_keys.is_multi_valued());
}

#[test]
fn not_indexed_reaches_simple_leaves_too() {
    static AUDIT: TypeShape = TypeShape {
        name: "Audit",
        kind: ShapeKind::Struct,
        parent: None,
        members: &[Member::field("imported", MemberValue::one(&builtin::DATETIME)).with_config(
            MemberConfig {
                not_indexed: true,
                ..MemberConfig::NONE
            },
        )],
    };

    let mapping = build_ok(&AUDIT);
    let imported = mapping.field("imported").unwrap().as_simple().unwrap();
    assert_eq!(imported.es_type, EsType::Date);
    assert_eq!(imported.index, Some(false));
}

#[test]
fn container_of_complex_maps_nested_singular_maps_object() {
    static NAME_USAGE: TypeShape = TypeShape {
        name: "NameUsage",
        kind: ShapeKind::Struct,
        parent: None,
        members: &[
            Member::field("name", MemberValue::one(&MONOMIAL)),
            Member::field("classification", MemberValue::many(&MONOMIAL)),
        ],
    };

    let mapping = build_ok(&NAME_USAGE);

    let name = mapping.field("name").unwrap().as_complex().unwrap();
    assert_eq!(name.es_type, EsType::Object);
    assert!(!name.multi_valued);

    let classification = mapping.field("classification").unwrap().as_complex().unwrap();
    assert_eq!(classification.es_type, EsType::Nested);
    assert!(classification.multi_valued);
    assert_eq!(
        mapping.field("classification.name").unwrap().es_type(),
        EsType::Keyword
    );
}

#[test]
fn not_nested_downgrades_a_container_to_object() {
    static DECISIONS: TypeShape = TypeShape {
        name: "Decisions",
        kind: ShapeKind::Struct,
        parent: None,
        members: &[Member::field("entries", MemberValue::many(&MONOMIAL)).with_config(
            MemberConfig {
                not_nested: true,
                ..MemberConfig::NONE
            },
        )],
    };

    let mapping = build_ok(&DECISIONS);
    let entries = mapping.field("entries").unwrap().as_complex().unwrap();
    assert_eq!(entries.es_type, EsType::Object);
    assert!(entries.multi_valued);
}

#[test]
fn direct_self_embedding_fails_at_the_offending_member() {
    static TREE: TypeShape = TypeShape {
        name: "Tree",
        kind: ShapeKind::Struct,
        parent: None,
        members: &[
            Member::field("label", MemberValue::one(&builtin::STRING)),
            Member::field("child", MemberValue::one(&TREE)),
        ],
    };

    let err = build(&TREE, &MappingConfig::default()).unwrap_err();
    assert_eq!(
        err,
        MappingError::CircularEmbedding {
            path: "child".to_string(),
            type_name: "Tree",
        }
    );
}

#[test]
fn transitive_embedding_cycle_names_the_root_type() {
    static USAGE: TypeShape = TypeShape {
        name: "Usage",
        kind: ShapeKind::Struct,
        parent: None,
        members: &[
            Member::field("id", MemberValue::one(&builtin::STRING)),
            Member::field("classification", MemberValue::many(&CLASSIFICATION)),
        ],
    };
    static CLASSIFICATION: TypeShape = TypeShape {
        name: "Classification",
        kind: ShapeKind::Struct,
        parent: None,
        members: &[Member::field("usage", MemberValue::one(&USAGE))],
    };

    let err = build(&USAGE, &MappingConfig::default()).unwrap_err();
    assert_eq!(
        err,
        MappingError::CircularEmbedding {
            path: "classification.usage".to_string(),
            type_name: "Usage",
        }
    );
}

#[test]
fn the_same_shape_on_parallel_branches_is_not_a_cycle() {
    static BASIONYM: TypeShape = TypeShape {
        name: "Basionym",
        kind: ShapeKind::Struct,
        parent: None,
        members: &[
            Member::field("accepted", MemberValue::one(&MONOMIAL)),
            Member::field("original", MemberValue::one(&MONOMIAL)),
        ],
    };

    let mapping = build_ok(&BASIONYM);
    assert!(mapping.field("accepted.name").is_some());
    assert!(mapping.field("original.name").is_some());
}

#[test]
fn root_mapping_is_strict_and_keeps_its_shape_identity() {
    let mapping = build_ok(&MONOMIAL);
    assert_eq!(mapping.shape_id(), MONOMIAL.id());

    let json = serde_json::to_string(&mapping).unwrap();
    assert!(json.starts_with(r#"{"dynamic":"strict","properties":{"#));
}
