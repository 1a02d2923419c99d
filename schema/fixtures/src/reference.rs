use namedex_mapping::{
    analyzer::{AS_IS, FULL_TEXT},
    prelude::*,
};

///
/// The bibliographic reference document. A flat shape with no
/// inheritance and no embedded documents; the small counterpart to the
/// name usage fixture.
///

pub static REFERENCE: TypeShape = TypeShape {
    name: "Reference",
    kind: ShapeKind::Struct,
    parent: None,
    members: &[
        Member::field("reference_id", MemberValue::one(&builtin::STRING)),
        Member::field("dataset_key", MemberValue::one(&builtin::I32)),
        Member::field("citation", MemberValue::one(&builtin::STRING)).with_config(MemberConfig {
            analyzers: Some(&[AS_IS, FULL_TEXT]),
            ..MemberConfig::NONE
        }),
        Member::field("doi", MemberValue::opt(&builtin::URI)),
        Member::field("year", MemberValue::opt(&builtin::I32)),
        Member::field("created", MemberValue::one(&builtin::DATETIME)),
    ],
};

///
/// ReferenceDoc
///

pub struct ReferenceDoc;

impl DocumentKind for ReferenceDoc {
    fn shape() -> &'static TypeShape {
        &REFERENCE
    }
}
