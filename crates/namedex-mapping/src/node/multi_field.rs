use crate::types::EsType;
use serde::Serialize;

///
/// MultiField
///
/// A named secondary view of a keyword leaf, fixed to text-with-analyzer
/// semantics. Never root-addressable; always reached through the owning
/// keyword node. The catalog below is closed.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct MultiField {
    /// Sub-view key under the owning node; the serialized map key.
    #[serde(skip)]
    pub name: &'static str,

    #[serde(rename = "type")]
    pub es_type: EsType,

    /// `None` leaves the engine's standard analysis in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<&'static str>,
}

impl MultiField {
    /// Engine-default full-text analysis.
    pub const FULL_TEXT: Self = Self {
        name: "full_text",
        es_type: EsType::Text,
        analyzer: None,
    };

    /// Case-insensitive exact matching.
    pub const IGNORE_CASE: Self = Self {
        name: "ic",
        es_type: EsType::Text,
        analyzer: Some("ignore_case"),
    };

    /// Edge n-gram prefix matching.
    pub const AUTO_COMPLETE: Self = Self {
        name: "ac",
        es_type: EsType::Text,
        analyzer: Some("autocomplete"),
    };
}

///
/// TESTS
///
