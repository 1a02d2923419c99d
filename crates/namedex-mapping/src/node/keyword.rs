use crate::{node::MultiField, types::EsType};
use indexmap::IndexMap;
use serde::Serialize;

///
/// KeywordNode
///
/// Keyword leaf with optional named multi-field views. With no views and
/// no suppression the raw value is queryable directly; with views but no
/// as-is variant, only the views are.
///

#[derive(Clone, Debug, Serialize)]
pub struct KeywordNode {
    #[serde(rename = "type")]
    pub es_type: EsType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<bool>,

    /// Attached views, keyed by sub-view name, in attach order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<&'static str, MultiField>,

    #[serde(skip)]
    pub multi_valued: bool,
}

impl KeywordNode {
    #[must_use]
    pub fn new(multi_valued: bool) -> Self {
        Self {
            es_type: EsType::Keyword,
            index: None,
            fields: IndexMap::new(),
            multi_valued,
        }
    }

    #[must_use]
    pub fn is_indexed(&self) -> bool {
        self.index.unwrap_or(true)
    }

    /// Attached view by sub-view name.
    #[must_use]
    pub fn multi_field(&self, name: &str) -> Option<&MultiField> {
        self.fields.get(name)
    }
}

///
/// TESTS
///
