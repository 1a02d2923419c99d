use crate::{node::SchemaNode, types::EsType};
use indexmap::IndexMap;
use serde::Serialize;

///
/// ComplexNode
///
/// Interior node owning the children of one embedded shape. `object` is
/// the engine default and stays off the wire; `nested` is always written.
///

#[derive(Clone, Debug, Serialize)]
pub struct ComplexNode {
    #[serde(rename = "type", skip_serializing_if = "EsType::is_object")]
    pub es_type: EsType,

    /// Child nodes keyed by member name; insertion order is the
    /// serialized field order.
    pub properties: IndexMap<&'static str, SchemaNode>,

    #[serde(skip)]
    pub multi_valued: bool,
}

impl ComplexNode {
    #[must_use]
    pub fn new(es_type: EsType, multi_valued: bool) -> Self {
        Self {
            es_type,
            properties: IndexMap::new(),
            multi_valued,
        }
    }

    /// Direct child by member name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&SchemaNode> {
        self.properties.get(name)
    }
}

///
/// TESTS
///
