use crate::types::EsType;
use serde::Serialize;

///
/// SimpleNode
///
/// Leaf node for one primitive storage type.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct SimpleNode {
    #[serde(rename = "type")]
    pub es_type: EsType,

    /// `None` leaves the engine default (indexed) in place; only an
    /// explicit `false` is ever written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<bool>,

    /// In-memory cardinality tag; the engine has no such mapping key.
    #[serde(skip)]
    pub multi_valued: bool,
}

impl SimpleNode {
    #[must_use]
    pub const fn new(es_type: EsType) -> Self {
        Self {
            es_type,
            index: None,
            multi_valued: false,
        }
    }

    #[must_use]
    pub fn is_indexed(&self) -> bool {
        self.index.unwrap_or(true)
    }
}

///
/// TESTS
///
