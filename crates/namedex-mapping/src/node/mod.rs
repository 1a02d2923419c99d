mod complex;
mod keyword;
mod mapping;
mod multi_field;
mod simple;

pub use complex::ComplexNode;
pub use keyword::KeywordNode;
pub use mapping::{Dynamic, Mapping};
pub use multi_field::MultiField;
pub use simple::SimpleNode;

use crate::types::EsType;
use serde::Serialize;

///
/// SchemaNode
///
/// One node in a generated mapping tree. The tree is exactly that: every
/// node except the root has one parent, shapes occurring twice in the
/// input map to two independent subtrees.
///

#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Complex(ComplexNode),
    Keyword(KeywordNode),
    Simple(SimpleNode),
}

impl SchemaNode {
    #[must_use]
    pub const fn es_type(&self) -> EsType {
        match self {
            Self::Complex(node) => node.es_type,
            Self::Keyword(node) => node.es_type,
            Self::Simple(node) => node.es_type,
        }
    }

    #[must_use]
    pub const fn is_multi_valued(&self) -> bool {
        match self {
            Self::Complex(node) => node.multi_valued,
            Self::Keyword(node) => node.multi_valued,
            Self::Simple(node) => node.multi_valued,
        }
    }

    #[must_use]
    pub const fn as_complex(&self) -> Option<&ComplexNode> {
        match self {
            Self::Complex(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_keyword(&self) -> Option<&KeywordNode> {
        match self {
            Self::Keyword(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_simple(&self) -> Option<&SimpleNode> {
        match self {
            Self::Simple(node) => Some(node),
            _ => None,
        }
    }
}

///
/// TESTS
///
