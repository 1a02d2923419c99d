use derive_more::{Display, FromStr};
use serde::Serialize;
use std::fmt;

///
/// EsType
///
/// Closed set of storage types a mapping can assign. The lowercase
/// serialized names are the canonical ones; adding a variant requires a
/// primitive table entry or shapes storing to it stay unreachable.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "lowercase")]
pub enum EsType {
    Boolean,
    Byte,
    Date,
    Double,
    Float,
    Integer,
    Keyword,
    Long,
    Nested,
    Object,
    Short,
    Text,
}

impl EsType {
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object)
    }

    /// Interior node types that carry properties.
    #[must_use]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Object | Self::Nested)
    }
}

impl fmt::Display for EsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Date => "date",
            Self::Double => "double",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::Keyword => "keyword",
            Self::Long => "long",
            Self::Nested => "nested",
            Self::Object => "object",
            Self::Short => "short",
            Self::Text => "text",
        };
        write!(f, "{label}")
    }
}

///
/// Cardinality
///

#[derive(Clone, Copy, Default, Debug, Display, Eq, FromStr, PartialEq, Serialize)]
pub enum Cardinality {
    #[default]
    One,
    Opt,
    Many,
}

impl Cardinality {
    /// Declared as a container; the mapped node gets the multi-valued tag.
    #[must_use]
    pub const fn is_multi_valued(self) -> bool {
        matches!(self, Self::Many)
    }
}

///
/// TESTS
///
