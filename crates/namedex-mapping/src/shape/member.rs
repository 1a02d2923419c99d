use crate::{shape::TypeShape, types::Cardinality};

///
/// Member
///
/// One declared slot on a shape. Listing a member is the mapping opt-in;
/// anything not listed never reaches discovery.
///

#[derive(Clone, Copy, Debug)]
pub struct Member {
    /// Name as it appears in the generated mapping.
    pub name: &'static str,
    pub kind: MemberKind,
    pub value: MemberValue,
    pub config: MemberConfig,
}

impl Member {
    #[must_use]
    pub const fn field(name: &'static str, value: MemberValue) -> Self {
        Self {
            name,
            kind: MemberKind::Field,
            value,
            config: MemberConfig::NONE,
        }
    }

    #[must_use]
    pub const fn accessor(name: &'static str, value: MemberValue) -> Self {
        Self {
            name,
            kind: MemberKind::Accessor,
            value,
            config: MemberConfig::NONE,
        }
    }

    /// Compile-time constant; surfaces nowhere in the mapping.
    #[must_use]
    pub const fn constant(name: &'static str, value: MemberValue) -> Self {
        Self {
            name,
            kind: MemberKind::Const,
            value,
            config: MemberConfig::NONE,
        }
    }

    #[must_use]
    pub const fn with_config(mut self, config: MemberConfig) -> Self {
        self.config = config;
        self
    }
}

///
/// MemberKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MemberKind {
    /// Getter-style member; shadows a field of the same name.
    Accessor,
    Const,
    Field,
}

///
/// MemberValue
///
/// Declared value type of a member. For `Many` the container itself never
/// maps; `item` is the element shape.
///

#[derive(Clone, Copy, Debug)]
pub struct MemberValue {
    pub cardinality: Cardinality,
    pub item: &'static TypeShape,
}

impl MemberValue {
    #[must_use]
    pub const fn one(item: &'static TypeShape) -> Self {
        Self {
            cardinality: Cardinality::One,
            item,
        }
    }

    #[must_use]
    pub const fn opt(item: &'static TypeShape) -> Self {
        Self {
            cardinality: Cardinality::Opt,
            item,
        }
    }

    #[must_use]
    pub const fn many(item: &'static TypeShape) -> Self {
        Self {
            cardinality: Cardinality::Many,
            item,
        }
    }
}

///
/// MemberConfig
///
/// Declarative per-member mapping metadata, authored by the domain layer.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct MemberConfig {
    /// Storage override: the member maps as if declared with this shape.
    /// Cardinality still follows the declaration.
    pub map_to: Option<&'static TypeShape>,

    /// Declared analyzer variant names. `None` means no declaration; an
    /// empty slice behaves the same.
    pub analyzers: Option<&'static [&'static str]>,

    /// Excluded from search entirely.
    pub not_indexed: bool,

    /// Container of complex maps as a plain object instead of nested.
    pub not_nested: bool,

    /// Excluded from discovery.
    pub skip: bool,
}

impl MemberConfig {
    pub const NONE: Self = Self {
        map_to: None,
        analyzers: None,
        not_indexed: false,
        not_nested: false,
        skip: false,
    };
}

///
/// TESTS
///
