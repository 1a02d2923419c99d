use crate::{shape::TypeShape, types::EsType};

///
/// Data Type Table
///
/// Single source of truth for domain-scalar storage. A shape whose name
/// (or ancestor's name) is absent from the table maps as a nested
/// complex type, which for a scalar is almost always a modeling bug.
///

macro_rules! datatype_entries {
    ($macro:ident) => {
        $macro! {
            ("bool", Boolean),
            ("char", Keyword),
            ("date", Date),
            ("datetime", Date),
            ("f32", Float),
            ("f64", Double),
            ("i16", Short),
            ("i32", Integer),
            ("i64", Long),
            ("i8", Byte),
            ("string", Keyword),
            ("u16", Integer),
            ("u32", Long),
            ("u64", Long),
            ("u8", Short),
            ("ulid", Keyword),
            ("uri", Keyword),
            ("uuid", Keyword),
        }
    };
}

macro_rules! datatype_table {
    ($(($name:literal, $es:ident)),+ $(,)?) => {
        /// Every (domain name, storage type) pair in the table.
        pub const ENTRIES: &[(&str, EsType)] = &[$(($name, EsType::$es)),+];

        fn lookup(name: &str) -> Option<EsType> {
            match name {
                $($name => Some(EsType::$es),)+
                _ => None,
            }
        }
    };
}

datatype_entries!(datatype_table);

/// Storage type for a shape, falling back along its parent chain.
///
/// `None` means no entry anywhere on the chain: the shape maps as a
/// complex sub-document.
#[must_use]
pub fn resolve(shape: &'static TypeShape) -> Option<EsType> {
    let mut current = Some(shape);
    while let Some(s) = current {
        if let Some(es) = lookup(s.name) {
            return Some(es);
        }
        current = s.parent;
    }

    None
}

/// Domain names storing to the given type. Diagnostics and tests only.
#[must_use]
pub fn domain_types(es: EsType) -> Vec<&'static str> {
    ENTRIES
        .iter()
        .filter(|(_, t)| *t == es)
        .map(|(name, _)| *name)
        .collect()
}

///
/// TESTS
///
