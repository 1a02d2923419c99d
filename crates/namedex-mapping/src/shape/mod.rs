pub mod builtin;
pub mod discover;
pub mod member;

pub use discover::members_of;
pub use member::{Member, MemberConfig, MemberKind, MemberValue};

use std::fmt;

///
/// TypeShape
///
/// One node in the explicit type graph supplied by the domain layer.
/// Shapes live in a `'static` arena and are identified by address, never
/// by name; two shapes with the same name are still distinct types.
///

pub struct TypeShape {
    /// Canonical domain type name, used for table lookups and diagnostics.
    pub name: &'static str,
    pub kind: ShapeKind,
    /// Supertype link; member discovery and the primitive table walk it.
    pub parent: Option<&'static TypeShape>,
    /// Declared members, in declaration order.
    pub members: &'static [Member],
}

impl TypeShape {
    /// Leaf scalar shape with no members.
    #[must_use]
    pub const fn scalar(name: &'static str) -> Self {
        Self {
            name,
            kind: ShapeKind::Struct,
            parent: None,
            members: &[],
        }
    }

    /// Enumeration shape; variants are irrelevant to mapping, only the
    /// kind matters for storage substitution.
    #[must_use]
    pub const fn enumeration(name: &'static str) -> Self {
        Self {
            name,
            kind: ShapeKind::Enum,
            parent: None,
            members: &[],
        }
    }

    #[must_use]
    pub fn id(&'static self) -> ShapeId {
        ShapeId(std::ptr::from_ref(self).addr())
    }

    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self.kind, ShapeKind::Enum)
    }
}

// Shallow: shape graphs may be cyclic.
impl fmt::Debug for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeShape")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

///
/// ShapeKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShapeKind {
    Enum,
    Struct,
}

///
/// ShapeId
///
/// Address identity of a shape in the `'static` arena. Hashable cache
/// key; never derived from the shape's name.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ShapeId(usize);

///
/// TESTS
///
