use crate::{
    node::{ComplexNode, SchemaNode},
    shape::{ShapeId, TypeShape},
};
use serde::{Serialize, Serializer, ser::SerializeMap};

///
/// Dynamic
///
/// Root policy for document fields absent from the mapping. Always
/// `Strict` for generated mappings: unknown fields are rejected.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dynamic {
    #[default]
    Strict,
    True,
    False,
}

///
/// Mapping
///
/// Finished schema for one root shape. The originating shape rides along
/// as the cache identity; the wire form is only the strictness policy
/// and the root properties.
///

#[derive(Clone, Debug)]
pub struct Mapping {
    pub shape: &'static TypeShape,
    pub dynamic: Dynamic,
    pub root: ComplexNode,
}

impl Mapping {
    #[must_use]
    pub fn new(shape: &'static TypeShape, root: ComplexNode) -> Self {
        Self {
            shape,
            dynamic: Dynamic::default(),
            root,
        }
    }

    /// Document type name the mapping was generated from.
    #[must_use]
    pub fn doc_type(&self) -> &'static str {
        self.shape.name
    }

    #[must_use]
    pub fn shape_id(&self) -> ShapeId {
        self.shape.id()
    }

    /// Node at a dotted member path, if present. Multi-field views are
    /// not addressable here; go through the keyword node.
    #[must_use]
    pub fn field(&self, path: &str) -> Option<&SchemaNode> {
        let mut segments = path.split('.');
        let mut node = self.root.child(segments.next()?)?;

        for segment in segments {
            node = node.as_complex()?.child(segment)?;
        }

        Some(node)
    }
}

impl Serialize for Mapping {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("dynamic", &self.dynamic)?;
        map.serialize_entry("properties", &self.root.properties)?;
        map.end()
    }
}

///
/// TESTS
///
