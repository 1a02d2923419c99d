#[cfg(test)]
mod tests;

use crate::{
    analyzer,
    datatype,
    error::MappingError,
    node::{ComplexNode, KeywordNode, Mapping, SchemaNode, SimpleNode},
    shape::{Member, MemberConfig, ShapeId, TypeShape, builtin, members_of},
    types::EsType,
};
use std::collections::HashSet;

///
/// MappingConfig
///

#[derive(Clone, Copy, Debug, Default)]
pub struct MappingConfig {
    pub enums: EnumMode,
}

///
/// EnumMode
///
/// Storage policy for enumeration shapes, applied globally rather than
/// per member.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EnumMode {
    /// Store the canonical variant name.
    #[default]
    Name,
    /// Store the variant ordinal.
    Ordinal,
}

/// Build the mapping for one root shape.
///
/// Members surface in discovery order and the output is deterministic
/// down to the byte. The only failure is a circular complex embedding;
/// it aborts the whole build and nothing partial escapes.
pub fn build(shape: &'static TypeShape, config: &MappingConfig) -> Result<Mapping, MappingError> {
    let mut ancestors = HashSet::new();
    ancestors.insert(shape.id());

    let root = build_complex(shape, EsType::Object, false, &ancestors, "", config)?;

    Ok(Mapping::new(shape, root))
}

fn build_complex(
    shape: &'static TypeShape,
    es_type: EsType,
    multi_valued: bool,
    ancestors: &HashSet<ShapeId>,
    path: &str,
    config: &MappingConfig,
) -> Result<ComplexNode, MappingError> {
    let mut node = ComplexNode::new(es_type, multi_valued);

    for member in members_of(shape).values() {
        let child = build_member(member, ancestors, path, config)?;
        node.properties.insert(member.name, child);
    }

    Ok(node)
}

fn build_member(
    member: &Member,
    ancestors: &HashSet<ShapeId>,
    path: &str,
    config: &MappingConfig,
) -> Result<SchemaNode, MappingError> {
    let multi_valued = member.value.cardinality.is_multi_valued();
    let mapped = mapped_shape(member.config, member.value.item, config);

    match datatype::resolve(mapped) {
        Some(EsType::Keyword) => {
            let leaf = analyzer::compose(KeywordNode::new(multi_valued), member);
            Ok(SchemaNode::Keyword(leaf))
        }
        Some(es_type) => {
            let mut leaf = SimpleNode::new(es_type);
            leaf.multi_valued = multi_valued;
            if member.config.not_indexed {
                leaf.index = Some(false);
            }
            Ok(SchemaNode::Simple(leaf))
        }
        None => {
            let member_path = join_path(path, member.name);

            if ancestors.contains(&mapped.id()) {
                return Err(MappingError::CircularEmbedding {
                    path: member_path,
                    type_name: mapped.name,
                });
            }

            // Each branch gets its own copy; the same shape may appear
            // on parallel branches.
            let mut branch = ancestors.clone();
            branch.insert(mapped.id());

            let es_type = if multi_valued && !member.config.not_nested {
                EsType::Nested
            } else {
                EsType::Object
            };

            let node = build_complex(mapped, es_type, multi_valued, &branch, &member_path, config)?;
            Ok(SchemaNode::Complex(node))
        }
    }
}

/// Effective shape a member maps as: explicit override first, else the
/// declared element shape, with enumerations substituted per policy.
fn mapped_shape(
    member_config: MemberConfig,
    declared: &'static TypeShape,
    config: &MappingConfig,
) -> &'static TypeShape {
    let effective = member_config.map_to.unwrap_or(declared);

    if effective.is_enum() {
        match config.enums {
            EnumMode::Name => &builtin::STRING,
            EnumMode::Ordinal => &builtin::I32,
        }
    } else {
        effective
    }
}

fn join_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}
