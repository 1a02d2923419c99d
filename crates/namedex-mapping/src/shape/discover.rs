use crate::shape::{Member, MemberKind, TypeShape};
use indexmap::IndexMap;

/// Surface the mappable members of a shape.
///
/// The inheritance chain is walked most-basic ancestor first, then
/// declaration order within each shape, so derived declarations are seen
/// last. Constants and skipped members never surface. On a name
/// collision an accessor always shadows a field; within the same kind
/// the most-derived declaration wins. The surfaced position is where the
/// name first appeared.
#[must_use]
pub fn members_of(shape: &'static TypeShape) -> IndexMap<&'static str, &'static Member> {
    let mut chain = Vec::new();
    let mut current = Some(shape);
    while let Some(s) = current {
        chain.push(s);
        current = s.parent;
    }

    let mut surfaced: IndexMap<&'static str, &'static Member> = IndexMap::new();
    for s in chain.into_iter().rev() {
        for member in s.members {
            if member.kind == MemberKind::Const || member.config.skip {
                continue;
            }

            let shadowed = surfaced.get(member.name).is_some_and(|existing| {
                existing.kind == MemberKind::Accessor && member.kind == MemberKind::Field
            });
            if shadowed {
                log::debug!(
                    "member '{}' on '{}' stays shadowed by an accessor",
                    member.name,
                    s.name
                );
                continue;
            }

            if surfaced.insert(member.name, member).is_some() {
                log::debug!(
                    "member '{}' on '{}' overrides an earlier declaration",
                    member.name,
                    s.name
                );
            }
        }
    }

    surfaced
}

///
/// TESTS
///
