use crate::shape::TypeShape;

///
/// Builtin leaf shapes backing the primitive table.
///
/// Statics, not consts: identity is by address, and every use site must
/// see the same one. `STRING` and `I32` double as the substitution
/// targets for enumeration shapes.
///

pub static BOOL: TypeShape = TypeShape::scalar("bool");
pub static CHAR: TypeShape = TypeShape::scalar("char");
pub static DATE: TypeShape = TypeShape::scalar("date");
pub static DATETIME: TypeShape = TypeShape::scalar("datetime");
pub static F32: TypeShape = TypeShape::scalar("f32");
pub static F64: TypeShape = TypeShape::scalar("f64");
pub static I8: TypeShape = TypeShape::scalar("i8");
pub static I16: TypeShape = TypeShape::scalar("i16");
pub static I32: TypeShape = TypeShape::scalar("i32");
pub static I64: TypeShape = TypeShape::scalar("i64");
pub static STRING: TypeShape = TypeShape::scalar("string");
pub static U8: TypeShape = TypeShape::scalar("u8");
pub static U16: TypeShape = TypeShape::scalar("u16");
pub static U32: TypeShape = TypeShape::scalar("u32");
pub static U64: TypeShape = TypeShape::scalar("u64");
pub static ULID: TypeShape = TypeShape::scalar("ulid");
pub static URI: TypeShape = TypeShape::scalar("uri");
pub static UUID: TypeShape = TypeShape::scalar("uuid");

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_scalar_leaves() {
        for shape in [&BOOL, &STRING, &I64, &DATE, &UUID] {
            assert!(shape.parent.is_none());
            assert!(shape.members.is_empty());
            assert!(!shape.is_enum());
        }
    }

    #[test]
    fn each_use_site_sees_the_same_address() {
        assert_eq!(STRING.id(), STRING.id());
        assert_ne!(STRING.id(), CHAR.id());
    }
}
