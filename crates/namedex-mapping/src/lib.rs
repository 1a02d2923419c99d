pub mod analyzer;
pub mod build;
pub mod datatype;
pub mod error;
pub mod node;
pub mod registry;
pub mod serialize;
pub mod shape;
pub mod traits;
pub mod types;

use crate::{error::MappingError, serialize::SerializeError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::{EnumMode, MappingConfig, build},
        error::MappingError,
        node::*,
        registry::{MappingRegistry, registry},
        serialize::{to_document, to_document_pretty},
        shape::{Member, MemberConfig, MemberValue, ShapeKind, TypeShape, builtin},
        traits::DocumentKind,
        types::{Cardinality, EsType},
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    MappingError(#[from] MappingError),

    #[error(transparent)]
    SerializeError(#[from] SerializeError),
}
