//! Shared document shape fixtures for namedex test surfaces.

pub mod name_usage;
pub mod reference;
pub mod vocab;

pub use name_usage::NameUsageDoc;
pub use reference::ReferenceDoc;
