use crate::node::Mapping;
use thiserror::Error as ThisError;

///
/// SerializeError
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("serialize error: {0}")]
    Serialize(String),
}

/// Canonical compact rendering of a mapping.
///
/// Identical mappings always render byte-identically; this is the form
/// submitted to the engine and the one schema diffing compares.
pub fn to_document(mapping: &Mapping) -> Result<String, SerializeError> {
    serde_json::to_string(mapping).map_err(|err| SerializeError::Serialize(err.to_string()))
}

/// Indented rendering for humans.
pub fn to_document_pretty(mapping: &Mapping) -> Result<String, SerializeError> {
    serde_json::to_string_pretty(mapping).map_err(|err| SerializeError::Serialize(err.to_string()))
}

///
/// TESTS
///
