use thiserror::Error as ThisError;

///
/// MappingError
///
/// Build failures are deterministic functions of the input shape graph;
/// the same graph fails identically on every run.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MappingError {
    #[error("circular embedding at '{path}': type '{type_name}' is already on the embedding chain")]
    CircularEmbedding {
        /// Dotted member path from the root document.
        path: String,
        type_name: &'static str,
    },
}

///
/// TESTS
///
