use crate::shape::TypeShape;

///
/// DocumentKind
///
/// Implemented by marker types identifying one document shape. A `fn`
/// rather than an associated const because consts cannot reference
/// statics in the shape arena.
///

pub trait DocumentKind {
    /// Root shape describing the document's members.
    fn shape() -> &'static TypeShape;

    /// Index-facing document type name.
    #[must_use]
    fn doc_type() -> &'static str {
        Self::shape().name
    }
}

///
/// TESTS
///
