use namedex_mapping::prelude::*;

///
/// Enumeration shapes shared across the document fixtures. Variants are
/// irrelevant to mapping, only the shape kind participates.
///

pub static RANK: TypeShape = TypeShape::enumeration("Rank");
pub static TAXONOMIC_STATUS: TypeShape = TypeShape::enumeration("TaxonomicStatus");
pub static NOM_CODE: TypeShape = TypeShape::enumeration("NomCode");
pub static ISSUE: TypeShape = TypeShape::enumeration("Issue");
pub static DECISION_MODE: TypeShape = TypeShape::enumeration("DecisionMode");
