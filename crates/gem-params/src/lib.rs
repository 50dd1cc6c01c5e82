#![deny(missing_docs)]
#![doc = "Seismic source type vocabulary and catalog validation for GEM parameters."]

/// Source catalog documents and their validation.
pub mod catalog;
mod hash;
mod serde;
/// Closed registry of seismic source categories.
pub mod source_type;

pub use catalog::{
    load_catalog, CatalogIssue, CatalogIssueKind, CatalogReport, ResolvedSource, SourceCatalog,
    SourceEntry,
};
pub use hash::compute_catalog_hash;
pub use crate::serde::{from_json_slice, to_canonical_json_bytes};
pub use source_type::SourceType;

pub use gem_core::{ErrorInfo, GemError};
