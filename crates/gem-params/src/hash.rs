use gem_core::errors::GemError;
use sha2::{Digest, Sha256};

use crate::catalog::SourceCatalog;
use crate::serde::to_canonical_json_bytes;

/// Hex encoded SHA-256 of the canonical JSON form of a catalog.
pub fn compute_catalog_hash(catalog: &SourceCatalog) -> Result<String, GemError> {
    let bytes = to_canonical_json_bytes(catalog)?;
    Ok(hex::encode(Sha256::digest(bytes)))
}
