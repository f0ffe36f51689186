use fdt_harness::FdtError;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::serde::to_canonical_json_bytes;

/// Computes a stable content hash for any serializable value.
///
/// The value is hashed through its canonical JSON encoding, so structurally
/// equal values hash identically across runs and platforms.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, FdtError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(&bytes);
    Ok(digest
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<String>())
}
