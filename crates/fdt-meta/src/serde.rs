use fdt_harness::{ErrorInfo, FdtError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encodes a value as canonical JSON bytes.
///
/// The value is lowered to a `serde_json::Value` first so map keys come out
/// sorted and repeated encodings of equal values are byte-identical.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, FdtError> {
    let value = serde_json::to_value(value)
        .map_err(|err| FdtError::Serde(ErrorInfo::new("json-canonicalize", err.to_string())))?;
    serde_json::to_vec(&value)
        .map_err(|err| FdtError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Decodes a value from a JSON byte slice.
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, FdtError> {
    serde_json::from_slice(bytes)
        .map_err(|err| FdtError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))
}
