use std::fs;
use std::path::Path;

use fdt_harness::{Checkpoint, ErrorInfo, FdtError, Outcome, OutcomeTally};
use serde::{Deserialize, Serialize};

use crate::flatten::nonpassing_outcomes;
use crate::hash::stable_hash_string;
use crate::serde::{from_json_slice, to_canonical_json_bytes};

fn report_error(code: &str, message: impl Into<String>, path: &Path) -> FdtError {
    FdtError::Report(
        ErrorInfo::new(code, message.into()).with_context("path", path.display().to_string()),
    )
}

/// Serializable summary of one finished checkpoint tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Content addressed hash of the report payload.
    pub report_hash: String,
    /// Description of the root checkpoint the report was built from.
    pub description: String,
    /// Leaf outcome counts across the whole tree.
    pub tally: OutcomeTally,
    /// Flattened non-passing outcomes in issue order.
    pub nonpassing: Vec<Outcome>,
}

impl RunReport {
    /// Builds a report from a finished checkpoint while computing the
    /// stable hash.
    pub fn from_checkpoint(checkpoint: &Checkpoint) -> Result<Self, FdtError> {
        let tally = checkpoint.tally();
        let nonpassing = nonpassing_outcomes(checkpoint);
        let report_hash = stable_hash_string(&(checkpoint.description(), &tally, &nonpassing))?;
        Ok(Self {
            report_hash,
            description: checkpoint.description().to_string(),
            tally,
            nonpassing,
        })
    }

    /// Encodes the report as canonical JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, FdtError> {
        to_canonical_json_bytes(self)
    }

    /// Encodes the report as a binary blob wrapping its canonical JSON.
    pub fn to_blob(&self) -> Result<Vec<u8>, FdtError> {
        let json = self.to_bytes()?;
        bincode::serialize(&json)
            .map_err(|err| FdtError::Serde(ErrorInfo::new("bincode-serialize", err.to_string())))
    }

    /// Rehydrates a report from a binary blob.
    pub fn from_blob(bytes: &[u8]) -> Result<Self, FdtError> {
        let json: Vec<u8> = bincode::deserialize(bytes)
            .map_err(|err| FdtError::Serde(ErrorInfo::new("bincode-deserialize", err.to_string())))?;
        from_json_slice(&json)
    }

    /// Writes the report to disk as canonical JSON.
    pub fn store(&self, path: &Path) -> Result<(), FdtError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| report_error("report-mkdir", err.to_string(), parent))?;
        }
        let bytes = self.to_bytes()?;
        fs::write(path, bytes).map_err(|err| report_error("report-write", err.to_string(), path))
    }

    /// Restores a report from disk.
    pub fn load(path: &Path) -> Result<Self, FdtError> {
        let bytes =
            fs::read(path).map_err(|err| report_error("report-read", err.to_string(), path))?;
        from_json_slice(&bytes)
    }
}
