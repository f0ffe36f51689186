#![deny(missing_docs)]
#![doc = "Meta-testing helpers for the FDT test utilities: run checks inside containment scopes and inspect their outcomes programmatically."]

/// Flattening of checkpoint trees into non-passing outcomes.
pub mod flatten;
/// Canonical hashing helpers.
pub mod hash;
/// Query entry points executing caller checks under containment.
pub mod query;
/// Serializable run summaries.
pub mod report;
/// Canonical JSON helpers.
pub mod serde;

pub use flatten::nonpassing_outcomes;
pub use query::{errors, errors_matching, fails, nonpassing_results};
pub use report::RunReport;
