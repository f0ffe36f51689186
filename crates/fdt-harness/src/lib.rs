#![deny(missing_docs)]
#![doc = "Assertion-grouping harness for the FDT test utilities: check outcomes, checkpoint trees, and ambient scopes."]

pub mod checkpoint;
pub mod errors;
mod macros;
pub mod outcome;
pub mod scope;

pub use checkpoint::{Checkpoint, CheckpointKind, Node, OutcomeTally};
pub use errors::{ErrorInfo, FdtError};
pub use outcome::Outcome;
pub use scope::{containment_scope, record, reporting_scope, run_scope, scope_depth};
