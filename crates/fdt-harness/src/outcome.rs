//! Leaf results produced by individual checks.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Result of a single check.
///
/// Every variant keeps enough text to reconstruct what was evaluated.
/// Fault payloads are preserved as text: Rust panic payloads are opaque
/// `Box<dyn Any>` values, so the harness downcasts the common string shapes
/// and keeps the outcome cloneable and serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The check evaluated true.
    Pass {
        /// Source text of the checked expression.
        expression: String,
    },
    /// The check evaluated false.
    Fail {
        /// Source text of the checked expression.
        expression: String,
        /// Optional caller supplied note describing the expectation.
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    /// An unexpected fault was raised.
    Error {
        /// Source text of the expression under evaluation, when the fault
        /// happened inside a check rather than between checks.
        #[serde(skip_serializing_if = "Option::is_none")]
        expression: Option<String>,
        /// Fault message recovered from the payload.
        message: String,
        /// Additional fault detail when one could be recovered as text.
        #[serde(skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
    },
    /// A known-broken check failed as expected.
    Broken {
        /// Source text of the checked expression.
        expression: String,
    },
}

impl Outcome {
    /// Builds a passing outcome for the given expression text.
    pub fn pass(expression: impl Into<String>) -> Self {
        Outcome::Pass {
            expression: expression.into(),
        }
    }

    /// Builds a failing outcome for the given expression text.
    pub fn fail(expression: impl Into<String>) -> Self {
        Outcome::Fail {
            expression: expression.into(),
            note: None,
        }
    }

    /// Builds a failing outcome carrying a caller supplied note.
    pub fn fail_noted(expression: impl Into<String>, note: impl Into<String>) -> Self {
        Outcome::Fail {
            expression: expression.into(),
            note: Some(note.into()),
        }
    }

    /// Builds an error outcome for a fault raised between checks.
    pub fn error(message: impl Into<String>) -> Self {
        Outcome::Error {
            expression: None,
            message: message.into(),
            detail: None,
        }
    }

    /// Builds an error outcome for a fault raised while evaluating a check.
    pub fn error_in(expression: impl Into<String>, message: impl Into<String>) -> Self {
        Outcome::Error {
            expression: Some(expression.into()),
            message: message.into(),
            detail: None,
        }
    }

    /// Builds an error outcome carrying extra fault detail.
    pub fn error_detailed(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Outcome::Error {
            expression: None,
            message: message.into(),
            detail: Some(detail.into()),
        }
    }

    /// Builds a known-broken outcome for the given expression text.
    pub fn broken(expression: impl Into<String>) -> Self {
        Outcome::Broken {
            expression: expression.into(),
        }
    }

    /// Returns whether the outcome is a pass.
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass { .. })
    }

    /// Returns whether the outcome is a failure.
    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail { .. })
    }

    /// Returns whether the outcome is an unexpected fault.
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }

    /// Returns whether the outcome is a known-broken marker.
    pub fn is_broken(&self) -> bool {
        matches!(self, Outcome::Broken { .. })
    }

    /// Short stable label for the outcome variant.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Pass { .. } => "pass",
            Outcome::Fail { .. } => "fail",
            Outcome::Error { .. } => "error",
            Outcome::Broken { .. } => "broken",
        }
    }

    /// Returns the recorded expression text, when one exists.
    pub fn expression(&self) -> Option<&str> {
        match self {
            Outcome::Pass { expression }
            | Outcome::Fail { expression, .. }
            | Outcome::Broken { expression } => Some(expression),
            Outcome::Error { expression, .. } => expression.as_deref(),
        }
    }

    /// Returns the fault message for error outcomes.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass { expression } => write!(f, "pass: {expression}"),
            Outcome::Fail { expression, note } => {
                write!(f, "fail: {expression}")?;
                if let Some(note) = note {
                    write!(f, " ({note})")?;
                }
                Ok(())
            }
            Outcome::Error {
                expression,
                message,
                detail,
            } => {
                write!(f, "error: {message}")?;
                if let Some(expression) = expression {
                    write!(f, " at {expression}")?;
                }
                if let Some(detail) = detail {
                    write!(f, " [{detail}]")?;
                }
                Ok(())
            }
            Outcome::Broken { expression } => write!(f, "broken: {expression}"),
        }
    }
}
