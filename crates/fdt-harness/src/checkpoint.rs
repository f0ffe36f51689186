//! Composite checkpoint nodes grouping nested check outcomes.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, FdtError};
use crate::outcome::Outcome;

/// Behaviour of a checkpoint when its owning scope finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckpointKind {
    /// Records itself into the enclosing checkpoint unconditionally and
    /// escalates non-passing outcomes at top level.
    Reporting,
    /// Records itself into the enclosing checkpoint only when that
    /// checkpoint is itself containment-kinded; otherwise nothing it holds
    /// ever surfaces.
    Containment,
}

/// A single child of a [`Checkpoint`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A leaf check outcome.
    Outcome(Outcome),
    /// A nested checkpoint produced by an inner scope.
    Checkpoint(Checkpoint),
}

/// Counts of leaf outcomes across an entire checkpoint subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTally {
    /// Number of passing checks.
    pub passes: usize,
    /// Number of failing checks.
    pub fails: usize,
    /// Number of unexpected faults.
    pub errors: usize,
    /// Number of known-broken checks.
    pub broken: usize,
}

impl OutcomeTally {
    /// Total number of leaf outcomes counted.
    pub fn total(&self) -> usize {
        self.passes + self.fails + self.errors + self.broken
    }

    /// Whether the tally holds no failures and no faults.
    pub fn all_passing(&self) -> bool {
        self.fails == 0 && self.errors == 0
    }
}

/// Composite node holding a description and an ordered children sequence.
///
/// Children are appended in call order and never removed or mutated after
/// insertion; the checkpoint exclusively owns its subtree for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    description: String,
    kind: CheckpointKind,
    children: Vec<Node>,
}

impl Checkpoint {
    /// Creates an empty checkpoint with the given description and kind.
    pub fn new(description: impl Into<String>, kind: CheckpointKind) -> Self {
        Self {
            description: description.into(),
            kind,
            children: Vec::new(),
        }
    }

    /// Returns the description supplied at construction.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the checkpoint kind selected at construction.
    pub fn kind(&self) -> CheckpointKind {
        self.kind
    }

    /// Returns whether the checkpoint is containment-kinded.
    pub fn is_containment(&self) -> bool {
        self.kind == CheckpointKind::Containment
    }

    /// Returns the ordered children sequence.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Appends a child in call order. Never fails and never alters the
    /// child.
    pub fn record_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Appends a leaf outcome in call order.
    pub fn record_outcome(&mut self, outcome: Outcome) {
        self.children.push(Node::Outcome(outcome));
    }

    /// Counts leaf outcomes across the whole subtree.
    pub fn tally(&self) -> OutcomeTally {
        let mut tally = OutcomeTally::default();
        accumulate(&self.children, &mut tally);
        tally
    }

    /// Escalates when the subtree recorded any failure or fault.
    ///
    /// This is the top-level hook used by reporting scopes; containment
    /// scopes never call it.
    pub fn ensure_passing(&self) -> Result<(), FdtError> {
        let tally = self.tally();
        if tally.all_passing() {
            return Ok(());
        }
        Err(FdtError::Scope(
            ErrorInfo::new(
                "scope-nonpassing",
                format!("scope `{}` recorded non-passing outcomes", self.description),
            )
            .with_context("fails", tally.fails.to_string())
            .with_context("errors", tally.errors.to_string()),
        ))
    }
}

fn accumulate(children: &[Node], tally: &mut OutcomeTally) {
    for child in children {
        match child {
            Node::Outcome(Outcome::Pass { .. }) => tally.passes += 1,
            Node::Outcome(Outcome::Fail { .. }) => tally.fails += 1,
            Node::Outcome(Outcome::Error { .. }) => tally.errors += 1,
            Node::Outcome(Outcome::Broken { .. }) => tally.broken += 1,
            Node::Checkpoint(nested) => accumulate(&nested.children, tally),
        }
    }
}
