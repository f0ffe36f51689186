use fdt_harness::{Checkpoint, Node, Outcome};

/// Extracts every non-passing leaf outcome from a checkpoint tree.
///
/// Pure and side-effect free: passes contribute nothing, any other leaf is
/// kept, and nested checkpoints of either kind are walked depth-first,
/// left-to-right, so the output order matches the order checks were issued.
pub fn nonpassing_outcomes(checkpoint: &Checkpoint) -> Vec<Outcome> {
    let mut collected = Vec::new();
    collect(checkpoint.children(), &mut collected);
    collected
}

fn collect(children: &[Node], collected: &mut Vec<Outcome>) {
    for child in children {
        match child {
            Node::Outcome(outcome) if outcome.is_pass() => {}
            Node::Outcome(outcome) => collected.push(outcome.clone()),
            Node::Checkpoint(nested) => collect(nested.children(), collected),
        }
    }
}
