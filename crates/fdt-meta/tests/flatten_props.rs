use fdt_harness::{Checkpoint, CheckpointKind, Node, Outcome};
use fdt_meta::nonpassing_outcomes;
use proptest::prelude::*;

#[test]
fn empty_trees_flatten_to_nothing() {
    let mut root = Checkpoint::new("root", CheckpointKind::Containment);
    assert!(nonpassing_outcomes(&root).is_empty());

    root.record_child(Node::Checkpoint(Checkpoint::new(
        "empty nested",
        CheckpointKind::Reporting,
    )));
    assert!(nonpassing_outcomes(&root).is_empty());
}

fn arb_outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(|expr| Outcome::pass(expr)),
        "[a-z]{1,8}".prop_map(|expr| Outcome::fail(expr)),
        "[a-z]{1,8}".prop_map(|message| Outcome::error(message)),
        "[a-z]{1,8}".prop_map(|expr| Outcome::broken(expr)),
    ]
}

fn arb_node() -> impl Strategy<Value = Node> {
    arb_outcome()
        .prop_map(Node::Outcome)
        .prop_recursive(3, 24, 4, |inner| {
            (any::<bool>(), proptest::collection::vec(inner, 0..4)).prop_map(
                |(containment, children)| {
                    let kind = if containment {
                        CheckpointKind::Containment
                    } else {
                        CheckpointKind::Reporting
                    };
                    let mut checkpoint = Checkpoint::new("nested", kind);
                    for child in children {
                        checkpoint.record_child(child);
                    }
                    Node::Checkpoint(checkpoint)
                },
            )
        })
}

proptest! {
    #[test]
    fn flattening_collects_every_nonpassing_leaf(children in proptest::collection::vec(arb_node(), 0..6)) {
        let mut root = Checkpoint::new("root", CheckpointKind::Containment);
        for child in children {
            root.record_child(child);
        }
        let flattened = nonpassing_outcomes(&root);
        let tally = root.tally();
        prop_assert_eq!(flattened.len(), tally.fails + tally.errors + tally.broken);
        prop_assert!(flattened.iter().all(|outcome| !outcome.is_pass()));
    }

    #[test]
    fn flattening_is_pure(children in proptest::collection::vec(arb_node(), 0..6)) {
        let mut root = Checkpoint::new("root", CheckpointKind::Containment);
        for child in children {
            root.record_child(child);
        }
        let snapshot = root.clone();
        let first = nonpassing_outcomes(&root);
        let second = nonpassing_outcomes(&root);
        prop_assert_eq!(first, second);
        prop_assert_eq!(root, snapshot);
    }
}
