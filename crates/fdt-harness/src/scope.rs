//! Ambient scope stack and fault capture around caller check code.
//!
//! The stack of in-flight checkpoints is thread local, pushed on scope entry
//! and popped on every exit path through a guard. Execution is synchronous
//! and cooperative: caller code runs to completion (or fault) before the
//! scope returns, so no locking is involved.

use std::any::Any;
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};

use crate::checkpoint::{Checkpoint, CheckpointKind, Node};
use crate::errors::FdtError;
use crate::outcome::Outcome;

thread_local! {
    static SCOPE_STACK: RefCell<Vec<Checkpoint>> = const { RefCell::new(Vec::new()) };
}

/// Returns the current ambient nesting depth for this thread.
pub fn scope_depth() -> usize {
    SCOPE_STACK.with(|stack| stack.borrow().len())
}

/// Records an outcome into the currently active checkpoint and returns it
/// unchanged.
///
/// With no active scope the default handler applies: passing and broken
/// outcomes are discarded, while failures and faults abort via panic, the
/// same way an unguarded assertion would abort a test run.
pub fn record(outcome: Outcome) -> Outcome {
    let recorded = SCOPE_STACK.with(|stack| {
        let mut stack = stack.borrow_mut();
        match stack.last_mut() {
            Some(active) => {
                active.record_outcome(outcome.clone());
                true
            }
            None => false,
        }
    });
    if !recorded && (outcome.is_fail() || outcome.is_error()) {
        panic!("unscoped {outcome}");
    }
    outcome
}

/// Evaluates a boolean check under the fault barrier and records the result.
///
/// Used by the `check!` macro; the expression text is kept verbatim so a
/// literal `check!(false)` records exactly `"false"`.
pub fn record_evaluation<F>(expression: &str, note: Option<&str>, eval: F) -> Outcome
where
    F: FnOnce() -> bool,
{
    let outcome = match panic::catch_unwind(AssertUnwindSafe(eval)) {
        Ok(true) => Outcome::pass(expression),
        Ok(false) => match note {
            Some(note) => Outcome::fail_noted(expression, note),
            None => Outcome::fail(expression),
        },
        Err(payload) => Outcome::error_in(expression, panic_message(payload)),
    };
    record(outcome)
}

/// Evaluates a known-broken check and records the result.
///
/// A false result or a fault records a broken marker; an unexpected pass is
/// escalated as an error outcome, since the caller claimed the check could
/// not hold.
pub fn record_broken_evaluation<F>(expression: &str, eval: F) -> Outcome
where
    F: FnOnce() -> bool,
{
    let outcome = match panic::catch_unwind(AssertUnwindSafe(eval)) {
        Ok(true) => Outcome::error_in(expression, "unexpected pass for known-broken check"),
        Ok(false) | Err(_) => Outcome::broken(expression),
    };
    record(outcome)
}

/// Runs caller code inside a freshly pushed checkpoint of the given kind.
///
/// Any fault raised by `f` and not mediated through a check is caught at
/// this boundary, converted into an error outcome recorded in the
/// checkpoint, and the scope then unwinds normally. The checkpoint is
/// finished exactly once: a reporting checkpoint records itself into any
/// enclosing checkpoint, a containment checkpoint only into an enclosing
/// containment checkpoint.
pub fn run_scope<F>(kind: CheckpointKind, description: &str, f: F) -> Checkpoint
where
    F: FnOnce(),
{
    let guard = ScopeGuard::enter(kind, description);
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(f)) {
        record(Outcome::error(panic_message(payload)));
    }
    guard.finish()
}

/// Runs caller code inside a containment checkpoint and returns it.
///
/// Nothing recorded inside — passes, failures, or faults — ever surfaces to
/// an enclosing non-containment scope or to the default handler.
pub fn containment_scope<F>(description: &str, f: F) -> Checkpoint
where
    F: FnOnce(),
{
    run_scope(CheckpointKind::Containment, description, f)
}

/// Runs caller code inside a reporting checkpoint.
///
/// At top level the finished checkpoint escalates non-passing outcomes via
/// [`Checkpoint::ensure_passing`]; nested reporting scopes defer to their
/// parent instead.
pub fn reporting_scope<F>(description: &str, f: F) -> Result<Checkpoint, FdtError>
where
    F: FnOnce(),
{
    let checkpoint = run_scope(CheckpointKind::Reporting, description, f);
    if scope_depth() == 0 {
        checkpoint.ensure_passing()?;
    }
    Ok(checkpoint)
}

/// Scoped acquisition of a stack slot; the push is undone on every exit
/// path, including fault paths.
struct ScopeGuard {
    armed: bool,
}

impl ScopeGuard {
    fn enter(kind: CheckpointKind, description: &str) -> Self {
        SCOPE_STACK.with(|stack| {
            stack
                .borrow_mut()
                .push(Checkpoint::new(description, kind));
        });
        Self { armed: true }
    }

    fn finish(mut self) -> Checkpoint {
        self.armed = false;
        finish_active()
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = finish_active();
        }
    }
}

fn finish_active() -> Checkpoint {
    SCOPE_STACK.with(|stack| {
        let mut stack = stack.borrow_mut();
        let Some(finished) = stack.pop() else {
            // Guard discipline keeps push/pop balanced; an empty stack here
            // means finish was already driven on another path.
            return Checkpoint::new("", CheckpointKind::Reporting);
        };
        let chain = match finished.kind() {
            CheckpointKind::Reporting => !stack.is_empty(),
            CheckpointKind::Containment => {
                stack.last().is_some_and(Checkpoint::is_containment)
            }
        };
        if chain {
            if let Some(enclosing) = stack.last_mut() {
                enclosing.record_child(Node::Checkpoint(finished.clone()));
            }
        }
        finished
    })
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
