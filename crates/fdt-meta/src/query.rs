use fdt_harness::{containment_scope, ErrorInfo, FdtError, Outcome};

use crate::flatten::nonpassing_outcomes;

/// Runs caller checks inside a fresh containment scope and returns the
/// flattened non-passing outcomes.
///
/// Never fails because of anything `f` does: failing checks become `Fail`
/// entries and faults become `Error` entries instead of propagating. The
/// enclosing test run observes nothing.
pub fn nonpassing_results<F>(f: F) -> Vec<Outcome>
where
    F: FnOnce(),
{
    let checkpoint = containment_scope("nonpassing_results", f);
    nonpassing_outcomes(&checkpoint)
}

/// Returns whether caller checks produced at least one failure.
///
/// An unexpected fault is not absorbed into the boolean: if any error
/// outcome is present the query itself fails, carrying the fault text in
/// its context.
pub fn fails<F>(f: F) -> Result<bool, FdtError>
where
    F: FnOnce(),
{
    let results = nonpassing_results(f);
    if let Some(error) = results.iter().find(|outcome| outcome.is_error()) {
        let mut info = ErrorInfo::new(
            "unexpected-error",
            "an error occurred while probing for failures",
        );
        if let Some(message) = error.message() {
            info = info.with_context("error", message);
        }
        return Err(FdtError::Query(
            info.with_hint("use `errors` when a fault is the expected outcome"),
        ));
    }
    Ok(results.iter().any(Outcome::is_fail))
}

/// Returns whether caller checks produced at least one unexpected fault.
///
/// Equivalent to [`errors_matching`] with an empty pattern. A plain failing
/// check is treated as a misuse of this query and fails it.
pub fn errors<F>(f: F) -> Result<bool, FdtError>
where
    F: FnOnce(),
{
    errors_matching(f, "")
}

/// Returns whether caller checks produced at least one unexpected fault
/// whose message contains `pattern` as a substring.
///
/// The empty pattern matches any fault. A plain failing check fails the
/// query itself, carrying the failing expression in its context.
pub fn errors_matching<F>(f: F, pattern: &str) -> Result<bool, FdtError>
where
    F: FnOnce(),
{
    let results = nonpassing_results(f);
    if let Some(fail) = results.iter().find(|outcome| outcome.is_fail()) {
        let mut info = ErrorInfo::new(
            "unexpected-failure",
            "a check failed while probing for errors",
        );
        if let Some(expression) = fail.expression() {
            info = info.with_context("expression", expression);
        }
        return Err(FdtError::Query(
            info.with_hint("use `fails` when a failing check is the expected outcome"),
        ));
    }
    Ok(results
        .iter()
        .any(|outcome| matches!(outcome, Outcome::Error { message, .. } if message.contains(pattern))))
}
