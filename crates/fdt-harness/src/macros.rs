//! Check macros recording into the ambient scope.

/// Evaluates a boolean expression and records the result into the active
/// checkpoint.
///
/// Records a pass when the expression is true, a failure when it is false,
/// and an error when evaluation faults. The expression source text is
/// captured verbatim. An optional second argument attaches a note to a
/// failure. Returns the recorded [`Outcome`](crate::Outcome).
#[macro_export]
macro_rules! check {
    ($cond:expr) => {
        $crate::scope::record_evaluation(stringify!($cond), None, || $cond)
    };
    ($cond:expr, $note:expr) => {
        $crate::scope::record_evaluation(stringify!($cond), Some($note), || $cond)
    };
}

/// Evaluates an expected-to-fail expression and records a broken marker.
///
/// A false result or a fault records a broken outcome, which the query layer
/// never counts as a failure. An unexpected pass records an error instead.
/// Returns the recorded [`Outcome`](crate::Outcome).
#[macro_export]
macro_rules! check_broken {
    ($cond:expr) => {
        $crate::scope::record_broken_evaluation(stringify!($cond), || $cond)
    };
}
