use fdt_harness::Outcome;

#[test]
fn pass_surface() {
    let outcome = Outcome::pass("1 == 1");
    assert!(outcome.is_pass());
    assert_eq!(outcome.label(), "pass");
    assert_eq!(outcome.expression(), Some("1 == 1"));
    assert_eq!(outcome.message(), None);
    assert_eq!(outcome.to_string(), "pass: 1 == 1");
}

#[test]
fn fail_surface() {
    let outcome = Outcome::fail_noted("x < tol", "residual bound");
    assert!(outcome.is_fail());
    assert_eq!(outcome.label(), "fail");
    assert_eq!(outcome.expression(), Some("x < tol"));
    assert_eq!(outcome.to_string(), "fail: x < tol (residual bound)");
}

#[test]
fn error_surface() {
    let between = Outcome::error("index out of bounds");
    assert!(between.is_error());
    assert_eq!(between.expression(), None);
    assert_eq!(between.message(), Some("index out of bounds"));

    let during = Outcome::error_in("grad(f)(x)", "division by zero");
    assert_eq!(during.expression(), Some("grad(f)(x)"));
    assert_eq!(during.to_string(), "error: division by zero at grad(f)(x)");

    let detailed = Outcome::error_detailed("overflow", "u32 addition");
    assert_eq!(detailed.to_string(), "error: overflow [u32 addition]");
}

#[test]
fn broken_surface() {
    let outcome = Outcome::broken("known_gap == 0.0");
    assert!(outcome.is_broken());
    assert!(!outcome.is_fail());
    assert_eq!(outcome.label(), "broken");
    assert_eq!(outcome.to_string(), "broken: known_gap == 0.0");
}
