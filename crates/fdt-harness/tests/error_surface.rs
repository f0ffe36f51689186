use fdt_harness::{ErrorInfo, FdtError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("scope", "outer")
        .with_context("depth", "2")
}

#[test]
fn scope_error_surface() {
    let err = FdtError::Scope(sample_info("SC001", "unbalanced scope"));
    assert_eq!(err.info().code, "SC001");
    assert!(err.info().context.contains_key("scope"));
}

#[test]
fn query_error_surface() {
    let err = FdtError::Query(sample_info("Q001", "unexpected fault"));
    assert_eq!(err.info().code, "Q001");
    assert!(err.info().context.contains_key("depth"));
}

#[test]
fn report_error_surface() {
    let err = FdtError::Report(sample_info("RP001", "unwritable path"));
    assert_eq!(err.info().code, "RP001");
}

#[test]
fn serde_error_surface() {
    let err = FdtError::Serde(sample_info("S001", "schema mismatch"));
    assert_eq!(err.info().code, "S001");
}

#[test]
fn error_info_display_carries_hint() {
    let info = ErrorInfo::new("SC002", "scope recorded failures").with_hint("inspect the tally");
    let rendered = info.to_string();
    assert!(rendered.contains("code: SC002"));
    assert!(rendered.contains("hint: inspect the tally"));
}
