use fdt_harness::{check, check_broken, FdtError};
use fdt_meta::{errors, errors_matching, fails, nonpassing_results};

#[test]
fn empty_and_passing_closures_yield_nothing() {
    assert!(nonpassing_results(|| {}).is_empty());
    assert!(nonpassing_results(|| {
        check!(1 + 1 == 2);
        check!(true);
    })
    .is_empty());
}

#[test]
fn failing_check_records_its_expression() {
    let results = nonpassing_results(|| {
        check!(false);
    });
    assert_eq!(results.len(), 1);
    assert!(results[0].is_fail());
    assert_eq!(results[0].expression(), Some("false"));
}

#[test]
fn bare_fault_records_one_error() {
    let results = nonpassing_results(|| panic!("noo"));
    assert_eq!(results.len(), 1);
    assert!(results[0].is_error());
    assert_eq!(results[0].message(), Some("noo"));
}

#[test]
fn fault_during_check_records_one_error() {
    let results = nonpassing_results(|| {
        let _ = check!(panic!("nooo"));
    });
    assert_eq!(results.len(), 1);
    assert!(results[0].is_error());
}

#[test]
fn fails_classifies_failures() -> Result<(), FdtError> {
    assert!(!fails(|| {
        check!(true);
    })?);
    assert!(fails(|| {
        check!(false);
    })?);
    assert!(!fails(|| {
        let _ = check_broken!(1 == 2);
    })?);
    Ok(())
}

#[test]
fn fails_escalates_unexpected_faults() {
    let err = fails(|| {
        let _ = check!(panic!("Bad"));
    })
    .unwrap_err();
    assert_eq!(err.info().code, "unexpected-error");
    assert_eq!(
        err.info().context.get("error").map(String::as_str),
        Some("Bad")
    );
}

#[test]
fn errors_classifies_faults() -> Result<(), FdtError> {
    assert!(!errors(|| {
        check!(true);
    })?);
    assert!(errors(|| panic!("nooo"))?);
    assert!(errors_matching(|| panic!("nooo"), "noo")?);
    assert!(!errors_matching(|| panic!("nooo"), "ok")?);
    Ok(())
}

#[test]
fn errors_escalates_plain_failures() {
    let err = errors(|| {
        check!(1 + 1 == 3);
    })
    .unwrap_err();
    assert_eq!(err.info().code, "unexpected-failure");
    assert_eq!(
        err.info().context.get("expression").map(String::as_str),
        Some("1 + 1 == 3")
    );
}
