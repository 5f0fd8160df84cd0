//! tests for the secant root-finding algorithm
use approx::assert_abs_diff_eq;
use rootstep::root_finding::errors::RootFindingError;
use rootstep::root_finding::report::{TerminationReason, ToleranceSatisfied};
use rootstep::root_finding::secant::{secant, SecantCfg, SecantError};

type TestResult = Result<(), SecantError>;

#[test]
fn error_shrinks_monotonically_near_root() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_tolerance(1e-10)?;

    let res = secant(f, 1.0, 2.0, cfg)?;

    assert_eq!(res.iterations, 7);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    for record in &res.records {
        assert_eq!(record.error, Some((record.x - record.b).abs()));
    }
    for pair in res.records.windows(2) {
        assert!(pair[1].error.unwrap() < pair[0].error.unwrap(), "iteration {}", pair[1].iteration);
    }
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-12);
    Ok(())
}

#[test]
fn points_shift_forward() -> TestResult {
    let f   = |x: f64| (-x).exp() - x.ln();
    let cfg = SecantCfg::new().set_tolerance(0.01)?;

    let res = secant(f, 0.1, 2.0, cfg)?;

    assert_eq!(res.iterations, 5);
    assert_eq!((res.records[0].a, res.records[0].b), (0.1, 2.0));
    for pair in res.records.windows(2) {
        assert_eq!(pair[1].a, pair[0].b);
        assert_eq!(pair[1].b, pair[0].x);
    }
    assert_abs_diff_eq!(res.root, 1.309_799_585_7, epsilon = 0.01);
    Ok(())
}

#[test]
fn identity_converges_on_second_iteration() -> TestResult {
    let cfg = SecantCfg::new().set_tolerance(0.05)?;

    let res = secant(|x: f64| x, -10.0, 10.0, cfg)?;

    assert_eq!(res.iterations, 2);
    assert_eq!(res.records[0].error, Some(10.0));
    assert_eq!(res.records[1].error, Some(0.0));
    assert_eq!(res.root, 0.0);
    Ok(())
}

#[test]
fn flat_secant_is_division_by_zero() {
    // f(1) == f(0.5) after the first shift
    let f   = |x: f64| if x < 0.5 { -1.0 } else { 1.0 };
    let cfg = SecantCfg::new().set_tolerance(1e-6).unwrap();
    let err = secant(f, 0.0, 1.0, cfg).unwrap_err();

    assert!(matches!(err, SecantError::DivisionByZero { a, b } if a == 1.0 && b == 0.5));
}

#[test]
fn no_sign_change() {
    let f   = |x: f64| x * x + 1.0;
    let cfg = SecantCfg::new();
    let err = secant(f, 2.0, -1.0, cfg).unwrap_err();

    assert!(matches!(
        err,
        SecantError::RootFinding(RootFindingError::InvalidInterval { lo, hi })
        if lo == -1.0 && hi == 2.0
    ));
}

#[test]
fn equal_points_have_no_sign_change() {
    let f   = |x: f64| x - 1.0;
    let cfg = SecantCfg::new();
    let err = secant(f, 3.0, 3.0, cfg).unwrap_err();

    assert!(matches!(err, SecantError::RootFinding(RootFindingError::InvalidInterval { .. })));
}

#[test]
fn uses_max_iter() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_tolerance(1e-14)?.set_max_iter(2)?;

    let res = secant(f, 1.0, 2.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 2);
    assert_eq!(res.root, res.records[1].x);
    assert_abs_diff_eq!(res.f_root, res.root * res.root - 2.0, epsilon = 1e-15);
    Ok(())
}
