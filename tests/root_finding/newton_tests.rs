use approx::assert_abs_diff_eq;
use rootstep::root_finding::newton::{newton, NewtonCfg, NewtonError};
use rootstep::root_finding::errors::RootFindingError;
use rootstep::root_finding::report::{TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), NewtonError>;

const ROOT: f64 = 1.309_799_585_7;

fn f(x: f64) -> f64 { (-x).exp() - x.ln() }
fn df(x: f64) -> f64 { -(-x).exp() - 1.0 / x }

#[test]
fn first_record_has_no_error() -> TestResult {
    let cfg = NewtonCfg::new().set_tolerance(0.01)?;

    let res = newton(f, Some(df), 0.1, 2.0, cfg)?;

    assert_eq!(res.iterations, 4);
    assert_eq!(res.records[0].error, None);
    for record in &res.records[1..] {
        assert!(record.error.is_some());
    }
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    assert_abs_diff_eq!(res.root, ROOT, epsilon = 1e-4);
    Ok(())
}

#[test]
fn records_keep_original_interval() -> TestResult {
    let cfg = NewtonCfg::new().set_tolerance(1e-10)?;

    let res = newton(f, Some(df), 0.1, 2.0, cfg)?;

    for record in &res.records {
        assert_eq!((record.a, record.b), (0.1, 2.0));
    }
    for pair in res.records.windows(2) {
        assert_eq!(pair[1].error, Some((pair[1].x - pair[0].x).abs()));
    }
    Ok(())
}

#[test]
fn finite_difference_derivative() -> TestResult {
    let cfg = NewtonCfg::new().set_tolerance(1e-8)?;

    let res = newton(f, None::<fn(f64) -> f64>, 0.1, 2.0, cfg)?;

    assert_eq!(res.records[0].error, None);
    assert_abs_diff_eq!(res.root, ROOT, epsilon = 1e-8);
    Ok(())
}

#[test]
fn converges_quadratically() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_tolerance(1e-10)?;

    let res = newton(f, Some(df), 1.0, 2.0, cfg)?;

    // starts from b = 2, where f * f' > 0
    assert_eq!(res.records[0].x, 1.5);
    assert_eq!(res.iterations, 5);

    // e_{k+1} / e_k^2 -> |f''/(2 f')| = 1 / (2 sqrt 2)
    let errors: Vec<f64> = res.records.iter().filter_map(|r| r.error).collect();
    for pair in errors.windows(2) {
        let ratio = pair[1] / (pair[0] * pair[0]);
        assert!(0.3 < ratio && ratio < 0.4, "ratio={ratio}");
    }
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-12);
    Ok(())
}

#[test]
fn initial_guess_prefers_a() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_tolerance(1e-10)?;

    // b = 0 has f'(b) = 0 and would divide by zero if picked
    let res = newton(f, Some(df), 1.5, 0.0, cfg)?;

    assert_abs_diff_eq!(res.records[0].x, 1.5 - 0.25 / 3.0, epsilon = 1e-15);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-12);
    Ok(())
}

#[test]
fn identity_converges_on_second_iteration() -> TestResult {
    let cfg = NewtonCfg::new().set_tolerance(0.05)?;

    let res = newton(|x: f64| x, Some(|_x: f64| 1.0), -10.0, 10.0, cfg)?;

    assert_eq!(res.iterations, 2);
    assert_eq!(res.records[0].error, None);
    assert_eq!(res.records[1].error, Some(0.0));
    assert_eq!(res.root, 0.0);
    Ok(())
}

#[test]
fn zero_derivative_is_division_by_zero() {
    // neither endpoint has f * f' > 0, so b = 0 is used and f'(0) = 0
    let f   = |x: f64| 1.0 - x * x;
    let df  = |x: f64| -2.0 * x;
    let cfg = NewtonCfg::new();

    let err = newton(f, Some(df), -2.0, 0.0, cfg).unwrap_err();
    assert!(matches!(err, NewtonError::DivisionByZero { x } if x == 0.0));
}

#[test]
fn derivative_not_finite() {
    let cfg = NewtonCfg::new();
    let err = newton(|x: f64| x, Some(|_x: f64| f64::NAN), -1.0, 1.0, cfg).unwrap_err();

    assert!(matches!(err, NewtonError::DerivativeNotFinite { x, dfx } if x == -1.0 && dfx.is_nan()));
}

#[test]
fn infinite_endpoint_derivative_only_rules_out_that_endpoint() -> TestResult {
    // f'(0) = inf, so f * f' = -inf at a and b = 2 is the start
    let f   = |x: f64| x.sqrt() - 1.0;
    let df  = |x: f64| 0.5 / x.sqrt();
    let cfg = NewtonCfg::new().set_tolerance(1e-10)?;

    let res = newton(f, Some(df), 0.0, 2.0, cfg)?;

    assert_abs_diff_eq!(res.records[0].x, 2.0 * 2.0_f64.sqrt() - 2.0, epsilon = 1e-12);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(res.root, 1.0, epsilon = 1e-10);
    Ok(())
}

#[test]
fn finite_difference_at_domain_edge() -> TestResult {
    // sqrt is undefined left of a = 0; endpoint differences look inward
    let f   = |x: f64| x.sqrt() - 1.0;
    let cfg = NewtonCfg::new().set_tolerance(1e-10)?;

    let res = newton(f, None::<fn(f64) -> f64>, 0.0, 2.0, cfg)?;

    assert!(res.records[0].x > 0.0);
    assert_abs_diff_eq!(res.root, 1.0, epsilon = 1e-8);
    Ok(())
}

#[test]
fn infinite_derivative_at_start_is_an_error() {
    // f * f' = +inf at b, so b is picked and then rejected
    let err = newton(|x: f64| x, Some(|_x: f64| f64::INFINITY), -1.0, 1.0, NewtonCfg::new()).unwrap_err();

    assert!(matches!(err, NewtonError::DerivativeNotFinite { x, dfx } if x == 1.0 && dfx.is_infinite()));
}

#[test]
fn overflowing_step_is_an_error() {
    // -f / f' = -1 / 1e-320 overflows
    let cfg    = NewtonCfg::new();
    let result = newton(|x: f64| x, Some(|_x: f64| 1e-320), -1.0, 1.0, cfg);

    let Err(err) = result else { panic!("expected an error, got a report") };
    assert!(matches!(err, NewtonError::StepNotFinite { x, step } if x == 1.0 && step.is_infinite()));
}

#[test]
fn no_sign_change() {
    let f   = |x: f64| x * x + 1.0;
    let cfg = NewtonCfg::new();
    let err = newton(f, Some(|x: f64| 2.0 * x), -1.0, 1.0, cfg).unwrap_err();

    assert!(matches!(
        err,
        NewtonError::RootFinding(RootFindingError::InvalidInterval { lo, hi })
        if lo == -1.0 && hi == 1.0
    ));
}

#[test]
fn cycling_hits_iteration_limit() -> TestResult {
    // classic 0 <-> 1 cycle of x^3 - 2x + 2
    let f   = |x: f64| x.powi(3) - 2.0 * x + 2.0;
    let df  = |x: f64| 3.0 * x * x - 2.0;
    let cfg = NewtonCfg::new().set_tolerance(1e-6)?.set_max_iter(10)?;

    let res = newton(f, Some(df), -3.0, 0.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.iterations, 10);
    for (i, record) in res.records.iter().enumerate() {
        let expected = if i % 2 == 0 { 1.0 } else { 0.0 };
        assert_eq!(record.x, expected);
    }
    Ok(())
}
