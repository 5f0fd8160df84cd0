//! Newton-Raphson method

use super::algorithms::{Algorithm, OpenFamily};
use super::report::{IterationRecord, RootFindingReport, ToleranceSatisfied, Trace};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use super::evaluate::{checked_interval, Evaluator};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("division by zero: derivative vanishes at x={x}")]
    DivisionByZero { x: f64 },

    #[error("step non-finite at x={x}, step={step}; x + step undefined")]
    StepNotFinite { x: f64, step: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },

    #[error("finite-difference step not representable at x={x}, h={h};\
             try smaller |x| scaling or analytic derivative"
    )]
    FiniteDifferenceStepUnrepresentable { x: f64, h: f64 }
}


/// Newton configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tolerance` and `max_iter`.
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, Default)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl_common_cfg!(NewtonCfg);


/// ULP helpers for finite-difference fallback near representability edges
#[inline]
fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY { return x; }
    // smallest positive subnormal
    if x == 0.0 { return f64::from_bits(1); }

    let bits   = x.to_bits();
    let bumped = if x > 0.0 { bits + 1 } else { bits - 1 };
    f64::from_bits(bumped)
}
#[inline]
fn next_down(x: f64) -> f64 {
    if x.is_nan() || x == f64::NEG_INFINITY { return x; }
    // largest negative subnormal
    if x == 0.0 { return -f64::from_bits(1); }

    let bits = x.to_bits();
    let bumped = if x > 0.0 { bits - 1 } else { bits + 1 };
    f64::from_bits(bumped)
}


/// Derivative source for the iteration.
/// - `Analytic`         : user-supplied `f'(x)`
/// - `FiniteDifference` : central difference on `f` itself; one-sided,
///                        pointing inward, at the interval endpoints
enum Derivative<G> {
    Analytic(G),
    FiniteDifference,
}
impl<G> Derivative<G>
where G: FnMut(f64) -> f64 {
    fn eval<F>(&mut self, f: &mut Evaluator<F>, x: f64) -> Result<f64, NewtonError>
    where F: FnMut(f64) -> f64 {
        match self {
            Derivative::Analytic(df)       => eval_dfx_analytic(df, f, x),
            Derivative::FiniteDifference   => eval_dfx_fd(f, x),
        }
    }

    /// `f'` at an interval endpoint, sampling only towards `inward`.
    /// Infinite values pass through so `f * f'` still picks a side;
    /// NaN does not.
    fn at_endpoint<F>(
        &mut self,
        f: &mut Evaluator<F>,
        x: f64,
        fx: f64,
        inward: f64,
    ) -> Result<f64, NewtonError>
    where F: FnMut(f64) -> f64 {
        let dfx = match self {
            Derivative::Analytic(df)     => { f.count(1); df(x) },
            Derivative::FiniteDifference => eval_dfx_one_sided(f, x, fx, inward)?,
        };
        if dfx.is_nan() {
            return Err(NewtonError::DerivativeNotFinite { x, dfx });
        }

        Ok(dfx)
    }
}

/// Helpers
/// - `eval_dfx_analytic`  : evaluates user-supplied derivative `df(x)`
/// - `eval_dfx_fd`        : central finite-difference with ULP rescue
/// - `eval_dfx_one_sided` : forward/backward difference towards `inward`
#[inline]
fn eval_dfx_analytic<F, G>(
    df: &mut G,
    f: &mut Evaluator<F>,
    x: f64,
) -> Result<f64, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    let dfx = { f.count(1); df(x) };
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }

    Ok(dfx)
}
#[inline]
fn eval_dfx_fd<F>(
    f: &mut Evaluator<F>,
    x: f64,
) -> Result<f64, NewtonError>  where F: FnMut(f64) -> f64 {
    // central finite-difference
    let mut h  = f64::EPSILON.cbrt() * x.abs().max(1.0);
    let mut xp = x + h;
    let mut xm = x - h;

    // try rescue if representability collapses
    if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x {
        xp = next_up(x);
        xm = next_down(x);
        h = 0.5 * (xp - xm);

        if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x {
            return Err(NewtonError::FiniteDifferenceStepUnrepresentable { x, h });
        }
    }

    let fxp = f.eval(xp)?;
    let fxm = f.eval(xm)?;
    let dfx = (fxp - fxm) / (2.0 * h);
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }

    Ok(dfx)
}
#[inline]
fn eval_dfx_one_sided<F>(
    f: &mut Evaluator<F>,
    x: f64,
    fx: f64,
    inward: f64,
) -> Result<f64, NewtonError>  where F: FnMut(f64) -> f64 {
    // never step past the interval midpoint
    let h       = (f64::EPSILON.sqrt() * x.abs().max(1.0)).min(0.5 * (inward - x).abs());
    let forward = inward > x;
    let mut xs  = if forward { x + h } else { x - h };

    if !xs.is_finite() || xs == x {
        xs = if forward { next_up(x) } else { next_down(x) };

        if !xs.is_finite() || xs == x {
            return Err(NewtonError::FiniteDifferenceStepUnrepresentable { x, h });
        }
    }

    let fxs = f.eval(xs)?;
    Ok((fxs - fx) / (xs - x))
}


/// Picks the endpoint the tangent converges from: the first of `a`, `b`
/// with `f(x) * f'(x) > 0`, falling back to `b`.
///
/// Returns `(x0, f(x0), f'(x0))`.
fn initial_guess(
    (a, fa, dfa): (f64, f64, f64),
    (b, fb, dfb): (f64, f64, f64),
) -> (f64, f64, f64) {
    if fa * dfa > 0.0 {
        (a, fa, dfa)
    } else {
        // `b` either satisfies f * f' > 0 or is the fallback
        (b, fb, dfb)
    }
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
/// Supports analytic derivatives or a central finite-difference fallback.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : optional analytic derivative; if `None`, use finite-difference
/// - `a`, `b`: interval used only to pick the initial guess; must show a sign change
/// - `cfg`   : [`NewtonCfg`] (tolerance, max_iter)
///
/// # Returns
/// [`RootFindingReport`] whose `records` hold, per iteration,
/// - `a`, `b` : the original interval, unchanged
/// - `x`      : new estimate `x_n - f(x_n) / f'(x_n)`
/// - `error`  : `|x_{n+1} - x_n|`; `None` on iteration 1
///
/// # Errors
/// - [`NewtonError::DivisionByZero`]               : `f'(x_n) == 0`
/// - [`NewtonError::StepNotFinite`]                : `-f / f'` overflowed
/// - [`NewtonError::DerivativeNotFinite`]          : derivative non-finite
/// - [`NewtonError::FiniteDifferenceStepUnrepresentable`]  : FD step unrepresentable near `x`
///
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::InvalidBounds`]           : `a` or `b` non-finite
/// - [`RootFindingError::InvalidInterval`]         : no sign change on `[a, b]`
/// - [`RootFindingError::NonFiniteEvaluation`]     : `f(x)` produced NaN/inf
///
/// # Behavior
/// - Initial guess: the endpoint where `f * f' > 0`, checking `a` first;
///   `b` if neither qualifies. An infinite `f'` at an endpoint only rules it
///   out; it is an error only at the chosen start or a later iterate.
/// - Without `dfunc`, endpoint derivatives are one-sided differences taken
///   inside `[a, b]`, so `f` is never sampled outside the interval there.
/// - Iteration 1 has no previous estimate, so it can never terminate the run;
///   from iteration 2 on, stops once `error <= tolerance`.
///
/// # Notes
/// - Quadratic convergence requires a good initial guess and smooth `f`
/// - Convergence is *local only*. Poor guesses or ill-behaved functions can
///   diverge or cycle; the iteration cap then ends the run.
pub fn newton<F, G>(
    func: F,
    dfunc: Option<G>,
    a: f64,
    b: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64 {

    let algorithm = Algorithm::Open(OpenFamily::Newton);
    let algo_name = algorithm.algorithm_name();
    let tolerance = cfg.tolerance();
    let num_iter  = cfg.max_iter();

    let mut eval = Evaluator::new(func);
    let (fa, fb) = checked_interval(&mut eval, a, b)?;

    let mut derivative = match dfunc {
        Some(df) => Derivative::Analytic(df),
        None     => Derivative::FiniteDifference,
    };
    let dfa = derivative.at_endpoint(&mut eval, a, fa, b)?;
    let dfb = derivative.at_endpoint(&mut eval, b, fb, a)?;

    let (mut x, mut fx, mut dfx) = initial_guess((a, fa, dfa), (b, fb, dfb));
    log::trace!("{algo_name} initial guess x0={x} (f={fx}, f'={dfx})");
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }

    let mut trace = Trace::new(algo_name);
    for iter in 1..=num_iter {
        if iter > 1 {
            dfx = derivative.eval(&mut eval, x)?;
        }
        if dfx == 0.0 {
            return Err(NewtonError::DivisionByZero { x });
        }

        let step = -fx / dfx;
        if !step.is_finite() {
            return Err(NewtonError::StepNotFinite { x, step });
        }

        let x_next = x + step;
        let error  = (iter > 1).then(|| (x_next - x).abs());
        trace.push(IterationRecord::new(iter, a, b, x_next, error));

        let fx_next = eval.eval(x_next)?;
        if matches!(error, Some(e) if e <= tolerance) {
            return Ok(trace.converged(fx_next, eval.evals(), ToleranceSatisfied::StepSizeReached));
        }

        x  = x_next;
        fx = fx_next;
    }

    Ok(trace.exhausted(fx, eval.evals()))
}
