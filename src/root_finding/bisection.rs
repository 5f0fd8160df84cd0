use super::algorithms::{Algorithm, BracketFamily};
use super::report::{IterationRecord, RootFindingReport, ToleranceSatisfied, Trace};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use super::evaluate::{checked_interval, Evaluator};
use super::signs::sign_change;
use thiserror::Error;

const ALGORITHM: &str = Algorithm::Bracket(BracketFamily::Bisection).algorithm_name();

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),
}

/// Bisection Configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tolerance` and `max_iter`.
///
/// # Construction
/// - Use [`BisectionCfg::new`] then optional setters.
///
/// # Validation
/// └ Setters validate eagerly:
///    ├ `tolerance` > 0 and finite
///    └ `max_iter`  >= 1
#[derive(Debug, Copy, Clone, Default)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl_common_cfg!(BisectionCfg);

/// Calculates midpoint of [a, b]
#[inline]
pub(crate) fn midpoint(a: f64, b: f64) -> f64 {
    0.5 * (a + b)
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that the function `func` is continuous on the interval
/// and that `func(a)` and `func(b)` have opposite signs, guaranteeing a root exists
/// within the interval.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the search interval. Must be finite.
/// ├ `b`    - Other end of the search interval. Must be finite. Order does not matter.
/// └ `cfg`  - [`BisectionCfg`] (tolerance, max_iter)
///
/// # Returns
///
/// [`RootFindingReport`] whose `records` hold, per iteration,
/// ├ `a`, `b` : current bracket
/// ├ `x`      : midpoint `(a + b) / 2`
/// └ `error`  : `|a - b| / 2`, always present
///
/// # Errors
///
/// The following are propagated via [`BisectionError::RootFinding`]
/// ├ [`RootFindingError::InvalidBounds`]       - `a` or `b` is NaN/inf.
/// ├ [`RootFindingError::InvalidInterval`]     - `func(a)` and `func(b)` do not have opposite signs.
/// └ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produces NaN or inf during evaluation.
///
/// # Behavior
/// ├ Terminates when `f(midpoint) == 0` ([`ToleranceSatisfied::ExactRoot`])
/// │ or when `error <= tolerance` ([`ToleranceSatisfied::WidthTolReached`]).
/// ├ Otherwise keeps the half `(a, midpoint)` if it holds a sign change,
/// │ else `(midpoint, b)`.
/// └ The error halves every iteration; the iteration cap only guards against
///   tolerances below what `f64` can resolve.
pub fn bisection<F>(
    func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {

    let tolerance = cfg.tolerance();
    let num_iter  = cfg.max_iter();

    let mut eval = Evaluator::new(func);
    let (mut fa, _) = checked_interval(&mut eval, a, b)?;

    let mut trace = Trace::new(ALGORITHM);
    let mut fm    = fa;     // gets overwritten
    for iter in 1..=num_iter {
        let m     = midpoint(a, b);
        let error = (a - b).abs() * 0.5;
        trace.push(IterationRecord::new(iter, a, b, m, Some(error)));

        fm = eval.eval(m)?;
        if fm == 0.0 {
            return Ok(trace.converged(fm, eval.evals(), ToleranceSatisfied::ExactRoot));
        }
        if error <= tolerance {
            return Ok(trace.converged(fm, eval.evals(), ToleranceSatisfied::WidthTolReached));
        }

        // shrink interval
        if sign_change(fa, fm) {
            b = m;
        } else {
            a  = m;
            fa = fm;
        }
    }

    Ok(trace.exhausted(fm, eval.evals()))
}
