use super::algorithms::{Algorithm, OpenFamily};
use super::report::{IterationRecord, RootFindingReport, ToleranceSatisfied, Trace};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use super::evaluate::{checked_interval, Evaluator};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum SecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("division by zero in secant step: f(a) == f(b) at a={a}, b={b}")]
    DivisionByZero { a: f64, b: f64 },
}


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tolerance` and `max_iter`.
///
/// # Construction
/// - Use [`SecantCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, Default)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl_common_cfg!(SecantCfg);


/// Calculates the secant x-intercept for the line
/// connecting `(a, fa)` and `(b, fb)`, anchored at `b`:
/// `b - ((b - a) / (fb - fa)) * fb`
///
/// # Returns
/// - `Ok(x_secant)` when `fb != fa`
/// - `Err(DivisionByZero)` otherwise
#[inline]
fn calculate_secant_x_intercept(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
)-> Result<f64, SecantError> {
    let denom = fb - fa;
    if denom == 0.0 {
        return Err(SecantError::DivisionByZero { a, b });
    }

    Ok(b - ((b - a) / denom) * fb)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `a`    : First starting point.  Must be finite
/// - `b`    : Second starting point. Must be finite; `f(a)`, `f(b)` must differ in sign
/// - `cfg`  : [`SecantCfg`] (tolerance, max_iter)
///
/// # Returns
/// [`RootFindingReport`] whose `records` hold, per iteration,
/// - `a`, `b` : the two points the secant line is drawn through
/// - `x`      : new estimate
/// - `error`  : `|x - b|`, always present
///
/// # Errors
/// - [`SecantError::DivisionByZero`]           : `f(a) == f(b)` in a step
///
/// * Propagated via [`SecantError::RootFinding`]
/// - [`RootFindingError::InvalidBounds`]       : `a` or `b` is NaN/inf
/// - [`RootFindingError::InvalidInterval`]     : no sign change on `[a, b]`
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
///
/// # Behavior
/// - Update:
///     - x = b - (b - a) / (f(b) - f(a)) * f(b)
///     - then shift: a <- b, b <- x, reusing the stored function values
/// - Tolerance: stops once `|x - b| <= tolerance`
///
/// # Notes
/// - The sign-change precondition is applied for consistency with the
///   bracketing methods; the iteration itself does not keep a bracket.
/// - Convergence is superlinear (~1.618) near simple roots.
pub fn secant<F> (
    func: F,
    mut a: f64,
    mut b: f64,
    cfg: SecantCfg
) -> Result<RootFindingReport, SecantError>
where F: FnMut(f64) -> f64 {

    let algo_name = Algorithm::Open(OpenFamily::Secant).algorithm_name();
    let tolerance = cfg.tolerance();
    let num_iter  = cfg.max_iter();

    let mut eval = Evaluator::new(func);
    let (mut fa, mut fb) = checked_interval(&mut eval, a, b)?;

    let mut trace = Trace::new(algo_name);
    for iter in 1..=num_iter {
        let x     = calculate_secant_x_intercept((a, fa), (b, fb))?;
        let error = (x - b).abs();
        trace.push(IterationRecord::new(iter, a, b, x, Some(error)));

        let fx = eval.eval(x)?;
        if error <= tolerance {
            return Ok(trace.converged(fx, eval.evals(), ToleranceSatisfied::StepSizeReached));
        }

        // a -> b; b -> x
        a  = b;
        fa = fb;
        b  = x;
        fb = fx;
    }

    Ok(trace.exhausted(fb, eval.evals()))
}
