use super::algorithms::{Algorithm, BracketFamily};
use super::report::{IterationRecord, RootFindingReport, ToleranceSatisfied, Trace};
use super::errors::{AlgorithmError, RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use super::evaluate::{checked_interval, Evaluator};
use super::signs::sign_change;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegulaFalsiError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    #[error("division by zero in false-position step: f(a)={fa}, f(b)={fb}")]
    DivisionByZero { fa: f64, fb: f64 },
}

/// Which false-position variant to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegulaFalsiVariant {
    // classic regula falsi: one endpoint may stay fixed for convex/concave f
    Pure,

    // illinois: when same side is chosen consecutively, half the retained
    // endpoint's function value to avoid endpoint freezing.
    Illinois,

    // pegasus: same as illinois, but scale by `f(x_k) / (f(x_k) + f(prev))`
    // where `prev` is the endpoint about to be replaced (same sign as `f(x_k)`).
    Pegasus,

    // anderson-bjorck: same as illinois, but scale by `ratio` if `ratio` > 0 else
    // half like illinois. `ratio = 1 - f(x_k) / f(prev)` where `prev` is the
    // endpoint about to be replaced (same sign as `f(x_k)`).
    AndersonBjorck,
}
impl RegulaFalsiVariant {
    const fn family(self) -> BracketFamily {
        match self {
            RegulaFalsiVariant::Pure           => BracketFamily::RegulaFalsiPure,
            RegulaFalsiVariant::Illinois       => BracketFamily::RegulaFalsiIllinois,
            RegulaFalsiVariant::Pegasus        => BracketFamily::RegulaFalsiPegasus,
            RegulaFalsiVariant::AndersonBjorck => BracketFamily::RegulaFalsiAndersonBjorck,
        }
    }

    /// Factor applied to the retained endpoint's function value `f_keep`
    /// when the same side is kept twice in a row. `f_new` is the new
    /// estimate's value and `f_drop` the value of the endpoint it replaces;
    /// both share a sign, so every factor is positive.
    fn scale(self, f_new: f64, f_drop: f64) -> f64 {
        match self {
            RegulaFalsiVariant::Pure           => 1.0,
            RegulaFalsiVariant::Illinois       => 0.5,
            RegulaFalsiVariant::Pegasus        => f_drop / (f_drop + f_new),
            RegulaFalsiVariant::AndersonBjorck => {
                let ratio = 1.0 - f_new / f_drop;
                if ratio <= 0.0 { 0.5 } else { ratio }
            },
        }
    }
}

/// RegulaFalsi Configuration
///
/// # Fields
/// - `common`  : [`CommonCfg`] with `tolerance` and `max_iter`.
/// - `variant` : false-position variant, [`BracketFamily::RegulaFalsiPure`] by default.
///
/// # Construction
/// - Use [`RegulaFalsiCfg::new`] then optional setters.
/// - [`RegulaFalsiCfg::set_variant`] only accepts the regula falsi families.
#[derive(Debug, Copy, Clone)]
pub struct RegulaFalsiCfg {
    common:  CommonCfg,
    variant: RegulaFalsiVariant,
}
impl RegulaFalsiCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common:  CommonCfg::new(),
            variant: RegulaFalsiVariant::Pure,
        }
    }

    pub fn set_variant(mut self, family: BracketFamily) -> Result<Self, AlgorithmError> {
        self.variant = match family {
            BracketFamily::RegulaFalsiPure           => RegulaFalsiVariant::Pure,
            BracketFamily::RegulaFalsiIllinois       => RegulaFalsiVariant::Illinois,
            BracketFamily::RegulaFalsiPegasus        => RegulaFalsiVariant::Pegasus,
            BracketFamily::RegulaFalsiAndersonBjorck => RegulaFalsiVariant::AndersonBjorck,
            BracketFamily::Bisection => {
                return Err(AlgorithmError::IncompatibleAlgorithm {
                    algorithm: Algorithm::Bracket(family)
                });
            }
        };
        Ok(self)
    }

    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::Bracket(self.variant.family())
    }
}
impl Default for RegulaFalsiCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(RegulaFalsiCfg);

/// Root of the line through `(a, fa)` and `(b, fb)`:
/// `a - ((b - a) / (fb - fa)) * fa`.
///
/// # Returns
/// ├ `Ok(x)` when `fb != fa`
/// └ `Err(DivisionByZero)` otherwise
#[inline]
fn false_position(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
) -> Result<f64, RegulaFalsiError> {
    let denom = fb - fa;
    if denom == 0.0 {
        return Err(RegulaFalsiError::DivisionByZero { fa, fb });
    }

    Ok(a - ((b - a) / denom) * fa)
}


/// Finds a root of a function using the ancient
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// This method assumes that the function `func` is continuous on the interval
/// and that `func(a)` and `func(b)` have opposite signs, guaranteeing a root exists
/// within the interval.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the search interval. Must be finite.
/// ├ `b`    - Other end of the search interval. Must be finite.
/// └ `cfg`  - [`RegulaFalsiCfg`] (tolerance, max_iter, variant)
///
/// # Returns
///
/// [`RootFindingReport`] whose `records` hold, per iteration,
/// ├ `a`, `b` : current bracket
/// ├ `x`      : false-position estimate
/// └ `error`  : `|x_n - x_{n-1}|`; `None` on iteration 1
///
/// `algorithm_name` is variant-specific, e.g. `"regula_falsi_pure"`.
///
/// # Errors
///
/// ┌ [`RegulaFalsiError::DivisionByZero`]      - `f(b) - f(a) == 0` in a step.
/// │
/// * The following are propagated via [`RegulaFalsiError::RootFinding`]
/// ├ [`RootFindingError::InvalidBounds`]       - `a` or `b` is NaN/inf.
/// ├ [`RootFindingError::InvalidInterval`]     - `func(a)` and `func(b)` do not have opposite signs.
/// └ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produces NaN or inf during evaluation.
///
/// # Behavior
/// ├ Terminates when `f(x) == 0` ([`ToleranceSatisfied::ExactRoot`]), or from
/// │ iteration 2 on when `error < tolerance` ([`ToleranceSatisfied::StepSizeReached`]).
/// └ Otherwise keeps `(a, x)` if it holds a sign change, else `(x, b)`.
///
/// # Notes
/// └ With the pure variant one endpoint can stay fixed for many iterations
///   on convex or concave functions, so the step error may drop below the
///   tolerance while the estimate is still further than that from the root.
///   The modified variants rescale the stuck endpoint to avoid this.
pub fn regula_falsi<F> (
    func: F,
    mut a: f64,
    mut b: f64,
    cfg: RegulaFalsiCfg
) -> Result<RootFindingReport, RegulaFalsiError>
where F: FnMut(f64) -> f64 {

    let algorithm = cfg.algorithm().algorithm_name();
    let variant   = cfg.variant;
    let tolerance = cfg.tolerance();
    let num_iter  = cfg.max_iter();

    let mut eval = Evaluator::new(func);
    let (mut fa, mut fb) = checked_interval(&mut eval, a, b)?;

    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Side { Left, Right }
    let mut last_side: Option<Side> = None;

    let mut trace  = Trace::new(algorithm);
    let mut prev_x: Option<f64> = None;
    let mut fx     = fa;    // gets overwritten
    for iter in 1..=num_iter {
        let x     = false_position((a, fa), (b, fb))?;
        let error = prev_x.map(|p| (x - p).abs());
        trace.push(IterationRecord::new(iter, a, b, x, error));

        fx = eval.eval(x)?;
        if fx == 0.0 {
            return Ok(trace.converged(fx, eval.evals(), ToleranceSatisfied::ExactRoot));
        }
        if matches!(error, Some(e) if e < tolerance) {
            return Ok(trace.converged(fx, eval.evals(), ToleranceSatisfied::StepSizeReached));
        }

        // shrink interval; rescale the retained endpoint when a side repeats
        if sign_change(fa, fx) {
            if last_side == Some(Side::Right) {
                fa *= variant.scale(fx, fb);
            }
            b  = x;
            fb = fx;
            last_side = Some(Side::Right);
        } else {
            if last_side == Some(Side::Left) {
                fb *= variant.scale(fx, fa);
            }
            a  = x;
            fa = fx;
            last_side = Some(Side::Left);
        }

        prev_x = Some(x);
    }

    Ok(trace.exhausted(fx, eval.evals()))
}
