//! Uniform entry point over all root-finding methods.
//!
//! [`find_root`] runs any [`Algorithm`] as
//! `method(function, a, b, tolerance)`, with the default iteration cap.
//! Use the per-method functions directly to set `max_iter`.

use super::algorithms::{Algorithm, BracketFamily, OpenFamily};
use super::bisection::{bisection, BisectionCfg, BisectionError};
use super::errors::{AlgorithmError, RootFindingError, ToleranceError};
use super::newton::{newton, NewtonCfg, NewtonError};
use super::regula_falsi::{regula_falsi, RegulaFalsiCfg, RegulaFalsiError};
use super::report::RootFindingReport;
use super::secant::{secant, SecantCfg, SecantError};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error(transparent)]
    Bisection(#[from] BisectionError),

    #[error(transparent)]
    Newton(#[from] NewtonError),

    #[error(transparent)]
    RegulaFalsi(#[from] RegulaFalsiError),

    #[error(transparent)]
    Secant(#[from] SecantError),
}
impl SolveError {
    /// The shared runtime error underneath, if this is one.
    pub fn root_finding(&self) -> Option<&RootFindingError> {
        match self {
            SolveError::Bisection(BisectionError::RootFinding(e))
            | SolveError::Newton(NewtonError::RootFinding(e))
            | SolveError::RegulaFalsi(RegulaFalsiError::RootFinding(e))
            | SolveError::Secant(SecantError::RootFinding(e)) => Some(e),
            _ => None,
        }
    }

    /// `true` if the sign-change test failed on the initial interval.
    pub fn is_invalid_interval(&self) -> bool {
        matches!(self.root_finding(), Some(RootFindingError::InvalidInterval { .. }))
    }

    /// `true` for any of the per-method division-by-zero failures.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(
            self,
            SolveError::Newton(NewtonError::DivisionByZero { .. })
            | SolveError::RegulaFalsi(RegulaFalsiError::DivisionByZero { .. })
            | SolveError::Secant(SecantError::DivisionByZero { .. })
        )
    }
}


/// Runs `algorithm` on `func` over the interval `a`, `b`.
///
/// # Arguments
/// - `algorithm` : method to run
/// - `func`      : function whose root is sought
/// - `dfunc`     : analytic derivative; only read by Newton-Raphson, which
///                 falls back to a finite difference when `None`
/// - `a`, `b`    : interval endpoints, any order, `f(a) * f(b) < 0`
/// - `tolerance` : convergence threshold, finite and > 0
///
/// # Errors
/// - [`SolveError::Tolerance`] : invalid `tolerance`
/// - the method's own error, wrapped (see [`SolveError::is_invalid_interval`])
pub fn find_root<F, G>(
    algorithm: Algorithm,
    func: F,
    dfunc: Option<G>,
    a: f64,
    b: f64,
    tolerance: f64,
) -> Result<RootFindingReport, SolveError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64 {

    let report = match algorithm {
        Algorithm::Bracket(BracketFamily::Bisection) => {
            let cfg = BisectionCfg::new().set_tolerance(tolerance)?;
            bisection(func, a, b, cfg)?
        },
        Algorithm::Bracket(family) => {
            let cfg = RegulaFalsiCfg::new()
                .set_variant(family)?
                .set_tolerance(tolerance)?;
            regula_falsi(func, a, b, cfg)?
        },
        Algorithm::Open(OpenFamily::Newton) => {
            let cfg = NewtonCfg::new().set_tolerance(tolerance)?;
            newton(func, dfunc, a, b, cfg)?
        },
        Algorithm::Open(OpenFamily::Secant) => {
            let cfg = SecantCfg::new().set_tolerance(tolerance)?;
            secant(func, a, b, cfg)?
        },
    };

    Ok(report)
}
