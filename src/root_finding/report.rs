//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms, and the per-iteration [`IterationRecord`].

#[cfg(feature = "serde")]
use serde::Serialize;


/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::ExactRoot`]
///     - bisection, regula falsi
///     - f(x) == 0 exactly at the new estimate
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - bisection
///     - |a - b| / 2 <= tol
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - newton, secant, regula falsi
///     - |x_n - x_{n - 1}| <= tol  (strict `<` for regula falsi)
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - All methods
///     - iteration cap hit, see [`TerminationReason::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ToleranceSatisfied {
    ExactRoot,
    WidthTolReached,
    StepSizeReached,
    ToleranceNotReached
}


/// One step of a root-finding run.
///
/// - `iteration` : 1-based iteration number
/// - `a`, `b`    : state of the method when the step was taken; the
///                 bracket for bisection/regula falsi, the original
///                 interval for newton, the two secant points for secant
/// - `x`         : new estimate produced by the step
/// - `error`     : error metric of the step; `None` where no previous
///                 estimate exists yet (newton and regula falsi, iteration 1)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct IterationRecord {
    pub iteration : usize,
    pub a         : f64,
    pub b         : f64,
    pub x         : f64,
    pub error     : Option<f64>,
}
impl IterationRecord {
    pub(crate) fn new(iteration: usize, a: f64, b: f64, x: f64, error: Option<f64>) -> Self {
        Self { iteration, a, b, x, error }
    }

    /// `(min(a, b), max(a, b))`, independent of which bound plays which role.
    pub fn bracket(&self) -> (f64, f64) {
        (self.a.min(self.b), self.a.max(self.b))
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `records`             : every iteration, in order, up to and including the last
/// - `root`                : best root estimate (`x` of the last record)
/// - `f_root`              : function value at `root`
/// - `iterations`          : total iterations (`records.len()`)
/// - `evaluations`         : total function (and derivative) evaluations
/// - `termination_reason`  : why the solver stopped  ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RootFindingReport {
    pub records             : Vec<IterationRecord>,
    pub root                : f64,
    pub f_root              : f64,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub algorithm_name      : &'static str,
}
impl RootFindingReport {
    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    /// The record of the terminating iteration.
    pub fn last(&self) -> Option<&IterationRecord> {
        self.records.last()
    }

    pub fn converged(&self) -> bool {
        self.termination_reason == TerminationReason::ToleranceReached
    }
}


/// Accumulates [`IterationRecord`]s during a run and seals them into a
/// [`RootFindingReport`]. Logs each record as it is pushed.
#[derive(Debug)]
pub(crate) struct Trace {
    algorithm_name : &'static str,
    records        : Vec<IterationRecord>,
}
impl Trace {
    pub(crate) fn new(algorithm_name: &'static str) -> Self {
        Self { algorithm_name, records: Vec::new() }
    }

    pub(crate) fn push(&mut self, record: IterationRecord) {
        log::debug!(
            "{} iter={} a={} b={} x={} error={:?}",
            self.algorithm_name, record.iteration, record.a, record.b, record.x, record.error
        );
        self.records.push(record);
    }

    pub(crate) fn converged(
        self,
        f_root: f64,
        evaluations: usize,
        tolerance_satisfied: ToleranceSatisfied,
    ) -> RootFindingReport {
        log::debug!(
            "{} converged after {} iterations ({:?})",
            self.algorithm_name, self.records.len(), tolerance_satisfied
        );
        self.finish(f_root, evaluations, TerminationReason::ToleranceReached, tolerance_satisfied)
    }

    pub(crate) fn exhausted(self, f_root: f64, evaluations: usize) -> RootFindingReport {
        log::warn!(
            "{} reached the iteration limit ({}) without meeting the tolerance",
            self.algorithm_name, self.records.len()
        );
        self.finish(
            f_root,
            evaluations,
            TerminationReason::IterationLimit,
            ToleranceSatisfied::ToleranceNotReached,
        )
    }

    fn finish(
        self,
        f_root: f64,
        evaluations: usize,
        termination_reason: TerminationReason,
        tolerance_satisfied: ToleranceSatisfied,
    ) -> RootFindingReport {
        let root = self.records.last().map_or(f64::NAN, |r| r.x);
        RootFindingReport {
            iterations: self.records.len(),
            records: self.records,
            root,
            f_root,
            evaluations,
            termination_reason,
            tolerance_satisfied,
            algorithm_name: self.algorithm_name,
        }
    }
}
