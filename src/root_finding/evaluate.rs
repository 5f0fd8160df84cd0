//! Checked function evaluation shared by all methods.

use super::errors::RootFindingError;


/// Wraps the user's function; counts calls and enforces finiteness.
pub(crate) struct Evaluator<F> {
    func  : F,
    evals : usize,
}
impl<F> Evaluator<F>
where F: FnMut(f64) -> f64 {
    pub(crate) fn new(func: F) -> Self {
        Self { func, evals: 0 }
    }

    #[inline]
    pub(crate) fn eval(&mut self, x: f64) -> Result<f64, RootFindingError> {
        self.evals += 1;
        let fx = (self.func)(x);
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx });
        }

        Ok(fx)
    }

    /// Number of evaluations performed so far.
    #[inline]
    pub(crate) fn evals(&self) -> usize {
        self.evals
    }

    /// Records evaluations done outside of [`Evaluator::eval`]
    /// (e.g. a user-supplied derivative).
    #[inline]
    pub(crate) fn count(&mut self, n: usize) {
        self.evals += n;
    }
}


/// Rejects non-finite endpoints, evaluates both and applies the
/// sign-change precondition shared by every method.
///
/// Returns `(f(a), f(b))` on success.
pub(crate) fn checked_interval<F>(
    eval: &mut Evaluator<F>,
    a: f64,
    b: f64,
) -> Result<(f64, f64), RootFindingError>
where F: FnMut(f64) -> f64 {
    if !(a.is_finite() && b.is_finite()) {
        return Err(RootFindingError::InvalidBounds { a, b });
    }

    let fa = eval.eval(a)?;
    let fb = eval.eval(b)?;
    if !super::signs::sign_change(fa, fb) {
        return Err(RootFindingError::invalid_interval(a, b));
    }

    Ok((fa, fb))
}
