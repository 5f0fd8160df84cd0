//! Sign utilities for root-finding algorithms.
//! - `sign_change` : `true` if values have strictly opposite signs
//! - [`bolzano`]   : sign-change test of a function over an interval

/// Returns `true` if `x * y < 0`.
///
/// Compared by sign rather than by forming the product, so tiny values
/// whose product underflows to zero still register. An exact zero
/// (either sign) or NaN on either side is never a sign change.
#[inline]
pub(crate) fn sign_change(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}


/// Applies Bolzano's theorem to `func` on the interval `a`, `b`.
///
/// Evaluates `func(a)` and `func(b)` and returns `true` iff the values
/// have strictly opposite signs, i.e. a continuous `func` has a root
/// strictly inside the interval. The order of `a` and `b` is irrelevant.
///
/// Non-finite evaluations compare as no sign change; the root-finding
/// methods evaluate through a checked path and report those as errors.
pub fn bolzano<F>(mut func: F, a: f64, b: f64) -> bool
where F: FnMut(f64) -> f64 {
    let fa = func(a);
    let fb = func(b);
    sign_change(fa, fb)
}
