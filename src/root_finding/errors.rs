//! Root-finding error types.
//!
//! ┌ [`AlgorithmError`]   : algorithm misuse
//! │  ├ incompatible algorithm variant selection
//! │  └ unknown algorithm name
//! │
//! ├ [`RootFindingError`] : common runtime errors
//! │   ├ no sign change on the initial interval
//! │   ├ non-finite interval endpoints
//! │   ├ non-finite function evaluation
//! │   └ invalid global parameters (e.g. max_iter)
//! │
//! └ [`ToleranceError`]   : invalid input tolerance
//!
//! Method-specific enums (e.g. `NewtonError`) wrap these transparently
//! and add their own division-by-zero conditions.


use thiserror::Error;
use super::algorithms::Algorithm;


/// Algorithm selection errors.
///
/// - Raised when an algorithm variant is requested that
///   is not valid for the given runner, or a name does not parse.
#[derive(Debug, Error)]
pub enum AlgorithmError {
    #[error("incompatible algorithm: got {algorithm}")]
    IncompatibleAlgorithm { algorithm: Algorithm },

    #[error("unknown algorithm name: {name:?}")]
    UnknownAlgorithm { name: String },
}


/// Root-finding runtime errors.
///
/// ┌ Sign-change test fails on the initial interval
/// ├ Non-finite interval endpoints
/// ├ Non-finite function evaluation
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("invalid initial interval: bolzano does not apply on [{lo}, {hi}]")]
    InvalidInterval { lo: f64, hi: f64 },

    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },
}

impl RootFindingError {
    /// Builds [`RootFindingError::InvalidInterval`] with the interval
    /// normalized so that `lo <= hi`, whatever order the caller used.
    pub(crate) fn invalid_interval(a: f64, b: f64) -> Self {
        RootFindingError::InvalidInterval { lo: a.min(b), hi: a.max(b) }
    }
}


/// Tolerance configuration errors.
#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },
}
