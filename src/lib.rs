//! Classical root-finding methods that return the full iteration trace.
//!
//! See [`root_finding`] for bisection, Newton-Raphson, regula falsi and
//! the secant method.

pub mod root_finding;
