//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the shared [`DEFAULT_MAX_ITER`] hard cap.

use std::str::FromStr;

use super::errors::AlgorithmError;


/// Iteration cap applied when `max_iter` is not set in a method config.
///
/// Every method terminates on its own tolerance test long before this
/// for well-behaved input; the cap only bounds the work done on
/// pathological functions (flat regions, cycling open methods).
pub const DEFAULT_MAX_ITER: usize = 1000;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Bisection,
    RegulaFalsiPure,
    RegulaFalsiIllinois,
    RegulaFalsiPegasus,
    RegulaFalsiAndersonBjorck,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    Secant,
    Newton
}

impl Algorithm {
    /// The four classical methods, in the order a trace driver runs them.
    pub const CLASSICAL: [Algorithm; 4] = [
        Algorithm::Bracket(BracketFamily::Bisection),
        Algorithm::Open(OpenFamily::Newton),
        Algorithm::Bracket(BracketFamily::RegulaFalsiPure),
        Algorithm::Open(OpenFamily::Secant),
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)                 => "bisection",
            Algorithm::Bracket(BracketFamily::RegulaFalsiPure)           => "regula_falsi_pure",
            Algorithm::Bracket(BracketFamily::RegulaFalsiIllinois)       => "regula_falsi_illinois",
            Algorithm::Bracket(BracketFamily::RegulaFalsiPegasus)        => "regula_falsi_pegasus",
            Algorithm::Bracket(BracketFamily::RegulaFalsiAndersonBjorck) => "regula_falsi_anderson_bjorck",
            Algorithm::Open(OpenFamily::Secant)                          => "secant",
            Algorithm::Open(OpenFamily::Newton)                          => "newton",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

/// Parses canonical names (see [`Algorithm::algorithm_name`]) as well as
/// the common hyphenated spellings, e.g. `"newton-raphson"`, `"regula-falsi"`.
impl FromStr for Algorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        let algorithm = match key.as_str() {
            "bisection"                                  => Algorithm::Bracket(BracketFamily::Bisection),
            "regula_falsi" | "regula_falsi_pure"
            | "false_position"                           => Algorithm::Bracket(BracketFamily::RegulaFalsiPure),
            "regula_falsi_illinois" | "illinois"         => Algorithm::Bracket(BracketFamily::RegulaFalsiIllinois),
            "regula_falsi_pegasus"  | "pegasus"          => Algorithm::Bracket(BracketFamily::RegulaFalsiPegasus),
            "regula_falsi_anderson_bjorck"
            | "anderson_bjorck"                          => Algorithm::Bracket(BracketFamily::RegulaFalsiAndersonBjorck),
            "secant" | "secants"                         => Algorithm::Open(OpenFamily::Secant),
            "newton" | "newton_raphson"                  => Algorithm::Open(OpenFamily::Newton),
            _ => return Err(AlgorithmError::UnknownAlgorithm { name: s.to_string() }),
        };

        Ok(algorithm)
    }
}
