//! # Problems in the description of a linear program
//!
//! These are raised while a linear program is being built, before any pivot happens. Outcomes of
//! the optimization itself (infeasibility, unboundedness, running out of iterations) are not
//! errors; see `Status`.
use thiserror::Error;

/// A linear program could not be built from the provided data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProblemError {
    /// Sizes of matrices and vectors don't match.
    #[error("dimension mismatch in {context}: expected {expected}, found {found}")]
    Dimension {
        /// Which part of the input is inconsistent.
        context: String,
        /// Size that was required.
        expected: usize,
        /// Size that was provided.
        found: usize,
    },
    /// A lower bound exceeds the upper bound, or a bound is not a usable value.
    #[error("invalid bounds [{lower}, {upper}] for variable {variable}")]
    InvalidBounds {
        /// Index of the variable.
        variable: usize,
        /// Lower bound as provided.
        lower: f64,
        /// Upper bound as provided.
        upper: f64,
    },
    /// Problem data must be finite.
    #[error("non-finite value {value} in {context}")]
    NonFinite {
        /// Where the value was found.
        context: String,
        /// The offending value.
        value: f64,
    },
}

impl ProblemError {
    pub(crate) fn dimension(context: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::Dimension { context: context.into(), expected, found }
    }
}
