//! # Building blocks to describe linear programs.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Neg;

use num_traits::{One, Zero};

/// Whether the objective function should be minimized or maximized.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Objective {
    /// Maximization of the objective function.
    Maximize,
    /// Minimization of the objective function.
    #[default]
    Minimize,
}

impl Objective {
    /// Factor that turns this objective into a minimization.
    #[must_use]
    pub fn into_minimization_factor<F: One + Neg<Output = F>>(self) -> F {
        match self {
            Objective::Minimize => F::one(),
            Objective::Maximize => -F::one(),
        }
    }
}

/// Bounds of a single variable.
///
/// A `None` means unbounded in that direction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Variable<F> {
    /// Lower bound; the default is zero.
    pub lower_bound: Option<F>,
    /// Upper bound; the default is no bound.
    pub upper_bound: Option<F>,
}

impl<F: Zero> Variable<F> {
    /// The default: `[0, inf)`.
    pub fn non_negative() -> Self {
        Self { lower_bound: Some(F::zero()), upper_bound: None }
    }
}

impl<F> Variable<F> {
    /// A variable without any bounds.
    pub fn free() -> Self {
        Self { lower_bound: None, upper_bound: None }
    }

    /// Whether the variable has neither a lower nor an upper bound.
    pub fn is_free(&self) -> bool {
        self.lower_bound.is_none() && self.upper_bound.is_none()
    }
}

impl<F: Zero> Default for Variable<F> {
    fn default() -> Self {
        Self::non_negative()
    }
}

/// The terminal state of a solve.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    /// A finite optimum was found.
    Optimal,
    /// There is no point satisfying all constraints.
    Infeasible,
    /// The objective can be improved without limit.
    Unbounded,
    /// The pivot budget ran out before any of the other states was reached.
    IterationLimit,
}

impl Status {
    /// Explanation for an end user.
    pub fn message(self) -> &'static str {
        match self {
            Status::Optimal => "optimization terminated successfully",
            Status::Infeasible => "the problem is infeasible",
            Status::Unbounded => "the problem is unbounded",
            Status::IterationLimit => "iteration limit reached before the problem was solved",
        }
    }

    /// Whether a finite optimum was found.
    pub fn is_optimal(self) -> bool {
        self == Status::Optimal
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Optimal => "optimal",
            Status::Infeasible => "infeasible",
            Status::Unbounded => "unbounded",
            Status::IterationLimit => "iteration_limit",
        })
    }
}
