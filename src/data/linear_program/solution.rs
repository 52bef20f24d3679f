//! # Representation of solve outcomes
//!
//! Once the simplex method terminates, its last basis is mapped back to the variables of the
//! problem as the user provided it. The result is packaged together with the status, such that
//! callers can decide what to do with points that are not optimal.
use std::fmt;
use std::fmt::{Display, Formatter};

use enum_map::EnumMap;
use itertools::Itertools;
use log::warn;

use crate::algorithm::Relaxation;
use crate::algorithm::two_phase::Phase;
use crate::data::linear_program::elements::{Objective, Status};
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::float::{Real, Tolerance};

/// Outcome of a solve, in the variables of the original problem.
///
/// The values in `x` are only a solution when the status is optimal. Otherwise, they are the last
/// point visited by the algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult<F> {
    status: Status,
    x: Vec<F>,
    objective: F,
    engine_objective: F,
    iterations: EnumMap<Phase, usize>,
    slack: Vec<F>,
    equality_residual: Vec<F>,
}

impl<F: Real> SolveResult<F> {
    /// Map the outcome of the simplex method back to the original problem.
    ///
    /// # Arguments
    ///
    /// * `problem`: Problem as provided by the user.
    /// * `standard_form`: The form of `problem` that the relaxation was computed for.
    /// * `relaxation`: Outcome of the simplex method.
    /// * `tolerance`: Used to compare the objective value of the algorithm to `c x`.
    pub(crate) fn new(
        problem: &LinearProgram<F>,
        standard_form: &StandardForm<F>,
        relaxation: Relaxation<F>,
        tolerance: Tolerance<F>,
    ) -> Self {
        let Relaxation { status, values, objective, iterations } = relaxation;

        let x = standard_form.reconstruct(&values);
        let engine_objective = standard_form.original_objective(objective);
        let objective = match status {
            Status::Unbounded => match problem.objective() {
                Objective::Minimize => F::neg_infinity(),
                Objective::Maximize => F::infinity(),
            },
            _ => problem.objective_value(&x),
        };

        if status == Status::Optimal
            && !tolerance.is_zero_relative(objective - engine_objective, objective.abs().max(engine_objective.abs())) {
            warn!("Objective value {objective} differs from value {engine_objective} computed during the pivots");
        }

        Self {
            status,
            slack: problem.inequality_slack(&x),
            equality_residual: problem.equality_residual(&x),
            x,
            objective,
            engine_objective,
            iterations,
        }
    }

    /// How the solve terminated.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Value of each variable.
    pub fn x(&self) -> &[F] {
        &self.x
    }

    /// Take the values of the variables.
    pub fn into_x(self) -> Vec<F> {
        self.x
    }

    /// Objective value `c x`.
    ///
    /// Infinite, with the sign of the optimization direction, when the problem is unbounded.
    pub fn objective(&self) -> F {
        self.objective
    }

    /// Objective value as maintained by the simplex method, converted to the original problem.
    ///
    /// Should agree with `objective` up to the tolerance when the status is optimal.
    pub fn engine_objective(&self) -> F {
        self.engine_objective
    }

    /// Total number of pivots.
    pub fn iterations(&self) -> usize {
        self.iterations.values().sum()
    }

    /// Number of pivots in one phase.
    pub fn iterations_in(&self, phase: Phase) -> usize {
        self.iterations[phase]
    }

    /// Slack of the inequality constraints, `b_ub - A_ub x`.
    pub fn slack(&self) -> &[F] {
        &self.slack
    }

    /// Residual of the equality constraints, `b_eq - A_eq x`.
    pub fn equality_residual(&self) -> &[F] {
        &self.equality_residual
    }

    /// Human readable description of the status.
    pub fn message(&self) -> &'static str {
        self.status.message()
    }

    /// Whether `x` is an optimal solution.
    pub fn is_optimal(&self) -> bool {
        self.status.is_optimal()
    }
}

impl<F: Real> Display for SolveResult<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "status: {} ({})", self.status, self.message())?;
        writeln!(f, "objective: {}", self.objective)?;
        writeln!(f, "x: [{}]", self.x.iter().join(", "))?;
        writeln!(
            f,
            "iterations: {} (phase one: {}, phase two: {})",
            self.iterations(), self.iterations[Phase::One], self.iterations[Phase::Two],
        )
    }
}
