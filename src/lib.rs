//! # A dense linear program solver
//!
//! Linear programs are solved using the two phase Simplex Method as described in the book
//! Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! ```
//! use relp_dense::{solve, SolverOptions, Status};
//!
//! // minimize x1 + 4 x2 subject to x1 + x2 <= 8, x1 >= 1, x2 >= 5
//! let bounds = [(1., f64::INFINITY), (5., f64::INFINITY)];
//! let result = solve(&[1., 4.], &[vec![1., 1.]], &[8.], Some(&bounds), &SolverOptions::default())?;
//!
//! assert_eq!(result.status(), Status::Optimal);
//! assert!((result.objective() - 21.).abs() < 1e-9);
//! # Ok::<(), relp_dense::ProblemError>(())
//! ```
#![warn(missing_docs)]

pub use crate::algorithm::{PivotRuleKind, SolverOptions};
pub use crate::algorithm::two_phase::Phase;
pub use crate::data::linear_program::elements::{Objective, Status, Variable};
pub use crate::data::linear_program::general_form::LinearProgram;
pub use crate::data::linear_program::solution::SolveResult;
pub use crate::error::ProblemError;

pub mod algorithm;
pub mod data;
pub mod error;

#[cfg(test)]
mod tests;

/// Solve `minimize c x` subject to `A_ub x <= b_ub` and `lower <= x <= upper`.
///
/// # Arguments
///
/// * `c`: Cost of each variable.
/// * `a_ub`: Rows of the inequality constraint matrix, each of length `c.len()`.
/// * `b_ub`: Right hand side of each inequality constraint.
/// * `bounds`: A `(lower, upper)` pair for each variable, infinite values meaning no bound. When
/// `None`, every variable is nonnegative.
/// * `options`: Tolerance, iteration limit and pivot rule.
///
/// # Errors
///
/// When the dimensions of the data don't agree, a value is not finite or a lower bound exceeds
/// its upper bound. An infeasible or unbounded problem is not an error, see `SolveResult::status`.
pub fn solve(
    c: &[f64],
    a_ub: &[Vec<f64>],
    b_ub: &[f64],
    bounds: Option<&[(f64, f64)]>,
    options: &SolverOptions<f64>,
) -> Result<SolveResult<f64>, ProblemError> {
    let mut problem = LinearProgram::new(c.to_vec())?
        .with_inequalities(a_ub, b_ub)?;
    if let Some(bounds) = bounds {
        problem = problem.with_bounds(bounds)?;
    }

    Ok(problem.solve(options))
}
