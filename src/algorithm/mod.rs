//! # Algorithms
use enum_map::EnumMap;

use crate::algorithm::two_phase::Phase;
use crate::data::linear_program::elements::Status;
use crate::data::number_types::float::{default_epsilon, Real};

pub mod two_phase;

/// A problem formulation of which a relaxation can be solved.
pub trait SolveRelaxation<F> {
    /// Solve the relaxed version of this problem.
    ///
    /// # Arguments
    ///
    /// * `options`: Tolerance and pivot rule configuration.
    /// * `iteration_limit`: Maximum number of pivots over both phases.
    ///
    /// # Return value
    ///
    /// The terminal state together with the last basic solution visited.
    fn solve_relaxation(&self, options: &SolverOptions<F>, iteration_limit: usize) -> Relaxation<F>;
}

/// Outcome of the simplex method, expressed in the variables of the problem it was applied to.
#[derive(Debug, Clone, PartialEq)]
pub struct Relaxation<F> {
    /// How the algorithm terminated.
    pub status: Status,
    /// Value of every column in the last basic solution.
    ///
    /// Only a solution to the problem when `status` is optimal.
    pub values: Vec<F>,
    /// Cost of `values`.
    pub objective: F,
    /// Number of pivots in each phase.
    pub iterations: EnumMap<Phase, usize>,
}

/// Strategy used to select the entering column.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum PivotRuleKind {
    /// Most negative reduced cost, falling back to Bland's rule while the objective stalls.
    #[default]
    Adaptive,
    /// Always the most negative reduced cost.
    Dantzig,
    /// Always the lowest index with a negative reduced cost. Never cycles, but is slow.
    Bland,
}

/// Configuration of a solve.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverOptions<F = f64> {
    /// Values with a magnitude at most this size are treated as zero.
    pub epsilon: F,
    /// Maximum number of pivots over both phases.
    ///
    /// When `None`, this is ten times the number of variables and constraints of the problem.
    pub iteration_limit: Option<usize>,
    /// Rule used to select the entering column.
    pub pivot_rule: PivotRuleKind,
    /// Number of pivots after which ties in the ratio test are no longer broken by the lowest
    /// basis index, but by the largest pivot element.
    pub tie_break_threshold: usize,
    /// Number of consecutive pivots without strict improvement of the objective after which
    /// cycling is suspected.
    pub cycling_window: usize,
}

impl<F: Real> Default for SolverOptions<F> {
    fn default() -> Self {
        Self {
            epsilon: default_epsilon(),
            iteration_limit: None,
            pivot_rule: PivotRuleKind::default(),
            tie_break_threshold: 50,
            cycling_window: 25,
        }
    }
}

impl<F: Real> SolverOptions<F> {
    /// Set the tolerance below which magnitudes are treated as zero.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: F) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set a fixed pivot budget, instead of one derived from the problem size.
    #[must_use]
    pub fn with_iteration_limit(mut self, iteration_limit: usize) -> Self {
        self.iteration_limit = Some(iteration_limit);
        self
    }

    /// Set the rule used to select the entering column.
    #[must_use]
    pub fn with_pivot_rule(mut self, pivot_rule: PivotRuleKind) -> Self {
        self.pivot_rule = pivot_rule;
        self
    }

    /// Set after how many pivots ties are broken by the largest pivot element.
    #[must_use]
    pub fn with_tie_break_threshold(mut self, tie_break_threshold: usize) -> Self {
        self.tie_break_threshold = tie_break_threshold;
        self
    }

    /// Set after how many pivots without improvement cycling is suspected.
    #[must_use]
    pub fn with_cycling_window(mut self, cycling_window: usize) -> Self {
        self.cycling_window = cycling_window;
        self
    }

    /// The iteration limit to use for a problem.
    ///
    /// # Arguments
    ///
    /// * `nr_variables`: Number of variables of the original problem.
    /// * `nr_constraints`: Number of inequality and equality constraints of the original problem.
    pub fn iteration_limit_for(&self, nr_variables: usize, nr_constraints: usize) -> usize {
        self.iteration_limit.unwrap_or(10 * (nr_variables + nr_constraints))
    }
}
