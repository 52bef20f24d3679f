//! # Linear programs in "general form"
//!
//! Data structure for manipulation of linear programs as they are provided by the user: a cost
//! vector, inequality and equality constraints and simple bounds on every variable. All data is
//! validated when it is added, such that a `LinearProgram` is always consistent.
use log::debug;

use crate::algorithm::{SolveRelaxation, SolverOptions};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::{Objective, Variable};
use crate::data::linear_program::solution::SolveResult;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::float::{Real, Tolerance};
use crate::error::ProblemError;

/// A linear program
///
/// ```text
/// minimize    c x
/// subject to  A_ub x <= b_ub
///             A_eq x == b_eq
///             lower <= x <= upper
/// ```
///
/// or the same with `maximize`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgram<F> {
    /// Which direction does the objective function go?
    objective: Objective,
    cost: Vec<F>,

    /// Has size `inequality_values.len()` in the row direction and size `cost.len()` in the column
    /// direction.
    inequality_constraints: DenseMatrix<F>,
    inequality_values: Vec<F>,
    equality_constraints: DenseMatrix<F>,
    equality_values: Vec<F>,

    /// Bounds of every variable, defaults to `[0, inf)`.
    variables: Vec<Variable<F>>,
}

impl<F: Real> LinearProgram<F> {
    /// Create a new linear program without any constraints.
    ///
    /// All variables are nonnegative and the objective is minimized.
    ///
    /// # Errors
    ///
    /// If any of the cost coefficients is not finite.
    pub fn new(cost: Vec<F>) -> Result<Self, ProblemError> {
        check_finite(&cost, |j| format!("c[{j}]"))?;

        let n = cost.len();
        Ok(Self {
            objective: Objective::default(),
            cost,
            inequality_constraints: DenseMatrix::zeros(0, n),
            inequality_values: Vec::new(),
            equality_constraints: DenseMatrix::zeros(0, n),
            equality_values: Vec::new(),
            variables: vec![Variable::default(); n],
        })
    }

    /// Replace the constraints `A_ub x <= b_ub`.
    ///
    /// # Errors
    ///
    /// If the shapes are inconsistent or the data contains a value that is not finite.
    pub fn with_inequalities(mut self, rows: &[Vec<F>], values: &[F]) -> Result<Self, ProblemError> {
        self.inequality_constraints = validated_constraints("A_ub", rows, "b_ub", values, self.nr_variables())?;
        self.inequality_values = values.to_vec();

        Ok(self)
    }

    /// Replace the constraints `A_eq x == b_eq`.
    ///
    /// # Errors
    ///
    /// If the shapes are inconsistent or the data contains a value that is not finite.
    pub fn with_equalities(mut self, rows: &[Vec<F>], values: &[F]) -> Result<Self, ProblemError> {
        self.equality_constraints = validated_constraints("A_eq", rows, "b_eq", values, self.nr_variables())?;
        self.equality_values = values.to_vec();

        Ok(self)
    }

    /// Replace the bounds of all variables.
    ///
    /// # Arguments
    ///
    /// * `bounds`: A `(lower, upper)` pair for each variable. Infinite values mean that there is no
    /// bound in that direction.
    ///
    /// # Errors
    ///
    /// If there is not exactly one pair per variable, or if a pair does not describe a nonempty
    /// interval.
    pub fn with_bounds(mut self, bounds: &[(F, F)]) -> Result<Self, ProblemError> {
        if bounds.len() != self.nr_variables() {
            return Err(ProblemError::dimension("bounds", self.nr_variables(), bounds.len()));
        }

        self.variables = bounds.iter()
            .enumerate()
            .map(|(j, &(lower, upper))| variable_from_bounds(j, lower, upper))
            .collect::<Result<_, _>>()?;

        Ok(self)
    }

    /// Set whether the objective is minimized or maximized.
    #[must_use]
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Solve this linear program.
    ///
    /// Converts the problem to standard form, runs the two phase simplex method on it and maps the
    /// outcome back to the variables of this problem.
    pub fn solve(&self, options: &SolverOptions<F>) -> SolveResult<F> {
        let standard_form = StandardForm::from(self);
        debug!(
            "Standard form has {} rows and {} columns, derived from {} variables and {} constraints",
            standard_form.nr_rows(), standard_form.nr_columns(),
            self.nr_variables(), self.nr_constraints(),
        );

        let iteration_limit = options.iteration_limit_for(self.nr_variables(), self.nr_constraints());
        let relaxation = standard_form.solve_relaxation(options, iteration_limit);

        SolveResult::new(self, &standard_form, relaxation, Tolerance::new(options.epsilon))
    }

    /// Number of variables, `n`.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of `<=` constraints.
    pub fn nr_inequality_constraints(&self) -> usize {
        self.inequality_values.len()
    }

    /// Number of `==` constraints.
    pub fn nr_equality_constraints(&self) -> usize {
        self.equality_values.len()
    }

    /// Number of inequality and equality constraints together.
    pub fn nr_constraints(&self) -> usize {
        self.nr_inequality_constraints() + self.nr_equality_constraints()
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Cost vector `c`.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Matrix `A_ub`.
    pub fn inequality_constraints(&self) -> &DenseMatrix<F> {
        &self.inequality_constraints
    }

    /// Right hand side `b_ub`.
    pub fn inequality_values(&self) -> &[F] {
        &self.inequality_values
    }

    /// Matrix `A_eq`.
    pub fn equality_constraints(&self) -> &DenseMatrix<F> {
        &self.equality_constraints
    }

    /// Right hand side `b_eq`.
    pub fn equality_values(&self) -> &[F] {
        &self.equality_values
    }

    /// Bounds of each variable.
    pub fn variables(&self) -> &[Variable<F>] {
        &self.variables
    }

    /// Value of the objective function, `c x`.
    pub fn objective_value(&self, x: &[F]) -> F {
        debug_assert_eq!(x.len(), self.nr_variables());

        self.cost.iter().zip(x).fold(F::zero(), |total, (&c, &v)| total + c * v)
    }

    /// How far each inequality is from being tight, `b_ub - A_ub x`.
    pub fn inequality_slack(&self, x: &[F]) -> Vec<F> {
        self.inequality_constraints.multiply(x).into_iter()
            .zip(&self.inequality_values)
            .map(|(lhs, &b)| b - lhs)
            .collect()
    }

    /// How far each equality is from being satisfied, `b_eq - A_eq x`.
    pub fn equality_residual(&self, x: &[F]) -> Vec<F> {
        self.equality_constraints.multiply(x).into_iter()
            .zip(&self.equality_values)
            .map(|(lhs, &b)| b - lhs)
            .collect()
    }

    /// Whether a point satisfies all constraints and bounds up to an absolute tolerance.
    pub fn is_feasible(&self, x: &[F], epsilon: F) -> bool {
        if x.len() != self.nr_variables() {
            return false;
        }

        let tolerance = Tolerance::new(epsilon);
        let within_bounds = self.variables.iter().zip(x).all(|(variable, &value)| {
            variable.lower_bound.is_none_or(|lower| !tolerance.is_negative(value - lower))
                && variable.upper_bound.is_none_or(|upper| !tolerance.is_positive(value - upper))
        });

        within_bounds
            && self.inequality_slack(x).into_iter().all(|slack| !tolerance.is_negative(slack))
            && self.equality_residual(x).into_iter().all(|residual| tolerance.is_zero(residual))
    }
}

/// Check the shapes and values of a block of constraints.
fn validated_constraints<F: Real>(
    matrix_name: &str,
    rows: &[Vec<F>],
    values_name: &str,
    values: &[F],
    nr_variables: usize,
) -> Result<DenseMatrix<F>, ProblemError> {
    if rows.len() != values.len() {
        return Err(ProblemError::dimension(
            format!("number of rows of {matrix_name} and length of {values_name}"),
            rows.len(),
            values.len(),
        ));
    }

    for (i, row) in rows.iter().enumerate() {
        if row.len() != nr_variables {
            return Err(ProblemError::dimension(format!("row {i} of {matrix_name}"), nr_variables, row.len()));
        }
        check_finite(row, |j| format!("{matrix_name}[{i}][{j}]"))?;
    }
    check_finite(values, |i| format!("{values_name}[{i}]"))?;

    Ok(DenseMatrix::new(rows.to_vec(), nr_variables))
}

fn check_finite<F: Real>(values: &[F], context: impl Fn(usize) -> String) -> Result<(), ProblemError> {
    match values.iter().position(|v| !v.is_finite()) {
        None => Ok(()),
        Some(index) => Err(ProblemError::NonFinite {
            context: context(index),
            value: as_f64(values[index]),
        }),
    }
}

/// Normalize a `(lower, upper)` pair, infinite values become `None`.
fn variable_from_bounds<F: Real>(j: usize, lower: F, upper: F) -> Result<Variable<F>, ProblemError> {
    let invalid = lower.is_nan()
        || upper.is_nan()
        || lower == F::infinity()
        || upper == F::neg_infinity()
        || lower > upper;

    if invalid {
        return Err(ProblemError::InvalidBounds { variable: j, lower: as_f64(lower), upper: as_f64(upper) });
    }

    Ok(Variable {
        lower_bound: lower.is_finite().then_some(lower),
        upper_bound: upper.is_finite().then_some(upper),
    })
}

fn as_f64<F: Real>(value: F) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
