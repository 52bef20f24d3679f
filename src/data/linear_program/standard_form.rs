//! # Linear programs in standard form
//!
//! The simplex method works on problems of the form `A x = b`, `x >= 0` with `b >= 0`. This module
//! derives such a problem from a `LinearProgram` and remembers how, such that any solution can be
//! mapped back.
use cumsum::cumsum_array_owned;
use enum_map::{Enum, EnumMap, enum_map};

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::number_types::float::Real;

/// A linear program `min c x + fixed_cost` subject to `A x = b`, `x >= 0` with `b >= 0`.
///
/// The indexing for the variables and constraints is as follows:
///
/// /               || Original vars | Negative parts | Bound slacks | Constraint slacks |
/// ================||===============||================|==============|===================| -----
/// Inequality (<=) || coefficients  |  -coefficients |       0      |         I         | |   |
/// ----------------||---------------|----------------|--------------|-------------------| | b |
/// Equality   (==) || coefficients  |  -coefficients |       0      |         0         | |   |
/// ----------------||---------------|----------------|--------------|-------------------| |---|
/// Variable bound  ||  one 1 per row|        0       |       I      |         0         | |u-l|
/// -------------------------------------------------------------------------------------| |---|
///
/// Columns of variables that were flipped hold the negated coefficients, and rows that had a
/// negative right hand side after shifting are negated as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardForm<F> {
    /// Direction of the problem this form was derived from.
    ///
    /// The cost of this form is always minimized.
    objective: Objective,

    constraints: DenseMatrix<F>,
    b: Vec<F>,
    cost: Vec<F>,
    /// Constant in the cost function, collected while shifting variables.
    fixed_cost: F,

    /// Rows that were multiplied by `-1` to make the right hand side nonnegative.
    negated_rows: Vec<bool>,

    /// Indices that separate the different groups.
    row_group_end: EnumMap<RowType, usize>,
    column_group_end: EnumMap<ColumnType, usize>,

    /// How each variable of the original problem is represented.
    original_variables: Vec<OriginalVariable<F>>,
    /// (bound index -> original variable)
    bound_index_to_variable: Vec<usize>,
}

/// Indexing within the different row types (see struct description).
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum RowType {
    /// Row of a `<=` constraint, with a slack.
    Inequality,
    /// Row of a `==` constraint.
    Equality,
    /// Upper bound `x' + s = upper - lower` of a variable that has both bounds.
    VariableBound,
}

/// Indexing within the different column types (see struct description).
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ColumnType {
    /// One column for every variable of the original problem.
    Normal,
    /// Negative part `x⁻` of a free variable `x = x⁺ - x⁻`.
    FreeNegativePart,
    /// Slack of a variable bound row.
    BoundSlack,
    /// Slack `s` for a constraint like `<a, x> + s = b`.
    ConstraintSlack,
}

/// How a variable of the original problem relates to the columns of the standard form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OriginalVariable<F> {
    /// `x = x' + shift`, the lower bound of `x` was `shift`.
    Shifted(F),
    /// `x = shift - x'`, `x` had only an upper bound `shift`.
    Flipped(F),
    /// `x = x⁺ - x⁻`; the positive part is the `Normal` column, the negative part lives at the
    /// contained column index.
    Split(usize),
}

impl<F: Real> From<&LinearProgram<F>> for StandardForm<F> {
    fn from(problem: &LinearProgram<F>) -> Self {
        let n = problem.nr_variables();
        let nr_inequalities = problem.nr_inequality_constraints();
        let nr_equalities = problem.nr_equality_constraints();

        let mut original_variables = Vec::with_capacity(n);
        let mut bound_index_to_variable = Vec::new();
        let mut bound_values = Vec::new();
        let mut nr_free = 0;
        for (j, variable) in problem.variables().iter().enumerate() {
            let representation = match (variable.lower_bound, variable.upper_bound) {
                (Some(lower), upper) => {
                    if let Some(upper) = upper {
                        bound_index_to_variable.push(j);
                        bound_values.push(upper - lower);
                    }
                    OriginalVariable::Shifted(lower)
                },
                (None, Some(upper)) => OriginalVariable::Flipped(upper),
                (None, None) => {
                    nr_free += 1;
                    OriginalVariable::Split(n + nr_free - 1)
                },
            };
            original_variables.push(representation);
        }
        let nr_bounds = bound_index_to_variable.len();

        let cumulative = cumsum_array_owned([nr_inequalities, nr_equalities, nr_bounds]);
        let row_group_end = enum_map!{
            RowType::Inequality    => cumulative[0],
            RowType::Equality      => cumulative[1],
            RowType::VariableBound => cumulative[2],
        };
        let cumulative = cumsum_array_owned([n, nr_free, nr_bounds, nr_inequalities]);
        let column_group_end = enum_map!{
            ColumnType::Normal           => cumulative[0],
            ColumnType::FreeNegativePart => cumulative[1],
            ColumnType::BoundSlack       => cumulative[2],
            ColumnType::ConstraintSlack  => cumulative[3],
        };

        let nr_rows = row_group_end[RowType::VariableBound];
        let nr_columns = column_group_end[ColumnType::ConstraintSlack];
        let mut constraints = DenseMatrix::zeros(nr_rows, nr_columns);
        let mut b = Vec::with_capacity(nr_rows);

        let constraint_rows = problem.inequality_constraints().iter_rows()
            .zip(problem.inequality_values())
            .chain(problem.equality_constraints().iter_rows().zip(problem.equality_values()));
        for (i, (row, &value)) in constraint_rows.enumerate() {
            let mut rhs = value;
            for (j, (&coefficient, variable)) in row.iter().zip(&original_variables).enumerate() {
                match *variable {
                    OriginalVariable::Shifted(shift) => {
                        constraints[(i, j)] = coefficient;
                        rhs -= coefficient * shift;
                    },
                    OriginalVariable::Flipped(shift) => {
                        constraints[(i, j)] = -coefficient;
                        rhs -= coefficient * shift;
                    },
                    OriginalVariable::Split(negative) => {
                        constraints[(i, j)] = coefficient;
                        constraints[(i, negative)] = -coefficient;
                    },
                }
            }
            b.push(rhs);
        }

        let slack_start = column_group_end[ColumnType::BoundSlack];
        for i in 0..nr_inequalities {
            constraints[(i, slack_start + i)] = F::one();
        }

        let bound_slack_start = column_group_end[ColumnType::FreeNegativePart];
        for (index, (&j, &value)) in bound_index_to_variable.iter().zip(&bound_values).enumerate() {
            let row = row_group_end[RowType::Equality] + index;
            constraints[(row, j)] = F::one();
            constraints[(row, bound_slack_start + index)] = F::one();
            b.push(value);
        }

        let factor = problem.objective().into_minimization_factor::<F>();
        let mut cost = vec![F::zero(); nr_columns];
        let mut fixed_cost = F::zero();
        for (j, (&original_cost, variable)) in problem.cost().iter().zip(&original_variables).enumerate() {
            let c = factor * original_cost;
            match *variable {
                OriginalVariable::Shifted(shift) => {
                    cost[j] = c;
                    fixed_cost += c * shift;
                },
                OriginalVariable::Flipped(shift) => {
                    cost[j] = -c;
                    fixed_cost += c * shift;
                },
                OriginalVariable::Split(negative) => {
                    cost[j] = c;
                    cost[negative] = -c;
                },
            }
        }

        let mut negated_rows = vec![false; nr_rows];
        for (i, value) in b.iter_mut().enumerate() {
            if *value < F::zero() {
                constraints.change_row_sign(i);
                *value = -*value;
                negated_rows[i] = true;
            }
        }

        Self {
            objective: problem.objective(),
            constraints,
            b,
            cost,
            fixed_cost,
            negated_rows,
            row_group_end,
            column_group_end,
            original_variables,
            bound_index_to_variable,
        }
    }
}

impl<F: Real> StandardForm<F> {
    /// Number of rows, `m`.
    pub fn nr_rows(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// Number of columns, `n'`.
    pub fn nr_columns(&self) -> usize {
        self.constraints.nr_columns()
    }

    /// Matrix `A`.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// Nonnegative right hand side.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Cost of each column, to be minimized.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Constant added to the cost by shifting variables.
    pub fn fixed_cost(&self) -> F {
        self.fixed_cost
    }

    /// How each original variable is represented.
    pub fn original_variables(&self) -> &[OriginalVariable<F>] {
        &self.original_variables
    }

    /// Classify a column by type using the column index.
    ///
    /// See the struct documentation for a visualization.
    pub fn column_type(&self, j: usize) -> (ColumnType, usize) {
        debug_assert!(j < self.nr_columns());

        if j < self.column_group_end[ColumnType::Normal] {
            (ColumnType::Normal, j)
        } else if j < self.column_group_end[ColumnType::FreeNegativePart] {
            (ColumnType::FreeNegativePart, j - self.column_group_end[ColumnType::Normal])
        } else if j < self.column_group_end[ColumnType::BoundSlack] {
            (ColumnType::BoundSlack, j - self.column_group_end[ColumnType::FreeNegativePart])
        } else {
            (ColumnType::ConstraintSlack, j - self.column_group_end[ColumnType::BoundSlack])
        }
    }

    /// Classify a row by type using the row index.
    pub fn row_type(&self, i: usize) -> (RowType, usize) {
        debug_assert!(i < self.nr_rows());

        if i < self.row_group_end[RowType::Inequality] {
            (RowType::Inequality, i)
        } else if i < self.row_group_end[RowType::Equality] {
            (RowType::Equality, i - self.row_group_end[RowType::Inequality])
        } else {
            (RowType::VariableBound, i - self.row_group_end[RowType::Equality])
        }
    }

    /// Index of the original variable that a bound row restricts.
    pub fn bounded_variable(&self, bound_index: usize) -> usize {
        self.bound_index_to_variable[bound_index]
    }

    /// Row and column indices of the `+1` slack coefficients.
    ///
    /// These columns are unit vectors, so together they form part of an identity basis. Rows that
    /// were negated lost their `+1` and need an artificial variable instead.
    pub fn pivot_element_indices(&self) -> Vec<(usize, usize)> {
        (0..self.nr_rows())
            .filter(|&i| !self.negated_rows[i])
            .filter_map(|i| match self.row_type(i) {
                (RowType::Inequality, index) => {
                    Some((i, self.column_group_end[ColumnType::BoundSlack] + index))
                },
                (RowType::VariableBound, index) => {
                    Some((i, self.column_group_end[ColumnType::FreeNegativePart] + index))
                },
                (RowType::Equality, _) => None,
            })
            .collect()
    }

    /// Whether the slack variables alone form a basis, such that no artificial variables are
    /// needed.
    pub fn has_full_initial_basis(&self) -> bool {
        self.pivot_element_indices().len() == self.nr_rows()
    }

    /// Map a vector of standard form column values back to the variables of the original problem.
    pub fn reconstruct(&self, values: &[F]) -> Vec<F> {
        debug_assert_eq!(values.len(), self.nr_columns());

        self.original_variables.iter()
            .enumerate()
            .map(|(j, variable)| match *variable {
                OriginalVariable::Shifted(shift) => values[j] + shift,
                OriginalVariable::Flipped(shift) => shift - values[j],
                OriginalVariable::Split(negative) => values[j] - values[negative],
            })
            .collect()
    }

    /// Cost of a vector of standard form column values, excluding the fixed cost.
    pub fn cost_of(&self, values: &[F]) -> F {
        debug_assert_eq!(values.len(), self.nr_columns());

        self.cost.iter().zip(values).fold(F::zero(), |total, (&c, &v)| total + c * v)
    }

    /// Convert an objective value of this form to the objective value of the original problem.
    ///
    /// Adds the fixed cost and undoes the negation of maximization problems.
    pub fn original_objective(&self, value: F) -> F {
        self.objective.into_minimization_factor::<F>() * (value + self.fixed_cost)
    }
}
