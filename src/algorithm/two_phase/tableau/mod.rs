//! # Tableau
//!
//! The dense simplex tableau: the constraint rows with respect to the current basis, the values of
//! the basic variables, the reduced cost row and the objective value. A pivot updates all of them
//! with one Gauss-Jordan elimination step.
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::fmt;

use itertools::{Itertools, repeat_n};

use crate::algorithm::two_phase::strategy::pivot_rule::TieBreak;
use crate::algorithm::two_phase::tableau::kind::{Artificial, Kind, NonArtificial};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::float::{Real, Tolerance};

pub mod kind;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It holds a dense matrix `B^-1 A`, the basic values `B^-1 b`, the reduced costs
/// `c - c_B B^-1 A` and the objective value `c_B B^-1 b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau<F, K> {
    rows: DenseMatrix<F>,
    b: Vec<F>,
    relative_costs: Vec<F>,
    objective: F,

    /// Maps the rows to the column containing its pivot.
    ///
    /// The rows are indexed 0 through `self.nr_rows()`, while the columns are indexed 0 through
    /// `self.nr_columns()`.
    basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading and writing.
    basis_columns: HashSet<usize>,

    tolerance: Tolerance<F>,

    /// Whether there are artificial variables in the tableau.
    kind: K,
}

impl<F: Real, K: Kind> Tableau<F, K> {
    fn from_parts(
        rows: DenseMatrix<F>,
        b: Vec<F>,
        basis_indices: Vec<usize>,
        cost: &[F],
        tolerance: Tolerance<F>,
        kind: K,
    ) -> Self {
        debug_assert_eq!(rows.nr_rows(), b.len());
        debug_assert_eq!(rows.nr_rows(), basis_indices.len());

        let basis_columns = basis_indices.iter().copied().collect();
        let mut tableau = Self {
            relative_costs: vec![F::zero(); rows.nr_columns()],
            objective: F::zero(),
            rows,
            b,
            basis_indices,
            basis_columns,
            tolerance,
            kind,
        };
        tableau.price(cost);

        tableau
    }

    /// Compute the reduced costs and objective value for a cost vector under the current basis.
    fn price(&mut self, cost: &[F]) {
        debug_assert_eq!(cost.len(), self.nr_columns());

        let mut relative_costs = cost.to_vec();
        let mut objective = F::zero();
        for (i, &column) in self.basis_indices.iter().enumerate() {
            let basic_cost = cost[column];
            if basic_cost == F::zero() {
                continue;
            }

            for (relative_cost, &coefficient) in relative_costs.iter_mut().zip(self.rows.row(i)) {
                *relative_cost -= basic_cost * coefficient;
            }
            objective += basic_cost * self.b[i];
        }
        for &column in &self.basis_indices {
            relative_costs[column] = F::zero();
        }

        self.relative_costs = relative_costs;
        self.objective = objective;
    }

    /// Brings a column into the basis by updating the rows, the basic values and the cost row.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Index of the column that enters the basis.
    /// * `pivot_row_index`: Index of the row whose basic variable leaves the basis.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize) {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column_index));

        let pivot_value = self.rows[(pivot_row_index, pivot_column_index)];
        debug_assert!(!self.tolerance.is_zero(pivot_value));

        for value in self.rows.row_mut(pivot_row_index) {
            *value = self.tolerance.trim(*value / pivot_value);
        }
        self.rows[(pivot_row_index, pivot_column_index)] = F::one();
        self.b[pivot_row_index] = self.clamp(self.b[pivot_row_index] / pivot_value);

        let pivot_row = self.rows.row(pivot_row_index).to_vec();
        let pivot_b = self.b[pivot_row_index];
        for i in 0..self.nr_rows() {
            if i == pivot_row_index {
                continue;
            }

            let factor = self.rows[(i, pivot_column_index)];
            if factor == F::zero() {
                continue;
            }

            for (value, &pivot_row_value) in self.rows.row_mut(i).iter_mut().zip(&pivot_row) {
                *value = self.tolerance.trim(*value - factor * pivot_row_value);
            }
            self.rows[(i, pivot_column_index)] = F::zero();
            self.b[i] = self.clamp(self.b[i] - factor * pivot_b);
        }

        let factor = self.relative_costs[pivot_column_index];
        for (relative_cost, &pivot_row_value) in self.relative_costs.iter_mut().zip(&pivot_row) {
            *relative_cost = self.tolerance.trim(*relative_cost - factor * pivot_row_value);
        }
        self.relative_costs[pivot_column_index] = F::zero();
        self.objective += factor * pivot_b;

        let leaving_column = self.basis_indices[pivot_row_index];
        self.basis_indices[pivot_row_index] = pivot_column_index;
        self.basis_columns.remove(&leaving_column);
        self.basis_columns.insert(pivot_column_index);
    }

    /// Basic values are nonnegative; small negative values are rounding noise.
    fn clamp(&self, value: F) -> F {
        if value < F::zero() && self.tolerance.is_zero(value) {
            F::zero()
        } else {
            value
        }
    }

    /// Determine the row to pivot on, given the column.
    ///
    /// This is the row with the minimal ratio between the basic value and the positive column
    /// coefficient. Ratios within the tolerance of each other are ties.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering column.
    /// * `tie_break`: How to choose between rows with the same ratio.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded along this column.
    pub fn select_primal_pivot_row(&self, column: usize, tie_break: TieBreak) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        // (chosen row, minimum ratio)
        let mut chosen: Option<(usize, F)> = None;
        for (row, coefficient) in self.rows.column(column).enumerate() {
            if !self.tolerance.is_positive(coefficient) {
                continue;
            }

            let ratio = self.b[row].max(F::zero()) / coefficient;
            chosen = match chosen {
                None => Some((row, ratio)),
                Some((current, min_ratio)) => {
                    if self.tolerance.is_zero_relative(ratio - min_ratio, min_ratio) {
                        if self.is_preferred(row, current, column, tie_break) {
                            Some((row, ratio.min(min_ratio)))
                        } else {
                            Some((current, ratio.min(min_ratio)))
                        }
                    } else if ratio < min_ratio {
                        Some((row, ratio))
                    } else {
                        Some((current, min_ratio))
                    }
                },
            };
        }

        chosen.map(|(row, _)| row)
    }

    /// Whether `candidate` should leave instead of `current` when both have the same ratio.
    fn is_preferred(&self, candidate: usize, current: usize, column: usize, tie_break: TieBreak) -> bool {
        match tie_break {
            TieBreak::SmallestBasisIndex => self.basis_indices[candidate] < self.basis_indices[current],
            TieBreak::LargestPivot => self.rows[(candidate, column)] > self.rows[(current, column)],
        }
    }

    /// Remove rows from the tableau, together with their basic variables.
    ///
    /// # Arguments
    ///
    /// * `rows`: Sorted, unique row indices.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        for &row in rows {
            self.basis_columns.remove(&self.basis_indices[row]);
        }
        self.rows.remove_rows(rows);
        index_utils::remove_indices(&mut self.b, rows);
        index_utils::remove_indices(&mut self.basis_indices, rows);

        debug_assert_eq!(self.basis_columns.len(), self.nr_rows());
    }

    /// Relative cost of a column.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.relative_costs[j]
    }

    /// Coefficient of column `j` in row `i`, with respect to the current basis.
    pub fn coefficient(&self, i: usize, j: usize) -> F {
        self.rows[(i, j)]
    }

    /// Value of the basic variable of a row.
    pub fn basic_value(&self, i: usize) -> F {
        self.b[i]
    }

    /// Largest basic value, at least one.
    pub fn rhs_scale(&self) -> F {
        self.b.iter().fold(F::one(), |scale, value| scale.max(value.abs()))
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// Index of the column that is basic in a row.
    pub fn basis_column_index_for_row(&self, row: usize) -> usize {
        self.basis_indices[row]
    }

    /// Value of every column in the current basic feasible solution.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut values = vec![F::zero(); self.nr_columns()];
        for (&column, &value) in self.basis_indices.iter().zip(&self.b) {
            values[column] = value;
        }

        values
    }

    /// Value of every column that is not artificial in the current basic feasible solution.
    pub fn current_bfs_without_artificial(&self) -> Vec<F> {
        let mut values = self.current_bfs();
        values.drain(..self.nr_artificial_variables());

        values
    }

    /// Cost of the current basic feasible solution.
    pub fn objective_function_value(&self) -> F {
        self.objective
    }

    /// Tolerance used for all comparisons with zero.
    pub fn tolerance(&self) -> Tolerance<F> {
        self.tolerance
    }

    /// Number of artificial columns, which are the first columns of the tableau.
    pub fn nr_artificial_variables(&self) -> usize {
        self.kind.nr_artificial_variables()
    }

    /// Number of rows of the tableau, which equals the size of the basis.
    pub fn nr_rows(&self) -> usize {
        self.rows.nr_rows()
    }

    /// Number of columns, including artificial columns.
    pub fn nr_columns(&self) -> usize {
        self.rows.nr_columns()
    }
}

impl<F: Real> Tableau<F, Artificial> {
    /// Create a tableau with artificial variables for the rows that don't have a slack that can be
    /// used as a basis column.
    ///
    /// The cost of every artificial variable is one, all other costs are zero.
    pub fn new(provider: &StandardForm<F>, tolerance: Tolerance<F>) -> Self {
        let m = provider.nr_rows();

        let mut slack_for_row = vec![None; m];
        for (row, column) in provider.pivot_element_indices() {
            slack_for_row[row] = Some(column);
        }
        let nr_artificial = slack_for_row.iter().filter(|column| column.is_none()).count();

        let mut next_artificial = 0;
        let mut basis_indices = Vec::with_capacity(m);
        let mut rows = Vec::with_capacity(m);
        for (i, original_row) in provider.constraints().iter_rows().enumerate() {
            let mut row = vec![F::zero(); nr_artificial];
            match slack_for_row[i] {
                Some(column) => basis_indices.push(nr_artificial + column),
                None => {
                    row[next_artificial] = F::one();
                    basis_indices.push(next_artificial);
                    next_artificial += 1;
                },
            }
            row.extend_from_slice(original_row);
            rows.push(row);
        }

        let cost = repeat_n(F::one(), nr_artificial)
            .chain(repeat_n(F::zero(), provider.nr_columns()))
            .collect::<Vec<_>>();

        Self::from_parts(
            DenseMatrix::new(rows, nr_artificial + provider.nr_columns()),
            provider.b().to_vec(),
            basis_indices,
            &cost,
            tolerance,
            Artificial { nr_artificial },
        )
    }

    /// Rows for which the basic variable is artificial.
    pub fn rows_with_artificial_basis(&self) -> Vec<usize> {
        (0..self.nr_rows())
            .filter(|&i| self.basis_indices[i] < self.nr_artificial_variables())
            .collect()
    }

    /// Replace an artificial basic variable of value zero by a problem column.
    ///
    /// The basic value is set to exactly zero first, such that the pivot coefficient may have any
    /// sign without losing feasibility.
    pub fn pivot_out_artificial(&mut self, pivot_column_index: usize, pivot_row_index: usize) {
        debug_assert!(self.basis_indices[pivot_row_index] < self.nr_artificial_variables());
        debug_assert!(pivot_column_index >= self.nr_artificial_variables());

        self.b[pivot_row_index] = F::zero();
        self.bring_into_basis(pivot_column_index, pivot_row_index);
    }

    /// Create a tableau without artificial variables, with the same basis.
    ///
    /// The artificial columns are dropped and the cost row is recomputed with the cost of the
    /// problem.
    ///
    /// # Arguments
    ///
    /// * `provider`: Problem that was used to create this tableau.
    pub fn into_non_artificial(self, provider: &StandardForm<F>) -> Tableau<F, NonArtificial> {
        let nr_artificial = self.nr_artificial_variables();
        debug_assert!(self.basis_indices.iter().all(|&column| column >= nr_artificial));

        let mut rows = self.rows;
        rows.remove_leading_columns(nr_artificial);
        let basis_indices = self.basis_indices.into_iter()
            .map(|column| column - nr_artificial)
            .collect();

        Tableau::from_parts(rows, self.b, basis_indices, provider.cost(), self.tolerance, NonArtificial)
    }
}

impl<F: Real> Tableau<F, NonArtificial> {
    /// Create a tableau on the slack basis.
    ///
    /// The slack columns should form a full basis; see `StandardForm::has_full_initial_basis`.
    pub fn new(provider: &StandardForm<F>, tolerance: Tolerance<F>) -> Self {
        debug_assert!(provider.has_full_initial_basis());

        let basis_indices = provider.pivot_element_indices().into_iter()
            .map(|(_, column)| column)
            .collect();

        Self::from_parts(
            provider.constraints().clone(),
            provider.b().to_vec(),
            basis_indices,
            provider.cost(),
            tolerance,
            NonArtificial,
        )
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn is_in_basic_feasible_solution_state<F: Real, K: Kind>(tableau: &Tableau<F, K>) -> bool {
    // Correct number of basis columns, uniqueness is implied because it's a set
    if tableau.basis_columns.len() != tableau.nr_rows() || tableau.basis_indices.len() != tableau.nr_rows() {
        return false;
    }
    if tableau.basis_indices.iter().any(|column| !tableau.basis_columns.contains(column)) {
        return false;
    }

    // Basis columns are unit vectors with a zero relative cost
    tableau.basis_indices.iter().enumerate().all(|(row, &column)| {
        tableau.relative_costs[column] == F::zero()
            && tableau.rows.column(column).enumerate().all(|(i, value)| {
                if i == row { value == F::one() } else { value == F::zero() }
            })
    })
}

impl<F: Real, K: Kind> Display for Tableau<F, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = 10;

        writeln!(f, "=== Tableau ===")?;
        write!(f, "{:>4} | {:>width$} |", "", "b")?;
        for j in 0..self.nr_columns() {
            write!(f, " {j:>width$}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(4 + 3 + width + 2 + (width + 1) * self.nr_columns()))?;

        write!(f, "{:>4} | {:>width$.4} |", "cost", -self.objective)?;
        for cost in &self.relative_costs {
            write!(f, " {cost:>width$.4}")?;
        }
        writeln!(f)?;
        for (i, row) in self.rows.iter_rows().enumerate() {
            write!(f, "{i:>4} | {:>width$.4} |", self.b[i])?;
            for value in row {
                write!(f, " {value:>width$.4}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "=== Basis Columns ===")?;
        writeln!(f, "[{}]", self.basis_indices.iter().join(", "))
    }
}
