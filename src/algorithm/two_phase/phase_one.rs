//! # Phase one
//!
//! Drive the artificial variables out of the basis to find a basic feasible solution.
use log::{debug, trace, warn};

use crate::algorithm::SolverOptions;
use crate::algorithm::two_phase::{IterationCounter, Phase};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::algorithm::two_phase::tableau::kind::Artificial;
use crate::data::number_types::float::Real;

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the standard form linear program is found.
///
/// # Arguments
///
/// * `tableau`: Artificial tableau with a valid basis. This basis will typically consist of
/// artificial variables and slack variables.
///
/// # Return value
///
/// Whether the problem has a basic feasible solution. If it does, the tableau is returned with
/// all artificial variables out of the basis and any redundant rows removed.
pub(crate) fn primal<F, PR>(
    mut tableau: Tableau<F, Artificial>,
    options: &SolverOptions<F>,
    counter: &mut IterationCounter,
) -> RankedFeasibilityResult<F>
where
    F: Real,
    PR: PivotRule<F>,
{
    let scale = tableau.rhs_scale();
    let mut rule = PR::new(options);
    loop {
        debug_assert!(is_in_basic_feasible_solution_state(&tableau));

        let Some((column_index, cost)) = rule.select_primal_pivot_column(&tableau) else {
            break;
        };
        let Some(row_index) = tableau.select_primal_pivot_row(column_index, rule.tie_break()) else {
            // The artificial cost is bounded from below by zero, so this is numerical noise
            warn!("Column {column_index} has relative cost {cost} but no pivot row, ending phase one");
            break;
        };
        if !counter.try_count(Phase::One) {
            return RankedFeasibilityResult::IterationLimit {
                values: tableau.current_bfs_without_artificial(),
            };
        }

        trace!(
            "Phase one pivot {}: column {column_index} (relative cost {cost}) replaces column {} in row {row_index}",
            counter.count(Phase::One), tableau.basis_column_index_for_row(row_index),
        );
        tableau.bring_into_basis(column_index, row_index);
        trace!("{tableau}");
        rule.after_basis_update(&tableau);
    }

    let infeasibility = tableau.objective_function_value();
    if !tableau.tolerance().is_zero_relative(infeasibility, scale) {
        debug!("Phase one ended with artificial cost {infeasibility}, the problem is infeasible");
        return RankedFeasibilityResult::Infeasible {
            values: tableau.current_bfs_without_artificial(),
        };
    }

    let rows_to_remove = remove_artificial_basis_variables(&mut tableau);
    let rank = if rows_to_remove.is_empty() {
        Rank::Full
    } else {
        tableau.remove_rows(&rows_to_remove);
        Rank::Deficient(rows_to_remove)
    };

    RankedFeasibilityResult::Feasible { rank, tableau }
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Debug, PartialEq)]
pub enum RankedFeasibilityResult<F> {
    /// The problem is feasible and the tableau holds a basic feasible solution without artificial
    /// basis columns.
    Feasible {
        /// Whether rows were removed.
        rank: Rank,
        /// Tableau in a basic feasible solution state.
        tableau: Tableau<F, Artificial>,
    },
    /// The problem is not feasible.
    Infeasible {
        /// The point that was closest to feasibility, for each problem column.
        values: Vec<F>,
    },
    /// The pivot budget ran out before a feasible solution was found.
    IterationLimit {
        /// The last point visited, for each problem column.
        values: Vec<F>,
    },
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices is provided, that when
/// removed, makes the matrix or linear program full rank.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// Removes all artificial variables from the basis by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// # Arguments
///
/// * `tableau`: Tableau to change the basis for.
///
/// # Return value
///
/// A `Vec` with indices of rows that are redundant: no problem column has a nonzero coefficient in
/// them. Is sorted as a side effect of the algorithm.
fn remove_artificial_basis_variables<F: Real>(tableau: &mut Tableau<F, Artificial>) -> Vec<usize> {
    let tolerance = tableau.tolerance();
    let mut rows_to_remove = Vec::new();

    for pivot_row in tableau.rows_with_artificial_basis() {
        // Largest coefficient in absolute value, for stability
        let pivot_column = (tableau.nr_artificial_variables()..tableau.nr_columns())
            .filter(|&j| !tableau.is_in_basis(j))
            .map(|j| (j, tableau.coefficient(pivot_row, j).abs()))
            .filter(|&(_, coefficient)| !tolerance.is_zero(coefficient))
            .fold(None, |best: Option<(usize, F)>, (j, coefficient)| match best {
                Some((_, best_coefficient)) if best_coefficient >= coefficient => best,
                _ => Some((j, coefficient)),
            });

        match pivot_column {
            Some((column, _)) => tableau.pivot_out_artificial(column, pivot_row),
            None => rows_to_remove.push(pivot_row),
        }
    }

    debug_assert!(rows_to_remove.is_sorted());
    rows_to_remove
}
