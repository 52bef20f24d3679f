//! # Phase two
//!
//! Starting from a basic feasible solution, pivot until the cost can no longer be reduced.
use log::trace;

use crate::algorithm::SolverOptions;
use crate::algorithm::two_phase::{IterationCounter, Phase};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::algorithm::two_phase::tableau::kind::NonArtificial;
use crate::data::linear_program::elements::Status;
use crate::data::number_types::float::Real;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be positive (primary feasibility)
///
/// # Return value
///
/// A `Status` indicating whether the problem has a finite optimum. It cannot be infeasible, as a
/// feasible solution is needed to start using this method. The tableau is left in the last basis
/// that was visited.
pub(crate) fn primal<F, PR>(
    tableau: &mut Tableau<F, NonArtificial>,
    options: &SolverOptions<F>,
    counter: &mut IterationCounter,
) -> Status
where
    F: Real,
    PR: PivotRule<F>,
{
    let mut rule = PR::new(options);
    loop {
        debug_assert!(is_in_basic_feasible_solution_state(tableau));

        match rule.select_primal_pivot_column(tableau) {
            Some((column_index, cost)) => {
                match tableau.select_primal_pivot_row(column_index, rule.tie_break()) {
                    Some(row_index) => {
                        if !counter.try_count(Phase::Two) {
                            break Status::IterationLimit;
                        }

                        trace!(
                            "Phase two pivot {}: column {column_index} (relative cost {cost}) replaces column {} in row {row_index}",
                            counter.count(Phase::Two), tableau.basis_column_index_for_row(row_index),
                        );
                        tableau.bring_into_basis(column_index, row_index);
                        trace!("{tableau}");
                        rule.after_basis_update(tableau);
                    },
                    None => break Status::Unbounded,
                }
            },
            None => break Status::Optimal,
        }
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::SolverOptions;
    use crate::algorithm::two_phase::{IterationCounter, Phase, phase_two};
    use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
    use crate::algorithm::two_phase::tableau::kind::NonArtificial;
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::data::linear_program::elements::Status;
    use crate::data::linear_program::general_form::LinearProgram;
    use crate::data::linear_program::standard_form::StandardForm;
    use crate::data::number_types::float::Tolerance;

    fn standard_form() -> StandardForm<f64> {
        // maximize x0 + x1 subject to x0 + 2 x1 <= 4, 3 x0 + x1 <= 6
        let lp = LinearProgram::new(vec![-1., -1.]).unwrap()
            .with_inequalities(&[vec![1., 2.], vec![3., 1.]], &[4., 6.]).unwrap();
        StandardForm::from(&lp)
    }

    #[test]
    fn finite_optimum() {
        let options = SolverOptions::<f64>::default();
        let standard_form = standard_form();
        let mut tableau = Tableau::<_, NonArtificial>::new(&standard_form, Tolerance::new(1e-9));
        let mut counter = IterationCounter::new(100);

        let status = phase_two::primal::<_, FirstProfitable>(&mut tableau, &options, &mut counter);
        assert_eq!(status, Status::Optimal);
        assert_eq!(counter.count(Phase::Two), 2);
        assert_abs_diff_eq!(tableau.objective_function_value(), -2.8, epsilon = 1e-12);

        let values = tableau.current_bfs();
        assert_abs_diff_eq!(values[0], 1.6, epsilon = 1e-12);
        assert_abs_diff_eq!(values[1], 1.2, epsilon = 1e-12);
    }

    #[test]
    fn iteration_limit() {
        let options = SolverOptions::<f64>::default();
        let standard_form = standard_form();
        let mut tableau = Tableau::<_, NonArtificial>::new(&standard_form, Tolerance::new(1e-9));
        let mut counter = IterationCounter::new(1);

        let status = phase_two::primal::<_, SteepestDescentAlongVariable>(&mut tableau, &options, &mut counter);
        assert_eq!(status, Status::IterationLimit);
        assert_eq!(counter.total(), 1);
    }

    #[test]
    fn unbounded() {
        let options = SolverOptions::<f64>::default();
        let lp = LinearProgram::new(vec![-1., 0.]).unwrap()
            .with_inequalities(&[vec![1., -1.]], &[1.]).unwrap();
        let standard_form = StandardForm::from(&lp);
        let mut tableau = Tableau::<_, NonArtificial>::new(&standard_form, Tolerance::new(1e-9));
        let mut counter = IterationCounter::new(100);

        let status = phase_two::primal::<_, FirstProfitable>(&mut tableau, &options, &mut counter);
        assert_eq!(status, Status::Unbounded);
        assert_eq!(counter.total(), 1);
    }
}
