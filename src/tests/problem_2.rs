//! A small problem that exercises every variable substitution.
//!
//! ```text
//! minimize    2 x1 + x2 - x3
//! subject to  x1 - x2      <= 1
//!             x1 + x2 + x3 == 5
//!             x1 free, 0 <= x2 <= 4, x3 <= 3
//! ```
//!
//! Optimal solution `x = (-2, 4, 3)` with objective value `-3`.
use approx::assert_abs_diff_eq;

use crate::algorithm::SolverOptions;
use crate::algorithm::two_phase::{IterationCounter, Phase, phase_one, phase_two};
use crate::algorithm::two_phase::phase_one::{Rank, RankedFeasibilityResult};
use crate::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::tableau::kind::Artificial;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::Status;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::standard_form::{OriginalVariable, StandardForm};
use crate::data::number_types::float::Tolerance;

#[test]
fn conversion_pipeline() {
    // Standard form
    let standard_form = StandardForm::from(&linear_program());
    assert_eq!(standard_form.constraints(), &standard_form_constraints());
    assert_eq!(standard_form.b(), &[1., 2., 4.]);
    assert_eq!(standard_form.cost(), &[2., 1., 1., -2., 0., 0.]);
    assert_eq!(standard_form.fixed_cost(), -3.);
    assert_eq!(standard_form.original_variables(), &[
        OriginalVariable::Split(3),
        OriginalVariable::Shifted(0.),
        OriginalVariable::Flipped(3.),
    ]);
    assert_eq!(standard_form.pivot_element_indices(), vec![(0, 5), (2, 4)]);

    // Get to a basic feasible solution
    let options = SolverOptions::default();
    let mut counter = IterationCounter::new(100);
    let artificial = Tableau::<_, Artificial>::new(&standard_form, Tolerance::new(1e-9));
    let tableau = match phase_one::primal::<_, FirstProfitable>(artificial, &options, &mut counter) {
        RankedFeasibilityResult::Feasible { rank: Rank::Full, tableau } => tableau,
        other => panic!("expected a feasible, full rank result, got {other:?}"),
    };
    assert_eq!(counter.count(Phase::One), 2);

    // Optimize
    let mut tableau = tableau.into_non_artificial(&standard_form);
    let status = phase_two::primal::<_, FirstProfitable>(&mut tableau, &options, &mut counter);
    assert_eq!(status, Status::Optimal);
    assert_eq!(counter.count(Phase::Two), 2);
    assert_eq!(tableau.current_bfs(), vec![0., 4., 0., 2., 0., 7.]);
    assert_abs_diff_eq!(standard_form.original_objective(tableau.objective_function_value()), -3., epsilon = 1e-12);

    // Back to the original variables
    assert_eq!(standard_form.reconstruct(&tableau.current_bfs()), vec![-2., 4., 3.]);
}

#[test]
fn solve() {
    let problem = linear_program();
    let result = problem.solve(&SolverOptions::default());

    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.objective(), -3., epsilon = 1e-9);
    assert_abs_diff_eq!(result.engine_objective(), result.objective(), epsilon = 1e-9);
    assert_abs_diff_eq!(result.slack()[0], 7., epsilon = 1e-9);
    assert_abs_diff_eq!(result.equality_residual()[0], 0., epsilon = 1e-9);
    assert!(problem.is_feasible(result.x(), 1e-9));
}

pub fn linear_program() -> LinearProgram<f64> {
    LinearProgram::new(vec![2., 1., -1.]).unwrap()
        .with_inequalities(&[vec![1., -1., 0.]], &[1.]).unwrap()
        .with_equalities(&[vec![1., 1., 1.]], &[5.]).unwrap()
        .with_bounds(&[
            (f64::NEG_INFINITY, f64::INFINITY),
            (0., 4.),
            (f64::NEG_INFINITY, 3.),
        ]).unwrap()
}

/// Columns: `x1+`, `x2`, `3 - x3`, `x1-`, bound slack of `x2`, slack of the inequality.
pub fn standard_form_constraints() -> DenseMatrix<f64> {
    DenseMatrix::new(vec![
        vec![1., -1., 0., -1., 0., 1.],
        vec![1., 1., -1., -1., 0., 0.],
        vec![0., 1., 0., 0., 1., 0.],
    ], 6)
}
