//! # Small problems with known solutions
use approx::assert_abs_diff_eq;

use relp_dense::{LinearProgram, Objective, PivotRuleKind, ProblemError, SolveResult, SolverOptions, Status, solve};

use crate::init_logging;

#[test]
fn oil_shipping() {
    init_logging();

    let bounds = [(1., f64::INFINITY), (5., f64::INFINITY)];
    let result = solve(&[1., 4.], &[vec![1., 1.]], &[8.], Some(&bounds), &SolverOptions::default()).unwrap();

    assert_eq!(result.status(), Status::Optimal);
    assert_eq!(result.message(), "optimization terminated successfully");
    assert_abs_diff_eq!(result.x()[0], 1., epsilon = 1e-9);
    assert_abs_diff_eq!(result.x()[1], 5., epsilon = 1e-9);
    assert_abs_diff_eq!(result.objective(), 21., epsilon = 1e-9);
}

#[test]
fn oil_shipping_as_constraints() {
    init_logging();

    let a_ub = [vec![1., 1.], vec![-1., 0.], vec![0., -1.]];
    let result = solve(&[1., 4.], &a_ub, &[8., -1., -5.], None, &SolverOptions::default()).unwrap();

    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.x()[0], 1., epsilon = 1e-9);
    assert_abs_diff_eq!(result.x()[1], 5., epsilon = 1e-9);
    assert_abs_diff_eq!(result.objective(), 21., epsilon = 1e-9);
    assert_abs_diff_eq!(result.objective(), result.engine_objective(), epsilon = 1e-9);
}

#[test]
fn repeated_solves_agree() {
    init_logging();

    let a_ub = [vec![1., 1.], vec![-1., 0.], vec![0., -1.]];
    let options = SolverOptions::default();
    let first = solve(&[1., 4.], &a_ub, &[8., -1., -5.], None, &options).unwrap();
    let second = solve(&[1., 4.], &a_ub, &[8., -1., -5.], None, &options).unwrap();

    assert_eq!(first, second);
}

#[test]
fn infeasible() {
    init_logging();

    // x >= 5 and x <= 1
    let result = solve(&[1.], &[vec![-1.], vec![1.]], &[-5., 1.], None, &SolverOptions::default()).unwrap();
    assert_eq!(result.status(), Status::Infeasible);
    assert!(!result.is_optimal());

    // The same, with the lower bound as a bound
    let bounds = [(5., f64::INFINITY)];
    let result = solve(&[1.], &[vec![1.]], &[1.], Some(&bounds), &SolverOptions::default()).unwrap();
    assert_eq!(result.status(), Status::Infeasible);
}

#[test]
fn contradicting_bounds() {
    let bounds = [(0., 1.), (5., 1.)];
    let result = solve(&[1., 1.], &[], &[], Some(&bounds), &SolverOptions::default());

    assert_eq!(result, Err(ProblemError::InvalidBounds { variable: 1, lower: 5., upper: 1. }));
}

#[test]
fn dimension_mismatch() {
    let result = solve(&[1., 1.], &[vec![1., 1.], vec![1.]], &[1., 1.], None, &SolverOptions::default());
    assert!(matches!(result, Err(ProblemError::Dimension { .. })));

    let result = solve(&[1., 1.], &[vec![1., 1.]], &[1., 1.], None, &SolverOptions::default());
    assert!(matches!(result, Err(ProblemError::Dimension { .. })));

    let result = solve(&[1., 1.], &[], &[], Some(&[(0., 1.)]), &SolverOptions::default());
    assert!(matches!(result, Err(ProblemError::Dimension { .. })));
}

#[test]
fn unbounded() {
    init_logging();

    let result = solve(&[-1.], &[], &[], None, &SolverOptions::default()).unwrap();
    assert_eq!(result.status(), Status::Unbounded);
    assert_eq!(result.objective(), f64::NEG_INFINITY);

    // Unbounded along a direction that is not a single variable
    let result = solve(&[-1., -1.], &[vec![1., -1.]], &[1.], None, &SolverOptions::default()).unwrap();
    assert_eq!(result.status(), Status::Unbounded);
}

/// Beale's example, on which Dantzig's rule with the lowest index tie break cycles.
fn beale() -> LinearProgram<f64> {
    LinearProgram::new(vec![-0.75, 20., -0.5, 6.]).unwrap()
        .with_inequalities(&[
            vec![0.25, -8., -1., 9.],
            vec![0.5, -12., -0.5, 3.],
            vec![0., 0., 1., 0.],
        ], &[0., 0., 1.]).unwrap()
}

fn assert_beale_optimum(result: &SolveResult<f64>) {
    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.objective(), -1.25, epsilon = 1e-9);
    for (&computed, expected) in result.x().iter().zip([1., 0., 1., 0.]) {
        assert_abs_diff_eq!(computed, expected, epsilon = 1e-9);
    }
}

#[test]
fn degenerate_cycling() {
    init_logging();

    let problem = beale();
    let options = SolverOptions::default();
    let result = problem.solve(&options);
    assert_beale_optimum(&result);
    // Stalls long enough for the switch to Bland's rule.
    assert!(result.iterations() > options.cycling_window);

    let without_fallback = problem.solve(&options.clone().with_cycling_window(usize::MAX));
    assert_beale_optimum(&without_fallback);
    assert!(result.iterations() < without_fallback.iterations());

    let result = problem.solve(&SolverOptions::default().with_pivot_rule(PivotRuleKind::Bland));
    assert_beale_optimum(&result);
    assert_eq!(result.iterations(), 6);
}

#[test]
fn iteration_limit() {
    init_logging();

    let options = SolverOptions::default().with_iteration_limit(2);
    let result = beale().solve(&options);

    assert_eq!(result.status(), Status::IterationLimit);
    assert_eq!(result.iterations(), 2);
    assert_eq!(result.x().len(), 4);
}

#[test]
fn maximize() {
    init_logging();

    let problem = LinearProgram::new(vec![1., 1.]).unwrap()
        .with_inequalities(&[vec![1., 2.], vec![3., 1.]], &[4., 6.]).unwrap()
        .with_objective(Objective::Maximize);

    for rule in [PivotRuleKind::Adaptive, PivotRuleKind::Dantzig, PivotRuleKind::Bland] {
        let result = problem.solve(&SolverOptions::default().with_pivot_rule(rule));

        assert_eq!(result.status(), Status::Optimal);
        assert_abs_diff_eq!(result.x()[0], 1.6, epsilon = 1e-9);
        assert_abs_diff_eq!(result.x()[1], 1.2, epsilon = 1e-9);
        assert_abs_diff_eq!(result.objective(), 2.8, epsilon = 1e-9);
    }
}

#[test]
fn redundant_equality() {
    init_logging();

    let problem = LinearProgram::new(vec![1., 2.]).unwrap()
        .with_equalities(&[vec![1., 1.], vec![2., 2.]], &[2., 4.]).unwrap();
    let result = problem.solve(&SolverOptions::default());

    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.x()[0], 2., epsilon = 1e-9);
    assert_abs_diff_eq!(result.x()[1], 0., epsilon = 1e-9);
    assert_abs_diff_eq!(result.objective(), 2., epsilon = 1e-9);
    for &residual in result.equality_residual() {
        assert_abs_diff_eq!(residual, 0., epsilon = 1e-9);
    }
}

#[test]
fn free_and_upper_bounded_variables() {
    init_logging();

    // minimize x1 - x2 subject to x1 + x2 >= -3, x1 free, x2 <= 2
    let bounds = [(f64::NEG_INFINITY, f64::INFINITY), (f64::NEG_INFINITY, 2.)];
    let result = solve(&[1., -1.], &[vec![-1., -1.]], &[3.], Some(&bounds), &SolverOptions::default()).unwrap();

    assert_eq!(result.status(), Status::Optimal);
    assert_abs_diff_eq!(result.x()[0], -5., epsilon = 1e-9);
    assert_abs_diff_eq!(result.x()[1], 2., epsilon = 1e-9);
    assert_abs_diff_eq!(result.objective(), -7., epsilon = 1e-9);
    assert_abs_diff_eq!(result.slack()[0], 0., epsilon = 1e-9);
}
