//! # Randomly generated problems
//!
//! Every instance is generated from an explicit seed, such that failures can be reproduced.
use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rand_distr::StandardNormal;

use relp_dense::{LinearProgram, Phase, SolverOptions, Status, solve};

use crate::init_logging;

const NR_VARIABLES: usize = 70;
const NR_CONSTRAINTS: usize = 89;

fn normal_vector(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.sample(StandardNormal)).collect()
}

fn normal_matrix(rng: &mut StdRng, nr_rows: usize, nr_columns: usize) -> Vec<Vec<f64>> {
    (0..nr_rows).map(|_| normal_vector(rng, nr_columns)).collect()
}

/// Cost, constraint matrix and right hand side all drawn from a standard normal distribution.
///
/// Most of these problems are infeasible, the others are typically unbounded.
fn normal_problem(seed: u64) -> (Vec<f64>, Vec<Vec<f64>>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let c = normal_vector(&mut rng, NR_VARIABLES);
    let a_ub = normal_matrix(&mut rng, NR_CONSTRAINTS, NR_VARIABLES);
    let b_ub = normal_vector(&mut rng, NR_CONSTRAINTS);

    (c, a_ub, b_ub)
}

/// A problem with a normal constraint matrix that contains a known point and has a nonnegative
/// cost, such that it has a finite optimum.
///
/// # Return value
///
/// The problem and the known feasible point.
fn feasible_problem(seed: u64) -> (LinearProgram<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let c = normal_vector(&mut rng, NR_VARIABLES).into_iter().map(f64::abs).collect::<Vec<_>>();
    let a_ub = normal_matrix(&mut rng, NR_CONSTRAINTS, NR_VARIABLES);
    let x0 = (0..NR_VARIABLES).map(|_| rng.gen_range(0.0..1.0)).collect::<Vec<f64>>();
    let b_ub = a_ub.iter()
        .map(|row| {
            let lhs = row.iter().zip(&x0).map(|(a, x)| a * x).sum::<f64>();
            let margin: f64 = rng.sample(StandardNormal);
            lhs + margin.abs()
        })
        .collect::<Vec<_>>();

    let problem = LinearProgram::new(c).unwrap()
        .with_inequalities(&a_ub, &b_ub).unwrap();

    (problem, x0)
}

#[test]
fn normal_coefficients_terminate() {
    init_logging();

    for seed in 0..4 {
        let (c, a_ub, b_ub) = normal_problem(seed);
        let result = solve(&c, &a_ub, &b_ub, None, &SolverOptions::default()).unwrap();

        assert_ne!(result.status(), Status::IterationLimit, "seed {seed}");
        assert!(result.iterations() < 10 * (NR_VARIABLES + NR_CONSTRAINTS));
        assert_eq!(result.x().len(), NR_VARIABLES);
    }
}

#[test]
fn feasible_instances() {
    init_logging();

    for seed in 100..104 {
        let (problem, x0) = feasible_problem(seed);
        let result = problem.solve(&SolverOptions::default());

        assert_eq!(result.status(), Status::Optimal, "seed {seed}");
        assert!(result.iterations_in(Phase::One) > 0);
        assert!(problem.is_feasible(result.x(), 1e-6), "seed {seed}");
        assert!(result.slack().iter().all(|&slack| slack >= -1e-6));
        assert!(result.objective() <= problem.objective_value(&x0) + 1e-6);
        assert_relative_eq!(result.objective(), result.engine_objective(), epsilon = 1e-7, max_relative = 1e-7);
    }
}

#[test]
fn repeated_solves_agree() {
    let (problem, _) = feasible_problem(7);
    let options = SolverOptions::default();

    assert_eq!(problem.solve(&options), problem.solve(&options));
}

#[test]
fn concurrent_solves() {
    init_logging();

    let (problem, _) = feasible_problem(11);
    let options = SolverOptions::default();
    let sequential = problem.solve(&options);

    let results = std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| problem.solve(&options)))
            .collect::<Vec<_>>();
        handles.into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });

    assert!(results.iter().all(|result| result == &sequential));
}
