//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a book
//! by Christos H. Papadimitriou and Kenneth Steiglitz.
use enum_map::{Enum, EnumMap};
use log::debug;

use crate::algorithm::{PivotRuleKind, Relaxation, SolveRelaxation, SolverOptions};
use crate::algorithm::two_phase::phase_one::{Rank, RankedFeasibilityResult};
use crate::algorithm::two_phase::strategy::pivot_rule::{Adaptive, FirstProfitable, PivotRule, SteepestDescentAlongVariable};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::tableau::kind::{Artificial, NonArtificial};
use crate::data::linear_program::elements::Status;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::float::{Real, Tolerance};

pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;

/// The two phases of the method.
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Finding a basic feasible solution.
    One,
    /// Optimizing the cost of the problem.
    Two,
}

/// Counts pivots per phase against a shared budget.
#[derive(Debug, Clone)]
pub struct IterationCounter {
    counts: EnumMap<Phase, usize>,
    limit: usize,
}

impl IterationCounter {
    /// Start counting, allowing at most `limit` pivots in total.
    pub fn new(limit: usize) -> Self {
        Self { counts: EnumMap::default(), limit }
    }

    /// Count a pivot, if the budget allows it.
    ///
    /// # Return value
    ///
    /// `false` if the limit was already reached, in which case nothing is counted.
    pub fn try_count(&mut self, phase: Phase) -> bool {
        if self.total() >= self.limit {
            false
        } else {
            self.counts[phase] += 1;
            true
        }
    }

    /// Number of pivots made in a phase.
    pub fn count(&self, phase: Phase) -> usize {
        self.counts[phase]
    }

    /// Number of pivots made in both phases.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of pivots per phase.
    pub fn counts(&self) -> EnumMap<Phase, usize> {
        self.counts
    }
}

impl<F: Real> SolveRelaxation<F> for StandardForm<F> {
    fn solve_relaxation(&self, options: &SolverOptions<F>, iteration_limit: usize) -> Relaxation<F> {
        match options.pivot_rule {
            PivotRuleKind::Adaptive => solve_with::<_, Adaptive<F>>(self, options, iteration_limit),
            PivotRuleKind::Dantzig => solve_with::<_, SteepestDescentAlongVariable>(self, options, iteration_limit),
            PivotRuleKind::Bland => solve_with::<_, FirstProfitable>(self, options, iteration_limit),
        }
    }
}

/// Run both phases with a single pivot rule.
///
/// Phase one is skipped when the slack columns form a full basis.
fn solve_with<F, PR>(
    provider: &StandardForm<F>,
    options: &SolverOptions<F>,
    iteration_limit: usize,
) -> Relaxation<F>
where
    F: Real,
    PR: PivotRule<F>,
{
    let tolerance = Tolerance::new(options.epsilon);
    let mut counter = IterationCounter::new(iteration_limit);

    let mut tableau = if provider.has_full_initial_basis() {
        debug!("Slack columns form a basis, skipping phase one");
        Tableau::<_, NonArtificial>::new(provider, tolerance)
    } else {
        let artificial = Tableau::<_, Artificial>::new(provider, tolerance);
        debug!("Starting phase one with {} artificial variables", artificial.nr_artificial_variables());

        match phase_one::primal::<_, PR>(artificial, options, &mut counter) {
            RankedFeasibilityResult::Feasible { rank, tableau } => {
                if let Rank::Deficient(rows) = &rank {
                    debug!("Removed {} redundant rows: {rows:?}", rows.len());
                }
                tableau.into_non_artificial(provider)
            },
            RankedFeasibilityResult::Infeasible { values } => {
                return relaxation(provider, Status::Infeasible, values, &counter);
            },
            RankedFeasibilityResult::IterationLimit { values } => {
                return relaxation(provider, Status::IterationLimit, values, &counter);
            },
        }
    };

    let status = phase_two::primal::<_, PR>(&mut tableau, options, &mut counter);
    debug!(
        "Simplex method ended as {status} after {} + {} pivots",
        counter.count(Phase::One), counter.count(Phase::Two),
    );

    Relaxation {
        status,
        objective: tableau.objective_function_value(),
        values: tableau.current_bfs(),
        iterations: counter.counts(),
    }
}

fn relaxation<F: Real>(
    provider: &StandardForm<F>,
    status: Status,
    values: Vec<F>,
    counter: &IterationCounter,
) -> Relaxation<F> {
    debug!("Phase one ended as {status} after {} pivots", counter.count(Phase::One));

    Relaxation {
        status,
        objective: provider.cost_of(&values),
        values,
        iterations: counter.counts(),
    }
}
