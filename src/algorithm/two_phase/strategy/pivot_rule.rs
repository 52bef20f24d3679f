//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use log::debug;

use crate::algorithm::SolverOptions;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::float::{Real, Tolerance};

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, the ratio test determines the row. The rule only decides how
/// ties in that test are broken.
pub trait PivotRule<F: Real> {
    /// Create a new instance.
    fn new(options: &SolverOptions<F>) -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// A column index with its (negative) relative cost, or `None` if no column improves the
    /// objective.
    fn select_primal_pivot_column<K: Kind>(&mut self, tableau: &Tableau<F, K>) -> Option<(usize, F)>;

    /// How ties in the ratio test should be broken for the next pivot.
    fn tie_break(&self) -> TieBreak {
        TieBreak::SmallestBasisIndex
    }

    /// Observe the tableau after a pivot was made.
    fn after_basis_update<K: Kind>(&mut self, _tableau: &Tableau<F, K>) {
    }
}

/// Choice between rows that have the same ratio in the ratio test.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TieBreak {
    /// The row whose basic variable has the lowest column index leaves (Bland).
    SmallestBasisIndex,
    /// The row with the largest pivot coefficient leaves.
    LargestPivot,
}

/// Columns that may enter the basis, with their relative cost.
///
/// Artificial variables have the lowest indices and never reenter.
fn candidates<F: Real, K: Kind>(tableau: &Tableau<F, K>) -> impl Iterator<Item = (usize, F)> + '_ {
    let tolerance = tableau.tolerance();

    (tableau.nr_artificial_variables()..tableau.nr_columns())
        .filter(move |&column| !tableau.is_in_basis(column))
        .map(move |column| (column, tableau.relative_cost(column)))
        .filter(move |&(_, cost)| tolerance.is_negative(cost))
}

/// Simply pivot on the first column which has a negative relative cost.
///
/// Together with breaking ties by the lowest basis index, this is Bland's rule; it never cycles.
pub struct FirstProfitable;

impl<F: Real> PivotRule<F> for FirstProfitable {
    fn new(_options: &SolverOptions<F>) -> Self {
        Self
    }

    fn select_primal_pivot_column<K: Kind>(&mut self, tableau: &Tableau<F, K>) -> Option<(usize, F)> {
        candidates(tableau).next()
    }
}

/// Pivot on the column with the most negative relative cost (Dantzig's rule).
///
/// Ties in the ratio test are broken by the size of the pivot element.
pub struct SteepestDescentAlongVariable;

impl<F: Real> PivotRule<F> for SteepestDescentAlongVariable {
    fn new(_options: &SolverOptions<F>) -> Self {
        Self
    }

    fn select_primal_pivot_column<K: Kind>(&mut self, tableau: &Tableau<F, K>) -> Option<(usize, F)> {
        most_negative(tableau)
    }

    fn tie_break(&self) -> TieBreak {
        TieBreak::LargestPivot
    }
}

fn most_negative<F: Real, K: Kind>(tableau: &Tableau<F, K>) -> Option<(usize, F)> {
    candidates(tableau).fold(None, |best, (column, cost)| match best {
        Some((_, best_cost)) if best_cost <= cost => best,
        _ => Some((column, cost)),
    })
}

/// Dantzig's rule with protection against cycling.
///
/// Ties in the ratio test are broken by the lowest basis index for the first pivots, and by the
/// largest pivot element after that. When the objective value does not strictly improve for a
/// number of consecutive pivots, the rule falls back to Bland's rule until it does.
pub struct Adaptive<F> {
    tie_break_threshold: usize,
    cycling_window: usize,
    tolerance: Tolerance<F>,

    nr_pivots: usize,
    best_objective: Option<F>,
    nr_stalled: usize,
    bland: bool,
}

impl<F: Real> PivotRule<F> for Adaptive<F> {
    fn new(options: &SolverOptions<F>) -> Self {
        Self {
            tie_break_threshold: options.tie_break_threshold,
            cycling_window: options.cycling_window,
            tolerance: Tolerance::new(options.epsilon),

            nr_pivots: 0,
            best_objective: None,
            nr_stalled: 0,
            bland: false,
        }
    }

    fn select_primal_pivot_column<K: Kind>(&mut self, tableau: &Tableau<F, K>) -> Option<(usize, F)> {
        if self.bland {
            candidates(tableau).next()
        } else {
            most_negative(tableau)
        }
    }

    fn tie_break(&self) -> TieBreak {
        if self.bland || self.nr_pivots < self.tie_break_threshold {
            TieBreak::SmallestBasisIndex
        } else {
            TieBreak::LargestPivot
        }
    }

    fn after_basis_update<K: Kind>(&mut self, tableau: &Tableau<F, K>) {
        self.nr_pivots += 1;

        let objective = tableau.objective_function_value();
        let improved = match self.best_objective {
            None => true,
            Some(best) => {
                best - objective > self.tolerance.epsilon() * best.abs().max(F::one())
            },
        };

        if improved {
            self.best_objective = Some(objective);
            self.nr_stalled = 0;
            if self.bland {
                debug!("Objective improved to {objective} after pivot {}, leaving Bland's rule", self.nr_pivots);
                self.bland = false;
            }
        } else {
            self.nr_stalled += 1;
            if !self.bland && self.nr_stalled >= self.cycling_window {
                debug!(
                    "No improvement for {} pivots, suspecting cycling and switching to Bland's rule",
                    self.nr_stalled,
                );
                self.bland = true;
            }
        }
    }
}

impl<F> Adaptive<F> {
    /// Whether the rule currently follows Bland's rule.
    pub fn is_bland(&self) -> bool {
        self.bland
    }
}
