//! # Tableau types: artificial or not
//!
//! A tableau can contain artificial variables. They can be used to find a feasible solution in a
//! two-phase algorithm: the first phase finds a basic feasible solution, the second improves it.
//!
//! The `Tableau` type and algorithm logic in the parent modules is independent of whether a
//! tableau contains artificial variables, or not. This module enables those abstractions.

/// The tableau type provides two different ways for the `Tableau` to function, depending on whether
/// any artificial variables are included in the problem.
pub trait Kind {
    /// Number of artificial columns.
    ///
    /// Artificial variables have the lowest indices, so this is also the index of the first column
    /// that belongs to the problem.
    fn nr_artificial_variables(&self) -> usize;
}

/// The tableau has artificial columns in front of the problem columns.
///
/// Only rows that lack a usable slack variable get an artificial variable.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Artificial {
    /// Number of rows, and so columns, that got an artificial variable.
    pub(crate) nr_artificial: usize,
}

impl Kind for Artificial {
    fn nr_artificial_variables(&self) -> usize {
        self.nr_artificial
    }
}

/// The tableau contains only columns of the problem.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NonArtificial;

impl Kind for NonArtificial {
    fn nr_artificial_variables(&self) -> usize {
        0
    }
}
