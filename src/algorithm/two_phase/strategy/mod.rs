//! # Strategies
//!
//! Decisions the simplex method makes at every pivot.
pub mod pivot_rule;
