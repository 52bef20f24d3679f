//! # Linear algebra primitives
//!
//! The solver works on dense data only.
pub mod matrix;
