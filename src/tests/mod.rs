//! # Tests that require a look inside the crate.
//!
//! Each problem module provides the problem in general form, and where useful, the intermediate
//! forms it goes through on the way to a solution.
pub mod problem_2;
