//! # Representing linear programs
//!
//! A linear program is provided by the user in general form, converted to standard form for the
//! simplex method and the outcome is reported back in terms of the general form.
pub mod elements;
pub mod general_form;
pub mod solution;
pub mod standard_form;
