//! # Number types
//!
//! The algorithms are generic over the floating point type they compute with. This module defines
//! what is needed from such a type, and how values are compared.
pub mod float;
