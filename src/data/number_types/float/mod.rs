//! # Floating point numbers
//!
//! The simplex engine works on primitive floats. Correctness guarantees are harder to give than
//! with exact arithmetic because of (accumulating) rounding errors, so every comparison that
//! matters goes through a `Tolerance`.
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::{Float, FromPrimitive};

/// All operations the solver needs from a floating point type.
pub trait Real:
    Float
    + FromPrimitive
    + Sum
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
{
}

macro_rules! impl_real {
    ($f_t:ident) => {
        impl Real for $f_t {}
    };
}
impl_real!(f64);
impl_real!(f32);

/// Absolute tolerance used to decide when a value is "numerically zero".
///
/// Values with a magnitude at most `epsilon` are treated as zero, both when deciding on optimality
/// and when selecting pivots.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance<F> {
    epsilon: F,
}

impl<F: Real> Tolerance<F> {
    /// Create a new tolerance.
    ///
    /// # Arguments
    ///
    /// * `epsilon`: Nonnegative threshold.
    pub fn new(epsilon: F) -> Self {
        debug_assert!(epsilon >= F::zero());

        Self { epsilon }
    }

    /// The threshold.
    pub fn epsilon(&self) -> F {
        self.epsilon
    }

    /// Whether the magnitude of `value` is at most epsilon.
    pub fn is_zero(&self, value: F) -> bool {
        value.abs() <= self.epsilon
    }

    /// Whether `value` exceeds epsilon.
    pub fn is_positive(&self, value: F) -> bool {
        value > self.epsilon
    }

    /// Whether `value` is below minus epsilon.
    pub fn is_negative(&self, value: F) -> bool {
        value < -self.epsilon
    }

    /// Whether a value is zero relative to the size of the numbers it was computed from.
    ///
    /// Scales below one are treated as one, such that this is never stricter than `is_zero`.
    pub fn is_zero_relative(&self, value: F, scale: F) -> bool {
        value.abs() <= self.epsilon * scale.abs().max(F::one())
    }

    /// Snap a value to exact zero when it is numerically zero.
    pub fn trim(&self, value: F) -> F {
        if self.is_zero(value) {
            F::zero()
        } else {
            value
        }
    }
}

/// Default threshold for a float type.
///
/// This is `1e-9`, unless the type is not precise enough for that to be meaningful.
pub fn default_epsilon<F: Real>() -> F {
    let requested = F::from_f64(1e-9).unwrap_or_else(F::epsilon);
    let hundred = F::from_u8(100).unwrap_or_else(F::one);

    requested.max(F::epsilon() * hundred)
}
