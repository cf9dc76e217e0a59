//! Edge weight abstraction.

use core::cmp::Ordering;
use core::fmt;
use num_traits::Float;

/// A floating-point edge weight.
///
/// Implemented for every `num_traits::Float` that can be printed, which in
/// practice means `f32` (the default) and `f64`.
pub trait Weight: Float + fmt::Debug + fmt::Display {}

impl<T: Float + fmt::Debug + fmt::Display> Weight for T {}

/// Orders weights with ordinary float comparison, placing NaN after every number.
///
/// No epsilon is applied: two numbers compare equal only if `==` holds, and
/// NaN compares equal to NaN.
#[inline]
pub fn compare<W: Weight>(a: W, b: W) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}
