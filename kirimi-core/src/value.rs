//! Numeric bound for affinity values.
//!
//! Both drivers are generic over the real-number type carried on lifted
//! edges. The bound collects the ordered-field arithmetic the contraction
//! loop needs (comparison, zero, negation, addition, the balancing
//! division) plus a total order for the candidate queue, so callers can
//! pick the floating-point width that matches their affinity source.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Real-valued affinity arithmetic required by the contraction drivers.
///
/// Implementations must form a totally ordered field over the finite
/// values; [`AffinityValue::total_cmp`] supplies the total order used for
/// queue priorities, and [`AffinityValue::is_finite`] lets input
/// validation reject values the order cannot rank meaningfully.
///
/// # Examples
/// ```
/// use kirimi_core::AffinityValue;
///
/// assert_eq!(f32::from_count(4), 4.0);
/// assert!(f64::ZERO.is_finite());
/// ```
pub trait AffinityValue:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity; also the unit cluster size.
    const ONE: Self;

    /// Converts a vertex or merge count into the value domain.
    fn from_count(count: usize) -> Self;

    /// Totally ordered comparison, defined on all values including
    /// non-finite ones.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Returns `true` when the value is neither infinite nor NaN.
    fn is_finite(self) -> bool;
}

macro_rules! impl_affinity_value {
    ($($ty:ty),+) => {
        $(
            impl AffinityValue for $ty {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn from_count(count: usize) -> Self {
                    count as $ty
                }

                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$ty>::total_cmp(self, other)
                }

                fn is_finite(self) -> bool {
                    <$ty>::is_finite(self)
                }
            }
        )+
    };
}

impl_affinity_value!(f32, f64);
