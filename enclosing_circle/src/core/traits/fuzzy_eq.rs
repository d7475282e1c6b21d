/// Trait for fuzzy equality comparisons with floating point numbers.
///
/// The geometric predicates in this crate (circle containment, collinearity via a fuzzy zero
/// determinant, boundary checks in tests) compare values carrying accumulated floating point
/// error, so exact equality is rarely the right test. This trait provides the epsilon tolerant
/// comparisons those predicates are built on.
///
/// # Examples
///
/// ```
/// # use enclosing_circle::core::traits::*;
/// // a radius accumulated in two steps picks up rounding error
/// let r = 0.1 + 0.2;
///
/// // direct comparison fails
/// assert_ne!(r, 0.3);
///
/// // fuzzy comparison succeeds
/// assert!(r.fuzzy_eq(0.3));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Returns the default epsilon value for fuzzy comparisons.
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` if `self` and `other` are approximately equal, using a provided epsilon
    /// value.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Returns `true` if `self` and `other` are approximately equal, using the implemented
    /// [FuzzyEq::fuzzy_epsilon] value.
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if this value is approximately equal to zero, using a provided epsilon
    /// value.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    /// Returns `true` if this value is approximately equal to zero, using the implemented
    /// [FuzzyEq::fuzzy_epsilon] value.
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }
            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_eq!(f32, 1.0e-8);
impl_fuzzy_eq!(f64, 1.0e-8);
