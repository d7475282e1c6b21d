use super::FuzzyOrd;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared and ordered.
pub trait Real:
    num_traits::real::Real + FuzzyOrd + std::default::Default + std::fmt::Debug + 'static
{
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Default tolerance used for circle containment tests, absorbs accumulated floating point
    /// error when testing points at or near a circle's boundary.
    #[inline]
    fn containment_epsilon() -> Self {
        Self::from(1.0e-4).unwrap()
    }
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }
}
