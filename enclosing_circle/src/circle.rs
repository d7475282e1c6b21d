use crate::core::{
    math::{vec2, Matrix2},
    traits::Real,
};
use crate::errors::CircleError;
use crate::point::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A circle is represented by a center [Point] and a `radius` (`radius >= 0`).
///
/// A circle is an enclosing circle for a point set if every point of the set lies inside or on
/// the circle, where "on" is tested with a small tolerance
/// ([containment_epsilon](crate::core::traits::Real::containment_epsilon)) to absorb floating
/// point error.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle<T = f64> {
    /// Center position of the circle.
    pub center: Point<T>,
    /// Radius of the circle (`radius >= 0`).
    pub radius: T,
}

impl<T> Circle<T>
where
    T: Real,
{
    /// Create a new circle from center point and radius.
    pub fn new(center: Point<T>, radius: T) -> Self {
        Circle { center, radius }
    }

    /// Degenerate circle at the origin with radius zero.
    pub fn zero() -> Self {
        Circle::new(Point::origin(), T::zero())
    }

    /// Returns true if `point` is inside or on the circle, using the default
    /// [containment_epsilon](crate::core::traits::Real::containment_epsilon) tolerance.
    pub fn contains_point(&self, point: Point<T>) -> bool {
        self.contains_point_eps(point, T::containment_epsilon())
    }

    /// Returns true if `point` is inside or on the circle, using the `epsilon` tolerance given.
    ///
    /// The test fuzzy compares squared distance against `radius * radius` so no square root is
    /// taken.
    pub fn contains_point_eps(&self, point: Point<T>, epsilon: T) -> bool {
        Point::distance_squared(self.center, point)
            .fuzzy_lt_eps(self.radius * self.radius, epsilon)
    }

    /// Fuzzy equal comparison with another circle using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.center.fuzzy_eq_eps(other.center, fuzzy_epsilon)
            && self.radius.fuzzy_eq_eps(other.radius, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another circle using T::fuzzy_epsilon().
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// The unique circle with `p0` and `p1` as diametrically opposite points.
    ///
    /// Center is the midpoint of the two points, radius is half the distance between them.
    pub fn from_diameter(p0: Point<T>, p1: Point<T>) -> Self {
        Circle::new(
            Point::midpoint(p0, p1),
            Point::distance(p0, p1) / T::two(),
        )
    }

    /// The unique circle passing through all three points given (the circumcircle).
    ///
    /// The center is found by solving the 2x2 linear system `[2*r1; 2*r2] * c = [r1.r1; r2.r2]`
    /// where `r1 = p1 - p0` and `r2 = p2 - p0`, with `c` the center offset from `p0`.
    ///
    /// Returns [CircleError::DegenerateTriple] if the points are exactly or near-exactly
    /// collinear, in which case no finite circumcircle exists.
    ///
    /// # Examples
    ///
    /// ```
    /// # use enclosing_circle::*;
    /// # use enclosing_circle::core::traits::*;
    /// let c = Circle::circumcircle(
    ///     Point::new(0.0, 1.0),
    ///     Point::new(1.0, 0.0),
    ///     Point::new(-1.0, 0.0),
    /// )
    /// .unwrap();
    /// assert!(c.center.fuzzy_eq(Point::new(0.0, 0.0)));
    /// assert!(c.radius.fuzzy_eq(1.0));
    /// ```
    pub fn circumcircle(p0: Point<T>, p1: Point<T>, p2: Point<T>) -> Result<Self, CircleError> {
        let r1 = p1 - p0;
        let r2 = p2 - p0;

        let a = Matrix2::from_rows(r1.scale(T::two()), r2.scale(T::two()));
        let b = vec2(r1.dot(r1), r2.dot(r2));

        let inverse = a.inverse().map_err(|_| CircleError::DegenerateTriple)?;
        let center = p0 + inverse.mul_vector(b);

        // taking the max distance over all three points rather than the offset length to absorb
        // rounding in the linear solve
        let radius = Point::distance(center, p0)
            .max(Point::distance(center, p1))
            .max(Point::distance(center, p2));

        Ok(Circle::new(center, radius))
    }

    /// Slice form of [Circle::from_diameter], requires exactly 2 points.
    ///
    /// Returns [CircleError::InvalidInputCount] if `points` does not contain exactly 2 points.
    pub fn from_two_points(points: &[Point<T>]) -> Result<Self, CircleError> {
        if let [p0, p1] = *points {
            Ok(Circle::from_diameter(p0, p1))
        } else {
            Err(CircleError::InvalidInputCount {
                expected: 2,
                actual: points.len(),
            })
        }
    }

    /// Slice form of [Circle::circumcircle], requires exactly 3 points.
    ///
    /// Returns [CircleError::InvalidInputCount] if `points` does not contain exactly 3 points,
    /// or [CircleError::DegenerateTriple] if the points are collinear.
    pub fn from_three_points(points: &[Point<T>]) -> Result<Self, CircleError> {
        if let [p0, p1, p2] = *points {
            Circle::circumcircle(p0, p1, p2)
        } else {
            Err(CircleError::InvalidInputCount {
                expected: 3,
                actual: points.len(),
            })
        }
    }
}
