use crate::core::{
    math::{vec2, Vector2},
    traits::Real,
};
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point is a position in the 2D plane, represented by a [Vector2] from the origin.
///
/// Points are plain values, collections of points copy them rather than reference them.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<T = f64> {
    /// Position of the point relative to the origin.
    pub pos: Vector2<T>,
}

impl<T> Point<T>
where
    T: Real,
{
    /// Create a new point from x and y coordinates.
    pub fn new(x: T, y: T) -> Self {
        Point { pos: vec2(x, y) }
    }

    /// Create a new point positioned by the vector given.
    pub fn from_vector2(pos: Vector2<T>) -> Self {
        Point { pos }
    }

    /// Point at the origin (0, 0).
    pub fn origin() -> Self {
        Point::from_vector2(Vector2::zero())
    }

    /// Distance between two points.
    pub fn distance(p1: Self, p2: Self) -> T {
        (p1.pos - p2.pos).length()
    }

    /// Squared distance between two points.
    pub fn distance_squared(p1: Self, p2: Self) -> T {
        (p1.pos - p2.pos).length_squared()
    }

    /// Linear interpolation from `p1` (`t = 0`) to `p2` (`t = 1`).
    pub fn lerp(t: T, p1: Self, p2: Self) -> Self {
        Point::from_vector2(p1.pos.lerp(p2.pos, t))
    }

    /// Point midway between `p1` and `p2`.
    pub fn midpoint(p1: Self, p2: Self) -> Self {
        Point::from_vector2(p1.pos.midpoint(p2.pos))
    }

    /// Fuzzy equal comparison with another point using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.pos.fuzzy_eq_eps(other.pos, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another point using T::fuzzy_epsilon().
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.pos.fuzzy_eq(other.pos)
    }
}

/// Translate a point by a vector.
impl<T: Real> ops::Add<Vector2<T>> for Point<T> {
    type Output = Point<T>;
    fn add(self, rhs: Vector2<T>) -> Self::Output {
        Point::from_vector2(self.pos + rhs)
    }
}

/// Displacement vector from `rhs` to `self`.
impl<T: Real> ops::Sub<Point<T>> for Point<T> {
    type Output = Vector2<T>;
    fn sub(self, rhs: Point<T>) -> Self::Output {
        self.pos - rhs.pos
    }
}
