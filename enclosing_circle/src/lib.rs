//! 2D minimum enclosing circle library.
//!
//! Computes the smallest circle containing a finite set of 2D points (Welzl's randomized
//! incremental algorithm, expected O(n) time) together with a cheap O(n) heuristic bounding
//! circle usable as a baseline. The geometric primitives ([Point], [Circle] and the underlying
//! [Vector2](crate::core::math::Vector2)/[Matrix2](crate::core::math::Matrix2) math) are exposed
//! so callers can build on them directly.
mod circle;
mod enclosing;
mod errors;
mod point;

pub mod core;

pub use crate::circle::Circle;
pub use crate::enclosing::{
    heuristic_enclosing_circle, smallest_enclosing_circle, smallest_enclosing_circle_with_rng,
};
pub use crate::errors::CircleError;
pub use crate::point::Point;
